//! Pawn move generation.

use crate::attacks::ray_step;
use crate::board::Board;
use crate::chess_move::Move;
use crate::color::Color;
use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::square::Square;

/// Promotion targets in the order they are emitted.
const PROMOTION_KINDS: [PieceKind; 4] = [
    PieceKind::Queen,
    PieceKind::Rook,
    PieceKind::Bishop,
    PieceKind::Knight,
];

/// Generate pseudo-legal moves for a single pawn.
pub(super) fn gen_pawn(board: &Board, piece: Piece, from: Square, moves: &mut Vec<Move>) {
    let color = piece.color();
    let (push_dir, start_row, promo_row): (i8, u8, u8) = match color {
        Color::White => (-8, 6, 0),
        Color::Black => (8, 1, 7),
    };

    // --- Pushes ---
    if let Some(one) = ray_step(from, push_dir)
        && !board.is_occupied(one)
    {
        if one.row() == promo_row {
            for kind in PROMOTION_KINDS {
                moves.push(Move::new_promotion(from, one, piece, kind, None));
            }
        } else {
            moves.push(Move::new(from, one, piece, None));
            // The double push is only open while the single push is.
            if from.row() == start_row
                && let Some(two) = ray_step(one, push_dir)
                && !board.is_occupied(two)
            {
                moves.push(Move::new_double_push(from, two, piece));
            }
        }
    }

    // --- Captures ---
    for dir in [push_dir - 1, push_dir + 1] {
        let Some(to) = ray_step(from, dir) else {
            continue;
        };
        if let Some(victim) = board.piece_on(to) {
            if victim.color() == color {
                continue;
            }
            if to.row() == promo_row {
                for kind in PROMOTION_KINDS {
                    moves.push(Move::new_promotion(from, to, piece, kind, Some(victim)));
                }
            } else {
                moves.push(Move::new(from, to, piece, Some(victim)));
            }
        } else if board.en_passant() == Some(to) {
            // The victim stands beside the pawn, not on the target square.
            let victim = Piece::new(PieceKind::Pawn, color.flip());
            moves.push(Move::new_en_passant(from, to, piece, victim));
        }
    }
}
