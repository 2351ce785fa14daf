//! King move and castling generation.

use crate::attacks::{KING_OFFSETS, king_target};
use crate::board::Board;
use crate::castle_rights::CastleSide;
use crate::chess_move::Move;
use crate::piece::Piece;
use crate::square::Square;

/// Generate pseudo-legal king moves, castling included.
pub(super) fn gen_king(board: &Board, piece: Piece, from: Square, moves: &mut Vec<Move>) {
    for offset in KING_OFFSETS {
        let Some(to) = king_target(from, offset) else {
            continue;
        };
        let victim = board.piece_on(to);
        if victim.is_some_and(|v| v.color() == piece.color()) {
            continue;
        }
        moves.push(Move::new(from, to, piece, victim));
    }

    gen_castles(board, piece, from, moves);
}

/// Castling needs intact rights, an empty lane to the rook, and neither
/// the king's square nor the two squares it crosses under attack.
fn gen_castles(board: &Board, piece: Piece, from: Square, moves: &mut Vec<Move>) {
    let us = piece.color();
    let them = us.flip();

    if board.king_moved(us) || board.is_in_check(us) {
        return;
    }

    // Kingside: the rook sits three squares to the king's right.
    if !board.rook_moved(us, CastleSide::KingSide)
        && let Some(rook_home) = from.offset(3)
        && board.empty_between(from, rook_home)
        && let Some(one) = from.offset(1)
        && !board.is_square_attacked(one, them)
        && let Some(two) = from.offset(2)
        && !board.is_square_attacked(two, them)
    {
        moves.push(Move::new_castle(from, two, piece, CastleSide::KingSide));
    }

    // Queenside: four squares to the left. The square beside the rook only
    // has to be empty, not safe, since the king never touches it.
    if !board.rook_moved(us, CastleSide::QueenSide)
        && let Some(rook_home) = from.offset(-4)
        && board.empty_between(from, rook_home)
        && let Some(one) = from.offset(-1)
        && !board.is_square_attacked(one, them)
        && let Some(two) = from.offset(-2)
        && !board.is_square_attacked(two, them)
    {
        moves.push(Move::new_castle(from, two, piece, CastleSide::QueenSide));
    }
}
