//! Knight move generation.

use crate::attacks::{KNIGHT_OFFSETS, knight_target};
use crate::board::Board;
use crate::chess_move::Move;
use crate::piece::Piece;
use crate::square::Square;

/// Generate pseudo-legal moves for a single knight.
pub(super) fn gen_knight(board: &Board, piece: Piece, from: Square, moves: &mut Vec<Move>) {
    for offset in KNIGHT_OFFSETS {
        let Some(to) = knight_target(from, offset) else {
            continue;
        };
        let victim = board.piece_on(to);
        if victim.is_some_and(|v| v.color() == piece.color()) {
            continue;
        }
        moves.push(Move::new(from, to, piece, victim));
    }
}
