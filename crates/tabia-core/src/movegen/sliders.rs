//! Sliding piece (bishop, rook, queen) move generation.

use crate::attacks::{DIAGONAL_DIRS, ORTHOGONAL_DIRS, ray_step};
use crate::board::Board;
use crate::chess_move::Move;
use crate::piece::Piece;
use crate::square::Square;

/// Generate pseudo-legal moves for a single bishop.
pub(super) fn gen_bishop(board: &Board, piece: Piece, from: Square, moves: &mut Vec<Move>) {
    walk_rays(board, piece, from, DIAGONAL_DIRS, moves);
}

/// Generate pseudo-legal moves for a single rook.
pub(super) fn gen_rook(board: &Board, piece: Piece, from: Square, moves: &mut Vec<Move>) {
    walk_rays(board, piece, from, ORTHOGONAL_DIRS, moves);
}

/// Generate pseudo-legal moves for a single queen.
pub(super) fn gen_queen(board: &Board, piece: Piece, from: Square, moves: &mut Vec<Move>) {
    walk_rays(board, piece, from, ORTHOGONAL_DIRS, moves);
    walk_rays(board, piece, from, DIAGONAL_DIRS, moves);
}

/// Walk each ray until the board edge or the first piece stops it.
fn walk_rays(board: &Board, piece: Piece, from: Square, dirs: [i8; 4], moves: &mut Vec<Move>) {
    for dir in dirs {
        let mut current = from;
        while let Some(to) = ray_step(current, dir) {
            match board.piece_on(to) {
                None => {
                    moves.push(Move::new(from, to, piece, None));
                    current = to;
                }
                Some(victim) => {
                    if victim.color() != piece.color() {
                        moves.push(Move::new(from, to, piece, Some(victim)));
                    }
                    break;
                }
            }
        }
    }
}
