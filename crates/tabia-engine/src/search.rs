//! One-ply move selection.

use tabia_core::{Board, Move, legal_moves};
use tracing::debug;

use crate::eval::evaluate;

/// Pick the move leaving the opponent with the worst material balance.
///
/// Every legal move is applied, scored with [`evaluate`] from the
/// opponent's seat (then negated), and undone. Ties keep the move that
/// was generated first. Returns `None` when the side to move has no
/// legal moves, which is checkmate or stalemate.
pub fn pick_best_move(board: &mut Board) -> Option<Move> {
    let mut best: Option<Move> = None;
    let mut best_score = i32::MIN;

    for mv in legal_moves(board) {
        board.apply_move(mv);
        let score = -evaluate(board);
        board.undo_move();

        if score > best_score {
            best = Some(mv);
            best_score = score;
        }
    }

    if let Some(mv) = best {
        debug!(best = %mv, score = best_score, "picked move");
    }
    best
}
