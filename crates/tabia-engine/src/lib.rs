//! Evaluation and move selection for tabia.

pub mod eval;
pub mod search;

pub use eval::{PIECE_VALUE, evaluate};
pub use search::pick_best_move;
