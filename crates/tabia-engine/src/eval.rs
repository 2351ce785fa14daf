//! Material evaluation.
//!
//! Counts weighted material for both sides and reports the balance from
//! the perspective of the side to move (positive = the mover is ahead).

use tabia_core::{Board, PieceKind, Square};

/// Base material values in centipawns, indexed by [`PieceKind::index()`].
///
/// | Piece  | value  |
/// |--------|--------|
/// | Pawn   |    100 |
/// | Knight |    320 |
/// | Bishop |    330 |
/// | Rook   |    500 |
/// | Queen  |    900 |
/// | King   | 20,000 |
pub const PIECE_VALUE: [i32; PieceKind::COUNT] = [
    100,    // Pawn
    320,    // Knight
    330,    // Bishop
    500,    // Rook
    900,    // Queen
    20_000, // King
];

/// Evaluate material balance from the side to move's perspective.
///
/// Scans the board once, adding the value of the mover's pieces and
/// subtracting the opponent's. With both kings on the board their
/// values cancel, so the balance stays in ordinary centipawn range.
pub fn evaluate(board: &Board) -> i32 {
    let us = board.side_to_move();
    let mut score = 0;

    for sq in Square::all() {
        let Some(piece) = board.piece_on(sq) else {
            continue;
        };
        let value = PIECE_VALUE[piece.kind().index()];
        if piece.color() == us {
            score += value;
        } else {
            score -= value;
        }
    }

    score
}

#[cfg(test)]
mod tests {
    use tabia_core::{Board, Color, Piece, PieceKind, Square};

    use super::{PIECE_VALUE, evaluate};

    #[test]
    fn starting_position_is_balanced() {
        assert_eq!(evaluate(&Board::new()), 0);
    }

    #[test]
    fn a_missing_queen_swings_the_balance() {
        let mut board = Board::new();
        board.set_piece(Square::D8, None);

        let queen_value = PIECE_VALUE[PieceKind::Queen.index()];
        assert_eq!(evaluate(&board), queen_value);

        // The same position scored for the other side flips the sign.
        board.set_side_to_move(Color::Black);
        assert_eq!(evaluate(&board), -queen_value);
    }

    #[test]
    fn kings_cancel_each_other() {
        let mut board = Board::empty();
        board.set_piece(Square::E1, Some(Piece::WHITE_KING));
        board.set_piece(Square::E8, Some(Piece::BLACK_KING));
        assert_eq!(evaluate(&board), 0);
    }

    #[test]
    fn the_balance_sums_every_piece() {
        // Two pawns for White against a rook for Black.
        let mut board = Board::empty();
        board.set_piece(Square::E1, Some(Piece::WHITE_KING));
        board.set_piece(Square::E8, Some(Piece::BLACK_KING));
        board.set_piece(Square::A2, Some(Piece::WHITE_PAWN));
        board.set_piece(Square::B2, Some(Piece::WHITE_PAWN));
        board.set_piece(Square::H8, Some(Piece::BLACK_ROOK));
        assert_eq!(evaluate(&board), 100 + 100 - 500);
    }
}
