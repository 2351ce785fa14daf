//! Attack detection by scanning outward from the target square.

use crate::board::Board;
use crate::color::Color;
use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::square::Square;

/// Index deltas for knight jumps.
pub(crate) const KNIGHT_OFFSETS: [i8; 8] = [-17, -15, -10, -6, 6, 10, 15, 17];

/// Index deltas for king steps.
pub(crate) const KING_OFFSETS: [i8; 8] = [-9, -8, -7, -1, 1, 7, 8, 9];

/// Ray directions for rooks, and half of the queen.
pub(crate) const ORTHOGONAL_DIRS: [i8; 4] = [-8, -1, 1, 8];

/// Ray directions for bishops, and the other half.
pub(crate) const DIAGONAL_DIRS: [i8; 4] = [-9, -7, 7, 9];

/// One step along a ray direction, rejecting steps that wrap around
/// the board edge.
///
/// Vertical steps keep their column and every other direction moves by
/// exactly one column; a step whose column changes by any other amount
/// has wrapped to the far side of the board.
#[inline]
pub(crate) fn ray_step(from: Square, dir: i8) -> Option<Square> {
    let to = from.offset(dir)?;
    let expected_cols = if dir % 8 == 0 { 0 } else { 1 };
    (from.col_distance(to) == expected_cols).then_some(to)
}

/// A knight jump by index delta, rejecting wrapped landings.
#[inline]
pub(crate) fn knight_target(from: Square, offset: i8) -> Option<Square> {
    let to = from.offset(offset)?;
    let rows = from.row_distance(to);
    let cols = from.col_distance(to);
    ((rows == 2 && cols == 1) || (rows == 1 && cols == 2)).then_some(to)
}

/// A king step by index delta, rejecting wrapped landings.
#[inline]
pub(crate) fn king_target(from: Square, offset: i8) -> Option<Square> {
    let to = from.offset(offset)?;
    (from.row_distance(to) <= 1 && from.col_distance(to) <= 1).then_some(to)
}

impl Board {
    /// Return `true` if any piece of color `by` attacks `sq`.
    ///
    /// Cover of a friendly piece counts as an attack; whether the
    /// attacker could legally move there is not considered.
    pub fn is_square_attacked(&self, sq: Square, by: Color) -> bool {
        // Pawns: step from the target back toward the attacker's origin.
        let pawn_sources: [i8; 2] = match by {
            Color::White => [7, 9],
            Color::Black => [-7, -9],
        };
        let pawn = Piece::new(PieceKind::Pawn, by);
        for dir in pawn_sources {
            if let Some(from) = ray_step(sq, dir)
                && self.piece_on(from) == Some(pawn)
            {
                return true;
            }
        }

        let knight = Piece::new(PieceKind::Knight, by);
        for offset in KNIGHT_OFFSETS {
            if let Some(from) = knight_target(sq, offset)
                && self.piece_on(from) == Some(knight)
            {
                return true;
            }
        }

        let king = Piece::new(PieceKind::King, by);
        for offset in KING_OFFSETS {
            if let Some(from) = king_target(sq, offset)
                && self.piece_on(from) == Some(king)
            {
                return true;
            }
        }

        // Sliders: the first piece along each ray decides.
        for dir in ORTHOGONAL_DIRS {
            if let Some(piece) = self.first_piece_along(sq, dir)
                && piece.color() == by
                && matches!(piece.kind(), PieceKind::Rook | PieceKind::Queen)
            {
                return true;
            }
        }
        for dir in DIAGONAL_DIRS {
            if let Some(piece) = self.first_piece_along(sq, dir)
                && piece.color() == by
                && matches!(piece.kind(), PieceKind::Bishop | PieceKind::Queen)
            {
                return true;
            }
        }

        false
    }

    /// Return `true` if the given side's king stands attacked.
    ///
    /// A board with no king for that side is never in check.
    pub fn is_in_check(&self, color: Color) -> bool {
        match self.king_square(color) {
            Some(king_sq) => self.is_square_attacked(king_sq, color.flip()),
            None => false,
        }
    }

    /// Walk a ray and return the first piece it runs into.
    fn first_piece_along(&self, from: Square, dir: i8) -> Option<Piece> {
        let mut current = from;
        while let Some(next) = ray_step(current, dir) {
            if let Some(piece) = self.piece_on(next) {
                return Some(piece);
            }
            current = next;
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::{knight_target, ray_step};
    use crate::board::Board;
    use crate::color::Color;
    use crate::piece::Piece;
    use crate::square::Square;

    fn attacked_by(board: &Board, by: Color) -> Vec<Square> {
        Square::all()
            .filter(|&sq| board.is_square_attacked(sq, by))
            .collect()
    }

    #[test]
    fn ray_step_rejects_edge_wraps() {
        // One square left of the a-file would wrap to the h-file
        assert_eq!(ray_step(Square::A4, -1), None);
        assert_eq!(ray_step(Square::H4, 1), None);
        // Diagonals wrap the same way
        assert_eq!(ray_step(Square::H4, -7), None);
        assert_eq!(ray_step(Square::A4, 7), None);
        // Vertical steps keep their column
        assert_eq!(ray_step(Square::A4, -8), Some(Square::A5));
        assert_eq!(ray_step(Square::E4, 9), Some(Square::F3));
    }

    #[test]
    fn knight_target_rejects_edge_wraps() {
        assert_eq!(knight_target(Square::A1, -17), None);
        assert_eq!(knight_target(Square::A1, -15), Some(Square::B3));
        assert_eq!(knight_target(Square::A1, -6), Some(Square::C2));
        assert_eq!(knight_target(Square::H4, -6), None);
    }

    #[test]
    fn rook_attacks_until_blocked() {
        let mut board = Board::empty();
        board.set_piece(Square::D4, Some(Piece::WHITE_ROOK));
        board.set_piece(Square::F4, Some(Piece::WHITE_PAWN));

        assert!(board.is_square_attacked(Square::D8, Color::White));
        assert!(board.is_square_attacked(Square::D1, Color::White));
        assert!(board.is_square_attacked(Square::A4, Color::White));
        assert!(board.is_square_attacked(Square::E4, Color::White));
        // The blocker itself is covered, the squares behind it are not
        assert!(board.is_square_attacked(Square::F4, Color::White));
        assert!(!board.is_square_attacked(Square::G4, Color::White));
        assert!(!board.is_square_attacked(Square::H4, Color::White));
        // No diagonal reach
        assert!(!board.is_square_attacked(Square::E5, Color::White));
    }

    #[test]
    fn bishop_attacks_do_not_wrap() {
        let mut board = Board::empty();
        board.set_piece(Square::H4, Some(Piece::BLACK_BISHOP));

        assert!(board.is_square_attacked(Square::G5, Color::Black));
        assert!(board.is_square_attacked(Square::D8, Color::Black));
        assert!(board.is_square_attacked(Square::G3, Color::Black));
        assert!(board.is_square_attacked(Square::E1, Color::Black));
        // Continuing past the h-file must not reappear on the a-file
        assert!(!board.is_square_attacked(Square::A5, Color::Black));
        assert!(!board.is_square_attacked(Square::A3, Color::Black));
        assert!(!board.is_square_attacked(Square::A4, Color::Black));
    }

    #[test]
    fn queen_reaches_across_an_open_row() {
        let mut board = Board::empty();
        board.set_piece(Square::A4, Some(Piece::WHITE_QUEEN));

        for sq in [
            Square::B4,
            Square::C4,
            Square::D4,
            Square::E4,
            Square::F4,
            Square::G4,
            Square::H4,
        ] {
            assert!(
                board.is_square_attacked(sq, Color::White),
                "queen on a4 should attack {sq}"
            );
        }
        assert!(board.is_square_attacked(Square::A8, Color::White));
        assert!(board.is_square_attacked(Square::E8, Color::White));
        assert!(!board.is_square_attacked(Square::B6, Color::White));
    }

    #[test]
    fn knight_in_the_corner_attacks_two_squares() {
        let mut board = Board::empty();
        board.set_piece(Square::A1, Some(Piece::WHITE_KNIGHT));
        assert_eq!(
            attacked_by(&board, Color::White),
            vec![Square::B3, Square::C2]
        );
    }

    #[test]
    fn pawns_attack_diagonally_forward() {
        let mut board = Board::empty();
        board.set_piece(Square::E4, Some(Piece::WHITE_PAWN));
        board.set_piece(Square::E5, Some(Piece::BLACK_PAWN));

        assert!(board.is_square_attacked(Square::D5, Color::White));
        assert!(board.is_square_attacked(Square::F5, Color::White));
        assert!(!board.is_square_attacked(Square::E5, Color::White));
        assert!(!board.is_square_attacked(Square::D4, Color::White));

        assert!(board.is_square_attacked(Square::D4, Color::Black));
        assert!(board.is_square_attacked(Square::F4, Color::Black));
        assert!(!board.is_square_attacked(Square::E4, Color::Black));
        assert!(!board.is_square_attacked(Square::D5, Color::Black));
    }

    #[test]
    fn pawn_on_the_edge_attacks_one_square() {
        let mut board = Board::empty();
        board.set_piece(Square::A4, Some(Piece::WHITE_PAWN));
        assert_eq!(attacked_by(&board, Color::White), vec![Square::B5]);

        let mut board = Board::empty();
        board.set_piece(Square::H5, Some(Piece::BLACK_PAWN));
        assert_eq!(attacked_by(&board, Color::Black), vec![Square::G4]);
    }

    #[test]
    fn king_attacks_its_neighborhood() {
        let mut board = Board::empty();
        board.set_piece(Square::A8, Some(Piece::BLACK_KING));
        assert_eq!(
            attacked_by(&board, Color::Black),
            vec![Square::B8, Square::A7, Square::B7]
        );
    }

    #[test]
    fn check_detection_respects_blockers() {
        let mut board = Board::empty();
        board.set_piece(Square::E1, Some(Piece::WHITE_KING));
        board.set_piece(Square::E8, Some(Piece::BLACK_ROOK));
        assert!(board.is_in_check(Color::White));

        board.set_piece(Square::E4, Some(Piece::BLACK_PAWN));
        assert!(!board.is_in_check(Color::White));
    }

    #[test]
    fn no_king_means_no_check() {
        let board = Board::empty();
        assert!(!board.is_in_check(Color::White));
        assert!(!board.is_in_check(Color::Black));
    }

    #[test]
    fn starting_position_checks_nothing() {
        let board = Board::new();
        assert!(!board.is_in_check(Color::White));
        assert!(!board.is_in_check(Color::Black));
        // The fourth rank is out of everyone's reach
        assert!(!board.is_square_attacked(Square::E4, Color::White));
        assert!(!board.is_square_attacked(Square::E4, Color::Black));
        // The third rank is covered by White's pawns
        assert!(board.is_square_attacked(Square::E3, Color::White));
    }
}
