//! Move generation: pseudo-legal per piece, filtered down to legal.

mod king;
mod knights;
mod pawns;
mod sliders;

use crate::board::Board;
use crate::chess_move::Move;
use crate::color::Color;
use crate::piece_kind::PieceKind;
use crate::square::Square;

use self::king::gen_king;
use self::knights::gen_knight;
use self::pawns::gen_pawn;
use self::sliders::{gen_bishop, gen_queen, gen_rook};

/// Generate every pseudo-legal move for `side`, scanning the board in
/// index order.
///
/// Pseudo-legal means piece movement rules are honored but the mover's
/// king may be left attacked; [`legal_moves`] filters those out.
pub fn pseudo_legal_moves(board: &Board, side: Color) -> Vec<Move> {
    let mut moves = Vec::new();
    for from in Square::all() {
        let Some(piece) = board.piece_on(from) else {
            continue;
        };
        if piece.color() != side {
            continue;
        }
        match piece.kind() {
            PieceKind::Pawn => gen_pawn(board, piece, from, &mut moves),
            PieceKind::Knight => gen_knight(board, piece, from, &mut moves),
            PieceKind::Bishop => gen_bishop(board, piece, from, &mut moves),
            PieceKind::Rook => gen_rook(board, piece, from, &mut moves),
            PieceKind::Queen => gen_queen(board, piece, from, &mut moves),
            PieceKind::King => gen_king(board, piece, from, &mut moves),
        }
    }
    moves
}

/// Generate all legal moves for the side to move.
///
/// Each pseudo-legal move is tried on the board and kept when it does
/// not leave the mover's king attacked. The board comes back unchanged.
pub fn legal_moves(board: &mut Board) -> Vec<Move> {
    let side = board.side_to_move();
    let mut legal = Vec::new();
    for mv in pseudo_legal_moves(board, side) {
        board.apply_move(mv);
        if !board.is_in_check(side) {
            legal.push(mv);
        }
        board.undo_move();
    }
    legal
}

#[cfg(test)]
mod tests {
    use super::legal_moves;
    use crate::board::Board;
    use crate::castle_rights::CastleRights;
    use crate::chess_move::{Move, MoveKind};
    use crate::color::Color;
    use crate::piece::Piece;
    use crate::square::Square;

    /// Kings plus both White rooks at home, White rights set, White to move.
    fn castling_board() -> Board {
        let mut board = Board::empty();
        board.set_piece(Square::E1, Some(Piece::WHITE_KING));
        board.set_piece(Square::A1, Some(Piece::WHITE_ROOK));
        board.set_piece(Square::H1, Some(Piece::WHITE_ROOK));
        board.set_piece(Square::E8, Some(Piece::BLACK_KING));
        board.set_castling(CastleRights::WHITE_BOTH);
        board
    }

    fn castle_dests(board: &mut Board) -> Vec<Square> {
        legal_moves(board)
            .into_iter()
            .filter(|mv| mv.is_castle())
            .map(|mv| mv.dest())
            .collect()
    }

    #[test]
    fn starting_position_has_twenty_moves() {
        let mut board = Board::new();
        let moves = legal_moves(&mut board);
        assert_eq!(moves.len(), 20, "got: {moves:?}");
    }

    #[test]
    fn generation_leaves_the_board_unchanged() {
        let mut board = Board::new();
        let before = board.clone();
        legal_moves(&mut board);
        assert_eq!(board, before);
    }

    #[test]
    fn both_castles_generate_on_an_open_row() {
        let mut board = castling_board();
        assert_eq!(castle_dests(&mut board), vec![Square::G1, Square::C1]);
    }

    #[test]
    fn black_castles_mirror_white() {
        let mut board = Board::empty();
        board.set_piece(Square::E8, Some(Piece::BLACK_KING));
        board.set_piece(Square::A8, Some(Piece::BLACK_ROOK));
        board.set_piece(Square::H8, Some(Piece::BLACK_ROOK));
        board.set_piece(Square::E1, Some(Piece::WHITE_KING));
        board.set_castling(CastleRights::BLACK_BOTH);
        board.set_side_to_move(Color::Black);
        assert_eq!(castle_dests(&mut board), vec![Square::G8, Square::C8]);
    }

    #[test]
    fn castling_requires_rights() {
        let mut board = castling_board();
        board.set_castling(CastleRights::NONE);
        assert!(castle_dests(&mut board).is_empty());

        board.set_castling(CastleRights::WHITE_KING);
        assert_eq!(castle_dests(&mut board), vec![Square::G1]);

        board.set_castling(CastleRights::WHITE_QUEEN);
        assert_eq!(castle_dests(&mut board), vec![Square::C1]);
    }

    #[test]
    fn no_castling_while_in_check() {
        let mut board = castling_board();
        board.set_piece(Square::E4, Some(Piece::BLACK_ROOK));
        assert!(castle_dests(&mut board).is_empty());
    }

    #[test]
    fn no_castling_through_pieces() {
        let mut board = castling_board();
        board.set_piece(Square::F1, Some(Piece::WHITE_BISHOP));
        assert_eq!(castle_dests(&mut board), vec![Square::C1]);

        let mut board = castling_board();
        board.set_piece(Square::B1, Some(Piece::WHITE_KNIGHT));
        assert_eq!(castle_dests(&mut board), vec![Square::G1]);
    }

    #[test]
    fn no_castling_across_attacked_squares() {
        // A rook eyeing f1 blocks the kingside lane only
        let mut board = castling_board();
        board.set_piece(Square::F4, Some(Piece::BLACK_ROOK));
        assert_eq!(castle_dests(&mut board), vec![Square::C1]);

        // One eyeing d1 blocks the queenside lane only
        let mut board = castling_board();
        board.set_piece(Square::D4, Some(Piece::BLACK_ROOK));
        assert_eq!(castle_dests(&mut board), vec![Square::G1]);

        // The landing squares count as well
        let mut board = castling_board();
        board.set_piece(Square::G4, Some(Piece::BLACK_ROOK));
        assert_eq!(castle_dests(&mut board), vec![Square::C1]);

        let mut board = castling_board();
        board.set_piece(Square::C4, Some(Piece::BLACK_ROOK));
        assert_eq!(castle_dests(&mut board), vec![Square::G1]);
    }

    #[test]
    fn queenside_b_square_may_be_attacked() {
        // b1 is crossed by the rook, not the king, so an attack on it
        // does not forbid the castle
        let mut board = castling_board();
        board.set_piece(Square::B4, Some(Piece::BLACK_ROOK));
        assert_eq!(castle_dests(&mut board), vec![Square::G1, Square::C1]);
    }

    #[test]
    fn pinned_bishop_has_no_moves() {
        let mut board = Board::empty();
        board.set_piece(Square::E1, Some(Piece::WHITE_KING));
        board.set_piece(Square::E2, Some(Piece::WHITE_BISHOP));
        board.set_piece(Square::E8, Some(Piece::BLACK_ROOK));
        board.set_piece(Square::A8, Some(Piece::BLACK_KING));

        let bishop_moves: Vec<Move> = legal_moves(&mut board)
            .into_iter()
            .filter(|mv| mv.source() == Square::E2)
            .collect();
        assert!(bishop_moves.is_empty(), "got: {bishop_moves:?}");
    }

    #[test]
    fn checks_must_be_answered() {
        let mut board = Board::empty();
        board.set_piece(Square::E1, Some(Piece::WHITE_KING));
        board.set_piece(Square::E8, Some(Piece::BLACK_KING));
        board.set_piece(Square::E5, Some(Piece::BLACK_ROOK));
        board.set_piece(Square::A2, Some(Piece::WHITE_ROOK));

        let moves = legal_moves(&mut board);
        // Block on e2, capture nothing, or step off the e-file
        for mv in &moves {
            let mut probe = board.clone();
            probe.apply_move(*mv);
            assert!(
                !probe.is_in_check(Color::White),
                "{mv} leaves the king in check"
            );
        }
        assert!(moves.iter().any(|mv| mv.dest() == Square::E2 && mv.source() == Square::A2));
        assert!(moves.iter().any(|mv| mv.source() == Square::E1 && mv.dest() == Square::D1));
    }

    #[test]
    fn mated_king_has_no_moves() {
        // Queen on e2 backed by the rook on e8
        let mut board = Board::empty();
        board.set_piece(Square::E1, Some(Piece::WHITE_KING));
        board.set_piece(Square::E2, Some(Piece::BLACK_QUEEN));
        board.set_piece(Square::E8, Some(Piece::BLACK_ROOK));
        board.set_piece(Square::A8, Some(Piece::BLACK_KING));

        assert!(board.is_in_check(Color::White));
        assert!(legal_moves(&mut board).is_empty());
    }

    #[test]
    fn stalemated_side_has_no_moves() {
        let mut board = Board::empty();
        board.set_piece(Square::H8, Some(Piece::BLACK_KING));
        board.set_piece(Square::F7, Some(Piece::WHITE_KING));
        board.set_piece(Square::G6, Some(Piece::WHITE_QUEEN));
        board.set_side_to_move(Color::Black);

        assert!(!board.is_in_check(Color::Black));
        assert!(legal_moves(&mut board).is_empty());
    }

    #[test]
    fn promotion_expands_to_four_moves() {
        let mut board = Board::empty();
        board.set_piece(Square::E1, Some(Piece::WHITE_KING));
        board.set_piece(Square::H8, Some(Piece::BLACK_KING));
        board.set_piece(Square::A7, Some(Piece::WHITE_PAWN));

        let promotions: Vec<Move> = legal_moves(&mut board)
            .into_iter()
            .filter(|mv| mv.kind() == MoveKind::Promotion)
            .collect();
        assert_eq!(promotions.len(), 4);
        assert!(promotions.iter().all(|mv| mv.dest() == Square::A8));
        let names: Vec<String> = promotions.iter().map(|mv| mv.to_string()).collect();
        assert_eq!(names, vec!["a7a8q", "a7a8r", "a7a8b", "a7a8n"]);
    }

    #[test]
    fn capture_promotions_expand_to_four_as_well() {
        let mut board = Board::empty();
        board.set_piece(Square::E1, Some(Piece::WHITE_KING));
        board.set_piece(Square::H8, Some(Piece::BLACK_KING));
        board.set_piece(Square::A7, Some(Piece::WHITE_PAWN));
        board.set_piece(Square::B8, Some(Piece::BLACK_ROOK));

        let promotions: Vec<Move> = legal_moves(&mut board)
            .into_iter()
            .filter(|mv| mv.kind() == MoveKind::Promotion)
            .collect();

        // Four straight ahead onto a8, four taking the rook on b8.
        assert_eq!(promotions.len(), 8);
        let captures: Vec<&Move> = promotions.iter().filter(|mv| mv.is_capture()).collect();
        assert_eq!(captures.len(), 4);
        assert!(captures.iter().all(|mv| mv.dest() == Square::B8));
        assert!(
            captures
                .iter()
                .all(|mv| mv.captured() == Some(Piece::BLACK_ROOK))
        );
    }

    #[test]
    fn en_passant_only_while_the_window_is_open() {
        let mut board = Board::new();
        board.apply_move(Move::new_double_push(Square::E2, Square::E4, Piece::WHITE_PAWN));
        board.apply_move(Move::new(Square::A7, Square::A6, Piece::BLACK_PAWN, None));
        board.apply_move(Move::new(Square::E4, Square::E5, Piece::WHITE_PAWN, None));
        board.apply_move(Move::new_double_push(Square::D7, Square::D5, Piece::BLACK_PAWN));

        let ep: Vec<Move> = legal_moves(&mut board)
            .into_iter()
            .filter(|mv| mv.kind() == MoveKind::EnPassant)
            .collect();
        assert_eq!(ep.len(), 1);
        assert_eq!(ep[0].to_string(), "e5d6");

        // Any other move closes the window
        board.apply_move(Move::new(Square::B1, Square::C3, Piece::WHITE_KNIGHT, None));
        board.apply_move(Move::new(Square::A6, Square::A5, Piece::BLACK_PAWN, None));
        assert!(
            legal_moves(&mut board)
                .into_iter()
                .all(|mv| mv.kind() != MoveKind::EnPassant)
        );
    }

    #[test]
    fn kings_keep_their_distance() {
        let mut board = Board::empty();
        board.set_piece(Square::E4, Some(Piece::WHITE_KING));
        board.set_piece(Square::E6, Some(Piece::BLACK_KING));

        let dests: Vec<Square> = legal_moves(&mut board).iter().map(|mv| mv.dest()).collect();
        assert!(!dests.contains(&Square::D5));
        assert!(!dests.contains(&Square::E5));
        assert!(!dests.contains(&Square::F5));
        assert!(dests.contains(&Square::D3));
        assert!(dests.contains(&Square::E3));
    }
}
