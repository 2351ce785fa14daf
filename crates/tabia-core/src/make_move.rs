//! Move execution and takeback against the history stack.

use tracing::debug;

use crate::board::Board;
use crate::castle_rights::{CastleRights, CastleSide};
use crate::chess_move::{Move, MoveKind};
use crate::color::Color;
use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::square::Square;

/// Maps each square index to the castling rights that must be removed when
/// that square is the source or destination of any move.
const CASTLE_RIGHTS_REVOKE: [CastleRights; 64] = {
    let mut table = [CastleRights::NONE; 64];
    // E1: the White king leaves home, both white rights go.
    table[Square::E1.index()] = CastleRights::WHITE_BOTH;
    // A1: White queenside rook.
    table[Square::A1.index()] = CastleRights::WHITE_QUEEN;
    // H1: White kingside rook.
    table[Square::H1.index()] = CastleRights::WHITE_KING;
    // E8: the Black king leaves home, both black rights go.
    table[Square::E8.index()] = CastleRights::BLACK_BOTH;
    // A8: Black queenside rook.
    table[Square::A8.index()] = CastleRights::BLACK_QUEEN;
    // H8: Black kingside rook.
    table[Square::H8.index()] = CastleRights::BLACK_KING;
    table
};

/// Snapshot taken before a move is applied, enough to restore the
/// previous position exactly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Undo {
    pub(crate) mv: Move,
    /// Captured piece as read off the board, including en passant victims.
    pub(crate) captured: Option<Piece>,
    pub(crate) side_to_move: Color,
    pub(crate) castling: CastleRights,
    pub(crate) en_passant: Option<Square>,
    pub(crate) halfmove_clock: u16,
    pub(crate) fullmove_number: u16,
}

/// The square of the pawn captured en passant: one row behind the
/// capture destination from the mover's point of view.
fn en_passant_victim_square(dest: Square, mover: Color) -> Option<Square> {
    match mover {
        Color::White => dest.offset(8),
        Color::Black => dest.offset(-8),
    }
}

/// Home and post-castling squares of the rook in a castling move.
fn rook_castle_squares(color: Color, side: CastleSide) -> (Square, Square) {
    match (color, side) {
        (Color::White, CastleSide::KingSide) => (Square::H1, Square::F1),
        (Color::White, CastleSide::QueenSide) => (Square::A1, Square::D1),
        (Color::Black, CastleSide::KingSide) => (Square::H8, Square::F8),
        (Color::Black, CastleSide::QueenSide) => (Square::A8, Square::D8),
    }
}

impl Board {
    /// Apply a move, pushing an undo record onto the history stack.
    ///
    /// The move must fit the current position: the source square holds
    /// the piece the move names. Moves produced by move generation for
    /// this position always do.
    pub fn apply_move(&mut self, mv: Move) {
        debug_assert_eq!(
            self.piece_on(mv.source()),
            Some(mv.piece()),
            "move source must hold the moved piece"
        );

        let us = self.side_to_move();
        let source = mv.source();
        let dest = mv.dest();

        // Snapshot before touching anything. The captured piece is read
        // off the board rather than out of the move record.
        let captured = match mv.kind() {
            MoveKind::EnPassant => en_passant_victim_square(dest, us)
                .and_then(|victim_sq| self.piece_on(victim_sq)),
            _ => self.piece_on(dest),
        };
        self.push_history(Undo {
            mv,
            captured,
            side_to_move: us,
            castling: self.castling(),
            en_passant: self.en_passant(),
            halfmove_clock: self.halfmove_clock(),
            fullmove_number: self.fullmove_number(),
        });

        // Relocate the moved piece, replacing whatever stood on dest.
        self.set_piece(dest, Some(mv.piece()));
        self.set_piece(source, None);

        match mv.kind() {
            MoveKind::EnPassant => {
                if let Some(victim_sq) = en_passant_victim_square(dest, us) {
                    self.set_piece(victim_sq, None);
                }
            }
            MoveKind::Promotion => {
                if let Some(promo) = mv.promotion() {
                    self.set_piece(dest, Some(Piece::new(promo, us)));
                }
            }
            MoveKind::CastleKingSide => self.move_castle_rook(us, CastleSide::KingSide),
            MoveKind::CastleQueenSide => self.move_castle_rook(us, CastleSide::QueenSide),
            MoveKind::Normal | MoveKind::DoublePush => {}
        }

        // A double push opens the en passant window on the skipped square;
        // every other move closes it.
        if mv.kind() == MoveKind::DoublePush {
            let skipped = (source.index() + dest.index()) / 2;
            self.set_en_passant(Square::from_index(skipped as u8));
        } else {
            self.set_en_passant(None);
        }

        // Touching a king or rook home square revokes the matching rights.
        let rights = self
            .castling()
            .remove(CASTLE_RIGHTS_REVOKE[source.index()])
            .remove(CASTLE_RIGHTS_REVOKE[dest.index()]);
        self.set_castling(rights);

        if mv.piece().kind() == PieceKind::Pawn || captured.is_some() {
            self.set_halfmove_clock(0);
        } else {
            self.set_halfmove_clock(self.halfmove_clock() + 1);
        }

        if us == Color::Black {
            self.set_fullmove_number(self.fullmove_number() + 1);
        }

        self.set_side_to_move(us.flip());
    }

    /// Take back the most recently applied move, restoring the previous
    /// position exactly. Returns the move taken back, or `None` when the
    /// history stack is empty.
    pub fn undo_move(&mut self) -> Option<Move> {
        let Some(undo) = self.pop_history() else {
            debug!("undo with no applied moves, ignoring");
            return None;
        };

        let mv = undo.mv;
        let dest = mv.dest();

        // Putting the recorded piece back on the source also reverts
        // promotions, which left a different piece on the destination.
        self.set_piece(mv.source(), Some(mv.piece()));

        match mv.kind() {
            MoveKind::EnPassant => {
                self.set_piece(dest, None);
                if let Some(victim_sq) = en_passant_victim_square(dest, undo.side_to_move) {
                    self.set_piece(victim_sq, undo.captured);
                }
            }
            _ => self.set_piece(dest, undo.captured),
        }

        if let Some(side) = mv.castle_side() {
            let (rook_home, rook_dest) = rook_castle_squares(undo.side_to_move, side);
            let rook = self.piece_on(rook_dest);
            self.set_piece(rook_home, rook);
            self.set_piece(rook_dest, None);
        }

        self.set_side_to_move(undo.side_to_move);
        self.set_castling(undo.castling);
        self.set_en_passant(undo.en_passant);
        self.set_halfmove_clock(undo.halfmove_clock);
        self.set_fullmove_number(undo.fullmove_number);

        Some(mv)
    }

    /// Slide the rook across the king during castling.
    fn move_castle_rook(&mut self, color: Color, side: CastleSide) {
        let (rook_home, rook_dest) = rook_castle_squares(color, side);
        let rook = self.piece_on(rook_home);
        self.set_piece(rook_dest, rook);
        self.set_piece(rook_home, None);
    }
}
