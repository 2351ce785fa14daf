//! The chess board: piece placement, side to move, castling, en passant,
//! move counters, and the history stack that makes moves reversible.

use std::fmt;

use crate::castle_rights::{CastleRights, CastleSide};
use crate::color::Color;
use crate::error::BoardError;
use crate::make_move::Undo;
use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::square::Square;

/// Back-row piece order shared by both sides, a-file to h-file.
const BACK_ROW: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// Complete game state.
///
/// Piece placement is a 64-entry array indexed by [`Square::index`],
/// with `None` marking empty squares. Applied moves are remembered on
/// an internal stack so they can be taken back in reverse order.
#[derive(Clone, PartialEq, Eq)]
pub struct Board {
    /// One entry per square, row-major from A8.
    squares: [Option<Piece>; Square::COUNT],
    /// Which side moves next.
    side_to_move: Color,
    /// Current castling rights.
    castling: CastleRights,
    /// En passant target square, if the last move was a double push.
    en_passant: Option<Square>,
    /// Halfmove clock for the fifty-move rule.
    halfmove_clock: u16,
    /// Fullmove number (starts at 1, incremented after Black moves).
    fullmove_number: u16,
    /// Snapshots for undoing applied moves, most recent last.
    history: Vec<Undo>,
}

impl Board {
    /// Return the standard starting position.
    pub fn new() -> Board {
        let mut squares = [None; Square::COUNT];
        for col in 0..8 {
            let kind = BACK_ROW[col];
            squares[col] = Some(Piece::new(kind, Color::Black));
            squares[8 + col] = Some(Piece::new(PieceKind::Pawn, Color::Black));
            squares[48 + col] = Some(Piece::new(PieceKind::Pawn, Color::White));
            squares[56 + col] = Some(Piece::new(kind, Color::White));
        }

        Board {
            squares,
            side_to_move: Color::White,
            castling: CastleRights::ALL,
            en_passant: None,
            halfmove_clock: 0,
            fullmove_number: 1,
            history: Vec::new(),
        }
    }

    /// Return a board with no pieces, no castling rights, and White to move.
    ///
    /// Positions built from this via [`Board::set_piece`] and the other
    /// setters must keep castling rights consistent with piece placement:
    /// a right may only be set while the matching king and rook still
    /// stand on their home squares.
    pub fn empty() -> Board {
        Board {
            squares: [None; Square::COUNT],
            side_to_move: Color::White,
            castling: CastleRights::NONE,
            en_passant: None,
            halfmove_clock: 0,
            fullmove_number: 1,
            history: Vec::new(),
        }
    }

    /// Return the piece on the given square, if any.
    #[inline]
    pub fn piece_on(&self, sq: Square) -> Option<Piece> {
        self.squares[sq.index()]
    }

    /// Return `true` if the given square is occupied.
    #[inline]
    pub fn is_occupied(&self, sq: Square) -> bool {
        self.squares[sq.index()].is_some()
    }

    /// Return the square of the given side's king, or `None` if that
    /// king is missing from the board.
    pub fn king_square(&self, color: Color) -> Option<Square> {
        let king = Piece::new(PieceKind::King, color);
        Square::all().find(|&sq| self.squares[sq.index()] == Some(king))
    }

    /// Return the side to move.
    #[inline]
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    /// Return the current castling rights.
    #[inline]
    pub fn castling(&self) -> CastleRights {
        self.castling
    }

    /// Return the en passant target square, if any.
    #[inline]
    pub fn en_passant(&self) -> Option<Square> {
        self.en_passant
    }

    /// Return the halfmove clock.
    #[inline]
    pub fn halfmove_clock(&self) -> u16 {
        self.halfmove_clock
    }

    /// Return the fullmove number.
    #[inline]
    pub fn fullmove_number(&self) -> u16 {
        self.fullmove_number
    }

    /// Number of applied moves that can still be taken back.
    #[inline]
    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    /// Whether castling rights record the given side's king as moved.
    ///
    /// Reads the rights field, not the history: once both of a side's
    /// rights are gone the king counts as moved.
    #[inline]
    pub fn king_moved(&self, color: Color) -> bool {
        (self.castling & CastleRights::color_mask(color)).is_empty()
    }

    /// Whether castling rights record the given rook as moved.
    #[inline]
    pub fn rook_moved(&self, color: Color, side: CastleSide) -> bool {
        !self.castling.has(color, side)
    }

    /// Return `true` if every square strictly between the two indices
    /// is empty. Intended for same-row spans such as castling lanes.
    pub fn empty_between(&self, a: Square, b: Square) -> bool {
        let (lo, hi) = if a.index() < b.index() {
            (a.index(), b.index())
        } else {
            (b.index(), a.index())
        };
        ((lo + 1)..hi).all(|idx| self.squares[idx].is_none())
    }

    /// Place a piece on (or clear) a square.
    #[inline]
    pub fn set_piece(&mut self, sq: Square, piece: Option<Piece>) {
        self.squares[sq.index()] = piece;
    }

    /// Set the side to move.
    #[inline]
    pub fn set_side_to_move(&mut self, color: Color) {
        self.side_to_move = color;
    }

    /// Set the castling rights.
    #[inline]
    pub fn set_castling(&mut self, rights: CastleRights) {
        self.castling = rights;
    }

    /// Set the en passant target square.
    #[inline]
    pub fn set_en_passant(&mut self, sq: Option<Square>) {
        self.en_passant = sq;
    }

    /// Set the halfmove clock.
    #[inline]
    pub(crate) fn set_halfmove_clock(&mut self, clock: u16) {
        self.halfmove_clock = clock;
    }

    /// Set the fullmove number.
    #[inline]
    pub(crate) fn set_fullmove_number(&mut self, number: u16) {
        self.fullmove_number = number;
    }

    #[inline]
    pub(crate) fn push_history(&mut self, undo: Undo) {
        self.history.push(undo);
    }

    #[inline]
    pub(crate) fn pop_history(&mut self) -> Option<Undo> {
        self.history.pop()
    }

    /// Validate the structural integrity of the position.
    pub fn validate(&self) -> Result<(), BoardError> {
        // Exactly one king per side
        for color in Color::ALL {
            let king = Piece::new(PieceKind::King, color);
            let count = self
                .squares
                .iter()
                .filter(|&&piece| piece == Some(king))
                .count() as u32;
            if count != 1 {
                let color_name = match color {
                    Color::White => "white",
                    Color::Black => "black",
                };
                return Err(BoardError::InvalidKingCount {
                    color: color_name,
                    count,
                });
            }
        }

        // No pawns on the first or eighth rank
        let back_rank_pawns = Square::all()
            .filter(|sq| sq.row() == 0 || sq.row() == 7)
            .any(|sq| {
                self.squares[sq.index()].is_some_and(|piece| piece.kind() == PieceKind::Pawn)
            });
        if back_rank_pawns {
            return Err(BoardError::PawnsOnBackRank);
        }

        Ok(())
    }

    /// Return a pretty-printable wrapper for this board.
    pub fn pretty(&self) -> PrettyBoard<'_> {
        PrettyBoard(self)
    }
}

impl Default for Board {
    fn default() -> Board {
        Board::new()
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Board(side={} castling={} history={})",
            self.side_to_move,
            self.castling,
            self.history.len()
        )
    }
}

/// Wrapper for printing a board as an 8x8 grid followed by game state.
pub struct PrettyBoard<'a>(&'a Board);

impl fmt::Display for PrettyBoard<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let board = self.0;
        for row in 0u8..8 {
            write!(f, "{}  ", 8 - row)?;
            for col in 0u8..8 {
                let c = match board.squares[(row * 8 + col) as usize] {
                    Some(piece) => piece.letter(),
                    None => '.',
                };
                if col < 7 {
                    write!(f, "{c} ")?;
                } else {
                    write!(f, "{c}")?;
                }
            }
            writeln!(f)?;
        }
        writeln!(f, "   a b c d e f g h")?;
        writeln!(f)?;
        writeln!(f, "side to move: {}", board.side_to_move)?;
        writeln!(f, "castling: {}", board.castling)?;
        match board.en_passant {
            Some(sq) => writeln!(f, "en passant: {sq}")?,
            None => writeln!(f, "en passant: -")?,
        }
        writeln!(f, "halfmove clock: {}", board.halfmove_clock)?;
        write!(f, "fullmove number: {}", board.fullmove_number)
    }
}
