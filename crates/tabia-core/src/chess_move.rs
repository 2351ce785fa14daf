//! Move records carrying everything needed to apply and undo.

use std::fmt;

use crate::castle_rights::CastleSide;
use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::square::Square;

/// What kind of move this is, beyond the source and destination.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoveKind {
    /// Plain relocation, including ordinary captures.
    Normal,
    /// Two-square pawn advance from its starting row.
    DoublePush,
    /// En passant capture; the victim does not sit on the destination.
    EnPassant,
    CastleKingSide,
    CastleQueenSide,
    /// Pawn reaching the last row; `promotion` names the new kind.
    Promotion,
}

/// A single move, self-contained enough to be undone.
///
/// Besides the squares it records the moved piece, any captured piece,
/// and the promotion target, so move lists can be printed and replayed
/// without consulting the board they came from.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    source: Square,
    dest: Square,
    piece: Piece,
    captured: Option<Piece>,
    promotion: Option<PieceKind>,
    kind: MoveKind,
}

impl Move {
    /// Create a quiet move or an ordinary capture.
    #[inline]
    pub const fn new(source: Square, dest: Square, piece: Piece, captured: Option<Piece>) -> Move {
        Move {
            source,
            dest,
            piece,
            captured,
            promotion: None,
            kind: MoveKind::Normal,
        }
    }

    /// Create a two-square pawn advance.
    #[inline]
    pub const fn new_double_push(source: Square, dest: Square, piece: Piece) -> Move {
        Move {
            source,
            dest,
            piece,
            captured: None,
            promotion: None,
            kind: MoveKind::DoublePush,
        }
    }

    /// Create an en passant capture of `victim`.
    #[inline]
    pub const fn new_en_passant(source: Square, dest: Square, piece: Piece, victim: Piece) -> Move {
        Move {
            source,
            dest,
            piece,
            captured: Some(victim),
            promotion: None,
            kind: MoveKind::EnPassant,
        }
    }

    /// Create a castling move; `source` and `dest` describe the king.
    #[inline]
    pub const fn new_castle(source: Square, dest: Square, piece: Piece, side: CastleSide) -> Move {
        let kind = match side {
            CastleSide::KingSide => MoveKind::CastleKingSide,
            CastleSide::QueenSide => MoveKind::CastleQueenSide,
        };
        Move {
            source,
            dest,
            piece,
            captured: None,
            promotion: None,
            kind,
        }
    }

    /// Create a promotion, capturing or not.
    #[inline]
    pub const fn new_promotion(
        source: Square,
        dest: Square,
        piece: Piece,
        promotion: PieceKind,
        captured: Option<Piece>,
    ) -> Move {
        Move {
            source,
            dest,
            piece,
            captured,
            promotion: Some(promotion),
            kind: MoveKind::Promotion,
        }
    }

    #[inline]
    pub const fn source(self) -> Square {
        self.source
    }

    #[inline]
    pub const fn dest(self) -> Square {
        self.dest
    }

    /// The piece being moved.
    #[inline]
    pub const fn piece(self) -> Piece {
        self.piece
    }

    /// The piece removed from the board by this move, if any.
    #[inline]
    pub const fn captured(self) -> Option<Piece> {
        self.captured
    }

    /// The kind a promoting pawn turns into.
    #[inline]
    pub const fn promotion(self) -> Option<PieceKind> {
        self.promotion
    }

    #[inline]
    pub const fn kind(self) -> MoveKind {
        self.kind
    }

    #[inline]
    pub const fn is_capture(self) -> bool {
        self.captured.is_some()
    }

    #[inline]
    pub const fn is_castle(self) -> bool {
        matches!(self.kind, MoveKind::CastleKingSide | MoveKind::CastleQueenSide)
    }

    /// Which way a castling move goes, or `None` for other kinds.
    #[inline]
    pub const fn castle_side(self) -> Option<CastleSide> {
        match self.kind {
            MoveKind::CastleKingSide => Some(CastleSide::KingSide),
            MoveKind::CastleQueenSide => Some(CastleSide::QueenSide),
            _ => None,
        }
    }
}

impl fmt::Display for Move {
    /// Coordinate notation: source square, destination square, and a
    /// trailing piece letter for promotions (`e2e4`, `e7e8q`).
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.source, self.dest)?;
        if let Some(promo) = self.promotion {
            write!(f, "{}", promo.letter())?;
        }
        Ok(())
    }
}

impl fmt::Debug for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Move({} kind={:?})", self, self.kind)
    }
}
