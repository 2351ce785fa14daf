//! The two sides of a game.

use std::fmt;
use std::ops::Not;

/// Side identifier, White or Black.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Color {
    White = 0,
    Black = 1,
}

impl Color {
    /// Number of sides.
    pub const COUNT: usize = 2;

    /// Both sides, White first.
    pub const ALL: [Color; 2] = [Color::White, Color::Black];

    /// Table-lookup index: White is 0, Black is 1.
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// The opposing side.
    #[inline]
    pub const fn flip(self) -> Color {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }
}

impl Not for Color {
    type Output = Color;

    #[inline]
    fn not(self) -> Color {
        self.flip()
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::White => write!(f, "w"),
            Color::Black => write!(f, "b"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Color;

    #[test]
    fn flip_is_involutive() {
        for color in Color::ALL {
            assert_ne!(color.flip(), color);
            assert_eq!(color.flip().flip(), color);
        }
    }

    #[test]
    fn not_matches_flip() {
        assert_eq!(!Color::White, Color::White.flip());
        assert_eq!(!Color::Black, Color::Black.flip());
    }

    #[test]
    fn indices_cover_tables() {
        assert_eq!(Color::White.index(), 0);
        assert_eq!(Color::Black.index(), 1);
        assert_eq!(Color::ALL.len(), Color::COUNT);
    }

    #[test]
    fn display_single_letter() {
        assert_eq!(Color::White.to_string(), "w");
        assert_eq!(Color::Black.to_string(), "b");
    }
}
