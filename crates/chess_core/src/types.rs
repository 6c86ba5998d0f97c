use std::fmt;
use std::str::FromStr;

use crate::error::{ChessError, ChessResult};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Color {
    White,
    Black,
}
impl Color {
    pub fn other(self) -> Color {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }
    pub fn idx(self) -> usize {
        match self {
            Color::White => 0,
            Color::Black => 1,
        }
    }
    /// Rank direction pawns of this color advance in.
    pub fn forward(self) -> i8 {
        match self {
            Color::White => 1,
            Color::Black => -1,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::White => f.write_str("White"),
            Color::Black => f.write_str("Black"),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceKind {
    pub const ALL: [PieceKind; 6] = [
        PieceKind::Pawn,
        PieceKind::Knight,
        PieceKind::Bishop,
        PieceKind::Rook,
        PieceKind::Queen,
        PieceKind::King,
    ];

    /// Promotion targets, in the order the move generator emits them.
    pub const PROMOTIONS: [PieceKind; 4] = [
        PieceKind::Queen,
        PieceKind::Rook,
        PieceKind::Bishop,
        PieceKind::Knight,
    ];

    pub fn idx(self) -> usize {
        self as usize
    }

    /// Lower-case letter used by FEN and coordinate notation.
    pub fn to_char(self) -> char {
        match self {
            PieceKind::Pawn => 'p',
            PieceKind::Knight => 'n',
            PieceKind::Bishop => 'b',
            PieceKind::Rook => 'r',
            PieceKind::Queen => 'q',
            PieceKind::King => 'k',
        }
    }

    pub fn from_char(c: char) -> Option<PieceKind> {
        match c.to_ascii_lowercase() {
            'p' => Some(PieceKind::Pawn),
            'n' => Some(PieceKind::Knight),
            'b' => Some(PieceKind::Bishop),
            'r' => Some(PieceKind::Rook),
            'q' => Some(PieceKind::Queen),
            'k' => Some(PieceKind::King),
            _ => None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Piece {
    pub color: Color,
    pub kind: PieceKind,
}

impl Piece {
    pub const fn new(color: Color, kind: PieceKind) -> Self {
        Self { color, kind }
    }

    /// Upper-case for White, lower-case for Black.
    pub fn to_char(self) -> char {
        let c = self.kind.to_char();
        match self.color {
            Color::White => c.to_ascii_uppercase(),
            Color::Black => c,
        }
    }
}

// =============================================================================
// Square
// =============================================================================

/// A board coordinate stored as `rank * 8 + file` (a1 = 0, h1 = 7, h8 = 63).
///
/// The only ways to build a `Square` go through a range check, so a value of
/// this type is always on the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Square(u8);

impl Square {
    pub const A1: Square = Square(0);
    pub const B1: Square = Square(1);
    pub const C1: Square = Square(2);
    pub const D1: Square = Square(3);
    pub const E1: Square = Square(4);
    pub const F1: Square = Square(5);
    pub const G1: Square = Square(6);
    pub const H1: Square = Square(7);
    pub const D4: Square = Square(27);
    pub const E4: Square = Square(28);
    pub const D5: Square = Square(35);
    pub const E5: Square = Square(36);
    pub const A8: Square = Square(56);
    pub const B8: Square = Square(57);
    pub const C8: Square = Square(58);
    pub const D8: Square = Square(59);
    pub const E8: Square = Square(60);
    pub const F8: Square = Square(61);
    pub const G8: Square = Square(62);
    pub const H8: Square = Square(63);

    /// Build a square from file and rank, both in `0..8`.
    pub fn new(file: i8, rank: i8) -> ChessResult<Square> {
        Self::try_new(file, rank).ok_or(ChessError::InvalidSquare { file, rank })
    }

    /// Like [`Square::new`] but returns `None` when off the board; used by
    /// move generation where stepping off the edge is routine.
    #[inline]
    pub fn try_new(file: i8, rank: i8) -> Option<Square> {
        if (0..8).contains(&file) && (0..8).contains(&rank) {
            Some(Square((rank as u8) * 8 + (file as u8)))
        } else {
            None
        }
    }

    #[inline]
    pub fn from_index(idx: u8) -> Option<Square> {
        (idx < 64).then_some(Square(idx))
    }

    /// All 64 squares in ascending index order.
    pub fn all() -> impl Iterator<Item = Square> {
        (0..64u8).map(Square)
    }

    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
    #[inline]
    pub fn file(self) -> i8 {
        (self.0 % 8) as i8
    }
    #[inline]
    pub fn rank(self) -> i8 {
        (self.0 / 8) as i8
    }

    /// The square `(df, dr)` away, if it is on the board.
    #[inline]
    pub fn offset(self, df: i8, dr: i8) -> Option<Square> {
        Square::try_new(self.file() + df, self.rank() + dr)
    }

    /// True for dark squares (a1 is dark).
    pub fn is_dark(self) -> bool {
        (self.file() + self.rank()) % 2 == 0
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let file = (b'a' + self.file() as u8) as char;
        let rank = (b'1' + self.rank() as u8) as char;
        write!(f, "{file}{rank}")
    }
}

impl FromStr for Square {
    type Err = ChessError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let b = s.as_bytes();
        if b.len() != 2 {
            return Err(ChessError::InvalidSquare { file: -1, rank: -1 });
        }
        let file = b[0].wrapping_sub(b'a') as i8;
        let rank = b[1].wrapping_sub(b'1') as i8;
        Square::new(file, rank)
    }
}

// =============================================================================
// Move
// =============================================================================

/// What kind of move a [`Move`] is, as decided by the move generator.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MoveFlag {
    Normal,
    Capture,
    Castle,
    EnPassant,
    Promotion,
    PromotionCapture,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Move {
    pub from: Square,
    pub to: Square,
    pub promo: Option<PieceKind>,
    pub flag: MoveFlag,
}

impl Move {
    pub fn new(from: Square, to: Square) -> Self {
        Self {
            from,
            to,
            promo: None,
            flag: MoveFlag::Normal,
        }
    }

    pub fn with_flag(from: Square, to: Square, flag: MoveFlag) -> Self {
        Self {
            from,
            to,
            promo: None,
            flag,
        }
    }

    pub fn promotion(from: Square, to: Square, kind: PieceKind, capture: bool) -> Self {
        Self {
            from,
            to,
            promo: Some(kind),
            flag: if capture {
                MoveFlag::PromotionCapture
            } else {
                MoveFlag::Promotion
            },
        }
    }

    pub fn is_capture(self) -> bool {
        matches!(
            self.flag,
            MoveFlag::Capture | MoveFlag::EnPassant | MoveFlag::PromotionCapture
        )
    }

    pub fn is_castle(self) -> bool {
        self.flag == MoveFlag::Castle
    }

    pub fn is_en_passant(self) -> bool {
        self.flag == MoveFlag::EnPassant
    }
}

/// Coordinate notation: `e2e4`, `e7e8q`.
impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)?;
        if let Some(p) = self.promo {
            write!(f, "{}", p.to_char())?;
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "types_tests.rs"]
mod types_tests;
