// SPDX-License-Identifier: MIT OR Apache-2.0

//! Chess pieces: kinds, unplaced piece types and placed pieces

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::{Color, Coord, GameError};

/// The six chess piece kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PieceKind {
    King,
    Queen,
    Rook,
    Bishop,
    Knight,
    Pawn,
}

impl PieceKind {
    /// All kinds, ordered by [`PieceKind::index`]
    pub const ALL: [PieceKind; 6] = [
        PieceKind::King,
        PieceKind::Queen,
        PieceKind::Rook,
        PieceKind::Bishop,
        PieceKind::Knight,
        PieceKind::Pawn,
    ];

    /// Stable numeric code: King=0 through Pawn=5
    pub fn index(self) -> u8 {
        match self {
            PieceKind::King => 0,
            PieceKind::Queen => 1,
            PieceKind::Rook => 2,
            PieceKind::Bishop => 3,
            PieceKind::Knight => 4,
            PieceKind::Pawn => 5,
        }
    }

    /// Lowercase name, as accepted by [`PieceKind::is_valid_name`]
    pub fn name(self) -> &'static str {
        match self {
            PieceKind::King => "king",
            PieceKind::Queen => "queen",
            PieceKind::Rook => "rook",
            PieceKind::Bishop => "bishop",
            PieceKind::Knight => "knight",
            PieceKind::Pawn => "pawn",
        }
    }

    /// Whether `name` is exactly one of the six lowercase kind names
    pub fn is_valid_name(name: &str) -> bool {
        Self::ALL.iter().any(|kind| kind.name() == name)
    }

    /// Board symbol: uppercase for White, lowercase for Black
    pub fn symbol(self, color: Color) -> char {
        let c = match self {
            PieceKind::King => 'k',
            PieceKind::Queen => 'q',
            PieceKind::Rook => 'r',
            PieceKind::Bishop => 'b',
            PieceKind::Knight => 'n',
            PieceKind::Pawn => 'p',
        };
        match color {
            Color::White => c.to_ascii_uppercase(),
            Color::Black => c,
        }
    }
}

impl fmt::Display for PieceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PieceKind::King => "King",
            PieceKind::Queen => "Queen",
            PieceKind::Rook => "Rook",
            PieceKind::Bishop => "Bishop",
            PieceKind::Knight => "Knight",
            PieceKind::Pawn => "Pawn",
        };
        f.write_str(name)
    }
}

impl FromStr for PieceKind {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|kind| kind.name() == s)
            .ok_or_else(|| GameError::InvalidArgument(format!("unknown piece kind {:?}", s)))
    }
}

/// A piece that is not on the board: just its color and kind.
///
/// Used wherever a piece is chosen before it has a square, such as a
/// promotion menu, and as the input to [`crate::Board::place`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PieceType {
    pub color: Color,
    pub kind: PieceKind,
}

impl PieceType {
    pub fn new(color: Color, kind: PieceKind) -> Self {
        Self { color, kind }
    }

    /// The placed piece this type becomes on `location`
    pub fn at(self, location: Coord) -> Piece {
        Piece::new(self.color, self.kind, location)
    }
}

impl fmt::Display for PieceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.color, self.kind)
    }
}

/// A piece standing on a square.
///
/// Color and kind never change. The location is only ever assigned by the
/// board when it places the piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Piece {
    color: Color,
    kind: PieceKind,
    location: Coord,
}

impl Piece {
    pub fn new(color: Color, kind: PieceKind, location: Coord) -> Self {
        Self {
            color,
            kind,
            location,
        }
    }

    /// Build a piece from unvalidated input.
    ///
    /// Every argument is checked before anything is built, so a failure never
    /// yields a partial piece.
    pub fn parse(color: &str, kind: &str, location: &[i64]) -> Result<Self, GameError> {
        let color = color.parse::<Color>()?;
        let kind = kind.parse::<PieceKind>()?;
        let location = Coord::try_from(location)?;
        Ok(Self::new(color, kind, location))
    }

    pub fn king(color: Color, location: Coord) -> Self {
        Self::new(color, PieceKind::King, location)
    }

    pub fn queen(color: Color, location: Coord) -> Self {
        Self::new(color, PieceKind::Queen, location)
    }

    pub fn rook(color: Color, location: Coord) -> Self {
        Self::new(color, PieceKind::Rook, location)
    }

    pub fn bishop(color: Color, location: Coord) -> Self {
        Self::new(color, PieceKind::Bishop, location)
    }

    pub fn knight(color: Color, location: Coord) -> Self {
        Self::new(color, PieceKind::Knight, location)
    }

    pub fn pawn(color: Color, location: Coord) -> Self {
        Self::new(color, PieceKind::Pawn, location)
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn kind(&self) -> PieceKind {
        self.kind
    }

    pub fn location(&self) -> Coord {
        self.location
    }

    /// The color and kind without the location
    pub fn piece_type(&self) -> PieceType {
        PieceType::new(self.color, self.kind)
    }

    /// Compact code: "1" for White or "0" for Black, then the kind index
    pub fn code(&self) -> String {
        format!("{}{}", u8::from(self.color.is_white()), self.kind.index())
    }

    pub fn symbol(&self) -> char {
        self.kind.symbol(self.color)
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} at {}", self.color, self.kind, self.location)
    }
}
