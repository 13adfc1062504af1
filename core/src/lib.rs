// SPDX-License-Identifier: MIT OR Apache-2.0

//! Chessboard Core - Board and Piece State Model
//!
//! This crate provides the state a two-player chess game is built on:
//! - Square coordinates and side colors
//! - Pieces with a validated color, kind and location
//! - The 8x8 board that keeps every piece's location in agreement with its square
//! - The game state root object and the standard initial setup
//!
//! Move generation and legality are left to the crates that consume this model.

#![deny(unsafe_code)]
#![deny(clippy::all)]

pub mod board;
pub mod piece;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub use board::Board;
pub use piece::{Piece, PieceKind, PieceType};

/// Number of rows and columns on the board
pub const BOARD_SIZE: u8 = 8;

/// Player color (White or Black)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    /// White player (moves first)
    White,
    /// Black player
    Black,
}

impl Color {
    /// Returns the opposite color
    pub fn opposite(&self) -> Self {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// Map the boolean "is white" flag onto a color
    pub fn from_is_white(is_white: bool) -> Self {
        if is_white {
            Color::White
        } else {
            Color::Black
        }
    }

    pub fn is_white(&self) -> bool {
        *self == Color::White
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

impl FromStr for Color {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "white" => Ok(Color::White),
            "black" => Ok(Color::Black),
            _ => Err(GameError::InvalidArgument(format!("unknown color {:?}", s))),
        }
    }
}

/// Board coordinate identifying one of the 64 squares.
///
/// Row 0 is Black's back rank and row 7 is White's. Both components are
/// always in `0..8`; every constructor rejects anything else.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "Vec<i64>", into = "[u8; 2]")]
pub struct Coord {
    row: u8,
    col: u8,
}

impl Coord {
    /// Create a new coordinate, failing if either component is off the board
    pub fn new(row: u8, col: u8) -> Result<Self, GameError> {
        if row >= BOARD_SIZE || col >= BOARD_SIZE {
            return Err(GameError::InvalidArgument(format!(
                "coordinate ({},{}) is off the board",
                row, col
            )));
        }
        Ok(Self { row, col })
    }

    pub fn row(&self) -> u8 {
        self.row
    }

    pub fn col(&self) -> u8 {
        self.col
    }

    /// All 64 squares in row-major order
    pub fn all() -> impl Iterator<Item = Coord> {
        (0..BOARD_SIZE).flat_map(|row| (0..BOARD_SIZE).map(move |col| Coord { row, col }))
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.row, self.col)
    }
}

impl TryFrom<(i64, i64)> for Coord {
    type Error = GameError;

    fn try_from((row, col): (i64, i64)) -> Result<Self, Self::Error> {
        match (u8::try_from(row), u8::try_from(col)) {
            (Ok(row), Ok(col)) => Coord::new(row, col),
            _ => Err(GameError::InvalidArgument(format!(
                "coordinate ({},{}) is off the board",
                row, col
            ))),
        }
    }
}

impl TryFrom<&[i64]> for Coord {
    type Error = GameError;

    fn try_from(parts: &[i64]) -> Result<Self, Self::Error> {
        match parts {
            [row, col] => Coord::try_from((*row, *col)),
            _ => Err(GameError::InvalidArgument(format!(
                "location needs exactly 2 components, got {}",
                parts.len()
            ))),
        }
    }
}

impl TryFrom<Vec<i64>> for Coord {
    type Error = GameError;

    fn try_from(parts: Vec<i64>) -> Result<Self, Self::Error> {
        Coord::try_from(parts.as_slice())
    }
}

impl From<Coord> for [u8; 2] {
    fn from(coord: Coord) -> Self {
        [coord.row, coord.col]
    }
}

/// Back rank order from column 0 to column 7
pub const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// Represents the current state of a chess game
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    /// The pieces on the board
    board: Board,
    /// The player whose move is next
    turn: Color,
}

impl GameState {
    /// Create a game with an empty board and White to move
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            turn: Color::White,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Mutable access for move application; changes still go through the
    /// board's place/remove operations.
    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    /// The player whose move is next
    pub fn turn(&self) -> Color {
        self.turn
    }

    /// Hand the move to `color`. Whoever applies a move is expected to call this.
    pub fn set_turn(&mut self, color: Color) {
        self.turn = color;
    }

    /// The piece standing on `coord`, if any
    pub fn piece_at(&self, coord: Coord) -> Option<&Piece> {
        self.board.get(coord)
    }

    /// Put all 32 pieces on their starting squares.
    ///
    /// Fails with [`GameError::InvalidState`] if the board already holds any
    /// piece; the board is left untouched in that case. The turn is not changed.
    pub fn populate_board(&mut self) -> Result<(), GameError> {
        if !self.board.is_empty() {
            let occupied = self.board.occupied_count();
            tracing::warn!(occupied, "refusing to set up a board that already holds pieces");
            return Err(GameError::InvalidState(format!(
                "initial setup needs an empty board, found {} pieces",
                occupied
            )));
        }

        let mut board = Board::new();
        for (color, back_row, pawn_row) in [(Color::Black, 0, 1), (Color::White, 7, 6)] {
            for (col, kind) in (0u8..).zip(BACK_RANK) {
                board.place(PieceType::new(color, kind), Coord::new(back_row, col)?)?;
            }
            for col in 0..BOARD_SIZE {
                board.place(PieceType::new(color, PieceKind::Pawn), Coord::new(pawn_row, col)?)?;
            }
        }

        self.board = board;
        tracing::debug!(pieces = self.board.occupied_count(), "initial position set up");
        Ok(())
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

/// Errors raised by the board and piece model
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GameError {
    /// A color, kind or location failed validation
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// The operation's precondition on existing state does not hold
    #[error("Invalid state: {0}")]
    InvalidState(String),
}
