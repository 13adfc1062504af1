// SPDX-License-Identifier: MIT OR Apache-2.0

//! Board representation and manipulation

use serde::{Deserialize, Serialize};

use crate::{Color, Coord, GameError, Piece, PieceType, BOARD_SIZE};

const SIZE: usize = BOARD_SIZE as usize;

/// The 8x8 grid of squares, each empty or holding one piece.
///
/// Every mutation goes through [`Board::place`], [`Board::remove`] or
/// [`Board::clear`], so a piece's stored location always equals the square
/// holding it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Piece>", into = "Vec<Piece>")]
pub struct Board {
    squares: [[Option<Piece>; SIZE]; SIZE],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the piece at the specified coordinate
    pub fn get(&self, coord: Coord) -> Option<&Piece> {
        self.squares[coord.row() as usize][coord.col() as usize].as_ref()
    }

    pub fn is_occupied(&self, coord: Coord) -> bool {
        self.get(coord).is_some()
    }

    /// Place a piece of the given type on an empty square
    pub fn place(&mut self, piece_type: PieceType, coord: Coord) -> Result<&Piece, GameError> {
        let slot = &mut self.squares[coord.row() as usize][coord.col() as usize];
        if let Some(existing) = slot.as_ref() {
            tracing::warn!(%coord, %existing, "square already occupied");
            return Err(GameError::InvalidState(format!(
                "square {} already holds {}",
                coord, existing
            )));
        }

        tracing::trace!(%coord, %piece_type, "placing piece");
        Ok(slot.insert(piece_type.at(coord)))
    }

    /// Take the piece off the specified square, returning it
    pub fn remove(&mut self, coord: Coord) -> Option<Piece> {
        self.squares[coord.row() as usize][coord.col() as usize].take()
    }

    /// Empty every square
    pub fn clear(&mut self) {
        self.squares = Default::default();
    }

    pub fn is_empty(&self) -> bool {
        self.pieces().next().is_none()
    }

    /// Number of occupied squares
    pub fn occupied_count(&self) -> usize {
        self.pieces().count()
    }

    /// Count pieces of specified color on the board
    pub fn count_for(&self, color: Color) -> usize {
        self.pieces().filter(|piece| piece.color() == color).count()
    }

    /// All pieces in row-major order of their squares
    pub fn pieces(&self) -> impl Iterator<Item = &Piece> + '_ {
        self.squares.iter().flatten().flatten()
    }

    /// Check that every piece's stored location matches the square holding it
    pub fn is_consistent(&self) -> bool {
        Coord::all()
            .filter_map(|coord| self.get(coord).map(|piece| (coord, piece)))
            .all(|(coord, piece)| piece.location() == coord)
    }
}

impl TryFrom<Vec<Piece>> for Board {
    type Error = GameError;

    fn try_from(pieces: Vec<Piece>) -> Result<Self, Self::Error> {
        let mut board = Board::new();
        for piece in pieces {
            board.place(piece.piece_type(), piece.location())?;
        }
        Ok(board)
    }
}

impl From<Board> for Vec<Piece> {
    fn from(board: Board) -> Self {
        board.pieces().copied().collect()
    }
}
