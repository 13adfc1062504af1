// SPDX-License-Identifier: MIT OR Apache-2.0

//! Chessboard CLI - text rendering of the board model

pub mod render;
