//! Errors used throughout the Archess engine.
//!
//! This module defines the canonical error type returned by game logic,
//! parsing utilities, and the action codec. The enum `ArchessErrors` is used
//! as the single error type across the crate to simplify propagation and
//! matching. Each variant carries contextual information where appropriate
//! to aid diagnostics.
//!
//! Illegal *moves* are intentionally not errors: the `step` entry point
//! reports them through a sentinel reward so that every in-range action code
//! is an answerable request. The variants here cover caller contract
//! violations (out-of-range codes, malformed notation) instead.

use std::error::Error;
use std::fmt;

use crate::game_state::archess_types::Square;

/// Unified error type for the Archess engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArchessErrors {
    /// An action code outside `[0, 8192)` was submitted. Codes beyond the
    /// action space indicate a wrapper bug, not game dynamics, and fail
    /// loudly instead of decoding.
    ActionCodeOutOfRange(u16),

    /// An algebraic square string (for example `"e4"`) failed to parse.
    ///
    /// Payload: the original offending string.
    InvalidAlgebraicSquare(String),

    /// A square outside the 8x8 board was used where a board square is
    /// required.
    SquareOutOfBounds(Square),

    /// A FEN-like string had malformed structure (missing fields, bad row
    /// lengths, or an unusable paralysis entry).
    ///
    /// Payload: the original offending string for diagnostics.
    InvalidFenString(String),

    /// Found an unexpected token while parsing the placement field of a
    /// FEN-like string.
    ///
    /// Payload: the offending character.
    InvalidFenToken(char),

    /// Move execution found no piece on the origin square. This is a
    /// precondition violation (execution requires a validated move) and
    /// indicates a caller bug.
    NoPieceOnSquare(Square),
}

impl fmt::Display for ArchessErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArchessErrors::ActionCodeOutOfRange(code) => {
                write!(f, "action code {code} is outside the action space [0, 8192)")
            }
            ArchessErrors::InvalidAlgebraicSquare(s) => {
                write!(f, "invalid algebraic square: {s}")
            }
            ArchessErrors::SquareOutOfBounds(square) => {
                write!(
                    f,
                    "square ({}, {}) is outside the 8x8 board",
                    square.row, square.col
                )
            }
            ArchessErrors::InvalidFenString(s) => write!(f, "invalid FEN string: {s}"),
            ArchessErrors::InvalidFenToken(c) => write!(f, "invalid FEN token: {c}"),
            ArchessErrors::NoPieceOnSquare(square) => {
                write!(
                    f,
                    "no piece on square ({}, {})",
                    square.row, square.col
                )
            }
        }
    }
}

impl Error for ArchessErrors {}
