//! Central Archess board model.
//!
//! `GameState` stores the 8x8 grid, the king-position caches, the paralysis
//! status of the occupants, turn and terminal flags, and the append-only
//! move history. It is mutated exclusively by move application and replaced
//! wholesale on reset; an invalid move leaves it untouched.

use crate::archess_errors::ArchessErrors;
use crate::game_state::archess_rules::STARTING_POSITION_FEN;
use crate::game_state::archess_types::{Color, Piece, PieceKind, Square, Winner};
use crate::moves::move_descriptions::MoveDescription;
use crate::utils::algebraic::{algebraic_to_square, square_to_algebraic};

#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
    /// Row-major grid; `board[row][col]`, row 0 is Black's back rank.
    pub board: [[Option<Piece>; 8]; 8],

    // King-position caches. Always equal to the unique square holding the
    // color's King while it exists, `None` once it is captured. Written
    // only by move application and state construction.
    pub white_king: Option<Square>,
    pub black_king: Option<Square>,

    pub current_player: Color,

    /// Append-only log of executed moves; never mutated retroactively.
    pub move_history: Vec<MoveDescription>,

    pub game_over: bool,
    pub winner: Option<Winner>,
}

impl GameState {
    pub fn new_game() -> Self {
        Self::from_fen(STARTING_POSITION_FEN).expect("starting FEN should always parse")
    }

    /// Reinitialize to the starting layout in place.
    pub fn reset(&mut self) {
        *self = Self::new_game();
    }

    /// Occupant of `square`, `None` for empty or out-of-bounds squares.
    #[inline]
    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        if !square.in_bounds() {
            return None;
        }
        self.board[square.row as usize][square.col as usize]
    }

    /// Cached square of `color`'s King, `None` once it has been captured.
    #[inline]
    pub fn king_square(&self, color: Color) -> Option<Square> {
        match color {
            Color::White => self.white_king,
            Color::Black => self.black_king,
        }
    }

    /// Squares currently holding a paralyzed knight, in row-major order.
    /// Derived from the per-piece status flags; used for UI annotation and
    /// the FEN paralysis field.
    pub fn paralyzed_knights(&self) -> Vec<Square> {
        let mut squares = Vec::new();
        for row in 0..8u8 {
            for col in 0..8u8 {
                let square = Square::new(row, col);
                if let Some(piece) = self.piece_at(square) {
                    if piece.kind == PieceKind::Knight && piece.paralyzed {
                        squares.push(square);
                    }
                }
            }
        }
        squares
    }

    /// Parse the Archess FEN dialect: a standard placement field with `a`/`A`
    /// for Archers, a side-to-move field, and a paralyzed-square field
    /// (`-` or comma-separated algebraic squares that must hold knights).
    pub fn from_fen(fen: &str) -> Result<Self, ArchessErrors> {
        let mut fields = fen.split_ascii_whitespace();

        let placement = fields
            .next()
            .ok_or_else(|| ArchessErrors::InvalidFenString(fen.to_owned()))?;

        let mut board: [[Option<Piece>; 8]; 8] = [[None; 8]; 8];
        let mut white_king = None;
        let mut black_king = None;

        let mut row = 0usize;
        let mut col = 0usize;
        for c in placement.chars() {
            match c {
                '/' => {
                    if col != 8 || row >= 7 {
                        return Err(ArchessErrors::InvalidFenString(fen.to_owned()));
                    }
                    row += 1;
                    col = 0;
                }
                '1'..='8' => {
                    col += c.to_digit(10).expect("digit matched by pattern") as usize;
                    if col > 8 {
                        return Err(ArchessErrors::InvalidFenString(fen.to_owned()));
                    }
                }
                _ => {
                    let kind =
                        PieceKind::from_fen_char(c).ok_or(ArchessErrors::InvalidFenToken(c))?;
                    if col >= 8 {
                        return Err(ArchessErrors::InvalidFenString(fen.to_owned()));
                    }
                    let color = if c.is_ascii_uppercase() {
                        Color::White
                    } else {
                        Color::Black
                    };
                    let square = Square::new(row as u8, col as u8);
                    if kind == PieceKind::King {
                        match color {
                            Color::White => white_king = Some(square),
                            Color::Black => black_king = Some(square),
                        }
                    }
                    board[row][col] = Some(Piece::new(kind, color));
                    col += 1;
                }
            }
        }
        if row != 7 || col != 8 {
            return Err(ArchessErrors::InvalidFenString(fen.to_owned()));
        }

        let current_player = match fields.next() {
            Some("w") => Color::White,
            Some("b") => Color::Black,
            _ => return Err(ArchessErrors::InvalidFenString(fen.to_owned())),
        };

        let paralyzed_field = fields
            .next()
            .ok_or_else(|| ArchessErrors::InvalidFenString(fen.to_owned()))?;
        if paralyzed_field != "-" {
            for entry in paralyzed_field.split(',') {
                let square = algebraic_to_square(entry)?;
                match &mut board[square.row as usize][square.col as usize] {
                    Some(piece) if piece.kind == PieceKind::Knight => piece.paralyzed = true,
                    _ => return Err(ArchessErrors::InvalidFenString(fen.to_owned())),
                }
            }
        }

        Ok(GameState {
            board,
            white_king,
            black_king,
            current_player,
            move_history: Vec::new(),
            game_over: false,
            winner: None,
        })
    }

    pub fn get_fen(&self) -> String {
        let mut result = String::new();

        for row in 0..8usize {
            let mut empty_count = 0u8;
            for col in 0..8usize {
                match self.board[row][col] {
                    Some(piece) => {
                        if empty_count > 0 {
                            result.push(char::from(b'0' + empty_count));
                            empty_count = 0;
                        }
                        result.push(piece.kind.fen_char(piece.color));
                    }
                    None => empty_count += 1,
                }
            }
            if empty_count > 0 {
                result.push(char::from(b'0' + empty_count));
            }
            if row < 7 {
                result.push('/');
            }
        }

        result.push(' ');
        result.push(match self.current_player {
            Color::White => 'w',
            Color::Black => 'b',
        });

        result.push(' ');
        let paralyzed = self.paralyzed_knights();
        if paralyzed.is_empty() {
            result.push('-');
        } else {
            let entries: Vec<String> = paralyzed
                .iter()
                .map(|square| {
                    square_to_algebraic(*square).expect("scanned squares are always in bounds")
                })
                .collect();
            result.push_str(&entries.join(","));
        }

        result
    }
}
