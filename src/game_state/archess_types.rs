//! Core data types shared by every Archess subsystem.

/// Board coordinate. `row` 0 is Black's back rank, `row` 7 is White's;
/// `col` 0 is the a-file. Values outside `[0, 7]` are representable but
/// rejected by `in_bounds`, which the validator checks first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Square {
    pub row: u8,
    pub col: u8,
}

impl Square {
    #[inline]
    pub const fn new(row: u8, col: u8) -> Self {
        Self { row, col }
    }

    #[inline]
    pub const fn in_bounds(self) -> bool {
        self.row < 8 && self.col < 8
    }

    /// Row-major index in `[0, 63]`.
    #[inline]
    pub const fn index(self) -> u16 {
        self.row as u16 * 8 + self.col as u16
    }

    /// Shift by a (row, col) delta, `None` when the result leaves the board.
    #[inline]
    pub fn offset(self, d_row: i8, d_col: i8) -> Option<Square> {
        let row = self.row as i8 + d_row;
        let col = self.col as i8 + d_col;
        if (0..8).contains(&row) && (0..8).contains(&col) {
            Some(Square::new(row as u8, col as u8))
        } else {
            None
        }
    }
}

/// Side to move / piece ownership.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    White,
    Black,
}

impl Color {
    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// Row delta of this color's forward direction. White advances toward
    /// row 0, Black toward row 7.
    #[inline]
    pub const fn forward(self) -> i8 {
        match self {
            Color::White => -1,
            Color::Black => 1,
        }
    }

    /// Home rank of this color's pawns and archers, gating the double-step.
    #[inline]
    pub const fn pawn_start_row(self) -> u8 {
        match self {
            Color::White => 6,
            Color::Black => 1,
        }
    }
}

/// Piece kind (color is represented separately on `Piece`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
    Archer,
}

impl PieceKind {
    /// Material value used for capture rewards and greedy scoring.
    #[inline]
    pub const fn value(self) -> i32 {
        match self {
            PieceKind::Pawn => 1,
            PieceKind::Archer => 2,
            PieceKind::Knight => 3,
            PieceKind::Bishop => 3,
            PieceKind::Rook => 5,
            PieceKind::Queen => 9,
            PieceKind::King => 1000,
        }
    }

    /// Parse a FEN placement letter (either case) into a kind.
    pub fn from_fen_char(c: char) -> Option<PieceKind> {
        match c.to_ascii_lowercase() {
            'p' => Some(PieceKind::Pawn),
            'n' => Some(PieceKind::Knight),
            'b' => Some(PieceKind::Bishop),
            'r' => Some(PieceKind::Rook),
            'q' => Some(PieceKind::Queen),
            'k' => Some(PieceKind::King),
            'a' => Some(PieceKind::Archer),
            _ => None,
        }
    }

    /// FEN placement letter: uppercase for White, lowercase for Black.
    pub fn fen_char(self, color: Color) -> char {
        let c = match self {
            PieceKind::Pawn => 'p',
            PieceKind::Knight => 'n',
            PieceKind::Bishop => 'b',
            PieceKind::Rook => 'r',
            PieceKind::Queen => 'q',
            PieceKind::King => 'k',
            PieceKind::Archer => 'a',
        };
        match color {
            Color::White => c.to_ascii_uppercase(),
            Color::Black => c,
        }
    }
}

/// A board occupant: kind, owner, and paralysis status.
///
/// Paralysis is a status on the piece itself, not on the square it stands
/// on, so capturing or (in a future scope) moving the piece carries the
/// status with it and no stale square markers can exist.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Piece {
    pub kind: PieceKind,
    pub color: Color,
    pub paralyzed: bool,
}

impl Piece {
    #[inline]
    pub const fn new(kind: PieceKind, color: Color) -> Self {
        Self {
            kind,
            color,
            paralyzed: false,
        }
    }
}

/// Discriminator carried by every action: relocate the piece, or attack
/// without moving.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActionType {
    Move,
    RangedAttack,
}

impl ActionType {
    #[inline]
    pub const fn index(self) -> u16 {
        match self {
            ActionType::Move => 0,
            ActionType::RangedAttack => 1,
        }
    }
}

/// Terminal result of a game. `Draw` is reserved: no rule in the current
/// scope produces it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Winner {
    White,
    Black,
    Draw,
}
