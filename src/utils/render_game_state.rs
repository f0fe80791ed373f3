//! Terminal-oriented Unicode board renderer.
//!
//! Creates a human-readable board view for debugging, tests, and
//! diagnostics in text environments. Archers render as `A`/`a` since no
//! Unicode chess glyph exists for them; paralyzed squares are listed on a
//! trailing annotation line.

use crate::game_state::archess_types::{Color, Piece, PieceKind, Square};
use crate::game_state::game_state::GameState;
use crate::utils::algebraic::square_to_algebraic;

/// Render the board to a Unicode string for terminal output, rank 8 at the
/// top.
pub fn render_game_state(state: &GameState) -> String {
    let mut out = String::new();

    out.push_str("  a b c d e f g h\n");

    for row in 0..8u8 {
        let rank_char = char::from(b'8' - row);
        out.push(rank_char);
        out.push(' ');

        for col in 0..8u8 {
            match state.piece_at(Square::new(row, col)) {
                Some(piece) => out.push(piece_to_char(piece)),
                None => out.push('·'),
            }

            if col < 7 {
                out.push(' ');
            }
        }

        out.push(' ');
        out.push(rank_char);
        out.push('\n');
    }

    out.push_str("  a b c d e f g h");

    let paralyzed = state.paralyzed_knights();
    if !paralyzed.is_empty() {
        out.push_str("\nparalyzed:");
        for square in paralyzed {
            out.push(' ');
            out.push_str(
                &square_to_algebraic(square).expect("scanned squares are always in bounds"),
            );
        }
    }

    out
}

fn piece_to_char(piece: Piece) -> char {
    match (piece.color, piece.kind) {
        (Color::White, PieceKind::Pawn) => '♙',
        (Color::White, PieceKind::Knight) => '♘',
        (Color::White, PieceKind::Bishop) => '♗',
        (Color::White, PieceKind::Rook) => '♖',
        (Color::White, PieceKind::Queen) => '♕',
        (Color::White, PieceKind::King) => '♔',
        (Color::White, PieceKind::Archer) => 'A',
        (Color::Black, PieceKind::Pawn) => '♟',
        (Color::Black, PieceKind::Knight) => '♞',
        (Color::Black, PieceKind::Bishop) => '♝',
        (Color::Black, PieceKind::Rook) => '♜',
        (Color::Black, PieceKind::Queen) => '♛',
        (Color::Black, PieceKind::King) => '♚',
        (Color::Black, PieceKind::Archer) => 'a',
    }
}
