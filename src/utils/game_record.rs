//! Tagged game-record export.
//!
//! Serializes a game's move history to a PGN-style text block: a header
//! section, then numbered movetext in coordinate notation (`e2e4`; ranged
//! attacks as `e4*e6`) ending with a result token. Write-only — persistence
//! and replay beyond this textual record are the wrapper's concern.

use std::collections::BTreeMap;

use chrono::Utc;

use crate::archess_errors::ArchessErrors;
use crate::game_state::archess_types::{ActionType, Winner};
use crate::game_state::game_state::GameState;
use crate::moves::move_descriptions::MoveDescription;
use crate::utils::algebraic::square_to_algebraic;

/// Render one move in coordinate notation; ranged attacks carry a `*`
/// between the squares.
pub fn move_to_text(move_description: MoveDescription) -> Result<String, ArchessErrors> {
    let from = square_to_algebraic(move_description.from)?;
    let to = square_to_algebraic(move_description.to)?;
    let separator = match move_description.action {
        ActionType::Move => "",
        ActionType::RangedAttack => "*",
    };
    Ok(format!("{from}{separator}{to}"))
}

/// Write the game record with default headers and today's date.
pub fn write_game_record(state: &GameState) -> Result<String, ArchessErrors> {
    let mut headers = BTreeMap::<String, String>::new();
    headers.insert("Event".to_owned(), "Archess Game".to_owned());
    headers.insert("Site".to_owned(), "Local".to_owned());
    headers.insert(
        "Date".to_owned(),
        Utc::now().format("%Y.%m.%d").to_string(),
    );
    headers.insert("White".to_owned(), "White".to_owned());
    headers.insert("Black".to_owned(), "Black".to_owned());
    headers.insert("Result".to_owned(), result_token(state).to_owned());

    write_game_record_with_headers(state, &headers)
}

pub fn write_game_record_with_headers(
    state: &GameState,
    headers: &BTreeMap<String, String>,
) -> Result<String, ArchessErrors> {
    let mut out = String::new();

    for (key, value) in headers {
        out.push_str(&format!("[{} \"{}\"]\n", key, value));
    }
    out.push('\n');

    let mut movetext_parts = Vec::<String>::with_capacity(state.move_history.len() + 1);
    for (ply, mv) in state.move_history.iter().enumerate() {
        let text = move_to_text(*mv)?;
        if ply % 2 == 0 {
            movetext_parts.push(format!("{}. {}", (ply / 2) + 1, text));
        } else {
            movetext_parts.push(text);
        }
    }
    movetext_parts.push(result_token(state).to_owned());

    out.push_str(&movetext_parts.join(" "));
    out.push('\n');

    Ok(out)
}

/// PGN-style result token for the state's terminal flags.
pub fn result_token(state: &GameState) -> &'static str {
    match state.winner {
        Some(Winner::White) => "1-0",
        Some(Winner::Black) => "0-1",
        Some(Winner::Draw) => "1/2-1/2",
        None => "*",
    }
}
