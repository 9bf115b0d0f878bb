//! PGN export of a played game.
//!
//! Serializes headers and the move history (coordinate notation) of a
//! `GameState` to PGN text. Positions loaded from FEN get `SetUp`/`FEN`
//! headers with the position the history started from.

use std::collections::BTreeMap;

use chrono::{Local, NaiveDate};

use crate::game_state::chess_rules::STARTING_POSITION_FEN;
use crate::game_state::chess_types::Color;
use crate::game_state::game_state::GameState;
use crate::utils::algebraic::move_to_coordinate_notation;

/// Standard seven-tag roster dated today.
pub fn write_pgn(game_state: &GameState) -> String {
    write_pgn_dated(game_state, Local::now().date_naive())
}

pub fn write_pgn_dated(game_state: &GameState, date: NaiveDate) -> String {
    let mut headers = BTreeMap::<String, String>::new();
    headers.insert("Event".to_owned(), "Overlay Chess Game".to_owned());
    headers.insert("Site".to_owned(), "Local".to_owned());
    headers.insert("Date".to_owned(), date.format("%Y.%m.%d").to_string());
    headers.insert("Round".to_owned(), "-".to_owned());
    headers.insert("White".to_owned(), "White".to_owned());
    headers.insert("Black".to_owned(), "Black".to_owned());
    headers.insert(
        "Result".to_owned(),
        game_state.game_result().result_token().to_owned(),
    );

    let initial_fen = initial_fen(game_state);
    if initial_fen != STARTING_POSITION_FEN {
        headers.insert("SetUp".to_owned(), "1".to_owned());
        headers.insert("FEN".to_owned(), initial_fen);
    }

    write_pgn_with_headers(game_state, &headers)
}

pub fn write_pgn_with_headers(game_state: &GameState, headers: &BTreeMap<String, String>) -> String {
    let mut out = String::new();

    for (key, value) in headers {
        out.push_str(&format!("[{} \"{}\"]\n", key, escape_pgn_value(value)));
    }
    out.push('\n');

    let history = game_state.history();
    let first_ply_black = history
        .first()
        .is_some_and(|entry| entry.moved_piece.color == Color::Black);
    let first_move_number = history
        .first()
        .map_or(game_state.fullmove_number(), |entry| entry.prev_fullmove_number);

    let mut movetext_parts = Vec::<String>::with_capacity(history.len() + 1);
    for (index, entry) in history.iter().enumerate() {
        let ply = index + usize::from(first_ply_black);
        let notation = move_to_coordinate_notation(entry.from, entry.to);
        if index == 0 && first_ply_black {
            movetext_parts.push(format!("{}... {}", first_move_number, notation));
        } else if ply % 2 == 0 {
            let move_number = usize::from(first_move_number) + ply / 2;
            movetext_parts.push(format!("{}. {}", move_number, notation));
        } else {
            movetext_parts.push(notation);
        }
    }

    let result = headers
        .get("Result")
        .map(|x| normalize_result(x))
        .unwrap_or("*");
    movetext_parts.push(result.to_owned());
    out.push_str(&movetext_parts.join(" "));
    out.push('\n');

    out
}

/// FEN of the position before the first recorded move.
fn initial_fen(game_state: &GameState) -> String {
    let mut unwound = game_state.clone();
    while unwound.undo_move().is_ok() {}
    unwound.get_fen()
}

fn is_result_token(token: &str) -> bool {
    matches!(token, "1-0" | "0-1" | "1/2-1/2" | "*")
}

fn normalize_result(result: &str) -> &str {
    if is_result_token(result) {
        result
    } else {
        "*"
    }
}

fn escape_pgn_value(value: &str) -> String {
    value.replace('"', "\\\"")
}
