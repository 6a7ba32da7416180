//! # View
//!
//! `render()` turns a `GameState` into plain text. Borders, padding and
//! centering belong to whoever displays it.

use crate::core::state::{GameMode, GameState, Screen};

pub const QUIT_HINT: &str = "Press q, esc, or ctrl+c to quit";

const MENU_ORDER: [GameMode; 4] = [
    GameMode::Agility,
    GameMode::Memory,
    GameMode::Perception,
    GameMode::Logic,
];

pub fn render(state: &GameState) -> String {
    match state.screen {
        Screen::Menu => render_menu(),
        Screen::Playing(GameMode::Agility) => render_agility(state),
        Screen::Playing(mode) => render_unavailable(mode),
        Screen::RoundOver(mode) => render_round_over(mode, state.score),
    }
}

fn render_menu() -> String {
    let choices = MENU_ORDER
        .iter()
        .map(|mode| {
            format!(
                " {} {}: {}",
                mode.menu_direction().glyph(),
                mode.label(),
                mode.description()
            )
        })
        .collect::<Vec<_>>()
        .join("\n");
    format!("{choices}\n\n{QUIT_HINT}")
}

fn render_agility(state: &GameState) -> String {
    let g = state.prompt.map(|p| p.glyph()).unwrap_or(" ");
    format!("  {g}\n {g}{g}{g}\n  {g}\n\n\nScore: {}", state.score)
}

fn render_unavailable(mode: GameMode) -> String {
    format!(
        "{} is not available yet\n\nPress any key to return to the menu\n{QUIT_HINT}",
        mode.label()
    )
}

fn render_round_over(mode: GameMode, score: u32) -> String {
    format!(
        "Good job!\n\nGame: {}\nScore: {}\n\nPress any key to continue",
        mode.label(),
        score
    )
}
