//! # Game State
//!
//! Everything about the current session lives in one value. It is created at
//! startup on the menu and threaded through `update()` by value.
//!
//! ```text
//! GameState
//! ├── screen: Screen              // Menu | Playing(mode) | RoundOver(mode)
//! ├── score: u32                  // correct responses this round
//! ├── prompt: Option<Direction>   // arrow awaiting a response
//! └── quitting: bool              // player asked to exit
//! ```
//!
//! The selected mode rides inside the `Screen` variant, so a menu screen can
//! never carry a mode and a game screen can never lack one.

use std::fmt;

/// One of the four arrows the player reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Draw order. Index `n` of a uniform draw over 0..4 maps to `ALL[n]`.
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    pub fn glyph(self) -> &'static str {
        match self {
            Direction::Up => "↑",
            Direction::Down => "↓",
            Direction::Left => "←",
            Direction::Right => "→",
        }
    }
}

/// The mini-games offered on the menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameMode {
    /// Press the arrow keys you see.
    Agility,
    /// Remember the arrow key order.
    Memory,
    /// Choose the arrow key that's most numerous.
    Perception,
    /// Deduce the arrow key next in the pattern.
    Logic,
}

impl GameMode {
    pub fn label(self) -> &'static str {
        match self {
            GameMode::Agility => "Agility",
            GameMode::Memory => "Memory",
            GameMode::Perception => "Perception",
            GameMode::Logic => "Logic",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            GameMode::Agility => "Press the arrows keys you see",
            GameMode::Memory => "Remember the arrow key order",
            GameMode::Perception => "Choose the arrow key that's most numerous",
            GameMode::Logic => "Deduce the arrow key next in the pattern",
        }
    }

    /// Menu arrow that selects this mode.
    pub fn menu_direction(self) -> Direction {
        match self {
            GameMode::Agility => Direction::Up,
            GameMode::Memory => Direction::Down,
            GameMode::Perception => Direction::Left,
            GameMode::Logic => Direction::Right,
        }
    }
}

impl fmt::Display for GameMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Top-level screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    #[default]
    Menu,
    Playing(GameMode),
    RoundOver(GameMode),
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GameState {
    pub screen: Screen,
    pub score: u32,
    pub prompt: Option<Direction>,
    pub quitting: bool,
}

impl GameState {
    /// Fresh session sitting on the menu.
    pub fn new() -> Self {
        Self::default()
    }

    /// Selected mode, `None` exactly when the menu is showing.
    pub fn mode(&self) -> Option<GameMode> {
        match self.screen {
            Screen::Menu => None,
            Screen::Playing(mode) | Screen::RoundOver(mode) => Some(mode),
        }
    }

    pub fn is_playing(&self, mode: GameMode) -> bool {
        self.screen == Screen::Playing(mode)
    }
}
