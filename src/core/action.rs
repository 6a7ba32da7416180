//! # Actions
//!
//! Everything that can happen in the game becomes an `Action`.
//! Player presses an arrow? That's `Action::Key(Key::Up)`.
//! The frame timer fires? That's `Action::Timer(TimerClass::Frame)`.
//!
//! `update()` takes the current state and an action and returns the next
//! state plus an `Effect` for the event loop to carry out. No I/O here.
//!
//! ```text
//! State + Action  →  update()  →  (New State, Effect)
//! ```
//!
//! Dispatch is by screen first and, while playing, by mode:
//!
//! ```text
//! quit key (not on RoundOver)  →  quitting, Effect::Quit
//! Menu                         →  menu::update
//! Playing(Agility)             →  agility::update
//! Playing(other)               →  placeholder (any key back to menu)
//! RoundOver                    →  any key back to menu
//! ```

use std::fmt;

use log::{debug, info};

use crate::core::agility;
use crate::core::prompt::{PromptError, PromptSource};
use crate::core::state::{Direction, GameMode, GameState, Screen};

/// Key identifier as delivered by the terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Up,
    Down,
    Left,
    Right,
    Enter,
    Esc,
    CtrlC,
    Char(char),
    /// Anything the game has no binding for.
    Other,
}

impl Key {
    /// `q`, `esc` and `ctrl+c` leave the game.
    pub fn is_quit(self) -> bool {
        matches!(self, Key::Char('q') | Key::Esc | Key::CtrlC)
    }

    /// Arrow keys and their WASD alternates.
    pub fn direction(self) -> Option<Direction> {
        match self {
            Key::Up | Key::Char('w') => Some(Direction::Up),
            Key::Down | Key::Char('s') => Some(Direction::Down),
            Key::Left | Key::Char('a') => Some(Direction::Left),
            Key::Right | Key::Char('d') => Some(Direction::Right),
            _ => None,
        }
    }
}

impl From<&str> for Key {
    fn from(id: &str) -> Self {
        match id {
            "up" => Key::Up,
            "down" => Key::Down,
            "left" => Key::Left,
            "right" => Key::Right,
            "enter" => Key::Enter,
            "esc" => Key::Esc,
            "ctrl+c" => Key::CtrlC,
            _ => {
                let mut chars = id.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => Key::Char(c),
                    _ => Key::Other,
                }
            }
        }
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Key::Up => f.write_str("up"),
            Key::Down => f.write_str("down"),
            Key::Left => f.write_str("left"),
            Key::Right => f.write_str("right"),
            Key::Enter => f.write_str("enter"),
            Key::Esc => f.write_str("esc"),
            Key::CtrlC => f.write_str("ctrl+c"),
            Key::Char(c) => write!(f, "{c}"),
            Key::Other => f.write_str("<unknown>"),
        }
    }
}

/// The two timer classes the event loop can arm.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimerClass {
    /// Low-frequency timer, armed once at startup.
    Tick,
    /// UI refresh timer, re-armed by menu and play updates.
    Frame,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Key(Key),
    Timer(TimerClass),
}

/// What the event loop should do after an update.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    Schedule(TimerClass),
    Quit,
}

/// Effect to run once before the first event.
pub fn init() -> Effect {
    Effect::Schedule(TimerClass::Tick)
}

/// Compute the next state for `action`.
///
/// Fails only when the prompt source fails while a new Agility prompt is
/// needed.
pub fn update(
    state: GameState,
    action: Action,
    prompts: &mut dyn PromptSource,
) -> Result<(GameState, Effect), PromptError> {
    if state.quitting {
        return Ok((state, Effect::Quit));
    }

    if let Action::Key(key) = action
        && key.is_quit()
        && !matches!(state.screen, Screen::RoundOver(_))
    {
        info!("Quit requested with '{}' (score {})", key, state.score);
        return Ok((
            GameState {
                quitting: true,
                ..state
            },
            Effect::Quit,
        ));
    }

    let (next, effect) = match state.screen {
        Screen::Menu => update_menu(state, action),
        Screen::RoundOver(_) => update_round_over(state, action),
        Screen::Playing(GameMode::Agility) => agility::update(state, action),
        Screen::Playing(GameMode::Memory | GameMode::Perception | GameMode::Logic) => {
            update_placeholder(state, action)
        }
    };

    let next = agility::ensure_prompt(next, prompts)?;
    Ok((next, effect))
}

fn update_menu(state: GameState, action: Action) -> (GameState, Effect) {
    let selected = match action {
        Action::Key(key) => match key.direction() {
            Some(Direction::Up) => Some(GameMode::Agility),
            Some(Direction::Down) => Some(GameMode::Memory),
            // Reserved for Perception and Logic.
            Some(Direction::Left | Direction::Right) | None => None,
        },
        Action::Timer(_) => None,
    };

    let effect = Effect::Schedule(TimerClass::Frame);
    match selected {
        Some(mode) => {
            info!("Starting {} round", mode);
            (start_round(state, mode), effect)
        }
        None => (state, effect),
    }
}

/// Enter `Playing(mode)` with a clean score and no pending prompt.
fn start_round(state: GameState, mode: GameMode) -> GameState {
    GameState {
        screen: Screen::Playing(mode),
        score: 0,
        prompt: None,
        ..state
    }
}

fn update_round_over(state: GameState, action: Action) -> (GameState, Effect) {
    match action {
        Action::Key(key) => {
            debug!("Round over dismissed with '{}'", key);
            (back_to_menu(state), Effect::Schedule(TimerClass::Frame))
        }
        Action::Timer(_) => (state, Effect::None),
    }
}

fn update_placeholder(state: GameState, action: Action) -> (GameState, Effect) {
    match action {
        Action::Key(key) => {
            debug!("Leaving unavailable mode {:?} with '{}'", state.mode(), key);
            (back_to_menu(state), Effect::Schedule(TimerClass::Frame))
        }
        Action::Timer(_) => (state, Effect::Schedule(TimerClass::Frame)),
    }
}

/// Return to the menu. The score is kept until the next round starts.
fn back_to_menu(state: GameState) -> GameState {
    info!("Back to menu");
    GameState {
        screen: Screen::Menu,
        prompt: None,
        ..state
    }
}
