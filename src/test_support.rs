//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use std::collections::VecDeque;

use crate::core::action::{Action, Key};
use crate::core::prompt::{PromptError, PromptSource};
use crate::core::state::{Direction, GameMode, GameState, Screen};

/// Plays back a fixed list of directions.
pub struct ScriptedPrompts {
    queue: VecDeque<Direction>,
    repeat: Vec<Direction>,
}

impl ScriptedPrompts {
    /// Yields `directions` once, then reports `Exhausted`.
    pub fn new(directions: &[Direction]) -> Self {
        Self {
            queue: directions.iter().copied().collect(),
            repeat: Vec::new(),
        }
    }

    /// Yields `directions` in a loop forever.
    pub fn cycle(directions: &[Direction]) -> Self {
        Self {
            queue: directions.iter().copied().collect(),
            repeat: directions.to_vec(),
        }
    }
}

impl PromptSource for ScriptedPrompts {
    fn name(&self) -> &str {
        "scripted"
    }

    fn next_prompt(&mut self) -> Result<Direction, PromptError> {
        if self.queue.is_empty() {
            self.queue.extend(self.repeat.iter().copied());
        }
        self.queue.pop_front().ok_or(PromptError::Exhausted)
    }
}

/// A source whose generator is always broken.
pub struct FailingPrompts;

impl PromptSource for FailingPrompts {
    fn name(&self) -> &str {
        "failing"
    }

    fn next_prompt(&mut self) -> Result<Direction, PromptError> {
        Err(PromptError::Source("no entropy".to_string()))
    }
}

/// Key press action from a key identifier.
pub fn key(id: &str) -> Action {
    Action::Key(Key::from(id))
}

/// An Agility round in progress showing `prompt`.
pub fn playing_agility(prompt: Direction, score: u32) -> GameState {
    GameState {
        screen: Screen::Playing(GameMode::Agility),
        score,
        prompt: Some(prompt),
        quitting: false,
    }
}
