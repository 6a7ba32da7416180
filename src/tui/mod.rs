//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, arms timers, renders
//! the game text and translates keyboard events into core `Action` values.
//!
//! This is the only module that knows about ratatui, crossterm and tokio.
//!
//! ## Event Loop
//!
//! One event at a time, each processed to completion:
//!
//! ```text
//! key / timer  →  core::update()  →  Effect  →  draw
//!                                       │
//!                                       ├─ Schedule(class) → Timers
//!                                       └─ Quit           → exit, no draw
//! ```
//!
//! Timers are spawned tokio sleeps that report back over an mpsc channel,
//! so the loop only ever blocks on the terminal poll.

mod component;
pub mod components;
pub mod event;
pub mod timer;
pub mod ui;

use log::{debug, error, info};
use std::io::stdout;
use std::sync::mpsc;

use crossterm::cursor::{Hide, Show};
use crossterm::execute;
use ratatui::DefaultTerminal;

use crate::core::action::{self, Action, Effect, update};
use crate::core::config::ResolvedConfig;
use crate::core::prompt::{PromptSource, build_prompt_source};
use crate::core::state::GameState;
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};
use crate::tui::timer::Timers;

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        execute!(stdout(), Hide)?;
        info!("Terminal modes enabled (hidden cursor)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(stdout(), Show);
    }
}

/// Run the game until the player quits or the prompt source fails.
///
/// Must be called from inside a tokio runtime.
pub fn run(config: ResolvedConfig) -> std::io::Result<()> {
    let mut prompts = build_prompt_source(&config.rng, config.seed);

    let (tx, rx) = mpsc::channel();
    let mut timers = Timers::new(config.tick_interval, config.frame_interval, tx);

    let mut terminal = ratatui::init();
    let result = TerminalModeGuard::new().and_then(|_guard| {
        event_loop(
            &mut terminal,
            prompts.as_mut(),
            &mut timers,
            &rx,
            &config,
        )
    });
    ratatui::restore();

    if let Err(ref e) = result {
        error!("Event loop failed: {}", e);
    }
    result
}

fn event_loop(
    terminal: &mut DefaultTerminal,
    prompts: &mut dyn PromptSource,
    timers: &mut Timers,
    rx: &mpsc::Receiver<action::TimerClass>,
    config: &ResolvedConfig,
) -> std::io::Result<()> {
    let mut state = GameState::new();

    if let Effect::Schedule(class) = action::init() {
        timers.schedule(class);
    }
    terminal.draw(|f| ui::draw_ui(f, &state))?;

    loop {
        // Block until a key arrives or a frame interval passes, then take
        // every pending key and timer in arrival order per source.
        let first = poll_event_timeout(config.frame_interval)?;
        let mut actions = Vec::new();
        let mut needs_redraw = false;

        let mut next = first;
        while let Some(event) = next {
            match event {
                TuiEvent::Key(key) => actions.push(Action::Key(key)),
                TuiEvent::Resize => needs_redraw = true,
            }
            next = poll_event_immediate()?;
        }
        for class in rx.try_iter() {
            timers.fired(class);
            actions.push(Action::Timer(class));
        }

        for action in actions {
            debug!("Event loop received: {:?}", action);
            let (next_state, effect) = update(state, action, prompts)?;
            state = next_state;
            match effect {
                Effect::Quit => {
                    info!("Quitting with score {}", state.score);
                    return Ok(());
                }
                Effect::Schedule(class) => timers.schedule(class),
                Effect::None => {}
            }
            terminal.draw(|f| ui::draw_ui(f, &state))?;
            needs_redraw = false;
        }

        if needs_redraw {
            terminal.draw(|f| ui::draw_ui(f, &state))?;
        }
    }
}
