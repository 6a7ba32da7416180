//! # Core Game Logic
//!
//! The state machine behind MentaliTTY.
//! It knows nothing about terminals, timers or threads. The game logic
//! (`state`, `action`, `agility`, `view`) does no I/O; `config` is the one
//! module that touches the filesystem.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • GameState            │
//!                    │  • Action / Effect      │
//!                    │  • update() (reducer)   │
//!                    │  • render() (text)      │
//!                    │                         │
//!                    │  No UI. I/O only in     │
//!                    │  config loading.        │
//!                    └───────────┬─────────────┘
//!                                │
//!                                ▼
//!                         ┌────────────┐
//!                         │    TUI     │
//!                         │  Adapter   │
//!                         │ (ratatui)  │
//!                         └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`state`]: `GameState` and the screen/mode/direction enums
//! - [`action`]: `Action`, `Effect` and the `update()` dispatcher
//! - [`agility`]: the Agility engine (prompt matching and scoring)
//! - [`prompt`]: injectable random prompt sources
//! - [`view`]: `render()` from state to display text
//! - [`config`]: settings file, env and CLI resolution

pub mod action;
pub mod agility;
pub mod config;
pub mod prompt;
pub mod state;
pub mod view;
