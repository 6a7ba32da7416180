//! # TUI Components
//!
//! UI components for the terminal interface.
//!
//! Components receive everything they show as props (struct fields) and
//! never read `GameState` directly. The game decides *what* to say through
//! `core::view::render()`; components decide *where* it goes.
//!
//! ```text
//! components/
//! ├── mod.rs        (this file)
//! └── game_box.rs   (centered bordered panel holding the screen text)
//! ```

pub mod game_box;
pub use game_box::GameBox;
