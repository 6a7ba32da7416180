//! MentaliTTY library exports for testing

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

pub mod core;
pub mod tui;

#[cfg(test)]
pub mod test_support;

/// Where Agility prompts are drawn from.
#[derive(Clone, Debug, Default, PartialEq, Eq, ValueEnum, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RngSource {
    /// Operating system CSPRNG.
    #[default]
    Os,
    /// PRNG seeded from `--seed`, the config file, or the clock.
    Seeded,
}
