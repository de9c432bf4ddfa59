//! The round engine: session state and its two operations.

pub mod state;

pub use state::{GameState, Phase, RoundReport, ROUNDS_PER_MATCH};
