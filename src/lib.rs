//! # rps-engine
//!
//! Round engine for mixed-objective rock-paper-scissors.
//!
//! Ordinary rock-paper-scissors, with a twist: every round carries a hidden
//! random **objective** ("try to win" or "try to lose"), and the running
//! score moves up or down depending on whether the player's actual outcome
//! matched that objective. After ten rounds the score is revealed and the
//! match starts over on the next acknowledgment.
//!
//! ## Design Principles
//!
//! 1. **Presentation-Free**: The engine is a pure state machine. A UI layer
//!    submits moves, acknowledges rounds, and reads state to render.
//!
//! 2. **Injected Randomness**: All randomness flows through the
//!    [`MoveSource`] capability. Production code uses the seeded
//!    [`GameRng`]; tests substitute a [`ScriptedSource`] with a fixed
//!    sequence.
//!
//! 3. **No Error Taxonomy**: Inputs are constrained by enums at the
//!    boundary, and out-of-sequence calls are silent no-ops (the UI model
//!    is "buttons disabled during reveal").
//!
//! ## Modules
//!
//! - `core`: Moves, outcomes, objectives, RNG
//! - `game`: The round engine (`GameState`) and its report types

pub mod core;
pub mod game;

// Re-export commonly used types
pub use crate::core::{GameRng, GameRngState, Move, MoveSource, Objective, Outcome, ScriptedSource};

pub use crate::game::{GameState, Phase, RoundReport, ROUNDS_PER_MATCH};
