//! Core game types: moves, outcomes, objectives, RNG.
//!
//! This module contains the building blocks the round engine is made of.
//! Nothing here holds session state; that lives in `game`.

pub mod moves;
pub mod objective;
pub mod rng;

pub use moves::{Move, Outcome};
pub use objective::Objective;
pub use rng::{GameRng, GameRngState, MoveSource, ScriptedSource};
