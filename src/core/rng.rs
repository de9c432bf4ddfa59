//! Randomness injection for the round engine.
//!
//! All randomness the engine consumes — the computer's move and the
//! per-round objective — flows through the [`MoveSource`] capability.
//! Production code uses [`GameRng`]; tests substitute a
//! [`ScriptedSource`] to make `submit_move` fully deterministic.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use super::moves::Move;
use super::objective::Objective;

/// Source of the engine's random decisions.
pub trait MoveSource {
    /// Draw a computer move, uniform over the three moves.
    fn next_move(&mut self) -> Move;

    /// Draw the objective for the next round, a fair coin.
    fn next_objective(&mut self) -> Objective;
}

/// Deterministic seeded RNG.
///
/// Uses ChaCha8 for speed while maintaining cryptographic quality
/// randomness. The same seed produces an identical sequence of moves and
/// objectives, which makes whole sessions replayable.
///
/// ```
/// use rps_engine::core::{GameRng, MoveSource};
///
/// let mut a = GameRng::new(42);
/// let mut b = GameRng::new(42);
/// assert_eq!(a.next_move(), b.next_move());
/// assert_eq!(a.next_objective(), b.next_objective());
/// ```
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Create an RNG with a random seed, for real play.
    ///
    /// The drawn seed is retained, so sessions started this way are still
    /// capturable via [`GameRng::state`].
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::random())
    }

    /// Get the current state for serialization.
    #[must_use]
    pub fn state(&self) -> GameRngState {
        GameRngState {
            seed: self.seed,
            word_pos: self.inner.get_word_pos(),
        }
    }

    /// Restore from a saved state.
    #[must_use]
    pub fn from_state(state: &GameRngState) -> Self {
        let mut inner = ChaCha8Rng::seed_from_u64(state.seed);
        inner.set_word_pos(state.word_pos);
        Self {
            inner,
            seed: state.seed,
        }
    }
}

impl MoveSource for GameRng {
    fn next_move(&mut self) -> Move {
        Move::ALL[self.inner.gen_range(0..Move::ALL.len())]
    }

    fn next_objective(&mut self) -> Objective {
        if self.inner.gen_bool(0.5) {
            Objective::WinThisRound
        } else {
            Objective::LoseThisRound
        }
    }
}

/// Serializable RNG state for checkpointing a session mid-stream.
///
/// Uses the ChaCha8 word position for O(1) serialization regardless of
/// how many values have been drawn.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRngState {
    /// Original seed
    pub seed: u64,
    /// ChaCha8 word position (128-bit counter)
    pub word_pos: u128,
}

/// Fixed-sequence source for tests.
///
/// Both sequences repeat once exhausted, so a one-element script pins a
/// value for an entire session.
///
/// ```
/// use rps_engine::core::{Move, MoveSource, Objective, ScriptedSource};
///
/// let mut source = ScriptedSource::new(
///     [Move::Scissors, Move::Paper],
///     [Objective::WinThisRound],
/// );
/// assert_eq!(source.next_move(), Move::Scissors);
/// assert_eq!(source.next_move(), Move::Paper);
/// assert_eq!(source.next_move(), Move::Scissors); // wrapped
/// assert_eq!(source.next_objective(), Objective::WinThisRound);
/// ```
#[derive(Clone, Debug)]
pub struct ScriptedSource {
    moves: Vec<Move>,
    objectives: Vec<Objective>,
    move_idx: usize,
    objective_idx: usize,
}

impl ScriptedSource {
    /// Create a source that replays the given sequences, cycling.
    pub fn new(
        moves: impl IntoIterator<Item = Move>,
        objectives: impl IntoIterator<Item = Objective>,
    ) -> Self {
        let moves: Vec<Move> = moves.into_iter().collect();
        let objectives: Vec<Objective> = objectives.into_iter().collect();
        assert!(!moves.is_empty(), "ScriptedSource needs at least one move");
        assert!(
            !objectives.is_empty(),
            "ScriptedSource needs at least one objective"
        );

        Self {
            moves,
            objectives,
            move_idx: 0,
            objective_idx: 0,
        }
    }
}

impl MoveSource for ScriptedSource {
    fn next_move(&mut self) -> Move {
        let mv = self.moves[self.move_idx % self.moves.len()];
        self.move_idx += 1;
        mv
    }

    fn next_objective(&mut self) -> Objective {
        let obj = self.objectives[self.objective_idx % self.objectives.len()];
        self.objective_idx += 1;
        obj
    }
}
