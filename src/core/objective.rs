//! The hidden per-round objective.

use serde::{Deserialize, Serialize};

/// The goal the player is scored against this round.
///
/// Re-randomized on every round acknowledgment. Winning while the
/// objective is [`Objective::LoseThisRound`] costs a point, and losing
/// earns one; a draw never moves the score.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Objective {
    WinThisRound,
    LoseThisRound,
}

impl Objective {
    /// Banner text shown to the player for this round.
    #[must_use]
    pub fn prompt(self) -> &'static str {
        match self {
            Objective::WinThisRound => "Try to win",
            Objective::LoseThisRound => "Try to lose",
        }
    }
}
