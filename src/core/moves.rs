//! Moves and outcomes under standard rock-paper-scissors rules.
//!
//! The resolve table is fixed: rock beats scissors, scissors beats paper,
//! paper beats rock, identical moves draw. `Move::resolve` is the only
//! place in the crate where the table lives.

use serde::{Deserialize, Serialize};

/// A move chosen by a player for one round.
///
/// Invalid moves cannot be expressed: the enum is the validation.
///
/// ```
/// use rps_engine::{Move, Outcome};
///
/// assert_eq!(Move::Rock.resolve(Move::Scissors), Outcome::Win);
/// assert_eq!(Move::Rock.resolve(Move::Paper), Outcome::Loss);
/// assert_eq!(Move::Rock.resolve(Move::Rock), Outcome::Draw);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Move {
    Rock,
    Paper,
    Scissors,
}

impl Move {
    /// All three moves, in display order.
    ///
    /// Used for uniform sampling and for laying out selection controls.
    pub const ALL: [Move; 3] = [Move::Rock, Move::Paper, Move::Scissors];

    /// Check if this move beats the other under the fixed table.
    #[must_use]
    pub fn beats(self, other: Move) -> bool {
        matches!(
            (self, other),
            (Move::Rock, Move::Scissors)
                | (Move::Scissors, Move::Paper)
                | (Move::Paper, Move::Rock)
        )
    }

    /// Resolve this move against an opponent's, from this move's side.
    #[must_use]
    pub fn resolve(self, other: Move) -> Outcome {
        if self == other {
            Outcome::Draw
        } else if self.beats(other) {
            Outcome::Win
        } else {
            Outcome::Loss
        }
    }

    /// Emoji glyph for presentation layers.
    #[must_use]
    pub fn emoji(self) -> &'static str {
        match self {
            Move::Rock => "\u{1FAA8}",     // 🪨
            Move::Paper => "\u{1F4C3}",    // 📃
            Move::Scissors => "\u{2702}\u{FE0F}", // ✂️
        }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Move::Rock => "Rock",
            Move::Paper => "Paper",
            Move::Scissors => "Scissors",
        };
        write!(f, "{name}")
    }
}

/// The result of comparing two moves, from one side's perspective.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    Win,
    Loss,
    Draw,
}

impl Outcome {
    /// The same comparison seen from the other side.
    #[must_use]
    pub fn inverted(self) -> Outcome {
        match self {
            Outcome::Win => Outcome::Loss,
            Outcome::Loss => Outcome::Win,
            Outcome::Draw => Outcome::Draw,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_resolve_table() {
        let expected = [
            (Move::Rock, Move::Rock, Outcome::Draw),
            (Move::Rock, Move::Paper, Outcome::Loss),
            (Move::Rock, Move::Scissors, Outcome::Win),
            (Move::Paper, Move::Rock, Outcome::Win),
            (Move::Paper, Move::Paper, Outcome::Draw),
            (Move::Paper, Move::Scissors, Outcome::Loss),
            (Move::Scissors, Move::Rock, Outcome::Loss),
            (Move::Scissors, Move::Paper, Outcome::Win),
            (Move::Scissors, Move::Scissors, Outcome::Draw),
        ];

        for (user, computer, outcome) in expected {
            assert_eq!(
                user.resolve(computer),
                outcome,
                "{user} vs {computer}"
            );
        }
    }

    #[test]
    fn test_beats_is_exclusive() {
        for a in Move::ALL {
            for b in Move::ALL {
                // At most one side beats the other
                assert!(!(a.beats(b) && b.beats(a)), "{a} vs {b}");
                // Nobody beats themselves
                if a == b {
                    assert!(!a.beats(b));
                }
            }
        }
    }

    #[test]
    fn test_outcome_inverted() {
        assert_eq!(Outcome::Win.inverted(), Outcome::Loss);
        assert_eq!(Outcome::Loss.inverted(), Outcome::Win);
        assert_eq!(Outcome::Draw.inverted(), Outcome::Draw);
    }

    #[test]
    fn test_display() {
        assert_eq!(Move::Rock.to_string(), "Rock");
        assert_eq!(Move::Paper.to_string(), "Paper");
        assert_eq!(Move::Scissors.to_string(), "Scissors");
    }

    #[test]
    fn test_move_serde() {
        for mv in Move::ALL {
            let json = serde_json::to_string(&mv).unwrap();
            let back: Move = serde_json::from_str(&json).unwrap();
            assert_eq!(mv, back);
        }
    }
}
