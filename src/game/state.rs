//! Session state and round sequencing.
//!
//! ## State Machine
//!
//! Two phases, no terminal state:
//!
//! - **Choosing** (`revealed == false`): move-selection controls active.
//!   `submit_move` resolves the round and moves to Revealing.
//! - **Revealing** (`revealed == true`): outcome displayed, only the
//!   acknowledgment control active. `acknowledge_round` re-randomizes the
//!   objective and moves back to Choosing.
//!
//! Out-of-phase calls are silent no-ops; the UI model is "buttons
//! disabled during reveal", not errors.
//!
//! ## Scoring
//!
//! The score delta is fully determined by (outcome, objective): matching
//! the objective earns a point, missing it costs one, and a draw never
//! moves the score. After [`ROUNDS_PER_MATCH`] rounds the score becomes
//! visible; the acknowledgment that follows resets score and round
//! counter for a fresh match.

use serde::Serialize;

use crate::core::{GameRng, Move, MoveSource, Objective, Outcome};

/// Rounds before the running score is revealed.
pub const ROUNDS_PER_MATCH: u32 = 10;

/// The two phases of the round loop.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum Phase {
    /// Move-selection controls active.
    Choosing,
    /// Outcome displayed, waiting for acknowledgment.
    Revealing,
}

/// Everything the presentation layer needs to render a resolved round.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct RoundReport {
    /// The computer's move this round.
    pub computer_move: Move,
    /// The round's outcome from the user's side.
    pub outcome: Outcome,
    /// Display text for the outcome under this round's objective.
    pub message: &'static str,
    /// Running score after this round.
    pub score: i64,
    /// Whether the score display is (now) shown.
    pub score_visible: bool,
}

/// One session of the game.
///
/// Created once per session; mutated only by [`GameState::submit_move`]
/// and [`GameState::acknowledge_round`]. Generic over the randomness
/// source so tests can script every draw.
///
/// ```
/// use rps_engine::{GameState, Move, Objective, ScriptedSource};
///
/// let source = ScriptedSource::new([Move::Scissors], [Objective::WinThisRound]);
/// let mut game = GameState::with_source(source);
///
/// let report = game.submit_move(Move::Rock).unwrap();
/// assert_eq!(report.message, "You win!");
/// assert_eq!(game.score(), 1);
/// ```
#[derive(Clone, Debug)]
pub struct GameState<S = GameRng> {
    score: i64,
    objective: Objective,
    user_move: Option<Move>,
    computer_move: Option<Move>,
    rounds_played: u32,
    revealed: bool,
    score_visible: bool,
    source: S,
}

impl GameState<GameRng> {
    /// Create a session with entropy-seeded randomness, for real play.
    #[must_use]
    pub fn new() -> Self {
        Self::with_source(GameRng::from_entropy())
    }

    /// Create a session with a fixed seed, for replayable play.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self::with_source(GameRng::new(seed))
    }
}

impl Default for GameState<GameRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: MoveSource> GameState<S> {
    /// Create a session over the given randomness source.
    ///
    /// The first objective is drawn immediately, so the source's first
    /// objective value belongs to round one.
    #[must_use]
    pub fn with_source(mut source: S) -> Self {
        let objective = source.next_objective();
        Self {
            score: 0,
            objective,
            user_move: None,
            computer_move: None,
            rounds_played: 0,
            revealed: false,
            score_visible: false,
            source,
        }
    }

    // === Operations ===

    /// Resolve one round against a freshly drawn computer move.
    ///
    /// Returns `None` without touching any state if the current round is
    /// still being revealed.
    pub fn submit_move(&mut self, mv: Move) -> Option<RoundReport> {
        if self.revealed {
            return None;
        }

        let computer = self.source.next_move();
        self.user_move = Some(mv);
        self.computer_move = Some(computer);

        self.rounds_played += 1;
        if self.rounds_played == ROUNDS_PER_MATCH {
            self.score_visible = true;
        }

        let outcome = mv.resolve(computer);
        self.score += score_delta(outcome, self.objective);
        self.revealed = true;

        Some(RoundReport {
            computer_move: computer,
            outcome,
            message: round_message(outcome, self.objective),
            score: self.score,
            score_visible: self.score_visible,
        })
    }

    /// Acknowledge the revealed round and start the next one.
    ///
    /// Re-randomizes the objective. If the score was visible, this is the
    /// deferred match reset: score and round counter go back to zero.
    /// A no-op while still choosing.
    pub fn acknowledge_round(&mut self) {
        if !self.revealed {
            return;
        }

        if self.score_visible {
            self.score = 0;
            self.rounds_played = 0;
            self.score_visible = false;
        }

        self.objective = self.source.next_objective();
        self.revealed = false;
    }

    /// Zero the score without touching the round state.
    ///
    /// The original game binds this to tapping the score display.
    pub fn reset_score(&mut self) {
        self.score = 0;
    }

    // === Accessors ===

    /// Running score.
    #[must_use]
    pub fn score(&self) -> i64 {
        self.score
    }

    /// This round's hidden objective.
    #[must_use]
    pub fn objective(&self) -> Objective {
        self.objective
    }

    /// Whether the current round's outcome is on display.
    #[must_use]
    pub fn revealed(&self) -> bool {
        self.revealed
    }

    /// Whether the score display is shown.
    #[must_use]
    pub fn score_visible(&self) -> bool {
        self.score_visible
    }

    /// Rounds resolved since the last match reset.
    #[must_use]
    pub fn rounds_played(&self) -> u32 {
        self.rounds_played
    }

    /// The user's move this round, if one has been submitted.
    #[must_use]
    pub fn user_move(&self) -> Option<Move> {
        self.user_move
    }

    /// The computer's move this round, if one has been drawn.
    #[must_use]
    pub fn computer_move(&self) -> Option<Move> {
        self.computer_move
    }

    /// Current phase of the round loop.
    #[must_use]
    pub fn phase(&self) -> Phase {
        if self.revealed {
            Phase::Revealing
        } else {
            Phase::Choosing
        }
    }
}

/// Score movement for a resolved round: +1 when the outcome matches the
/// objective, -1 when it misses it, 0 on a draw.
fn score_delta(outcome: Outcome, objective: Objective) -> i64 {
    match (outcome, objective) {
        (Outcome::Win, Objective::WinThisRound) | (Outcome::Loss, Objective::LoseThisRound) => 1,
        (Outcome::Win, Objective::LoseThisRound) | (Outcome::Loss, Objective::WinThisRound) => -1,
        (Outcome::Draw, _) => 0,
    }
}

fn round_message(outcome: Outcome, objective: Objective) -> &'static str {
    match (outcome, objective) {
        (Outcome::Win, Objective::WinThisRound) => "You win!",
        (Outcome::Win, Objective::LoseThisRound) => "You win, sorry",
        (Outcome::Loss, Objective::WinThisRound) => "You lose, sorry",
        (Outcome::Loss, Objective::LoseThisRound) => "You lose!",
        (Outcome::Draw, _) => "Draw",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ScriptedSource;

    fn scripted(
        moves: impl IntoIterator<Item = Move>,
        objectives: impl IntoIterator<Item = Objective>,
    ) -> GameState<ScriptedSource> {
        GameState::with_source(ScriptedSource::new(moves, objectives))
    }

    #[test]
    fn test_new_session_defaults() {
        let game = scripted([Move::Rock], [Objective::WinThisRound]);

        assert_eq!(game.score(), 0);
        assert_eq!(game.rounds_played(), 0);
        assert!(!game.revealed());
        assert!(!game.score_visible());
        assert_eq!(game.user_move(), None);
        assert_eq!(game.computer_move(), None);
        assert_eq!(game.phase(), Phase::Choosing);
    }

    #[test]
    fn test_submit_transitions_to_revealing() {
        let mut game = scripted([Move::Scissors], [Objective::WinThisRound]);

        let report = game.submit_move(Move::Rock).unwrap();

        assert_eq!(report.computer_move, Move::Scissors);
        assert_eq!(report.outcome, Outcome::Win);
        assert_eq!(game.phase(), Phase::Revealing);
        assert_eq!(game.user_move(), Some(Move::Rock));
        assert_eq!(game.computer_move(), Some(Move::Scissors));
        assert_eq!(game.rounds_played(), 1);
    }

    #[test]
    fn test_submit_while_revealed_is_noop() {
        let mut game = scripted([Move::Scissors], [Objective::WinThisRound]);

        game.submit_move(Move::Rock).unwrap();
        let before_score = game.score();
        let before_rounds = game.rounds_played();

        assert!(game.submit_move(Move::Paper).is_none());

        assert_eq!(game.score(), before_score);
        assert_eq!(game.rounds_played(), before_rounds);
        assert_eq!(game.user_move(), Some(Move::Rock));
        assert_eq!(game.computer_move(), Some(Move::Scissors));
    }

    #[test]
    fn test_acknowledge_while_choosing_is_noop() {
        let mut game = scripted(
            [Move::Rock],
            [Objective::WinThisRound, Objective::LoseThisRound],
        );

        game.acknowledge_round();

        // Objective was not re-drawn and the phase did not change
        assert_eq!(game.objective(), Objective::WinThisRound);
        assert_eq!(game.phase(), Phase::Choosing);
    }

    #[test]
    fn test_acknowledge_redraws_objective() {
        let mut game = scripted(
            [Move::Rock],
            [Objective::WinThisRound, Objective::LoseThisRound],
        );
        assert_eq!(game.objective(), Objective::WinThisRound);

        game.submit_move(Move::Rock);
        game.acknowledge_round();

        assert_eq!(game.objective(), Objective::LoseThisRound);
        assert_eq!(game.phase(), Phase::Choosing);
    }

    #[test]
    fn test_reset_score_only_touches_score() {
        let mut game = scripted([Move::Scissors], [Objective::WinThisRound]);

        game.submit_move(Move::Rock);
        assert_eq!(game.score(), 1);

        game.reset_score();

        assert_eq!(game.score(), 0);
        assert_eq!(game.rounds_played(), 1);
        assert!(game.revealed());
    }

    #[test]
    fn test_seeded_sessions_replay() {
        let mut a = GameState::seeded(42);
        let mut b = GameState::seeded(42);

        assert_eq!(a.objective(), b.objective());

        for _ in 0..20 {
            let ra = a.submit_move(Move::Paper);
            let rb = b.submit_move(Move::Paper);
            assert_eq!(ra, rb);
            a.acknowledge_round();
            b.acknowledge_round();
            assert_eq!(a.objective(), b.objective());
        }
    }

    #[test]
    fn test_round_message_table() {
        assert_eq!(round_message(Outcome::Win, Objective::WinThisRound), "You win!");
        assert_eq!(round_message(Outcome::Win, Objective::LoseThisRound), "You win, sorry");
        assert_eq!(round_message(Outcome::Loss, Objective::WinThisRound), "You lose, sorry");
        assert_eq!(round_message(Outcome::Loss, Objective::LoseThisRound), "You lose!");
        assert_eq!(round_message(Outcome::Draw, Objective::WinThisRound), "Draw");
        assert_eq!(round_message(Outcome::Draw, Objective::LoseThisRound), "Draw");
    }

    #[test]
    fn test_report_serializes() {
        let mut game = scripted([Move::Scissors], [Objective::WinThisRound]);
        let report = game.submit_move(Move::Rock).unwrap();

        let json = serde_json::to_string(&report).unwrap();
        assert!(json.contains("\"You win!\""));
    }
}
