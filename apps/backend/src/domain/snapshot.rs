//! Public snapshot API for observing match state without exposing internals.

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use uuid::Uuid;

use crate::domain::state::{MatchState, Mode, Participant, Phase, TurnOutcome};

/// Public view of one participant: in-match stats plus lifetime counters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParticipantView {
    pub name: String,
    pub is_computer: bool,
    pub score: u32,
    pub round_wins: u32,
    pub total_games: u32,
    pub total_wins: u32,
    pub win_rate: f64,
}

impl From<&Participant> for ParticipantView {
    fn from(p: &Participant) -> Self {
        Self {
            name: p.name.clone(),
            is_computer: p.is_computer,
            score: p.score,
            round_wins: p.round_wins,
            total_games: p.total_games,
            total_wins: p.total_wins,
            win_rate: p.win_rate(),
        }
    }
}

/// Top-level external view of a match.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchSnapshot {
    pub match_id: Uuid,
    pub mode: Mode,
    pub max_rounds: u32,
    pub current_round: u32,
    pub phase: Phase,
    pub players: Vec<ParticipantView>,
    /// Outcomes recorded so far in the open round.
    pub current_round_rolls: Vec<TurnOutcome>,
    pub round_complete: bool,
    pub match_complete: bool,
    #[serde(with = "time::serde::rfc3339")]
    pub started_at: OffsetDateTime,
}

/// Produce the external view. Pure conversion: no validation, no mutation.
pub fn snapshot(state: &MatchState) -> MatchSnapshot {
    MatchSnapshot {
        match_id: state.id,
        mode: state.mode,
        max_rounds: state.max_rounds,
        current_round: state.current_round,
        phase: state.phase,
        players: state.participants.iter().map(ParticipantView::from).collect(),
        current_round_rolls: state.open_round.clone(),
        round_complete: state.is_round_complete(),
        match_complete: state.is_game_complete(),
        started_at: state.started_at,
    }
}
