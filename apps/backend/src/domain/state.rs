use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use uuid::Uuid;

pub type Seat = u8; // 0..=1

/// Match mode: two humans, or one human against the computer.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    Pvp,
    Pvc,
}

/// Match progression phases.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    /// Fewer than two participants seated.
    Waiting,
    /// Round open, both participants may still act.
    InProgress,
    /// Both outcomes recorded, awaiting advance.
    RoundComplete,
    /// Round limit reached. Terminal.
    GameComplete,
}

/// One participant's in-match state plus lifetime counters carried
/// in from (and back out to) the player store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Participant {
    pub name: String,
    pub is_computer: bool,
    /// Sum of this participant's die outcomes for the whole match.
    pub score: u32,
    pub round_wins: u32,
    pub total_games: u32,
    pub total_wins: u32,
}

impl Participant {
    pub fn new(name: impl Into<String>, is_computer: bool) -> Self {
        Self {
            name: name.into(),
            is_computer,
            score: 0,
            round_wins: 0,
            total_games: 0,
            total_wins: 0,
        }
    }

    pub fn win_rate(&self) -> f64 {
        if self.total_games == 0 {
            return 0.0;
        }
        f64::from(self.total_wins) / f64::from(self.total_games)
    }

    /// Clear in-match tallies, keeping lifetime counters.
    pub fn reset_match_stats(&mut self) {
        self.score = 0;
        self.round_wins = 0;
    }
}

/// A single recorded die outcome. Immutable once recorded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnOutcome {
    pub player: String,
    pub value: u8,
    #[serde(with = "time::serde::rfc3339")]
    pub timestamp: OffsetDateTime,
}

/// A closed round: both outcomes plus the round winner (None on a tie).
/// Immutable once appended to history.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundRecord {
    pub round_no: u32,
    pub outcomes: Vec<TurnOutcome>,
    pub winner: Option<Seat>,
}

/// Entire match container, sufficient for pure domain operations.
///
/// Participants are owned by value and addressed by seat index; nothing
/// outside the match holds a live reference into it. Persistence works
/// from converted snapshots, never from these fields directly.
#[derive(Debug, Clone)]
pub struct MatchState {
    pub id: Uuid,
    pub mode: Mode,
    pub max_rounds: u32,
    /// 1-based. Never exceeds `max_rounds` while rounds are being played.
    pub current_round: u32,
    pub phase: Phase,
    /// 0, 1, or 2 entries; seat order is join order.
    pub participants: Vec<Participant>,
    /// Outcomes of the open round (0, 1, or 2 entries).
    pub open_round: Vec<TurnOutcome>,
    /// Append-only history of closed rounds.
    pub history: Vec<RoundRecord>,
    pub started_at: OffsetDateTime,
    pub ended_at: Option<OffsetDateTime>,
    /// Whether lifetime counters were already applied for this match.
    pub settled: bool,
}

impl MatchState {
    /// Create an empty match in the Waiting phase.
    ///
    /// The round limit is assumed validated (`rules::validate_round_limit`).
    pub fn new(id: Uuid, mode: Mode, max_rounds: u32) -> Self {
        Self {
            id,
            mode,
            max_rounds,
            current_round: 1,
            phase: Phase::Waiting,
            participants: Vec::with_capacity(super::rules::PLAYERS),
            open_round: Vec::with_capacity(super::rules::PLAYERS),
            history: Vec::new(),
            started_at: OffsetDateTime::now_utc(),
            ended_at: None,
            settled: false,
        }
    }

    pub fn is_round_complete(&self) -> bool {
        self.phase == Phase::RoundComplete
    }

    pub fn is_game_complete(&self) -> bool {
        self.phase == Phase::GameComplete
    }
}
