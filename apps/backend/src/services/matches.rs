//! Match orchestration service - bridges the pure state machine with the
//! registry and the player store.
//!
//! Registry lookups hand out the per-match mutex; every state transition
//! below happens under that lock, and the lock is never held across a
//! store call.

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::domain::dice::ThreadDie;
use crate::domain::match_flow;
use crate::domain::rules::validate_round_limit;
use crate::domain::snapshot::{snapshot, MatchSnapshot, ParticipantView};
use crate::domain::state::{Mode, Participant, TurnOutcome};
use crate::error::AppError;
use crate::errors::domain::DomainError;
use crate::errors::ErrorCode;
use crate::repos::players::PlayerRecord;
use crate::state::app_state::AppState;
use crate::state::match_registry::SharedMatch;

pub const LEADERBOARD_SIZE: usize = 10;

const PLAYER_ONE: &str = "Player 1";
const PLAYER_TWO: &str = "Player 2";
const COMPUTER: &str = "Computer";

/// Outcome of a single turn plus the resulting match view.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RollResponse {
    pub outcome: TurnOutcome,
    pub round_closed: bool,
    /// Name of the round winner when this turn closed a round; None on a
    /// tie or while the round is still open.
    pub round_winner: Option<String>,
    pub game: MatchSnapshot,
}

/// Final result of a match, consumed exactly once via `end_match`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchResult {
    pub match_id: Uuid,
    pub winner: Option<ParticipantView>,
    pub is_draw: bool,
    /// Rounds played, computed as current round - 1.
    pub total_rounds: u32,
    /// Final cumulative scores in seat order.
    pub final_scores: Vec<u32>,
    #[serde(with = "time::serde::rfc3339")]
    pub timestamp: OffsetDateTime,
    /// False when at least one lifetime record could not be persisted.
    /// The result itself is unaffected; the match is gone either way.
    pub stats_saved: bool,
}

/// One leaderboard row, straight from the player store.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LeaderboardRow {
    pub name: String,
    pub total_games: u32,
    pub total_wins: u32,
    pub win_rate: f64,
    #[serde(with = "time::serde::rfc3339")]
    pub last_played: OffsetDateTime,
}

impl From<PlayerRecord> for LeaderboardRow {
    fn from(record: PlayerRecord) -> Self {
        Self {
            win_rate: record.win_rate(),
            name: record.name,
            total_games: record.total_games,
            total_wins: record.total_wins,
            last_played: record.last_played,
        }
    }
}

/// Match orchestration service.
pub struct MatchService;

impl MatchService {
    pub fn new() -> Self {
        Self
    }

    /// Create a match, seat both participants, and register it.
    pub async fn start_match(
        &self,
        state: &AppState,
        mode: Mode,
        rounds: u32,
    ) -> Result<MatchSnapshot, AppError> {
        validate_round_limit(rounds)?;

        let shared = state.matches.create(mode, rounds);
        let view = {
            let mut m = shared.lock();
            match_flow::add_participant(&mut m, Participant::new(PLAYER_ONE, false))?;
            let second = match mode {
                Mode::Pvp => Participant::new(PLAYER_TWO, false),
                Mode::Pvc => Participant::new(COMPUTER, true),
            };
            match_flow::add_participant(&mut m, second)?;
            snapshot(&m)
        };

        info!(match_id = %view.match_id, ?mode, rounds, "Match started");
        Ok(view)
    }

    /// Record a turn for the named participant.
    pub async fn roll(
        &self,
        state: &AppState,
        id: Uuid,
        player_name: &str,
    ) -> Result<RollResponse, AppError> {
        let shared = require_match(state, &id)?;

        let response = {
            let mut m = shared.lock();
            let recorded = match_flow::record_turn(&mut m, player_name, &mut ThreadDie)?;
            let round_winner = recorded
                .round_winner
                .map(|seat| m.participants[seat as usize].name.clone());
            RollResponse {
                outcome: recorded.outcome,
                round_closed: recorded.round_closed,
                round_winner,
                game: snapshot(&m),
            }
        };

        debug!(
            match_id = %id,
            player = player_name,
            value = response.outcome.value,
            round_closed = response.round_closed,
            "Turn recorded"
        );
        Ok(response)
    }

    /// Advance past a completed round.
    pub async fn advance_round(&self, state: &AppState, id: Uuid) -> Result<MatchSnapshot, AppError> {
        let shared = require_match(state, &id)?;

        let view = {
            let mut m = shared.lock();
            match_flow::advance_round(&mut m)?;
            snapshot(&m)
        };

        debug!(match_id = %id, round = view.current_round, "Round advanced");
        Ok(view)
    }

    /// Pure lookup; no mutation.
    pub async fn get_state(&self, state: &AppState, id: Uuid) -> Result<MatchSnapshot, AppError> {
        let shared = require_match(state, &id)?;
        let view = {
            let m = shared.lock();
            snapshot(&m)
        };
        Ok(view)
    }

    /// Consume a match: persist human lifetime stats, compute the final
    /// result, and drop the match from the registry.
    ///
    /// The result is computed before any store call, and registry removal
    /// does not depend on persistence succeeding; a failed write only
    /// clears `stats_saved`.
    pub async fn end_match(&self, state: &AppState, id: Uuid) -> Result<MatchResult, AppError> {
        let shared = require_match(state, &id)?;

        let (participants, winner_seat, total_rounds) = {
            let m = shared.lock();
            (m.participants.clone(), match_flow::winner(&m), m.current_round - 1)
        };

        let mut result = MatchResult {
            match_id: id,
            winner: winner_seat.map(|seat| ParticipantView::from(&participants[seat as usize])),
            is_draw: winner_seat.is_none(),
            total_rounds,
            final_scores: participants.iter().map(|p| p.score).collect(),
            timestamp: OffsetDateTime::now_utc(),
            stats_saved: true,
        };

        for (seat, participant) in participants.iter().enumerate() {
            if participant.is_computer {
                continue;
            }
            let won = winner_seat == Some(seat as u8);
            if let Err(err) = persist_lifetime_stats(state, participant, won).await {
                warn!(
                    match_id = %id,
                    player = participant.name.as_str(),
                    error = %err,
                    "Failed to persist lifetime stats"
                );
                result.stats_saved = false;
            }
        }

        state.matches.remove(&id);
        info!(match_id = %id, is_draw = result.is_draw, "Match ended");
        Ok(result)
    }

    /// Drop a match without settling anything. Idempotent.
    pub async fn delete_match(&self, state: &AppState, id: Uuid) -> Result<(), AppError> {
        if state.matches.remove(&id).is_some() {
            info!(match_id = %id, "Match deleted");
        }
        Ok(())
    }

    /// Top players by lifetime wins, straight from the store.
    pub async fn leaderboard(&self, state: &AppState) -> Result<Vec<LeaderboardRow>, AppError> {
        let records = state.players.top_by_wins(LEADERBOARD_SIZE).await?;
        Ok(records.into_iter().map(LeaderboardRow::from).collect())
    }
}

impl Default for MatchService {
    fn default() -> Self {
        Self::new()
    }
}

fn require_match(state: &AppState, id: &Uuid) -> Result<SharedMatch, AppError> {
    state.matches.get(id).ok_or_else(|| {
        AppError::not_found(ErrorCode::MatchNotFound, format!("Match {id} not found"))
    })
}

/// Upsert one human participant's lifetime record: increment counters on
/// an existing record, or seed a new one from the in-match participant.
async fn persist_lifetime_stats(
    state: &AppState,
    participant: &Participant,
    won: bool,
) -> Result<(), DomainError> {
    match state.players.find_by_name(&participant.name).await? {
        Some(mut record) => {
            record.total_games += 1;
            if won {
                record.total_wins += 1;
            }
            record.last_played = OffsetDateTime::now_utc();
            state.players.save(record).await?;
        }
        None => {
            let mut record = PlayerRecord::new(participant.name.clone(), participant.is_computer);
            record.total_games = participant.total_games;
            record.total_wins = participant.total_wins;
            state.players.save(record).await?;
        }
    }
    Ok(())
}
