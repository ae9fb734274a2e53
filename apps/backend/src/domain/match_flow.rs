use time::OffsetDateTime;

use crate::domain::dice::DieRoller;
use crate::domain::rules::PLAYERS;
use crate::domain::settlement::apply_settlement;
use crate::domain::state::{MatchState, Participant, Phase, RoundRecord, Seat, TurnOutcome};
use crate::errors::domain::{ConflictKind, DomainError, NotFoundKind, ValidationKind};

/// Result of recording a turn, describing what state changes occurred.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TurnRecorded {
    /// The outcome that was appended to the open round.
    pub outcome: TurnOutcome,
    /// Whether this turn closed the round (both outcomes recorded).
    pub round_closed: bool,
    /// Winner of the closed round, if one was closed and it was not a tie.
    pub round_winner: Option<Seat>,
    /// Whether closing this round completed the match.
    pub match_completed: bool,
}

/// Seat a participant. The second participant moves the match to InProgress.
pub fn add_participant(state: &mut MatchState, participant: Participant) -> Result<(), DomainError> {
    if state.participants.len() >= PLAYERS {
        return Err(DomainError::conflict(
            ConflictKind::CapacityExceeded,
            "Match already has two participants",
        ));
    }

    state.participants.push(participant);
    if state.participants.len() == PLAYERS {
        state.phase = Phase::InProgress;
    }
    Ok(())
}

/// Record a turn for the named participant, enforcing phase and
/// one-outcome-per-round.
///
/// The die is only rolled once all checks have passed; a rejected turn
/// never advances generator state. Round closing happens inside this
/// operation so "two outcomes present" and "round closed" are atomic
/// from the caller's perspective.
pub fn record_turn(
    state: &mut MatchState,
    player_name: &str,
    die: &mut dyn DieRoller,
) -> Result<TurnRecorded, DomainError> {
    let seat = find_seat(state, player_name).ok_or_else(|| {
        DomainError::not_found(
            NotFoundKind::Player,
            format!("Player not found: {player_name}"),
        )
    })?;

    if state.phase != Phase::InProgress {
        return Err(DomainError::validation(
            ValidationKind::PhaseMismatch,
            "Match is not in progress",
        ));
    }

    if state.open_round.iter().any(|o| o.player == player_name) {
        return Err(DomainError::conflict(
            ConflictKind::DuplicateTurn,
            "Player has already rolled this round",
        ));
    }

    let value = die.roll();
    debug_assert!(
        crate::domain::rules::DIE_FACES.contains(&value),
        "die produced {value}"
    );

    let outcome = TurnOutcome {
        player: state.participants[seat as usize].name.clone(),
        value,
        timestamp: OffsetDateTime::now_utc(),
    };
    state.open_round.push(outcome.clone());
    state.participants[seat as usize].score += u32::from(value);

    let mut result = TurnRecorded {
        outcome,
        round_closed: false,
        round_winner: None,
        match_completed: false,
    };

    if state.open_round.len() < PLAYERS {
        return Ok(result);
    }

    let (round_winner, match_completed) = close_round(state);
    result.round_closed = true;
    result.round_winner = round_winner;
    result.match_completed = match_completed;

    Ok(result)
}

/// Close the open round: resolve the winner, append the round record,
/// and complete the match when the round limit has been reached.
fn close_round(state: &mut MatchState) -> (Option<Seat>, bool) {
    state.phase = Phase::RoundComplete;

    let winner = resolve_open_round(state);
    if let Some(seat) = winner {
        state.participants[seat as usize].round_wins += 1;
    }

    state.history.push(RoundRecord {
        round_no: state.current_round,
        outcomes: state.open_round.clone(),
        winner,
    });

    let completed = state.current_round >= state.max_rounds;
    if completed {
        complete_match(state);
    }

    (winner, completed)
}

/// Winner of the open round by strict value comparison; ties have none.
fn resolve_open_round(state: &MatchState) -> Option<Seat> {
    if state.open_round.len() < PLAYERS {
        return None;
    }
    let first = &state.open_round[0];
    let second = &state.open_round[1];

    if first.value > second.value {
        find_seat(state, &first.player)
    } else if second.value > first.value {
        find_seat(state, &second.player)
    } else {
        None
    }
}

/// Move to the next round after a round has closed.
pub fn advance_round(state: &mut MatchState) -> Result<(), DomainError> {
    if state.phase != Phase::RoundComplete {
        return Err(DomainError::validation(
            ValidationKind::PhaseMismatch,
            "Current round is not complete",
        ));
    }

    state.current_round += 1;
    state.open_round.clear();

    if state.current_round <= state.max_rounds {
        state.phase = Phase::InProgress;
    } else {
        complete_match(state);
    }
    Ok(())
}

/// Terminal transition. Settlement is idempotent, so reaching this from
/// both the round-closing turn and a trailing advance applies lifetime
/// counters exactly once.
fn complete_match(state: &mut MatchState) {
    state.phase = Phase::GameComplete;
    if state.ended_at.is_none() {
        state.ended_at = Some(OffsetDateTime::now_utc());
    }
    apply_settlement(state);
}

/// Participant with strictly more round wins; None on a tie (which is a
/// draw once the match has completed, and "no leader yet" before that).
pub fn winner(state: &MatchState) -> Option<Seat> {
    if state.participants.len() != PLAYERS {
        return None;
    }
    let a = state.participants[0].round_wins;
    let b = state.participants[1].round_wins;
    if a > b {
        Some(0)
    } else if b > a {
        Some(1)
    } else {
        None
    }
}

/// Restore the match to round 1 for a rematch between the same
/// participants. Lifetime counters are kept; the settlement guard is
/// cleared so the replayed match settles again on completion.
pub fn reset(state: &mut MatchState) {
    state.current_round = 1;
    state.open_round.clear();
    state.history.clear();
    state.phase = Phase::InProgress;
    state.started_at = OffsetDateTime::now_utc();
    state.ended_at = None;
    state.settled = false;

    for participant in &mut state.participants {
        participant.reset_match_stats();
    }
}

pub fn find_seat(state: &MatchState, name: &str) -> Option<Seat> {
    state
        .participants
        .iter()
        .position(|p| p.name == name)
        .map(|idx| idx as Seat)
}
