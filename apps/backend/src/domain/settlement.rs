use crate::domain::match_flow::winner;
use crate::domain::state::{MatchState, Phase};

/// Apply lifetime counters for a completed match.
///
/// No-op unless the match is complete, and at most once per match: the
/// `settled` flag guards against the completion transition being reached
/// from both `record_turn` and `advance_round`.
pub fn apply_settlement(state: &mut MatchState) {
    if state.phase != Phase::GameComplete || state.settled {
        return;
    }

    let winning_seat = winner(state);
    for (seat, participant) in state.participants.iter_mut().enumerate() {
        participant.total_games += 1;
        if winning_seat == Some(seat as u8) {
            participant.total_wins += 1;
        }
    }
    state.settled = true;
}
