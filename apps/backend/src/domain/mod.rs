//! Domain layer: pure match logic, no I/O and no HTTP types.

pub mod dice;
pub mod fixtures;
pub mod match_flow;
pub mod rules;
pub mod settlement;
pub mod snapshot;
pub mod state;

#[cfg(test)]
mod tests_props;
#[cfg(test)]
mod tests_snapshot;

// Re-exports for ergonomics
pub use dice::{DieRoller, ThreadDie};
pub use match_flow::{add_participant, advance_round, record_turn, winner, TurnRecorded};
pub use snapshot::{snapshot, MatchSnapshot, ParticipantView};
pub use state::{MatchState, Mode, Participant, Phase, RoundRecord, Seat, TurnOutcome};
