/// Property-based tests for round progression and settlement.
use proptest::prelude::*;
use uuid::Uuid;

use crate::domain::fixtures::ScriptedDie;
use crate::domain::match_flow::{add_participant, advance_round, record_turn, winner};
use crate::domain::state::{MatchState, Mode, Participant, Phase};

fn fresh_match(rounds: u32) -> MatchState {
    let mut state = MatchState::new(Uuid::new_v4(), Mode::Pvp, rounds);
    add_participant(&mut state, Participant::new("Alice", false)).unwrap();
    add_participant(&mut state, Participant::new("Bob", false)).unwrap();
    state
}

/// Drive a match to completion with the given per-round value pairs.
fn play_out(state: &mut MatchState, rolls: &[(u8, u8)]) {
    for (index, &(a, b)) in rolls.iter().enumerate() {
        let mut die = ScriptedDie::new([a, b]);
        record_turn(state, "Alice", &mut die).unwrap();
        record_turn(state, "Bob", &mut die).unwrap();
        if index + 1 < rolls.len() {
            advance_round(state).unwrap();
        }
    }
}

proptest! {
    /// A match completes after exactly its round limit, never fewer,
    /// never more.
    #[test]
    fn prop_completes_after_exactly_round_limit(
        rolls in prop::collection::vec((1u8..=6, 1u8..=6), 1..=10),
    ) {
        let rounds = rolls.len() as u32;
        let mut state = fresh_match(rounds);
        play_out(&mut state, &rolls);

        prop_assert_eq!(state.phase, Phase::GameComplete);
        prop_assert_eq!(state.history.len() as u32, rounds);
        prop_assert_eq!(state.current_round, rounds);

        // No further rounds can be played or advanced.
        let mut die = ScriptedDie::new([1]);
        prop_assert!(record_turn(&mut state, "Alice", &mut die).is_err());
        prop_assert!(advance_round(&mut state).is_err());
    }

    /// Round wins are consistent with the recorded outcomes: strictly
    /// greater value wins, ties credit nobody.
    #[test]
    fn prop_round_wins_match_outcomes(
        rolls in prop::collection::vec((1u8..=6, 1u8..=6), 1..=10),
    ) {
        let mut state = fresh_match(rolls.len() as u32);
        play_out(&mut state, &rolls);

        let expected_alice = rolls.iter().filter(|(a, b)| a > b).count() as u32;
        let expected_bob = rolls.iter().filter(|(a, b)| b > a).count() as u32;
        prop_assert_eq!(state.participants[0].round_wins, expected_alice);
        prop_assert_eq!(state.participants[1].round_wins, expected_bob);

        let ties = rolls.iter().filter(|(a, b)| a == b).count();
        let decided = state.history.iter().filter(|r| r.winner.is_some()).count();
        prop_assert_eq!(decided + ties, rolls.len());
    }

    /// Cumulative scores equal the sum of each participant's outcomes.
    #[test]
    fn prop_scores_sum_outcomes(
        rolls in prop::collection::vec((1u8..=6, 1u8..=6), 1..=10),
    ) {
        let mut state = fresh_match(rolls.len() as u32);
        play_out(&mut state, &rolls);

        let alice_total: u32 = rolls.iter().map(|(a, _)| u32::from(*a)).sum();
        let bob_total: u32 = rolls.iter().map(|(_, b)| u32::from(*b)).sum();
        prop_assert_eq!(state.participants[0].score, alice_total);
        prop_assert_eq!(state.participants[1].score, bob_total);
    }

    /// Settlement runs exactly once per completed match, and the winner
    /// query agrees with the round-win tallies.
    #[test]
    fn prop_settlement_is_exactly_once(
        rolls in prop::collection::vec((1u8..=6, 1u8..=6), 1..=10),
    ) {
        let mut state = fresh_match(rolls.len() as u32);
        play_out(&mut state, &rolls);

        prop_assert!(state.settled);
        for p in &state.participants {
            prop_assert_eq!(p.total_games, 1);
        }

        match winner(&state) {
            Some(seat) => {
                prop_assert_eq!(state.participants[seat as usize].total_wins, 1);
                prop_assert_eq!(state.participants[1 - seat as usize].total_wins, 0);
            }
            None => {
                prop_assert_eq!(state.participants[0].round_wins, state.participants[1].round_wins);
                for p in &state.participants {
                    prop_assert_eq!(p.total_wins, 0);
                }
            }
        }
    }

    /// All-tie matches end as draws with untouched round-win counts.
    #[test]
    fn prop_all_ties_is_a_draw(value in 1u8..=6, rounds in 1usize..=6) {
        let rolls: Vec<(u8, u8)> = (0..rounds).map(|_| (value, value)).collect();
        let mut state = fresh_match(rounds as u32);
        play_out(&mut state, &rolls);

        prop_assert_eq!(state.phase, Phase::GameComplete);
        prop_assert_eq!(winner(&state), None);
        prop_assert_eq!(state.participants[0].round_wins, 0);
        prop_assert_eq!(state.participants[1].round_wins, 0);
    }
}
