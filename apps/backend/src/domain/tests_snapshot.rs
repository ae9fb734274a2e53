use uuid::Uuid;

use crate::domain::fixtures::ScriptedDie;
use crate::domain::match_flow::{add_participant, record_turn};
use crate::domain::snapshot::snapshot;
use crate::domain::state::{MatchState, Mode, Participant, Phase};

fn make_match(mode: Mode, rounds: u32) -> MatchState {
    let mut state = MatchState::new(Uuid::new_v4(), mode, rounds);
    add_participant(&mut state, Participant::new("Alice", false)).unwrap();
    let second_is_computer = mode == Mode::Pvc;
    let second_name = if second_is_computer { "Computer" } else { "Bob" };
    add_participant(&mut state, Participant::new(second_name, second_is_computer)).unwrap();
    state
}

#[test]
fn snapshot_mirrors_match_fields() {
    let state = make_match(Mode::Pvc, 5);
    let view = snapshot(&state);

    assert_eq!(view.match_id, state.id);
    assert_eq!(view.mode, Mode::Pvc);
    assert_eq!(view.max_rounds, 5);
    assert_eq!(view.current_round, 1);
    assert_eq!(view.phase, Phase::InProgress);
    assert_eq!(view.players.len(), 2);
    assert!(view.players[1].is_computer);
    assert!(view.current_round_rolls.is_empty());
    assert!(!view.round_complete);
    assert!(!view.match_complete);
}

#[test]
fn snapshot_exposes_open_round_and_flags() {
    let mut state = make_match(Mode::Pvp, 1);
    let mut die = ScriptedDie::new([4, 2]);

    record_turn(&mut state, "Alice", &mut die).unwrap();
    let mid = snapshot(&state);
    assert_eq!(mid.current_round_rolls.len(), 1);
    assert_eq!(mid.current_round_rolls[0].value, 4);
    assert!(!mid.round_complete);

    record_turn(&mut state, "Bob", &mut die).unwrap();
    let done = snapshot(&state);
    assert_eq!(done.current_round_rolls.len(), 2);
    assert!(done.match_complete);
    assert_eq!(done.players[0].score, 4);
    assert_eq!(done.players[0].round_wins, 1);
    assert_eq!(done.players[0].total_wins, 1);
    assert_eq!(done.players[0].win_rate, 1.0);
}

#[test]
fn snapshot_does_not_mutate_state() {
    let state = make_match(Mode::Pvp, 3);
    let before = state.clone();
    let _ = snapshot(&state);
    assert_eq!(state.phase, before.phase);
    assert_eq!(state.participants, before.participants);
    assert_eq!(state.open_round, before.open_round);
}

#[test]
fn snapshot_serializes_with_wire_names() {
    let state = make_match(Mode::Pvp, 3);
    let json = serde_json::to_value(snapshot(&state)).unwrap();

    assert_eq!(json["mode"], "pvp");
    assert_eq!(json["phase"], "in_progress");
    assert_eq!(json["max_rounds"], 3);
    assert_eq!(json["players"].as_array().unwrap().len(), 2);
    assert_eq!(json["players"][0]["name"], "Alice");
    assert_eq!(json["round_complete"], false);

    let waiting = MatchState::new(Uuid::new_v4(), Mode::Pvc, 3);
    let json = serde_json::to_value(snapshot(&waiting)).unwrap();
    assert_eq!(json["mode"], "pvc");
    assert_eq!(json["phase"], "waiting");
}
