// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use crate::remote::fake::{ActorSpec, FakeRemoteApp};
use crate::TransitionKind;

fn pair() -> FakeRemoteApp {
    FakeRemoteApp::builder()
        .actor(ActorSpec::new(1, vec![TransitionKind::Local]))
        .actor(ActorSpec::new(2, vec![TransitionKind::Local]))
        .build()
}

#[test]
fn new_state_has_empty_todo_and_done() {
    let mut app = pair();
    let counters = Counters::new();
    let state = State::new(&mut app, &counters, false).unwrap();
    assert_eq!(state.count_todo(), 0);
    assert!(!state.is_done(ActorId::new(1)));
    assert_eq!(state.actor_count(), 2);
}

#[test]
fn mark_todo_is_a_noop_for_already_done_actors() {
    let mut app = pair();
    let counters = Counters::new();
    let mut state = State::new(&mut app, &counters, false).unwrap();
    state.mark_todo(ActorId::new(1));
    state.execute_next(&mut app, ActorId::new(1), &counters).unwrap();
    assert!(state.is_done(ActorId::new(1)));

    state.mark_todo(ActorId::new(1));
    assert_eq!(state.count_todo(), 0, "todo and done must stay disjoint");
    assert!(!state.is_todo(ActorId::new(1)));
}

#[test]
fn is_todo_and_is_done_are_mutually_exclusive_across_execute_next() {
    let mut app = pair();
    let counters = Counters::new();
    let mut state = State::new(&mut app, &counters, false).unwrap();
    state.mark_todo(ActorId::new(1));
    assert!(state.is_todo(ActorId::new(1)));
    assert!(!state.is_done(ActorId::new(1)));

    state.execute_next(&mut app, ActorId::new(1), &counters).unwrap();
    assert!(!state.is_todo(ActorId::new(1)));
    assert!(state.is_done(ActorId::new(1)));
}

#[test]
fn next_transition_picks_ascending_aid() {
    let mut app = pair();
    let counters = Counters::new();
    let mut state = State::new(&mut app, &counters, false).unwrap();
    state.mark_todo(ActorId::new(2));
    state.mark_todo(ActorId::new(1));
    assert_eq!(state.next_transition(), Some(ActorId::new(1)));
}

#[test]
fn execute_next_moves_actor_from_todo_to_done() {
    let mut app = pair();
    let counters = Counters::new();
    let mut state = State::new(&mut app, &counters, false).unwrap();
    state.mark_todo(ActorId::new(1));
    state.execute_next(&mut app, ActorId::new(1), &counters).unwrap();

    assert_eq!(state.count_todo(), 0);
    assert!(state.is_done(ActorId::new(1)));
    assert_eq!(state.get_transition().unwrap().aid, ActorId::new(1));
    assert_eq!(counters.executed_transitions(), 1);
    assert_eq!(counters.visited_states(), 1);
}

#[test]
fn next_transition_returns_none_when_todo_is_empty() {
    let mut app = pair();
    let counters = Counters::new();
    let state = State::new(&mut app, &counters, false).unwrap();
    assert_eq!(state.next_transition(), None);
}

#[test]
fn snapshot_is_taken_only_when_requested() {
    let mut app = pair();
    let counters = Counters::new();
    let with_snapshot = State::new(&mut app, &counters, true).unwrap();
    assert!(with_snapshot.system_state().is_some());

    let mut app2 = pair();
    let without_snapshot = State::new(&mut app2, &counters, false).unwrap();
    assert!(without_snapshot.system_state().is_none());
}

#[test]
fn state_nums_are_distinct_and_increasing() {
    let mut app = pair();
    let counters = Counters::new();
    let s0 = State::new(&mut app, &counters, false).unwrap();
    let s1 = State::new(&mut app, &counters, false).unwrap();
    assert!(s1.num().0 > s0.num().0);
}
