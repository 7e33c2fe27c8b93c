//! Top-level state reducer
//!
//! Each event is folded into the state in a fixed order: collisions left
//! over from the previous state, then stage completion, then the event
//! itself, then scheduled random events.

use super::collision::resolve_collisions;
use super::spawn::resolve_random_events;
use super::stage::update_stage;
use super::state::GameState;
use super::tick::{Event, resolve_events};

/// Produce the next state for one event
pub fn reduce(state: GameState, event: Event) -> GameState {
    resolve_random_events(resolve_events(
        update_stage(resolve_collisions(state)),
        event,
    ))
}

/// Fold a whole event sequence
pub fn replay(state: GameState, events: impl IntoIterator<Item = Event>) -> GameState {
    events.into_iter().fold(state, reduce)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;
    use crate::sim::rng::Lcg;
    use crate::sim::state::EntityKind;
    use crate::sim::tick::Move;
    use glam::Vec2;
    use proptest::prelude::*;

    fn index_of(state: &GameState, id: &str) -> usize {
        state.entities.iter().position(|e| e.id == id).unwrap()
    }

    #[test]
    fn test_stage_advances_on_next_event() {
        let mut state = GameState::new();
        state.targets_filled = TOTAL_TARGETS;
        let base_car = state.entities[index_of(&state, "carRow10")].clone();

        let next = reduce(state, Event::Tick);
        assert_eq!(next.stage, 1);
        assert_eq!(next.targets_filled, 0);
        let bird = &next.entities[index_of(&next, "bird0")];
        assert_eq!(bird.size, Vec2::new(50.0, 30.0) * BIRD_SIZE_SCALE * 2.0);
        let car = &next.entities[index_of(&next, "carRow10")];
        assert_eq!(car.vel, base_car.vel * ENTITY_SPEED_SCALE * 2.0);
    }

    #[test]
    fn test_scoring_through_reducer() {
        let mut state = GameState::new();
        state.actor.pos = Vec2::new(30.0, 25.0);
        let next = reduce(state, Event::Tick);
        assert_eq!(next.points, 45);
        assert_eq!(next.targets_filled, 1);
        assert_eq!(next.actor.pos, Vec2::new(275.0, 576.0));
    }

    #[test]
    fn test_collisions_judged_before_event() {
        let mut state = GameState::new();
        // Standing on a car, then trying to step away
        state.actor.pos = Vec2::new(30.0, 525.0);
        let next = reduce(state, Event::Move(Move::UP));
        assert_eq!(next.lives, 2);
        // The move applies from the start position after the death
        assert_eq!(next.actor.pos, Vec2::new(275.0, 526.0));
    }

    #[test]
    fn test_life_loss_on_last_life_resets() {
        let mut state = GameState::new();
        state.lives = 1;
        state.points = 80;
        state.high_score = 60;
        state.actor.pos = Vec2::new(30.0, 525.0);
        let next = reduce(state, Event::Tick);
        let mut expected = GameState {
            high_score: 80,
            ..GameState::new()
        };
        expected = crate::sim::tick::tick(expected);
        assert_eq!(next, expected);
    }

    #[test]
    fn test_rejected_move_is_identity() {
        let mut state = GameState::new();
        state.actor.pos.x = CANVAS_WIDTH - ACTOR_RADIUS;
        state.actor.pos.y = 326.0;
        let next = reduce(state.clone(), Event::Move(Move::RIGHT));
        assert_eq!(next, state);
    }

    #[test]
    fn test_first_move_seeds_then_bird_appears() {
        let ticks = std::iter::repeat_n(Event::Tick, 10);
        let state = replay(GameState::new(), ticks);
        let state = reduce(state, Event::Move(Move::UP));
        assert_eq!(state.rng, Some(Lcg::new(10)));

        let state = replay(state, std::iter::repeat_n(Event::Tick, 40));
        assert_eq!(state.elapsed_ticks, 50);
        let bird = &state.entities[index_of(&state, "bird0")];
        assert!(bird.pos.x < CANVAS_WIDTH);
    }

    #[test]
    fn test_replay_is_deterministic() {
        let events: Vec<Event> = (0..2000)
            .map(|i| match i % 37 {
                0 => Event::Move(Move::UP),
                13 => Event::Move(Move::LEFT),
                26 => Event::Move(Move::RIGHT),
                _ => Event::Tick,
            })
            .collect();
        let a = replay(GameState::new(), events.clone());
        let b = replay(GameState::new(), events);
        assert_eq!(a, b);
    }

    fn event_strategy() -> impl Strategy<Value = Event> {
        prop_oneof![
            6 => Just(Event::Tick),
            2 => Just(Event::Move(Move::UP)),
            1 => Just(Event::Move(Move::LEFT)),
            1 => Just(Event::Move(Move::RIGHT)),
            1 => Just(Event::Move(Move::DOWN)),
        ]
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(64))]

        #[test]
        fn prop_invariants_hold(events in proptest::collection::vec(event_strategy(), 0..1500)) {
            let mut state = GameState::new();
            for event in events {
                let high_score = state.high_score;
                state = reduce(state, event);
                prop_assert!((1..=STARTING_LIVES).contains(&state.lives));
                prop_assert!(state.targets_filled <= TOTAL_TARGETS);
                prop_assert!(state.high_score >= high_score);
                let count = |kind| state.entities.iter().filter(|e| e.kind == kind).count();
                prop_assert_eq!(count(EntityKind::Fly), 1);
                prop_assert_eq!(count(EntityKind::Flower), 1);
                prop_assert!(state.entities.iter().filter(|e| e.being_carried).count() <= 1);
            }
        }
    }
}
