//! Collision detection and response
//!
//! The actor is a circle but collides as a square scaled by a strictness
//! factor. Overlaps are resolved one entity at a time in array order, and
//! every resolution sees the state produced by the previous one: an actor
//! sent home by a target is no longer standing on the water next to it.

use glam::Vec2;

use super::state::{Actor, Entity, EntityKind, GameState};
use crate::consts::*;

/// What touching an entity does to the game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    /// Lose a life
    Die,
    /// Move with the platform
    Ride,
    /// Fill the target and score
    ReachTarget,
    /// Pick up the flower
    PickUp,
    /// Nothing happens
    Ignore,
}

/// Whether the actor overlaps the entity
pub fn detect_collision(actor: &Actor, entity: &Entity) -> bool {
    let strictness = if entity.kind == EntityKind::Flower {
        FLOWER_STRICTNESS
    } else {
        LENIENT_STRICTNESS
    };
    let margin = Vec2::splat(actor.radius * strictness);
    let min = entity.pos - margin;
    let max = entity.pos + entity.size + margin;
    actor.pos.x > min.x && actor.pos.x < max.x && actor.pos.y > min.y && actor.pos.y < max.y
}

/// Policy for an entity the actor overlaps, highest priority first
pub fn resolution_for(entity: &Entity) -> Resolution {
    if entity.collidable {
        Resolution::Die
    } else if entity.ridable {
        Resolution::Ride
    } else if entity.is_target {
        Resolution::ReachTarget
    } else if entity.kind == EntityKind::Flower && !entity.being_carried {
        Resolution::PickUp
    } else {
        Resolution::Ignore
    }
}

/// Resolve every overlap with the actor, in entity order
pub fn resolve_collisions(state: GameState) -> GameState {
    (0..state.entities.len()).fold(state, |state, index| {
        let hit = state
            .entities
            .get(index)
            .is_some_and(|entity| detect_collision(&state.actor, entity));
        if hit {
            resolve_single(state, index)
        } else {
            state
        }
    })
}

/// Apply the resolution for the entity at `index`
pub fn resolve_single(mut state: GameState, index: usize) -> GameState {
    let Some(entity) = state.entities.get(index) else {
        return state;
    };

    match resolution_for(entity) {
        Resolution::Die => die(state),
        Resolution::Ride => {
            let x = state.actor.pos.x + entity.vel.x;
            let radius = state.actor.radius;
            if x < radius || x > state.canvas_size.x - radius {
                // Carried off the edge
                die(state)
            } else {
                state.actor.pos.x = x;
                state
            }
        }
        Resolution::ReachTarget => reach_target(state, index),
        Resolution::PickUp => {
            let center = state.actor.pos;
            let flower = &mut state.entities[index];
            flower.center_on(center);
            flower.being_carried = true;
            flower.vel = Vec2::ZERO;
            log::debug!("Picked up {}", flower.id);
            state
        }
        Resolution::Ignore => state,
    }
}

/// Lose a life, or restart the run keeping the best score
pub fn die(mut state: GameState) -> GameState {
    if state.lives > 1 {
        state.lives -= 1;
        state.actor = Actor::default();
        for entity in &mut state.entities {
            entity.being_carried = false;
        }
        log::debug!("Lost a life, {} left", state.lives);
        state
    } else {
        let high_score = state.high_score.max(state.points);
        log::info!(
            "Game over at stage {} with {} points (high score {})",
            state.stage + 1,
            state.points,
            high_score
        );
        GameState {
            high_score,
            ..GameState::new()
        }
    }
}

/// Fill the target at `index`: score, send the actor home, turn it to water
fn reach_target(mut state: GameState, index: usize) -> GameState {
    let target = &state.entities[index];
    let (left, right) = (target.pos.x, target.pos.x + target.size.x);
    let has_fly = state
        .entities
        .iter()
        .any(|e| e.kind == EntityKind::Fly && e.pos.x > left && e.pos.x < right);
    let carrying = state.is_carrying();
    let bonuses = u32::from(has_fly) + u32::from(carrying);
    let gain = TARGET_POINTS + TARGET_BONUS_POINTS * bonuses;
    let water = state.water_color();

    state.points += gain;
    state.targets_filled += 1;
    state.actor = Actor::default();

    for (i, entity) in state.entities.iter_mut().enumerate() {
        if i == index {
            entity.kind = EntityKind::Water;
            entity.collidable = true;
            entity.is_target = false;
            entity.palette = vec![water];
        } else if (has_fly && entity.kind == EntityKind::Fly)
            || (entity.kind == EntityKind::Flower && entity.being_carried)
        {
            entity.being_carried = false;
            entity.pos.x = PARKED_X;
        }
    }

    log::debug!(
        "Target filled for {} points ({}/{})",
        gain,
        state.targets_filled,
        TOTAL_TARGETS
    );
    state
}

#[cfg(test)]
mod tests {
    use super::*;

    fn index_of(state: &GameState, id: &str) -> usize {
        state.entities.iter().position(|e| e.id == id).unwrap()
    }

    fn entity<'a>(state: &'a GameState, id: &str) -> &'a Entity {
        &state.entities[index_of(state, id)]
    }

    #[test]
    fn test_detect_collision_lenient() {
        let actor = Actor {
            pos: Vec2::new(0.0, 0.0),
            radius: 20.0,
        };
        let state = GameState::new();
        let mut car = entity(&state, "carRow00").clone();
        car.pos = Vec2::new(9.0, -5.0);
        assert!(detect_collision(&actor, &car));
        car.pos.x = 10.0;
        // Touching edges do not overlap
        assert!(!detect_collision(&actor, &car));
    }

    #[test]
    fn test_detect_collision_flower_is_exact() {
        let state = GameState::new();
        let mut flower = entity(&state, "flower0").clone();
        let actor = Actor {
            pos: Vec2::ZERO,
            radius: 20.0,
        };
        flower.pos = Vec2::new(15.0, 0.0);
        assert!(detect_collision(&actor, &flower));
        flower.pos.x = 20.0;
        assert!(!detect_collision(&actor, &flower));
    }

    #[test]
    fn test_resolution_priority() {
        let state = GameState::new();
        let mut log = entity(&state, "logWater0log0").clone();
        assert_eq!(resolution_for(&log), Resolution::Ride);
        log.collidable = true;
        assert_eq!(resolution_for(&log), Resolution::Die);

        let mut flower = entity(&state, "flower0").clone();
        assert_eq!(resolution_for(&flower), Resolution::PickUp);
        flower.being_carried = true;
        assert_eq!(resolution_for(&flower), Resolution::Ignore);

        assert_eq!(
            resolution_for(entity(&state, "endTarget2")),
            Resolution::ReachTarget
        );
        assert_eq!(resolution_for(entity(&state, "start0")), Resolution::Ignore);
    }

    #[test]
    fn test_target_without_bonus() {
        let mut state = GameState::new();
        state.actor.pos = Vec2::new(30.0, 25.0);
        let state = resolve_collisions(state);
        assert_eq!(state.points, 45);
        assert_eq!(state.targets_filled, 1);
        assert_eq!(state.actor.pos, Vec2::new(275.0, 576.0));
        assert_eq!(state.lives, 3);

        let filled = entity(&state, "endTarget0");
        assert!(filled.collidable);
        assert!(!filled.is_target);
        assert_eq!(filled.kind, EntityKind::Water);
        assert_eq!(filled.palette, vec![state.water_color()]);
        assert_eq!(state.open_targets(), 4);
    }

    #[test]
    fn test_target_with_fly_and_flower() {
        let mut state = GameState::new();
        state.actor.pos = Vec2::new(30.0, 25.0);
        let fly = index_of(&state, "fly0");
        state.entities[fly].pos = Vec2::new(15.0, 10.0);
        let flower = index_of(&state, "flower0");
        state.entities[flower].center_on(state.actor.pos);
        state.entities[flower].being_carried = true;

        let state = resolve_collisions(state);
        assert_eq!(state.points, 145);
        assert_eq!(state.entities[fly].pos.x, PARKED_X);
        assert_eq!(state.entities[flower].pos.x, PARKED_X);
        assert!(!state.is_carrying());
    }

    #[test]
    fn test_target_with_fly_only() {
        let mut state = GameState::new();
        state.actor.pos = Vec2::new(150.0, 25.0);
        let fly = index_of(&state, "fly0");
        state.entities[fly].pos = Vec2::new(135.0, 10.0);
        let state = resolve_collisions(state);
        assert_eq!(state.points, 95);
        assert!(entity(&state, "endTarget1").collidable);
    }

    #[test]
    fn test_ride_log() {
        let mut state = GameState::new();
        state.actor.pos = Vec2::new(60.0, 275.0);
        let state = resolve_collisions(state);
        assert_eq!(state.actor.pos, Vec2::new(59.0, 275.0));
        assert_eq!(state.lives, 3);
    }

    #[test]
    fn test_ride_off_edge_dies() {
        let mut state = GameState::new();
        state.actor.pos = Vec2::new(23.5, 275.0);
        let state = resolve_collisions(state);
        assert_eq!(state.lives, 2);
        assert_eq!(state.actor, Actor::default());
    }

    #[test]
    fn test_submerged_log_kills() {
        let mut state = GameState::new();
        let log = index_of(&state, "logWater2submergible0");
        state.entities[log].collidable = true;
        state.actor.pos = state.entities[log].pos + Vec2::new(30.0, 15.0);
        let state = resolve_collisions(state);
        assert_eq!(state.lives, 2);
    }

    #[test]
    fn test_pick_up_flower() {
        let mut state = GameState::new();
        let flower = index_of(&state, "flower0");
        state.entities[flower].pos = Vec2::new(265.0, 315.0);
        state.entities[flower].vel = Vec2::new(1.0, 0.0);
        state.actor.pos = Vec2::new(275.0, 325.0);
        let state = resolve_collisions(state);
        let flower = &state.entities[flower];
        assert!(flower.being_carried);
        assert_eq!(flower.pos, Vec2::new(265.0, 315.0));
        assert_eq!(flower.vel, Vec2::ZERO);
    }

    #[test]
    fn test_die_drops_flower_and_keeps_field() {
        let mut state = GameState::new();
        state.points = 30;
        let flower = index_of(&state, "flower0");
        state.entities[flower].being_carried = true;
        state.entities[flower].pos = Vec2::new(100.0, 100.0);
        let car = index_of(&state, "carRow10");
        state.entities[car].pos.x = 200.0;

        let state = die(state);
        assert_eq!(state.lives, 2);
        assert_eq!(state.points, 30);
        assert!(!state.entities[flower].being_carried);
        assert_eq!(state.entities[flower].pos, Vec2::new(100.0, 100.0));
        assert_eq!(state.entities[car].pos.x, 200.0);
    }

    #[test]
    fn test_last_life_resets_and_keeps_high_score() {
        let mut state = GameState::new();
        state.lives = 1;
        state.points = 120;
        state.high_score = 50;
        state.stage = 2;
        state.elapsed_ticks = 900;
        // First car of the bottom lane
        state.actor.pos = Vec2::new(30.0, 525.0);

        let state = resolve_collisions(state);
        assert_eq!(
            state,
            GameState {
                high_score: 120,
                ..GameState::new()
            }
        );
    }

    #[test]
    fn test_high_score_never_decreases() {
        let mut state = GameState::new();
        state.lives = 1;
        state.points = 10;
        state.high_score = 500;
        let state = die(state);
        assert_eq!(state.high_score, 500);
        assert_eq!(state.points, 0);
    }
}
