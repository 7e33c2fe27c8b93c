//! Event integration
//!
//! Applies one input or clock event to the state: moves the actor, or
//! advances every entity by its velocity.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::rng::Lcg;
use super::state::{Color, Entity, EntityKind, GameState};
use crate::consts::*;

/// A single step of the actor and the points it is worth
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Move {
    pub dx: f32,
    pub dy: f32,
    pub points: i32,
}

impl Move {
    pub const LEFT: Move = Move {
        dx: -MOVE_STEP,
        dy: 0.0,
        points: 0,
    };
    pub const RIGHT: Move = Move {
        dx: MOVE_STEP,
        dy: 0.0,
        points: 0,
    };
    pub const UP: Move = Move {
        dx: 0.0,
        dy: -MOVE_STEP,
        points: STEP_POINTS,
    };
    pub const DOWN: Move = Move {
        dx: 0.0,
        dy: MOVE_STEP,
        points: -STEP_POINTS,
    };

    pub fn delta(&self) -> Vec2 {
        Vec2::new(self.dx, self.dy)
    }
}

/// Everything the reducer consumes
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Event {
    /// Player input
    Move(Move),
    /// Fixed-rate clock
    Tick,
}

/// Apply one event
pub fn resolve_events(state: GameState, event: Event) -> GameState {
    match event {
        Event::Move(step) => apply_move(state, step),
        Event::Tick => tick(state),
    }
}

/// Move the actor if it stays strictly inside the canvas
pub fn apply_move(mut state: GameState, step: Move) -> GameState {
    let target = state.actor.pos + step.delta();
    let radius = state.actor.radius;
    let inside = target.x > radius
        && target.x < state.canvas_size.x - radius
        && target.y > radius
        && target.y < state.canvas_size.y - radius;
    if !inside {
        return state;
    }

    if state.rng.is_none() {
        log::debug!("Seeding RNG from tick {}", state.elapsed_ticks);
        state.rng = Some(Lcg::new(state.elapsed_ticks));
    }
    state.points = state.points.saturating_add_signed(step.points);
    state.actor.pos = target;
    for entity in state.entities.iter_mut().filter(|e| e.being_carried) {
        entity.center_on(target);
    }
    state
}

/// Advance the clock by one tick
pub fn tick(mut state: GameState) -> GameState {
    let elapsed = state.elapsed_ticks;
    state.elapsed_ticks += 1;

    if elapsed % SUBMERGE_CYCLE_TICKS == SUBMERGE_CYCLE_TICKS - 1 {
        let water = state.water_color();
        for entity in state
            .entities
            .iter_mut()
            .filter(|e| e.kind == EntityKind::Submersible)
        {
            toggle_submersion(entity, water);
        }
        return state;
    }

    let canvas = state.canvas_size;
    let warn = elapsed % SUBMERGE_CYCLE_TICKS > SUBMERGE_WARNING_TICKS;
    for entity in &mut state.entities {
        entity.pos = integrate(entity, canvas);
        if warn && entity.kind == EntityKind::Submersible && entity.palette[0] == Color::Orange {
            entity.palette = vec![Color::DarkOrange];
        }
    }
    state
}

/// Sink a warned log (lethal, water colored) or raise a sunk one
fn toggle_submersion(entity: &mut Entity, water: Color) {
    entity.collidable = !entity.collidable;
    entity.palette = if entity.palette[0] == Color::DarkOrange {
        vec![water]
    } else {
        vec![Color::Orange]
    };
}

/// Next position with horizontal wrap and vertical clamp
pub fn integrate(entity: &Entity, canvas: Vec2) -> Vec2 {
    let Vec2 { x, y } = entity.pos;
    let Vec2 { x: dx, y: dy } = entity.vel;
    let size = entity.size;

    let new_x = if x + dx > canvas.x && x < ONSCREEN_SENTINEL_X {
        -size.x
    } else if x + dx + size.x < 0.0 {
        canvas.x
    } else {
        x + dx
    };

    let floor = canvas.y - size.y - ROW_HEIGHT;
    let new_y = if dy != 0.0 && y + dy > floor {
        floor
    } else if y + dy < 0.0 {
        0.0
    } else {
        y + dy
    };

    Vec2::new(new_x, new_y)
}
