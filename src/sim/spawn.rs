//! Scheduled random events
//!
//! Once the RNG is seeded, three tick windows move the bird, the fly and
//! the flower. Each window starts with a reseed draw and stores the
//! generator after its last draw. Draw order per window:
//!
//! - bird: int (x), then only when spawning: int (y), and per axis a float
//!   roll for a still axis followed, if moving, by a float sign roll
//! - fly: float roll, then int (target index) when placing
//! - flower: float spawn roll, int (x) and int (y) when spawning, then a
//!   float drift roll (always drawn) and, only for a loose on-canvas flower
//!   rolling above the still chance, a float sign roll

use glam::Vec2;

use super::rng::Lcg;
use super::state::{EntityKind, GameState};
use crate::consts::*;

/// Chance that a bird axis stays still
const BIRD_STILL_CHANCE: f64 = 0.1;
/// Chance that the fly lands on a target
const FLY_LAND_CHANCE: f64 = 0.5;
/// Chance that a parked flower appears
const FLOWER_SPAWN_CHANCE: f64 = 0.05;
/// Rolls above this make the flower drift
const FLOWER_STILL_CHANCE: f64 = 0.1;

/// Which scheduled event, if any, fires on this tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RandomEvent {
    Bird,
    Fly,
    Flower,
}

impl RandomEvent {
    /// Windows are checked bird, fly, flower; at most one fires
    pub fn at(elapsed_ticks: u64) -> Option<Self> {
        let hits = |(period, offset): (u64, u64)| elapsed_ticks % period == offset;
        if hits(BIRD_WINDOW) {
            Some(RandomEvent::Bird)
        } else if hits(FLY_WINDOW) {
            Some(RandomEvent::Fly)
        } else if hits(FLOWER_WINDOW) {
            Some(RandomEvent::Flower)
        } else {
            None
        }
    }
}

/// Run the random event scheduled for the current tick
pub fn resolve_random_events(state: GameState) -> GameState {
    let Some(rng) = state.rng else {
        return state;
    };
    match RandomEvent::at(state.elapsed_ticks) {
        Some(RandomEvent::Bird) => move_bird(state, rng),
        Some(RandomEvent::Fly) => move_fly(state, rng),
        Some(RandomEvent::Flower) => move_flower(state, rng),
        None => state,
    }
}

/// `+1.0` or `-1.0` from one float draw
fn draw_sign(rng: Lcg) -> (Lcg, f32) {
    let (rng, roll) = rng.next_float();
    (rng, if roll < 0.5 { -1.0 } else { 1.0 })
}

/// Drift speed for one axis: still, or a signed stage-scaled speed
fn draw_axis(rng: Lcg, still_chance: f64, speed: f32) -> (Lcg, f32) {
    let (rng, roll) = rng.next_float();
    if roll < still_chance {
        return (rng, 0.0);
    }
    let (rng, sign) = draw_sign(rng);
    (rng, sign * speed)
}

/// `50 + v^2 mod range`, a y coordinate below the target row
fn spawn_y(value: u64, range: f32) -> f32 {
    let range = (range as u64).max(1);
    ROW_HEIGHT + (value * value % range) as f32
}

fn drift_speed(stage: u32) -> f32 {
    DRIFT_SPEED * (stage + 1) as f32
}

/// Spawn a parked bird somewhere on the field with a random heading
fn move_bird(mut state: GameState, rng: Lcg) -> GameState {
    let (mut rng, seed) = rng.next_int();
    let canvas = state.canvas_size;
    let speed = drift_speed(state.stage);

    for bird in state
        .entities
        .iter_mut()
        .filter(|e| e.kind == EntityKind::Bird)
    {
        if !bird.is_off_canvas(canvas.x) {
            continue;
        }
        let (next, y) = rng.next_int();
        let (next, vx) = draw_axis(next, BIRD_STILL_CHANCE, speed);
        let (next, vy) = draw_axis(next, BIRD_STILL_CHANCE, speed);
        rng = next;

        bird.pos = Vec2::new(
            (seed % canvas.x as u64) as f32,
            spawn_y(y, canvas.y / 2.0),
        );
        bird.vel = Vec2::new(vx, vy);
        log::debug!("{} swoops in at {:?} heading {:?}", bird.id, bird.pos, bird.vel);
    }

    state.rng = Some(rng);
    state
}

/// Put the fly on a random open target, or park it
fn move_fly(mut state: GameState, rng: Lcg) -> GameState {
    let (mut rng, roll) = rng.next_float();
    let target_centers: Vec<f32> = state
        .entities
        .iter()
        .filter(|e| e.is_target)
        .map(|e| e.pos.x + e.size.x / 2.0)
        .collect();

    let landing = if roll < FLY_LAND_CHANCE && !target_centers.is_empty() {
        let (next, pick) = rng.next_int();
        rng = next;
        Some(target_centers[(pick % target_centers.len() as u64) as usize])
    } else {
        None
    };

    for fly in state
        .entities
        .iter_mut()
        .filter(|e| e.kind == EntityKind::Fly)
    {
        fly.pos.x = match landing {
            Some(center) => center - fly.size.x / 2.0,
            None => PARKED_X,
        };
    }
    if let Some(center) = landing {
        log::debug!("Fly lands on the target centered at {}", center);
    }

    state.rng = Some(rng);
    state
}

/// Occasionally spawn the flower, and re-roll its drift while loose
fn move_flower(mut state: GameState, rng: Lcg) -> GameState {
    let (mut rng, spawn_roll) = rng.next_float();
    let canvas = state.canvas_size;
    let speed = drift_speed(state.stage);

    for flower in state
        .entities
        .iter_mut()
        .filter(|e| e.kind == EntityKind::Flower)
    {
        if spawn_roll < FLOWER_SPAWN_CHANCE
            && !flower.being_carried
            && flower.is_off_canvas(canvas.x)
        {
            let (next, x) = rng.next_int();
            let (next, y) = next.next_int();
            rng = next;
            flower.pos = Vec2::new(
                (x % canvas.x as u64) as f32,
                spawn_y(y, canvas.y - flower.size.y - 2.0 * ROW_HEIGHT),
            );
            log::debug!("{} blooms at {:?}", flower.id, flower.pos);
        }

        let (next, drift_roll) = rng.next_float();
        rng = next;
        // A carried flower keeps zero velocity
        flower.vel = if drift_roll > FLOWER_STILL_CHANCE
            && !flower.being_carried
            && !flower.is_off_canvas(canvas.x)
        {
            let (next, sign) = draw_sign(rng);
            rng = next;
            Vec2::new(sign * speed, 0.0)
        } else {
            Vec2::ZERO
        };
    }

    state.rng = Some(rng);
    state
}
