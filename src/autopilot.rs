//! Autopilot player
//!
//! A seeded random input source for demo mode and soak runs. It only
//! produces events; the simulation's own LCG is untouched by it.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use crate::input::Direction;
use crate::sim::{Event, GameState};

/// Emits one move every `move_every` ticks, preferring to head upfield
#[derive(Debug, Clone)]
pub struct Autopilot {
    rng: Pcg32,
    move_every: u32,
}

impl Autopilot {
    pub fn new(seed: u64, move_every: u32) -> Self {
        Self {
            rng: Pcg32::seed_from_u64(seed),
            move_every: move_every.max(1),
        }
    }

    /// Pick a direction: half the time up, otherwise left, right or down
    pub fn pick(&mut self) -> Direction {
        if self.rng.random_bool(0.5) {
            Direction::Up
        } else {
            match self.rng.random_range(0..3) {
                0 => Direction::Left,
                1 => Direction::Right,
                _ => Direction::Down,
            }
        }
    }

    /// Input to inject after the state has seen its latest tick
    pub fn next_input(&mut self, state: &GameState) -> Option<Event> {
        if state.elapsed_ticks % u64::from(self.move_every) != 0 {
            return None;
        }
        Some(Event::Move(self.pick().to_move()))
    }

    /// Play `ticks` clock ticks with autopilot moves mixed in
    pub fn session(&mut self, state: GameState, ticks: u64) -> GameState {
        (0..ticks).fold(state, |state, _| {
            let state = crate::sim::reduce(state, Event::Tick);
            match self.next_input(&state) {
                Some(event) => crate::sim::reduce(state, event),
                None => state,
            }
        })
    }
}
