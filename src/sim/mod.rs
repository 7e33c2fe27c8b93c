//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One event in, one state out
//! - Seeded LCG only, threaded through the state
//! - Stable iteration order (entity array order)
//! - No rendering or platform dependencies

pub mod collision;
pub mod layout;
pub mod reduce;
pub mod rng;
pub mod spawn;
pub mod stage;
pub mod state;
pub mod tick;

pub use collision::{Resolution, detect_collision, die, resolve_collisions};
pub use reduce::{reduce, replay};
pub use rng::Lcg;
pub use spawn::{RandomEvent, resolve_random_events};
pub use stage::update_stage;
pub use state::{Actor, Color, Entity, EntityKind, GameState};
pub use tick::{Event, Move, resolve_events};
