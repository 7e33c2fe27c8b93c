//! Stage progression
//!
//! Filling every target rebuilds the field from the canonical layout with
//! faster entities (and bigger birds).

use super::layout;
use super::state::{Entity, EntityKind, GameState};
use crate::consts::*;

/// Advance to the next stage once all targets are filled
pub fn update_stage(state: GameState) -> GameState {
    if state.targets_filled < TOTAL_TARGETS {
        return state;
    }

    let stage = state.stage + 1;
    let entities = layout::initial_entities()
        .into_iter()
        .map(|entity| scale_for_stage(entity, stage))
        .collect();

    log::info!("Stage {} cleared, starting stage {}", state.stage + 1, stage + 1);

    GameState {
        stage,
        targets_filled: 0,
        entities,
        ..state
    }
}

/// Speed up a freshly laid out entity for `stage`; birds also grow
pub fn scale_for_stage(mut entity: Entity, stage: u32) -> Entity {
    let factor = (stage + 1) as f32;
    if entity.kind == EntityKind::Bird {
        entity.vel *= BIRD_SPEED_SCALE * factor;
        entity.size *= BIRD_SIZE_SCALE * factor;
    } else {
        entity.vel *= ENTITY_SPEED_SCALE * factor;
    }
    entity
}
