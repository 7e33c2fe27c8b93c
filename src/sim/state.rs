//! Game state and core simulation types
//!
//! Everything the reducer reads or writes lives in `GameState`.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::layout;
use super::rng::Lcg;
use crate::consts::*;

/// Named colors used by entity palettes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    Red,
    LightBlue,
    Sienna,
    Black,
    White,
    MediumOrchid,
    Orange,
    DarkOrange,
    Blue,
    DarkBlue,
    DarkRed,
    PaleGreen,
    Gold,
    SaddleBrown,
    Magenta,
    LimeGreen,
}

impl Color {
    /// CSS color name
    pub fn as_str(&self) -> &'static str {
        match self {
            Color::Red => "red",
            Color::LightBlue => "lightblue",
            Color::Sienna => "sienna",
            Color::Black => "black",
            Color::White => "white",
            Color::MediumOrchid => "mediumorchid",
            Color::Orange => "orange",
            Color::DarkOrange => "darkorange",
            Color::Blue => "blue",
            Color::DarkBlue => "darkblue",
            Color::DarkRed => "darkred",
            Color::PaleGreen => "palegreen",
            Color::Gold => "gold",
            Color::SaddleBrown => "saddlebrown",
            Color::Magenta => "magenta",
            Color::LimeGreen => "limegreen",
        }
    }
}

/// What an entity is; drives every kind-specific rule
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EntityKind {
    Car,
    Log,
    /// Water tiles, including the river backdrop and filled targets
    Water,
    Bird,
    Fly,
    Flower,
    Target,
    Safe,
    /// Log that periodically sinks and becomes lethal
    Submersible,
}

/// The player token (a circle)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Actor {
    pub pos: Vec2,
    pub radius: f32,
}

impl Default for Actor {
    fn default() -> Self {
        Self {
            pos: Vec2::new(ACTOR_START_X, ACTOR_START_Y),
            radius: ACTOR_RADIUS,
        }
    }
}

/// Any non-actor object on the field (a rectangle)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entity {
    /// Stable key for the renderer
    pub id: String,
    pub kind: EntityKind,
    /// Touching it kills the actor
    pub collidable: bool,
    /// Carries the actor horizontally
    pub ridable: bool,
    /// Attached to the actor (only ever the flower)
    pub being_carried: bool,
    /// Unfilled end target
    pub is_target: bool,
    /// Top-left corner
    pub pos: Vec2,
    pub size: Vec2,
    /// One color per stage, cycled; never empty
    pub palette: Vec<Color>,
    /// Per-tick velocity
    pub vel: Vec2,
}

impl Entity {
    /// Color for the given stage
    pub fn color(&self, stage: u32) -> Color {
        self.palette[stage as usize % self.palette.len()]
    }

    /// Whether the entity sits right of the canvas (parked or not yet spawned)
    pub fn is_off_canvas(&self, canvas_width: f32) -> bool {
        self.pos.x > canvas_width
    }

    /// Move so the entity's center is at `center`
    pub fn center_on(&mut self, center: Vec2) {
        self.pos = center - self.size / 2.0;
    }
}

/// Complete game state (deterministic, serializable)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    /// Seeded on the first accepted move
    pub rng: Option<Lcg>,
    /// Current stage (0-based)
    pub stage: u32,
    /// Clock ticks since the run started
    pub elapsed_ticks: u64,
    /// Best score across finished runs
    pub high_score: u32,
    /// Score of the current run
    pub points: u32,
    /// Lives left
    pub lives: u8,
    /// Targets filled this stage
    pub targets_filled: u32,
    pub canvas_size: Vec2,
    pub actor: Actor,
    /// Entities in draw and collision order
    pub entities: Vec<Entity>,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState {
    /// The canonical initial state
    pub fn new() -> Self {
        Self {
            rng: None,
            stage: 0,
            elapsed_ticks: 0,
            high_score: 0,
            points: 0,
            lives: STARTING_LIVES,
            targets_filled: 0,
            canvas_size: Vec2::new(CANVAS_WIDTH, CANVAS_HEIGHT),
            actor: Actor::default(),
            entities: layout::initial_entities(),
        }
    }

    /// Current color of the first water entity
    pub fn water_color(&self) -> Color {
        self.entities
            .iter()
            .find(|e| e.kind == EntityKind::Water)
            .map(|e| e.color(self.stage))
            .unwrap_or(Color::Blue)
    }

    /// Whether the actor is carrying anything
    pub fn is_carrying(&self) -> bool {
        self.entities.iter().any(|e| e.being_carried)
    }

    /// Number of targets still open
    pub fn open_targets(&self) -> usize {
        self.entities.iter().filter(|e| e.is_target).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state() {
        let state = GameState::new();
        assert_eq!(state.rng, None);
        assert_eq!(state.lives, 3);
        assert_eq!(state.actor.pos, Vec2::new(275.0, 576.0));
        assert_eq!(state.actor.radius, 23.0);
        assert_eq!(state.open_targets(), TOTAL_TARGETS as usize);
        assert!(!state.is_carrying());
    }

    #[test]
    fn test_palettes_never_empty() {
        let state = GameState::new();
        for entity in &state.entities {
            assert!(!entity.palette.is_empty(), "{} has no colors", entity.id);
        }
    }

    #[test]
    fn test_one_fly_and_one_flower() {
        let state = GameState::new();
        let count = |kind| state.entities.iter().filter(|e| e.kind == kind).count();
        assert_eq!(count(EntityKind::Fly), 1);
        assert_eq!(count(EntityKind::Flower), 1);
        assert_eq!(count(EntityKind::Bird), 1);
    }

    #[test]
    fn test_ids_unique() {
        let state = GameState::new();
        let mut ids: Vec<_> = state.entities.iter().map(|e| e.id.as_str()).collect();
        ids.sort_unstable();
        let len = ids.len();
        ids.dedup();
        assert_eq!(ids.len(), len);
    }

    #[test]
    fn test_color_cycles_with_stage() {
        let state = GameState::new();
        let car = state
            .entities
            .iter()
            .find(|e| e.kind == EntityKind::Car)
            .unwrap();
        assert_eq!(car.color(0), Color::Red);
        assert_eq!(car.color(1), Color::LightBlue);
        assert_eq!(car.color(5), Color::Red);
        assert_eq!(state.water_color(), Color::Blue);
    }

    #[test]
    fn test_center_on() {
        let mut state = GameState::new();
        let flower = state
            .entities
            .iter_mut()
            .find(|e| e.kind == EntityKind::Flower)
            .unwrap();
        flower.center_on(Vec2::new(100.0, 100.0));
        assert_eq!(flower.pos, Vec2::new(90.0, 90.0));
    }
}
