//! Frogger - A lane-crossing arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (layout, collisions, stages, scheduling)
//! - `input`: Keyboard codes to abstract move commands
//! - `renderer`: State snapshot to keyed draw commands (SVG on the web)
//! - `settings`: Runtime configuration
//! - `autopilot`: Seeded random player for demos and soak runs

pub mod autopilot;
pub mod input;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use autopilot::Autopilot;
pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    /// Clock period in milliseconds
    pub const TICK_INTERVAL_MS: u32 = 15;

    /// Canvas dimensions
    pub const CANVAS_WIDTH: f32 = 600.0;
    pub const CANVAS_HEIGHT: f32 = 600.0;

    /// Every row occupies a band of this height; entities are centered in it
    pub const ROW_HEIGHT: f32 = 50.0;

    /// Actor start position and size
    pub const ACTOR_START_X: f32 = 275.0;
    pub const ACTOR_START_Y: f32 = 576.0;
    pub const ACTOR_RADIUS: f32 = 23.0;
    pub const STARTING_LIVES: u8 = 3;

    /// Move step in both axes
    pub const MOVE_STEP: f32 = 50.0;
    /// Points for one step forward (backward costs the same)
    pub const STEP_POINTS: i32 = 5;

    /// Where inactive bird/fly/flower entities wait
    pub const PARKED_X: f32 = 9999.0;
    /// Entities at or beyond this x are parked and never wrap
    pub const ONSCREEN_SENTINEL_X: f32 = 2000.0;

    /// Number of end targets; filling all of them clears the stage
    pub const TOTAL_TARGETS: u32 = 5;

    /// Target scoring
    pub const TARGET_POINTS: u32 = 45;
    pub const TARGET_BONUS_POINTS: u32 = 50;

    /// Collision box scale: lenient for hazards, exact for the flower
    pub const LENIENT_STRICTNESS: f32 = 0.5;
    pub const FLOWER_STRICTNESS: f32 = 1.0;

    /// Submersible logs flip every cycle; the warning color starts past this
    pub const SUBMERGE_CYCLE_TICKS: u64 = 200;
    pub const SUBMERGE_WARNING_TICKS: u64 = 120;

    /// Random event windows (period, offset)
    pub const BIRD_WINDOW: (u64, u64) = (60, 50);
    pub const FLY_WINDOW: (u64, u64) = (300, 171);
    pub const FLOWER_WINDOW: (u64, u64) = (60, 43);

    /// Base drift speed for birds and flowers, multiplied by (stage + 1)
    pub const DRIFT_SPEED: f32 = 0.5;

    /// Stage scaling factors, multiplied by (stage + 1)
    pub const BIRD_SPEED_SCALE: f32 = 2.0;
    pub const BIRD_SIZE_SCALE: f32 = 1.5;
    pub const ENTITY_SPEED_SCALE: f32 = 1.25;
}
