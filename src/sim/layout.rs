//! Entity factory
//!
//! Builds the fixed field: rows of cars, logs, water and targets, plus the
//! bird, fly and flower. Everything here is pure and free of randomness.

use glam::Vec2;

use super::state::{Color, Entity, EntityKind};
use crate::consts::*;

const CAR_COLORS: &[Color] = &[
    Color::Red,
    Color::LightBlue,
    Color::Sienna,
    Color::Black,
    Color::White,
];
const WATER_COLORS: &[Color] = &[
    Color::Blue,
    Color::DarkBlue,
    Color::DarkRed,
    Color::Black,
    Color::White,
];

/// Parametric description of one row of identical entities
#[derive(Debug, Clone)]
pub struct RowSpec<'a> {
    pub kind: EntityKind,
    pub collidable: bool,
    pub ridable: bool,
    pub being_carried: bool,
    pub is_target: bool,
    pub palette: &'a [Color],
    /// x of the first entity
    pub init_x: f32,
    pub height: f32,
    pub width: f32,
    pub count: usize,
    pub vel: Vec2,
    /// Top of the row band
    pub row_y: f32,
    /// Id prefix; entity `i` gets `{name}{i}`
    pub name: &'a str,
}

impl<'a> RowSpec<'a> {
    fn hazard(kind: EntityKind, palette: &'a [Color], name: &'a str) -> Self {
        Self {
            kind,
            collidable: true,
            ridable: false,
            being_carried: false,
            is_target: false,
            palette,
            init_x: 0.0,
            height: 30.0,
            width: 60.0,
            count: 1,
            vel: Vec2::ZERO,
            row_y: 0.0,
            name,
        }
    }
}

/// Lay out `spec.count` entities across a row
///
/// Moving rows spread over `canvas_width + width` so the row wraps
/// seamlessly; static rows divide the canvas width evenly.
pub fn generate_row(canvas_width: f32, spec: &RowSpec) -> Vec<Entity> {
    let count = spec.count as f32;
    let y = spec.row_y + ROW_HEIGHT / 2.0 - spec.height / 2.0;
    (0..spec.count)
        .map(|i| {
            let slot = i as f32;
            let x = if spec.vel.x != 0.0 {
                let span = canvas_width + spec.width;
                (spec.init_x + slot * span / count) % span
            } else {
                spec.init_x + slot * canvas_width / count
            };
            Entity {
                id: format!("{}{}", spec.name, i),
                kind: spec.kind,
                collidable: spec.collidable,
                ridable: spec.ridable,
                being_carried: spec.being_carried,
                is_target: spec.is_target,
                pos: Vec2::new(x, y),
                size: Vec2::new(spec.width, spec.height),
                palette: spec.palette.to_vec(),
                vel: spec.vel,
            }
        })
        .collect()
}

/// Lethal traffic lane
pub fn car_row(count: usize, vel: Vec2, row_y: f32, name: &str) -> Vec<Entity> {
    generate_row(
        CANVAS_WIDTH,
        &RowSpec {
            count,
            vel,
            row_y,
            ..RowSpec::hazard(EntityKind::Car, CAR_COLORS, name)
        },
    )
}

/// Full-width resting strip
pub fn safe_row(row_y: f32, name: &str) -> Vec<Entity> {
    generate_row(
        CANVAS_WIDTH,
        &RowSpec {
            collidable: false,
            palette: &[Color::MediumOrchid],
            height: ROW_HEIGHT,
            width: CANVAS_WIDTH,
            row_y,
            ..RowSpec::hazard(EntityKind::Safe, &[], name)
        },
    )
}

fn log_layer(kind: EntityKind, vel: Vec2, row_y: f32, name: &str) -> Vec<Entity> {
    generate_row(
        CANVAS_WIDTH,
        &RowSpec {
            collidable: false,
            ridable: true,
            palette: &[Color::Orange],
            width: 121.0,
            count: 3,
            vel,
            row_y,
            ..RowSpec::hazard(kind, &[], name)
        },
    )
}

fn water_layer(vel: Vec2, row_y: f32, name: &str) -> Vec<Entity> {
    generate_row(
        CANVAS_WIDTH,
        &RowSpec {
            init_x: 120.0,
            width: 121.0,
            count: 3,
            vel,
            row_y,
            ..RowSpec::hazard(EntityKind::Water, WATER_COLORS, name)
        },
    )
}

/// Logs to ride, interleaved with lethal water moving at the same speed
pub fn log_water_row(vel: Vec2, row_y: f32, name: &str) -> Vec<Entity> {
    let mut row = log_layer(EntityKind::Log, vel, row_y, &format!("{name}log"));
    row.extend(water_layer(vel, row_y, &format!("{name}water")));
    row
}

/// Same as [`log_water_row`] but the logs periodically submerge
pub fn submersible_log_water_row(vel: Vec2, row_y: f32, name: &str) -> Vec<Entity> {
    let mut row = log_layer(
        EntityKind::Submersible,
        vel,
        row_y,
        &format!("{name}submergible"),
    );
    row.extend(water_layer(vel, row_y, &format!("{name}water")));
    row
}

/// Harmless river backdrop behind the log rows
pub fn river_backdrop(name: &str) -> Vec<Entity> {
    generate_row(
        CANVAS_WIDTH,
        &RowSpec {
            collidable: false,
            height: 300.0,
            width: CANVAS_WIDTH,
            row_y: 125.0,
            ..RowSpec::hazard(EntityKind::Water, WATER_COLORS, name)
        },
    )
}

/// End targets along the top edge
pub fn target_row(name: &str) -> Vec<Entity> {
    generate_row(
        CANVAS_WIDTH,
        &RowSpec {
            collidable: false,
            is_target: true,
            palette: &[Color::PaleGreen],
            height: ROW_HEIGHT,
            count: TOTAL_TARGETS as usize,
            ..RowSpec::hazard(EntityKind::Target, &[], name)
        },
    )
}

/// Lethal water between the end targets
pub fn target_water_row(name: &str) -> Vec<Entity> {
    generate_row(
        CANVAS_WIDTH,
        &RowSpec {
            init_x: 60.0,
            height: ROW_HEIGHT,
            count: TOTAL_TARGETS as usize,
            ..RowSpec::hazard(EntityKind::Water, WATER_COLORS, name)
        },
    )
}

pub fn bird(pos: Vec2, vel: Vec2, id: &str) -> Entity {
    Entity {
        id: format!("bird{id}"),
        kind: EntityKind::Bird,
        collidable: true,
        ridable: false,
        being_carried: false,
        is_target: false,
        pos,
        size: Vec2::new(50.0, 30.0),
        palette: vec![Color::Gold],
        vel,
    }
}

/// The fly starts parked; the scheduler places it on targets
pub fn fly(id: &str) -> Entity {
    Entity {
        id: format!("fly{id}"),
        kind: EntityKind::Fly,
        collidable: false,
        ridable: false,
        being_carried: false,
        is_target: false,
        pos: Vec2::new(PARKED_X, 10.0),
        size: Vec2::new(30.0, 30.0),
        palette: vec![Color::SaddleBrown],
        vel: Vec2::ZERO,
    }
}

pub fn flower(pos: Vec2, vel: Vec2, id: &str) -> Entity {
    Entity {
        id: format!("flower{id}"),
        kind: EntityKind::Flower,
        collidable: false,
        ridable: false,
        being_carried: false,
        is_target: false,
        pos,
        size: Vec2::new(20.0, 20.0),
        palette: vec![Color::Magenta],
        vel,
    }
}

/// The canonical field, in collision and draw order
///
/// Targets come before the water between them, and logs before the water
/// under them, so a matching platform is always resolved first.
pub fn initial_entities() -> Vec<Entity> {
    let parked = Vec2::new(PARKED_X, 0.0);
    [
        river_backdrop("waterBackground"),
        safe_row(550.0, "start"),
        car_row(2, Vec2::new(-0.5, 0.0), 500.0, "carRow0"),
        car_row(2, Vec2::new(1.0, 0.0), 450.0, "carRow1"),
        car_row(3, Vec2::new(-1.5, 0.0), 400.0, "carRow2"),
        car_row(3, Vec2::new(1.5, 0.0), 350.0, "carRow3"),
        safe_row(300.0, "middle"),
        log_water_row(Vec2::new(-1.0, 0.0), 250.0, "logWater0"),
        log_water_row(Vec2::new(1.0, 0.0), 200.0, "logWater1"),
        submersible_log_water_row(Vec2::new(-1.5, 0.0), 150.0, "logWater2"),
        log_water_row(Vec2::new(1.5, 0.0), 100.0, "logWater3"),
        log_water_row(Vec2::new(-2.0, 0.0), 50.0, "logWater4"),
        target_row("endTarget"),
        target_water_row("waterEnd"),
        vec![fly("0")],
        vec![flower(parked, Vec2::ZERO, "0")],
        vec![bird(parked, Vec2::ZERO, "0")],
    ]
    .concat()
}
