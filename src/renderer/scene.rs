//! Scene description for one frame
//!
//! Flattens a `GameState` into keyed shapes. Backends create a shape the
//! first time its id appears and update it in place afterwards.

use glam::Vec2;

use crate::sim::{Color, EntityKind, GameState};

/// Element id of the actor circle
pub const ACTOR_ID: &str = "circle";
pub const POINTS_TEXT_ID: &str = "pointsText";
pub const LIVES_TEXT_ID: &str = "livesText";
pub const HIGH_SCORE_TEXT_ID: &str = "highScoreText";

const LABEL_FONT_SIZE: f32 = 20.0;
const LABEL_Y: f32 = 580.0;
/// Rectangles are outlined in their own color
const RECT_STROKE_WIDTH: f32 = 1.0;

/// Stacking group a shape is appended to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layer {
    Background,
    Foreground,
}

/// Geometry of a shape
#[derive(Debug, Clone, PartialEq)]
pub enum Primitive {
    Rect { pos: Vec2, size: Vec2 },
    Circle { center: Vec2, radius: f32 },
    Text { pos: Vec2, font_size: f32, content: String },
}

/// One keyed draw command
#[derive(Debug, Clone, PartialEq)]
pub struct Shape {
    pub id: String,
    pub layer: Layer,
    pub color: Color,
    pub primitive: Primitive,
}

impl Shape {
    /// SVG presentation attributes, text content excluded
    pub fn attributes(&self) -> Vec<(&'static str, String)> {
        let color = self.color.as_str().to_string();
        let mut attrs = vec![("fill", color.clone())];
        match &self.primitive {
            Primitive::Rect { pos, size } => attrs.extend([
                ("stroke", color),
                ("stroke-width", RECT_STROKE_WIDTH.to_string()),
                ("x", pos.x.to_string()),
                ("y", pos.y.to_string()),
                ("width", size.x.to_string()),
                ("height", size.y.to_string()),
            ]),
            Primitive::Circle { center, radius } => attrs.extend([
                ("cx", center.x.to_string()),
                ("cy", center.y.to_string()),
                ("r", radius.to_string()),
            ]),
            Primitive::Text { pos, font_size, .. } => attrs.extend([
                ("x", pos.x.to_string()),
                ("y", pos.y.to_string()),
                ("font-size", font_size.to_string()),
            ]),
        }
        attrs
    }
}

/// Everything to draw for one state, in draw order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Scene {
    pub size: Vec2,
    pub shapes: Vec<Shape>,
}

impl Scene {
    pub fn from_state(state: &GameState) -> Self {
        let mut shapes: Vec<Shape> = state
            .entities
            .iter()
            .map(|entity| Shape {
                id: entity.id.clone(),
                // Birds fly over the actor; a carried flower sits on top of it
                layer: match entity.kind {
                    EntityKind::Bird | EntityKind::Flower => Layer::Foreground,
                    _ => Layer::Background,
                },
                color: entity.color(state.stage),
                primitive: Primitive::Rect {
                    pos: entity.pos,
                    size: entity.size,
                },
            })
            .collect();

        shapes.push(Shape {
            id: ACTOR_ID.to_string(),
            layer: Layer::Background,
            color: Color::LimeGreen,
            primitive: Primitive::Circle {
                center: state.actor.pos,
                radius: state.actor.radius,
            },
        });

        let labels = [
            (POINTS_TEXT_ID, 10.0, format!("Score: {}", state.points)),
            (LIVES_TEXT_ID, 130.0, format!("Lives: {}", state.lives)),
            (
                HIGH_SCORE_TEXT_ID,
                430.0,
                format!("High Score: {}", state.high_score),
            ),
        ];
        shapes.extend(labels.into_iter().map(|(id, x, content)| Shape {
            id: id.to_string(),
            layer: Layer::Foreground,
            color: Color::White,
            primitive: Primitive::Text {
                pos: Vec2::new(x, LABEL_Y),
                font_size: LABEL_FONT_SIZE,
                content,
            },
        }));

        Self {
            size: state.canvas_size,
            shapes,
        }
    }

    /// Shape by id
    pub fn get(&self, id: &str) -> Option<&Shape> {
        self.shapes.iter().find(|s| s.id == id)
    }
}
