//! Rendering module
//!
//! `scene` turns a state into keyed shapes and is platform independent.
//! `svg` pushes those shapes into the browser DOM.

pub mod scene;
#[cfg(target_arch = "wasm32")]
pub mod svg;

pub use scene::{Layer, Primitive, Scene, Shape};
#[cfg(target_arch = "wasm32")]
pub use svg::SvgRenderer;
