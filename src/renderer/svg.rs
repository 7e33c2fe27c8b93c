//! SVG backend (WASM only)
//!
//! Applies a `Scene` to an `<svg>` element. Each shape id maps to one DOM
//! element: created and appended to its layer group on first sight, then
//! only its attributes are updated.

use wasm_bindgen::JsValue;
use web_sys::{Document, Element};

use super::scene::{Layer, Primitive, Scene, Shape};

const SVG_NS: &str = "http://www.w3.org/2000/svg";

pub struct SvgRenderer {
    document: Document,
    background: Element,
    foreground: Element,
}

impl SvgRenderer {
    /// Build the `<svg>` root and its two layer groups inside `container`
    pub fn new(document: Document, container: &Element, size: glam::Vec2) -> Result<Self, JsValue> {
        let svg = document.create_element_ns(Some(SVG_NS), "svg")?;
        svg.set_attribute("width", &size.x.to_string())?;
        svg.set_attribute("height", &size.y.to_string())?;
        svg.set_attribute("viewBox", &format!("0 0 {} {}", size.x, size.y))?;

        let background = document.create_element_ns(Some(SVG_NS), "g")?;
        background.set_attribute("id", "backgroundLayer")?;
        let foreground = document.create_element_ns(Some(SVG_NS), "g")?;
        foreground.set_attribute("id", "foregroundLayer")?;

        svg.append_child(&background)?;
        svg.append_child(&foreground)?;
        container.append_child(&svg)?;

        Ok(Self {
            document,
            background,
            foreground,
        })
    }

    pub fn render(&self, scene: &Scene) -> Result<(), JsValue> {
        for shape in &scene.shapes {
            let element = self.element_for(shape)?;
            apply(&element, shape)?;
        }
        Ok(())
    }

    fn element_for(&self, shape: &Shape) -> Result<Element, JsValue> {
        if let Some(existing) = self.document.get_element_by_id(&shape.id) {
            return Ok(existing);
        }

        let tag = match shape.primitive {
            Primitive::Rect { .. } => "rect",
            Primitive::Circle { .. } => "circle",
            Primitive::Text { .. } => "text",
        };
        let element = self.document.create_element_ns(Some(SVG_NS), tag)?;
        element.set_attribute("id", &shape.id)?;

        let layer = match shape.layer {
            Layer::Background => &self.background,
            Layer::Foreground => &self.foreground,
        };
        layer.append_child(&element)?;
        log::debug!("Created <{}> #{}", tag, shape.id);
        Ok(element)
    }
}

fn apply(element: &Element, shape: &Shape) -> Result<(), JsValue> {
    for (name, value) in shape.attributes() {
        element.set_attribute(name, &value)?;
    }
    if let Primitive::Text { content, .. } = &shape.primitive {
        // Skip the DOM write when the label hasn't changed
        if element.text_content().as_deref() != Some(content.as_str()) {
            element.set_text_content(Some(content));
        }
    }
    Ok(())
}
