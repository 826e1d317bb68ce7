//! Scene model: an ordered list of drawable primitives.
//!
//! Items are stored in paint order; later items draw on top of earlier ones.

use serde::Serialize;

use crate::geometry::{Disk, Point};

pub const WHITE: &str = "#FFF";
pub const BLACK: &str = "#000";
pub const DIM: &str = "#CCC";

/// Stroke styling for open paths and arcs.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Stroke {
    pub width: f64,
    /// Dash length and gap, `None` for a solid line.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dash: Option<(f64, f64)>,
}

impl Stroke {
    pub fn solid(width: f64) -> Self {
        Self { width, dash: None }
    }

    pub fn dashed(width: f64, on: f64, off: f64) -> Self {
        Self {
            width,
            dash: Some((on, off)),
        }
    }
}

/// One open polyline.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct PathGeometry {
    pub points: Vec<Point>,
    pub stroke: Stroke,
    /// Clip the path to the scene disk.
    pub clipped: bool,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Primitive {
    Rect {
        origin: Point,
        width: f64,
        height: f64,
        fill: &'static str,
    },
    Circle {
        center: Point,
        radius: f64,
        #[serde(skip_serializing_if = "Option::is_none")]
        fill: Option<&'static str>,
        stroke: Option<Stroke>,
        opacity: f64,
    },
    Polyline(PathGeometry),
    /// Clockwise arc on a circle around `center` from `start` to `end` radians.
    Arc {
        center: Point,
        radius: f64,
        start: f64,
        end: f64,
        stroke: Stroke,
    },
    /// Filled dot; `glow` requests the soft halo used for stars.
    Point {
        center: Point,
        radius: f64,
        glow: bool,
    },
    Text {
        anchor: Point,
        text: String,
        size: f64,
        fill: &'static str,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Layer {
    Background,
    Outline,
    Stars,
    Pattern,
    Ring,
    Caption,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SceneItem {
    pub layer: Layer,
    pub primitive: Primitive,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Scene {
    pub width: f64,
    pub height: f64,
    /// Region pattern paths are clipped to.
    pub clip: Disk,
    pub items: Vec<SceneItem>,
}

impl Scene {
    pub fn new(width: f64, height: f64, clip: Disk) -> Self {
        Self {
            width,
            height,
            clip,
            items: Vec::new(),
        }
    }

    pub fn push(&mut self, layer: Layer, primitive: Primitive) {
        self.items.push(SceneItem { layer, primitive });
    }

    pub fn extend<I>(&mut self, layer: Layer, primitives: I)
    where
        I: IntoIterator<Item = Primitive>,
    {
        self.items.extend(
            primitives
                .into_iter()
                .map(|primitive| SceneItem { layer, primitive }),
        );
    }

    /// Primitives of one layer, in paint order.
    pub fn layer(&self, layer: Layer) -> impl Iterator<Item = &Primitive> + '_ {
        self.items
            .iter()
            .filter(move |item| item.layer == layer)
            .map(|item| &item.primitive)
    }

    /// Layers in the order they first appear.
    pub fn layer_order(&self) -> Vec<Layer> {
        let mut order: Vec<Layer> = Vec::new();
        for item in &self.items {
            if order.last() != Some(&item.layer) {
                order.push(item.layer);
            }
        }
        order
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
