//! Toolpath planning from design shapes.
//!
//! Converts each shape into tool-center paths. Closed contours are offset
//! outward by the tool radius so the cut edge lands on the nominal outline;
//! text is engraved on the stroke centerline.

mod segment;

use cutplan_core::GeometryError;

use crate::model::{
    DesignCircle as Circle, DesignRectangle as Rectangle, DesignText as TextShape, DrawingObject,
    Point, Shape,
};
use crate::scene::Scene;
use crate::stroke_font;

pub use segment::{ArcDirection, PathSegment, PlannedPath, PlannedShape};

fn finite(field: &'static str, value: f64) -> Result<f64, GeometryError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(GeometryError::NonFinite { field })
    }
}

fn positive(dimension: &'static str, value: f64) -> Result<f64, GeometryError> {
    finite(dimension, value)?;
    if value > 0.0 {
        Ok(value)
    } else {
        Err(GeometryError::NonPositiveDimension { dimension, value })
    }
}

/// Generates tool-center paths for a fixed tool.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ToolpathGenerator {
    tool_radius: f64,
}

impl ToolpathGenerator {
    pub fn new(tool_radius: f64) -> Self {
        Self { tool_radius }
    }

    pub fn tool_radius(&self) -> f64 {
        self.tool_radius
    }

    /// Outside contour of a rectangle.
    ///
    /// Starts at the offset top-left corner (smallest x and y) and runs
    /// clockwise in the program frame, the same sense as the `G02` circle:
    /// top-left, bottom-left, bottom-right, top-right, back to top-left.
    pub fn generate_rectangle_contour(
        &self,
        rect: &Rectangle,
    ) -> Result<PlannedPath, GeometryError> {
        let x = finite("x", rect.x)?;
        let y = finite("y", rect.y)?;
        let w = positive("width", rect.width)?;
        let h = positive("height", rect.height)?;
        let r = finite("tool radius", self.tool_radius)?;

        let left = x - r;
        let top = y - r;
        let right = x + w + r;
        let bottom = y + h + r;
        if !(right > left && bottom > top) {
            return Err(GeometryError::CollapsedContour {
                width: right - left,
                height: bottom - top,
            });
        }

        let corners = [
            Point::new(left, top),
            Point::new(left, bottom),
            Point::new(right, bottom),
            Point::new(right, top),
        ];

        let mut path = PlannedPath::new(corners[0], true);
        for i in 1..=4 {
            path.line_to(corners[i % 4]);
        }
        Ok(path)
    }

    /// Outside contour of a circle as one full clockwise arc starting at
    /// angle zero.
    pub fn generate_circle_contour(&self, circle: &Circle) -> Result<PlannedPath, GeometryError> {
        let cx = finite("x", circle.center.x)?;
        let cy = finite("y", circle.center.y)?;
        let radius = positive("radius", circle.radius)?;
        let r = finite("tool radius", self.tool_radius)?;

        let effective = radius + r;
        if !(effective > 0.0) {
            return Err(GeometryError::NonPositiveEffectiveRadius { effective });
        }

        let start = Point::new(cx + effective, cy);
        let mut path = PlannedPath::new(start, true);
        path.arc_to(start, Point::new(cx, cy), ArcDirection::Clockwise);
        Ok(path)
    }

    /// Open centerline paths, one per font stroke.
    pub fn generate_text_strokes(
        &self,
        text: &TextShape,
    ) -> Result<Vec<PlannedPath>, GeometryError> {
        let x = finite("x", text.x)?;
        let y = finite("y", text.y)?;
        let font_size = positive("font size", text.font_size)?;

        let paths = stroke_font::layout(&text.text, Point::new(x, y), font_size)
            .into_iter()
            .filter_map(|stroke| {
                let (first, rest) = stroke.split_first()?;
                let mut path = PlannedPath::new(*first, false);
                for point in rest {
                    path.line_to(*point);
                }
                Some(path)
            })
            .collect();
        Ok(paths)
    }

    /// Plans a single scene object. Invalid geometry yields a skipped shape.
    pub fn plan(&self, object: &DrawingObject) -> PlannedShape {
        let kind = object.shape.shape_type();
        let outcome = match &object.shape {
            Shape::Rectangle(rect) => self.generate_rectangle_contour(rect).map(|p| vec![p]),
            Shape::Circle(circle) => self.generate_circle_contour(circle).map(|p| vec![p]),
            Shape::Text(text) => self.generate_text_strokes(text),
        };

        match outcome {
            Ok(paths) => PlannedShape::planned(object.id.clone(), kind, paths),
            Err(reason) => {
                tracing::warn!("Skipping {} {}: {}", kind, object.id, reason);
                PlannedShape::skipped(object.id.clone(), kind, reason)
            }
        }
    }
}

/// Plans one object with the given tool radius.
pub fn plan(object: &DrawingObject, tool_radius: f64) -> PlannedShape {
    ToolpathGenerator::new(tool_radius).plan(object)
}

/// Plans every object of the scene, in scene order.
pub fn plan_scene(scene: &Scene, tool_radius: f64) -> Vec<PlannedShape> {
    let generator = ToolpathGenerator::new(tool_radius);
    scene.iter().map(|object| generator.plan(object)).collect()
}
