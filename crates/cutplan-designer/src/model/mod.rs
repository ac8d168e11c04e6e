use serde::{Deserialize, Serialize};

mod circle;
mod rectangle;
mod text;

pub use circle::DesignCircle;
pub use rectangle::DesignRectangle;
pub use text::DesignText;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance_to(&self, other: &Point) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }
}

/// Identifier of a shape, stable for the shape's lifetime.
///
/// Freshly created shapes get a UUID v4; shapes coming from the interchange
/// format keep whatever string they were given.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ShapeId(String);

impl ShapeId {
    pub fn new() -> Self {
        Self(uuid::Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Non-empty and free of control characters, so the id fits on one
    /// program comment line.
    pub fn is_valid(&self) -> bool {
        !self.0.is_empty() && !self.0.chars().any(char::is_control)
    }
}

impl Default for ShapeId {
    fn default() -> Self {
        Self::new()
    }
}

impl From<&str> for ShapeId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for ShapeId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl std::fmt::Display for ShapeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

pub trait DesignerShape {
    /// Axis-aligned bounds as (min_x, min_y, max_x, max_y).
    fn bounds(&self) -> (f64, f64, f64, f64);
    /// The anchor point the shape is positioned by.
    fn origin(&self) -> Point;
    fn translate(&mut self, dx: f64, dy: f64);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ShapeType {
    Rectangle,
    Circle,
    Text,
}

impl std::fmt::Display for ShapeType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ShapeType::Rectangle => write!(f, "Rectangle"),
            ShapeType::Circle => write!(f, "Circle"),
            ShapeType::Text => write!(f, "Text"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Shape {
    Rectangle(DesignRectangle),
    Circle(DesignCircle),
    Text(DesignText),
}

impl DesignerShape for Shape {
    fn bounds(&self) -> (f64, f64, f64, f64) {
        match self {
            Shape::Rectangle(s) => s.bounds(),
            Shape::Circle(s) => s.bounds(),
            Shape::Text(s) => s.bounds(),
        }
    }

    fn origin(&self) -> Point {
        match self {
            Shape::Rectangle(s) => s.origin(),
            Shape::Circle(s) => s.origin(),
            Shape::Text(s) => s.origin(),
        }
    }

    fn translate(&mut self, dx: f64, dy: f64) {
        match self {
            Shape::Rectangle(s) => s.translate(dx, dy),
            Shape::Circle(s) => s.translate(dx, dy),
            Shape::Text(s) => s.translate(dx, dy),
        }
    }
}

impl Shape {
    pub fn shape_type(&self) -> ShapeType {
        match self {
            Shape::Rectangle(_) => ShapeType::Rectangle,
            Shape::Circle(_) => ShapeType::Circle,
            Shape::Text(_) => ShapeType::Text,
        }
    }

    /// The shape a freshly added object of `shape_type` starts as.
    pub fn default_for(shape_type: ShapeType) -> Self {
        match shape_type {
            ShapeType::Rectangle => Shape::Rectangle(DesignRectangle::new(50.0, 50.0, 50.0, 50.0)),
            ShapeType::Circle => Shape::Circle(DesignCircle::new(Point::new(100.0, 100.0), 25.0)),
            ShapeType::Text => Shape::Text(DesignText::new("CNC".to_string(), 50.0, 150.0, 24.0)),
        }
    }
}

/// A shape placed in a scene, together with its identifier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DrawingObject {
    pub id: ShapeId,
    pub shape: Shape,
}

impl DrawingObject {
    pub fn new(shape: Shape) -> Self {
        Self {
            id: ShapeId::new(),
            shape,
        }
    }

    pub fn with_id(id: impl Into<ShapeId>, shape: Shape) -> Self {
        Self {
            id: id.into(),
            shape,
        }
    }
}
