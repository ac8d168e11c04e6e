//! Scene interchange format.
//!
//! A scene travels as a JSON array of flat shape records, the format the
//! shape generator exchanges:
//!
//! ```json
//! [{"id": "r1", "type": "RECTANGLE", "x": 50, "y": 50, "width": 50, "height": 50},
//!  {"id": "c1", "type": "CIRCLE", "x": 100, "y": 100, "radius": 25},
//!  {"id": "t1", "type": "TEXT", "x": 50, "y": 150, "text": "CNC", "fontSize": 24}]
//! ```

use anyhow::{anyhow, bail, Context, Result};
use serde::{Deserialize, Serialize};

use crate::model::{
    DesignCircle as Circle, DesignRectangle as Rectangle, DesignText as TextShape, DrawingObject,
    Point, Shape,
};
use crate::scene::Scene;

/// Serialized shape data
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShapeData {
    pub id: String,
    #[serde(rename = "type")]
    pub shape_type: String,
    pub x: f64,
    pub y: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub radius: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_size: Option<f64>,
}

impl ShapeData {
    /// Convert a drawing object to its interchange record.
    pub fn from_drawing_object(obj: &DrawingObject) -> Self {
        let mut data = ShapeData {
            id: obj.id.to_string(),
            shape_type: String::new(),
            x: 0.0,
            y: 0.0,
            width: None,
            height: None,
            radius: None,
            text: None,
            font_size: None,
        };

        match &obj.shape {
            Shape::Rectangle(rect) => {
                data.shape_type = "RECTANGLE".to_string();
                data.x = rect.x;
                data.y = rect.y;
                data.width = Some(rect.width);
                data.height = Some(rect.height);
            }
            Shape::Circle(circle) => {
                data.shape_type = "CIRCLE".to_string();
                data.x = circle.center.x;
                data.y = circle.center.y;
                data.radius = Some(circle.radius);
            }
            Shape::Text(text) => {
                data.shape_type = "TEXT".to_string();
                data.x = text.x;
                data.y = text.y;
                data.text = Some(text.text.clone());
                data.font_size = Some(text.font_size);
            }
        }

        data
    }

    /// Convert an interchange record to a drawing object.
    pub fn to_drawing_object(&self) -> Result<DrawingObject> {
        if self.id.is_empty() {
            bail!("Shape id must not be empty");
        }
        if self.id.chars().any(char::is_control) {
            bail!("Shape id {:?} contains control characters", self.id);
        }

        let field = |name: &str, value: Option<f64>| {
            value.ok_or_else(|| anyhow!("{} shape '{}' is missing '{}'", self.shape_type, self.id, name))
        };

        let shape = match self.shape_type.as_str() {
            "RECTANGLE" => Shape::Rectangle(Rectangle::new(
                self.x,
                self.y,
                field("width", self.width)?,
                field("height", self.height)?,
            )),
            "CIRCLE" => Shape::Circle(Circle::new(
                Point::new(self.x, self.y),
                field("radius", self.radius)?,
            )),
            "TEXT" => Shape::Text(TextShape::new(
                self.text.clone().unwrap_or_default(),
                self.x,
                self.y,
                field("fontSize", self.font_size)?,
            )),
            other => bail!("Unknown shape type '{}' for shape '{}'", other, self.id),
        };

        Ok(DrawingObject::with_id(self.id.clone(), shape))
    }
}

/// Encode a scene as an interchange JSON array.
pub fn scene_to_json(scene: &Scene) -> Result<String> {
    let records: Vec<ShapeData> = scene.iter().map(ShapeData::from_drawing_object).collect();
    serde_json::to_string_pretty(&records).context("Failed to serialize scene")
}

/// Decode an interchange JSON array into a scene, preserving order.
pub fn scene_from_json(json: &str) -> Result<Scene> {
    let records: Vec<ShapeData> =
        serde_json::from_str(json).context("Failed to parse scene JSON")?;
    let objects = records
        .iter()
        .map(ShapeData::to_drawing_object)
        .collect::<Result<Vec<_>>>()?;
    Ok(Scene::from_objects(objects)?)
}
