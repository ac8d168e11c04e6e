use serde::{Deserialize, Serialize};

use super::{DesignerShape, Point};
use crate::stroke_font;

/// Text engraved along single-stroke glyphs, positioned by its baseline origin.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DesignText {
    pub text: String,
    pub x: f64,
    pub y: f64,
    /// Cap height in mm.
    pub font_size: f64,
}

impl DesignText {
    pub fn new(text: String, x: f64, y: f64, font_size: f64) -> Self {
        Self {
            text,
            x,
            y,
            font_size,
        }
    }
}

impl DesignerShape for DesignText {
    fn bounds(&self) -> (f64, f64, f64, f64) {
        // Glyphs rise from the baseline towards smaller y.
        let width = stroke_font::text_width(&self.text, self.font_size);
        (self.x, self.y - self.font_size, self.x + width, self.y)
    }

    fn origin(&self) -> Point {
        Point::new(self.x, self.y)
    }

    fn translate(&mut self, dx: f64, dy: f64) {
        self.x += dx;
        self.y += dy;
    }
}
