use serde::{Deserialize, Serialize};

use super::{DesignerShape, Point};

/// Axis-aligned rectangle positioned by its top-left corner.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DesignRectangle {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl DesignRectangle {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn center(&self) -> Point {
        Point::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }
}

impl DesignerShape for DesignRectangle {
    fn bounds(&self) -> (f64, f64, f64, f64) {
        let x2 = self.x + self.width;
        let y2 = self.y + self.height;
        (self.x.min(x2), self.y.min(y2), self.x.max(x2), self.y.max(y2))
    }

    fn origin(&self) -> Point {
        Point::new(self.x, self.y)
    }

    fn translate(&mut self, dx: f64, dy: f64) {
        self.x += dx;
        self.y += dy;
    }
}
