use serde::{Deserialize, Serialize};

use super::{DesignerShape, Point};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DesignCircle {
    pub radius: f64,
    pub center: Point,
}

impl DesignCircle {
    pub fn new(center: Point, radius: f64) -> Self {
        Self { center, radius }
    }
}

impl DesignerShape for DesignCircle {
    fn bounds(&self) -> (f64, f64, f64, f64) {
        let r = self.radius.abs();
        (
            self.center.x - r,
            self.center.y - r,
            self.center.x + r,
            self.center.y + r,
        )
    }

    fn origin(&self) -> Point {
        self.center
    }

    fn translate(&mut self, dx: f64, dy: f64) {
        self.center.x += dx;
        self.center.y += dy;
    }
}
