//! Planned path segment types and data structures.

use std::f64::consts::TAU;

use cutplan_core::GeometryError;

use crate::model::{Point, ShapeId, ShapeType};

/// Rotation sense of an arc, in the program's coordinate frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArcDirection {
    /// Emitted as G02.
    Clockwise,
    /// Emitted as G03.
    CounterClockwise,
}

/// A single cutting move, starting where the previous one ended.
#[derive(Debug, Clone, PartialEq)]
pub enum PathSegment {
    Line {
        to: Point,
    },
    Arc {
        to: Point,
        center: Point,
        direction: ArcDirection,
    },
}

impl PathSegment {
    pub fn end(&self) -> Point {
        match self {
            PathSegment::Line { to } | PathSegment::Arc { to, .. } => *to,
        }
    }

    /// Length of the move when started at `from`.
    ///
    /// An arc whose end coincides with its start is a full turn.
    pub fn length_from(&self, from: Point) -> f64 {
        match self {
            PathSegment::Line { to } => from.distance_to(to),
            PathSegment::Arc {
                to,
                center,
                direction,
            } => {
                let radius = center.distance_to(&from);
                let a0 = (from.y - center.y).atan2(from.x - center.x);
                let a1 = (to.y - center.y).atan2(to.x - center.x);
                let raw = match direction {
                    ArcDirection::Clockwise => a0 - a1,
                    ArcDirection::CounterClockwise => a1 - a0,
                };
                let mut sweep = raw.rem_euclid(TAU);
                if sweep < 1e-9 {
                    sweep = TAU;
                }
                radius * sweep
            }
        }
    }
}

/// A continuous cut in tool-center coordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct PlannedPath {
    pub start: Point,
    pub segments: Vec<PathSegment>,
    /// Whether the last segment returns to `start`.
    pub closed: bool,
}

impl PlannedPath {
    pub fn new(start: Point, closed: bool) -> Self {
        Self {
            start,
            segments: Vec::new(),
            closed,
        }
    }

    pub fn line_to(&mut self, to: Point) {
        self.segments.push(PathSegment::Line { to });
    }

    pub fn arc_to(&mut self, to: Point, center: Point, direction: ArcDirection) {
        self.segments.push(PathSegment::Arc {
            to,
            center,
            direction,
        });
    }

    /// Total cutting length of the path.
    pub fn length(&self) -> f64 {
        let mut current = self.start;
        let mut total = 0.0;
        for segment in &self.segments {
            total += segment.length_from(current);
            current = segment.end();
        }
        total
    }
}

/// Planning result for one scene object.
#[derive(Debug, Clone, PartialEq)]
pub struct PlannedShape {
    pub id: ShapeId,
    pub kind: ShapeType,
    /// The paths to cut, or the reason the shape was skipped.
    pub outcome: Result<Vec<PlannedPath>, GeometryError>,
}

impl PlannedShape {
    pub fn planned(id: ShapeId, kind: ShapeType, paths: Vec<PlannedPath>) -> Self {
        Self {
            id,
            kind,
            outcome: Ok(paths),
        }
    }

    pub fn skipped(id: ShapeId, kind: ShapeType, reason: GeometryError) -> Self {
        Self {
            id,
            kind,
            outcome: Err(reason),
        }
    }

    /// Paths to cut; empty for a skipped shape.
    pub fn paths(&self) -> &[PlannedPath] {
        match &self.outcome {
            Ok(paths) => paths,
            Err(_) => &[],
        }
    }

    pub fn skip_reason(&self) -> Option<&GeometryError> {
        self.outcome.as_ref().err()
    }

    pub fn total_length(&self) -> f64 {
        self.paths().iter().map(PlannedPath::length).sum()
    }
}
