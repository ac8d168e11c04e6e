//! G-code generation from planned toolpaths.

use cutplan_settings::MachineSettings;

use crate::scene::Scene;
use crate::toolpath::{plan_scene, ArcDirection, PathSegment, PlannedPath, PlannedShape};

/// Formats a coordinate with three decimals, folding `-0.000` into `0.000`.
fn coord(value: f64) -> String {
    let text = format!("{:.3}", value);
    if text == "-0.000" {
        "0.000".to_string()
    } else {
        text
    }
}

/// Formats a feed rate. Whole numbers print without decimals, anything else
/// keeps three so a fractional feed is never rounded to another value.
fn feed_rate(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{:.0}", value)
    } else {
        format!("{:.3}", value)
    }
}

/// Text placed inside a `;` comment. Control characters would end the
/// comment line early, so they are replaced.
fn comment_text(text: &str) -> String {
    text.chars()
        .map(|c| if c.is_control() { '?' } else { c })
        .collect()
}

/// G-code generator for converting planned shapes to program text.
pub struct ToolpathToGcode {
    settings: MachineSettings,
}

impl ToolpathToGcode {
    /// Creates a new G-code generator.
    pub fn new(settings: &MachineSettings) -> Self {
        Self {
            settings: *settings,
        }
    }

    /// Generates the complete program for shapes in cut order.
    pub fn generate(&self, shapes: &[PlannedShape]) -> String {
        let total_length: f64 = shapes.iter().map(PlannedShape::total_length).sum();

        let mut gcode = self.generate_header(total_length);
        for shape in shapes {
            gcode.push_str(&self.generate_shape(shape));
        }
        gcode.push_str(&self.generate_footer());
        gcode
    }

    /// Generates the G-code header.
    pub fn generate_header(&self, total_length: f64) -> String {
        let s = &self.settings;
        let mut gcode = String::new();
        gcode.push_str("; Generated by cutplan\n");
        gcode.push_str(&format!("; Tool diameter: {}mm\n", coord(s.tool_diameter)));
        gcode.push_str(&format!("; Cut depth: {}mm\n", coord(s.cut_depth)));
        gcode.push_str(&format!("; Feed rate: {} mm/min\n", feed_rate(s.feed_rate)));
        gcode.push_str(&format!("; Safe height: {}mm\n", coord(s.safe_height)));
        gcode.push_str(&format!("; Total path length: {}mm\n", coord(total_length)));
        gcode.push('\n');

        // Setup
        gcode.push_str("G90         ; Absolute positioning\n");
        gcode.push_str("G21         ; Millimeter units\n");
        gcode.push_str("G17         ; XY plane\n");
        gcode.push_str(&format!(
            "G00 Z{}  ; Raise to safe height\n",
            coord(s.safe_height)
        ));
        gcode.push('\n');
        gcode
    }

    /// Generates the marker comment and every path of one shape.
    pub fn generate_shape(&self, shape: &PlannedShape) -> String {
        let id = comment_text(shape.id.as_str());
        let mut gcode = match shape.skip_reason() {
            Some(reason) => {
                return format!("; Shape {} ({}) skipped: {}\n\n", id, shape.kind, reason);
            }
            None => format!("; Shape {} ({})\n", id, shape.kind),
        };

        for path in shape.paths() {
            gcode.push_str(&self.generate_path(path));
        }
        gcode.push('\n');
        gcode
    }

    /// Rapid to start, plunge, cut the body, retract.
    pub fn generate_path(&self, path: &PlannedPath) -> String {
        let s = &self.settings;
        let feed = feed_rate(s.feed_rate);
        let mut gcode = String::new();

        gcode.push_str(&format!(
            "G00 X{} Y{}\n",
            coord(path.start.x),
            coord(path.start.y)
        ));
        gcode.push_str(&format!("G01 Z{} F{}\n", coord(-s.cut_depth), feed));

        let mut current = path.start;
        for segment in &path.segments {
            match segment {
                PathSegment::Line { to } => {
                    gcode.push_str(&format!(
                        "G01 X{} Y{} F{}\n",
                        coord(to.x),
                        coord(to.y),
                        feed
                    ));
                }
                PathSegment::Arc {
                    to,
                    center,
                    direction,
                } => {
                    let code = match direction {
                        ArcDirection::Clockwise => "G02",
                        ArcDirection::CounterClockwise => "G03",
                    };
                    gcode.push_str(&format!(
                        "{} X{} Y{} I{} J{} F{}\n",
                        code,
                        coord(to.x),
                        coord(to.y),
                        coord(center.x - current.x),
                        coord(center.y - current.y),
                        feed
                    ));
                }
            }
            current = segment.end();
        }

        gcode.push_str(&format!("G00 Z{}\n", coord(s.safe_height)));
        gcode
    }

    /// Generates the G-code footer.
    pub fn generate_footer(&self) -> String {
        let mut gcode = String::new();
        gcode.push_str("M5          ; Spindle stop\n");
        gcode.push_str("M30         ; Program end\n");
        gcode
    }
}

/// Emits the program for already planned shapes.
pub fn emit(shapes: &[PlannedShape], settings: &MachineSettings) -> String {
    tracing::debug!("Emitting program for {} shapes", shapes.len());
    ToolpathToGcode::new(settings).generate(shapes)
}

/// Plans and emits the program for a scene.
pub fn compile_program(scene: &Scene, settings: &MachineSettings) -> String {
    emit(&plan_scene(scene, settings.tool_radius()), settings)
}
