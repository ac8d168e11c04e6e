//! # cutplan Designer
//!
//! Shape layout and toolpath compilation. A scene of simple primitives is
//! planned into tool-center paths and emitted as a G-code program.
//!
//! ## Core Components
//!
//! - **Model**: rectangles, circles and single-stroke text
//! - **Scene**: ordered shapes; order is cut order
//! - **Toolpath**: outside-contour planning with tool-radius offset, centerline
//!   text strokes
//! - **G-code generation**: deterministic program text
//! - **Designer state**: derived/manual program modes driven by session events
//! - **Serialization**: the scene interchange JSON
//! - **Assistant**: shape generator and explainer interfaces
//!
//! ## Architecture
//!
//! ```text
//! SessionEvent ─> DesignerState ──(Derived)──> plan_scene ─> ToolpathToGcode ─> program
//!                     └──(Manual)──> program text kept as is
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use cutplan_designer::{DesignerState, ShapeType};
//! use cutplan_settings::MachineSettings;
//!
//! let mut state = DesignerState::new(MachineSettings::default());
//! state.add_default_shape(ShapeType::Rectangle);
//! println!("{}", state.program());
//! ```

pub mod assistant;
pub mod designer_state;
pub mod gcode_gen;
pub mod model;
pub mod scene;
pub mod serialization;
pub mod stroke_font;
pub mod toolpath;

pub use assistant::{
    explain_or_fallback, request_annotation, request_generated_scene, ProgramExplainer,
    ShapeGenerator,
};
pub use designer_state::{DesignerState, RegenerationMode};
pub use gcode_gen::{compile_program, emit, ToolpathToGcode};
pub use model::{
    DesignCircle, DesignRectangle, DesignText, DesignerShape, DrawingObject, Point, Shape,
    ShapeId, ShapeType,
};
pub use scene::Scene;
pub use serialization::{scene_from_json, scene_to_json, ShapeData};
pub use toolpath::{
    plan, plan_scene, ArcDirection, PathSegment, PlannedPath, PlannedShape, ToolpathGenerator,
};
