//! # cutplan
//!
//! Compiles a layout of simple 2D shapes into a G-code toolpath program.
//!
//! ## Architecture
//!
//! cutplan is organized as a workspace with multiple crates:
//!
//! 1. **cutplan-core** - Error types and session events
//! 2. **cutplan-settings** - Machine parameters and configuration files
//! 3. **cutplan-designer** - Shapes, toolpath planning, G-code emission and
//!    the derived/manual program state
//! 4. **cutplan** - Command-line binary that integrates all crates

pub use cutplan_designer as designer;

pub use cutplan_core::{
    CollaboratorError, Error, GeometryError, Result, SceneError, SessionEvent,
};
pub use cutplan_designer::{
    compile_program, scene_from_json, scene_to_json, DesignerState, DrawingObject,
    RegenerationMode, Scene, Shape, ShapeId, ShapeType, ToolpathToGcode,
};
pub use cutplan_settings::{Config, MachineSettings};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Initialize logging with the default configuration
///
/// Sets up structured logging with:
/// - Output on stderr, so program text on stdout stays clean
/// - RUST_LOG environment variable support (defaults to `info`)
pub fn init_logging() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true)
        .with_line_number(true);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()?;

    Ok(())
}
