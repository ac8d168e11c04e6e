//! Program regeneration for designer state.

use super::DesignerState;
use crate::gcode_gen::compile_program;

impl DesignerState {
    /// Replaces the program with the compiled scene.
    pub(super) fn regenerate(&mut self) {
        self.program = compile_program(&self.scene, &self.settings);
        tracing::debug!(
            "Regenerated program: {} shapes, {} bytes",
            self.scene.len(),
            self.program.len()
        );
    }

    /// The program the current scene compiles to, regardless of mode.
    pub fn derived_program(&self) -> String {
        compile_program(&self.scene, &self.settings)
    }
}
