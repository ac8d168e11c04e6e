//! Program export for designer state.

use anyhow::Context;

use super::DesignerState;

impl DesignerState {
    /// Writes the current program text verbatim.
    pub fn export_program(&self, path: impl AsRef<std::path::Path>) -> anyhow::Result<()> {
        let path = path.as_ref();
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating directory {}", parent.display()))?;
        }
        std::fs::write(path, &self.program)
            .with_context(|| format!("writing program to {}", path.display()))?;
        tracing::info!("Exported program to {}", path.display());
        Ok(())
    }
}
