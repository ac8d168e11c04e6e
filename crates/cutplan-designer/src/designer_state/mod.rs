//! Designer state: the scene, the machine settings and the program text of
//! one editing session.
//!
//! The program is either derived from the scene or hand-edited. Every change
//! arrives as a [`SessionEvent`]; the state decides whether to regenerate.
//!
//! This module is split into submodules:
//! - `gcode`: program regeneration
//! - `shapes`: scene mutation helpers
//! - `file_io`: program export

mod file_io;
mod gcode;
mod shapes;

use cutplan_core::SessionEvent;
use cutplan_settings::MachineSettings;

use crate::scene::Scene;

/// Where the current program text comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RegenerationMode {
    /// The program always equals the compiled scene.
    #[default]
    Derived,
    /// The program is user-authored and survives scene changes.
    Manual,
}

impl std::fmt::Display for RegenerationMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RegenerationMode::Derived => write!(f, "Derived"),
            RegenerationMode::Manual => write!(f, "Manual"),
        }
    }
}

/// Designer state for one editing session
#[derive(Debug, Clone)]
pub struct DesignerState {
    scene: Scene,
    settings: MachineSettings,
    program: String,
    mode: RegenerationMode,
}

impl DesignerState {
    /// Creates an empty session in derived mode with the program already
    /// compiled.
    pub fn new(settings: MachineSettings) -> Self {
        Self::with_scene(Scene::new(), settings)
    }

    pub fn with_scene(scene: Scene, settings: MachineSettings) -> Self {
        let mut state = Self {
            scene,
            settings,
            program: String::new(),
            mode: RegenerationMode::Derived,
        };
        state.regenerate();
        state
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn settings(&self) -> &MachineSettings {
        &self.settings
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    pub fn mode(&self) -> RegenerationMode {
        self.mode
    }

    pub fn is_manual(&self) -> bool {
        self.mode == RegenerationMode::Manual
    }

    /// Routes an event to its handler.
    pub fn dispatch(&mut self, event: SessionEvent) {
        tracing::debug!("{} (mode: {})", event, self.mode);
        match event {
            SessionEvent::SceneChanged => self.on_scene_changed(),
            SessionEvent::ManualEdit(text) => self.on_manual_edit(text),
            SessionEvent::RegenerateRequested => self.on_regenerate_requested(),
            SessionEvent::ExternalAnnotate(explanation) => self.on_external_annotate(&explanation),
        }
    }

    /// Recomputes the program in derived mode; leaves manual text untouched.
    pub fn on_scene_changed(&mut self) {
        match self.mode {
            RegenerationMode::Derived => self.regenerate(),
            RegenerationMode::Manual => {
                tracing::debug!("Scene changed while in manual mode, keeping program text");
            }
        }
    }

    pub fn on_manual_edit(&mut self, text: String) {
        self.program = text;
        self.set_mode(RegenerationMode::Manual);
    }

    pub fn on_regenerate_requested(&mut self) {
        self.set_mode(RegenerationMode::Derived);
        self.regenerate();
    }

    /// Prepends the explanation as a comment block and switches to manual
    /// mode.
    pub fn on_external_annotate(&mut self, explanation: &str) {
        let comment_block = explanation
            .split('\n')
            .map(|line| format!("; {}", line))
            .collect::<Vec<_>>()
            .join("\n");
        self.program = format!("{}\n\n{}", comment_block, self.program);
        self.set_mode(RegenerationMode::Manual);
    }

    fn set_mode(&mut self, mode: RegenerationMode) {
        if self.mode != mode {
            tracing::info!("Program mode: {} -> {}", self.mode, mode);
            self.mode = mode;
        }
    }
}
