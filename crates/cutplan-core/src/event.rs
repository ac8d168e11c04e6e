//! Session events
//!
//! Every change to a design session arrives as one of these events. The
//! session reacts to them explicitly instead of recomputing reactively, so
//! the rules for when a program is regenerated can be tested without a UI.

use serde::{Deserialize, Serialize};

/// Events accepted by a design session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", content = "text", rename_all = "snake_case")]
pub enum SessionEvent {
    /// The scene (or the machine settings) changed
    SceneChanged,
    /// The user typed into the program text directly
    ManualEdit(String),
    /// The user asked to rebuild the program from the scene
    RegenerateRequested,
    /// An explanation should be prepended to the current program
    ExternalAnnotate(String),
}

impl std::fmt::Display for SessionEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SessionEvent::SceneChanged => write!(f, "Scene changed"),
            SessionEvent::ManualEdit(text) => write!(f, "Manual edit ({} bytes)", text.len()),
            SessionEvent::RegenerateRequested => write!(f, "Regenerate requested"),
            SessionEvent::ExternalAnnotate(text) => {
                write!(f, "Annotation ({} lines)", text.lines().count())
            }
        }
    }
}
