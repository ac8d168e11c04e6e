//! External assistant interfaces
//!
//! The shape generator and the program explainer are remote services. They
//! are awaited outside the designer state; their results are fed back in as a
//! scene replacement or an annotation event.

use async_trait::async_trait;
use cutplan_core::{CollaboratorError, SessionEvent};

use crate::scene::Scene;

/// Characters of program text sent to the explainer.
pub const EXPLAIN_INPUT_LIMIT: usize = 5000;
/// Explanation used when the explainer cannot be reached.
pub const EXPLAIN_FALLBACK: &str = "Error connecting to AI service.";
/// Explanation used when the explainer answers with nothing.
pub const EMPTY_EXPLANATION: &str = "Could not generate explanation.";

/// Produces a new scene from a natural-language request
#[async_trait]
pub trait ShapeGenerator: Send + Sync {
    /// Returns the full replacement scene, including any kept shapes.
    async fn generate(&self, prompt: &str, current: &Scene) -> Result<Scene, CollaboratorError>;
}

/// Describes a program in plain language
#[async_trait]
pub trait ProgramExplainer: Send + Sync {
    async fn explain(&self, program: &str) -> Result<String, CollaboratorError>;
}

fn truncate_chars(text: &str, limit: usize) -> &str {
    match text.char_indices().nth(limit) {
        Some((index, _)) => &text[..index],
        None => text,
    }
}

/// Asks the generator for a new scene. On failure the error is logged and
/// returned; the caller keeps its current scene.
pub async fn request_generated_scene(
    generator: &dyn ShapeGenerator,
    prompt: &str,
    current: &Scene,
) -> cutplan_core::Result<Scene> {
    match generator.generate(prompt, current).await {
        Ok(scene) => {
            tracing::info!("Generated scene with {} shapes", scene.len());
            Ok(scene)
        }
        Err(e) => {
            tracing::error!("Shape generation failed: {}", e);
            Err(e.into())
        }
    }
}

/// Explains the program, degrading to a fixed message on any failure.
pub async fn explain_or_fallback(explainer: &dyn ProgramExplainer, program: &str) -> String {
    let input = truncate_chars(program, EXPLAIN_INPUT_LIMIT);
    match explainer.explain(input).await {
        Ok(text) if text.is_empty() => EMPTY_EXPLANATION.to_string(),
        Ok(text) => text,
        Err(e) => {
            tracing::error!("Explain request failed: {}", e);
            EXPLAIN_FALLBACK.to_string()
        }
    }
}

/// Builds the annotation event for a program, or `None` when there is no
/// program to explain.
pub async fn request_annotation(
    explainer: &dyn ProgramExplainer,
    program: &str,
) -> Option<SessionEvent> {
    if program.is_empty() {
        return None;
    }
    let explanation = explain_or_fallback(explainer, program).await;
    Some(SessionEvent::ExternalAnnotate(explanation))
}
