use std::sync::Mutex;

use async_trait::async_trait;
use cutplan_core::{CollaboratorError, Error, SessionEvent};
use cutplan_designer::assistant::{
    explain_or_fallback, request_annotation, request_generated_scene, ProgramExplainer,
    ShapeGenerator, EMPTY_EXPLANATION, EXPLAIN_FALLBACK, EXPLAIN_INPUT_LIMIT,
};
use cutplan_designer::designer_state::{DesignerState, RegenerationMode};
use cutplan_designer::model::{DrawingObject, Shape, ShapeType};
use cutplan_designer::scene::Scene;
use cutplan_settings::MachineSettings;

struct FixedGenerator(Result<Scene, CollaboratorError>);

#[async_trait]
impl ShapeGenerator for FixedGenerator {
    async fn generate(&self, _prompt: &str, _current: &Scene) -> Result<Scene, CollaboratorError> {
        self.0.clone()
    }
}

/// Records the program it was asked about.
struct RecordingExplainer {
    reply: Result<String, CollaboratorError>,
    seen: Mutex<Option<String>>,
}

impl RecordingExplainer {
    fn new(reply: Result<String, CollaboratorError>) -> Self {
        Self {
            reply,
            seen: Mutex::new(None),
        }
    }
}

#[async_trait]
impl ProgramExplainer for RecordingExplainer {
    async fn explain(&self, program: &str) -> Result<String, CollaboratorError> {
        *self.seen.lock().unwrap() = Some(program.to_string());
        self.reply.clone()
    }
}

#[tokio::test]
async fn test_generated_scene_replaces_current() {
    let generated = Scene::from_objects(vec![DrawingObject::with_id(
        "g1",
        Shape::default_for(ShapeType::Circle),
    )])
    .unwrap();
    let generator = FixedGenerator(Ok(generated));

    let mut state = DesignerState::new(MachineSettings::default());
    let scene = request_generated_scene(&generator, "a circle", state.scene())
        .await
        .unwrap();
    state.replace_scene(scene);

    assert!(state.program().contains("; Shape g1 (Circle)"));
}

#[tokio::test]
async fn test_generation_failure_leaves_scene_untouched() {
    let generator = FixedGenerator(Err(CollaboratorError::generation("quota exceeded")));

    let mut state = DesignerState::new(MachineSettings::default());
    state.add_default_shape(ShapeType::Rectangle);
    let before_scene = state.scene().clone();
    let before_program = state.program().to_string();

    let result = request_generated_scene(&generator, "anything", state.scene()).await;

    let err = result.unwrap_err();
    assert!(err.is_collaborator_error());
    assert!(matches!(
        err,
        Error::Collaborator(CollaboratorError::GenerationFailure { ref reason }) if reason == "quota exceeded"
    ));
    assert_eq!(state.scene(), &before_scene);
    assert_eq!(state.program(), before_program);
}

#[tokio::test]
async fn test_explain_falls_back_on_error() {
    let explainer = RecordingExplainer::new(Err(CollaboratorError::explain("offline")));
    assert_eq!(explain_or_fallback(&explainer, "G00 X0").await, EXPLAIN_FALLBACK);
    assert_eq!(EXPLAIN_FALLBACK, "Error connecting to AI service.");
}

#[tokio::test]
async fn test_explain_empty_reply() {
    let explainer = RecordingExplainer::new(Ok(String::new()));
    assert_eq!(explain_or_fallback(&explainer, "G00 X0").await, EMPTY_EXPLANATION);
}

#[tokio::test]
async fn test_explain_input_is_truncated() {
    let explainer = RecordingExplainer::new(Ok("ok".into()));
    let program = "X".repeat(EXPLAIN_INPUT_LIMIT + 250);

    explain_or_fallback(&explainer, &program).await;

    let seen = explainer.seen.lock().unwrap().clone().unwrap();
    assert_eq!(seen.chars().count(), EXPLAIN_INPUT_LIMIT);
}

#[tokio::test]
async fn test_annotation_flows_into_state() {
    let explainer = RecordingExplainer::new(Ok("Cuts a square.".into()));
    let mut state = DesignerState::new(MachineSettings::default());
    state.add_default_shape(ShapeType::Rectangle);
    let derived = state.program().to_string();

    let event = request_annotation(&explainer, state.program()).await.unwrap();
    assert!(matches!(event, SessionEvent::ExternalAnnotate(_)));
    state.dispatch(event);

    assert_eq!(state.mode(), RegenerationMode::Manual);
    assert_eq!(state.program(), format!("; Cuts a square.\n\n{}", derived));
}

#[tokio::test]
async fn test_no_annotation_for_empty_program() {
    let explainer = RecordingExplainer::new(Ok("unused".into()));
    assert!(request_annotation(&explainer, "").await.is_none());
    assert!(explainer.seen.lock().unwrap().is_none());
}
