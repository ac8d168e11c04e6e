//! Scene mutations for designer state.
//!
//! Each helper mutates the scene and then reacts as to a scene change.

use cutplan_core::{Result, SessionEvent};
use cutplan_settings::MachineSettings;

use super::DesignerState;
use crate::model::{DrawingObject, Shape, ShapeId, ShapeType};
use crate::scene::Scene;

impl DesignerState {
    /// Appends a shape and returns its new id.
    pub fn add_shape(&mut self, shape: Shape) -> ShapeId {
        let id = self.scene.push(shape);
        tracing::debug!("Added shape {}", id);
        self.dispatch(SessionEvent::SceneChanged);
        id
    }

    /// Appends the default shape of the given kind.
    pub fn add_default_shape(&mut self, shape_type: ShapeType) -> ShapeId {
        self.add_shape(Shape::default_for(shape_type))
    }

    pub fn update_shape(&mut self, object: DrawingObject) -> Result<()> {
        self.scene.update(object)?;
        self.dispatch(SessionEvent::SceneChanged);
        Ok(())
    }

    pub fn remove_shape(&mut self, id: &ShapeId) -> Result<DrawingObject> {
        let removed = self.scene.remove(id)?;
        tracing::debug!("Removed shape {}", id);
        self.dispatch(SessionEvent::SceneChanged);
        Ok(removed)
    }

    /// Swaps in a whole new scene, e.g. one returned by a shape generator.
    pub fn replace_scene(&mut self, scene: Scene) {
        self.scene = scene;
        self.dispatch(SessionEvent::SceneChanged);
    }

    /// Machine settings feed the compiler, so a change behaves like a scene
    /// change.
    pub fn set_settings(&mut self, settings: MachineSettings) {
        self.settings = settings;
        self.dispatch(SessionEvent::SceneChanged);
    }
}
