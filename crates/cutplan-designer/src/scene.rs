//! Ordered collection of drawing objects.
//!
//! Insertion order is cut order. Identifiers are unique within a scene.

use cutplan_core::SceneError;

use crate::model::{DrawingObject, Shape, ShapeId};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Scene {
    objects: Vec<DrawingObject>,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a scene from objects in the given order, rejecting invalid and
    /// duplicate ids.
    pub fn from_objects(objects: Vec<DrawingObject>) -> Result<Self, SceneError> {
        let mut scene = Self::new();
        for object in objects {
            scene.insert(object)?;
        }
        Ok(scene)
    }

    /// Appends a shape under a fresh identifier.
    pub fn push(&mut self, shape: Shape) -> ShapeId {
        let object = DrawingObject::new(shape);
        let id = object.id.clone();
        self.objects.push(object);
        id
    }

    /// Appends an object that already carries an identifier.
    pub fn insert(&mut self, object: DrawingObject) -> Result<(), SceneError> {
        if !object.id.is_valid() {
            return Err(SceneError::InvalidId {
                id: object.id.to_string(),
            });
        }
        if self.get(&object.id).is_some() {
            return Err(SceneError::DuplicateId {
                id: object.id.to_string(),
            });
        }
        self.objects.push(object);
        Ok(())
    }

    /// Replaces the object with the same id, keeping its position in the order.
    pub fn update(&mut self, object: DrawingObject) -> Result<(), SceneError> {
        let slot = self
            .objects
            .iter_mut()
            .find(|o| o.id == object.id)
            .ok_or_else(|| SceneError::UnknownShape {
                id: object.id.to_string(),
            })?;
        *slot = object;
        Ok(())
    }

    pub fn remove(&mut self, id: &ShapeId) -> Result<DrawingObject, SceneError> {
        let index = self
            .objects
            .iter()
            .position(|o| &o.id == id)
            .ok_or_else(|| SceneError::UnknownShape { id: id.to_string() })?;
        Ok(self.objects.remove(index))
    }

    pub fn get(&self, id: &ShapeId) -> Option<&DrawingObject> {
        self.objects.iter().find(|o| &o.id == id)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, DrawingObject> {
        self.objects.iter()
    }

    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    pub fn clear(&mut self) {
        self.objects.clear();
    }

    pub fn objects(&self) -> &[DrawingObject] {
        &self.objects
    }
}

impl<'a> IntoIterator for &'a Scene {
    type Item = &'a DrawingObject;
    type IntoIter = std::slice::Iter<'a, DrawingObject>;

    fn into_iter(self) -> Self::IntoIter {
        self.objects.iter()
    }
}
