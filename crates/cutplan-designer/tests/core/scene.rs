use cutplan_core::SceneError;
use cutplan_designer::model::{DesignerShape, DrawingObject, Shape, ShapeId, ShapeType};
use cutplan_designer::scene::Scene;

fn object(id: &str, shape_type: ShapeType) -> DrawingObject {
    DrawingObject::with_id(id, Shape::default_for(shape_type))
}

#[test]
fn test_from_objects_preserves_order() {
    let scene = Scene::from_objects(vec![
        object("c", ShapeType::Circle),
        object("a", ShapeType::Rectangle),
        object("b", ShapeType::Text),
    ])
    .unwrap();

    let ids: Vec<_> = scene.iter().map(|o| o.id.to_string()).collect();
    assert_eq!(ids, vec!["c", "a", "b"]);
}

#[test]
fn test_from_objects_rejects_duplicates() {
    let result = Scene::from_objects(vec![
        object("a", ShapeType::Circle),
        object("a", ShapeType::Rectangle),
    ]);
    assert_eq!(
        result.unwrap_err(),
        SceneError::DuplicateId { id: "a".into() }
    );
}

#[test]
fn test_from_objects_rejects_invalid_ids() {
    for id in ["", "a\nG00 Z-50", "tab\tid"] {
        let result = Scene::from_objects(vec![object(id, ShapeType::Circle)]);
        assert_eq!(result.unwrap_err(), SceneError::InvalidId { id: id.into() });
    }
}

#[test]
fn test_update_unknown_shape() {
    let mut scene = Scene::new();
    let err = scene.update(object("ghost", ShapeType::Circle)).unwrap_err();
    assert_eq!(err, SceneError::UnknownShape { id: "ghost".into() });
}

#[test]
fn test_remove_and_clear() {
    let mut scene = Scene::new();
    let first = scene.push(Shape::default_for(ShapeType::Rectangle));
    scene.push(Shape::default_for(ShapeType::Circle));

    let removed = scene.remove(&first).unwrap();
    assert_eq!(removed.shape.shape_type(), ShapeType::Rectangle);
    assert_eq!(scene.len(), 1);
    assert!(scene.get(&first).is_none());

    scene.clear();
    assert!(scene.is_empty());
}

#[test]
fn test_translate_moves_bounds() {
    let mut shape = Shape::default_for(ShapeType::Rectangle);
    shape.translate(5.0, 5.0);
    assert_eq!(shape.bounds(), (55.0, 55.0, 105.0, 105.0));
    assert_ne!(ShapeId::new(), ShapeId::new());
}
