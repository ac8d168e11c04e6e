use cutplan_designer::model::{DesignerShape, Point, Shape, ShapeType};
use cutplan_designer::serialization::{scene_from_json, scene_to_json, ShapeData};

const GENERATED: &str = r#"[
  {"id": "r1", "type": "RECTANGLE", "x": 50, "y": 50, "width": 50, "height": 50},
  {"id": "c1", "type": "CIRCLE", "x": 100, "y": 100, "radius": 25},
  {"id": "t1", "type": "TEXT", "x": 50, "y": 150, "text": "CNC", "fontSize": 24}
]"#;

#[test]
fn test_decode_generated_scene() {
    let scene = scene_from_json(GENERATED).unwrap();

    let kinds: Vec<_> = scene.iter().map(|o| o.shape.shape_type()).collect();
    assert_eq!(
        kinds,
        vec![ShapeType::Rectangle, ShapeType::Circle, ShapeType::Text]
    );

    match &scene.objects()[1].shape {
        Shape::Circle(c) => {
            assert_eq!(c.center, Point::new(100.0, 100.0));
            assert_eq!(c.radius, 25.0);
        }
        other => panic!("expected circle, got {:?}", other),
    }
    match &scene.objects()[2].shape {
        Shape::Text(t) => {
            assert_eq!(t.text, "CNC");
            assert_eq!(t.font_size, 24.0);
        }
        other => panic!("expected text, got {:?}", other),
    }
}

#[test]
fn test_encode_then_decode_keeps_scene() {
    let scene = scene_from_json(GENERATED).unwrap();
    let json = scene_to_json(&scene).unwrap();
    assert_eq!(scene_from_json(&json).unwrap(), scene);
}

#[test]
fn test_duplicate_ids_are_rejected() {
    let json = r#"[
      {"id": "a", "type": "CIRCLE", "x": 0, "y": 0, "radius": 5},
      {"id": "a", "type": "CIRCLE", "x": 10, "y": 0, "radius": 5}
    ]"#;
    let err = scene_from_json(json).unwrap_err();
    assert!(err.to_string().contains("Duplicate shape id: a"));
}

#[test]
fn test_unknown_type_is_rejected() {
    let json = r#"[{"id": "p", "type": "POLYGON", "x": 0, "y": 0}]"#;
    let err = scene_from_json(json).unwrap_err();
    assert!(err.to_string().contains("POLYGON"));
}

#[test]
fn test_invalid_geometry_still_decodes() {
    // Geometry checks belong to the planner, not the decoder
    let json = r#"[{"id": "r", "type": "RECTANGLE", "x": 0, "y": 0, "width": -5, "height": 10}]"#;
    let scene = scene_from_json(json).unwrap();
    assert_eq!(scene.objects()[0].shape.bounds(), (-5.0, 0.0, 0.0, 10.0));
}

#[test]
fn test_text_without_content_decodes_empty() {
    let data: ShapeData =
        serde_json::from_str(r#"{"id": "t", "type": "TEXT", "x": 1, "y": 2, "fontSize": 10}"#)
            .unwrap();
    let object = data.to_drawing_object().unwrap();
    match object.shape {
        Shape::Text(t) => assert!(t.text.is_empty()),
        other => panic!("expected text, got {:?}", other),
    }
}

#[test]
fn test_malformed_json() {
    assert!(scene_from_json("{not json").is_err());
    assert!(scene_from_json("[]").unwrap().is_empty());
}

#[test]
fn test_newline_in_id_cannot_inject_program_lines() {
    let result = scene_from_json(
        r#"[{"id": "a\nG00 Z-50", "type": "CIRCLE", "x": 10, "y": 10, "radius": 5}]"#,
    );
    let err = result.unwrap_err();
    assert!(err.to_string().contains("control characters"));
}
