use cutplan_core::GeometryError;
use cutplan_designer::model::{DesignCircle, DesignRectangle, DrawingObject, Point, Shape};
use cutplan_designer::scene::Scene;
use cutplan_designer::toolpath::{plan, plan_scene, PathSegment, ToolpathGenerator};

fn bbox(points: &[Point]) -> (f64, f64, f64, f64) {
    points.iter().fold(
        (f64::MAX, f64::MAX, f64::MIN, f64::MIN),
        |(x0, y0, x1, y1), p| (x0.min(p.x), y0.min(p.y), x1.max(p.x), y1.max(p.y)),
    )
}

#[test]
fn test_rectangle_contour_is_outside_offset() {
    let tool_diameter = 6.0;
    let gen = ToolpathGenerator::new(tool_diameter / 2.0);
    let path = gen
        .generate_rectangle_contour(&DesignRectangle::new(0.0, 0.0, 40.0, 25.0))
        .unwrap();

    let mut points = vec![path.start];
    points.extend(path.segments.iter().map(PathSegment::end));
    let (x0, y0, x1, y1) = bbox(&points);

    assert!((x1 - x0 - (40.0 + tool_diameter)).abs() < 1e-9);
    assert!((y1 - y0 - (25.0 + tool_diameter)).abs() < 1e-9);
}

#[test]
fn test_rectangle_contour_returns_to_start() {
    let gen = ToolpathGenerator::new(1.0);
    let path = gen
        .generate_rectangle_contour(&DesignRectangle::new(5.0, 5.0, 10.0, 10.0))
        .unwrap();

    assert_eq!(path.segments.len(), 4);
    assert_eq!(path.segments.last().map(PathSegment::end), Some(path.start));
    assert!((path.length() - 4.0 * 12.0).abs() < 1e-9);
}

#[test]
fn test_rectangle_negative_height_is_rejected() {
    let object = DrawingObject::with_id(
        "r",
        Shape::Rectangle(DesignRectangle::new(0.0, 0.0, 10.0, -1.0)),
    );
    let planned = plan(&object, 1.0);
    assert!(planned.paths().is_empty());
    assert_eq!(
        planned.skip_reason(),
        Some(&GeometryError::NonPositiveDimension {
            dimension: "height",
            value: -1.0
        })
    );
}

#[test]
fn test_circle_starts_at_angle_zero() {
    let object = DrawingObject::with_id(
        "c",
        Shape::Circle(DesignCircle::new(Point::new(100.0, 100.0), 25.0)),
    );
    let planned = plan(&object, 1.5875);
    let path = &planned.paths()[0];

    assert!((path.start.x - 126.5875).abs() < 1e-9);
    assert_eq!(path.start.y, 100.0);
    assert_eq!(path.segments.len(), 1);
    assert!((path.length() - 2.0 * std::f64::consts::PI * 26.5875).abs() < 1e-9);
}

#[test]
fn test_circle_zero_radius_is_rejected() {
    let gen = ToolpathGenerator::new(1.0);
    let err = gen
        .generate_circle_contour(&DesignCircle::new(Point::new(0.0, 0.0), 0.0))
        .unwrap_err();
    assert!(matches!(
        err,
        GeometryError::NonPositiveDimension {
            dimension: "radius",
            ..
        }
    ));
}

#[test]
fn test_plan_scene_keeps_order_and_skips_in_place() {
    let scene = Scene::from_objects(vec![
        DrawingObject::with_id("a", Shape::Rectangle(DesignRectangle::new(0.0, 0.0, -5.0, 5.0))),
        DrawingObject::with_id(
            "b",
            Shape::Circle(DesignCircle::new(Point::new(0.0, 0.0), 5.0)),
        ),
    ])
    .unwrap();

    let planned = plan_scene(&scene, 1.0);
    let ids: Vec<_> = planned.iter().map(|p| p.id.as_str()).collect();
    assert_eq!(ids, vec!["a", "b"]);
    assert!(planned[0].skip_reason().is_some());
    assert_eq!(planned[1].paths().len(), 1);
}
