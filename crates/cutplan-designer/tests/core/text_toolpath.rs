use cutplan_designer::model::{DesignText, Point};
use cutplan_designer::stroke_font;
use cutplan_designer::toolpath::ToolpathGenerator;

#[test]
fn test_glyphs_are_ordered_left_to_right() {
    let gen = ToolpathGenerator::new(0.0);
    let paths = gen
        .generate_text_strokes(&DesignText::new("VL".into(), 10.0, 50.0, 12.0))
        .unwrap();

    // V has one stroke, L has one stroke
    assert_eq!(paths.len(), 2);
    assert!(paths[0].start.x < paths[1].start.x);
    assert_eq!(paths[1].start, Point::new(22.0, 38.0));
}

#[test]
fn test_lowercase_matches_uppercase() {
    let gen = ToolpathGenerator::new(0.0);
    let lower = gen
        .generate_text_strokes(&DesignText::new("cnc".into(), 0.0, 0.0, 10.0))
        .unwrap();
    let upper = gen
        .generate_text_strokes(&DesignText::new("CNC".into(), 0.0, 0.0, 10.0))
        .unwrap();
    assert_eq!(lower, upper);
}

#[test]
fn test_unsupported_characters_leave_a_gap() {
    let gen = ToolpathGenerator::new(0.0);
    let with_gap = gen
        .generate_text_strokes(&DesignText::new("T#T".into(), 0.0, 0.0, 6.0))
        .unwrap();
    let plain = gen
        .generate_text_strokes(&DesignText::new("T T".into(), 0.0, 0.0, 6.0))
        .unwrap();

    assert_eq!(with_gap, plain);
    assert_eq!(with_gap.len(), 4);
}

#[test]
fn test_strokes_rise_above_baseline() {
    let gen = ToolpathGenerator::new(0.0);
    let paths = gen
        .generate_text_strokes(&DesignText::new("H".into(), 0.0, 100.0, 24.0))
        .unwrap();

    for path in &paths {
        assert!(path.start.y <= 100.0);
        assert!(path.start.y >= 76.0);
    }
}

#[test]
fn test_non_positive_font_size_is_rejected() {
    let gen = ToolpathGenerator::new(0.0);
    assert!(gen
        .generate_text_strokes(&DesignText::new("A".into(), 0.0, 0.0, 0.0))
        .is_err());
}

#[test]
fn test_text_width_matches_advance() {
    let width = stroke_font::text_width("CNC", 24.0);
    // Two full advances plus one glyph width, 4mm per grid unit
    assert!((width - (2.0 * 6.0 + 4.0) * 4.0).abs() < 1e-9);
}
