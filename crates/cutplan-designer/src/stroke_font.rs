//! Minimal single-stroke vector font for text engraving.
//!
//! Each glyph is a list of polylines on a 4 x 6 grid: x runs 0..=4 left to
//! right, y runs 0..=6 from the baseline up to the cap height. Glyphs are
//! scaled so the cap height equals the font size and are advanced by
//! [`ADVANCE`] grid units per character. Lowercase letters use the uppercase
//! strokes. Space is a known blank; any other character without a table entry
//! is unsupported and only advances the cursor.

use crate::model::Point;

/// Grid units from baseline to cap height.
pub const CAP_HEIGHT: f64 = 6.0;
/// Grid units occupied by the widest glyph.
pub const GLYPH_WIDTH: f64 = 4.0;
/// Grid units the cursor moves per character (glyph width plus spacing).
pub const ADVANCE: f64 = 6.0;

type Stroke = &'static [(i8, i8)];

const A: &[Stroke] = &[&[(0, 0), (0, 4), (2, 6), (4, 4), (4, 0)], &[(0, 3), (4, 3)]];
const B: &[Stroke] = &[
    &[(0, 0), (0, 6), (3, 6), (4, 5), (4, 4), (3, 3), (0, 3)],
    &[(3, 3), (4, 2), (4, 1), (3, 0), (0, 0)],
];
const C: &[Stroke] = &[&[(4, 6), (0, 6), (0, 0), (4, 0)]];
const D: &[Stroke] = &[&[(0, 0), (0, 6), (2, 6), (4, 4), (4, 2), (2, 0), (0, 0)]];
const E: &[Stroke] = &[&[(4, 6), (0, 6), (0, 0), (4, 0)], &[(0, 3), (3, 3)]];
const F: &[Stroke] = &[&[(4, 6), (0, 6), (0, 0)], &[(0, 3), (3, 3)]];
const G: &[Stroke] = &[&[(4, 6), (0, 6), (0, 0), (4, 0), (4, 3), (2, 3)]];
const H: &[Stroke] = &[&[(0, 0), (0, 6)], &[(4, 0), (4, 6)], &[(0, 3), (4, 3)]];
const I: &[Stroke] = &[&[(0, 6), (4, 6)], &[(2, 6), (2, 0)], &[(0, 0), (4, 0)]];
const J: &[Stroke] = &[&[(4, 6), (4, 0), (0, 0), (0, 2)]];
const K: &[Stroke] = &[&[(0, 0), (0, 6)], &[(4, 6), (0, 3), (4, 0)]];
const L: &[Stroke] = &[&[(0, 6), (0, 0), (4, 0)]];
const M: &[Stroke] = &[&[(0, 0), (0, 6), (2, 3), (4, 6), (4, 0)]];
const N: &[Stroke] = &[&[(0, 0), (0, 6), (4, 0), (4, 6)]];
const O: &[Stroke] = &[&[(0, 0), (0, 6), (4, 6), (4, 0), (0, 0)]];
const P: &[Stroke] = &[&[(0, 0), (0, 6), (4, 6), (4, 3), (0, 3)]];
const Q: &[Stroke] = &[&[(0, 0), (0, 6), (4, 6), (4, 0), (0, 0)], &[(2, 2), (4, 0)]];
const R: &[Stroke] = &[&[(0, 0), (0, 6), (4, 6), (4, 3), (0, 3), (4, 0)]];
const S: &[Stroke] = &[&[(4, 6), (0, 6), (0, 3), (4, 3), (4, 0), (0, 0)]];
const T: &[Stroke] = &[&[(0, 6), (4, 6)], &[(2, 6), (2, 0)]];
const U: &[Stroke] = &[&[(0, 6), (0, 0), (4, 0), (4, 6)]];
const V: &[Stroke] = &[&[(0, 6), (2, 0), (4, 6)]];
const W: &[Stroke] = &[&[(0, 6), (1, 0), (2, 3), (3, 0), (4, 6)]];
const X: &[Stroke] = &[&[(0, 0), (4, 6)], &[(0, 6), (4, 0)]];
const Y: &[Stroke] = &[&[(0, 6), (2, 3), (4, 6)], &[(2, 3), (2, 0)]];
const Z: &[Stroke] = &[&[(0, 6), (4, 6), (0, 0), (4, 0)]];

const DIGIT_0: &[Stroke] = &[&[(0, 0), (0, 6), (4, 6), (4, 0), (0, 0)], &[(0, 0), (4, 6)]];
const DIGIT_1: &[Stroke] = &[&[(1, 5), (2, 6), (2, 0)], &[(1, 0), (3, 0)]];
const DIGIT_2: &[Stroke] = &[&[(0, 6), (4, 6), (4, 3), (0, 3), (0, 0), (4, 0)]];
const DIGIT_3: &[Stroke] = &[&[(0, 6), (4, 6), (4, 0), (0, 0)], &[(0, 3), (4, 3)]];
const DIGIT_4: &[Stroke] = &[&[(0, 6), (0, 3), (4, 3)], &[(4, 6), (4, 0)]];
const DIGIT_5: &[Stroke] = &[&[(4, 6), (0, 6), (0, 3), (4, 3), (4, 0), (0, 0)]];
const DIGIT_6: &[Stroke] = &[&[(4, 6), (0, 6), (0, 0), (4, 0), (4, 3), (0, 3)]];
const DIGIT_7: &[Stroke] = &[&[(0, 6), (4, 6), (1, 0)]];
const DIGIT_8: &[Stroke] = &[&[(0, 0), (0, 6), (4, 6), (4, 0), (0, 0)], &[(0, 3), (4, 3)]];
const DIGIT_9: &[Stroke] = &[&[(4, 3), (0, 3), (0, 6), (4, 6), (4, 0), (0, 0)]];

const MINUS: &[Stroke] = &[&[(1, 3), (3, 3)]];
const PLUS: &[Stroke] = &[&[(1, 3), (3, 3)], &[(2, 2), (2, 4)]];
const SLASH: &[Stroke] = &[&[(0, 0), (4, 6)]];
const PERIOD: &[Stroke] = &[&[(2, 0), (2, 1)]];
const BLANK: &[Stroke] = &[];

/// Stroke table entry for `c`, or `None` when the character is unsupported.
pub fn glyph_strokes(c: char) -> Option<&'static [Stroke]> {
    let glyph = match c.to_ascii_uppercase() {
        'A' => A,
        'B' => B,
        'C' => C,
        'D' => D,
        'E' => E,
        'F' => F,
        'G' => G,
        'H' => H,
        'I' => I,
        'J' => J,
        'K' => K,
        'L' => L,
        'M' => M,
        'N' => N,
        'O' => O,
        'P' => P,
        'Q' => Q,
        'R' => R,
        'S' => S,
        'T' => T,
        'U' => U,
        'V' => V,
        'W' => W,
        'X' => X,
        'Y' => Y,
        'Z' => Z,
        '0' => DIGIT_0,
        '1' => DIGIT_1,
        '2' => DIGIT_2,
        '3' => DIGIT_3,
        '4' => DIGIT_4,
        '5' => DIGIT_5,
        '6' => DIGIT_6,
        '7' => DIGIT_7,
        '8' => DIGIT_8,
        '9' => DIGIT_9,
        '-' => MINUS,
        '+' => PLUS,
        '/' => SLASH,
        '.' => PERIOD,
        ' ' => BLANK,
        _ => return None,
    };
    Some(glyph)
}

/// Width of the laid-out text in mm, from the first glyph's left edge to the
/// last glyph's right edge.
pub fn text_width(text: &str, font_size: f64) -> f64 {
    let count = text.chars().count();
    if count == 0 {
        return 0.0;
    }
    let unit = font_size.max(0.0) / CAP_HEIGHT;
    ((count - 1) as f64 * ADVANCE + GLYPH_WIDTH) * unit
}

/// Lays out `text` as polylines in surface coordinates.
///
/// The baseline starts at `origin`; glyphs grow towards smaller y. Strokes are
/// returned left to right by character position, and in table order within a
/// glyph.
pub fn layout(text: &str, origin: Point, font_size: f64) -> Vec<Vec<Point>> {
    let unit = font_size / CAP_HEIGHT;
    let mut strokes = Vec::new();

    for (index, c) in text.chars().enumerate() {
        let cursor_x = origin.x + index as f64 * ADVANCE * unit;
        let Some(glyph) = glyph_strokes(c) else {
            tracing::trace!("No stroke glyph for {:?}, leaving a blank advance", c);
            continue;
        };

        for stroke in glyph {
            strokes.push(
                stroke
                    .iter()
                    .map(|&(gx, gy)| {
                        Point::new(
                            cursor_x + f64::from(gx) * unit,
                            origin.y - f64::from(gy) * unit,
                        )
                    })
                    .collect(),
            );
        }
    }

    strokes
}
