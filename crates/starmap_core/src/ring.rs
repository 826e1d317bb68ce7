//! Morse ring layout.
//!
//! Walks an angular cursor clockwise from twelve o'clock, emitting a dot or a
//! short arc per symbol. The walk never wraps or stops: a long enough message
//! laps the ring and overlaps its own start.

use std::f64::consts::{FRAC_PI_2, PI, TAU};

use crate::geometry::Disk;
use crate::morse::{symbols, MorseSymbolSequence, Symbol};
use crate::rng::Stream;
use crate::scene::{Primitive, Stroke};

/// Base angular increment in radians.
pub const UNIT: f64 = 0.012 * PI;
pub const START_ANGLE: f64 = -FRAC_PI_2;
/// Ring radius as a fraction of the disk radius.
pub const RING_FRACTION: f64 = 0.92;

pub const DOT_ADVANCE: f64 = 2.0;
pub const DASH_SPAN: f64 = 2.2;
pub const DASH_ADVANCE: f64 = 3.2;
pub const SYMBOL_GAP: f64 = 0.4;
pub const LETTER_GAP: f64 = 2.2;
pub const WORD_GAP: f64 = 4.4;

const DOT_RADIUS: f64 = 3.2;
/// Dot radius varies within `±DOT_JITTER / 2` of `DOT_RADIUS`, relative.
const DOT_JITTER: f64 = 0.2;
const DASH_WIDTH: f64 = 2.0;

/// Angular cursor state for the ring walk.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Cursor {
    pub angle: f64,
}

impl Default for Cursor {
    fn default() -> Self {
        Self { angle: START_ANGLE }
    }
}

impl Cursor {
    fn advance(&mut self, units: f64) {
        self.angle += UNIT * units;
    }

    /// Full turns swept since the start; above 1.0 the ring overlaps itself.
    pub fn turns(&self) -> f64 {
        (self.angle - START_ANGLE) / TAU
    }
}

/// Lay out `words` around `disk` and return the primitives plus the final cursor.
pub fn layout(
    disk: &Disk,
    words: &MorseSymbolSequence,
    rng: &mut Stream,
) -> (Vec<Primitive>, Cursor) {
    let radius = disk.radius * RING_FRACTION;
    let half_span = UNIT * DASH_SPAN / 2.0;
    let mut cursor = Cursor::default();
    let mut marks = Vec::new();

    for letters in words {
        for code in letters {
            for symbol in symbols(code) {
                match symbol {
                    Symbol::Dot => {
                        let size =
                            DOT_RADIUS * (1.0 - DOT_JITTER / 2.0 + DOT_JITTER * rng.next_f64());
                        marks.push(Primitive::Point {
                            center: disk.polar(radius, cursor.angle),
                            radius: size,
                            glow: false,
                        });
                        cursor.advance(DOT_ADVANCE);
                    }
                    Symbol::Dash => {
                        marks.push(Primitive::Arc {
                            center: disk.center,
                            radius,
                            start: cursor.angle - half_span,
                            end: cursor.angle + half_span,
                            stroke: Stroke::solid(DASH_WIDTH),
                        });
                        cursor.advance(DASH_ADVANCE);
                    }
                }
                cursor.advance(SYMBOL_GAP);
            }
            cursor.advance(LETTER_GAP);
        }
        cursor.advance(WORD_GAP);
    }

    (marks, cursor)
}
