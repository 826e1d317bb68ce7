//! Single horizontal sinusoid across the disk.

use std::f64::consts::TAU;

use super::dashed_stroke;
use crate::geometry::{lerp, sample_positions, Disk, Point};
use crate::params::DerivedParameters;
use crate::rng::Stream;
use crate::scene::PathGeometry;

pub const STEPS: usize = 480;
const STROKE_WIDTH: f64 = 1.2;
const DASH: (f64, f64) = (3.0, 2.4);
const DASH_FLOOR: f64 = 0.5;
const DASH_VARIANCE_GAIN: f64 = 0.9;
const HALF_SPAN: f64 = 0.9;
const JITTER: f64 = 6.0;

pub fn paths(disk: &Disk, params: &DerivedParameters, rng: &mut Stream) -> Vec<PathGeometry> {
    let stroke = dashed_stroke(
        STROKE_WIDTH,
        DASH.0,
        DASH.1,
        DASH_FLOOR,
        params.variance_factor * DASH_VARIANCE_GAIN,
    );
    let Point { x: cx, y: cy } = disk.center;
    let x0 = cx - disk.radius * HALF_SPAN;
    let x1 = cx + disk.radius * HALF_SPAN;
    let phase = rng.next_angle();

    let points = sample_positions(STEPS)
        .map(|t| {
            let y = cy
                + (t * TAU * params.frequency + phase).sin() * params.amplitude
                + rng.next_centered() * JITTER;
            Point::new(lerp(x0, x1, t), y)
        })
        .collect();

    vec![PathGeometry {
        points,
        stroke,
        clipped: true,
    }]
}
