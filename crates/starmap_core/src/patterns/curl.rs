//! Oscillating arcs around a mid-radius ring.

use std::f64::consts::{FRAC_PI_2, TAU};

use super::dashed_stroke;
use crate::geometry::{sample_positions, Disk};
use crate::params::DerivedParameters;
use crate::rng::Stream;
use crate::scene::PathGeometry;

pub const LOOPS: usize = 6;
pub const STEPS: usize = 160;
const STROKE_WIDTH: f64 = 1.1;
const DASH: (f64, f64) = (2.6, 2.0);
const DASH_FLOOR: f64 = 0.5;
const BASE_RADIUS: f64 = 0.55;
const AMPLITUDE_GAIN: f64 = 0.4;
const JITTER: f64 = 8.0;

pub fn paths(disk: &Disk, params: &DerivedParameters, rng: &mut Stream) -> Vec<PathGeometry> {
    let stroke = dashed_stroke(
        STROKE_WIDTH,
        DASH.0,
        DASH.1,
        DASH_FLOOR,
        params.variance_factor,
    );
    let base_radius = disk.radius * BASE_RADIUS;

    (0..LOOPS)
        .map(|_| {
            let start = rng.next_f64() * TAU;
            let span = FRAC_PI_2 + rng.next_f64() * FRAC_PI_2;
            let points = sample_positions(STEPS)
                .map(|t| {
                    let angle = start + t * span;
                    let radius = base_radius
                        + (angle * params.frequency).sin() * params.amplitude * AMPLITUDE_GAIN
                        + rng.next_centered() * JITTER;
                    disk.polar(radius, angle)
                })
                .collect();
            PathGeometry {
                points,
                stroke,
                clipped: true,
            }
        })
        .collect()
}
