//! Logarithmic spiral arms.

use std::f64::consts::{PI, TAU};

use super::dashed_stroke;
use crate::geometry::Disk;
use crate::params::DerivedParameters;
use crate::rng::Stream;
use crate::scene::PathGeometry;

pub const ARMS: usize = 3;
const STROKE_WIDTH: f64 = 1.3;
const DASH: (f64, f64) = (3.2, 2.2);
const DASH_FLOOR: f64 = 0.6;
const DASH_VARIANCE_GAIN: f64 = 1.1;
const PHASE_JITTER: f64 = 0.4;
/// Base spiral radius as a fraction of the disk radius.
const BASE_RADIUS: f64 = 0.01;
const MAX_RADIUS: f64 = 0.9;
const THETA_STEP: f64 = 0.03;
const THETA_STEP_JITTER: f64 = 0.01;
const MIN_POINTS: usize = 3;

pub fn paths(disk: &Disk, params: &DerivedParameters, rng: &mut Stream) -> Vec<PathGeometry> {
    let stroke = dashed_stroke(
        STROKE_WIDTH,
        DASH.0,
        DASH.1,
        DASH_FLOOR,
        params.variance_factor * DASH_VARIANCE_GAIN,
    );
    let max_theta = 5.0 * PI * params.radius_scale;
    let mut paths = Vec::with_capacity(ARMS);

    for arm in 0..ARMS {
        let phase = TAU / ARMS as f64 * arm as f64 + rng.next_f64() * PHASE_JITTER;
        let base = disk.radius * BASE_RADIUS * (0.8 + rng.next_f64() * 0.4);

        let mut points = Vec::new();
        let mut theta = 0.0;
        while theta < max_theta {
            let radius = (base * (params.tightness * theta).exp()).min(disk.radius * MAX_RADIUS);
            points.push(disk.polar(radius, theta + phase));
            theta += THETA_STEP + THETA_STEP_JITTER * rng.next_f64();
        }

        if points.len() >= MIN_POINTS {
            paths.push(PathGeometry {
                points,
                stroke,
                clipped: true,
            });
        }
    }

    paths
}
