//! Parallel low-frequency strands.

use std::f64::consts::TAU;

use super::dashed_stroke;
use crate::geometry::{lerp, sample_positions, Disk, Point};
use crate::params::DerivedParameters;
use crate::rng::Stream;
use crate::scene::PathGeometry;

pub const STRANDS: usize = 5;
pub const STEPS: usize = 360;
const STROKE_WIDTH: f64 = 1.6;
const DASH: (f64, f64) = (3.4, 2.0);
const DASH_FLOOR: f64 = 0.4;
const DASH_VARIANCE_GAIN: f64 = 0.8;
/// Vertical spacing between strands as a fraction of the disk radius.
const SPACING: f64 = 0.10;
const HALF_SPAN: f64 = 0.85;
const AMPLITUDE_GAIN: f64 = 0.5;
const FREQUENCY_GAIN: f64 = 0.7;
const JITTER: f64 = 4.0;

/// Vertical offsets, symmetric around the disk center.
pub fn strand_offsets(radius: f64) -> impl Iterator<Item = f64> {
    let middle = (STRANDS - 1) as f64 / 2.0;
    (0..STRANDS).map(move |i| (i as f64 - middle) * radius * SPACING)
}

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
    let amplitude = params.amplitude * AMPLITUDE_GAIN;
    let frequency = params.frequency * FREQUENCY_GAIN;

    strand_offsets(disk.radius)
        .map(|offset| {
            let phase = rng.next_angle();
            let points = sample_positions(STEPS)
                .map(|t| {
                    let y = cy
                        + offset
                        + (t * TAU * frequency + phase).sin() * amplitude
                        + rng.next_centered() * JITTER;
                    Point::new(lerp(x0, x1, t), y)
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::patterns::test_support;

    #[test]
    fn offsets_are_symmetric() {
        let offsets: Vec<f64> = strand_offsets(100.0).collect();
        assert_eq!(offsets.len(), STRANDS);
        assert!((offsets[0] + 20.0).abs() < 1e-9);
        assert_eq!(offsets[2], 0.0);
        assert!((offsets[4] - 20.0).abs() < 1e-9);
    }

    #[test]
    fn draws_five_strands_around_their_offsets() {
        let params = test_support::params("locs", 4, 3);
        let disk = test_support::disk(&params);
        let mut rng = Stream::from_key("locs");
        let strands = paths(&disk, &params, &mut rng);
        assert_eq!(strands.len(), STRANDS);
        let bound = params.amplitude * AMPLITUDE_GAIN + JITTER / 2.0;
        for (strand, offset) in strands.iter().zip(strand_offsets(disk.radius)) {
            assert_eq!(strand.points.len(), STEPS);
            for point in &strand.points {
                assert!((point.y - disk.center.y - offset).abs() <= bound + 1e-9);
            }
        }
    }
}
