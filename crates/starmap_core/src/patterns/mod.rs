//! Pattern layer generators, one module per family.
//!
//! Each generator draws open polylines inside the scene disk from the main
//! stream. Draw order within a generator is fixed, so the same stream state
//! always yields the same paths.

pub mod coil;
pub mod curl;
pub mod locs;
pub mod wave;

use crate::geometry::Disk;
use crate::params::{DerivedParameters, Family};
use crate::rng::Stream;
use crate::scene::{PathGeometry, Stroke};

/// Dispatch to the generator for `params.family`.
pub fn generate(disk: &Disk, params: &DerivedParameters, rng: &mut Stream) -> Vec<PathGeometry> {
    match params.family {
        Family::Coil => coil::paths(disk, params, rng),
        Family::Curl => curl::paths(disk, params, rng),
        Family::Wave => wave::paths(disk, params, rng),
        Family::Locs => locs::paths(disk, params, rng),
    }
}

/// Family stroke: fixed width and base dash, dash scaled by `max(floor, variance)`.
pub(crate) fn dashed_stroke(width: f64, on: f64, off: f64, floor: f64, variance: f64) -> Stroke {
    let scale = floor.max(variance);
    Stroke::dashed(width, on * scale, off * scale)
}
