//! Deterministic star map generation.
//!
//! [`generate`] turns a [`GenerationRequest`] into a [`Scene`]: a background,
//! a faint disk outline, a star field, one hair-texture pattern, a Morse ring
//! spelling the message, and a caption. The same request always yields the
//! same scene.

pub mod assemble;
pub mod geometry;
pub mod io;
pub mod morse;
pub mod params;
pub mod patterns;
pub mod ring;
pub mod rng;
pub mod scene;
pub mod stars;

use tracing::debug;

use assemble::{assemble, Assembly};
use geometry::{Disk, CANVAS_SIZE};
pub use io::request::GenerationRequest;
use params::DerivedParameters;
use rng::Stream;
pub use scene::Scene;

/// Generate the scene for one request.
///
/// Two streams are seeded per call: the identity stream
/// (`name|hairType|message`) drives stars and pattern, and the message stream
/// drives the ring, so renaming leaves the ring untouched.
pub fn generate(request: &GenerationRequest) -> Scene {
    let request = request.normalized();
    let params = DerivedParameters::derive(
        &request.hair_type,
        request.density,
        request.porosity,
        &request.length,
        request.elasticity,
    );
    let words = morse::encode(&request.message);

    let mut main = Stream::identity(&request.name, &request.hair_type, &request.message);
    let mut ring_rng = Stream::ring(&request.message);

    let assembly = Assembly {
        request: &request,
        params: &params,
        words: &words,
        disk: Disk::for_canvas(CANVAS_SIZE, params.radius_scale),
        size: CANVAS_SIZE,
    };
    let scene = assemble(&assembly, &mut main, &mut ring_rng);

    debug!(
        family = %params.family,
        stars = params.star_count,
        words = words.len(),
        items = scene.items.len(),
        seed = main.seed(),
        "generated star map"
    );
    scene
}
