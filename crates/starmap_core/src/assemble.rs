//! Scene assembly in fixed paint order.

use crate::geometry::{Disk, Point};
use crate::io::request::GenerationRequest;
use crate::morse::MorseSymbolSequence;
use crate::params::DerivedParameters;
use crate::rng::Stream;
use crate::scene::{Layer, Primitive, Scene, Stroke, BLACK, DIM, WHITE};
use crate::{patterns, ring, stars};
use tracing::debug;

pub const DISCLAIMER: &str = "Message encoded in ring (Morse).";

const OUTLINE_WIDTH: f64 = 1.0;
const OUTLINE_OPACITY: f64 = 0.35;

/// Caption rows as `(offset from bottom edge, font size, fill)`.
const NAME_ROW: (f64, f64, &str) = (76.0, 28.0, WHITE);
const SUMMARY_ROW: (f64, f64, &str) = (48.0, 18.0, WHITE);
const DISCLAIMER_ROW: (f64, f64, &str) = (22.0, 14.0, DIM);

/// Inputs shared by every layer of one generation.
pub struct Assembly<'a> {
    pub request: &'a GenerationRequest,
    pub params: &'a DerivedParameters,
    pub words: &'a MorseSymbolSequence,
    pub disk: Disk,
    pub size: f64,
}

/// Compose the scene.
///
/// `main` feeds the stars and then the pattern; `ring_rng` feeds the Morse
/// ring only. The request is expected to be normalized already.
pub fn assemble(assembly: &Assembly<'_>, main: &mut Stream, ring_rng: &mut Stream) -> Scene {
    let Assembly {
        request,
        params,
        words,
        disk,
        size,
    } = *assembly;
    let mut scene = Scene::new(size, size, disk);

    scene.push(
        Layer::Background,
        Primitive::Rect {
            origin: Point::new(0.0, 0.0),
            width: size,
            height: size,
            fill: BLACK,
        },
    );
    scene.push(
        Layer::Outline,
        Primitive::Circle {
            center: disk.center,
            radius: disk.radius,
            fill: None,
            stroke: Some(Stroke::solid(OUTLINE_WIDTH)),
            opacity: OUTLINE_OPACITY,
        },
    );

    scene.extend(
        Layer::Stars,
        stars::scatter(&disk, params.star_count, params.variance_factor, main),
    );
    scene.extend(
        Layer::Pattern,
        patterns::generate(&disk, params, main)
            .into_iter()
            .map(Primitive::Polyline),
    );

    let (marks, cursor) = ring::layout(&disk, words, ring_rng);
    debug!(marks = marks.len(), turns = cursor.turns(), "laid out morse ring");
    scene.extend(Layer::Ring, marks);

    scene.extend(Layer::Caption, caption(request, size));
    scene
}

fn caption(request: &GenerationRequest, size: f64) -> Vec<Primitive> {
    let center_x = size / 2.0;
    let row = |(offset, font, fill): (f64, f64, &'static str), text: String| Primitive::Text {
        anchor: Point::new(center_x, size - offset),
        text,
        size: font,
        fill,
    };
    vec![
        row(NAME_ROW, request.name.clone()),
        row(SUMMARY_ROW, summary_line(request)),
        row(DISCLAIMER_ROW, DISCLAIMER.to_string()),
    ]
}

pub fn summary_line(request: &GenerationRequest) -> String {
    format!(
        "{} • Density {} • Porosity {} • {} • Elasticity {}",
        request.hair_type,
        request.density,
        request.porosity,
        title_case(&request.length),
        request.elasticity
    )
}

/// Upper-case the first letter of each alphabetic run, lower-case the rest.
pub fn title_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut in_word = false;
    for ch in text.chars() {
        if ch.is_alphabetic() {
            if in_word {
                out.extend(ch.to_lowercase());
            } else {
                out.extend(ch.to_uppercase());
            }
            in_word = true;
        } else {
            out.push(ch);
            in_word = false;
        }
    }
    out
}
