//! Mapping from form inputs to drawing parameters.
//!
//! Every function here is total: unknown text falls back to a default and
//! slider values are clamped into `[SLIDER_MIN, SLIDER_MAX]` before use.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::geometry::clamp;

pub const SLIDER_MIN: i64 = 1;
pub const SLIDER_MAX: i64 = 5;

/// Structural archetype of the pattern layer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Family {
    Coil,
    Curl,
    Wave,
    Locs,
}

impl Family {
    pub fn as_str(&self) -> &'static str {
        match self {
            Family::Coil => "coil",
            Family::Curl => "curl",
            Family::Wave => "wave",
            Family::Locs => "locs",
        }
    }
}

impl fmt::Display for Family {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Keyword sets checked in order; first hit wins.
const FAMILY_KEYWORDS: [(&[&str], Family); 4] = [
    (&["loc"], Family::Locs),
    (&["4a", "4b", "4c", "coil"], Family::Coil),
    (&["3a", "3b", "3c", "curl"], Family::Curl),
    (&["2a", "2b", "2c", "wave", "wavy"], Family::Wave),
];

pub fn family_from_hair_type(hair_type: &str) -> Family {
    let lowered = hair_type.to_lowercase();
    FAMILY_KEYWORDS
        .iter()
        .find(|(keywords, _)| keywords.iter().any(|kw| lowered.contains(kw)))
        .map(|(_, family)| *family)
        .unwrap_or(Family::Curl)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HairLength {
    Short,
    Medium,
    Long,
}

impl HairLength {
    /// Case-insensitive prefix match; anything unrecognized is `Medium`.
    pub fn parse(text: &str) -> Self {
        let lowered = text.to_lowercase();
        if lowered.starts_with("short") {
            HairLength::Short
        } else if lowered.starts_with("long") {
            HairLength::Long
        } else {
            HairLength::Medium
        }
    }

    pub fn radius_scale(&self) -> f64 {
        match self {
            HairLength::Short => 0.85,
            HairLength::Medium => 0.93,
            HairLength::Long => 1.00,
        }
    }
}

pub fn clamp_slider(value: i64) -> i64 {
    clamp(value, SLIDER_MIN, SLIDER_MAX)
}

pub fn star_count_from_density(density: i64) -> usize {
    (250 + clamp_slider(density) * 80) as usize
}

pub fn variance_from_porosity(porosity: i64) -> f64 {
    0.25 + (clamp_slider(porosity) - 1) as f64 * 0.18
}

pub fn radius_scale_from_length(length: &str) -> f64 {
    HairLength::parse(length).radius_scale()
}

/// Spiral tightness, wave amplitude and wave frequency for an elasticity slider.
pub fn elasticity_to_params(elasticity: i64) -> (f64, f64, f64) {
    let step = (clamp_slider(elasticity) - 1) as f64;
    let tightness = 0.15 + step * 0.06;
    let amplitude = 30.0 + step * 12.0;
    let frequency = 1.0 + step * 0.55;
    (tightness, amplitude, frequency)
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct DerivedParameters {
    pub family: Family,
    pub star_count: usize,
    pub variance_factor: f64,
    pub radius_scale: f64,
    pub tightness: f64,
    pub amplitude: f64,
    pub frequency: f64,
}

impl DerivedParameters {
    pub fn derive(
        hair_type: &str,
        density: i64,
        porosity: i64,
        length: &str,
        elasticity: i64,
    ) -> Self {
        let (tightness, amplitude, frequency) = elasticity_to_params(elasticity);
        Self {
            family: family_from_hair_type(hair_type),
            star_count: star_count_from_density(density),
            variance_factor: variance_from_porosity(porosity),
            radius_scale: radius_scale_from_length(length),
            tightness,
            amplitude,
            frequency,
        }
    }
}
