use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::params::clamp_slider;

pub const FALLBACK_NAME: &str = "Anonymous";
pub const FALLBACK_MESSAGE: &str = "Texture is strength";

/// Hair type choices offered by the form.
pub const HAIR_TYPES: [&str; 4] = ["Waves (2A–2C)", "Curls (3A–3C)", "Coils (4A–4C)", "Locs"];
/// Length choices offered by the form.
pub const LENGTHS: [&str; 3] = ["Short", "Medium", "Long"];

/// Form inputs for one star map.
///
/// Sliders are carried as raw integers; out-of-range values are clamped when
/// the request is normalized, never rejected.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerationRequest {
    pub name: String,
    pub hair_type: String,
    pub density: i64,
    pub porosity: i64,
    pub length: String,
    pub elasticity: i64,
    pub message: String,
}

impl Default for GenerationRequest {
    fn default() -> Self {
        Self {
            name: String::new(),
            hair_type: HAIR_TYPES[2].to_string(),
            density: 4,
            porosity: 3,
            length: LENGTHS[1].to_string(),
            elasticity: 4,
            message: String::new(),
        }
    }
}

impl GenerationRequest {
    /// Load a request JSON document from disk.
    pub fn load_from_path(path: &Path) -> Result<Self> {
        let file =
            File::open(path).with_context(|| format!("failed to open request file {:?}", path))?;
        Self::from_reader(BufReader::new(file))
    }

    /// Deserialize a request document from an arbitrary reader.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        serde_json::from_reader(reader).context("invalid request json")
    }

    /// Apply text fallbacks and clamp sliders into range.
    ///
    /// Names and messages are only replaced when blank after trimming;
    /// otherwise they are kept verbatim since they feed the seed keys.
    pub fn normalized(&self) -> Self {
        Self {
            name: or_fallback(&self.name, FALLBACK_NAME),
            hair_type: self.hair_type.clone(),
            density: clamp_slider(self.density),
            porosity: clamp_slider(self.porosity),
            length: self.length.clone(),
            elasticity: clamp_slider(self.elasticity),
            message: or_fallback(&self.message, FALLBACK_MESSAGE),
        }
    }
}

fn or_fallback(value: &str, fallback: &str) -> String {
    if value.trim().is_empty() {
        fallback.to_string()
    } else {
        value.to_string()
    }
}

/// Proptest strategy over requests with arbitrary text and slider values.
#[cfg(any(test, feature = "proptest-support"))]
pub fn arb_request() -> impl proptest::strategy::Strategy<Value = GenerationRequest> {
    use proptest::prelude::*;

    (
        "[ a-zA-Z]{0,12}",
        prop::sample::select(HAIR_TYPES.to_vec()),
        -10i64..20,
        -10i64..20,
        prop::sample::select(LENGTHS.to_vec()),
        -10i64..20,
        "[ a-z0-9#?!]{0,24}",
    )
        .prop_map(
            |(name, hair_type, density, porosity, length, elasticity, message)| GenerationRequest {
                name,
                hair_type: hair_type.to_string(),
                density,
                porosity,
                length: length.to_string(),
                elasticity,
                message,
            },
        )
}
