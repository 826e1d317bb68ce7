use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use starmap_core::{generate, GenerationRequest};
use starmap_render::{to_svg, Rasterizer, DEFAULT_PNG_SIZE};
use tracing::info;

#[derive(Parser, Debug)]
#[command(
    name = "starmap",
    about = "Render a texture star map to SVG and an optional PNG preview"
)]
struct Args {
    /// Path to a request JSON document. Flags below override its fields.
    #[arg(long, value_name = "PATH")]
    request: Option<PathBuf>,

    /// Name shown in the caption and mixed into the seed.
    #[arg(long)]
    name: Option<String>,

    /// Hair type text, e.g. "Coils (4A–4C)".
    #[arg(long = "hair-type")]
    hair_type: Option<String>,

    /// Density slider (1-5).
    #[arg(long, allow_negative_numbers = true)]
    density: Option<i64>,

    /// Porosity slider (1-5).
    #[arg(long, allow_negative_numbers = true)]
    porosity: Option<i64>,

    /// Length: short, medium or long.
    #[arg(long)]
    length: Option<String>,

    /// Elasticity slider (1-5).
    #[arg(long, allow_negative_numbers = true)]
    elasticity: Option<i64>,

    /// Message encoded in the Morse ring.
    #[arg(long)]
    message: Option<String>,

    /// Output SVG file path.
    #[arg(long, value_name = "PATH")]
    out: PathBuf,

    /// Optional path for the PNG preview.
    #[arg(long, value_name = "PATH")]
    png: Option<PathBuf>,

    /// Edge length of the PNG preview in pixels.
    #[arg(long = "png-size", default_value_t = DEFAULT_PNG_SIZE)]
    png_size: u32,

    /// Optional path to emit the scene as JSON.
    #[arg(long = "emit-scene", value_name = "PATH")]
    emit_scene: Option<PathBuf>,
}

fn load_request(args: &Args) -> Result<GenerationRequest> {
    let mut request = match &args.request {
        Some(path) => GenerationRequest::load_from_path(path)
            .with_context(|| format!("failed to load request from {:?}", path))?,
        None => GenerationRequest::default(),
    };

    if let Some(name) = &args.name {
        request.name = name.clone();
    }
    if let Some(hair_type) = &args.hair_type {
        request.hair_type = hair_type.clone();
    }
    if let Some(density) = args.density {
        request.density = density;
    }
    if let Some(porosity) = args.porosity {
        request.porosity = porosity;
    }
    if let Some(length) = &args.length {
        request.length = length.clone();
    }
    if let Some(elasticity) = args.elasticity {
        request.elasticity = elasticity;
    }
    if let Some(message) = &args.message {
        request.message = message.clone();
    }
    Ok(request)
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .init();

    let args = Args::parse();
    let request = load_request(&args)?;

    let scene = generate(&request);
    let svg = to_svg(&scene);
    fs::write(&args.out, &svg).with_context(|| format!("failed to write {:?}", args.out))?;
    info!(path = ?args.out, items = scene.items.len(), "wrote svg");

    if let Some(path) = &args.png {
        let png = Rasterizer::new()
            .rasterize_png(&svg, args.png_size)
            .context("failed to rasterize preview")?;
        fs::write(path, png).with_context(|| format!("failed to write {:?}", path))?;
        info!(path = ?path, size = args.png_size, "wrote png preview");
    }

    if let Some(path) = &args.emit_scene {
        let json = scene.to_json()?;
        fs::write(path, json)
            .with_context(|| format!("failed to write scene json at {:?}", path))?;
        info!(path = ?path, "wrote scene json");
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{load_request, Args};
    use clap::{error::ErrorKind, Parser};

    #[test]
    fn requires_output_path() {
        let err = Args::try_parse_from(["starmap", "--name", "Amara"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);
    }

    #[test]
    fn flags_fill_a_default_request() {
        let args = Args::try_parse_from([
            "starmap",
            "--out",
            "map.svg",
            "--name",
            "Amara",
            "--hair-type",
            "Locs",
            "--density",
            "-3",
            "--message",
            "sos",
        ])
        .expect("arguments parse");
        let request = load_request(&args).expect("request builds");
        assert_eq!(request.name, "Amara");
        assert_eq!(request.hair_type, "Locs");
        assert_eq!(request.density, -3);
        assert_eq!(request.porosity, 3);
        assert_eq!(request.length, "Medium");
        assert_eq!(request.message, "sos");
        assert_eq!(args.png_size, 1080);
    }

    #[test]
    fn missing_request_file_is_reported() {
        let args = Args::try_parse_from([
            "starmap",
            "--out",
            "map.svg",
            "--request",
            "/nonexistent/request.json",
        ])
        .expect("arguments parse");
        let err = load_request(&args).unwrap_err();
        assert!(format!("{err:#}").contains("request.json"));
    }
}
