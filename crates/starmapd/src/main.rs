use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result};
use axum::extract::State;
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use clap::Parser;
use serde::Serialize;
use starmap_core::io::request::{HAIR_TYPES, LENGTHS};
use starmap_core::params::{SLIDER_MAX, SLIDER_MIN};
use starmap_core::{generate, GenerationRequest};
use starmap_render::{to_svg, RenderError, Rasterizer, DEFAULT_PNG_SIZE};
use tokio::net::TcpListener;
use tracing::{error, info};

/// Longest message accepted over HTTP; the ring itself has no bound.
const MAX_MESSAGE_CHARS: usize = 280;

#[derive(Parser, Debug)]
#[command(name = "starmapd", about = "HTTP front end for texture star maps")]
struct Args {
    /// Address to bind (defaults to 127.0.0.1).
    #[arg(long, default_value = "127.0.0.1")]
    bind: String,

    /// Port to listen on.
    #[arg(long, default_value_t = 8788)]
    port: u16,

    /// Edge length of PNG previews in pixels.
    #[arg(long = "png-size", default_value_t = DEFAULT_PNG_SIZE)]
    png_size: u32,
}

#[derive(Clone)]
struct AppState {
    rasterizer: Arc<Rasterizer>,
    png_size: u32,
}

#[derive(Debug, thiserror::Error)]
enum ApiError {
    #[error("message longer than {} characters", MAX_MESSAGE_CHARS)]
    MessageTooLong,

    #[error(transparent)]
    Render(#[from] RenderError),

    #[error("generation task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            ApiError::MessageTooLong => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::Render(_) | ApiError::Task(_) => {
                error!(err = %self, "generation failed");
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };
        (status, self.to_string()).into_response()
    }
}

#[derive(Serialize)]
struct FormOptions {
    hair_types: &'static [&'static str],
    lengths: &'static [&'static str],
    slider_min: i64,
    slider_max: i64,
    defaults: GenerationRequest,
}

fn router(state: AppState) -> Router {
    Router::new()
        .route("/options", get(options))
        .route("/generate", post(generate_svg))
        .route("/generate/png", post(generate_png))
        .with_state(state)
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .init();

    let args = Args::parse();

    let rasterizer = tokio::task::spawn_blocking(Rasterizer::new)
        .await
        .context("failed to load fonts")?;
    let state = AppState {
        rasterizer: Arc::new(rasterizer),
        png_size: args.png_size,
    };

    let addr: SocketAddr = format!("{}:{}", args.bind, args.port)
        .parse()
        .with_context(|| format!("invalid bind address {}:{}", args.bind, args.port))?;

    info!(%addr, "starting starmapd");
    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;
    axum::serve(listener, router(state).into_make_service())
        .await
        .context("server error")?;
    Ok(())
}

async fn options() -> Json<FormOptions> {
    Json(FormOptions {
        hair_types: &HAIR_TYPES,
        lengths: &LENGTHS,
        slider_min: SLIDER_MIN,
        slider_max: SLIDER_MAX,
        defaults: GenerationRequest::default(),
    })
}

fn check_message(request: &GenerationRequest) -> Result<(), ApiError> {
    if request.message.chars().count() > MAX_MESSAGE_CHARS {
        return Err(ApiError::MessageTooLong);
    }
    Ok(())
}

async fn generate_svg(Json(request): Json<GenerationRequest>) -> Result<Response, ApiError> {
    check_message(&request)?;
    let svg = tokio::task::spawn_blocking(move || to_svg(&generate(&request))).await?;
    info!(bytes = svg.len(), "served svg");
    Ok(([(header::CONTENT_TYPE, "image/svg+xml")], svg).into_response())
}

async fn generate_png(
    State(state): State<AppState>,
    Json(request): Json<GenerationRequest>,
) -> Result<Response, ApiError> {
    check_message(&request)?;
    let png = tokio::task::spawn_blocking(move || {
        let svg = to_svg(&generate(&request));
        state.rasterizer.rasterize_png(&svg, state.png_size)
    })
    .await??;
    info!(bytes = png.len(), "served png");
    Ok(([(header::CONTENT_TYPE, "image/png")], png).into_response())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;

    fn state() -> AppState {
        AppState {
            rasterizer: Arc::new(Rasterizer::new()),
            png_size: 64,
        }
    }

    async fn body_bytes(response: Response) -> Vec<u8> {
        to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("body reads")
            .to_vec()
    }

    #[test]
    fn default_port_and_size() {
        let args = Args::try_parse_from(["starmapd"]).expect("defaults parse");
        assert_eq!(args.port, 8788);
        assert_eq!(args.png_size, 1080);
        assert_eq!(args.bind, "127.0.0.1");
    }

    #[tokio::test]
    async fn options_list_form_choices() {
        let Json(options) = options().await;
        let value = serde_json::to_value(&options).expect("options serialize");
        assert_eq!(value["hair_types"].as_array().map(Vec::len), Some(4));
        assert_eq!(value["lengths"][1], "Medium");
        assert_eq!(value["slider_max"], 5);
        assert_eq!(value["defaults"]["density"], 4);
    }

    #[tokio::test]
    async fn svg_route_returns_document() {
        let request = GenerationRequest {
            name: "Amara".to_string(),
            ..GenerationRequest::default()
        };
        let response = generate_svg(Json(request)).await.expect("svg renders");
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers()[header::CONTENT_TYPE],
            "image/svg+xml"
        );
        let body = String::from_utf8(body_bytes(response).await).expect("utf8 svg");
        assert!(body.contains(">Amara</text>"));
    }

    #[tokio::test]
    async fn overlong_message_is_rejected() {
        let request = GenerationRequest {
            message: "a".repeat(MAX_MESSAGE_CHARS + 1),
            ..GenerationRequest::default()
        };
        let err = generate_svg(Json(request)).await.unwrap_err();
        assert_eq!(
            err.into_response().status(),
            StatusCode::UNPROCESSABLE_ENTITY
        );
    }

    #[tokio::test]
    async fn png_route_uses_configured_size() {
        let response = generate_png(State(state()), Json(GenerationRequest::default()))
            .await
            .expect("png renders");
        assert_eq!(response.headers()[header::CONTENT_TYPE], "image/png");
        let body = body_bytes(response).await;
        assert_eq!(&body[..8], b"\x89PNG\r\n\x1a\n");
    }
}
