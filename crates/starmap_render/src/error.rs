pub type RenderResult<T> = Result<T, RenderError>;

#[derive(thiserror::Error, Debug)]
pub enum RenderError {
    #[error("svg parse error: {0}")]
    Parse(#[from] usvg::Error),

    #[error("raster allocation error: {0}")]
    Allocate(String),

    #[error("png encode error: {0}")]
    Encode(#[from] image::ImageError),
}

impl RenderError {
    pub fn allocate(msg: impl Into<String>) -> Self {
        Self::Allocate(msg.into())
    }
}
