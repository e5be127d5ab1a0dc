#[derive(Debug, thiserror::Error)]
pub enum PaletteError {
    #[error("invalid hex color '{0}'")]
    InvalidHex(String),
    #[error("a color curve needs at least one anchor color")]
    NoAnchors,
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Csv(#[from] csv::Error),
}

pub type Result<T> = std::result::Result<T, PaletteError>;
