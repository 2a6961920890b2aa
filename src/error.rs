use thiserror::Error;

/// Errors raised while turning user text into calculator input.
///
/// The ratio transform itself is total and never fails; these only come
/// from the command line and from the JSON report.
#[derive(Debug, Error)]
pub enum RatioError {
    #[error("'{0}' is not a stop value (expected something like -1, +1.5 or 2 stops)")]
    InvalidStop(String),

    #[error("stop value must be a finite number, got '{0}'")]
    NonFinite(String),

    #[error("unknown ratio '{0}' (known ratios: {})", crate::ratio::presets::known_labels())]
    UnknownRatio(String),

    #[error("failed to serialize report: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, RatioError>;
