use thiserror::Error;

/// Errors produced by the checked construction and parsing surfaces.
///
/// The in-memory invariant contract itself is enforced fail-fast with debug
/// assertions; this enum only covers paths fed by untrusted input.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ColorError {
    #[error("component {channel} out of range: {value} (expected [0, 1])")]
    OutOfRange { channel: &'static str, value: f64 },

    #[error("invalid hex color: {0:?}")]
    InvalidHex(String),

    #[error("unknown color name: {0:?}")]
    UnknownName(String),

    #[error("expected 3 or 4 color components, got {0}")]
    BadArity(usize),

    #[error("color json parse error: {0}")]
    Json(String),
}
