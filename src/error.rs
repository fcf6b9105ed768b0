//! Error types for the slice view.
//!
//! The glyph pipeline itself never fails: degenerate inputs are handled by
//! drawing nothing or drawing minimal glyphs. Errors only come from building
//! a configuration, i.e. parsing colors, validating ratios and loading JSON.

use thiserror::Error;

/// Errors raised while building or loading a slice view configuration.
#[derive(Debug, Error)]
pub enum SliceError {
    /// A color endpoint could not be parsed.
    #[error("invalid color `{0}`: expected #rgb, #rrggbb, rgb(r, g, b) or a named color")]
    InvalidColor(String),

    /// Concentration threshold ratio outside of `[0, 1]`.
    #[error("concentration threshold ratio must be within [0, 1], got {0}")]
    ThresholdOutOfRange(f64),

    /// The render count ceiling must allow at least one glyph.
    #[error("max_dots must be at least 1")]
    InvalidMaxDots,

    /// Negative or non-finite canvas margin.
    #[error("margin must be finite and non-negative, got {0}")]
    InvalidMargin(f64),

    /// Reading or writing a configuration file failed.
    #[error("config file error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration JSON was malformed.
    #[error("config parse error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience result alias for configuration operations.
pub type SliceResult<T> = Result<T, SliceError>;
