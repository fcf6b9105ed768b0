// src/lib.rs
//! Sliceview
//!
//! Brushed 2D slice views of 3D particle fields: band filtering, density
//! limiting, projection and velocity/concentration glyph construction.

pub mod config;
pub mod error;
pub mod particle;
pub mod prelude;
pub mod stats;
pub mod visualization;

// Re-export main types for convenience
pub use config::RenderConfig;
pub use error::{SliceError, SliceResult};
pub use visualization::SliceView;
