//! Error types for pfm-core operations.
//!
//! # Usage
//!
//! ```rust
//! use pfm_core::{Error, ImageSize, Result};
//!
//! fn check(x: u32, y: u32, size: ImageSize) -> Result<()> {
//!     if x >= size.width || y >= size.height {
//!         return Err(Error::out_of_bounds(x, y, size.width, size.height));
//!     }
//!     Ok(())
//! }
//! # assert!(check(3, 0, ImageSize::new(2, 2)).is_err());
//! ```
//!
//! # Used By
//!
//! - [`crate::image::Channel`] - Checked sample access
//! - [`crate::pool::WorkerPool`] - Pool construction
//! - `pfm-io` - Wrapped into the loader error type

use thiserror::Error;

/// Result type alias using [`Error`] as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in the core data model.
#[derive(Debug, Error)]
pub enum Error {
    /// Sample coordinates are outside the channel.
    #[error("sample ({x}, {y}) out of bounds for channel {width}x{height}")]
    OutOfBounds {
        /// X coordinate that was out of bounds
        x: u32,
        /// Y coordinate that was out of bounds
        y: u32,
        /// Channel width
        width: u32,
        /// Channel height
        height: u32,
    },

    /// Invalid image dimensions.
    ///
    /// Returned when width or height is zero, or dimensions would cause
    /// integer overflow in buffer size calculations.
    #[error("invalid dimensions: {width}x{height} ({reason})")]
    InvalidDimensions {
        /// Requested width
        width: u32,
        /// Requested height
        height: u32,
        /// Reason why dimensions are invalid
        reason: String,
    },

    /// The worker pool could not be created.
    #[error("failed to build worker pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}

impl Error {
    /// Creates an [`Error::OutOfBounds`] error.
    #[inline]
    pub fn out_of_bounds(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self::OutOfBounds {
            x,
            y,
            width,
            height,
        }
    }

    /// Creates an [`Error::InvalidDimensions`] error.
    #[inline]
    pub fn invalid_dimensions(width: u32, height: u32, reason: impl Into<String>) -> Self {
        Self::InvalidDimensions {
            width,
            height,
            reason: reason.into(),
        }
    }

    /// Returns `true` if this is a bounds-related error.
    #[inline]
    pub fn is_bounds_error(&self) -> bool {
        matches!(self, Self::OutOfBounds { .. })
    }
}
