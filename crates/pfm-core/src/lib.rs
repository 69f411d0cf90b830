//! # pfm-core
//!
//! Core types shared by the float image loaders.
//!
//! This crate provides the data model a loader fills in and the small
//! collaborators it leans on:
//!
//! - [`Channel`], [`ImageSize`] - Named 2D grids of `f32` samples
//! - [`Layer`], [`ImageData`] - The assembled load result
//! - [`make_channels`] - Default channel allocation by count
//! - [`WorkerPool`] - Explicit, host-owned thread pool for row fan-out
//! - [`matches_fuzzy`] - Channel selector matching
//! - [`endian`] - Byte-order helpers for raw sample payloads
//!
//! ## Crate Structure
//!
//! ```text
//! pfm-core (this crate)
//!    ^
//!    |
//!    +-- pfm-io (loaders)
//!    +-- pfm-cli (command line front end)
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod endian;
pub mod error;
pub mod fuzzy;
pub mod image;
pub mod pool;

// Re-exports for convenience
pub use endian::{Endianness, is_host_little_endian, swap_byte_order};
pub use error::*;
pub use fuzzy::matches_fuzzy;
pub use image::*;
pub use pool::WorkerPool;

/// Prelude module for convenient imports.
///
/// # Usage
///
/// ```
/// use pfm_core::prelude::*;
/// ```
pub mod prelude {
    pub use crate::endian::{Endianness, is_host_little_endian, swap_byte_order};
    pub use crate::error::{Error, Result};
    pub use crate::fuzzy::matches_fuzzy;
    pub use crate::image::{Channel, ImageData, ImageSize, Layer, make_channels};
    pub use crate::pool::WorkerPool;
}
