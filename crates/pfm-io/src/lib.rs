//! # pfm-io
//!
//! Image loading for float image formats.
//!
//! Currently provides the Portable Float Map loader:
//!
//! - **PFM** - `Pf` (grey), `PF` (RGB), `PF4` (RGBA) float maps
//!
//! # Architecture
//!
//! - [`ImageLoader`] - Trait a format dispatcher probes and calls
//! - [`PfmLoader`] - PFM implementation of [`ImageLoader`]
//! - [`pfm::load`] / [`pfm::can_load`] - Generic entry points for direct use
//!
//! Decoding runs on a caller-supplied [`WorkerPool`](pfm_core::WorkerPool);
//! the loader never creates threads of its own.
//!
//! # Quick Start
//!
//! ```rust
//! use pfm_core::WorkerPool;
//! use pfm_io::{ImageLoader, PfmLoader};
//! use std::io::Cursor;
//!
//! let mut bytes = b"PF\n1 1\n-1.0\n".to_vec();
//! for v in [0.25f32, 0.5, 1.0] {
//!     bytes.extend_from_slice(&v.to_le_bytes());
//! }
//!
//! let pool = WorkerPool::new(2)?;
//! let loader = PfmLoader::new();
//! let mut stream = Cursor::new(bytes);
//! assert!(loader.can_load(&mut stream));
//!
//! let image = loader.load(&mut stream, "g,r", &pool)?;
//! assert_eq!(image.channel_names(), ["G", "R"]);
//! assert_eq!(image.channels[0].at(0, 0), 0.5);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! # Logging
//!
//! Loaders emit `tracing` events at `debug`/`trace` level only. Installing
//! a subscriber is up to the host application.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod error;
mod traits;
pub mod pfm;

pub use error::{IoError, IoResult};
pub use pfm::PfmLoader;
pub use traits::{ImageLoader, ReadSeek};
