//! Loader trait consumed by format dispatchers.
//!
//! A dispatcher holds a list of `Box<dyn ImageLoader>`, asks each one
//! [`can_load`](ImageLoader::can_load) in turn, and calls
//! [`load`](ImageLoader::load) on the first that accepts the stream.

use crate::IoResult;
use pfm_core::{ImageData, WorkerPool};
use std::io::{BufRead, Read, Seek};

/// A readable, seekable byte stream.
pub trait ReadSeek: Read + Seek {}

impl<T: Read + Seek + ?Sized> ReadSeek for T {}

/// Trait for image format loaders.
///
/// # Example
///
/// ```rust,ignore
/// use pfm_io::{ImageLoader, PfmLoader};
///
/// let loaders: Vec<Box<dyn ImageLoader>> = vec![Box::new(PfmLoader::new())];
/// let loader = loaders.iter().find(|l| l.can_load(&mut file));
/// ```
pub trait ImageLoader: Send + Sync {
    /// Human-readable format name.
    fn name(&self) -> &'static str;

    /// Probes the stream without consuming it.
    ///
    /// Never fails: unreadable or short input is reported as `false`. The
    /// stream position is restored before returning.
    fn can_load(&self, stream: &mut dyn ReadSeek) -> bool;

    /// Decodes the stream, keeping only channels matching `channel_selector`.
    ///
    /// Row decoding runs on `pool`.
    fn load(
        &self,
        stream: &mut dyn BufRead,
        channel_selector: &str,
        pool: &WorkerPool,
    ) -> IoResult<ImageData>;
}
