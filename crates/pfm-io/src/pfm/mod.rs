//! Portable Float Map (PFM) support.
//!
//! PFM is a text header followed by raw IEEE-754 `f32` samples:
//!
//! | Magic | Channels | Default names |
//! |-------|----------|---------------|
//! | `Pf` | 1 | `Y` |
//! | `PF` | 3 | `R G B` |
//! | `PF4` | 4 | `R G B A` |
//!
//! The sign of the header's scale gives the payload byte order (negative =
//! little-endian) and its magnitude multiplies every sample. Rows are stored
//! bottom-to-top and are flipped on load.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use pfm_core::WorkerPool;
//! use std::io::BufReader;
//!
//! let pool = WorkerPool::new(0)?;
//! let mut reader = BufReader::new(File::open("env.pfm")?);
//! let image = pfm_io::pfm::load(&mut reader, "", &pool)?;
//! println!("{} {:?}", image.size(), image.channel_names());
//! ```
//!
//! # Pipeline
//!
//! 1. [`can_load`] - 2-byte magic probe, stream position restored
//! 2. [`read_header`] - magic, dimensions, scale, one line terminator
//! 3. Payload read, then one worker task per row (swap, scale, flip)
//! 4. Selector filtering and result assembly under one root layer

mod decode;
mod header;
mod select;

pub use header::{PfmHeader, read_header};

use crate::traits::{ImageLoader, ReadSeek};
use crate::IoResult;
use pfm_core::{ImageData, WorkerPool};
use std::io::{BufRead, Read, Seek, SeekFrom};

/// Returns `true` if the stream starts with `PF` or `Pf`.
///
/// Never fails; the stream position is restored before returning.
pub fn can_load<S: Read + Seek + ?Sized>(stream: &mut S) -> bool {
    let Ok(start) = stream.stream_position() else {
        return false;
    };

    let mut magic = [0u8; 2];
    let result = stream.read_exact(&mut magic).is_ok()
        && magic[0] == b'P'
        && (magic[1] == b'F' || magic[1] == b'f');

    if stream.seek(SeekFrom::Start(start)).is_err() {
        return false;
    }
    result
}

/// Loads a PFM image, keeping the channels matched by `channel_selector`.
///
/// Pass `""` to keep all channels in their stored order.
///
/// # Errors
///
/// - [`IoError::InvalidFormat`](crate::IoError::InvalidFormat) - bad magic,
///   zero/non-finite scale, zero pixels, malformed header
/// - [`IoError::TruncatedData`](crate::IoError::TruncatedData) - payload
///   shorter than the header promises
/// - [`IoError::Io`](crate::IoError::Io) - underlying read failure
pub fn load<R: BufRead + ?Sized>(
    reader: &mut R,
    channel_selector: &str,
    pool: &WorkerPool,
) -> IoResult<ImageData> {
    let header = read_header(reader)?;
    tracing::debug!(
        size = %header.size,
        channels = header.channels,
        scale = header.scale,
        endianness = ?header.endianness,
        "PFM header"
    );

    let payload = decode::read_payload(reader, &header)?;
    let channels = decode::decode_channels(&payload, &header, pool);
    drop(payload);

    let selected = select::select_channels(channels, channel_selector);
    tracing::debug!(
        selector = channel_selector,
        kept = selected.len(),
        of = header.channels,
        "PFM channels selected"
    );

    select::assemble(header.size, selected)
}

/// PFM loader for format dispatchers.
#[derive(Debug, Clone, Copy, Default)]
pub struct PfmLoader;

impl PfmLoader {
    /// Creates a new loader.
    pub fn new() -> Self {
        Self
    }
}

impl ImageLoader for PfmLoader {
    fn name(&self) -> &'static str {
        "PFM"
    }

    fn can_load(&self, stream: &mut dyn ReadSeek) -> bool {
        can_load(stream)
    }

    fn load(
        &self,
        stream: &mut dyn BufRead,
        channel_selector: &str,
        pool: &WorkerPool,
    ) -> IoResult<ImageData> {
        load(stream, channel_selector, pool)
    }
}
