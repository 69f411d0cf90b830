//! Payload read and parallel row scatter.
//!
//! The payload is row-major, bottom row first, channel-interleaved:
//!
//! ```text
//! file row 0:  [c0 c1 c2][c0 c1 c2] ...   → output row height-1
//! file row 1:  [c0 c1 c2][c0 c1 c2] ...   → output row height-2
//! ```
//!
//! Each file row becomes one task owning the matching output row of every
//! channel, so workers never share a write target.

use super::header::PfmHeader;
use crate::{IoError, IoResult};
use pfm_core::endian::read_f32_native;
use pfm_core::{Channel, WorkerPool, is_host_little_endian, make_channels, swap_byte_order};
use std::io::{BufRead, Read};

/// Upper bound on the up-front payload allocation; larger payloads grow as read.
const MAX_PREALLOC: usize = 64 << 20;

/// Reads exactly `header.payload_len()` bytes.
pub(crate) fn read_payload<R: BufRead + ?Sized>(
    reader: &mut R,
    header: &PfmHeader,
) -> IoResult<Vec<u8>> {
    let expected = header.payload_len();
    let mut payload = Vec::with_capacity(expected.min(MAX_PREALLOC));
    (&mut *reader)
        .take(expected as u64)
        .read_to_end(&mut payload)?;

    if payload.len() < expected {
        return Err(IoError::TruncatedData {
            expected,
            actual: payload.len(),
        });
    }
    Ok(payload)
}

/// Flat sample index of channel `c` at file pixel `(x, y)`.
#[inline]
fn sample_index(x: usize, y: usize, c: usize, width: usize, channels: usize) -> usize {
    debug_assert!(x < width && c < channels, "sample ({x}, {y}, {c}) out of row");
    (y * width + x) * channels + c
}

/// Output row of file row `y`.
#[inline]
fn flip_row(y: usize, height: usize) -> usize {
    debug_assert!(y < height, "row {y} out of {height}");
    height - 1 - y
}

#[inline]
fn decode_sample(bytes: &[u8], should_swap: bool, scale: f32) -> f32 {
    let value = read_f32_native(bytes);
    let value = if should_swap {
        swap_byte_order(value)
    } else {
        value
    };
    scale * value
}

/// Decodes `payload` into one channel per sample, flipped to top-down rows.
///
/// `payload` must be exactly `header.payload_len()` bytes.
pub(crate) fn decode_channels(
    payload: &[u8],
    header: &PfmHeader,
    pool: &WorkerPool,
) -> Vec<Channel> {
    debug_assert_eq!(payload.len(), header.payload_len());

    let width = header.size.width as usize;
    let height = header.size.height as usize;
    let num_channels = header.channels;
    let scale = header.scale;
    let should_swap = is_host_little_endian() != header.endianness.is_little();

    tracing::trace!(should_swap, rows = height, workers = pool.num_threads(), "decoding PFM rows");

    let mut channels = make_channels(num_channels, header.size);

    // rows[y][c] is the output row of channel c fed by file row y
    let mut rows: Vec<Vec<&mut [f32]>> = (0..height)
        .map(|_| Vec::with_capacity(num_channels))
        .collect();
    for channel in &mut channels {
        for (out_y, row) in channel.rows_mut().enumerate() {
            rows[flip_row(out_y, height)].push(row);
        }
    }

    pool.parallel_for(rows, |y, mut planes| {
        for x in 0..width {
            for (c, plane) in planes.iter_mut().enumerate() {
                let offset = sample_index(x, y, c, width, num_channels) * 4;
                plane[x] = decode_sample(&payload[offset..offset + 4], should_swap, scale);
            }
        }
    });

    channels
}

#[cfg(test)]
mod tests {
    use super::*;
    use pfm_core::{Endianness, ImageSize};
    use std::io::Cursor;

    fn header(width: u32, height: u32, channels: usize, endianness: Endianness) -> PfmHeader {
        PfmHeader {
            size: ImageSize::new(width, height),
            channels,
            scale: 1.0,
            endianness,
        }
    }

    fn encode(values: &[f32], endianness: Endianness) -> Vec<u8> {
        values
            .iter()
            .flat_map(|v| match endianness {
                Endianness::Little => v.to_le_bytes(),
                Endianness::Big => v.to_be_bytes(),
            })
            .collect()
    }

    #[test]
    fn index_helpers() {
        assert_eq!(sample_index(0, 0, 0, 4, 3), 0);
        assert_eq!(sample_index(1, 0, 2, 4, 3), 5);
        assert_eq!(sample_index(0, 1, 0, 4, 3), 12);
        assert_eq!(flip_row(0, 5), 4);
        assert_eq!(flip_row(4, 5), 0);
    }

    #[test]
    fn payload_exact_and_truncated() {
        let h = header(2, 1, 1, Endianness::Little);
        let mut ok = Cursor::new(vec![0u8; 10]);
        assert_eq!(read_payload(&mut ok, &h).unwrap().len(), 8);
        assert_eq!(ok.position(), 8);

        let mut short = Cursor::new(vec![0u8; 7]);
        match read_payload(&mut short, &h) {
            Err(IoError::TruncatedData { expected, actual }) => {
                assert_eq!((expected, actual), (8, 7));
            }
            other => panic!("expected TruncatedData, got {:?}", other),
        }
    }

    #[test]
    fn interleaved_samples_split_into_planes() {
        let h = header(2, 1, 3, Endianness::host());
        let payload = encode(&[1.0, 2.0, 3.0, 4.0, 5.0, 6.0], Endianness::host());
        let pool = WorkerPool::single_threaded().unwrap();
        let channels = decode_channels(&payload, &h, &pool);
        assert_eq!(channels[0].data(), &[1.0, 4.0]);
        assert_eq!(channels[1].data(), &[2.0, 5.0]);
        assert_eq!(channels[2].data(), &[3.0, 6.0]);
    }

    #[test]
    fn foreign_byte_order_is_swapped() {
        let foreign = match Endianness::host() {
            Endianness::Little => Endianness::Big,
            Endianness::Big => Endianness::Little,
        };
        let mut h = header(1, 2, 1, foreign);
        h.scale = 2.0;
        let payload = encode(&[0.25, -8.0], foreign);
        let pool = WorkerPool::new(2).unwrap();
        let channels = decode_channels(&payload, &h, &pool);
        assert_eq!(channels[0].data(), &[-16.0, 0.5]);
    }
}
