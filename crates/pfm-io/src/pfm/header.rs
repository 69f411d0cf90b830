//! PFM text header.
//!
//! ```text
//! PF\n          magic: Pf (1 channel), PF (3), PF4 (4)
//! 640 480\n     width height
//! -1.0\n        scale; sign gives byte order (negative = little-endian)
//! <binary>      width * height * channels f32 samples, bottom row first
//! ```
//!
//! Tokens are separated by any whitespace. Numbers are read as the longest
//! numeric prefix, so `1 1-1.0junk` yields width 1, height 1, scale -1.0.
//! Whatever follows the scale up to and including the first `\r` or `\n`
//! is skipped.

use crate::{IoError, IoResult};
use pfm_core::{Endianness, ImageSize};
use std::io::BufRead;

/// Longest accepted header token.
const MAX_TOKEN_LEN: usize = 64;

/// Validated PFM header.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PfmHeader {
    /// Image dimensions, both non-zero.
    pub size: ImageSize,
    /// Samples per pixel: 1, 3 or 4.
    pub channels: usize,
    /// Multiplier applied to every sample; finite and positive.
    pub scale: f32,
    /// Byte order of the payload.
    pub endianness: Endianness,
}

impl PfmHeader {
    /// Number of `f32` samples in the payload.
    #[inline]
    pub fn sample_count(&self) -> usize {
        // overflow is rejected by read_header
        self.size.pixel_count() * self.channels
    }

    /// Payload length in bytes.
    #[inline]
    pub fn payload_len(&self) -> usize {
        self.sample_count() * 4
    }
}

/// Maps a magic token to its channel count.
pub(crate) fn channels_for_magic(magic: &str) -> Option<usize> {
    match magic {
        "Pf" => Some(1),
        "PF" => Some(3),
        "PF4" => Some(4),
        _ => None,
    }
}

/// Parses and validates the header, leaving `reader` at the first payload byte.
pub fn read_header<R: BufRead + ?Sized>(reader: &mut R) -> IoResult<PfmHeader> {
    let magic = read_token(reader)?;
    let channels = channels_for_magic(&magic)
        .ok_or_else(|| IoError::invalid_format("invalid magic", &magic))?;

    let width = parse_dimension(reader)?;
    let height = parse_dimension(reader)?;

    let raw_scale = read_number(reader, is_float_prefix)?;
    let scale: f32 = match raw_scale.parse() {
        Ok(scale) => scale,
        Err(_) => return Err(unparseable(reader, "unparseable scale", raw_scale)),
    };
    if !scale.is_finite() || scale == 0.0 {
        return Err(IoError::invalid_format("invalid scale", scale));
    }

    let size = ImageSize::new(width, height);
    if size.is_empty() {
        return Err(IoError::invalid_format("zero pixels", size));
    }
    size.checked_pixel_count()
        .and_then(|n| n.checked_mul(channels))
        .and_then(|n| n.checked_mul(4))
        .ok_or_else(|| IoError::invalid_format("payload size overflow", size))?;

    skip_line_terminator(reader)?;

    Ok(PfmHeader {
        size,
        channels,
        scale: scale.abs(),
        endianness: if scale < 0.0 {
            Endianness::Little
        } else {
            Endianness::Big
        },
    })
}

fn parse_dimension<R: BufRead + ?Sized>(reader: &mut R) -> IoResult<u32> {
    let raw = read_number(reader, is_int_prefix)?;
    let value: i64 = match raw.parse() {
        Ok(value) => value,
        Err(_) => return Err(unparseable(reader, "unparseable dimension", raw)),
    };
    if value < 0 {
        return Err(IoError::invalid_format("negative dimension", value));
    }
    u32::try_from(value).map_err(|_| IoError::invalid_format("dimension too large", value))
}

/// Builds the error for a number that failed to parse. An empty prefix means
/// the stream holds no number at all, so the offending token is reported.
fn unparseable<R: BufRead + ?Sized>(reader: &mut R, reason: &'static str, raw: String) -> IoError {
    if !raw.is_empty() {
        return IoError::invalid_format(reason, raw);
    }
    match read_token(reader) {
        Ok(token) => IoError::invalid_format(reason, token),
        Err(err) => err,
    }
}

#[inline]
fn is_space(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\n' | b'\r' | 0x0b | 0x0c)
}

fn strip_sign(s: &[u8]) -> &[u8] {
    match s.first() {
        Some(b'+' | b'-') => &s[1..],
        _ => s,
    }
}

/// `[+-]?[0-9]*`
fn is_int_prefix(s: &[u8]) -> bool {
    strip_sign(s).iter().all(u8::is_ascii_digit)
}

/// Prefix of `[+-]?(inf|infinity|nan)` or `[+-]?(d+.?d*|.d+)([eE][+-]?d+)?`.
fn is_float_prefix(s: &[u8]) -> bool {
    let body = strip_sign(s);
    let special = ["inf", "infinity", "nan"].iter().any(|word| {
        !body.is_empty()
            && body.len() <= word.len()
            && word.as_bytes()[..body.len()].eq_ignore_ascii_case(body)
    });
    if special {
        return true;
    }

    let digits = |from: usize| body[from..].iter().take_while(|b| b.is_ascii_digit()).count();
    let mut i = digits(0);
    let mut mantissa = i;
    if body.get(i) == Some(&b'.') {
        let frac = digits(i + 1);
        mantissa += frac;
        i += 1 + frac;
    }
    if i == body.len() {
        return true;
    }
    if mantissa == 0 || !matches!(body[i], b'e' | b'E') {
        return false;
    }
    i += 1;
    if matches!(body.get(i), Some(b'+' | b'-')) {
        i += 1;
    }
    i += digits(i);
    i == body.len()
}

/// Skips whitespace, failing at end of stream.
fn skip_space<R: BufRead + ?Sized>(reader: &mut R) -> IoResult<()> {
    loop {
        let buf = reader.fill_buf()?;
        if buf.is_empty() {
            return Err(IoError::invalid_format("unexpected end of header", "EOF"));
        }
        let skip = buf.iter().take_while(|&&b| is_space(b)).count();
        let found = skip < buf.len();
        reader.consume(skip);
        if found {
            return Ok(());
        }
    }
}

/// Skips whitespace, then consumes bytes while `accept` holds for the token so
/// far. The first rejected byte is left unread.
fn read_while<R, F>(reader: &mut R, mut accept: F) -> IoResult<String>
where
    R: BufRead + ?Sized,
    F: FnMut(&[u8], u8) -> bool,
{
    skip_space(reader)?;

    let mut token = Vec::new();
    loop {
        let buf = reader.fill_buf()?;
        if buf.is_empty() {
            break;
        }
        let mut len = 0;
        for &b in buf {
            if token.len() > MAX_TOKEN_LEN || !accept(token.as_slice(), b) {
                break;
            }
            token.push(b);
            len += 1;
        }
        let done = len < buf.len();
        reader.consume(len);

        if token.len() > MAX_TOKEN_LEN {
            token.truncate(MAX_TOKEN_LEN);
            return Err(IoError::invalid_format(
                "header token too long",
                String::from_utf8_lossy(&token),
            ));
        }
        if done {
            break;
        }
    }

    Ok(String::from_utf8_lossy(&token).into_owned())
}

/// Reads one whitespace-delimited token, leaving the delimiter unread.
fn read_token<R: BufRead + ?Sized>(reader: &mut R) -> IoResult<String> {
    read_while(reader, |_, b| !is_space(b))
}

/// Reads the longest prefix for which `is_prefix` holds.
fn read_number<R: BufRead + ?Sized>(
    reader: &mut R,
    is_prefix: fn(&[u8]) -> bool,
) -> IoResult<String> {
    let mut candidate = Vec::with_capacity(MAX_TOKEN_LEN + 1);
    read_while(reader, |token, b| {
        candidate.clear();
        candidate.extend_from_slice(token);
        candidate.push(b);
        is_prefix(&candidate)
    })
}

/// Consumes bytes up to and including the first `\r` or `\n`.
fn skip_line_terminator<R: BufRead + ?Sized>(reader: &mut R) -> IoResult<()> {
    loop {
        let buf = reader.fill_buf()?;
        if buf.is_empty() {
            return Ok(());
        }
        match buf.iter().position(|&b| b == b'\r' || b == b'\n') {
            Some(pos) => {
                reader.consume(pos + 1);
                return Ok(());
            }
            None => {
                let len = buf.len();
                reader.consume(len);
            }
        }
    }
}
