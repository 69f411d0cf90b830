//! Byte-order helpers for raw `f32` payloads.
//!
//! Raw float formats store samples in a byte order chosen by the writer.
//! These helpers decode 4-byte groups explicitly instead of reinterpreting
//! a byte buffer as `[f32]`, so alignment never matters.

use byteorder::{BigEndian, ByteOrder, LittleEndian, NativeEndian};

/// Byte order (endianness).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endianness {
    /// Big-endian (network byte order).
    Big,
    /// Little-endian.
    Little,
}

impl Endianness {
    /// Byte order of the host.
    #[inline]
    pub const fn host() -> Self {
        if cfg!(target_endian = "little") {
            Endianness::Little
        } else {
            Endianness::Big
        }
    }

    /// Returns `true` for [`Endianness::Little`].
    #[inline]
    pub const fn is_little(self) -> bool {
        matches!(self, Endianness::Little)
    }
}

/// Returns `true` if the host is little-endian.
#[inline]
pub const fn is_host_little_endian() -> bool {
    Endianness::host().is_little()
}

/// Reverses the bytes of a float's bit pattern.
///
/// The bit pattern round-trips exactly, NaN payloads included.
#[inline]
pub fn swap_byte_order(value: f32) -> f32 {
    f32::from_bits(value.to_bits().swap_bytes())
}

/// Decodes one `f32` from the first 4 bytes of `bytes` in the given order.
///
/// ```rust
/// use pfm_core::endian::{Endianness, read_f32};
///
/// assert_eq!(read_f32(&[0x00, 0x00, 0xc0, 0x3f], Endianness::Little), 1.5);
/// assert_eq!(read_f32(&[0x3f, 0xc0, 0x00, 0x00], Endianness::Big), 1.5);
/// ```
///
/// # Panics
///
/// Panics if `bytes` is shorter than 4.
#[inline]
pub fn read_f32(bytes: &[u8], order: Endianness) -> f32 {
    match order {
        Endianness::Little => LittleEndian::read_f32(bytes),
        Endianness::Big => BigEndian::read_f32(bytes),
    }
}

/// Decodes one `f32` from the first 4 bytes of `bytes` in host order.
///
/// # Panics
///
/// Panics if `bytes` is shorter than 4.
#[inline]
pub fn read_f32_native(bytes: &[u8]) -> f32 {
    NativeEndian::read_f32(bytes)
}
