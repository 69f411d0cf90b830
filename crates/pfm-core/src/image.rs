//! Channel and image result types.
//!
//! This module provides the containers a loader fills in:
//! - [`ImageSize`] - Integer width/height pair
//! - [`Channel`] - Named 2D grid of `f32` samples
//! - [`Layer`] - Named grouping of channels
//! - [`ImageData`] - Ordered channels plus layers, handed to the caller
//!
//! # Memory Layout
//!
//! A [`Channel`] stores one scalar per pixel in **row-major** order,
//! top-to-bottom:
//!
//! ```text
//! Memory: [s(0,0) s(1,0) s(2,0) ...]  ← Row 0 (top)
//!         [s(0,1) s(1,1) s(2,1) ...]  ← Row 1
//!         ...
//! ```
//!
//! Planar storage lets a decoder hand every worker a disjoint `&mut` row
//! slice of every channel, see [`Channel::rows_mut`].
//!
//! # Usage
//!
//! ```rust
//! use pfm_core::{Channel, ImageSize};
//!
//! let mut ch = Channel::new("R", ImageSize::new(4, 2));
//! ch.set(3, 1, 0.5);
//! assert_eq!(ch.at(3, 1), 0.5);
//! assert_eq!(ch.data().len(), 8);
//! ```

use crate::{Error, Result};

/// Image dimensions in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ImageSize {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl ImageSize {
    /// Creates a new size.
    #[inline]
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Returns `width * height`, or `None` if it does not fit in `usize`.
    #[inline]
    pub fn checked_pixel_count(&self) -> Option<usize> {
        (self.width as usize).checked_mul(self.height as usize)
    }

    /// Returns `width * height`.
    ///
    /// # Panics
    ///
    /// Panics on overflow. Use [`checked_pixel_count`](Self::checked_pixel_count)
    /// for untrusted dimensions.
    #[inline]
    pub fn pixel_count(&self) -> usize {
        self.checked_pixel_count()
            .unwrap_or_else(|| panic!("pixel count overflow for {}x{}", self.width, self.height))
    }

    /// Returns `true` if either dimension is zero.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }
}

impl std::fmt::Display for ImageSize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// A named 2D grid of `f32` samples.
///
/// Dimensions are fixed at construction; every sample starts at `0.0`.
#[derive(Debug, Clone, PartialEq)]
pub struct Channel {
    name: String,
    size: ImageSize,
    data: Vec<f32>,
}

impl Channel {
    /// Creates a zero-filled channel.
    ///
    /// # Panics
    ///
    /// Panics if `width * height` overflows `usize`.
    pub fn new(name: impl Into<String>, size: ImageSize) -> Self {
        Self {
            name: name.into(),
            size,
            data: vec![0.0; size.pixel_count()],
        }
    }

    /// Channel name, e.g. `"R"`.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Channel dimensions.
    #[inline]
    pub fn size(&self) -> ImageSize {
        self.size
    }

    /// Row-major samples, top row first.
    #[inline]
    pub fn data(&self) -> &[f32] {
        &self.data
    }

    /// Consumes the channel, returning its samples.
    #[inline]
    pub fn into_data(self) -> Vec<f32> {
        self.data
    }

    #[inline]
    fn index(&self, x: u32, y: u32) -> usize {
        debug_assert!(
            x < self.size.width && y < self.size.height,
            "sample ({x}, {y}) out of bounds for {}",
            self.size
        );
        y as usize * self.size.width as usize + x as usize
    }

    /// Returns the sample at `(x, y)`.
    ///
    /// # Panics
    ///
    /// Panics if `(x, y)` is outside the channel.
    #[inline]
    pub fn at(&self, x: u32, y: u32) -> f32 {
        self.data[self.index(x, y)]
    }

    /// Writes the sample at `(x, y)`.
    ///
    /// # Panics
    ///
    /// Panics if `(x, y)` is outside the channel.
    #[inline]
    pub fn set(&mut self, x: u32, y: u32, value: f32) {
        let idx = self.index(x, y);
        self.data[idx] = value;
    }

    /// Returns the sample at `(x, y)`, or [`Error::OutOfBounds`].
    pub fn get(&self, x: u32, y: u32) -> Result<f32> {
        if x >= self.size.width || y >= self.size.height {
            return Err(Error::out_of_bounds(x, y, self.size.width, self.size.height));
        }
        Ok(self.data[self.index(x, y)])
    }

    /// Mutable rows, top row first. Each slice is `width` samples long.
    pub fn rows_mut(&mut self) -> std::slice::ChunksExactMut<'_, f32> {
        // width is never zero for a decoded channel; max(1) keeps chunks_exact_mut from panicking
        let width = (self.size.width as usize).max(1);
        self.data.chunks_exact_mut(width)
    }
}

/// Allocates `count` zero-filled channels of the given size.
///
/// Naming follows the usual float-image conventions:
///
/// | Count | Names |
/// |-------|-------|
/// | 1 | `Y` |
/// | 2-4 | `R`, `G`, `B`, `A` (prefix) |
/// | 5+ | `R`, `G`, `B`, `A`, then `4`, `5`, ... |
///
/// # Example
///
/// ```rust
/// use pfm_core::{make_channels, ImageSize};
///
/// let channels = make_channels(3, ImageSize::new(2, 2));
/// let names: Vec<_> = channels.iter().map(|c| c.name()).collect();
/// assert_eq!(names, ["R", "G", "B"]);
/// ```
pub fn make_channels(count: usize, size: ImageSize) -> Vec<Channel> {
    const NAMES: [&str; 4] = ["R", "G", "B", "A"];

    if count == 1 {
        return vec![Channel::new("Y", size)];
    }

    (0..count)
        .map(|i| match NAMES.get(i) {
            Some(name) => Channel::new(*name, size),
            None => Channel::new(i.to_string(), size),
        })
        .collect()
}

/// A named grouping of channels. The empty name is the root layer.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Layer {
    /// Layer name; empty for the root layer.
    pub name: String,
}

impl Layer {
    /// Creates a named layer.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    /// The anonymous top-level layer.
    pub fn root() -> Self {
        Self::default()
    }

    /// Returns `true` for the anonymous top-level layer.
    #[inline]
    pub fn is_root(&self) -> bool {
        self.name.is_empty()
    }
}

/// Result of loading an image: ordered channels plus ordered layers.
///
/// All channels share the image size given at construction.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageData {
    size: ImageSize,
    /// Channels in output order.
    pub channels: Vec<Channel>,
    /// Layers in output order.
    pub layers: Vec<Layer>,
    /// Whether color channels are premultiplied by alpha.
    pub has_premultiplied_alpha: bool,
}

impl ImageData {
    /// Creates an empty result for an image of the given size.
    pub fn new(size: ImageSize) -> Self {
        Self {
            size,
            channels: Vec::new(),
            layers: Vec::new(),
            has_premultiplied_alpha: false,
        }
    }

    /// Image dimensions.
    #[inline]
    pub fn size(&self) -> ImageSize {
        self.size
    }

    /// Appends a channel, rejecting one whose size differs from the image.
    pub fn push_channel(&mut self, channel: Channel) -> Result<()> {
        let got = channel.size();
        if got != self.size {
            return Err(Error::invalid_dimensions(
                got.width,
                got.height,
                format!("channel '{}' does not match image size {}", channel.name(), self.size),
            ));
        }
        self.channels.push(channel);
        Ok(())
    }

    /// Finds a channel by exact name.
    pub fn channel(&self, name: &str) -> Option<&Channel> {
        self.channels.iter().find(|c| c.name() == name)
    }

    /// Channel names in output order.
    pub fn channel_names(&self) -> Vec<&str> {
        self.channels.iter().map(|c| c.name()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn channel_is_zero_filled() {
        let ch = Channel::new("R", ImageSize::new(3, 2));
        assert_eq!(ch.data(), &[0.0; 6]);
        assert_eq!(ch.size(), ImageSize::new(3, 2));
    }

    #[test]
    fn channel_set_and_get() {
        let mut ch = Channel::new("G", ImageSize::new(3, 2));
        ch.set(2, 1, 7.0);
        assert_eq!(ch.at(2, 1), 7.0);
        assert_eq!(ch.data()[5], 7.0);
        assert_eq!(ch.get(2, 1).unwrap(), 7.0);
        assert!(ch.get(3, 0).unwrap_err().is_bounds_error());
        assert!(ch.get(0, 2).is_err());
    }

    #[test]
    fn rows_mut_are_disjoint_rows() {
        let mut ch = Channel::new("B", ImageSize::new(2, 3));
        for (y, row) in ch.rows_mut().enumerate() {
            assert_eq!(row.len(), 2);
            row.fill(y as f32);
        }
        assert_eq!(ch.data(), &[0.0, 0.0, 1.0, 1.0, 2.0, 2.0]);
    }

    #[test]
    fn pixel_count_overflow_is_detected() {
        let size = ImageSize::new(u32::MAX, u32::MAX);
        if usize::BITS <= 32 {
            assert!(size.checked_pixel_count().is_none());
        } else {
            assert_eq!(
                size.checked_pixel_count(),
                Some((u32::MAX as u64 * u32::MAX as u64) as usize)
            );
        }
        assert!(ImageSize::new(0, 5).is_empty());
        assert!(!ImageSize::new(1, 1).is_empty());
    }

    #[test]
    fn default_channel_names() {
        let size = ImageSize::new(1, 1);
        let names = |n| {
            make_channels(n, size)
                .into_iter()
                .map(|c| c.name().to_string())
                .collect::<Vec<_>>()
        };
        assert_eq!(names(1), ["Y"]);
        assert_eq!(names(3), ["R", "G", "B"]);
        assert_eq!(names(4), ["R", "G", "B", "A"]);
        assert_eq!(names(6), ["R", "G", "B", "A", "4", "5"]);
        assert!(names(0).is_empty());
    }

    #[test]
    fn image_data_rejects_mismatched_channel() {
        let mut image = ImageData::new(ImageSize::new(2, 2));
        image.push_channel(Channel::new("R", ImageSize::new(2, 2))).unwrap();
        let err = image
            .push_channel(Channel::new("G", ImageSize::new(3, 2)))
            .unwrap_err();
        assert!(err.to_string().contains("'G'"));
        assert_eq!(image.channel_names(), ["R"]);
        assert!(image.channel("R").is_some());
        assert!(image.channel("G").is_none());
        assert!(!image.has_premultiplied_alpha);
    }

    #[test]
    fn root_layer_is_anonymous() {
        assert!(Layer::root().is_root());
        assert!(!Layer::new("beauty").is_root());
    }
}
