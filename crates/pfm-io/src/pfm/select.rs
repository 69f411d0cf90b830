//! Channel selection and result assembly.

use crate::IoResult;
use pfm_core::{Channel, ImageData, ImageSize, Layer, matches_fuzzy};

/// Filters and orders `channels` by `selector`.
///
/// An empty selector keeps every channel in decoded order. Otherwise only
/// matching channels are kept, sorted by match rank and then by decoded
/// index.
pub(crate) fn select_channels(channels: Vec<Channel>, selector: &str) -> Vec<Channel> {
    if selector.is_empty() {
        return channels;
    }

    let mut matches: Vec<(usize, usize)> = channels
        .iter()
        .enumerate()
        .filter_map(|(index, ch)| matches_fuzzy(ch.name(), selector).map(|rank| (rank, index)))
        .collect();
    matches.sort_unstable();

    let mut slots: Vec<Option<Channel>> = channels.into_iter().map(Some).collect();
    matches
        .into_iter()
        .filter_map(|(_, index)| slots[index].take())
        .collect()
}

/// Builds the load result: the selected channels under one root layer.
pub(crate) fn assemble(size: ImageSize, channels: Vec<Channel>) -> IoResult<ImageData> {
    let mut image = ImageData::new(size);
    for channel in channels {
        image.push_channel(channel)?;
    }
    // PFM has no layers; everything lives in the anonymous root
    image.layers.push(Layer::root());
    image.has_premultiplied_alpha = false;
    Ok(image)
}
