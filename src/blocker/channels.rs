//! Multi-channel blocking.
//!
//! Block processors for planar audio take one slice per channel and expect
//! every channel cut at the same sample boundaries. A *frame* here is one
//! block index across all channels.

use log::debug;

use super::error::{BlockError, Result};
use super::Blocker;

impl Blocker {
    /// Cut every channel at the same boundaries.
    ///
    /// Frame `k` of the result holds block `k` of each channel, in channel
    /// order. No channels gives no frames.
    ///
    /// # Errors
    /// Returns [`BlockError::InvalidArgument`] if the channels differ in length.
    pub fn block_channels<'a, T>(&self, channels: &[&'a [T]]) -> Result<Vec<Vec<&'a [T]>>> {
        let Some(first) = channels.first() else {
            return Ok(Vec::new());
        };
        let len = first.len();
        if let Some((idx, channel)) = channels.iter().enumerate().find(|(_, c)| c.len() != len) {
            return Err(BlockError::invalid(
                "channels",
                format!(
                    "channel {} has {} elements, expected {} like channel 0",
                    idx,
                    channel.len(),
                    len
                ),
            ));
        }

        let frames: Vec<Vec<&'a [T]>> = self
            .ranges(len)
            .into_iter()
            .map(|r| channels.iter().map(|c| &c[r.clone()]).collect())
            .collect();
        debug!("{} channels blocked into {} frames", channels.len(), frames.len());
        Ok(frames)
    }
}

/// Cut equal-length channels into frames of `block_size` elements each.
///
/// # Errors
/// Returns [`BlockError::InvalidArgument`] if `block_size` is zero or the
/// channels differ in length.
///
/// # Example
/// ```
/// use block_signals::block_channels;
///
/// let left = [0.1_f32, 0.2, 0.3];
/// let right = [1.1_f32, 1.2, 1.3];
/// let frames = block_channels(&[&left[..], &right[..]], 2).unwrap();
///
/// assert_eq!(frames.len(), 2);
/// assert_eq!(frames[1], vec![&left[2..], &right[2..]]);
/// ```
pub fn block_channels<'a, T>(channels: &[&'a [T]], block_size: usize) -> Result<Vec<Vec<&'a [T]>>> {
    Blocker::new(block_size)?.block_channels(channels)
}
