//! Block boundary arithmetic.
//!
//! A [`BlockLayout`] describes how an input of `len` elements splits into
//! blocks of `block_size`, without touching the data itself:
//!
//! ```text
//! len = 7, block_size = 3
//! ┌───────┬───────┬───┐
//! │ 0..3  │ 3..6  │6..7│  ← 2 full blocks + tail of 1
//! └───────┴───────┴───┘
//! ```
//!
//! When `len` is an exact multiple of the block size there is no tail, and an
//! empty input has no blocks at all.

use std::ops::Range;

use super::size::BlockSize;

/// Block geometry for an input of a given length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BlockLayout {
    len: usize,
    block_size: BlockSize,
}

impl BlockLayout {
    pub fn new(len: usize, block_size: BlockSize) -> Self {
        Self { len, block_size }
    }

    /// Total number of input elements.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn block_size(&self) -> BlockSize {
        self.block_size
    }

    /// Number of blocks holding exactly `block_size` elements.
    pub fn num_full_blocks(&self) -> usize {
        self.len / self.block_size.get()
    }

    /// Length of the trailing partial block, 0 when there is none.
    pub fn tail_len(&self) -> usize {
        self.len % self.block_size.get()
    }

    /// Total number of blocks, `ceil(len / block_size)`.
    pub fn num_blocks(&self) -> usize {
        self.len.div_ceil(self.block_size.get())
    }

    /// Element range covered by block `index`, or `None` past the last block.
    pub fn block_range(&self, index: usize) -> Option<Range<usize>> {
        if index >= self.num_blocks() {
            return None;
        }
        let start = index * self.block_size.get();
        let end = start.saturating_add(self.block_size.get()).min(self.len);
        Some(start..end)
    }

    /// Iterate the ranges of all blocks in order: the full blocks, then the
    /// tail once if there is one.
    pub fn ranges(&self) -> impl DoubleEndedIterator<Item = Range<usize>> + ExactSizeIterator {
        let layout = *self;
        (0..self.num_blocks()).map(move |i| {
            let start = i * layout.block_size.get();
            start..start.saturating_add(layout.block_size.get()).min(layout.len)
        })
    }

    /// Find the block holding element `position`.
    ///
    /// Returns `(block_index, offset_within_block)`, or `None` when
    /// `position` is past the end of the input.
    pub fn locate(&self, position: usize) -> Option<(usize, usize)> {
        if position >= self.len {
            return None;
        }
        let size = self.block_size.get();
        Some((position / size, position % size))
    }
}
