//! Lazy, borrowing iteration over blocks.

use std::iter::FusedIterator;

use super::layout::BlockLayout;
use super::size::BlockSize;

/// Iterator over the blocks of a slice.
///
/// Yields the same blocks as [`block`](crate::block) without allocating the
/// outer vector. Full blocks come first, then the tail exactly once.
///
/// Created by [`blocks()`](crate::blocks).
#[derive(Debug, Clone)]
pub struct Blocks<'a, T> {
    remaining: &'a [T],
    block_size: BlockSize,
}

impl<'a, T> Blocks<'a, T> {
    pub(crate) fn new(input: &'a [T], block_size: BlockSize) -> Self {
        Self {
            remaining: input,
            block_size,
        }
    }

    /// Elements that have not been yielded yet, from either end.
    pub fn remainder(&self) -> &'a [T] {
        self.remaining
    }

    /// Layout of the part of the input still to be yielded.
    pub fn layout(&self) -> BlockLayout {
        BlockLayout::new(self.remaining.len(), self.block_size)
    }
}

impl<'a, T> Iterator for Blocks<'a, T> {
    type Item = &'a [T];

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining.is_empty() {
            return None;
        }
        let take = self.block_size.get().min(self.remaining.len());
        let (head, rest) = self.remaining.split_at(take);
        self.remaining = rest;
        Some(head)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.layout().num_blocks();
        (n, Some(n))
    }
}

impl<'a, T> DoubleEndedIterator for Blocks<'a, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.remaining.is_empty() {
            return None;
        }
        // The last block is the tail when there is one, a full block otherwise.
        let take = match self.layout().tail_len() {
            0 => self.block_size.get(),
            tail => tail,
        };
        let (rest, last) = self.remaining.split_at(self.remaining.len() - take);
        self.remaining = rest;
        Some(last)
    }
}

impl<T> ExactSizeIterator for Blocks<'_, T> {}

impl<T> FusedIterator for Blocks<'_, T> {}
