//! Core blocking module

pub mod error;
pub mod layout;
pub mod size;
mod channels;
mod iter;

use std::ops::Range;

use log::{debug, trace};

pub use channels::block_channels;
pub use error::{BlockError, Result};
pub use iter::Blocks;
pub use layout::BlockLayout;
pub use size::BlockSize;

/// What an empty input blocks into.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum EmptyInput {
    /// No blocks at all.
    #[default]
    NoBlocks,
    /// A single block holding nothing.
    SingleEmptyBlock,
}

/// How block boundaries are emitted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Boundary {
    /// Full blocks, then the tail exactly once.
    #[default]
    Exact,
    /// Older `block_signals` emission: `len / size + 1` passes, and an extra
    /// slice starting at the end of the current block on every pass that
    /// reaches the end of the input. This yields trailing empty blocks (`"abcdef"` by 3 gives
    /// `["abc", "def", "", "", ""]`).
    ///
    /// Only meant for matching recorded output during a migration. The
    /// [`EmptyInput`] setting is ignored in this mode.
    Legacy,
}

/// Splits sequences into contiguous blocks of a fixed size.
///
/// A `Blocker` is a plain value: it holds the block size and the two
/// conventions that decide edge-case output, and never retains any input.
///
/// # Example
/// ```
/// use block_signals::Blocker;
///
/// let blocker = Blocker::new(3).unwrap();
/// assert_eq!(blocker.block_str("abcdefg"), vec!["abc", "def", "g"]);
/// assert_eq!(blocker.block(b"abcdef"), vec![&b"abc"[..], &b"def"[..]]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Blocker {
    block_size: BlockSize,
    empty_input: EmptyInput,
    boundary: Boundary,
}

impl Blocker {
    /// Create a blocker with the default conventions.
    ///
    /// # Errors
    /// Returns [`BlockError::InvalidArgument`] if `block_size` is zero.
    pub fn new(block_size: usize) -> Result<Self> {
        Ok(Self::from_size(BlockSize::new(block_size)?))
    }

    pub fn from_size(block_size: BlockSize) -> Self {
        Self {
            block_size,
            empty_input: EmptyInput::default(),
            boundary: Boundary::default(),
        }
    }

    pub fn with_empty_input(mut self, empty_input: EmptyInput) -> Self {
        self.empty_input = empty_input;
        self
    }

    pub fn with_boundary(mut self, boundary: Boundary) -> Self {
        self.boundary = boundary;
        self
    }

    pub fn block_size(&self) -> BlockSize {
        self.block_size
    }

    pub fn empty_input(&self) -> EmptyInput {
        self.empty_input
    }

    pub fn boundary(&self) -> Boundary {
        self.boundary
    }

    /// Block geometry for an input of `len` elements.
    pub fn layout(&self, len: usize) -> BlockLayout {
        BlockLayout::new(len, self.block_size)
    }

    /// Element ranges of the blocks for an input of `len` elements, with the
    /// configured conventions applied.
    pub fn ranges(&self, len: usize) -> Vec<Range<usize>> {
        let ranges = match self.boundary {
            Boundary::Exact if len == 0 => match self.empty_input {
                EmptyInput::NoBlocks => Vec::new(),
                EmptyInput::SingleEmptyBlock => vec![0..0],
            },
            Boundary::Exact => self.layout(len).ranges().collect(),
            Boundary::Legacy => legacy_ranges(len, self.block_size.get()),
        };
        debug!(
            "Blocking {} elements by {}: {} blocks ({:?})",
            len,
            self.block_size,
            ranges.len(),
            self.boundary
        );
        ranges
    }

    /// Split `input` into borrowed blocks.
    pub fn block<'a, T>(&self, input: &'a [T]) -> Vec<&'a [T]> {
        self.ranges(input.len())
            .into_iter()
            .map(|r| &input[r])
            .collect()
    }

    /// Split `input` into owned blocks.
    pub fn block_owned<T: Clone>(&self, input: &[T]) -> Vec<Vec<T>> {
        self.block(input).into_iter().map(<[T]>::to_vec).collect()
    }

    /// Split `input` into blocks of `block_size` characters.
    ///
    /// Blocks are cut on `char` boundaries, so a block never splits a UTF-8
    /// code point; its byte length may exceed the block size.
    pub fn block_str<'a>(&self, input: &'a str) -> Vec<&'a str> {
        // Byte offset of every char start, plus the end of the string.
        let offsets: Vec<usize> = input
            .char_indices()
            .map(|(i, _)| i)
            .chain(std::iter::once(input.len()))
            .collect();
        trace!("{} bytes decode to {} chars", input.len(), offsets.len() - 1);

        self.ranges(offsets.len() - 1)
            .into_iter()
            .map(|r| &input[offsets[r.start]..offsets[r.end]])
            .collect()
    }
}

fn legacy_ranges(len: usize, size: usize) -> Vec<Range<usize>> {
    let mut ranges = Vec::with_capacity(len / size + 2);
    for i in 0..=len / size {
        let start = i.saturating_mul(size).min(len);
        let end = (i + 1).saturating_mul(size);
        ranges.push(start..end.min(len));
        if end >= len {
            ranges.push(end.min(len)..len);
        }
    }
    ranges
}

/// Split `input` into contiguous blocks of `block_size` elements.
///
/// Every block but the last holds exactly `block_size` elements; the last one
/// holds `input.len() % block_size` when that is nonzero. An empty input
/// yields no blocks. Concatenating the blocks reproduces `input`.
///
/// # Errors
/// Returns [`BlockError::InvalidArgument`] if `block_size` is zero. Use
/// [`BlockSize::try_from`] to validate signed sizes.
///
/// # Example
/// ```
/// let blocks = block_signals::block(&[1, 2, 3, 4, 5, 6, 7], 3).unwrap();
/// assert_eq!(blocks, vec![&[1, 2, 3][..], &[4, 5, 6][..], &[7][..]]);
/// ```
pub fn block<T>(input: &[T], block_size: usize) -> Result<Vec<&[T]>> {
    Ok(Blocker::new(block_size)?.block(input))
}

/// Like [`block`], but copies every block into its own `Vec`.
pub fn block_owned<T: Clone>(input: &[T], block_size: usize) -> Result<Vec<Vec<T>>> {
    Ok(Blocker::new(block_size)?.block_owned(input))
}

/// Like [`block`], counting `block_size` in characters of `input`.
pub fn block_str(input: &str, block_size: usize) -> Result<Vec<&str>> {
    Ok(Blocker::new(block_size)?.block_str(input))
}

/// Lazily iterate the blocks of `input`.
///
/// # Errors
/// Returns [`BlockError::InvalidArgument`] if `block_size` is zero.
pub fn blocks<T>(input: &[T], block_size: usize) -> Result<Blocks<'_, T>> {
    Ok(Blocks::new(input, BlockSize::new(block_size)?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn legacy_matches_recorded_output() {
        let legacy = Blocker::new(3).unwrap().with_boundary(Boundary::Legacy);

        assert_eq!(legacy.block_str("abcdefg"), vec!["abc", "def", "g", ""]);
        assert_eq!(legacy.block_str("abcdef"), vec!["abc", "def", "", "", ""]);
        assert_eq!(legacy.block_str(""), vec!["", ""]);
        assert_eq!(legacy.block_str("ab"), vec!["ab", ""]);
    }

    #[test]
    fn legacy_ignores_empty_input_setting() {
        let legacy = Blocker::new(3)
            .unwrap()
            .with_boundary(Boundary::Legacy)
            .with_empty_input(EmptyInput::NoBlocks);
        assert_eq!(legacy.ranges(0), vec![0..0, 0..0]);
    }

    #[test]
    fn single_empty_block_convention() {
        let blocker = Blocker::new(4)
            .unwrap()
            .with_empty_input(EmptyInput::SingleEmptyBlock);

        let empty: &[u8] = &[];
        assert_eq!(blocker.block(empty), vec![empty]);
        assert_eq!(blocker.block_str(""), vec![""]);
        // Only the empty case is affected.
        assert_eq!(blocker.block(&[1, 2, 3, 4]), vec![&[1, 2, 3, 4][..]]);
    }

    #[test]
    fn block_str_keeps_code_points_whole() {
        let blocks = block_str("héllo wörld", 4).unwrap();
        assert_eq!(blocks, vec!["héll", "o wö", "rld"]);
    }

    #[test]
    fn huge_block_size_does_not_overflow() {
        let data = [1u8, 2, 3];
        assert_eq!(block(&data, usize::MAX).unwrap(), vec![&data[..]]);
        let legacy = Blocker::new(usize::MAX).unwrap().with_boundary(Boundary::Legacy);
        let empty: &[u8] = &[];
        assert_eq!(legacy.block(&data), vec![&data[..], empty]);
    }
}
