//! Validated block size.

use std::fmt;
use std::num::NonZeroUsize;
use std::str::FromStr;

use super::error::{BlockError, Result};

/// A strictly positive number of elements per block.
///
/// Every integer that reaches the blocker goes through this type, so a zero
/// or negative size is rejected before any arithmetic happens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BlockSize(NonZeroUsize);

impl BlockSize {
    /// Create a block size, rejecting zero.
    pub fn new(size: usize) -> Result<Self> {
        NonZeroUsize::new(size)
            .map(BlockSize)
            .ok_or_else(|| BlockError::invalid("block_size", "must be greater than zero, got 0"))
    }

    /// The block size as a plain `usize`.
    pub fn get(self) -> usize {
        self.0.get()
    }
}

impl From<NonZeroUsize> for BlockSize {
    fn from(size: NonZeroUsize) -> Self {
        BlockSize(size)
    }
}

impl From<BlockSize> for usize {
    fn from(size: BlockSize) -> Self {
        size.get()
    }
}

impl TryFrom<usize> for BlockSize {
    type Error = BlockError;

    fn try_from(size: usize) -> Result<Self> {
        BlockSize::new(size)
    }
}

impl TryFrom<u32> for BlockSize {
    type Error = BlockError;

    fn try_from(size: u32) -> Result<Self> {
        let size = usize::try_from(size)
            .map_err(|_| BlockError::invalid("block_size", format!("{} does not fit in usize", size)))?;
        BlockSize::new(size)
    }
}

macro_rules! impl_try_from_signed {
    ($($ty:ty),*) => {
        $(
            impl TryFrom<$ty> for BlockSize {
                type Error = BlockError;

                fn try_from(size: $ty) -> Result<Self> {
                    if size <= 0 {
                        return Err(BlockError::invalid(
                            "block_size",
                            format!("must be greater than zero, got {}", size),
                        ));
                    }
                    let size = usize::try_from(size).map_err(|_| {
                        BlockError::invalid("block_size", format!("{} does not fit in usize", size))
                    })?;
                    BlockSize::new(size)
                }
            }
        )*
    };
}

impl_try_from_signed!(i32, i64, isize);

impl FromStr for BlockSize {
    type Err = BlockError;

    /// Parse a signed decimal integer. Negative values parse but are then
    /// rejected, so `"-1"` and `"0"` report the same kind of error.
    fn from_str(s: &str) -> Result<Self> {
        let value: i64 = s.trim().parse().map_err(|e| {
            BlockError::invalid("block_size", format!("`{}` is not an integer: {}", s, e))
        })?;
        BlockSize::try_from(value)
    }
}

impl fmt::Display for BlockSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
