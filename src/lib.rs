//! # block-signals
//!
//! Partitions an in-memory sequence (bytes, samples, characters, any slice)
//! into fixed-size contiguous blocks for block-based processing.
//!
//! Every block but the last holds exactly `block_size` elements, the last one
//! holds the remainder, and concatenating the blocks reproduces the input.
//!
//! ```
//! assert_eq!(block_signals::block_str("abcdefg", 3).unwrap(), vec!["abc", "def", "g"]);
//! assert_eq!(block_signals::block_str("abcdef", 3).unwrap(), vec!["abc", "def"]);
//! assert!(block_signals::block_str("", 3).unwrap().is_empty());
//! ```
pub mod blocker;

#[cfg(test)]
mod proptests;

// Re-export the main types for convenience
pub use blocker::{
    block, block_channels, block_owned, block_str, blocks, BlockError, BlockLayout, BlockSize,
    Blocker, Blocks, Boundary, EmptyInput, Result,
};
