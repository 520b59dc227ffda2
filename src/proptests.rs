//! Property-based tests for the blocking laws.
//!
//! - Concatenating the blocks reproduces the input
//! - Every block but the last is full; the last holds the remainder
//! - The block count is `ceil(len / block_size)`
//! - Re-blocking the concatenation gives the same boundaries
//! - The lazy iterator agrees with the eager operation

use proptest::prelude::*;

use crate::blocker::{block, block_owned, block_str, blocks, BlockLayout, BlockSize, Blocker, Boundary};

proptest! {
    #[test]
    fn concatenation_reproduces_input(
        data in prop::collection::vec(any::<u8>(), 0..512),
        size in 1usize..64,
    ) {
        let joined: Vec<u8> = block(&data, size).unwrap().concat();
        prop_assert_eq!(joined, data);
    }

    #[test]
    fn all_but_last_block_are_full(
        data in prop::collection::vec(any::<i32>(), 1..512),
        size in 1usize..64,
    ) {
        let out = block(&data, size).unwrap();
        let (last, full) = out.split_last().unwrap();
        for b in full {
            prop_assert_eq!(b.len(), size);
        }
        let expected_last = match data.len() % size {
            0 => size,
            tail => tail,
        };
        prop_assert_eq!(last.len(), expected_last);
        prop_assert!(out.iter().all(|b| !b.is_empty()));
    }

    #[test]
    fn block_count_is_ceiling(
        len in 0usize..2048,
        size in 1usize..128,
    ) {
        let data = vec![0u8; len];
        let out = block(&data, size).unwrap();
        prop_assert_eq!(out.len(), len.div_ceil(size));
        prop_assert_eq!(
            out.len(),
            BlockLayout::new(len, BlockSize::new(size).unwrap()).num_blocks()
        );
    }

    #[test]
    fn reblocking_is_idempotent(
        data in prop::collection::vec(any::<u8>(), 0..512),
        size in 1usize..64,
    ) {
        let first = block_owned(&data, size).unwrap();
        let rejoined = first.concat();
        let second = block_owned(&rejoined, size).unwrap();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn iterator_matches_block(
        data in prop::collection::vec(any::<u16>(), 0..256),
        size in 1usize..32,
    ) {
        let eager = block(&data, size).unwrap();
        let lazy: Vec<&[u16]> = blocks(&data, size).unwrap().collect();
        prop_assert_eq!(&eager, &lazy);

        let mut reversed: Vec<&[u16]> = blocks(&data, size).unwrap().rev().collect();
        reversed.reverse();
        prop_assert_eq!(&eager, &reversed);
    }

    #[test]
    fn locate_points_into_holding_block(
        len in 1usize..1024,
        size in 1usize..64,
        pos_seed in any::<usize>(),
    ) {
        let layout = BlockLayout::new(len, BlockSize::new(size).unwrap());
        let pos = pos_seed % len;
        let (idx, offset) = layout.locate(pos).unwrap();
        let range = layout.block_range(idx).unwrap();
        prop_assert_eq!(range.start + offset, pos);
        prop_assert!(range.contains(&pos));
    }

    #[test]
    fn str_blocks_rejoin(
        text in ".{0,200}",
        size in 1usize..16,
    ) {
        let out = block_str(&text, size).unwrap();
        prop_assert_eq!(out.concat(), text.clone());
        for b in out.iter().take(out.len().saturating_sub(1)) {
            prop_assert_eq!(b.chars().count(), size);
        }
    }

    #[test]
    fn legacy_mode_still_rejoins(
        data in prop::collection::vec(any::<u8>(), 0..256),
        size in 1usize..32,
    ) {
        // Legacy output only adds empty blocks; the content is the same.
        let legacy = Blocker::new(size).unwrap().with_boundary(Boundary::Legacy).block(&data);
        prop_assert_eq!(legacy.concat(), data.clone());
        let non_empty: Vec<&[u8]> = legacy.into_iter().filter(|b| !b.is_empty()).collect();
        prop_assert_eq!(non_empty, block(&data, size).unwrap());
    }
}
