//! Editor operations over a block sequence.
//!
//! The sequence order is the page layout, so every operation here is defined
//! in terms of which relative order it preserves. Out-of-range indices are
//! reported as errors rather than panics; the editor surfaces them as a
//! stale-view refresh.

use thiserror::Error;

use crate::domain::block::Block;
use crate::domain::id::BlockIdGenerator;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SequenceError {
    #[error("index {index} is out of bounds for a sequence of {len} blocks")]
    OutOfBounds { index: usize, len: usize },
}

fn check_index(blocks: &[Block], index: usize) -> Result<(), SequenceError> {
    if index >= blocks.len() {
        return Err(SequenceError::OutOfBounds {
            index,
            len: blocks.len(),
        });
    }
    Ok(())
}

/// Move the block at `from` so it ends up at index `to`. All other blocks
/// retain their relative order.
pub fn move_block(blocks: &mut Vec<Block>, from: usize, to: usize) -> Result<(), SequenceError> {
    check_index(blocks, from)?;
    check_index(blocks, to)?;
    let block = blocks.remove(from);
    blocks.insert(to, block);
    Ok(())
}

/// Deep-copy the block at `index` and insert the copy directly after it,
/// under a fresh id.
pub fn duplicate_block(
    blocks: &mut Vec<Block>,
    index: usize,
    ids: &BlockIdGenerator,
) -> Result<(), SequenceError> {
    check_index(blocks, index)?;
    let mut copy = blocks[index].clone();
    copy.id = ids.next_id();
    blocks.insert(index + 1, copy);
    Ok(())
}

pub fn remove_block(blocks: &mut Vec<Block>, index: usize) -> Result<Block, SequenceError> {
    check_index(blocks, index)?;
    Ok(blocks.remove(index))
}

/// Insert at `index`, shifting the tail; `index == len` appends.
pub fn insert_block(
    blocks: &mut Vec<Block>,
    index: usize,
    block: Block,
) -> Result<(), SequenceError> {
    if index > blocks.len() {
        return Err(SequenceError::OutOfBounds {
            index,
            len: blocks.len(),
        });
    }
    blocks.insert(index, block);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::block::{BlockBody, TextBlock};

    fn text_block(id: &str) -> Block {
        Block::new(
            id,
            BlockBody::Text(TextBlock {
                heading: None,
                text: format!("body {id}"),
            }),
        )
    }

    fn ids_of(blocks: &[Block]) -> Vec<&str> {
        blocks.iter().map(|b| b.id.as_str()).collect()
    }

    #[test]
    fn move_preserves_relative_order_of_others() {
        let mut blocks = vec![
            text_block("a"),
            text_block("b"),
            text_block("c"),
            text_block("d"),
        ];
        move_block(&mut blocks, 0, 2).expect("move");
        assert_eq!(ids_of(&blocks), ["b", "c", "a", "d"]);

        move_block(&mut blocks, 3, 0).expect("move back");
        assert_eq!(ids_of(&blocks), ["d", "b", "c", "a"]);
    }

    #[test]
    fn move_rejects_out_of_bounds() {
        let mut blocks = vec![text_block("a")];
        let err = move_block(&mut blocks, 1, 0).expect_err("out of bounds");
        assert_eq!(err, SequenceError::OutOfBounds { index: 1, len: 1 });
    }

    #[test]
    fn duplicate_gets_fresh_id_and_same_body() {
        let ids = BlockIdGenerator::new();
        let mut blocks = vec![text_block("orig"), text_block("tail")];
        duplicate_block(&mut blocks, 0, &ids).expect("duplicate");

        assert_eq!(blocks.len(), 3);
        assert_ne!(blocks[1].id, blocks[0].id);
        assert_eq!(blocks[1].body, blocks[0].body);
        assert_eq!(blocks[2].id, "tail");
    }

    #[test]
    fn insert_at_len_appends() {
        let mut blocks = vec![text_block("a")];
        insert_block(&mut blocks, 1, text_block("b")).expect("append");
        assert_eq!(ids_of(&blocks), ["a", "b"]);
    }
}
