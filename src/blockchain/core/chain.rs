use crate::error::{ChainError, Result};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::block::Block;
use super::validation::{validate_genesis, validate_successor};

/// Ordered, append-only sequence of blocks; index 0 is the genesis block.
///
/// Growth is value-returning: [`Blockchain::initialize`] and
/// [`Blockchain::append`] hand back the resulting chain revision and never
/// change a revision the caller already holds.
///
/// Deserialized chains are re-verified, so a decoded chain is either empty or
/// a genesis block followed by valid successors.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "BlockList")]
pub struct Blockchain {
    blocks: Vec<Block>,
}

/// Unchecked wire form of [`Blockchain`].
#[derive(Deserialize)]
struct BlockList {
    blocks: Vec<Block>,
}

impl TryFrom<BlockList> for Blockchain {
    type Error = ChainError;

    fn try_from(list: BlockList) -> Result<Self> {
        let chain = Blockchain {
            blocks: list.blocks,
        };
        if !chain.is_empty() {
            chain.verify()?;
        }
        Ok(chain)
    }
}

impl Blockchain {
    /// An empty chain. Call [`Blockchain::initialize`] before anything else.
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds an empty chain with a genesis block.
    ///
    /// A chain that already holds blocks is returned as is.
    pub fn initialize(self) -> Self {
        if !self.blocks.is_empty() {
            return self;
        }

        let genesis = Block::genesis();
        info!(hash = %genesis.hash, "Created genesis block");
        Blockchain {
            blocks: vec![genesis],
        }
    }

    /// Validates `candidate` against the tail and returns the chain with it appended.
    ///
    /// On failure the error names the check that rejected the block and `self`
    /// is left as it was.
    pub fn append(&self, candidate: Block) -> Result<Self> {
        let tail = self.tail()?;
        validate_successor(tail, &candidate)?;

        debug!(index = candidate.index, hash = %candidate.hash, "Appending block");
        let mut blocks = self.blocks.clone();
        blocks.push(candidate);
        Ok(Blockchain { blocks })
    }

    /// The most recently appended block.
    pub fn tail(&self) -> Result<&Block> {
        self.blocks.last().ok_or(ChainError::EmptyChain)
    }

    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    pub fn get(&self, index: usize) -> Option<&Block> {
        self.blocks.get(index)
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Re-verifies the whole chain: the genesis block, then every adjacent pair.
    pub fn verify(&self) -> Result<()> {
        let genesis = self.blocks.first().ok_or(ChainError::EmptyChain)?;
        validate_genesis(genesis)?;

        for pair in self.blocks.windows(2) {
            validate_successor(&pair[0], &pair[1])?;
        }
        Ok(())
    }
}
