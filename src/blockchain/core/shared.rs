use crate::error::Result;
use parking_lot::Mutex;
use std::sync::Arc;

use super::block::Block;
use super::chain::Blockchain;

/// A chain shared between threads under a single-writer lock.
///
/// Reading the tail, deriving a block and committing it happen while one lock
/// is held, so two callers can never derive from the same tail.
#[derive(Debug, Clone, Default)]
pub struct SharedChain {
    inner: Arc<Mutex<Blockchain>>,
}

impl SharedChain {
    pub fn new(chain: Blockchain) -> Self {
        Self {
            inner: Arc::new(Mutex::new(chain)),
        }
    }

    /// Seeds the shared chain with a genesis block if it is empty.
    pub fn initialize(&self) {
        let mut chain = self.inner.lock();
        *chain = std::mem::take(&mut *chain).initialize();
    }

    /// Derives a block from the current tail and appends it, atomically.
    pub fn mint_next(&self) -> Result<Block> {
        let mut chain = self.inner.lock();
        let block = Block::create_next(&chain)?;
        *chain = chain.append(block.clone())?;
        Ok(block)
    }

    /// Appends a block built elsewhere; the chain is unchanged on failure.
    pub fn append(&self, candidate: Block) -> Result<()> {
        let mut chain = self.inner.lock();
        *chain = chain.append(candidate)?;
        Ok(())
    }

    /// A copy of the current chain revision.
    pub fn snapshot(&self) -> Blockchain {
        self.inner.lock().clone()
    }

    pub fn len(&self) -> usize {
        self.inner.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.lock().is_empty()
    }
}
