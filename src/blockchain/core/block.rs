use crate::crypto::calculate_hash;
use crate::error::{ChainError, Result};
use chrono::SecondsFormat;
use serde::{Deserialize, Serialize};

use super::chain::Blockchain;

/// One link in the chain.
///
/// `hash` is computed once, at construction, over `index`, `timestamp` and
/// `prev_hash`. Recomputing it is only ever done to re-verify a block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Block {
    pub index: u64,
    pub timestamp: String,
    pub prev_hash: String,
    pub hash: String,
}

impl Block {
    /// Builds a block from explicit fields and seals it with its hash.
    pub fn with_timestamp(index: u64, timestamp: impl Into<String>, prev_hash: impl Into<String>) -> Self {
        let timestamp = timestamp.into();
        let prev_hash = prev_hash.into();
        let hash = calculate_hash(index, &timestamp, &prev_hash);
        Block {
            index,
            timestamp,
            prev_hash,
            hash,
        }
    }

    /// The first block of a chain: index 0 and no predecessor.
    pub fn genesis() -> Self {
        Self::with_timestamp(0, current_timestamp(), "")
    }

    /// Derives the successor of the chain's tail, stamped with the current time.
    ///
    /// The chain itself is left untouched; appending is a separate step.
    pub fn create_next(chain: &Blockchain) -> Result<Self> {
        let tail = chain.tail()?;
        let index = tail
            .index
            .checked_add(1)
            .ok_or(ChainError::IndexOverflow(tail.index))?;
        Ok(Self::with_timestamp(
            index,
            current_timestamp(),
            tail.hash.clone(),
        ))
    }

    /// Recomputes the digest from the block's current fields.
    pub fn calculate_hash(&self) -> String {
        calculate_hash(self.index, &self.timestamp, &self.prev_hash)
    }

    pub fn is_genesis(&self) -> bool {
        self.index == 0 && self.prev_hash.is_empty()
    }
}

/// Wall-clock snapshot used as a block timestamp (RFC 3339, UTC, nanoseconds).
pub fn current_timestamp() -> String {
    chrono::Utc::now().to_rfc3339_opts(SecondsFormat::Nanos, true)
}
