//! The derive-and-append loop behind the `linkchain` binary.

use crate::blockchain::{Block, Blockchain};
use crate::error::{ChainError, Result};
use tracing::{info, warn};

/// Outcome of a driver run.
#[derive(Debug, Clone)]
pub struct RunReport {
    pub chain: Blockchain,
    pub appended: usize,
    /// Failed rounds, as `(round, error)`.
    pub failures: Vec<(usize, ChainError)>,
}

/// Initializes `chain` and runs `rounds` iterations of derive-then-append.
///
/// A failed round is logged and recorded, and the loop moves on; the chain
/// simply does not grow that round.
pub fn run(chain: Blockchain, rounds: usize) -> RunReport {
    run_with(chain, rounds, Block::create_next)
}

/// Like [`run`], but blocks come from `derive` instead of [`Block::create_next`].
pub fn run_with<F>(chain: Blockchain, rounds: usize, mut derive: F) -> RunReport
where
    F: FnMut(&Blockchain) -> Result<Block>,
{
    let mut chain = chain.initialize();
    let mut appended = 0;
    let mut failures = Vec::new();

    for round in 0..rounds {
        let result = derive(&chain).and_then(|block| chain.append(block));
        match result {
            Ok(next) => {
                chain = next;
                appended += 1;
            }
            Err(e) => {
                warn!(round, error = %e, "Block rejected");
                failures.push((round, e));
            }
        }
    }

    info!(
        length = chain.len(),
        appended,
        failed = failures.len(),
        "Finished building chain"
    );

    RunReport {
        chain,
        appended,
        failures,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ValidationFailure;

    #[test]
    fn test_default_run_builds_five_blocks() {
        let report = run(Blockchain::new(), 4);
        assert_eq!(report.chain.len(), 5);
        assert_eq!(report.appended, 4);
        assert!(report.failures.is_empty());
        assert!(report.chain.verify().is_ok());
    }

    #[test]
    fn test_zero_rounds_leaves_genesis_only() {
        let report = run(Blockchain::new(), 0);
        assert_eq!(report.chain.len(), 1);
        assert_eq!(report.appended, 0);
    }

    #[test]
    fn test_failed_round_does_not_stop_the_loop() {
        let mut calls = 0;
        let report = run_with(Blockchain::new(), 4, |chain| {
            calls += 1;
            let mut block = Block::create_next(chain)?;
            if calls == 2 {
                block.prev_hash = "deadbeef".to_string();
            }
            Ok(block)
        });

        assert_eq!(report.chain.len(), 4);
        assert_eq!(report.appended, 3);
        assert_eq!(report.failures.len(), 1);

        let (round, err) = &report.failures[0];
        assert_eq!(*round, 1);
        assert!(matches!(
            err.validation_failure(),
            Some(ValidationFailure::Linkage { .. })
        ));
        assert!(report.chain.verify().is_ok());
    }

    #[test]
    fn test_run_continues_an_existing_chain() {
        let first = run(Blockchain::new(), 2);
        let genesis = first.chain.blocks()[0].clone();

        let second = run(first.chain, 3);
        assert_eq!(second.chain.len(), 6);
        assert_eq!(second.chain.blocks()[0], genesis);
    }
}
