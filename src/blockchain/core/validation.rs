use crate::crypto::is_hex_digest;
use crate::error::{ChainError, Result, ValidationFailure};

use super::block::Block;

/// Checks that `candidate` may follow `tail`.
///
/// Sequencing, linkage and integrity are checked in that order and the first
/// failure is returned.
pub fn validate_successor(
    tail: &Block,
    candidate: &Block,
) -> std::result::Result<(), ValidationFailure> {
    let expected_index = tail.index.checked_add(1);
    if expected_index != Some(candidate.index) {
        return Err(ValidationFailure::Sequencing {
            expected: expected_index,
            actual: candidate.index,
        });
    }

    if candidate.prev_hash != tail.hash {
        return Err(ValidationFailure::Linkage {
            expected: tail.hash.clone(),
            actual: candidate.prev_hash.clone(),
        });
    }

    let recomputed = candidate.calculate_hash();
    if recomputed != candidate.hash {
        return Err(ValidationFailure::Integrity {
            expected: recomputed,
            actual: candidate.hash.clone(),
        });
    }

    Ok(())
}

pub fn is_valid(tail: &Block, candidate: &Block) -> bool {
    validate_successor(tail, candidate).is_ok()
}

/// Checks the structure and integrity of a chain's first block.
pub fn validate_genesis(block: &Block) -> Result<()> {
    if block.index != 0 {
        return Err(ChainError::InvalidGenesis(format!(
            "expected index 0, got {}",
            block.index
        )));
    }

    if !block.prev_hash.is_empty() {
        return Err(ChainError::InvalidGenesis(format!(
            "expected empty previous hash, got {}",
            block.prev_hash
        )));
    }

    if !is_hex_digest(&block.hash) {
        return Err(ChainError::InvalidGenesis(format!(
            "malformed hash '{}'",
            block.hash
        )));
    }

    let recomputed = block.calculate_hash();
    if recomputed != block.hash {
        return Err(ChainError::InvalidGenesis(format!(
            "hash mismatch. Expected {}, but got {}.",
            recomputed, block.hash
        )));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pair() -> (Block, Block) {
        let tail = Block::with_timestamp(0, "2024-01-01T00:00:00Z", "");
        let next = Block::with_timestamp(1, "2024-01-01T00:00:01Z", tail.hash.clone());
        (tail, next)
    }

    #[test]
    fn test_valid_successor() {
        let (tail, next) = pair();
        assert!(validate_successor(&tail, &next).is_ok());
        assert!(is_valid(&tail, &next));
    }

    #[test]
    fn test_wrong_index_fails_sequencing() {
        let (tail, mut next) = pair();
        next.index = 5;
        assert_eq!(
            validate_successor(&tail, &next),
            Err(ValidationFailure::Sequencing {
                expected: Some(1),
                actual: 5
            })
        );
    }

    #[test]
    fn test_sequencing_is_checked_before_linkage() {
        let (tail, mut next) = pair();
        next.index = 9;
        next.prev_hash = "bogus".to_string();
        assert!(matches!(
            validate_successor(&tail, &next),
            Err(ValidationFailure::Sequencing { .. })
        ));
    }

    #[test]
    fn test_wrong_prev_hash_fails_linkage() {
        let (tail, mut next) = pair();
        next.prev_hash = "00".repeat(32);
        match validate_successor(&tail, &next) {
            Err(ValidationFailure::Linkage { expected, actual }) => {
                assert_eq!(expected, tail.hash);
                assert_eq!(actual, "00".repeat(32));
            }
            other => panic!("expected linkage failure, got {:?}", other),
        }
    }

    #[test]
    fn test_tampered_timestamp_fails_integrity() {
        let (tail, mut next) = pair();
        next.timestamp = "1999-12-31T23:59:59Z".to_string();
        assert!(matches!(
            validate_successor(&tail, &next),
            Err(ValidationFailure::Integrity { .. })
        ));
        assert!(!is_valid(&tail, &next));
    }

    #[test]
    fn test_tail_at_max_index_has_no_successor() {
        let tail = Block::with_timestamp(u64::MAX, "2024-01-01T00:00:00Z", "");
        let candidate = Block::with_timestamp(0, "2024-01-01T00:00:01Z", tail.hash.clone());

        assert_eq!(
            validate_successor(&tail, &candidate),
            Err(ValidationFailure::Sequencing {
                expected: None,
                actual: 0
            })
        );
        assert!(!is_valid(&tail, &candidate));
    }

    #[test]
    fn test_genesis_with_malformed_hash_is_rejected() {
        let (mut genesis, _) = pair();
        genesis.hash = "not-a-hash".to_string();
        assert!(validate_genesis(&genesis)
            .unwrap_err()
            .to_string()
            .contains("malformed hash"));
    }

    #[test]
    fn test_genesis_validation() {
        let (genesis, next) = pair();
        assert!(validate_genesis(&genesis).is_ok());
        assert!(matches!(
            validate_genesis(&next),
            Err(ChainError::InvalidGenesis(_))
        ));

        let mut tampered = genesis.clone();
        tampered.hash = "ff".repeat(32);
        assert!(validate_genesis(&tampered)
            .unwrap_err()
            .to_string()
            .contains("hash mismatch"));
    }
}
