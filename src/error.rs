//! Error types for LinkChain

use thiserror::Error;

/// Why a candidate block was refused as the successor of the chain tail.
///
/// Variants are listed in the order the validator checks them.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationFailure {
    /// `expected` is `None` when the tail index has no successor.
    #[error("sequencing: {}", describe_sequencing(.expected, .actual))]
    Sequencing { expected: Option<u64>, actual: u64 },

    #[error("linkage: expected previous hash {expected}, got {actual}")]
    Linkage { expected: String, actual: String },

    #[error("integrity: recomputed hash {expected} does not match stored hash {actual}")]
    Integrity { expected: String, actual: String },
}

fn describe_sequencing(expected: &Option<u64>, actual: &u64) -> String {
    match expected {
        Some(expected) => format!("expected index {}, got {}", expected, actual),
        None => format!("tail index is at its maximum, got {}", actual),
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChainError {
    #[error("Chain is empty; initialize it before deriving or appending blocks")]
    EmptyChain,

    #[error("Block index {0} has no successor")]
    IndexOverflow(u64),

    #[error("Invalid block: {0}")]
    InvalidBlock(ValidationFailure),

    #[error("Invalid genesis block: {0}")]
    InvalidGenesis(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(String),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl ChainError {
    /// The validation failure behind an `InvalidBlock` error, if any.
    pub fn validation_failure(&self) -> Option<&ValidationFailure> {
        match self {
            ChainError::InvalidBlock(failure) => Some(failure),
            _ => None,
        }
    }
}

impl From<ValidationFailure> for ChainError {
    fn from(failure: ValidationFailure) -> Self {
        ChainError::InvalidBlock(failure)
    }
}

impl From<std::io::Error> for ChainError {
    fn from(err: std::io::Error) -> Self {
        ChainError::Io(err.to_string())
    }
}

impl From<toml::de::Error> for ChainError {
    fn from(err: toml::de::Error) -> Self {
        ChainError::Config(err.to_string())
    }
}

impl From<serde_json::Error> for ChainError {
    fn from(err: serde_json::Error) -> Self {
        ChainError::Serialization(err.to_string())
    }
}

/// Convenience alias used across the crate
pub type Result<T> = std::result::Result<T, ChainError>;
