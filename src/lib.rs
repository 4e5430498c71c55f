//! LinkChain - an in-memory, append-only chain of hash-linked blocks
//!
//! Every block carries the SHA-256 digest of its own index, timestamp and
//! predecessor digest, so tampering with any linked field breaks the chain.
//!
//! # Architecture
//!
//! ## Core Chain
//! - [`crypto`] - Block digest computation
//! - [`blockchain`] - Blocks, validation, the chain itself and a shared single-writer wrapper
//!
//! ## Running & Output
//! - [`driver`] - Derive-and-append loop used by the `linkchain` binary
//! - [`display`] - Debug, table and JSON renderings of a chain
//!
//! ## Configuration & Utilities
//! - [`config`] - Configuration management
//! - [`logging`] - Tracing subscriber setup
//! - [`error`] - Error types
//!
//! # Example
//!
//! ```
//! use linkchain::blockchain::{Block, Blockchain};
//!
//! let chain = Blockchain::new().initialize();
//! let next = Block::create_next(&chain)?;
//! let chain = chain.append(next)?;
//! assert_eq!(chain.len(), 2);
//! # Ok::<(), linkchain::error::ChainError>(())
//! ```

#![forbid(unsafe_code)]

// ============================================================================
// Core Chain
// ============================================================================
pub mod blockchain;
pub mod crypto;

// ============================================================================
// Running & Output
// ============================================================================
pub mod display;
pub mod driver;

// ============================================================================
// Configuration & Utilities
// ============================================================================
pub mod config;
pub mod error;
pub mod logging;
