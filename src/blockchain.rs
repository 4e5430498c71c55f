// Thin re-export module: implementation lives in `blockchain/core.rs`, split into
// block construction, validation, chain management and shared access.

pub mod core;
pub use core::*;
