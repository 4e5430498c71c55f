// core.rs splits responsibilities into submodules for easier maintenance.
pub mod block;
pub mod chain;
pub mod shared;
pub mod validation;

pub use block::*;
pub use chain::*;
pub use shared::*;
pub use validation::*;
