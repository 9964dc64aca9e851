//! JSON-file persistence for bot configuration and the instruction payload

pub mod store;

// Re-exports for convenience
pub use store::{ConfigRecord, ConfigStore, Instruction, StoreError};
