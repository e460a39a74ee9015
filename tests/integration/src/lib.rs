//! Integration test utilities for the gallery server
//!
//! Spawns the real router on a local port, backed either by in-memory
//! repositories or by PostgreSQL, with a mocked image provider.

pub mod fixtures;
pub mod memory;

pub use fixtures::*;
pub use helpers::*;
pub use memory::*;
