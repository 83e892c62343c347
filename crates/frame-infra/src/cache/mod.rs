//! Selection cache implementations.

mod memory;

pub use memory::InMemorySelectionCache;
