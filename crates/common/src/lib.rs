//! Shared kernel for the subscription billing crates.

pub mod types;

pub use types::EntityId;
