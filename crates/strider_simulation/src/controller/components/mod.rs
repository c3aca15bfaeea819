//! Controller components

pub mod config;
pub mod context;

#[cfg(test)]
mod context_tests;

// Re-export all components
pub use config::*;
pub use context::*;
