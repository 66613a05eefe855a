//! Signal derivation and aggregation.

pub mod aggregation;
pub mod engine;

pub use aggregation::*;
pub use engine::SignalEngine;
