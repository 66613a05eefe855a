//! Core application primitives (run context, runner)

pub mod context;
pub mod runner;

pub use context::*;
pub use runner::*;
