pub mod config;
pub mod core;
pub mod data;
pub mod error;
pub mod indicators;
pub mod logging;
pub mod metrics;
pub mod models;
pub mod signals;

pub use error::{JobError, JobResult};
