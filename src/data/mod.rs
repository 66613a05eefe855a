//! Input tables: loading real files and generating synthetic ones.

pub mod loader;
pub mod synthetic;

pub use loader::load_table;
pub use synthetic::{bars_to_table, generate_random_walk, write_bars, SyntheticBar};
