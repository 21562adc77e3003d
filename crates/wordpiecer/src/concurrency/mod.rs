//! # Concurrency Utilities

pub mod batch;
pub mod threads;

pub use batch::parallel_map;
pub use threads::{est_max_parallelism, resolve_num_threads};
