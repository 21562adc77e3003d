//! # Thread Utilities

#[cfg(feature = "rayon")]
use core::str::FromStr;
#[cfg(feature = "rayon")]
use std::env;
use std::thread;

/// The search list of environment variables that Rayon uses to control parallelism.
#[cfg(feature = "rayon")]
const RAYON_VARS: &[&str] = &["RAYON_NUM_THREADS", "RAYON_RS_NUM_CPUS"];

/// Get the max parallelism available.
///
/// When `rayon` is enabled, will scan over `RAYON_VARS`.
pub fn est_max_parallelism() -> usize {
    let default = || {
        thread::available_parallelism()
            .map(|n| n.get())
            .unwrap_or(1)
    };

    #[cfg(feature = "rayon")]
    for name in RAYON_VARS {
        if let Some(x @ 1..) = env::var(name).ok().and_then(|s| usize::from_str(&s).ok()) {
            return x;
        }
    }

    default()
}

/// Resolve a requested worker count against a workload of `items` inputs.
///
/// `0` requests [`est_max_parallelism`]. The result is never more than
/// `items`, and never less than `1`.
pub fn resolve_num_threads(
    requested: usize,
    items: usize,
) -> usize {
    let requested = match requested {
        0 => est_max_parallelism(),
        n => n,
    };
    requested.min(items).max(1)
}
