//! # Batch Partitioning
//!
//! Order-preserving parallel map over a slice, split into contiguous,
//! near-equal index ranges; one range per worker.

use core::ops::Range;

use crate::errors::{WPResult, WordPiecerError};

/// Split `0..len` into at most `workers` contiguous ranges of
/// ``ceil(len / workers)`` items; the last range may be short.
pub fn partition(
    len: usize,
    workers: usize,
) -> Vec<Range<usize>> {
    if len == 0 {
        return Vec::new();
    }
    let chunk = len.div_ceil(workers.max(1));
    (0..len)
        .step_by(chunk)
        .map(|start| start..(start + chunk).min(len))
        .collect()
}

/// Map `f` over `items` on up to `num_threads` workers.
///
/// Each worker handles one contiguous range from [`partition`], so
/// `result[i] == f(&items[i])` regardless of the worker count.
///
/// ## Errors
/// [`WordPiecerError::External`] if the worker pool can not be built,
/// or a worker panics.
pub fn parallel_map<I, O, F>(
    items: &[I],
    num_threads: usize,
    f: F,
) -> WPResult<Vec<O>>
where
    I: Sync,
    O: Send,
    F: Fn(&I) -> O + Sync,
{
    let ranges = partition(items.len(), num_threads);
    if ranges.len() <= 1 {
        return Ok(items.iter().map(f).collect());
    }

    let f = &f;
    let work = |range: Range<usize>| items[range].iter().map(f).collect::<Vec<O>>();

    let chunks: Vec<Vec<O>> = {
        cfg_if::cfg_if! {
            if #[cfg(feature = "rayon")] {
                use rayon::prelude::*;

                let pool = rayon::ThreadPoolBuilder::new()
                    .num_threads(ranges.len())
                    .build()
                    .map_err(|err| WordPiecerError::External(err.to_string()))?;

                pool.install(|| ranges.into_par_iter().map(work).collect())
            } else {
                std::thread::scope(|scope| {
                    let handles: Vec<_> = ranges
                        .into_iter()
                        .map(|range| scope.spawn(move || work(range)))
                        .collect();

                    handles
                        .into_iter()
                        .map(|handle| handle.join())
                        .collect::<Result<Vec<_>, _>>()
                })
                .map_err(|_| WordPiecerError::External("batch worker panicked".to_string()))?
            }
        }
    };

    Ok(chunks.into_iter().flatten().collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partition() {
        assert!(partition(0, 4).is_empty());
        assert_eq!(partition(5, 1), vec![0..5]);
        assert_eq!(partition(10, 3), vec![0..4, 4..8, 8..10]);
        assert_eq!(partition(8, 4), vec![0..2, 2..4, 4..6, 6..8]);
        assert_eq!(partition(2, 8), vec![0..1, 1..2]);
        assert_eq!(partition(3, 0), vec![0..3]);
    }

    #[test]
    fn test_partition_covers_input() {
        for len in 0..40 {
            for workers in 1..10 {
                let ranges = partition(len, workers);
                assert!(ranges.len() <= workers);

                let mut cursor = 0;
                for range in &ranges {
                    assert_eq!(range.start, cursor);
                    assert!(range.end > range.start);
                    cursor = range.end;
                }
                assert_eq!(cursor, len);
            }
        }
    }

    #[test]
    fn test_parallel_map_preserves_order() {
        let items: Vec<usize> = (0..103).collect();
        let expected: Vec<String> = items.iter().map(|x| format!("<{x}>")).collect();

        for num_threads in [1, 2, 3, 8, 200] {
            let actual = parallel_map(&items, num_threads, |x| format!("<{x}>")).unwrap();
            assert_eq!(actual, expected, "num_threads={num_threads}");
        }
    }

    #[test]
    fn test_parallel_map_empty() {
        let items: Vec<u8> = Vec::new();
        let actual: Vec<u8> = parallel_map(&items, 4, |x| *x).unwrap();
        assert!(actual.is_empty());
    }
}
