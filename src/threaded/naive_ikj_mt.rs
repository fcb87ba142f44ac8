//! Multi-threaded i-k-j multiplication.

use crate::matrix::naive_ikj::matmul_naive_ikj_rows;
use std::thread;
use tracing::debug;

/// Multi-threaded matrix multiplication using the i-k-j kernel.
///
/// Splits rows of C into contiguous bands, one per thread, using scoped
/// threads over disjoint `chunks_mut` of `c`. Thread count adapts based on
/// matrix size:
/// - < 100M FLOPs: 1 thread
/// - < 300M FLOPs: 2 threads
/// - Otherwise: up to `num_threads`
///
/// # Arguments
///
/// * `num_threads` - Maximum threads (actual may be fewer for small matrices)
pub fn matmul_naive_ikj_mt(
    a: &[f64],
    b: &[f64],
    c: &mut [f64],
    m: usize,
    n: usize,
    k: usize,
    num_threads: usize,
) {
    let effective_threads = choose_thread_count(m, n, k, num_threads);

    if effective_threads <= 1 || n == 0 {
        matmul_naive_ikj_rows(a, b, c, n, k, 0, m);
        return;
    }

    let rows_per_thread = m.div_ceil(effective_threads);
    debug!(effective_threads, rows_per_thread, "splitting rows");

    thread::scope(|s| {
        for (tid, band) in c.chunks_mut(rows_per_thread * n).enumerate() {
            let start_row = tid * rows_per_thread;
            let end_row = start_row + band.len() / n;
            s.spawn(move || matmul_naive_ikj_rows(a, b, band, n, k, start_row, end_row));
        }
    });
}

fn choose_thread_count(m: usize, n: usize, k: usize, max_threads: usize) -> usize {
    let flops = 2.0 * (m * n * k) as f64;

    const SINGLE_THREAD_THRESHOLD: f64 = 100_000_000.0;
    const TWO_THREAD_THRESHOLD: f64 = 300_000_000.0;

    let optimal_threads = if flops < SINGLE_THREAD_THRESHOLD {
        1
    } else if flops < TWO_THREAD_THRESHOLD {
        2
    } else {
        max_threads
    };

    let threads_by_rows = (m / 64).max(1);

    optimal_threads.min(threads_by_rows).min(max_threads).max(1)
}
