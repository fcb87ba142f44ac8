/// Cache-friendly matrix multiplication using i-k-j loop order.
///
/// Swapping the j and k loops makes the innermost loop walk both B and C
/// with stride 1. Every C cell still receives its `k` products one at a
/// time in increasing `p`, so the rounding is identical to
/// [`matmul_naive_ijk`](super::naive_ijk::matmul_naive_ijk).
///
/// Rows `row_start..row_end` of C are computed; `c` holds only those rows.
/// Pass `0..m` for the whole product.
///
/// # Arguments
///
/// * `a` - Matrix A (m × k), row-major
/// * `b` - Matrix B (k × n), row-major
/// * `c` - Rows `row_start..row_end` of C (m × n), row-major, C += A * B
/// * `n` - Columns of B and C
/// * `k` - Columns of A, rows of B
pub fn matmul_naive_ikj_rows(
    a: &[f64],
    b: &[f64],
    c: &mut [f64],
    n: usize,
    k: usize,
    row_start: usize,
    row_end: usize,
) {
    debug_assert_eq!(c.len(), (row_end - row_start) * n);

    for i in row_start..row_end {
        let c_row = &mut c[(i - row_start) * n..(i - row_start + 1) * n];
        for p in 0..k {
            let a_ip = a[i * k + p];
            let b_row = &b[p * n..(p + 1) * n];
            for (c_ij, b_pj) in c_row.iter_mut().zip(b_row) {
                *c_ij += a_ip * b_pj;
            }
        }
    }
}

/// i-k-j multiplication over the full matrix.
///
/// # Arguments
///
/// * `m` - Rows of A and C
///
/// See [`matmul_naive_ikj_rows`] for the rest.
pub fn matmul_naive_ikj(a: &[f64], b: &[f64], c: &mut [f64], m: usize, n: usize, k: usize) {
    matmul_naive_ikj_rows(a, b, c, n, k, 0, m);
}
