//! Multiply matrices stored as text files.
//!
//! Reads two whitespace-delimited matrices, multiplies them, writes the
//! product in the same format, and checks it against a reference file.
//!
//! Every output cell is summed left to right in `k`, with no FMA and no
//! reordering, so results are reproducible against a reference computed
//! the same way. The parallel path only splits work across output rows.
//!
//! ## Usage
//!
//! ```
//! use matfile::{codec, multiply};
//!
//! let a = codec::parse_matrix("1 2\n3 4\n").unwrap();
//! let b = codec::parse_matrix("5 6\n7 8\n").unwrap();
//!
//! let c = multiply(&a, &b).unwrap();
//! assert_eq!(codec::to_text(&c), "19 22\n43 50\n");
//! ```
//!
//! For large matrices, use the multi-threaded version:
//!
//! ```
//! use matfile::{multiply, multiply_parallel, Matrix};
//!
//! let a = Matrix::filled(256, 256, 0.5);
//! let b = Matrix::identity(256);
//!
//! assert_eq!(multiply_parallel(&a, &b, 4).unwrap(), multiply(&a, &b).unwrap());
//! ```

pub mod codec;
pub mod config;
pub mod driver;
pub mod error;
pub mod matrix;
pub mod threaded;
pub mod verify;

pub use config::Config;
pub use error::{MatfileError, Result, ValidationError};
pub use matrix::Matrix;
pub use matrix::naive_ijk::matmul_naive_ijk;
pub use matrix::naive_ikj::matmul_naive_ikj;
pub use verify::Tolerance;

fn check_dimensions(a: &Matrix, b: &Matrix) -> Result<()> {
    if a.cols() != b.rows() {
        return Err(MatfileError::DimensionMismatch {
            left: a.shape(),
            right: b.shape(),
        });
    }
    Ok(())
}

/// Matrix product `A * B`.
///
/// A is m×k, B is k×n, the result is m×n. When k is zero every cell is
/// `0.0`.
///
/// # Errors
///
/// [`MatfileError::DimensionMismatch`] if `a.cols() != b.rows()`.
pub fn multiply(a: &Matrix, b: &Matrix) -> Result<Matrix> {
    check_dimensions(a, b)?;
    let (m, k, n) = (a.rows(), a.cols(), b.cols());

    let mut c = vec![0.0; m * n];
    matmul_naive_ikj(a.as_slice(), b.as_slice(), &mut c, m, n, k);
    Ok(Matrix::from_vec(m, n, c))
}

/// Same as [`multiply`] but uses up to `num_threads` threads.
///
/// Thread count adapts to matrix size - small matrices use fewer threads
/// because the overhead isn't worth it. The result is bit-identical to
/// [`multiply`].
pub fn multiply_parallel(a: &Matrix, b: &Matrix, num_threads: usize) -> Result<Matrix> {
    check_dimensions(a, b)?;
    let (m, k, n) = (a.rows(), a.cols(), b.cols());

    let mut c = vec![0.0; m * n];
    threaded::naive_ikj_mt::matmul_naive_ikj_mt(
        a.as_slice(),
        b.as_slice(),
        &mut c,
        m,
        n,
        k,
        num_threads,
    );
    Ok(Matrix::from_vec(m, n, c))
}
