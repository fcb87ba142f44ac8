//! Load, multiply, save, verify.

use std::time::{Duration, Instant};

use tracing::{info, warn};

use crate::codec::{load_matrix, save_matrix};
use crate::config::Config;
use crate::error::Result;
use crate::verify::verify;
use crate::{multiply, multiply_parallel};

/// What a successful run measured.
#[derive(Debug, Clone, PartialEq)]
pub struct RunReport {
    /// Wall time of the multiplication alone
    pub elapsed: Duration,
    pub shape_a: (usize, usize),
    pub shape_b: (usize, usize),
    pub shape_result: (usize, usize),
    /// False when verification was skipped
    pub verified: bool,
}

/// Run the whole pipeline described by `config`.
///
/// The output file is written before verification, so a failed check
/// still leaves the computed product on disk for inspection.
pub fn run(config: &Config) -> Result<RunReport> {
    let a = load_matrix(&config.input_a)?;
    let b = load_matrix(&config.input_b)?;
    info!(shape_a = ?a.shape(), shape_b = ?b.shape(), "inputs loaded");

    let threads = usize::from(config.threads);
    let start = Instant::now();
    let result = if threads > 1 {
        multiply_parallel(&a, &b, threads)?
    } else {
        multiply(&a, &b)?
    };
    let elapsed = start.elapsed();
    info!(elapsed_ms = elapsed.as_secs_f64() * 1000.0, threads, "multiplied");

    save_matrix(&result, &config.output)?;
    info!(path = %config.output.display(), "result written");

    let verified = if config.no_verify {
        warn!("verification skipped");
        false
    } else {
        let expected = load_matrix(&config.reference)?;
        verify(&result, &expected, config.tolerance())?;
        info!(reference = %config.reference.display(), "result matches reference");
        true
    };

    Ok(RunReport {
        elapsed,
        shape_a: a.shape(),
        shape_b: b.shape(),
        shape_result: result.shape(),
        verified,
    })
}
