//! Run configuration.
//!
//! Every path has a default so that running the binary with no arguments
//! in a directory holding `matrix1.txt`, `matrix2.txt` and `result.txt`
//! does the whole job.

use std::path::PathBuf;

use clap::Parser;

use crate::verify::Tolerance;

/// Multiply two text matrices and check the product against a reference.
#[derive(Parser, Debug, Clone, PartialEq)]
#[command(author, version, about, long_about = None)]
pub struct Config {
    /// Left operand
    #[arg(long, default_value = "matrix1.txt")]
    pub input_a: PathBuf,

    /// Right operand
    #[arg(long, default_value = "matrix2.txt")]
    pub input_b: PathBuf,

    /// Where the product is written
    #[arg(long, default_value = "result_matrix.txt")]
    pub output: PathBuf,

    /// Expected product
    #[arg(long, default_value = "result.txt")]
    pub reference: PathBuf,

    /// Maximum worker threads for the multiplication
    #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u16).range(1..))]
    pub threads: u16,

    /// Relative tolerance for verification
    #[arg(long, default_value_t = Tolerance::DEFAULT_RTOL, value_parser = parse_tolerance)]
    pub rtol: f64,

    /// Absolute tolerance for verification
    #[arg(long, default_value_t = Tolerance::DEFAULT_ATOL, value_parser = parse_tolerance)]
    pub atol: f64,

    /// Skip comparing against the reference file
    #[arg(long)]
    pub no_verify: bool,
}

/// Tolerances must be finite and non-negative.
fn parse_tolerance(s: &str) -> Result<f64, String> {
    let value: f64 = s.parse().map_err(|_| format!("`{}` is not a number", s))?;
    if value.is_finite() && value >= 0.0 {
        Ok(value)
    } else {
        Err(format!("`{}` must be finite and non-negative", s))
    }
}

impl Config {
    /// Config with explicit paths and default everything else.
    pub fn new(
        input_a: impl Into<PathBuf>,
        input_b: impl Into<PathBuf>,
        output: impl Into<PathBuf>,
        reference: impl Into<PathBuf>,
    ) -> Self {
        Self {
            input_a: input_a.into(),
            input_b: input_b.into(),
            output: output.into(),
            reference: reference.into(),
            threads: 1,
            rtol: Tolerance::DEFAULT_RTOL,
            atol: Tolerance::DEFAULT_ATOL,
            no_verify: false,
        }
    }

    /// Verification bound built from `rtol` and `atol`.
    pub fn tolerance(&self) -> Tolerance {
        Tolerance::new(self.rtol, self.atol)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new("matrix1.txt", "matrix2.txt", "result_matrix.txt", "result.txt")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_cli() {
        let parsed = Config::try_parse_from(["matfile"]).unwrap();
        assert_eq!(parsed, Config::default());
    }

    #[test]
    fn test_flags() {
        let parsed = Config::try_parse_from([
            "matfile",
            "--input-a",
            "a.txt",
            "--output",
            "out.txt",
            "--threads",
            "4",
            "--rtol",
            "1e-3",
            "--no-verify",
        ])
        .unwrap();
        assert_eq!(parsed.input_a, PathBuf::from("a.txt"));
        assert_eq!(parsed.input_b, PathBuf::from("matrix2.txt"));
        assert_eq!(parsed.output, PathBuf::from("out.txt"));
        assert_eq!(parsed.threads, 4);
        assert_eq!(parsed.tolerance(), Tolerance::new(1e-3, 1e-8));
        assert!(parsed.no_verify);
    }

    #[test]
    fn test_zero_threads_rejected() {
        assert!(Config::try_parse_from(["matfile", "--threads", "0"]).is_err());
    }

    #[test]
    fn test_bad_tolerance_rejected() {
        for bad in ["-1e-5", "NaN", "inf", "abc"] {
            assert!(
                Config::try_parse_from(["matfile", "--rtol", bad]).is_err(),
                "rtol {} accepted",
                bad
            );
            assert!(
                Config::try_parse_from(["matfile", "--atol", bad]).is_err(),
                "atol {} accepted",
                bad
            );
        }
        let zero = Config::try_parse_from(["matfile", "--rtol", "0", "--atol", "0"]).unwrap();
        assert_eq!(zero.tolerance(), Tolerance::exact());
    }

    #[test]
    fn test_cli_definition() {
        use clap::CommandFactory;
        Config::command().debug_assert();
    }
}
