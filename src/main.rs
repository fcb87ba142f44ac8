//! Command-line driver: multiply two matrix files and check the product.

use std::process::ExitCode;

use clap::Parser;
use matfile::Config;
use matfile::driver::run;
use tracing::error;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("matfile=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = Config::parse();

    match run(&config) {
        Ok(report) => {
            println!("Elapsed: {:.6} s", report.elapsed.as_secs_f64());
            println!("Matrix A: {:?}", report.shape_a);
            println!("Matrix B: {:?}", report.shape_b);
            println!("Result:   {:?}", report.shape_result);
            ExitCode::SUCCESS
        }
        Err(err) => {
            error!(%err, "run failed");
            ExitCode::FAILURE
        }
    }
}
