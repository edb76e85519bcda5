//! Leibniz π benchmark CLI
//!
//! Sums the Leibniz series over a fixed term count, then prints the
//! elapsed summation time followed by the estimate. Diagnostics go to
//! stderr: `RUST_LOG` for tracing output, `LEIBNIZ_REPORT` for a run report.

mod report;

use clap::Parser as ClapParser;
use leibniz_core::{
    DEFAULT_TERMS, EstimateError, estimate_pi, format_elapsed, format_estimate,
};
use std::process;
use tracing::info;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::LevelFilter;

#[derive(ClapParser)]
#[command(name = "leibniz")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Estimate pi with the Leibniz series and time the summation", long_about = None)]
struct Cli {}

fn main() {
    let _cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::WARN.into())
                .from_env_lossy(),
        )
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run() -> Result<(), EstimateError> {
    let estimate = estimate_pi(DEFAULT_TERMS)?;

    println!("{}", format_elapsed(estimate.elapsed));
    println!("{}", format_estimate(estimate.value));

    info!(
        terms = estimate.terms,
        elapsed_secs = estimate.elapsed.as_secs_f64(),
        abs_error = estimate.abs_error(),
        "estimate complete"
    );

    report::emit(&estimate);
    Ok(())
}
