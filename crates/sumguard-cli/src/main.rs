//! CLI entry point for sumguard.
//!
//! This module is intentionally thin: it handles argument parsing, reporter
//! setup, and the exit code. All business logic lives in the `sumguard-app`
//! crate.
//!
//! A completed run exits 0 regardless of verification outcomes; mismatches,
//! missing files, and manifest failures are in the log, not the exit code.
//! Only startup errors (bad root, unwritable log) exit non-zero.

use camino::Utf8PathBuf;
use clap::Parser;
use sumguard_app::{run_audit, AuditInput, Reporter, ReporterConfig};
use sumguard_types::Severity;

#[derive(Parser, Debug)]
#[command(
    name = "sumguard",
    version,
    about = "Verify MD5.txt checksum manifests across a directory tree"
)]
struct Cli {
    /// Root directory to scan for MD5.txt manifests.
    root_directory: Utf8PathBuf,

    /// Destination file for persisted records; overwritten at start of run.
    #[arg(long, default_value = sumguard_app::DEFAULT_LOG_PATH)]
    log: Utf8PathBuf,

    /// Worker pool size.
    #[arg(long, default_value_t = sumguard_app::DEFAULT_WORKERS)]
    workers: usize,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let reporter = Reporter::new(&ReporterConfig {
        log_path: cli.log.clone(),
        min_severity: Severity::Info,
    })?;

    let input = AuditInput {
        root: &cli.root_directory,
        workers: cli.workers,
    };
    let summary = run_audit(&input, &reporter)?;
    reporter.note(&format!("Audit complete: {summary}"))?;

    Ok(())
}
