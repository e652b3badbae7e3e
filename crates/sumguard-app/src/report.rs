use anyhow::Context;
use camino::Utf8PathBuf;
use std::fs::File;
use std::io::Write;
use std::sync::Mutex;
use sumguard_types::{ManifestError, Severity, VerificationResult};
use time::macros::format_description;
use time::OffsetDateTime;

/// Default log destination, overwritten at the start of every run.
pub const DEFAULT_LOG_PATH: &str = "md5_check.log";

/// Reporter configuration, fixed at construction.
#[derive(Clone, Debug)]
pub struct ReporterConfig {
    /// Persistent sink; truncated when the reporter is built.
    pub log_path: Utf8PathBuf,
    /// Records below this severity are dropped from both sinks.
    pub min_severity: Severity,
}

impl Default for ReporterConfig {
    fn default() -> Self {
        Self {
            log_path: Utf8PathBuf::from(DEFAULT_LOG_PATH),
            min_severity: Severity::Info,
        }
    }
}

/// Emits one timestamped record per verification result or manifest failure
/// to the log file and the console, identically.
///
/// Built once at process start and passed by reference to whoever reports.
/// Record writes serialize under one lock, so concurrent callers never
/// interleave partial lines, and the file sink is flushed per record so both
/// sinks stay in step.
pub struct Reporter {
    min_severity: Severity,
    log: Mutex<File>,
}

impl Reporter {
    /// Open (truncating) the log sink and build the reporter.
    pub fn new(config: &ReporterConfig) -> anyhow::Result<Self> {
        let log = File::create(&config.log_path)
            .with_context(|| format!("create log file {}", config.log_path))?;
        Ok(Self {
            min_severity: config.min_severity,
            log: Mutex::new(log),
        })
    }

    /// Emit one record for a verified file.
    pub fn verification(&self, result: &VerificationResult) -> anyhow::Result<()> {
        let outcome = result.outcome;
        let message = if outcome.is_ok() {
            format!("OK: {}", result.path)
        } else {
            format!("FAIL: {} ({})", result.path, outcome.status())
        };
        self.record(outcome.severity(), &message)
    }

    /// Emit one record for a manifest whose processing failed.
    pub fn manifest_failure(&self, error: &ManifestError) -> anyhow::Result<()> {
        self.record(Severity::Error, &format!("Manifest failed: {error}"))
    }

    /// Emit an informational record (run banner, closing summary).
    pub fn note(&self, message: &str) -> anyhow::Result<()> {
        self.record(Severity::Info, message)
    }

    fn record(&self, severity: Severity, message: &str) -> anyhow::Result<()> {
        if severity < self.min_severity {
            return Ok(());
        }

        let format = format_description!(
            "[year]-[month]-[day] [hour]:[minute]:[second],[subsecond digits:3]"
        );
        let timestamp = OffsetDateTime::now_utc()
            .format(&format)
            .context("format record timestamp")?;
        let line = format!("{timestamp} - {severity} - {message}");

        // A record writer that panicked mid-write poisons the lock; keep
        // logging anyway, the sink state is still a whole number of lines.
        let mut log = self.log.lock().unwrap_or_else(|e| e.into_inner());
        writeln!(log, "{line}").context("write log record")?;
        log.flush().context("flush log record")?;
        eprintln!("{line}");
        Ok(())
    }
}
