use camino::Utf8PathBuf;
use std::fmt;

/// Severity is intentionally small: it maps cleanly to log levels.
///
/// Ordered so a minimum-severity floor can be expressed as `>=`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Severity {
    Info,
    Error,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Info => write!(f, "INFO"),
            Severity::Error => write!(f, "ERROR"),
        }
    }
}

/// One parsed manifest line: an expected MD5 digest and the filename it
/// covers, relative to the manifest's containing directory.
///
/// Line order within a manifest is preserved for reporting.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ManifestEntry {
    /// Lowercase hex digest as written in the manifest. Compared verbatim
    /// (case-sensitive) against the recomputed digest.
    pub expected_md5: String,
    /// Relative filename token from the manifest line. Never resolved
    /// verbatim; always joined onto the manifest's directory.
    pub filename: String,
}

/// Classification of a single verified file.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum VerificationOutcome {
    /// Recomputed digest matches the manifest's expected digest.
    Ok,
    /// File exists but its content hashes to a different digest.
    DigestMismatch,
    /// The resolved path does not exist; no digest was computed.
    FileNotFound,
}

impl VerificationOutcome {
    /// Human-readable status string used in failure records.
    pub fn status(self) -> &'static str {
        match self {
            VerificationOutcome::Ok => "OK",
            VerificationOutcome::DigestMismatch => "MD5 mismatch",
            VerificationOutcome::FileNotFound => "File not found",
        }
    }

    pub fn severity(self) -> Severity {
        match self {
            VerificationOutcome::Ok => Severity::Info,
            VerificationOutcome::DigestMismatch | VerificationOutcome::FileNotFound => {
                Severity::Error
            }
        }
    }

    pub fn is_ok(self) -> bool {
        matches!(self, VerificationOutcome::Ok)
    }
}

/// The unit handed from the verifier to the reporter: one resolved file path
/// and what verification concluded about it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VerificationResult {
    /// Manifest directory joined with the entry's relative filename.
    pub path: Utf8PathBuf,
    pub outcome: VerificationOutcome,
}

impl VerificationResult {
    pub fn new(path: Utf8PathBuf, outcome: VerificationOutcome) -> Self {
        Self { path, outcome }
    }
}
