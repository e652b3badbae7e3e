use camino::{Utf8Path, Utf8PathBuf};
use std::fmt;
use sumguard_types::VerificationOutcome;

use crate::pool::WorkerPool;
use crate::report::Reporter;

/// Input for the audit use case.
#[derive(Clone, Debug)]
pub struct AuditInput<'a> {
    /// Root of the tree to scan for manifests.
    pub root: &'a Utf8Path,
    /// Worker pool size; clamped to at least 1.
    pub workers: usize,
}

/// Outcome counts for a completed run.
///
/// Purely informational: the run already logged every record, and the counts
/// deliberately do not feed the process exit code.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AuditSummary {
    pub manifests: usize,
    pub ok: usize,
    pub mismatched: usize,
    pub missing: usize,
    pub failed_manifests: usize,
}

impl AuditSummary {
    pub fn is_clean(&self) -> bool {
        self.mismatched == 0 && self.missing == 0 && self.failed_manifests == 0
    }
}

impl fmt::Display for AuditSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} manifest(s): {} ok, {} mismatched, {} missing, {} manifest failure(s)",
            self.manifests, self.ok, self.mismatched, self.missing, self.failed_manifests
        )
    }
}

/// Run the audit use case: discover manifests, verify them on the pool,
/// report every result and failure as jobs complete.
///
/// Results arrive in completion order across manifests; within one manifest
/// they keep line order. A failed manifest is reported and counted without
/// touching its siblings. Only discovery and reporter errors abort the run.
pub fn run_audit(input: &AuditInput<'_>, reporter: &Reporter) -> anyhow::Result<AuditSummary> {
    let manifests: Vec<Utf8PathBuf> = sumguard_repo::discover_manifests(input.root)?;
    let pool = WorkerPool::new(input.workers)?;

    let mut summary = AuditSummary {
        manifests: manifests.len(),
        ..AuditSummary::default()
    };

    for (_manifest, outcome) in pool.run(manifests, |m| sumguard_repo::verify_manifest(m)) {
        match outcome {
            Ok(results) => {
                for result in &results {
                    match result.outcome {
                        VerificationOutcome::Ok => summary.ok += 1,
                        VerificationOutcome::DigestMismatch => summary.mismatched += 1,
                        VerificationOutcome::FileNotFound => summary.missing += 1,
                    }
                    reporter.verification(result)?;
                }
            }
            Err(error) => {
                summary.failed_manifests += 1;
                reporter.manifest_failure(&error)?;
            }
        }
    }

    Ok(summary)
}
