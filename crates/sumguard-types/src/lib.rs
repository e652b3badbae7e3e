//! Stable data types used across the sumguard workspace.
//!
//! This crate is intentionally boring:
//! - per-file verification outcomes and results
//! - parsed manifest entries
//! - the per-manifest error taxonomy

#![forbid(unsafe_code)]

pub mod error;
pub mod outcome;

pub use error::ManifestError;
pub use outcome::{ManifestEntry, Severity, VerificationOutcome, VerificationResult};
