//! Use case orchestration for sumguard.
//!
//! This crate provides the application layer: the bounded worker pool, the
//! reporter with its configured sinks, and the audit use case that wires
//! discovery, fan-out, and reporting together.
//!
//! The CLI crate depends on this; it only handles argument parsing and the
//! exit code.

#![forbid(unsafe_code)]

mod audit;
mod pool;
mod report;

pub use audit::{run_audit, AuditInput, AuditSummary};
pub use pool::{WorkerPool, DEFAULT_WORKERS};
pub use report::{Reporter, ReporterConfig, DEFAULT_LOG_PATH};
