//! Filesystem adapters: discover manifests, parse them, verify listed files.
//!
//! This crate is allowed to do filesystem IO. It knows nothing about worker
//! pools or reporting; the application layer owns the fan-out and the sinks.

#![forbid(unsafe_code)]

mod discover;
mod manifest;
mod verify;

pub use discover::{discover_manifests, MANIFEST_FILE_NAME};
pub use manifest::parse_manifest;
pub use verify::verify_manifest;
