//! Streaming MD5 digest computation.
//!
//! The digest is fed through a fixed-size read buffer so arbitrarily large
//! files hash in constant memory. Reads block the calling thread; callers
//! that want parallelism run this on a worker pool.

#![forbid(unsafe_code)]

use camino::Utf8Path;
use md5::{Digest, Md5};
use std::fs::File;
use std::io::Read;

/// Read-buffer size for streaming digest computation.
const CHUNK_SIZE: usize = 4096;

/// MD5 of the empty input. Useful as a sanity anchor in tests and docs.
pub const EMPTY_MD5: &str = "d41d8cd98f00b204e9800998ecf8427e";

/// Compute the MD5 digest of the file at `path`, returned as a lowercase
/// hex string.
///
/// # Errors
///
/// Returns the underlying I/O error if the file cannot be opened or a read
/// fails mid-stream. No partial digest is ever returned.
pub fn file_md5(path: &Utf8Path) -> std::io::Result<String> {
    let mut file = File::open(path)?;
    let mut hasher = Md5::new();
    let mut buffer = [0u8; CHUNK_SIZE];

    loop {
        let n = file.read(&mut buffer)?;
        if n == 0 {
            break;
        }
        hasher.update(&buffer[..n]);
    }

    Ok(hex::encode(hasher.finalize()))
}

/// Compute the MD5 digest of an in-memory byte slice as lowercase hex.
///
/// Used by tests and by callers that already hold the content.
pub fn bytes_md5(data: &[u8]) -> String {
    hex::encode(Md5::digest(data))
}
