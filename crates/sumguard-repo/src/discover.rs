use anyhow::Context;
use camino::{Utf8Path, Utf8PathBuf};
use std::path::PathBuf;
use walkdir::WalkDir;

/// Fixed manifest filename matched during discovery. Case-sensitive.
pub const MANIFEST_FILE_NAME: &str = "MD5.txt";

/// Discover every manifest file under `root`.
///
/// Behavior:
/// - recursive walk of the whole tree; unreadable entries are skipped
/// - only files named exactly `MD5.txt` are collected
/// - non-UTF-8 paths are skipped
/// - output is sorted, so repeated runs over an unchanged tree agree
pub fn discover_manifests(root: &Utf8Path) -> anyhow::Result<Vec<Utf8PathBuf>> {
    let metadata = std::fs::metadata(root).with_context(|| format!("read {root}"))?;
    if !metadata.is_dir() {
        anyhow::bail!("not a directory: {root}");
    }

    let mut out: Vec<Utf8PathBuf> = WalkDir::new(root)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file() && e.file_name() == MANIFEST_FILE_NAME)
        .filter_map(|e| pathbuf_to_utf8(e.path().to_path_buf()))
        .collect();

    // Stable order.
    out.sort();
    out.dedup();

    Ok(out)
}

fn pathbuf_to_utf8(path: PathBuf) -> Option<Utf8PathBuf> {
    Utf8PathBuf::from_path_buf(path).ok()
}
