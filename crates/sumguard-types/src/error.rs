use camino::Utf8PathBuf;
use thiserror::Error;

/// Failure of one manifest job.
///
/// A `ManifestError` fails that manifest atomically: any results already
/// accumulated for it are discarded, and sibling manifests are unaffected.
#[derive(Debug, Error)]
pub enum ManifestError {
    /// The manifest itself, or a listed file mid-digest, could not be read.
    #[error("read {path}: {source}")]
    Io {
        path: Utf8PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A manifest line did not split into exactly `<md5> <filename>`.
    #[error("{path}:{line}: expected `<md5> <filename>`, found {tokens} token(s)")]
    Parse {
        path: Utf8PathBuf,
        /// 1-based line number of the offending line.
        line: usize,
        tokens: usize,
    },
}

impl ManifestError {
    /// The manifest this error belongs to.
    pub fn manifest_path(&self) -> &Utf8PathBuf {
        match self {
            ManifestError::Io { path, .. } | ManifestError::Parse { path, .. } => path,
        }
    }
}
