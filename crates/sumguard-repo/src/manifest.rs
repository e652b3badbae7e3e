use camino::Utf8Path;
use sumguard_types::{ManifestEntry, ManifestError};

/// Parse manifest text into entries.
///
/// Each non-empty line must split on whitespace into exactly two tokens:
/// `<md5> <filename>`. Entry order follows line order. Any other token count
/// fails the manifest with a `Parse` error carrying the 1-based line number;
/// per the atomic-failure contract, callers discard the whole manifest's
/// results on error.
pub fn parse_manifest(manifest_path: &Utf8Path, text: &str) -> Result<Vec<ManifestEntry>, ManifestError> {
    let mut entries = Vec::new();

    for (index, raw) in text.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() {
            continue;
        }

        let mut tokens = line.split_whitespace();
        let (Some(expected_md5), Some(filename), None) =
            (tokens.next(), tokens.next(), tokens.next())
        else {
            let tokens = line.split_whitespace().count();
            return Err(ManifestError::Parse {
                path: manifest_path.to_owned(),
                line: index + 1,
                tokens,
            });
        };

        entries.push(ManifestEntry {
            expected_md5: expected_md5.to_string(),
            filename: filename.to_string(),
        });
    }

    Ok(entries)
}
