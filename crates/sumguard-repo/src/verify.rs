use camino::Utf8Path;
use sumguard_types::{ManifestError, VerificationOutcome, VerificationResult};

use crate::manifest::parse_manifest;

/// Verify every entry of one manifest.
///
/// Each entry's filename is resolved against the manifest's containing
/// directory, never taken verbatim. Classification per entry:
/// - resolved path missing: `FileNotFound`, digest never computed
/// - recomputed MD5 equals the expected digest (exact, case-sensitive): `Ok`
/// - otherwise: `DigestMismatch`
///
/// The returned results preserve manifest line order. An unreadable
/// manifest, a malformed line, or a read failure on an existing listed file
/// fails the whole job; partial results are discarded.
pub fn verify_manifest(manifest_path: &Utf8Path) -> Result<Vec<VerificationResult>, ManifestError> {
    let text = std::fs::read_to_string(manifest_path).map_err(|source| ManifestError::Io {
        path: manifest_path.to_owned(),
        source,
    })?;

    let entries = parse_manifest(manifest_path, &text)?;
    let manifest_dir = manifest_path.parent().unwrap_or(Utf8Path::new("."));

    let mut results = Vec::with_capacity(entries.len());
    for entry in entries {
        let resolved = manifest_dir.join(&entry.filename);

        let outcome = if !resolved.exists() {
            VerificationOutcome::FileNotFound
        } else {
            let actual =
                sumguard_digest::file_md5(&resolved).map_err(|source| ManifestError::Io {
                    path: resolved.clone(),
                    source,
                })?;
            if actual == entry.expected_md5 {
                VerificationOutcome::Ok
            } else {
                VerificationOutcome::DigestMismatch
            }
        };

        results.push(VerificationResult::new(resolved, outcome));
    }

    Ok(results)
}

#[cfg(test)]
mod tests {
    use super::*;
    use camino::Utf8PathBuf;
    use sumguard_digest::{bytes_md5, EMPTY_MD5};
    use tempfile::TempDir;

    fn utf8_root(tmp: &TempDir) -> Utf8PathBuf {
        Utf8PathBuf::from_path_buf(tmp.path().to_path_buf()).expect("utf8 path")
    }

    fn write_file(path: &Utf8Path, contents: &[u8]) {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("create parent");
        }
        std::fs::write(path, contents).expect("write file");
    }

    #[test]
    fn matching_digest_is_ok() {
        let tmp = TempDir::new().expect("temp dir");
        let root = utf8_root(&tmp);
        write_file(&root.join("empty.txt"), b"");
        write_file(
            &root.join("MD5.txt"),
            format!("{EMPTY_MD5} empty.txt\n").as_bytes(),
        );

        let results = verify_manifest(&root.join("MD5.txt")).expect("verify");
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].path, root.join("empty.txt"));
        assert_eq!(results[0].outcome, VerificationOutcome::Ok);
    }

    #[test]
    fn changed_content_is_a_mismatch() {
        let tmp = TempDir::new().expect("temp dir");
        let root = utf8_root(&tmp);
        write_file(&root.join("data.bin"), b"original");
        let recorded = bytes_md5(b"original");
        write_file(&root.join("MD5.txt"), format!("{recorded} data.bin\n").as_bytes());
        write_file(&root.join("data.bin"), b"tampered");

        let results = verify_manifest(&root.join("MD5.txt")).expect("verify");
        assert_eq!(results[0].outcome, VerificationOutcome::DigestMismatch);
    }

    #[test]
    fn digest_comparison_is_case_sensitive() {
        let tmp = TempDir::new().expect("temp dir");
        let root = utf8_root(&tmp);
        write_file(&root.join("data.bin"), b"payload");
        let recorded = bytes_md5(b"payload").to_uppercase();
        write_file(&root.join("MD5.txt"), format!("{recorded} data.bin\n").as_bytes());

        let results = verify_manifest(&root.join("MD5.txt")).expect("verify");
        assert_eq!(results[0].outcome, VerificationOutcome::DigestMismatch);
    }

    #[test]
    fn missing_file_is_reported_not_hashed() {
        let tmp = TempDir::new().expect("temp dir");
        let root = utf8_root(&tmp);
        write_file(
            &root.join("MD5.txt"),
            format!("{EMPTY_MD5} missing.bin\n").as_bytes(),
        );

        let results = verify_manifest(&root.join("MD5.txt")).expect("verify");
        assert_eq!(results[0].path, root.join("missing.bin"));
        assert_eq!(results[0].outcome, VerificationOutcome::FileNotFound);
    }

    #[test]
    fn entries_resolve_against_manifest_directory() {
        let tmp = TempDir::new().expect("temp dir");
        let root = utf8_root(&tmp);
        write_file(&root.join("sub/empty.txt"), b"");
        write_file(
            &root.join("sub/MD5.txt"),
            format!("{EMPTY_MD5} empty.txt\n").as_bytes(),
        );
        // A same-named file at the root must not be picked up.
        write_file(&root.join("empty.txt"), b"not empty");

        let results = verify_manifest(&root.join("sub/MD5.txt")).expect("verify");
        assert_eq!(results[0].path, root.join("sub/empty.txt"));
        assert_eq!(results[0].outcome, VerificationOutcome::Ok);
    }

    #[test]
    fn results_preserve_line_order() {
        let tmp = TempDir::new().expect("temp dir");
        let root = utf8_root(&tmp);
        write_file(&root.join("b.bin"), b"bb");
        write_file(&root.join("a.bin"), b"aa");
        let manifest = format!(
            "{} b.bin\n{} a.bin\n{EMPTY_MD5} gone.bin\n",
            bytes_md5(b"bb"),
            bytes_md5(b"aa"),
        );
        write_file(&root.join("MD5.txt"), manifest.as_bytes());

        let results = verify_manifest(&root.join("MD5.txt")).expect("verify");
        let names: Vec<_> = results.iter().map(|r| r.path.file_name().unwrap()).collect();
        assert_eq!(names, vec!["b.bin", "a.bin", "gone.bin"]);
    }

    #[test]
    fn malformed_line_fails_the_whole_manifest() {
        let tmp = TempDir::new().expect("temp dir");
        let root = utf8_root(&tmp);
        write_file(&root.join("empty.txt"), b"");
        let manifest = format!("{EMPTY_MD5} empty.txt\nonly-one-token\n");
        write_file(&root.join("MD5.txt"), manifest.as_bytes());

        let err = verify_manifest(&root.join("MD5.txt")).unwrap_err();
        match err {
            ManifestError::Parse { line, .. } => assert_eq!(line, 2),
            other => panic!("expected parse error, got {other}"),
        }
    }

    #[test]
    fn unreadable_manifest_is_a_job_failure() {
        let tmp = TempDir::new().expect("temp dir");
        let root = utf8_root(&tmp);

        let err = verify_manifest(&root.join("MD5.txt")).unwrap_err();
        match err {
            ManifestError::Io { path, .. } => assert_eq!(path, root.join("MD5.txt")),
            other => panic!("expected io error, got {other}"),
        }
    }
}
