//! Directory scanning for GPX input files

use crate::{MergeError, Result};
use std::path::{Path, PathBuf};

/// List the `.gpx` files directly inside `dir`
///
/// The scan is non-recursive and the extension match is case-sensitive
/// (`track.GPX` is not picked up). Results are sorted lexicographically so
/// that merge output does not depend on the OS directory-listing order.
///
/// # Errors
/// Returns [`MergeError::DirectoryNotFound`] when `dir` does not exist or is
/// not a directory.
pub fn scan_gpx_files(dir: &Path) -> Result<Vec<PathBuf>> {
    if !dir.is_dir() {
        return Err(MergeError::DirectoryNotFound {
            path: dir.to_path_buf(),
        });
    }

    let mut files = Vec::new();
    for entry in std::fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_file() && path.extension().is_some_and(|ext| ext == "gpx") {
            files.push(path);
        }
    }

    files.sort();
    tracing::debug!(count = files.len(), dir = %dir.display(), "scanned input directory");
    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_missing_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope");

        let result = scan_gpx_files(&missing);
        assert!(matches!(
            result,
            Err(MergeError::DirectoryNotFound { path }) if path == missing
        ));
    }

    #[test]
    fn test_file_path_is_not_a_directory() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("a.gpx");
        fs::write(&file, "").unwrap();

        assert!(matches!(
            scan_gpx_files(&file),
            Err(MergeError::DirectoryNotFound { .. })
        ));
    }

    #[test]
    fn test_filters_by_extension_case_sensitively() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("a.gpx"), "").unwrap();
        fs::write(dir.path().join("b.GPX"), "").unwrap();
        fs::write(dir.path().join("c.txt"), "").unwrap();
        fs::write(dir.path().join("gpx"), "").unwrap();

        let files = scan_gpx_files(dir.path()).unwrap();
        assert_eq!(files, vec![dir.path().join("a.gpx")]);
    }

    #[test]
    fn test_non_recursive_and_skips_directories() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join("nested")).unwrap();
        fs::write(dir.path().join("nested").join("inner.gpx"), "").unwrap();
        // A directory whose name ends in .gpx is not an input file
        fs::create_dir(dir.path().join("odd.gpx")).unwrap();
        fs::write(dir.path().join("top.gpx"), "").unwrap();

        let files = scan_gpx_files(dir.path()).unwrap();
        assert_eq!(files, vec![dir.path().join("top.gpx")]);
    }

    #[test]
    fn test_results_sorted_lexicographically() {
        let dir = tempfile::tempdir().unwrap();
        for name in ["zebra.gpx", "alpha.gpx", "mid.gpx"] {
            fs::write(dir.path().join(name), "").unwrap();
        }

        let files = scan_gpx_files(dir.path()).unwrap();
        let names: Vec<_> = files
            .iter()
            .map(|p| p.file_name().unwrap().to_str().unwrap())
            .collect();
        assert_eq!(names, vec!["alpha.gpx", "mid.gpx", "zebra.gpx"]);
    }

    #[test]
    fn test_empty_directory_yields_no_files() {
        let dir = tempfile::tempdir().unwrap();
        assert!(scan_gpx_files(dir.path()).unwrap().is_empty());
    }
}
