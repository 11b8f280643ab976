//! Run configuration for the merge pipeline

use crate::{MergeError, Result};
use std::ffi::OsString;
use std::path::PathBuf;

/// Configuration for a single merge run
///
/// All fields are validated and resolved at construction time, so a
/// [`MergeConfig`] that exists is always usable by the pipeline.
#[derive(Debug, Clone)]
pub struct MergeConfig {
    /// Directory scanned (non-recursively) for `.gpx` files
    pub input_dir: PathBuf,
    /// Destination of the merged GPX document
    pub output_path: PathBuf,
    /// Downsampling stride: keep every Nth trackpoint of each segment,
    /// starting at index 0. `1` keeps all points. Always >= 1.
    pub skip_interval: usize,
}

impl MergeConfig {
    /// Create a validated configuration
    ///
    /// # Arguments
    /// * `input_dir` - Directory containing the GPX files to merge
    /// * `output_path` - Destination file; when `None`, defaults to
    ///   `<current dir>/<input basename>_merged.gpx`
    /// * `skip_interval` - Downsampling stride, must be at least 1
    ///
    /// # Errors
    /// Returns [`MergeError::InvalidInterval`] when `skip_interval` is 0.
    pub fn new(
        input_dir: impl Into<PathBuf>,
        output_path: Option<PathBuf>,
        skip_interval: usize,
    ) -> Result<Self> {
        if skip_interval == 0 {
            return Err(MergeError::InvalidInterval(skip_interval));
        }

        let input_dir = input_dir.into();
        let output_path = match output_path {
            Some(path) => path,
            None => Self::default_output_path(&input_dir)?,
        };

        Ok(Self {
            input_dir,
            output_path,
            skip_interval,
        })
    }

    /// Resolve the default output path: `<current dir>/<input basename>_merged.gpx`
    fn default_output_path(input_dir: &std::path::Path) -> Result<PathBuf> {
        let mut name = input_dir
            .file_name()
            .map(OsString::from)
            .unwrap_or_default();
        name.push("_merged.gpx");
        Ok(std::env::current_dir()?.join(name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_interval_rejected() {
        let result = MergeConfig::new("/data/tracks", None, 0);
        assert!(matches!(result, Err(MergeError::InvalidInterval(0))));
    }

    #[test]
    fn test_explicit_output_path_kept() {
        let config =
            MergeConfig::new("/data/tracks", Some(PathBuf::from("/out/all.gpx")), 1).unwrap();
        assert_eq!(config.output_path, PathBuf::from("/out/all.gpx"));
    }

    #[test]
    fn test_default_output_path_uses_input_basename() {
        let config = MergeConfig::new("/data/tracks", None, 2).unwrap();
        assert_eq!(
            config.output_path.file_name().unwrap(),
            "tracks_merged.gpx"
        );
        assert!(config.output_path.is_absolute());
        assert_eq!(config.skip_interval, 2);
    }
}
