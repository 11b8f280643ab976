//! GPX Merge Library - Merging of GPX track collections into a single document
//!
//! This library implements a single linear pipeline that merges all GPX files
//! found in a directory into one GPX document, downsampling and chronologically
//! sorting the trackpoints of every segment along the way.
//!
//! # Architecture
//!
//! - **[`MergeConfig`]**: Validated run configuration (input directory, output
//!   path, downsampling stride)
//! - **[`scanner`]**: Non-recursive directory listing filtered to `.gpx` files
//! - **[`processor`]**: Pure per-segment transformation (downsample, drop
//!   untimed points, stable sort by timestamp)
//! - **[`Merger`]**: Pipeline driver that accumulates processed tracks and
//!   writes the merged document
//!
//! The pipeline is strictly sequential and fail-fast: any stage error aborts
//! the run and no output file is written.

mod config;
mod merger;
pub mod processor;
pub mod scanner;

// Public API exports
pub use config::MergeConfig;
pub use merger::{MergeReport, Merger};

/// Error types for the merge pipeline
#[derive(Debug, thiserror::Error)]
pub enum MergeError {
    #[error("input directory not found: {path}")]
    DirectoryNotFound { path: std::path::PathBuf },

    #[error("failed to parse {path}: {source}")]
    Parse {
        path: std::path::PathBuf,
        source: gpx::errors::GpxError,
    },

    #[error("skip interval must be at least 1, got {0}")]
    InvalidInterval(usize),

    #[error("GPX serialization error: {0}")]
    Serialization(#[source] gpx::errors::GpxError),

    #[error("failed to write {path}: {source}")]
    Write {
        path: std::path::PathBuf,
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, MergeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_public_exports() {
        // Verify that all public types are accessible
        let _: fn(MergeConfig) -> Merger = Merger::new;
        let config = MergeConfig::new("/tmp/does-not-matter", None, 1);
        assert!(config.is_ok());
    }
}
