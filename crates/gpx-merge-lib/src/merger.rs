//! Merger - pipeline driver accumulating processed tracks into one document

use crate::{MergeConfig, MergeError, Result, processor, scanner};
use gpx::{Gpx, GpxVersion};
use std::fs::File;
use std::io::BufReader;

/// Summary of a completed merge run
#[derive(Debug, Clone, Default)]
pub struct MergeReport {
    /// Number of input files merged
    pub files_merged: usize,
    /// Number of tracks in the output document
    pub tracks_written: usize,
    /// Trackpoints read across all input files
    pub points_read: usize,
    /// Trackpoints remaining after downsampling and filtering
    pub points_written: usize,
    /// Where the merged document was written
    pub output_path: std::path::PathBuf,
}

/// Drives the scan → parse → process → serialize → write pipeline
pub struct Merger {
    config: MergeConfig,
}

impl Merger {
    /// Create a merger for the given configuration
    pub fn new(config: MergeConfig) -> Self {
        Self { config }
    }

    /// Run the whole pipeline
    ///
    /// Input files are processed sequentially in lexicographic path order;
    /// each file's tracks are appended to the merged document with their
    /// segment structure intact. Any failure aborts the run before the
    /// output file is touched. An empty input directory still produces a
    /// valid GPX document with zero tracks.
    pub fn run(&self) -> Result<MergeReport> {
        let files = scanner::scan_gpx_files(&self.config.input_dir)?;

        let mut merged = Gpx::default();
        merged.version = GpxVersion::Gpx11;
        merged.creator = Some(env!("CARGO_PKG_NAME").to_string());

        let mut report = MergeReport {
            output_path: self.config.output_path.clone(),
            ..MergeReport::default()
        };

        for path in &files {
            tracing::info!(file = %path.display(), "merging");
            let file = File::open(path)?;
            let source = gpx::read(BufReader::new(file)).map_err(|source| MergeError::Parse {
                path: path.clone(),
                source,
            })?;

            for track in &source.tracks {
                report.points_read += processor::point_count(track);
                let processed = processor::process_track(track, self.config.skip_interval);
                report.points_written += processor::point_count(&processed);
                merged.tracks.push(processed);
            }
            report.files_merged += 1;
        }
        report.tracks_written = merged.tracks.len();

        // Serialize fully in memory first so a serialization failure can
        // never leave a partially written output file behind.
        let mut buffer = Vec::new();
        gpx::write(&merged, &mut buffer).map_err(MergeError::Serialization)?;

        std::fs::write(&self.config.output_path, &buffer).map_err(|source| MergeError::Write {
            path: self.config.output_path.clone(),
            source,
        })?;

        tracing::debug!(
            files = report.files_merged,
            tracks = report.tracks_written,
            points = report.points_written,
            "merge finished"
        );
        Ok(report)
    }
}
