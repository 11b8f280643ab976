//! Per-segment trackpoint processing: downsample, filter, sort

use gpx::{Track, TrackSegment};
use time::OffsetDateTime;

/// Process one track, mirroring its segment count and order
///
/// Each segment is processed independently with [`process_segment`]. Segments
/// that end up empty are kept as empty segments so the output track keeps the
/// structure of its source.
pub fn process_track(track: &Track, skip_interval: usize) -> Track {
    let mut processed = Track::default();
    processed.segments = track
        .segments
        .iter()
        .map(|segment| process_segment(segment, skip_interval))
        .collect();
    processed
}

/// Process one segment's points, in order:
///
/// 1. Keep every `skip_interval`-th point starting at index 0
/// 2. Drop points without a timestamp
/// 3. Stable sort ascending by timestamp
///
/// `skip_interval` must be at least 1; [`crate::MergeConfig`] guarantees this.
pub fn process_segment(segment: &TrackSegment, skip_interval: usize) -> TrackSegment {
    debug_assert!(skip_interval >= 1);

    let mut processed = TrackSegment::default();
    processed.points = segment
        .points
        .iter()
        .step_by(skip_interval)
        .filter(|waypoint| waypoint.time.is_some())
        .cloned()
        .collect();

    // slice::sort_by_key is stable: equal timestamps keep their relative order
    processed
        .points
        .sort_by_key(|waypoint| waypoint.time.map(OffsetDateTime::from));

    processed
}

/// Total number of points across all segments of a track
pub fn point_count(track: &Track) -> usize {
    track.segments.iter().map(|s| s.points.len()).sum()
}
