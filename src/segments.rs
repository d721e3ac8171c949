use log::{debug, warn};
use serde::Serialize;

use crate::config::Config;
use crate::matcher::{Selection, Source};
use crate::regions::RegionList;
use crate::transcript::Transcript;

/// One interval to censor, unified across selected transcript chunks and
/// manually drawn regions. Derived on demand, never stored.
#[derive(Debug, Clone, PartialEq)]
pub struct MatchedWord {
    pub label: String,
    pub start: f64,
    pub end: f64,
    pub source: Source,
}

/// The live view: selected transcript chunks plus manual regions, ascending
/// by start (equal starts in unspecified order).
///
/// Chunks whose timing is missing or null are dropped here even when their
/// index sits in the selection; the drop is logged, not an error.
pub fn matched_words(
    selection: &Selection,
    transcript: Option<&Transcript>,
    regions: &RegionList,
) -> Vec<MatchedWord> {
    let mut words = Vec::new();

    if let Some(transcript) = transcript {
        for (index, source) in selection.iter() {
            let Some(chunk) = transcript.chunks.get(index) else {
                warn!("selection references missing chunk index {}", index);
                continue;
            };
            let Some((start, end)) = chunk.span() else {
                warn!("skipping chunk with null timestamp: {:?}", chunk.text);
                continue;
            };
            words.push(MatchedWord {
                label: chunk.text.clone(),
                start,
                end,
                source,
            });
        }
    }

    for region in regions.iter() {
        words.push(MatchedWord {
            label: region.label(),
            start: region.start,
            end: region.end,
            source: Source::ManualTimeline,
        });
    }

    words.sort_by(|a, b| a.start.partial_cmp(&b.start).unwrap());
    words
}

/// Final censor interval handed to the renderer
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CensorSegment {
    pub label: String,
    pub start: f64,
    pub end: f64,
}

/// Expand every interval by `buffer` seconds on both sides. Start is clamped
/// at zero; end may run past the media duration, which the renderer clips.
pub fn apply_buffer(words: &[MatchedWord], buffer: f64) -> Vec<CensorSegment> {
    words
        .iter()
        .map(|word| CensorSegment {
            label: word.label.clone(),
            start: (word.start - buffer).max(0.0),
            end: word.end + buffer,
        })
        .collect()
}

/// Merge touching or overlapping segments into a disjoint ascending list.
/// Labels of merged segments are combined. Already-disjoint sorted input
/// passes through unchanged.
pub fn merge_segments(segments: Vec<CensorSegment>) -> Vec<CensorSegment> {
    if segments.is_empty() {
        return Vec::new();
    }

    // Buffer expansion can reorder intervals, so sort again before sweeping.
    let mut sorted = segments;
    sorted.sort_by(|a, b| a.start.partial_cmp(&b.start).unwrap());

    let mut merged = Vec::new();
    let mut current = sorted[0].clone();

    for segment in sorted.into_iter().skip(1) {
        if segment.start <= current.end {
            current.label = format!("{}, {}", current.label, segment.label);
            current.end = current.end.max(segment.end);
        } else {
            merged.push(current);
            current = segment;
        }
    }

    merged.push(current);
    merged
}

/// Buffer expansion followed by overlap merging: the final pass behind the
/// user's explicit "apply censoring" action.
pub fn build_censor_segments(words: &[MatchedWord], buffer: f64) -> Vec<CensorSegment> {
    let segments = merge_segments(apply_buffer(words, buffer));
    debug!(
        "built {} censor segment(s) from {} matched word(s)",
        segments.len(),
        words.len()
    );
    segments
}

/// Summary of a censoring pass
#[derive(Debug, Clone, PartialEq)]
pub struct CensorStats {
    pub matched_words: usize,
    pub from_transcript: usize,
    pub from_timeline: usize,
    pub merged_segments: usize,
    pub censored_duration: f64,
}

pub fn censor_stats(words: &[MatchedWord], segments: &[CensorSegment]) -> CensorStats {
    let from_timeline = words
        .iter()
        .filter(|word| word.source == Source::ManualTimeline)
        .count();

    CensorStats {
        matched_words: words.len(),
        from_transcript: words.len() - from_timeline,
        from_timeline,
        merged_segments: segments.len(),
        censored_duration: segments.iter().map(|s| s.end - s.start).sum(),
    }
}

/// Everything the downstream bleep renderer consumes: the disjoint segments
/// plus the pass-through gain parameters the renderer owns
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderPlan {
    pub segments: Vec<CensorSegment>,
    pub bleep_sound: String,
    /// Bleep gain, 0.0-1.0
    pub bleep_volume: f32,
    /// Original-audio gain under the bleep, 0.0-1.0
    pub original_volume_reduction: f32,
}

impl RenderPlan {
    pub fn new(segments: Vec<CensorSegment>, config: &Config) -> Self {
        Self {
            segments,
            bleep_sound: config.bleep_sound.as_str().to_string(),
            bleep_volume: f32::from(config.bleep_volume) / 100.0,
            original_volume_reduction: config.original_volume_reduction,
        }
    }
}
