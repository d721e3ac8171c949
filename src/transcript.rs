use regex::Regex;
use serde::Deserialize;
use std::sync::OnceLock;

use crate::error::{transcript_error, Result};

static PUNCTUATION: OnceLock<Regex> = OnceLock::new();

fn punctuation() -> &'static Regex {
    PUNCTUATION.get_or_init(|| Regex::new(r#"[.,!?;:'"]"#).expect("valid punctuation pattern"))
}

/// Remove common sentence punctuation (periods, commas, exclamation and
/// question marks, semicolons, colons, quotes).
pub fn strip_punctuation(text: &str) -> String {
    punctuation().replace_all(text, "").into_owned()
}

/// One transcribed token with word-level timing
#[derive(Debug, Clone, Deserialize)]
pub struct TranscriptChunk {
    pub text: String,
    /// Start/end in seconds. The whole pair or either bound may be null when
    /// the transcription pipeline could not align the word.
    #[serde(default)]
    pub timestamp: Option<(Option<f64>, Option<f64>)>,
}

impl TranscriptChunk {
    pub fn new(text: impl Into<String>, start: f64, end: f64) -> Self {
        Self {
            text: text.into(),
            timestamp: Some((Some(start), Some(end))),
        }
    }

    /// A chunk the pipeline produced without usable timing
    pub fn untimed(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            timestamp: None,
        }
    }

    /// Usable (start, end) pair, or None when either bound is missing.
    /// Chunks without a span are never matchable downstream.
    pub fn span(&self) -> Option<(f64, f64)> {
        match self.timestamp {
            Some((Some(start), Some(end))) => Some((start, end)),
            _ => None,
        }
    }

    /// Lower-cased, trimmed text
    pub fn normalized_text(&self) -> String {
        self.text.trim().to_lowercase()
    }

    /// Normalized text with sentence punctuation removed
    pub fn stripped_text(&self) -> String {
        strip_punctuation(&self.normalized_text())
    }
}

/// Counts reported by the transcription pipeline alongside the chunks
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TranscriptMetadata {
    pub null_timestamp_count: usize,
    pub total_chunks: usize,
}

/// A full transcription result as supplied by the (external) pipeline
#[derive(Debug, Clone, Deserialize)]
pub struct Transcript {
    #[serde(default)]
    pub text: String,
    pub chunks: Vec<TranscriptChunk>,
    #[serde(default)]
    pub metadata: Option<TranscriptMetadata>,
}

impl Transcript {
    /// Parse the pipeline's JSON shape:
    /// `{ text, chunks: [{ text, timestamp: [start, end] | null }], metadata? }`
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json)
            .map_err(|e| transcript_error(format!("invalid transcript JSON: {}", e)))
    }

    /// Build a transcript from chunks alone (full text joined from them)
    pub fn from_chunks(chunks: Vec<TranscriptChunk>) -> Self {
        let text = chunks
            .iter()
            .map(|c| c.text.trim())
            .collect::<Vec<_>>()
            .join(" ");
        Self {
            text,
            chunks,
            metadata: None,
        }
    }

    pub fn len(&self) -> usize {
        self.chunks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chunks.is_empty()
    }

    /// Number of chunks whose timing is unusable, recounted from the chunks
    /// themselves rather than trusting pipeline metadata
    pub fn null_timestamp_count(&self) -> usize {
        self.chunks.iter().filter(|c| c.span().is_none()).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_punctuation() {
        assert_eq!(strip_punctuation("shit!"), "shit");
        assert_eq!(strip_punctuation("well,"), "well");
        assert_eq!(strip_punctuation("'damn'"), "damn");
        assert_eq!(strip_punctuation("wait...?!"), "wait");
        assert_eq!(strip_punctuation("clean"), "clean");
    }

    #[test]
    fn test_chunk_normalization() {
        let chunk = TranscriptChunk::new("  Shit! ", 1.0, 1.5);
        assert_eq!(chunk.normalized_text(), "shit!");
        assert_eq!(chunk.stripped_text(), "shit");
    }

    #[test]
    fn test_span() {
        assert_eq!(TranscriptChunk::new("hi", 1.0, 1.5).span(), Some((1.0, 1.5)));
        assert_eq!(TranscriptChunk::untimed("hi").span(), None);

        let half = TranscriptChunk {
            text: "hi".to_string(),
            timestamp: Some((Some(1.0), None)),
        };
        assert_eq!(half.span(), None);
    }

    #[test]
    fn test_from_json_with_null_timestamps() {
        let json = r#"{
            "text": "hello shit world",
            "chunks": [
                {"text": "hello", "timestamp": [0.0, 0.4]},
                {"text": "shit", "timestamp": null},
                {"text": "world", "timestamp": [1.0, null]}
            ]
        }"#;

        let transcript = Transcript::from_json(json).unwrap();
        assert_eq!(transcript.len(), 3);
        assert_eq!(transcript.chunks[0].span(), Some((0.0, 0.4)));
        assert_eq!(transcript.chunks[1].span(), None);
        assert_eq!(transcript.chunks[2].span(), None);
        assert_eq!(transcript.null_timestamp_count(), 2);
    }

    #[test]
    fn test_from_json_with_metadata() {
        let json = r#"{
            "text": "hello",
            "chunks": [{"text": "hello", "timestamp": [0.0, 0.4]}],
            "metadata": {"nullTimestampCount": 0, "totalChunks": 1}
        }"#;

        let transcript = Transcript::from_json(json).unwrap();
        let metadata = transcript.metadata.unwrap();
        assert_eq!(metadata.null_timestamp_count, 0);
        assert_eq!(metadata.total_chunks, 1);
    }

    #[test]
    fn test_from_json_rejects_garbage() {
        assert!(Transcript::from_json("not json").is_err());
        assert!(Transcript::from_json(r#"{"text": "no chunks"}"#).is_err());
    }

    #[test]
    fn test_from_chunks_joins_text() {
        let transcript = Transcript::from_chunks(vec![
            TranscriptChunk::new(" hello", 0.0, 0.4),
            TranscriptChunk::new("world ", 0.5, 0.9),
        ]);
        assert_eq!(transcript.text, "hello world");
        assert!(transcript.metadata.is_none());
    }
}
