// Core modules
pub mod config;
pub mod distance;
pub mod error;
pub mod matcher;
pub mod regions;
pub mod segments;
pub mod timefmt;
pub mod transcript;

// Re-export commonly used types
pub use config::{BleepSound, Config, ConfigBuilder};
pub use distance::levenshtein;
pub use error::{BleeperError, Result};
pub use matcher::{
    apply_word_set, match_chunks, parse_words, MatchMode, MatchOptions, Selection, Source, WordSet,
};
pub use regions::{ManualRegion, RegionList};
pub use segments::{
    apply_buffer, build_censor_segments, censor_stats, matched_words, merge_segments,
    CensorSegment, CensorStats, MatchedWord, RenderPlan,
};
pub use transcript::{Transcript, TranscriptChunk, TranscriptMetadata};
