use log::debug;
use serde::Deserialize;
use std::collections::HashMap;

use crate::distance::levenshtein;
use crate::error::{wordset_error, Result};
use crate::transcript::Transcript;

/// Which matching strategies are active; any non-empty subset may be on at
/// once, with OR semantics across modes and rule words
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct MatchMode {
    pub exact: bool,
    pub partial: bool,
    pub fuzzy: bool,
}

impl MatchMode {
    pub fn any(&self) -> bool {
        self.exact || self.partial || self.fuzzy
    }
}

impl Default for MatchMode {
    fn default() -> Self {
        Self {
            exact: true,
            partial: false,
            fuzzy: false,
        }
    }
}

/// Matching parameters independent of any particular word list
#[derive(Debug, Clone, Copy)]
pub struct MatchOptions {
    pub mode: MatchMode,
    /// Edit-distance threshold for fuzzy mode. Range validation (1-3) is the
    /// config layer's job; the matcher applies whatever it is given.
    pub fuzzy_distance: usize,
}

impl Default for MatchOptions {
    fn default() -> Self {
        Self {
            mode: MatchMode::default(),
            fuzzy_distance: 1,
        }
    }
}

/// Where a selection entry or matched word came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Source {
    /// The user clicked the word in the transcript view
    Manual,
    /// Matched by the wordset with this id
    WordSet(u32),
    /// Drawn directly on the timeline
    ManualTimeline,
}

/// A named, reusable word list with its own matching settings, as supplied
/// by the (external) wordset store
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WordSet {
    pub id: u32,
    #[serde(default)]
    pub name: String,
    pub words: Vec<String>,
    pub match_mode: MatchMode,
    pub fuzzy_distance: usize,
}

impl WordSet {
    /// Parse a JSON array of wordsets
    pub fn list_from_json(json: &str) -> Result<Vec<WordSet>> {
        serde_json::from_str(json).map_err(|e| wordset_error(format!("invalid wordset JSON: {}", e)))
    }

    /// Stored entries may themselves carry embedded commas; split them and
    /// normalize before use
    pub fn normalized_words(&self) -> Vec<String> {
        self.words
            .iter()
            .flat_map(|entry| entry.split(','))
            .map(|word| word.trim().to_lowercase())
            .filter(|word| !word.is_empty())
            .collect()
    }

    pub fn options(&self) -> MatchOptions {
        MatchOptions {
            mode: self.match_mode,
            fuzzy_distance: self.fuzzy_distance,
        }
    }
}

/// Parse one comma-separated word list: lower-cased, trimmed, empty entries
/// discarded
pub fn parse_words(input: &str) -> Vec<String> {
    input
        .to_lowercase()
        .split(',')
        .map(str::trim)
        .filter(|word| !word.is_empty())
        .map(String::from)
        .collect()
}

/// Caller-owned selection state: transcript chunk index mapped to the
/// provenance of its selection
#[derive(Debug, Clone, Default)]
pub struct Selection {
    entries: HashMap<usize, Source>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flip one chunk's membership. A newly selected index always carries
    /// Manual provenance; a deselected one is removed entirely, whatever its
    /// provenance was.
    pub fn toggle(&mut self, index: usize) {
        if self.entries.remove(&index).is_none() {
            self.entries.insert(index, Source::Manual);
        }
    }

    /// Record a selection, overwriting any prior provenance for the index
    pub fn insert(&mut self, index: usize, source: Source) {
        self.entries.insert(index, source);
    }

    /// Remove every entry regardless of provenance
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Remove only the entries contributed by the given wordset; manual
    /// selections and other wordsets' entries are untouched
    pub fn remove_word_set(&mut self, id: u32) {
        self.entries.retain(|_, source| *source != Source::WordSet(id));
    }

    /// Drop entries that no longer reference a valid chunk index. Call this
    /// when the transcript is replaced.
    pub fn prune(&mut self, chunk_count: usize) {
        self.entries.retain(|&index, _| index < chunk_count);
    }

    pub fn contains(&self, index: usize) -> bool {
        self.entries.contains_key(&index)
    }

    pub fn source_of(&self, index: usize) -> Option<Source> {
        self.entries.get(&index).copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (usize, Source)> + '_ {
        self.entries.iter().map(|(&index, &source)| (index, source))
    }
}

/// Match every transcript chunk against `words`, recording hits in the
/// selection under `source`.
///
/// Matching is additive: existing entries survive, though a re-matched index
/// adopts the new provenance. Chunks without usable timestamps still match
/// here; the consolidator drops them when deriving intervals. Returns the
/// indices matched by this call; an empty result is a valid outcome, not an
/// error.
pub fn match_chunks(
    selection: &mut Selection,
    transcript: &Transcript,
    words: &[String],
    options: &MatchOptions,
    source: Source,
) -> Vec<usize> {
    let mut matched = Vec::new();
    if words.is_empty() || !options.mode.any() {
        return matched;
    }

    for (index, chunk) in transcript.chunks.iter().enumerate() {
        let text = chunk.normalized_text();
        let stripped = chunk.stripped_text();

        if words
            .iter()
            .any(|word| matches_word(&text, &stripped, word, options))
        {
            debug!("matched {:?} at chunk {} ({:?})", chunk.text, index, source);
            selection.insert(index, source);
            matched.push(index);
        }
    }

    if matched.is_empty() {
        debug!("no chunks matched {} word(s)", words.len());
    }
    matched
}

/// Mode precedence per word is exact, then partial, then fuzzy; the first
/// hit wins. Partial and fuzzy compare the unstripped normalized text; only
/// exact also tries the punctuation-stripped variant.
fn matches_word(text: &str, stripped: &str, word: &str, options: &MatchOptions) -> bool {
    if options.mode.exact && (text == word || stripped == word) {
        return true;
    }
    if options.mode.partial && text.contains(word) {
        return true;
    }
    options.mode.fuzzy && levenshtein(text, word) <= options.fuzzy_distance
}

/// Apply a wordset using its own match settings; hits carry the set's id as
/// provenance
pub fn apply_word_set(
    selection: &mut Selection,
    transcript: &Transcript,
    set: &WordSet,
) -> Vec<usize> {
    match_chunks(
        selection,
        transcript,
        &set.normalized_words(),
        &set.options(),
        Source::WordSet(set.id),
    )
}
