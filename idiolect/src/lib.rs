//! Shared idiolect model and phrase analysis for MirrorLingo.
//!
//! This crate owns the domain representation used by both `server` and
//! `app`: captured phrases, the derived speaking-style profile, batch
//! validation, and the keyword heuristics that build a profile from raw
//! phrase text. Everything here is pure and deterministic so the same
//! analysis runs identically in the WASM client and in native tests.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Maximum number of phrases accepted in one analysis batch.
pub const MAX_PHRASES: usize = 10;
/// Maximum length of a single phrase, in characters.
pub const MAX_PHRASE_LEN: usize = 500;

/// Error returned by [`validate_batch`].
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum BatchError {
    /// The batch contains no non-blank phrases.
    #[error("Please enter at least 1 phrase")]
    Empty,
    /// The batch exceeds [`MAX_PHRASES`].
    #[error("Please enter no more than {max} phrases")]
    TooMany {
        /// The enforced maximum.
        max: usize,
    },
    /// A phrase exceeds [`MAX_PHRASE_LEN`] characters. `index` is 1-based
    /// so the message reads naturally in the UI.
    #[error("Phrase {index} is too long (max {max} characters)")]
    PhraseTooLong {
        /// 1-based position of the offending phrase.
        index: usize,
        /// The enforced maximum.
        max: usize,
    },
}

// =============================================================================
// CATEGORIES
// =============================================================================

/// Conversational intent detected for a single phrase.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IntentCategory {
    Work,
    Family,
    Errands,
    Social,
    PoliteRequest,
    Casual,
    Other,
}

impl IntentCategory {
    /// Human-readable label for display.
    #[must_use]
    pub fn display_name(self) -> &'static str {
        match self {
            Self::Work => "Work",
            Self::Family => "Family",
            Self::Errands => "Errands",
            Self::Social => "Social",
            Self::PoliteRequest => "Polite Request",
            Self::Casual => "Casual",
            Self::Other => "Other",
        }
    }
}

/// Overall tone of the speaker across the analyzed batch.
///
/// The analyzer currently emits the `Casual | Neutral | Polite` subset;
/// the remaining levels are part of the stored model so profiles from a
/// richer analyzer deserialize without migration.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ToneLevel {
    VeryCasual,
    Casual,
    Neutral,
    Polite,
    Formal,
    VeryFormal,
}

impl ToneLevel {
    /// Human-readable label for display.
    #[must_use]
    pub fn display_name(self) -> &'static str {
        match self {
            Self::VeryCasual => "Very Casual",
            Self::Casual => "Casual",
            Self::Neutral => "Neutral",
            Self::Polite => "Polite",
            Self::Formal => "Formal",
            Self::VeryFormal => "Very Formal",
        }
    }
}

/// Register of the speaker's phrasing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FormalityLevel {
    Informal,
    SemiFormal,
    Formal,
}

impl FormalityLevel {
    /// Human-readable label for display.
    #[must_use]
    pub fn display_name(self) -> &'static str {
        match self {
            Self::Informal => "Informal",
            Self::SemiFormal => "Semi-Formal",
            Self::Formal => "Formal",
        }
    }
}

/// A recurring speech habit detected across the batch.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SpeechPattern {
    FrequentContractions,
    FillerWords,
    PolitenessMarkers,
    FrequentQuestions,
    LongSentences,
    ConciseSentences,
}

impl SpeechPattern {
    /// Human-readable label for display.
    #[must_use]
    pub fn display_name(self) -> &'static str {
        match self {
            Self::FrequentContractions => "Frequent Contractions",
            Self::FillerWords => "Filler Words",
            Self::PolitenessMarkers => "Politeness Markers",
            Self::FrequentQuestions => "Frequent Questions",
            Self::LongSentences => "Long Sentences",
            Self::ConciseSentences => "Concise Sentences",
        }
    }

    /// Sentence-form description shown in the analysis view.
    #[must_use]
    pub fn description(self) -> &'static str {
        match self {
            Self::FrequentContractions => "Uses contractions frequently",
            Self::FillerWords => "Uses filler words",
            Self::PolitenessMarkers => "Polite communication style",
            Self::FrequentQuestions => "Asks questions often",
            Self::LongSentences => "Tends to use longer sentences",
            Self::ConciseSentences => "Prefers concise communication",
        }
    }
}

// =============================================================================
// DOMAIN TYPES
// =============================================================================

/// A single captured phrase with its detected intent.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Phrase {
    /// Unique identifier, assigned at capture time.
    pub id: Uuid,
    /// The phrase text as entered (trimmed).
    pub text: String,
    /// Detected conversational intent.
    pub intent: IntentCategory,
    /// Evidence-based detection confidence in `[0, 1)`.
    pub confidence: f32,
    /// Milliseconds since the Unix epoch when the phrase was captured.
    pub captured_at_ms: i64,
}

/// The speaking-style profile derived from one analysis batch.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct IdiolectProfile {
    /// Overall tone across the batch.
    pub tone: ToneLevel,
    /// Overall register across the batch.
    pub formality: FormalityLevel,
    /// Detected speech habits, in detection order.
    pub patterns: Vec<SpeechPattern>,
    /// Evidence-based profile confidence in `[0, 1)`.
    pub confidence: f32,
    /// Number of phrases this profile was derived from.
    pub analysis_count: usize,
    /// Milliseconds since the Unix epoch when first built.
    pub created_at_ms: i64,
    /// Milliseconds since the Unix epoch when last rebuilt.
    pub updated_at_ms: i64,
}

/// Result of analyzing one validated batch.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Analysis {
    /// Per-phrase capture records.
    pub phrases: Vec<Phrase>,
    /// The batch-level profile.
    pub profile: IdiolectProfile,
}

// =============================================================================
// MARKER TABLES
// =============================================================================

// Keyword tables mirror the heuristics the product launched with. Intent
// matching is substring-based per phrase; profile markers are matched on
// word boundaries over the whole batch.

const WORK_TERMS: [&str; 5] = ["work", "meeting", "project", "deadline", "client"];
const FAMILY_TERMS: [&str; 4] = ["family", "kids", "home", "dinner"];
const ERRAND_TERMS: [&str; 4] = ["store", "buy", "shopping", "appointment"];
const SOCIAL_TERMS: [&str; 4] = ["friend", "party", "weekend", "fun"];
const POLITE_TERMS: [&str; 3] = ["please", "could you", "would you"];

const CONTRACTION_MARKERS: [&str; 9] = [
    "don't", "won't", "can't", "i'm", "you're", "it's", "that's", "we're", "they're",
];
const FILLER_MARKERS: [&str; 7] = [
    "um", "uh", "like", "you know", "actually", "basically", "literally",
];
const POLITENESS_MARKERS: [&str; 6] = [
    "please", "thank you", "sorry", "excuse me", "could you", "would you",
];

/// Phrases longer than this count as "long sentences" in pattern detection.
const LONG_SENTENCE_CHARS: usize = 50;

// =============================================================================
// VALIDATION
// =============================================================================

/// Clean and validate a raw input batch.
///
/// Blank rows are dropped and the remaining phrases are trimmed. The cleaned
/// batch must contain between 1 and [`MAX_PHRASES`] phrases, each at most
/// [`MAX_PHRASE_LEN`] characters.
///
/// # Errors
///
/// Returns the first violated [`BatchError`] in the order empty, too many,
/// too long.
pub fn validate_batch(raw: &[String]) -> Result<Vec<String>, BatchError> {
    let cleaned: Vec<String> = raw
        .iter()
        .map(|p| p.trim())
        .filter(|p| !p.is_empty())
        .map(str::to_owned)
        .collect();

    if cleaned.is_empty() {
        return Err(BatchError::Empty);
    }
    if cleaned.len() > MAX_PHRASES {
        return Err(BatchError::TooMany { max: MAX_PHRASES });
    }
    for (i, phrase) in cleaned.iter().enumerate() {
        if phrase.chars().count() > MAX_PHRASE_LEN {
            return Err(BatchError::PhraseTooLong { index: i + 1, max: MAX_PHRASE_LEN });
        }
    }

    Ok(cleaned)
}

// =============================================================================
// INTENT DETECTION
// =============================================================================

/// Detect the conversational intent of a single phrase.
///
/// Categories are checked in a fixed priority order and the first hit wins;
/// matching is case-insensitive substring containment.
#[must_use]
pub fn detect_intent(text: &str) -> IntentCategory {
    let lower = text.to_lowercase();
    let contains_any = |terms: &[&str]| terms.iter().any(|t| lower.contains(t));

    if contains_any(&WORK_TERMS) {
        IntentCategory::Work
    } else if contains_any(&FAMILY_TERMS) {
        IntentCategory::Family
    } else if contains_any(&ERRAND_TERMS) {
        IntentCategory::Errands
    } else if contains_any(&SOCIAL_TERMS) {
        IntentCategory::Social
    } else if contains_any(&POLITE_TERMS) {
        IntentCategory::PoliteRequest
    } else {
        IntentCategory::Casual
    }
}

fn intent_keyword_hits(text: &str) -> usize {
    let lower = text.to_lowercase();
    let count_in = |terms: &[&str]| terms.iter().filter(|t| lower.contains(*t)).count();

    match detect_intent(text) {
        IntentCategory::Work => count_in(&WORK_TERMS),
        IntentCategory::Family => count_in(&FAMILY_TERMS),
        IntentCategory::Errands => count_in(&ERRAND_TERMS),
        IntentCategory::Social => count_in(&SOCIAL_TERMS),
        IntentCategory::PoliteRequest => count_in(&POLITE_TERMS),
        IntentCategory::Casual | IntentCategory::Other => 0,
    }
}

// =============================================================================
// MARKER COUNTING
// =============================================================================

/// Split text into word tokens, keeping apostrophes inside words so
/// contractions like `don't` survive as single tokens.
fn words(text: &str) -> Vec<&str> {
    text.split(|c: char| !(c.is_alphanumeric() || c == '\''))
        .map(|w| w.trim_matches('\''))
        .filter(|w| !w.is_empty())
        .collect()
}

/// Count word-boundary occurrences of each marker in the token stream.
/// Markers may span multiple words (`"you know"`, `"could you"`).
fn count_markers(tokens: &[&str], markers: &[&str]) -> usize {
    let mut count = 0;
    for marker in markers {
        let marker_words: Vec<&str> = marker.split_whitespace().collect();
        if marker_words.is_empty() || marker_words.len() > tokens.len() {
            continue;
        }
        count += tokens
            .windows(marker_words.len())
            .filter(|window| *window == marker_words.as_slice())
            .count();
    }
    count
}

// =============================================================================
// PROFILE BUILDING
// =============================================================================

/// Marker statistics for one batch, used for tone and formality decisions.
#[derive(Clone, Copy, Debug, PartialEq)]
struct MarkerCounts {
    contractions: usize,
    fillers: usize,
    politeness: usize,
}

impl MarkerCounts {
    fn total(self) -> usize {
        self.contractions + self.fillers + self.politeness
    }
}

fn count_batch_markers(texts: &[String]) -> MarkerCounts {
    let joined = texts.join(" ").to_lowercase();
    let tokens = words(&joined);
    MarkerCounts {
        contractions: count_markers(&tokens, &CONTRACTION_MARKERS),
        fillers: count_markers(&tokens, &FILLER_MARKERS),
        politeness: count_markers(&tokens, &POLITENESS_MARKERS),
    }
}

#[allow(clippy::cast_precision_loss)]
fn tone_for(counts: MarkerCounts, phrase_count: usize, contraction_rate: f64) -> ToneLevel {
    if counts.politeness as f64 > phrase_count as f64 * 0.3 {
        ToneLevel::Polite
    } else if contraction_rate > 0.5 {
        ToneLevel::Casual
    } else {
        ToneLevel::Neutral
    }
}

fn formality_for(counts: MarkerCounts, contraction_rate: f64) -> FormalityLevel {
    if contraction_rate < 0.2 && counts.politeness > 0 {
        FormalityLevel::Formal
    } else if contraction_rate > 0.7 {
        FormalityLevel::Informal
    } else {
        FormalityLevel::SemiFormal
    }
}

fn patterns_for(texts: &[String], counts: MarkerCounts, contraction_rate: f64) -> Vec<SpeechPattern> {
    let mut patterns = Vec::new();
    if contraction_rate > 0.3 {
        patterns.push(SpeechPattern::FrequentContractions);
    }
    if counts.fillers > 0 {
        patterns.push(SpeechPattern::FillerWords);
    }
    if counts.politeness > 0 {
        patterns.push(SpeechPattern::PolitenessMarkers);
    }
    if texts.iter().any(|t| t.contains('?')) {
        patterns.push(SpeechPattern::FrequentQuestions);
    }
    if texts.iter().any(|t| t.chars().count() > LONG_SENTENCE_CHARS) {
        patterns.push(SpeechPattern::LongSentences);
    } else {
        patterns.push(SpeechPattern::ConciseSentences);
    }
    patterns
}

/// Deterministic confidence score: grows with evidence volume, capped at
/// 0.95 so the UI never claims certainty.
#[allow(clippy::cast_precision_loss)]
fn confidence_score(base: f32, evidence: usize) -> f32 {
    let score = base + 0.02 * evidence as f32;
    score.min(0.95)
}

/// Build a speaking-style profile from a validated batch.
///
/// `now_ms` stamps both `created_at_ms` and `updated_at_ms`; callers that
/// rebuild an existing profile keep their own `created_at_ms`.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn build_profile(texts: &[String], now_ms: i64) -> IdiolectProfile {
    let counts = count_batch_markers(texts);
    let phrase_count = texts.len().max(1);
    let contraction_rate = counts.contractions as f64 / phrase_count as f64;

    IdiolectProfile {
        tone: tone_for(counts, phrase_count, contraction_rate),
        formality: formality_for(counts, contraction_rate),
        patterns: patterns_for(texts, counts, contraction_rate),
        confidence: confidence_score(0.75, texts.len() + counts.total()),
        analysis_count: texts.len(),
        created_at_ms: now_ms,
        updated_at_ms: now_ms,
    }
}

/// Capture a single phrase: detect its intent and stamp it.
#[must_use]
pub fn analyze_phrase(text: &str, now_ms: i64) -> Phrase {
    Phrase {
        id: Uuid::new_v4(),
        text: text.trim().to_owned(),
        intent: detect_intent(text),
        confidence: confidence_score(0.85, intent_keyword_hits(text)),
        captured_at_ms: now_ms,
    }
}

/// Analyze a validated batch: per-phrase capture records plus the profile.
#[must_use]
pub fn analyze_batch(texts: &[String], now_ms: i64) -> Analysis {
    let phrases = texts.iter().map(|t| analyze_phrase(t, now_ms)).collect();
    let profile = build_profile(texts, now_ms);
    Analysis { phrases, profile }
}

// =============================================================================
// DISTRIBUTION
// =============================================================================

/// Count phrases per intent, sorted by count descending (ties break in
/// category declaration order so output is stable).
#[must_use]
pub fn intent_distribution(phrases: &[Phrase]) -> Vec<(IntentCategory, usize)> {
    let mut counts: Vec<(IntentCategory, usize)> = Vec::new();
    for phrase in phrases {
        match counts.iter_mut().find(|(intent, _)| *intent == phrase.intent) {
            Some((_, n)) => *n += 1,
            None => counts.push((phrase.intent, 1)),
        }
    }
    counts.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)));
    counts
}

/// Integer percentage of `count` over `total`, rounded half-up.
/// Returns 0 when `total` is 0.
#[must_use]
#[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn percentage(count: usize, total: usize) -> u32 {
    if total == 0 {
        return 0;
    }
    ((count as f64 / total as f64) * 100.0).round() as u32
}

#[cfg(test)]
#[path = "lib_test.rs"]
mod tests;
