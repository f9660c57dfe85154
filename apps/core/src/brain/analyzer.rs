//! Prompt Analyzer - scores a request against every category.
//!
//! Picks the dominant intent, computes a bounded quality score and attaches
//! the suggestion checklist for that intent.

use regex::Regex;
use serde::{Serialize, Serializer};
use std::collections::BTreeMap;
use std::fmt;
use std::sync::LazyLock;
use tracing::{debug, trace};

use super::patterns::{Category, WEAK_WORDS};
use super::suggestions::suggest;

/// Starting point of every quality score
const BASE_QUALITY: i32 = 50;
const MIN_QUALITY: i32 = 0;
const MAX_QUALITY: i32 = 100;

/// Word-count thresholds; each one crossed adds `WORD_COUNT_BONUS`.
const WORD_COUNT_THRESHOLDS: [usize; 2] = [5, 15];
const WORD_COUNT_BONUS: i32 = 10;
const QUOTE_BONUS: i32 = 5;
const DIGIT_BONUS: i32 = 5;
/// Multiplied by the (negative) weak-word weight for every match
const WEAK_WORD_PENALTY: f64 = 5.0;

static QUOTED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#""[^"]+""#).expect("Invalid regex: quoted substring"));

pub(crate) fn init() {
    LazyLock::force(&QUOTED);
}

/// Detected intent: a scoring category or the general fallback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Intent {
    Category(Category),
    General,
}

impl Intent {
    /// Name used in results and as template key
    pub fn name(&self) -> &'static str {
        match self {
            Intent::Category(category) => category.name(),
            Intent::General => "general",
        }
    }
}

impl From<Category> for Intent {
    fn from(category: Category) -> Self {
        Intent::Category(category)
    }
}

impl fmt::Display for Intent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl Serialize for Intent {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

/// Result of analyzing one request
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisResult {
    /// Dominant intent
    pub intent: Intent,
    /// Raw score of every category, in declaration order
    pub scores: BTreeMap<Category, f64>,
    /// Prompt quality (0 - 100)
    pub quality: u8,
    /// Ordered improvement hints
    pub suggestions: Vec<String>,
}

impl AnalysisResult {
    /// Score for a single category
    pub fn score(&self, category: Category) -> f64 {
        self.scores.get(&category).copied().unwrap_or(0.0)
    }
}

/// Analyze a request.
///
/// Returns `None` when the text is empty or absent. Any other input,
/// whitespace included, yields a result.
pub fn analyze<'a>(text: impl Into<Option<&'a str>>) -> Option<AnalysisResult> {
    let text = text.into().filter(|t| !t.is_empty())?;

    let scores: BTreeMap<Category, f64> = Category::ALL
        .into_iter()
        .map(|category| (category, category.pattern().score(text)))
        .collect();
    trace!(?scores, "Category scores");

    let intent = dominant_intent(&scores);
    let quality = quality_score(text);
    let suggestions = suggest(intent, text);

    debug!(
        intent = %intent,
        quality,
        suggestions = suggestions.len(),
        "Analyzed request"
    );

    Some(AnalysisResult {
        intent,
        scores,
        quality,
        suggestions,
    })
}

/// First category, in declaration order, with the strictly highest positive
/// score. Falls back to `General` when nothing scored.
fn dominant_intent(scores: &BTreeMap<Category, f64>) -> Intent {
    let mut best = Intent::General;
    let mut best_score = 0.0;

    for category in Category::ALL {
        let score = scores.get(&category).copied().unwrap_or(0.0);
        if score > best_score {
            best_score = score;
            best = Intent::Category(category);
        }
    }

    best
}

/// Heuristic prompt quality, clamped to `[0, 100]`.
fn quality_score(text: &str) -> u8 {
    let mut quality = BASE_QUALITY;

    let word_count = text.split_whitespace().count();
    for threshold in WORD_COUNT_THRESHOLDS {
        if word_count > threshold {
            quality += WORD_COUNT_BONUS;
        }
    }

    if QUOTED.is_match(text) {
        quality += QUOTE_BONUS;
    }

    if text.chars().any(|c| c.is_ascii_digit()) {
        quality += DIGIT_BONUS;
    }

    let weak = WEAK_WORDS.count(text);
    quality += (weak as f64 * WEAK_WORDS.weight() * WEAK_WORD_PENALTY) as i32;

    quality.clamp(MIN_QUALITY, MAX_QUALITY) as u8
}
