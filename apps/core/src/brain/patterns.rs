//! Pattern Library.
//!
//! Static keyword tables used by the analyzer and the suggestion checklist.
//! Every rule is a case-insensitive word alternation, compiled once and never
//! mutated afterwards.

use regex::Regex;
use serde::Serialize;
use std::fmt;
use std::sync::LazyLock;

/// Scoring category.
///
/// Declaration order is significant: it drives the tie-break when two
/// categories end up with the same score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Code,
    Image,
    Writing,
    Analysis,
}

impl Category {
    /// All categories in declaration order.
    pub const ALL: [Category; 4] = [
        Category::Code,
        Category::Image,
        Category::Writing,
        Category::Analysis,
    ];

    /// Lowercase name, also used as the template key
    pub fn name(&self) -> &'static str {
        match self {
            Category::Code => "code",
            Category::Image => "image",
            Category::Writing => "writing",
            Category::Analysis => "analysis",
        }
    }

    /// Resolve a category from its name (case-insensitive).
    pub fn from_name(name: &str) -> Option<Self> {
        let name = name.trim();
        Self::ALL
            .into_iter()
            .find(|c| c.name().eq_ignore_ascii_case(name))
    }

    /// Entry of the pattern table for this category
    pub fn pattern(&self) -> &'static Pattern {
        self.lazy_pattern()
    }

    fn lazy_pattern(&self) -> &'static LazyLock<Pattern> {
        match self {
            Category::Code => &CODE_PATTERN,
            Category::Image => &IMAGE_PATTERN,
            Category::Writing => &WRITING_PATTERN,
            Category::Analysis => &ANALYSIS_PATTERN,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// A matching rule and the signed weight applied to its match count.
pub struct Pattern {
    regex: Regex,
    weight: f64,
}

impl Pattern {
    fn new(words: &[&str], weight: f64, label: &str) -> Self {
        Self {
            regex: keyword_regex(words, label),
            weight,
        }
    }

    /// Number of non-overlapping matches in `text`.
    pub fn count(&self, text: &str) -> usize {
        self.regex.find_iter(text).count()
    }

    pub fn weight(&self) -> f64 {
        self.weight
    }

    /// `count(text) * weight`
    pub fn score(&self, text: &str) -> f64 {
        self.count(text) as f64 * self.weight
    }
}

/// Build a case-insensitive alternation over `words`.
///
/// A `\b` anchor is only placed on a side where the keyword starts or ends
/// with a word character, otherwise keywords such as `c++` would never match.
pub(crate) fn keyword_regex(words: &[&str], label: &str) -> Regex {
    let alternation = words
        .iter()
        .map(|word| {
            let starts_word = word.chars().next().is_some_and(is_word_char);
            let ends_word = word.chars().last().is_some_and(is_word_char);
            format!(
                "{}{}{}",
                if starts_word { r"\b" } else { "" },
                regex::escape(word),
                if ends_word { r"\b" } else { "" }
            )
        })
        .collect::<Vec<_>>()
        .join("|");

    // A bad keyword table is a startup defect, never a per-request error
    Regex::new(&format!("(?i)(?:{alternation})"))
        .unwrap_or_else(|e| panic!("Invalid regex: {label} ({e})"))
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

// --- Category vocabularies ---

static CODE_PATTERN: LazyLock<Pattern> = LazyLock::new(|| {
    Pattern::new(
        &[
            "code", "coding", "function", "functions", "script", "program", "programming",
            "python", "javascript", "typescript", "java", "rust", "golang", "sql", "html",
            "css", "react", "api", "class", "method", "algorithm", "database", "query",
            "queries", "debug", "compile", "refactor", "variable", "regex", "backend",
            "frontend",
        ],
        2.0,
        "code keywords",
    )
});

static IMAGE_PATTERN: LazyLock<Pattern> = LazyLock::new(|| {
    Pattern::new(
        &[
            "image", "picture", "photo", "photograph", "drawing", "draw", "illustration",
            "illustrate", "painting", "paint", "render", "logo", "icon", "portrait",
            "sketch", "wallpaper", "artwork", "poster", "midjourney", "dall-e",
        ],
        2.0,
        "image keywords",
    )
});

static WRITING_PATTERN: LazyLock<Pattern> = LazyLock::new(|| {
    Pattern::new(
        &[
            "write", "writing", "essay", "article", "blog", "story", "poem", "email",
            "letter", "draft", "novel", "headline", "caption", "newsletter", "copywriting",
            "speech",
        ],
        1.5,
        "writing keywords",
    )
});

static ANALYSIS_PATTERN: LazyLock<Pattern> = LazyLock::new(|| {
    Pattern::new(
        &[
            "analyze", "analyse", "analysis", "compare", "comparison", "evaluate", "assess",
            "review", "data", "statistics", "metrics", "research", "report", "chart",
            "forecast",
        ],
        1.5,
        "analysis keywords",
    )
});

/// Filler words; each match lowers the quality score.
pub static WEAK_WORDS: LazyLock<Pattern> = LazyLock::new(|| {
    Pattern::new(
        &[
            "stuff", "things", "thing", "something", "somehow", "maybe", "just", "really",
            "very", "basically", "whatever", "kind of", "sort of", "etc",
        ],
        -1.0,
        "weak words",
    )
});

/// Force compilation of the category and weak-word patterns.
pub(crate) fn init() {
    for category in Category::ALL {
        LazyLock::force(category.lazy_pattern());
    }
    LazyLock::force(&WEAK_WORDS);
}
