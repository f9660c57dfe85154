//! Suggestion checklist.
//!
//! Produces ordered, human-readable hints on what a prompt is missing for
//! its detected intent. Rules run in a fixed order and each one appends at
//! most a single hint.

use regex::Regex;
use std::sync::LazyLock;

use super::analyzer::Intent;
use super::patterns::{keyword_regex, Category};

/// Below this many characters the request gets the "more detail" hint.
const MIN_DETAIL_CHARS: usize = 10;

pub const MORE_DETAIL: &str = "Add more detail to your request.";
pub const CODE_LANGUAGE: &str = "Specify the programming language or framework you are using.";
pub const CODE_GOAL: &str = "Clarify whether you want to create new code or fix existing code.";
pub const IMAGE_STYLE: &str = "Describe the art style (e.g. photorealistic, watercolor, anime).";
pub const IMAGE_ASPECT: &str = "Specify an aspect ratio (e.g. 16:9, 1:1, 9:16).";
pub const WRITING_AUDIENCE: &str = "Define your target audience.";
pub const WRITING_LENGTH: &str = "Specify the desired length (word count or number of paragraphs).";
pub const WRITING_TONE: &str = "Indicate the tone (e.g. formal, casual, persuasive).";
pub const ANALYSIS_DATA: &str = "Specify the format of your data (e.g. CSV, JSON, spreadsheet).";
pub const ANALYSIS_INSIGHTS: &str = "Describe what insights or conclusions you are looking for.";
pub const GENERAL_FORMAT: &str = "Add details about the expected output format.";
pub const GENERAL_CONSTRAINTS: &str = "Consider adding constraints or requirements.";

// Keyword groups checked against the whole request

static LANGUAGE_KEYWORDS: LazyLock<Regex> = LazyLock::new(|| {
    keyword_regex(
        &[
            "python", "javascript", "typescript", "java", "rust", "go", "golang", "c++", "c#",
            "ruby", "php", "swift", "kotlin", "sql", "bash", "react", "vue", "angular", "node",
            "django", "flask", "spring", "rails", "html", "css",
        ],
        "language keywords",
    )
});

static FIX_KEYWORDS: LazyLock<Regex> = LazyLock::new(|| {
    keyword_regex(
        &["fix", "debug", "bug", "error", "issue", "broken", "crash", "not working"],
        "fix keywords",
    )
});

static CREATE_KEYWORDS: LazyLock<Regex> = LazyLock::new(|| {
    keyword_regex(
        &["create", "build", "write", "make", "generate", "implement", "new"],
        "create keywords",
    )
});

static STYLE_KEYWORDS: LazyLock<Regex> = LazyLock::new(|| {
    keyword_regex(
        &[
            "style", "realistic", "photorealistic", "cartoon", "anime", "watercolor",
            "oil painting", "digital art", "minimalist", "3d", "pixel art", "vintage",
            "cinematic", "abstract", "impressionist",
        ],
        "style keywords",
    )
});

static ASPECT_KEYWORDS: LazyLock<Regex> = LazyLock::new(|| {
    keyword_regex(
        &[
            "aspect", "ratio", "16:9", "9:16", "4:3", "3:2", "1:1", "square", "widescreen",
            "vertical", "horizontal", "landscape", "portrait",
        ],
        "aspect keywords",
    )
});

static AUDIENCE_KEYWORDS: LazyLock<Regex> = LazyLock::new(|| {
    keyword_regex(
        &[
            "audience", "reader", "readers", "beginner", "beginners", "expert", "experts",
            "kids", "children", "students", "professionals", "customers",
        ],
        "audience keywords",
    )
});

static LENGTH_KEYWORDS: LazyLock<Regex> = LazyLock::new(|| {
    keyword_regex(
        &[
            "word", "words", "length", "short", "long", "brief", "paragraph", "paragraphs",
            "page", "pages", "sentence", "sentences",
        ],
        "length keywords",
    )
});

static TONE_KEYWORDS: LazyLock<Regex> = LazyLock::new(|| {
    keyword_regex(
        &[
            "tone", "formal", "informal", "casual", "friendly", "professional", "humorous",
            "funny", "serious", "persuasive", "conversational",
        ],
        "tone keywords",
    )
});

static DATA_KEYWORDS: LazyLock<Regex> = LazyLock::new(|| {
    keyword_regex(
        &[
            "csv", "json", "xml", "excel", "xlsx", "spreadsheet", "table", "dataset", "sql",
            "format",
        ],
        "data keywords",
    )
});

static INSIGHT_KEYWORDS: LazyLock<Regex> = LazyLock::new(|| {
    keyword_regex(
        &[
            "insight", "insights", "trend", "trends", "pattern", "patterns", "conclusion",
            "conclusions", "recommendation", "recommendations", "findings", "takeaways",
        ],
        "insight keywords",
    )
});

static NEED_KEYWORDS: LazyLock<Regex> = LazyLock::new(|| {
    keyword_regex(&["please", "need", "want", "must", "should", "require"], "need keywords")
});

/// Force compilation of the keyword groups.
pub(crate) fn init() {
    for group in [
        &LANGUAGE_KEYWORDS,
        &FIX_KEYWORDS,
        &CREATE_KEYWORDS,
        &STYLE_KEYWORDS,
        &ASPECT_KEYWORDS,
        &AUDIENCE_KEYWORDS,
        &LENGTH_KEYWORDS,
        &TONE_KEYWORDS,
        &DATA_KEYWORDS,
        &INSIGHT_KEYWORDS,
        &NEED_KEYWORDS,
    ] {
        LazyLock::force(group);
    }
}

fn lacks(group: &LazyLock<Regex>, text: &str) -> bool {
    !group.is_match(text)
}

/// Build the ordered improvement hints for `text` classified as `intent`.
pub fn suggest(intent: Intent, text: &str) -> Vec<String> {
    let mut hints: Vec<&'static str> = Vec::new();

    if text.chars().count() < MIN_DETAIL_CHARS {
        hints.push(MORE_DETAIL);
    }

    match intent {
        Intent::Category(Category::Code) => {
            if lacks(&LANGUAGE_KEYWORDS, text) {
                hints.push(CODE_LANGUAGE);
            }
            if lacks(&FIX_KEYWORDS, text) && lacks(&CREATE_KEYWORDS, text) {
                hints.push(CODE_GOAL);
            }
        }
        Intent::Category(Category::Image) => {
            if lacks(&STYLE_KEYWORDS, text) {
                hints.push(IMAGE_STYLE);
            }
            if lacks(&ASPECT_KEYWORDS, text) {
                hints.push(IMAGE_ASPECT);
            }
        }
        Intent::Category(Category::Writing) => {
            if lacks(&AUDIENCE_KEYWORDS, text) {
                hints.push(WRITING_AUDIENCE);
            }
            if lacks(&LENGTH_KEYWORDS, text) {
                hints.push(WRITING_LENGTH);
            }
            if lacks(&TONE_KEYWORDS, text) {
                hints.push(WRITING_TONE);
            }
        }
        Intent::Category(Category::Analysis) => {
            if lacks(&DATA_KEYWORDS, text) {
                hints.push(ANALYSIS_DATA);
            }
            if lacks(&INSIGHT_KEYWORDS, text) {
                hints.push(ANALYSIS_INSIGHTS);
            }
        }
        Intent::General => {
            // Only when nothing was flagged so far, the length hint included
            if hints.is_empty() {
                hints.push(GENERAL_FORMAT);
            }
            if lacks(&NEED_KEYWORDS, text) {
                hints.push(GENERAL_CONSTRAINTS);
            }
        }
    }

    hints.into_iter().map(str::to_string).collect()
}
