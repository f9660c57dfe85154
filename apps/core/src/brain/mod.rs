//! # Brain Module
//!
//! Fast, non-LLM analysis of prompt requests.
//! Scores raw text before it is sent anywhere and renders prompt templates.
//!
//! ## Components
//! - `patterns`: keyword tables and weights (pattern library)
//! - `analyzer`: intent selection and quality scoring
//! - `suggestions`: ordered improvement checklist
//! - `templates`: template table and placeholder compiler

pub mod analyzer;
pub mod patterns;
pub mod suggestions;
pub mod templates;

use tracing::info;

pub use analyzer::{analyze, AnalysisResult, Intent};
pub use patterns::Category;
pub use suggestions::suggest;
pub use templates::{compile, CompileRequest, Template};

/// Compile every static regex used by the brain.
///
/// Call once at startup so a malformed keyword table panics before the first
/// request instead of in the middle of one. Safe to call more than once.
pub fn init() {
    patterns::init();
    suggestions::init();
    analyzer::init();
    templates::init();
    info!(
        categories = Category::ALL.len(),
        templates = templates::catalog().len(),
        "Pattern library compiled"
    );
}
