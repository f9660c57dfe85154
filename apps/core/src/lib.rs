//! promptsmith - prompt intent scoring and template compilation.
//!
//! ```
//! use promptsmith::{analyze, compile, Category, CompileRequest, Intent};
//!
//! let result = analyze("Write a Python function that parses CSV rows").unwrap();
//! assert_eq!(result.intent, Intent::Category(Category::Code));
//!
//! let prompt = compile(&CompileRequest::new("code").field("language", "Python"));
//! assert!(prompt.contains("Language: Python"));
//! ```

pub mod brain;
pub mod cli;
pub mod config;
pub mod error;
pub mod telemetry;

pub use brain::{analyze, compile, suggest, AnalysisResult, Category, CompileRequest, Intent};
pub use error::AppError;

#[cfg(test)]
mod tests;
