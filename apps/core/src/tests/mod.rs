//! Test Module
//!
//! Crate-level test suite for promptsmith.
//!
//! ## Test Categories
//! - `brain_tests`: intent selection, quality scoring, suggestions, templates
//! - `config_tests`: environment-driven configuration

pub mod brain_tests;
pub mod config_tests;
