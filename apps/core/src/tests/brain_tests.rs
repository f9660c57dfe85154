//! Brain Module Tests
//!
//! Cross-module tests for the analyzer, the suggestion checklist and the
//! template compiler.

use crate::brain::suggestions::{
    ANALYSIS_DATA, ANALYSIS_INSIGHTS, CODE_GOAL, CODE_LANGUAGE, GENERAL_CONSTRAINTS,
    GENERAL_FORMAT, IMAGE_ASPECT, IMAGE_STYLE, MORE_DETAIL, WRITING_AUDIENCE, WRITING_LENGTH,
    WRITING_TONE,
};
use crate::brain::templates::{catalog, template_for};
use crate::brain::{analyze, compile, suggest, Category, CompileRequest, Intent};

#[cfg(test)]
mod analyzer_tests {
    use super::*;

    const SAMPLES: &[&str] = &[
        "x",
        " ",
        "do stuff",
        "just really very basically stuff and things, whatever, etc",
        "Fix the bug in my python function that queries a database",
        "Write a 300 word \"launch\" email for beginners in a friendly tone",
        "Draw a watercolor portrait of a fox in 16:9",
        "Analyze the CSV of 2023 sales data and report the main trends",
        "Create a REST api in Rust with a database layer, tests, docs and a CI pipeline for \
         deployment to 3 regions with \"zero downtime\" releases please",
    ];

    #[test]
    fn test_quality_always_in_range() {
        for text in SAMPLES {
            let result = analyze(*text).expect("non-empty sample");
            assert!(result.quality <= 100, "quality out of range for '{}'", text);
        }
    }

    #[test]
    fn test_scores_never_negative() {
        for text in SAMPLES {
            let result = analyze(*text).expect("non-empty sample");
            assert_eq!(result.scores.len(), Category::ALL.len());
            assert!(
                result.scores.values().all(|s| *s >= 0.0),
                "negative score for '{}'",
                text
            );
        }
    }

    #[test]
    fn test_more_keywords_never_lower_a_score() {
        let keywords = [
            (Category::Code, "python"),
            (Category::Image, "sketch"),
            (Category::Writing, "essay"),
            (Category::Analysis, "statistics"),
        ];

        for (category, keyword) in keywords {
            let mut text = String::from("a request about");
            let mut previous = 0.0;
            for _ in 0..5 {
                text.push(' ');
                text.push_str(keyword);
                let score = analyze(text.as_str())
                    .expect("non-empty text")
                    .score(category);
                assert!(score > previous, "{} score did not grow", category);
                previous = score;
            }
        }
    }

    #[test]
    fn test_equal_code_and_image_matches_pick_code() {
        let pairs = [
            "python picture",
            "a logo and a function",
            "render the database icon with sql",
        ];
        for text in pairs {
            let result = analyze(text).expect("non-empty text");
            assert_eq!(result.score(Category::Code), result.score(Category::Image));
            assert_eq!(
                result.intent,
                Intent::Category(Category::Code),
                "Expected Code for '{}'",
                text
            );
        }
    }

    #[test]
    fn test_no_keywords_is_general() {
        for text in ["hello there", "tell me something", "12345"] {
            let result = analyze(text).expect("non-empty text");
            assert_eq!(result.intent, Intent::General, "Expected General for '{}'", text);
        }
    }

    #[test]
    fn test_intent_detection_per_category() {
        let cases = [
            ("Refactor this javascript class", Category::Code),
            ("A photo of a mountain lake at dawn", Category::Image),
            ("Draft a newsletter about our garden club", Category::Writing),
            ("Evaluate and compare the survey statistics", Category::Analysis),
        ];
        for (text, expected) in cases {
            let result = analyze(text).expect("non-empty text");
            assert_eq!(
                result.intent,
                Intent::Category(expected),
                "Expected {} for '{}'",
                expected,
                text
            );
        }
    }

    #[test]
    fn test_weak_word_penalty_repeats() {
        let one = analyze("explain stuff").expect("non-empty text");
        let three = analyze("explain stuff stuff stuff").expect("non-empty text");
        assert_eq!(one.quality, 45);
        assert_eq!(three.quality, 35);
    }

    #[test]
    fn test_word_count_thresholds() {
        // exactly 5 words: no bonus
        assert_eq!(analyze("one two three four five").unwrap().quality, 50);
        // 6 words
        assert_eq!(analyze("one two three four five six").unwrap().quality, 60);
        // 16 words
        let sixteen = vec!["word"; 16].join(" ");
        assert_eq!(analyze(sixteen.as_str()).unwrap().quality, 70);
    }

    #[test]
    fn test_suggestions_attached_to_result() {
        let result = analyze("a picture of the sea").expect("non-empty text");
        assert_eq!(result.intent, Intent::Category(Category::Image));
        assert_eq!(result.suggestions, vec![IMAGE_STYLE, IMAGE_ASPECT]);
    }

    #[test]
    fn test_parallel_analysis_matches_sequential() {
        let expected: Vec<_> = SAMPLES.iter().map(|t| analyze(*t)).collect();

        let handles: Vec<_> = (0..4)
            .map(|_| std::thread::spawn(|| SAMPLES.iter().map(|t| analyze(*t)).collect::<Vec<_>>()))
            .collect();

        for handle in handles {
            assert_eq!(handle.join().expect("thread panicked"), expected);
        }
    }
}

#[cfg(test)]
mod suggestion_tests {
    use super::*;

    #[test]
    fn test_length_rule_counts_characters() {
        // 9 characters
        assert_eq!(suggest(Intent::General, "123456789")[0], MORE_DETAIL);
        // 10 characters
        assert!(!suggest(Intent::General, "1234567890").contains(&MORE_DETAIL.to_string()));
    }

    #[test]
    fn test_full_checklists() {
        let cases: Vec<(Intent, &str, Vec<&str>)> = vec![
            (
                Category::Code.into(),
                "an algorithm for primes",
                vec![CODE_LANGUAGE, CODE_GOAL],
            ),
            (
                Category::Writing.into(),
                "a story about a lighthouse keeper",
                vec![WRITING_AUDIENCE, WRITING_LENGTH, WRITING_TONE],
            ),
            (
                Category::Analysis.into(),
                "look at last quarter",
                vec![ANALYSIS_DATA, ANALYSIS_INSIGHTS],
            ),
            (
                Intent::General,
                "tell me about whales",
                vec![GENERAL_FORMAT, GENERAL_CONSTRAINTS],
            ),
        ];

        for (intent, text, expected) in cases {
            assert_eq!(suggest(intent, text), expected, "for '{}'", text);
        }
    }

    #[test]
    fn test_short_code_request_keeps_order() {
        assert_eq!(
            suggest(Category::Code.into(), "api"),
            vec![MORE_DETAIL, CODE_LANGUAGE, CODE_GOAL]
        );
    }

    #[test]
    fn test_keyword_checks_are_case_insensitive() {
        let hints = suggest(
            Category::Writing.into(),
            "An essay for STUDENTS, 2 PAGES, in a FORMAL voice",
        );
        assert!(hints.is_empty(), "unexpected hints: {:?}", hints);
    }

    #[test]
    fn test_short_general_request_skips_format_hint() {
        let hints = suggest(Intent::General, "please");
        assert_eq!(hints, vec![MORE_DETAIL]);
    }
}

#[cfg(test)]
mod template_tests {
    use super::*;

    #[test]
    fn test_catalog_covers_every_category() {
        for category in Category::ALL {
            assert!(
                catalog().iter().any(|t| t.key == category.name()),
                "no template for {}",
                category
            );
        }
        assert!(catalog().iter().any(|t| t.key == "general"));
        assert!(catalog().iter().any(|t| t.key == "cot"));
    }

    #[test]
    fn test_analyze_then_compile() {
        let result = analyze("Write a blog article about urban beekeeping").expect("non-empty text");
        assert_eq!(result.intent, Intent::Category(Category::Writing));

        let prompt = compile(
            &CompileRequest::new(result.intent.name())
                .field("format", "blog article")
                .field("topic", "urban beekeeping"),
        );
        assert!(prompt.starts_with("Write a blog article about urban beekeeping."));
    }

    #[test]
    fn test_general_intent_uses_general_template() {
        let prompt = compile(&CompileRequest::new(Intent::General.name()).field("task", "plan a trip"));
        assert!(prompt.contains("Task: plan a trip"));
        assert!(prompt.starts_with("Role: {{ROLE}}"));
    }

    #[test]
    fn test_unknown_intent_renders_general() {
        let legal = compile(&CompileRequest::new("legal").field("task", "review a lease"));
        let general = compile(&CompileRequest::new("general").field("task", "review a lease"));
        assert_eq!(legal, general);
    }

    #[test]
    fn test_cot_template() {
        let prompt = compile(
            &CompileRequest::new("cot")
                .field("task", "estimate the number of piano tuners in Chicago")
                .field("context", "")
                .field("output_format", "a single number"),
        );
        assert!(prompt.starts_with("Task: estimate"));
        assert!(prompt.contains("Context: [context]"));
        assert!(prompt.ends_with("Final answer format: a single number"));
    }

    #[test]
    fn test_output_has_no_blank_lines_or_outer_whitespace() {
        for template in catalog() {
            let prompt = compile(&CompileRequest::new(template.key));
            assert_eq!(prompt, prompt.trim());
            assert!(prompt.lines().all(|l| !l.trim().is_empty()), "blank line in {}", template.key);
        }
    }

    #[test]
    fn test_unfilled_placeholders_survive() {
        let template = template_for("analysis");
        let prompt = compile(&CompileRequest::new("analysis"));
        for name in template.placeholders() {
            assert!(prompt.contains(&format!("{{{{{}}}}}", name)));
        }
    }
}
