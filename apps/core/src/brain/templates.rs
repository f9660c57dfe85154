//! Prompt templates.
//!
//! One template per category plus a `general` default and a `cot`
//! (chain-of-thought) variant. Placeholders use the `{{NAME}}` form and are
//! filled by [`compile`].

use regex::Regex;
use serde::Serialize;
use std::sync::LazyLock;
use tracing::debug;

use super::patterns::Category;

static PLACEHOLDER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\{\{([A-Za-z0-9_]+)\}\}").expect("Invalid regex: template placeholder")
});

pub(crate) fn init() {
    LazyLock::force(&PLACEHOLDER);
}

/// Prompt template structure
#[derive(Debug, Serialize)]
pub struct Template {
    pub key: &'static str,
    pub display_name: &'static str,
    pub structure: &'static str,
}

impl Template {
    /// Placeholder names in order of first appearance, without duplicates.
    pub fn placeholders(&self) -> Vec<&'static str> {
        let mut names: Vec<&'static str> = Vec::new();
        for caps in PLACEHOLDER.captures_iter(self.structure) {
            if let Some(name) = caps.get(1).map(|m| m.as_str()) {
                if !names.contains(&name) {
                    names.push(name);
                }
            }
        }
        names
    }
}

static CODE: Template = Template {
    key: "code",
    display_name: "Code Assistant",
    structure: "You are an experienced software engineer.\n\
                \n\
                Task: {{TASK}}\n\
                Language: {{LANGUAGE}}\n\
                Framework: {{FRAMEWORK}}\n\
                \n\
                Requirements:\n\
                {{REQUIREMENTS}}\n\
                \n\
                Constraints:\n\
                {{CONSTRAINTS}}\n\
                \n\
                Return the complete code with brief comments, then explain \
                how to run it.",
};

static IMAGE: Template = Template {
    key: "image",
    display_name: "Image Generation",
    structure: "{{SUBJECT}}, {{STYLE}} style\n\
                \n\
                Lighting: {{LIGHTING}}\n\
                Color palette: {{COLOR_PALETTE}}\n\
                Composition: {{COMPOSITION}}\n\
                \n\
                --ar {{ASPECT_RATIO}} --v {{VERSION}}",
};

static WRITING: Template = Template {
    key: "writing",
    display_name: "Writing Assistant",
    structure: "Write a {{FORMAT}} about {{TOPIC}}.\n\
                \n\
                Audience: {{AUDIENCE}}\n\
                Tone: {{TONE}}\n\
                Length: {{LENGTH}}\n\
                \n\
                Key points to cover:\n\
                {{KEY_POINTS}}",
};

static ANALYSIS: Template = Template {
    key: "analysis",
    display_name: "Data Analysis",
    structure: "You are a careful data analyst.\n\
                \n\
                Analyze the following {{DATA_TYPE}}:\n\
                {{DATA}}\n\
                \n\
                Goal: {{GOAL}}\n\
                Focus on: {{FOCUS}}\n\
                \n\
                Present the findings as {{OUTPUT_FORMAT}}, ending with the key insights \
                and recommended next steps.",
};

/// Used for any intent without a template of its own
static GENERAL: Template = Template {
    key: "general",
    display_name: "General Prompt",
    structure: "Role: {{ROLE}}\n\
                \n\
                Task: {{TASK}}\n\
                \n\
                Context: {{CONTEXT}}\n\
                \n\
                Output format: {{OUTPUT_FORMAT}}",
};

static COT: Template = Template {
    key: "cot",
    display_name: "Chain of Thought",
    structure: "Task: {{TASK}}\n\
                \n\
                Context: {{CONTEXT}}\n\
                \n\
                Think through this step by step:\n\
                1. Restate what is being asked.\n\
                2. Break the problem into smaller parts.\n\
                3. Work through each part and show your reasoning.\n\
                4. Check the result against the task.\n\
                \n\
                Final answer format: {{OUTPUT_FORMAT}}",
};

static CATALOG: [&Template; 6] = [&CODE, &IMAGE, &WRITING, &ANALYSIS, &GENERAL, &COT];

/// All templates: one per category in declaration order, then `general` and `cot`.
pub fn catalog() -> &'static [&'static Template] {
    &CATALOG
}

fn category_template(category: Category) -> &'static Template {
    match category {
        Category::Code => &CODE,
        Category::Image => &IMAGE,
        Category::Writing => &WRITING,
        Category::Analysis => &ANALYSIS,
    }
}

/// Template for `intent`, or the `general` one when no template matches.
///
/// Category names resolve through [`Category::from_name`]; `cot` is the only
/// other key with a template of its own.
pub fn template_for(intent: &str) -> &'static Template {
    if let Some(category) = Category::from_name(intent) {
        return category_template(category);
    }
    if intent.trim().eq_ignore_ascii_case(COT.key) {
        &COT
    } else {
        &GENERAL
    }
}

/// Intent plus the field values to fill in.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CompileRequest {
    pub intent: String,
    /// Placeholder name (case-insensitive) and value, in insertion order
    pub fields: Vec<(String, String)>,
}

impl CompileRequest {
    pub fn new(intent: impl Into<String>) -> Self {
        Self {
            intent: intent.into(),
            fields: Vec::new(),
        }
    }

    /// Append a field; an empty value renders as `[key]`.
    pub fn field(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.fields.push((key.into(), value.into()));
        self
    }
}

/// Render the template selected by `request.intent`.
///
/// Each field replaces the first occurrence of its `{{KEY}}` token. Tokens
/// without a field are left as they are. Blank lines are dropped from the
/// output.
pub fn compile(request: &CompileRequest) -> String {
    let template = template_for(&request.intent);
    let mut rendered = template.structure.to_string();

    for (key, value) in &request.fields {
        let token = format!("{{{{{}}}}}", key.to_uppercase());
        let replacement = if value.is_empty() {
            format!("[{key}]")
        } else {
            value.clone()
        };
        rendered = rendered.replacen(&token, &replacement, 1);
    }

    debug!(
        intent = %request.intent,
        template = template.key,
        fields = request.fields.len(),
        "Compiled template"
    );

    strip_blank_lines(&rendered)
}

fn strip_blank_lines(text: &str) -> String {
    text.lines()
        .filter(|line| !line.trim().is_empty())
        .collect::<Vec<_>>()
        .join("\n")
        .trim()
        .to_string()
}
