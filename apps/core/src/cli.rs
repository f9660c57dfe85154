//! Command-line front end.

use std::io::Read;

use clap::{Parser, Subcommand};
use serde::Serialize;

use crate::brain::analyze;
use crate::brain::templates::{catalog, compile, CompileRequest};
use crate::config::AppConfig;
use crate::error::AppError;

#[derive(Debug, Parser)]
#[command(
    name = "promptsmith",
    about = "Classify prompt requests, score them and fill prompt templates",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Detect the intent and quality of a request (reads stdin if no text is given)
    Analyze {
        /// Request text; multiple words are joined with spaces
        text: Vec<String>,
    },
    /// Render the template for an intent
    Compile {
        /// Template key (code, image, writing, analysis, general, cot)
        #[arg(short, long)]
        intent: String,
        /// Placeholder value as KEY=VALUE; repeat for several fields
        #[arg(short, long = "field", value_name = "KEY=VALUE")]
        fields: Vec<String>,
    },
    /// List the available templates and their placeholders
    Templates,
}

#[derive(Serialize)]
struct TemplateInfo {
    key: &'static str,
    display_name: &'static str,
    placeholders: Vec<&'static str>,
}

/// Split a `KEY=VALUE` argument. The value may be empty, the key may not.
pub fn parse_field(arg: &str) -> Result<(String, String), AppError> {
    let (key, value) = arg
        .split_once('=')
        .ok_or_else(|| AppError::Validation(format!("field '{arg}' is not KEY=VALUE")))?;

    let key = key.trim();
    if key.is_empty() {
        return Err(AppError::Validation(format!("field '{arg}' has an empty key")));
    }

    Ok((key.to_string(), value.to_string()))
}

/// Run `command` and return what should be printed on stdout.
pub fn execute(
    command: &Command,
    config: &AppConfig,
    stdin: &mut dyn Read,
) -> Result<String, AppError> {
    match command {
        Command::Analyze { text } => {
            let input = if text.is_empty() {
                let mut buffer = String::new();
                stdin.read_to_string(&mut buffer)?;
                strip_line_terminator(&mut buffer);
                buffer
            } else {
                text.join(" ")
            };
            to_json(&analyze(input.as_str()), config)
        }
        Command::Compile { intent, fields } => {
            let mut request = CompileRequest::new(intent.as_str());
            for arg in fields {
                let (key, value) = parse_field(arg)?;
                request = request.field(key, value);
            }
            Ok(compile(&request))
        }
        Command::Templates => {
            let infos: Vec<TemplateInfo> = catalog()
                .iter()
                .map(|t| TemplateInfo {
                    key: t.key,
                    display_name: t.display_name,
                    placeholders: t.placeholders(),
                })
                .collect();
            to_json(&infos, config)
        }
    }
}

/// Drop the one line terminator piped input ends with.
fn strip_line_terminator(buffer: &mut String) {
    if buffer.ends_with('\n') {
        buffer.pop();
        if buffer.ends_with('\r') {
            buffer.pop();
        }
    }
}

fn to_json<T: Serialize>(value: &T, config: &AppConfig) -> Result<String, AppError> {
    let json = if config.compact_json {
        serde_json::to_string(value)?
    } else {
        serde_json::to_string_pretty(value)?
    };
    Ok(json)
}
