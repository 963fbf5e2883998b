use serde::Serialize;

use serac_core::{DecodeError, LoadError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Debug, Serialize)]
struct ValidationReport<'a> {
    status: &'static str,
    config: &'a str,
    errors: &'a [DecodeError],
}

pub fn format_success(config_path: &str, format: OutputFormat) -> String {
    match format {
        OutputFormat::Text => format!(
            "Your config file at location {config_path} is well formed.\nYou can now hand it to the pipeline runner."
        ),
        OutputFormat::Json => {
            let report = ValidationReport {
                status: "valid",
                config: config_path,
                errors: &[],
            };
            serde_json::to_string_pretty(&report)
                .unwrap_or_else(|_| "{\"status\":\"valid\"}".to_string())
        }
    }
}

pub fn format_failure(config_path: &str, err: &LoadError, format: OutputFormat) -> String {
    match (err, format) {
        (LoadError::Decode(errors), OutputFormat::Json) => {
            let report = ValidationReport {
                status: "invalid",
                config: config_path,
                errors,
            };
            serde_json::to_string_pretty(&report)
                .unwrap_or_else(|_| "{\"status\":\"invalid\"}".to_string())
        }
        (LoadError::Decode(errors), OutputFormat::Text) => {
            let lines: Vec<String> = errors.iter().map(|error| format!("error: {error}")).collect();
            lines.join("\n")
        }
        (other, _) => format!("error: {other}"),
    }
}
