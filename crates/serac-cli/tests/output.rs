#[path = "../src/output.rs"]
mod output;

use output::{format_failure, format_success, OutputFormat};
use serac_core::LoadError;

fn sample_failure() -> LoadError {
    let empty = serac_core::yaml_rust2::Yaml::Hash(serac_core::yaml_rust2::yaml::Hash::new());
    let errors = match serac_core::decode_document(&empty) {
        Err(errors) => errors,
        Ok(_) => panic!("empty document should not decode"),
    };
    LoadError::Decode(errors)
}

#[test]
fn text_failure_lists_one_error_per_line() {
    let err = sample_failure();
    let rendered = format_failure("/tmp/pipeline.yml", &err, OutputFormat::Text);
    assert!(rendered.contains("error: missing required field aws"));
}

#[test]
fn json_failure_carries_status_and_paths() {
    let err = sample_failure();
    let rendered = format_failure("/tmp/pipeline.yml", &err, OutputFormat::Json);
    assert!(rendered.contains("\"status\": \"invalid\""));
    assert!(rendered.contains("\"config\": \"/tmp/pipeline.yml\""));
    assert!(rendered.contains("\"path\": \"aws\""));
}

#[test]
fn success_text_names_the_config_path() {
    let rendered = format_success("/tmp/pipeline.yml", OutputFormat::Text);
    assert!(rendered.contains("/tmp/pipeline.yml"));
    assert!(rendered.contains("well formed"));
}
