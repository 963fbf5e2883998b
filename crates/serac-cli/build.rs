use std::env;
use std::process::Command;

// Stamps the binary version, with the short git SHA appended when available.
fn main() {
    let version = env::var("CARGO_PKG_VERSION").unwrap_or_else(|_| "0.0.0".to_string());
    match short_sha() {
        Some(sha) => println!("cargo:rustc-env=SERAC_VERSION={version} ({sha})"),
        None => println!("cargo:rustc-env=SERAC_VERSION={version}"),
    }
}

fn short_sha() -> Option<String> {
    let from_ci = env::var("GITHUB_SHA").ok();
    let raw = match from_ci {
        Some(sha) => sha,
        None => {
            let output = Command::new("git")
                .args(["rev-parse", "HEAD"])
                .output()
                .ok()?;
            if !output.status.success() {
                return None;
            }
            String::from_utf8_lossy(&output.stdout).to_string()
        }
    };
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.chars().take(7).collect())
    }
}
