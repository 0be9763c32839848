use std::env;
use std::process::Command;

const UNKNOWN: &str = "unknown";

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-env-changed=SIGTEMP_COMMIT");

    let commit = env::var("SIGTEMP_COMMIT")
        .ok()
        .filter(|v| !v.is_empty())
        .map(|full| full.chars().take(7).collect())
        .or_else(|| git(&["rev-parse", "--short", "HEAD"]))
        .unwrap_or_else(|| UNKNOWN.to_string());
    let commit_date = git(&["log", "-1", "--format=%cs"]).unwrap_or_else(|| UNKNOWN.to_string());

    let version = env::var("CARGO_PKG_VERSION").unwrap_or_else(|_| UNKNOWN.to_string());
    println!("cargo:rustc-env=SIGTEMP_LONG_VERSION={version} ({commit} {commit_date})");
}

fn git(args: &[&str]) -> Option<String> {
    let output = Command::new("git").args(args).output().ok()?;
    if !output.status.success() {
        return None;
    }
    let value = String::from_utf8_lossy(&output.stdout).trim().to_string();
    if value.is_empty() { None } else { Some(value) }
}
