use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use sigtemp_core::{DecodeRequest, decode_request};

fn main() -> ExitCode {
    if let Err(err) = run() {
        eprintln!("error: {}", err);
        return ExitCode::from(1);
    }
    ExitCode::SUCCESS
}

fn run() -> Result<(), String> {
    let root = PathBuf::from("tests").join("golden");
    let entries =
        fs::read_dir(&root).map_err(|err| format!("failed to read {}: {}", root.display(), err))?;

    for entry in entries {
        let entry = entry.map_err(|err| format!("failed to read entry: {}", err))?;
        let path = entry.path();
        if !path.is_dir() {
            continue;
        }
        let input = path.join("request.json");
        if !input.exists() {
            continue;
        }
        let output = path.join("expected_entries.json");
        regenerate_one(&input, &output)?;
    }

    Ok(())
}

fn regenerate_one(input: &Path, output: &Path) -> Result<(), String> {
    let json = fs::read_to_string(input)
        .map_err(|err| format!("failed to read {}: {}", input.display(), err))?;
    let request: DecodeRequest = serde_json::from_str(&json)
        .map_err(|err| format!("invalid request {}: {}", input.display(), err))?;
    let entries = decode_request(&request)
        .map_err(|err| format!("decode failed for {}: {}", input.display(), err))?;
    let json = serde_json::to_string_pretty(&entries)
        .map_err(|err| format!("JSON serialization failed: {}", err))?;
    fs::write(output, json)
        .map_err(|err| format!("failed to write {}: {}", output.display(), err))?;
    Ok(())
}
