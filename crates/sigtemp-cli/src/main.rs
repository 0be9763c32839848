use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use glob::glob;
use sigtemp_core::{DecodeError, DecodeRequest, Entry, FrameError, Metadata};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

const EXAMPLES: &str = "Examples:\n  sigtemp decode 2BA31100FA22FF9C --station 1A2B --seq-number 42\n  sigtemp request uplink.json -o entries.json\n  cat uplink.json | sigtemp request - --pretty";

#[derive(Parser, Debug)]
#[command(name = "sigtemp")]
#[command(version = env!("SIGTEMP_LONG_VERSION"))]
#[command(
    about = "Decoder for wireless temperature sensor uplink payloads.",
    long_about = None,
    after_help = EXAMPLES
)]
struct Cli {
    /// Enable debug logging (RUST_LOG overrides)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Decode a hex payload given on the command line.
    Decode {
        /// Hex payload, e.g. 2BA31100FA22FF9C
        payload: String,

        #[command(flatten)]
        metadata: MetadataArgs,

        #[command(flatten)]
        output: OutputArgs,
    },
    /// Decode a JSON request file: {"data": "...", "custom": {...}}.
    Request {
        /// Path or glob pattern to a .json request, or - for stdin
        input: PathBuf,

        #[command(flatten)]
        output: OutputArgs,
    },
}

// Numbers and booleans keep their JSON type; anything else is forwarded as a
// string.
#[derive(Args, Debug)]
struct MetadataArgs {
    #[arg(long)]
    snr: Option<String>,
    #[arg(long)]
    station: Option<String>,
    #[arg(long)]
    avg_snr: Option<String>,
    #[arg(long)]
    rssi: Option<String>,
    #[arg(long)]
    seq_number: Option<String>,
}

#[derive(Args, Debug)]
struct OutputArgs {
    /// Output path for the decoded entries (JSON); stdout when omitted
    #[arg(short = 'o', long)]
    output: Option<PathBuf>,

    /// Write JSON entries to stdout
    #[arg(long, conflicts_with = "output")]
    stdout: bool,

    /// Pretty-print JSON output
    #[arg(long, conflicts_with = "compact")]
    pretty: bool,

    /// Compact JSON output (default)
    #[arg(long)]
    compact: bool,

    /// Suppress non-error output
    #[arg(long)]
    quiet: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = match cli.command {
        Commands::Decode {
            payload,
            metadata,
            output,
        } => cmd_decode(payload, metadata, output),
        Commands::Request { input, output } => cmd_request(input, output),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {}", err.message);
            if let Some(hint) = err.hint {
                eprintln!("hint: {}", hint);
            }
            ExitCode::from(2)
        }
    }
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

#[derive(Debug)]
struct CliError {
    message: String,
    hint: Option<String>,
}

impl CliError {
    fn new(message: impl Into<String>, hint: Option<String>) -> Self {
        Self {
            message: message.into(),
            hint,
        }
    }
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CliError {}

impl From<anyhow::Error> for CliError {
    fn from(err: anyhow::Error) -> Self {
        CliError::new(format!("{err:#}"), None)
    }
}

impl From<DecodeError> for CliError {
    fn from(err: DecodeError) -> Self {
        let hint = match &err {
            DecodeError::Hex(_) => "the payload must be an even-length hex string",
            DecodeError::Frame(FrameError::TooShort { .. }) => {
                "pass the complete frame; each message type has a fixed length"
            }
        };
        CliError::new(format!("decode failed: {err}"), Some(hint.to_string()))
    }
}

fn cmd_decode(payload: String, metadata: MetadataArgs, output: OutputArgs) -> Result<(), CliError> {
    let request = DecodeRequest {
        data: payload,
        custom: metadata.into_metadata(),
    };
    decode_and_write(&request, &output, None)
}

fn cmd_request(input: PathBuf, output: OutputArgs) -> Result<(), CliError> {
    let (request, input_path) = if input.as_os_str() == "-" {
        let mut json = String::new();
        std::io::stdin()
            .read_to_string(&mut json)
            .context("Failed to read request from stdin")?;
        (parse_request(&json, "stdin")?, None)
    } else {
        let resolved = resolve_input_path(&input)?;
        validate_input_file(&resolved)?;
        let json = fs::read_to_string(&resolved)
            .with_context(|| format!("Failed to read input file: {}", resolved.display()))?;
        let request = parse_request(&json, &resolved.display().to_string())?;
        (request, Some(resolved))
    };
    decode_and_write(&request, &output, input_path.as_deref())
}

impl MetadataArgs {
    fn into_metadata(self) -> Metadata {
        Metadata {
            snr: metadata_value(self.snr),
            station: metadata_value(self.station),
            avg_snr: metadata_value(self.avg_snr),
            rssi: metadata_value(self.rssi),
            seq_number: metadata_value(self.seq_number),
        }
    }
}

fn metadata_value(raw: Option<String>) -> serde_json::Value {
    let Some(text) = raw else {
        return serde_json::Value::Null;
    };
    match serde_json::from_str::<serde_json::Value>(&text) {
        Ok(value) if value.is_number() || value.is_boolean() => value,
        _ => serde_json::Value::String(text),
    }
}

fn parse_request(json: &str, origin: &str) -> Result<DecodeRequest, CliError> {
    serde_json::from_str(json).map_err(|err| {
        CliError::new(
            format!("invalid request in {origin}: {err}"),
            Some(r#"expected {"data": "<hex>", "custom": {...}}"#.to_string()),
        )
    })
}

fn decode_and_write(
    request: &DecodeRequest,
    output: &OutputArgs,
    input: Option<&Path>,
) -> Result<(), CliError> {
    if let (Some(path), Some(input)) = (output.output.as_ref(), input) {
        ensure_distinct_output(path, input)?;
    }

    let entries = sigtemp_core::decode_request(request)?;
    debug!(entries = entries.len(), "payload decoded");
    let json = serialize_entries(&entries, output.pretty, output.compact)?;

    let path = match output.output.as_ref() {
        Some(path) if !output.stdout => path,
        _ => {
            println!("{}", json);
            return Ok(());
        }
    };

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create output directory: {}", parent.display())
            })?;
        }
    }
    fs::write(path, json).with_context(|| format!("Failed to write entries: {}", path.display()))?;
    info!(path = %path.display(), "entries written");

    if !output.quiet {
        eprintln!("OK: entries written -> {}", path.display());
    }
    Ok(())
}

fn serialize_entries(entries: &[Entry], pretty: bool, compact: bool) -> Result<String, CliError> {
    if pretty && compact {
        return Err(CliError::new(
            "cannot use --pretty and --compact together",
            Some("choose one output format".to_string()),
        ));
    }
    if pretty {
        serde_json::to_string_pretty(entries)
            .context("JSON serialization failed")
            .map_err(Into::into)
    } else {
        serde_json::to_string(entries)
            .context("JSON serialization failed")
            .map_err(Into::into)
    }
}

fn ensure_distinct_output(output: &Path, input: &Path) -> Result<(), CliError> {
    let input_abs = fs::canonicalize(input)
        .with_context(|| format!("Failed to resolve input path: {}", input.display()))?;
    let Some(file_name) = output.file_name() else {
        return Err(CliError::new(
            format!("invalid output path: {}", output.display()),
            Some("pass a file path to -o/--output".to_string()),
        ));
    };
    let parent = match output.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    // A parent that does not exist yet cannot hold the input file.
    let Ok(parent_abs) = fs::canonicalize(parent) else {
        return Ok(());
    };
    if parent_abs.join(file_name) == input_abs {
        return Err(CliError::new(
            format!("output path must differ from input: {}", output.display()),
            Some("choose a different output path".to_string()),
        ));
    }
    Ok(())
}

fn validate_input_file(input: &Path) -> Result<(), CliError> {
    if !input.exists() {
        return Err(CliError::new(
            format!("input file not found: {}", input.display()),
            Some("use a .json request file or - for stdin".to_string()),
        ));
    }
    if !input.is_file() {
        return Err(CliError::new(
            format!("input is not a file: {}", input.display()),
            Some("use a .json request file or - for stdin".to_string()),
        ));
    }
    let ext = input
        .extension()
        .and_then(|ext| ext.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();
    if ext != "json" {
        return Err(CliError::new(
            format!("unsupported input format '{}'", input.display()),
            Some("expected a .json request file".to_string()),
        ));
    }
    Ok(())
}

fn resolve_input_path(input: &Path) -> Result<PathBuf, CliError> {
    let pattern = input.to_string_lossy();
    if !is_glob_pattern(&pattern) {
        return Ok(input.to_path_buf());
    }

    let mut matches = Vec::new();
    let paths = glob(&pattern).map_err(|err| {
        CliError::new(
            format!("invalid input pattern '{}'", pattern),
            Some(format!("pattern error: {}", err.msg)),
        )
    })?;
    for entry in paths {
        let path = entry.map_err(|err| {
            CliError::new(
                format!("invalid input pattern '{}'", pattern),
                Some(format!("pattern error: {}", err)),
            )
        })?;
        if path.is_file() {
            matches.push(path);
        }
    }

    match matches.len() {
        0 => Err(CliError::new(
            format!("no files match pattern '{}'", pattern),
            Some("check the path or quote the pattern; expected a .json request".to_string()),
        )),
        1 => Ok(matches.remove(0)),
        count => {
            let listed = matches
                .iter()
                .take(3)
                .map(|p| p.display().to_string())
                .collect::<Vec<_>>()
                .join(", ");
            let more = if count > 3 { ", ..." } else { "" };
            Err(CliError::new(
                format!(
                    "multiple files match pattern '{}' ({} matches); matches: {}{}",
                    pattern, count, listed, more
                ),
                Some("pass a single request file, or run once per file".to_string()),
            ))
        }
    }
}

fn is_glob_pattern(input: &str) -> bool {
    input.contains('*') || input.contains('?') || input.contains('[')
}

#[cfg(test)]
mod tests {
    use super::{is_glob_pattern, metadata_value};
    use serde_json::json;

    #[test]
    fn metadata_keeps_numbers_typed() {
        assert_eq!(metadata_value(Some("42".to_string())), json!(42));
        assert_eq!(metadata_value(Some("-120.5".to_string())), json!(-120.5));
        assert_eq!(metadata_value(Some("true".to_string())), json!(true));
    }

    #[test]
    fn metadata_falls_back_to_string() {
        assert_eq!(metadata_value(Some("1A2B".to_string())), json!("1A2B"));
        assert_eq!(metadata_value(Some("0012".to_string())), json!("0012"));
        assert_eq!(metadata_value(Some("null".to_string())), json!("null"));
        assert_eq!(metadata_value(None), json!(null));
    }

    #[test]
    fn glob_detection() {
        assert!(is_glob_pattern("captures/*.json"));
        assert!(is_glob_pattern("uplink-?.json"));
        assert!(!is_glob_pattern("uplink.json"));
    }
}
