use std::fs;
use std::io::{self, BufRead, BufWriter, Write};
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use marquee_core::{CleanerConfig, FilenameCleaner, TracingSink};
use serde::Serialize;
use tracing::{Level, debug, info, warn};

#[derive(Parser)]
#[command(name = "marquee-parse")]
#[command(about = "Clean media filenames into titles, episodes and years")]
#[command(version)]
struct Cli {
    /// Filenames to clean. Reads one per line from stdin when omitted.
    inputs: Vec<String>,

    /// Include the display title in the output
    #[arg(short, long)]
    display: bool,

    /// JSON file holding a cleaner configuration
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Resolve URI and path inputs to their final segment before cleaning
    #[arg(long)]
    decode_paths: bool,

    /// Never read a bare number as an absolute episode
    #[arg(long)]
    no_loose_absolute: bool,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Debug, Serialize)]
struct ParseOutput<'a> {
    input: &'a str,
    title: String,
    season: u32,
    episode: u32,
    year: Option<u16>,
    is_anime: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    display: Option<String>,
}

fn load_config(cli: &Cli) -> Result<CleanerConfig> {
    let mut config = match &cli.config {
        Some(path) => {
            let raw = fs::read_to_string(path)
                .with_context(|| format!("Failed to read config {}", path.display()))?;
            serde_json::from_str(&raw)
                .with_context(|| format!("Invalid config {}", path.display()))?
        }
        None => CleanerConfig::default(),
    };

    if cli.decode_paths {
        config = config.with_path_decoding(true);
    }
    if cli.no_loose_absolute {
        config = config.with_loose_absolute(false);
    }
    Ok(config)
}

fn emit(
    cleaner: &FilenameCleaner,
    input: &str,
    display: bool,
    out: &mut impl Write,
) -> Result<()> {
    let result = cleaner.clean(input);
    if !result.has_title() {
        warn!(input, "No title left after cleaning");
    }
    let output = ParseOutput {
        input,
        title: result.title,
        season: result.season,
        episode: result.episode,
        year: result.year,
        is_anime: result.is_anime,
        display: display.then(|| cleaner.extract_display_title(input)),
    };
    serde_json::to_writer(&mut *out, &output)?;
    writeln!(out)?;
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        _ => Level::DEBUG,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .init();

    let config = load_config(&cli)?;
    debug!(?config, "Loaded configuration");
    let cleaner = FilenameCleaner::new(config)
        .context("Failed to build filename cleaner")?
        .with_sink(Arc::new(TracingSink));

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    let mut count = 0usize;

    if cli.inputs.is_empty() {
        for line in io::stdin().lock().lines() {
            let line = line.context("Failed to read stdin")?;
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            emit(&cleaner, line, cli.display, &mut out)?;
            count += 1;
        }
    } else {
        for input in &cli.inputs {
            emit(&cleaner, input, cli.display, &mut out)?;
            count += 1;
        }
    }

    out.flush().context("Failed to flush output")?;
    info!("Cleaned {} filenames", count);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(input: &str, display: bool) -> serde_json::Value {
        let mut buf = Vec::new();
        emit(&FilenameCleaner::default(), input, display, &mut buf).unwrap();
        serde_json::from_slice(&buf).unwrap()
    }

    #[test]
    fn emits_one_json_line() {
        let value = run("Show.Name.S01E02.1080p.x264-GROUP.mkv", false);
        assert_eq!(value["title"], "Show Name");
        assert_eq!(value["season"], 1);
        assert_eq!(value["episode"], 2);
        assert_eq!(value["year"], serde_json::Value::Null);
        assert!(value.get("display").is_none());
    }

    #[test]
    fn emits_display_title_on_request() {
        let value = run("Movie.Title.2023.1080p.BluRay.mkv", true);
        assert_eq!(value["year"], 2023);
        assert_eq!(value["display"], "Movie Title (2023)");
    }

    #[test]
    fn emits_empty_title_for_tag_only_input() {
        let value = run("1080p.mkv", true);
        assert_eq!(value["title"], "");
        assert_eq!(value["display"], "1080p.mkv");
    }

    #[test]
    fn flags_override_config() {
        let cli = Cli::parse_from(["marquee-parse", "--decode-paths", "--no-loose-absolute", "x"]);
        let config = load_config(&cli).unwrap();
        assert!(config.decode_paths);
        assert!(!config.loose_absolute_fallback);
        assert_eq!(cli.inputs, vec!["x".to_string()]);
    }
}
