//! Runs a rover command script and reports where every rover ends up.
//!
//! Usage: `rover-sim [SCRIPT] [--trace] [--format text|json]`
//!
//! Reads the script from stdin when `SCRIPT` is omitted or `-`.

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use plateau_rover::{RoverTrack, parse_commands};
use std::io::{self, Read};
use std::path::PathBuf;
use std::process;
use tracing::{error, info};
use tracing_subscriber::{EnvFilter, fmt};

#[derive(Parser, Debug)]
#[command(name = "rover-sim")]
#[command(about = "Simulate rovers moving on a plateau from a command script")]
struct Args {
    /// Path to the command script (`-` for stdin)
    script: Option<PathBuf>,

    /// Print every intermediate state, not just the final one
    #[arg(long)]
    trace: bool,

    /// Output format
    #[arg(long, value_enum, default_value_t = Format::Text)]
    format: Format,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Format {
    Text,
    Json,
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("warn,plateau_rover=info,rover_sim=info"));
    fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn read_script(path: Option<&PathBuf>) -> Result<String> {
    match path {
        Some(path) if path.as_os_str() != "-" => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read script '{}'", path.display())),
        _ => {
            let mut script = String::new();
            io::stdin()
                .read_to_string(&mut script)
                .context("failed to read script from stdin")?;
            Ok(script)
        }
    }
}

fn render_text(tracks: &[RoverTrack], trace: bool) -> String {
    let mut out = String::new();
    for (i, track) in tracks.iter().enumerate() {
        if trace {
            out.push_str(&format!("rover {}\n", i + 1));
            for snapshot in &track.snapshots {
                out.push_str(&format!("  {snapshot}\n"));
            }
        } else if let Some(last) = track.final_state() {
            out.push_str(&format!("{last}\n"));
        }
    }
    out
}

fn render_json(tracks: &[RoverTrack], trace: bool) -> Result<String> {
    let json = if trace {
        serde_json::to_string_pretty(tracks)?
    } else {
        let finals: Vec<_> = tracks.iter().filter_map(RoverTrack::final_state).collect();
        serde_json::to_string_pretty(&finals)?
    };
    Ok(json + "\n")
}

fn run(args: &Args) -> Result<String> {
    let script = read_script(args.script.as_ref())?;
    // Drop the file's terminating newline; it is not an empty movement line.
    let script = script.strip_suffix('\n').unwrap_or(&script);
    let mission = parse_commands(script)?;
    info!(rovers = mission.rovers.len(), "running mission");

    let tracks = mission.run()?;
    match args.format {
        Format::Text => Ok(render_text(&tracks, args.trace)),
        Format::Json => render_json(&tracks, args.trace),
    }
}

fn main() {
    init_logging();

    let args = Args::parse();

    match run(&args) {
        Ok(output) => print!("{output}"),
        Err(err) => {
            error!("{err:#}");
            process::exit(1);
        }
    }
}
