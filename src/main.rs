mod report;

use chrono::{Local, NaiveDate};
use clap::Parser;
use serde::Serialize;
use std::io::{self, IsTerminal, Read};
use std::path::PathBuf;
use std::process::ExitCode;
use swimtally::{IntensitySystem, Options, PoolType, WorkoutSummary, parse_verbose_with};
use tracing_subscriber::EnvFilter;

/// Summarise a free-form swim workout: total distance, distance per stroke and
/// per intensity.
///
/// Input is read from --input, --file, the trailing words, or stdin.
/// A literal `\n` in inline text starts a new line.
#[derive(Debug, Parser)]
#[command(name = "swimtally", version)]
struct Cli {
    /// Workout text given inline.
    #[arg(short, long, conflicts_with_all = ["file", "words"])]
    input: Option<String>,

    /// Read the workout from a file.
    #[arg(short, long, conflicts_with = "words")]
    file: Option<PathBuf>,

    /// Colour vocabulary for zone words: polar or international.
    #[arg(long, env = "SWIMTALLY_INTENSITY", default_value = "polar")]
    system: IntensitySystem,

    /// Pool type (SCY, SCM, LCM). Only changes the unit label.
    #[arg(long, env = "SWIMTALLY_POOL", default_value = "LCM")]
    pool: PoolType,

    /// Workout date: YYYY-MM-DD or an English expression like "yesterday".
    #[arg(long)]
    date: Option<String>,

    /// Print the summary as JSON.
    #[arg(long)]
    json: bool,

    /// Also print every logical unit with its sets, and timings.
    #[arg(long)]
    trace: bool,

    /// Force ANSI color output.
    #[arg(long, conflicts_with = "no_color")]
    color: bool,

    /// Disable ANSI color output.
    #[arg(long)]
    no_color: bool,

    /// Debug-level logging on stderr (otherwise SWIMTALLY_LOG, default "error").
    #[arg(short, long)]
    verbose: bool,

    /// Workout text as trailing words.
    #[arg(trailing_var_arg = true)]
    words: Vec<String>,
}

#[derive(Serialize)]
struct JsonReport<'a> {
    date: String,
    pool: PoolType,
    unit: &'static str,
    intensity_system: IntensitySystem,
    summary: &'a WorkoutSummary,
    warnings: Vec<String>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let input = match read_input(&cli) {
        Ok(input) => input,
        Err(err) => {
            eprintln!("{err}");
            return ExitCode::from(2);
        }
    };
    let date = match resolve_date(cli.date.as_deref()) {
        Ok(date) => date,
        Err(err) => {
            eprintln!("{err}");
            return ExitCode::from(2);
        }
    };

    let res = match parse_verbose_with(&input, &Options::new(cli.system)) {
        Ok(res) => res,
        Err(err) => {
            eprintln!("error: invalid workout format: {err}");
            return ExitCode::from(1);
        }
    };

    if cli.json {
        let report = JsonReport {
            date: date.to_string(),
            pool: cli.pool,
            unit: cli.pool.unit_label(),
            intensity_system: cli.system,
            summary: &res.summary,
            warnings: res.details.diagnostics.iter().map(ToString::to_string).collect(),
        };
        match serde_json::to_string_pretty(&report) {
            Ok(json) => println!("{json}"),
            Err(err) => {
                eprintln!("error: failed to encode summary: {err}");
                return ExitCode::from(1);
            }
        }
    } else {
        let color = if cli.color {
            true
        } else if cli.no_color {
            false
        } else {
            io::stdout().is_terminal()
        };
        let header = report::Header { date, pool: cli.pool, system: cli.system };
        report::print_summary(&header, &res, cli.trace, color);
    }

    ExitCode::SUCCESS
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_env("SWIMTALLY_LOG").unwrap_or_else(|_| EnvFilter::new("error"))
    };
    tracing_subscriber::fmt().with_env_filter(filter).with_writer(io::stderr).init();
}

fn read_input(cli: &Cli) -> Result<String, String> {
    let input = if let Some(text) = &cli.input {
        unescape_newlines(text)
    } else if let Some(path) = &cli.file {
        std::fs::read_to_string(path).map_err(|err| format!("error: failed to read {}: {err}", path.display()))?
    } else if !cli.words.is_empty() {
        unescape_newlines(&cli.words.join(" "))
    } else {
        let mut buffer = String::new();
        io::stdin().read_to_string(&mut buffer).map_err(|err| format!("error: failed to read stdin: {err}"))?;
        buffer
    };

    if input.trim().is_empty() {
        return Err("error: no workout text provided (see --help)".to_string());
    }
    Ok(input)
}

fn unescape_newlines(text: &str) -> String {
    text.replace("\\n", "\n")
}

fn resolve_date(value: Option<&str>) -> Result<NaiveDate, String> {
    let now = Local::now();
    let Some(value) = value else {
        return Ok(now.date_naive());
    };

    if let Ok(date) = NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d") {
        return Ok(date);
    }
    chrono_english::parse_date_string(value, now, chrono_english::Dialect::Uk)
        .map(|when| when.date_naive())
        .map_err(|err| format!("error: invalid --date '{value}': {err}"))
}
