mod http;
mod reports;
mod scenarios;

use anyhow::{Context, Result, bail};
use clap::{Parser, ValueEnum};
use colored::Colorize;
use std::fs::File;
use std::io::{BufWriter, Write, stdout};
use std::path::PathBuf;
use std::time::Instant;

use scenarios::{Scenario, ScenarioResult, Target, find_scenario, list_scenarios, run_scenario};

const DEFAULT_ENDPOINT: &str = "https://731xy9c2ak.execute-api.eu-north-1.amazonaws.com/booking";

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum TestMode {
    /// In-process reference backend (fast, offline)
    Logic,
    /// Live booking endpoint over HTTP
    Http,
}

#[derive(Debug, Parser)]
#[command(name = "strike-tester", version)]
#[command(
    about = "Runs the Strike booking scenarios against the reference backend or a live endpoint"
)]
struct Args {
    /// Where booked scenarios are sent
    #[arg(long, value_enum, default_value_t = TestMode::Logic)]
    mode: TestMode,

    /// Scenarios to run (comma-separated, or "all")
    #[arg(long, default_value = "all")]
    scenarios: String,

    /// Booking endpoint used in http mode
    #[arg(long, default_value = DEFAULT_ENDPOINT)]
    endpoint: String,

    /// List all available scenarios and exit
    #[arg(long)]
    list_scenarios: bool,

    /// Output report format
    #[arg(long, default_value = "console")]
    #[arg(value_parser = ["json", "markdown", "console"])]
    report: String,

    /// Optional path to write the report output instead of stdout
    #[arg(long)]
    output: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    if maybe_list_scenarios(&args)? {
        return Ok(());
    }

    let selected = select_scenarios(&args.scenarios)?;
    let target = match args.mode {
        TestMode::Logic => Target::Reference,
        TestMode::Http => Target::Endpoint(args.endpoint.clone()),
    };

    if args.report == "console" && args.output.is_none() {
        announce_banner(&target);
    }

    let start_time = Instant::now();
    let mut results = Vec::with_capacity(selected.len());
    for scenario in &selected {
        if args.verbose {
            eprintln!("🧪 {} ({})", scenario.key.bright_white(), scenario.description);
        }
        results.push(run_scenario(scenario, &target).await);
    }

    write_reports(&args, &results, start_time)?;

    if results.iter().any(|r| !r.passed) {
        std::process::exit(1);
    }
    Ok(())
}

fn maybe_list_scenarios(args: &Args) -> Result<bool> {
    if !args.list_scenarios {
        return Ok(false);
    }
    let mut output_target = OutputTarget::new(args.output.clone())?;
    writeln!(output_target.writer(), "Available scenarios:")?;
    for (key, description) in list_scenarios() {
        writeln!(output_target.writer(), "  {key:30} - {description}")?;
    }
    output_target.flush_inner()?;
    Ok(true)
}

fn announce_banner(target: &Target) {
    println!("{}", "🎳 Strike Booking Tester".bright_cyan().bold());
    println!("{}", "========================".cyan());
    println!("Target: {}", target.label().yellow());
}

fn select_scenarios(arg: &str) -> Result<Vec<Scenario>> {
    let keys = split_csv(arg);
    if keys.iter().any(|k| k == "all") {
        return Ok(scenarios::catalog());
    }
    let mut selected = Vec::with_capacity(keys.len());
    for key in keys {
        let Some(scenario) = find_scenario(&key) else {
            bail!("unknown scenario: {key} (see --list-scenarios)");
        };
        selected.push(scenario);
    }
    Ok(selected)
}

fn split_csv(s: &str) -> Vec<String> {
    s.split(',')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(ToString::to_string)
        .collect()
}

fn write_reports(args: &Args, results: &[ScenarioResult], start_time: Instant) -> Result<()> {
    let mut output_target = OutputTarget::new(args.output.clone())?;

    match args.report.as_str() {
        "json" => reports::generate_json_report(output_target.writer(), results)?,
        "markdown" => reports::generate_markdown_report(output_target.writer(), results)?,
        _ => reports::generate_console_report(
            output_target.writer(),
            results,
            start_time.elapsed(),
        )?,
    }

    output_target.flush_inner()?;
    Ok(())
}

enum OutputTarget {
    Stdout(BufWriter<std::io::Stdout>),
    File(BufWriter<File>),
}

impl OutputTarget {
    fn new(path: Option<PathBuf>) -> Result<Self> {
        if let Some(path) = path {
            let file = File::create(&path)
                .with_context(|| format!("failed to create {}", path.display()))?;
            Ok(Self::File(BufWriter::new(file)))
        } else {
            Ok(Self::Stdout(BufWriter::new(stdout())))
        }
    }

    fn writer(&mut self) -> &mut dyn Write {
        match self {
            Self::Stdout(w) => w,
            Self::File(w) => w,
        }
    }

    fn flush_inner(&mut self) -> std::io::Result<()> {
        match self {
            Self::Stdout(w) => w.flush(),
            Self::File(w) => w.flush(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_csv_trims_and_drops_empty() {
        assert_eq!(
            split_csv(" empty-form, ,lane-capacity "),
            vec!["empty-form", "lane-capacity"]
        );
    }

    #[test]
    fn all_selects_whole_catalog() {
        let selected = select_scenarios("all").unwrap();
        assert_eq!(selected.len(), scenarios::catalog().len());
    }

    #[test]
    fn unknown_scenario_is_an_error() {
        let err = select_scenarios("empty-form,bogus").unwrap_err();
        assert!(err.to_string().contains("bogus"));
    }

    #[test]
    fn args_default_to_logic_mode() {
        let args = Args::parse_from(["strike-tester"]);
        assert_eq!(args.mode, TestMode::Logic);
        assert_eq!(args.endpoint, DEFAULT_ENDPOINT);
        assert_eq!(args.report, "console");

        let args = Args::parse_from([
            "strike-tester",
            "--mode",
            "http",
            "--endpoint",
            "http://localhost:8080/booking",
        ]);
        assert_eq!(args.mode, TestMode::Http);
        assert_eq!(args.endpoint, "http://localhost:8080/booking");
    }

    #[test]
    fn report_goes_to_file() {
        let path = std::env::temp_dir().join("strike-tester-report-unit.json");
        let args = Args::parse_from([
            "strike-tester",
            "--report",
            "json",
            "--output",
            path.to_str().unwrap(),
        ]);
        write_reports(&args, &[], Instant::now()).unwrap();
        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(content.trim(), "[]");
    }
}
