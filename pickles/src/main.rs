//! Pickles command-line entry point.
//!
//! Maps Gherkin AST documents into the domain model and correlates them with
//! test reports, printing JSON to stdout.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use serde::Serialize;
use tracing::{debug, info};

use pickles::core::mapper::Mapper;
use pickles::core::model::Feature;
use pickles::exit_codes;
use pickles::io::config::{PicklesConfig, ResultsFormat, ResultsSource, load_config};
use pickles::io::document::load_document;
use pickles::logging;
use pickles::results::load_all;
use pickles::verdicts::FeatureVerdicts;

#[derive(Parser)]
#[command(
    name = "pickles",
    version,
    about = "Gherkin domain model mapping and test-result correlation"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the domain model of a Gherkin AST document as JSON.
    Map {
        #[command(flatten)]
        input: InputArgs,
    },
    /// Print per-feature and per-scenario verdicts from test reports as JSON.
    Results {
        #[command(flatten)]
        input: InputArgs,
        /// SpecRun HTML report (repeatable).
        #[arg(long = "spec-run", value_name = "PATH")]
        spec_run: Vec<PathBuf>,
        /// Cucumber JSON report (repeatable).
        #[arg(long = "cucumber-json", value_name = "PATH")]
        cucumber_json: Vec<PathBuf>,
    },
}

#[derive(Args)]
struct InputArgs {
    /// Gherkin AST JSON produced by the parser.
    document: PathBuf,
    /// Config file; missing file means defaults.
    #[arg(long, default_value = "pickles.toml")]
    config: PathBuf,
    /// Keyword language, overriding the document's and the config's.
    #[arg(long)]
    language: Option<String>,
}

fn main() {
    logging::init();
    match run() {
        Ok(code) => std::process::exit(code),
        Err(err) => {
            eprintln!("{:#}", err);
            std::process::exit(exit_codes::INVALID);
        }
    }
}

fn run() -> Result<i32> {
    let cli = Cli::parse();
    match cli.command {
        Command::Map { input } => cmd_map(&input),
        Command::Results {
            input,
            spec_run,
            cucumber_json,
        } => cmd_results(&input, spec_run, cucumber_json),
    }
}

fn cmd_map(input: &InputArgs) -> Result<i32> {
    let config = load_config(&input.config)?;
    let feature = map_document(input, &config)?;
    print_json(&feature)?;
    Ok(exit_codes::OK)
}

fn cmd_results(
    input: &InputArgs,
    spec_run: Vec<PathBuf>,
    cucumber_json: Vec<PathBuf>,
) -> Result<i32> {
    let mut config = load_config(&input.config)?;
    config.results.extend(sources(spec_run, ResultsFormat::SpecRun));
    config
        .results
        .extend(sources(cucumber_json, ResultsFormat::CucumberJson));
    debug!(reports = config.results.len(), "results sources resolved");

    let feature = map_document(input, &config)?;
    let results = load_all(&config.results)?;
    let verdicts = FeatureVerdicts::collect(&feature, &results);
    info!(feature = %verdicts.feature, result = ?verdicts.result, "verdicts collected");
    print_json(&verdicts)?;

    if verdicts.has_failures() {
        Ok(exit_codes::FAILED)
    } else {
        Ok(exit_codes::OK)
    }
}

fn sources(paths: Vec<PathBuf>, format: ResultsFormat) -> impl Iterator<Item = ResultsSource> {
    paths
        .into_iter()
        .map(move |path| ResultsSource { path, format })
}

/// Keyword language: `--language`, then the document's own, then the config's.
fn map_document(input: &InputArgs, config: &PicklesConfig) -> Result<Feature> {
    let document = load_document(&input.document)?;
    let language = input
        .language
        .as_deref()
        .or_else(|| document.feature.as_ref()?.language.as_deref())
        .unwrap_or(&config.language);
    let mapper = Mapper::new(language).context("configure mapper")?;
    debug!(language = mapper.language(), "mapping document");
    mapper
        .map_document(&document)
        .with_context(|| format!("map {}", input.document.display()))
}

/// Serialize `value` to pretty-printed JSON on stdout.
fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let payload = serde_json::to_string_pretty(value).context("serialize json")?;
    println!("{payload}");
    Ok(())
}
