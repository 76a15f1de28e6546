use clap::{Parser, ValueEnum};
use lending_registry::application::engine::HoldingEngine;
use lending_registry::application::request::{Outcome, replay};
use lending_registry::application::scenarios::Scenario;
use lending_registry::domain::ports::EntityStore;
use lending_registry::interfaces::console::Narrator;
use lending_registry::interfaces::csv::request_reader::RequestReader;
use lending_registry::interfaces::snapshot::{ItemRow, SnapshotFormat, write_snapshot};
use lending_registry::logging;
use miette::{IntoDiagnostic, Result};
use std::fs::File;
use std::io;
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum ScenarioArg {
    Library,
    Rental,
    Hotel,
    All,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum FormatArg {
    Text,
    Csv,
    Json,
}

impl From<FormatArg> for SnapshotFormat {
    fn from(format: FormatArg) -> Self {
        match format {
            FormatArg::Text => SnapshotFormat::Text,
            FormatArg::Csv => SnapshotFormat::Csv,
            FormatArg::Json => SnapshotFormat::Json,
        }
    }
}

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// CSV file of requests (op, actor, item, term) to replay instead of the
    /// built-in script
    script: Option<PathBuf>,

    /// Scenario to run. With a script, `all` seeds the library catalog.
    #[arg(long, value_enum, default_value_t = ScenarioArg::All)]
    scenario: ScenarioArg,

    /// Print the final state of every item in this format
    #[arg(long, value_enum)]
    snapshot: Option<FormatArg>,
}

fn main() -> Result<()> {
    logging::init();
    let cli = Cli::parse();

    let scenarios = match cli.scenario {
        ScenarioArg::Library => vec![Scenario::Library],
        ScenarioArg::Rental => vec![Scenario::Rental],
        ScenarioArg::Hotel => vec![Scenario::Hotel],
        ScenarioArg::All if cli.script.is_some() => vec![Scenario::Library],
        ScenarioArg::All => Scenario::ALL.to_vec(),
    };

    let stdout = io::stdout();
    let mut narrator = Narrator::new(stdout.lock());
    let mut rows = Vec::new();

    for (i, scenario) in scenarios.into_iter().enumerate() {
        if i > 0 {
            narrator.blank().into_diagnostic()?;
        }

        let mut engine = HoldingEngine::new();
        let scripted = scenario.seed(&mut engine).into_diagnostic()?;
        narrator.heading(scenario.title()).into_diagnostic()?;
        narrator.roster(&engine).into_diagnostic()?;

        match &cli.script {
            Some(path) => {
                let file = File::open(path).into_diagnostic()?;
                for request in RequestReader::new(file).requests() {
                    match request {
                        Ok(request) => {
                            let result = request.apply(&mut engine);
                            let outcome = Outcome { request, result };
                            narrator.outcome(&engine, &outcome).into_diagnostic()?;
                        }
                        Err(e) => {
                            eprintln!("Error reading request: {}", e);
                        }
                    }
                }
            }
            None => {
                for outcome in replay(&mut engine, scripted) {
                    narrator.outcome(&engine, &outcome).into_diagnostic()?;
                }
            }
        }

        narrator.histories(&engine).into_diagnostic()?;
        rows.extend(
            engine
                .store()
                .items()
                .into_iter()
                .map(|item| ItemRow::new(scenario.name(), item)),
        );
    }

    if let Some(format) = cli.snapshot {
        let mut out = narrator.into_inner();
        write_snapshot(format.into(), &rows, &mut out).into_diagnostic()?;
    }

    Ok(())
}
