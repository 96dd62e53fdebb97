// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `mc` — drive the DFS exploration engine against an app-under-check.

mod config_file;
mod demo;

use clap::{Parser, ValueEnum};
use mc_core::RemoteApp;
use mc_explorer::{DFSExplorer, DotSink, ExploreError, ExplorerConfig, ReductionMode};
use mc_remote::SubprocessRemoteApp;
use std::fs::File;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(
    name = "mc",
    version,
    about = "Depth-first model checker: explores all schedulings of an app-under-check"
)]
struct Cli {
    /// Change to <dir> before doing anything (config discovery, dot output).
    #[arg(short = 'C', long = "directory", global = true, value_name = "DIR")]
    directory: Option<PathBuf>,

    /// Increase log verbosity (stackable: -v, -vv).
    #[arg(short = 'v', long = "verbose", global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Drive the built-in toy actor system instead of a real app.
    #[arg(long)]
    fake: bool,

    /// Command that launches the app-under-check, speaking the
    /// line-delimited JSON protocol over stdio. Anything after `--` is
    /// passed as its arguments.
    #[arg(long, value_name = "COMMAND")]
    app: Option<String>,

    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    app_args: Vec<String>,

    /// Reduction strategy.
    #[arg(long, value_enum)]
    reduction: Option<CliReductionMode>,

    /// Hard cap on stack size.
    #[arg(long)]
    max_depth: Option<usize>,

    /// 0 disables state-equality reduction.
    #[arg(long)]
    max_visited_states: Option<usize>,

    /// Enable non-progressive cycle detection.
    #[arg(long)]
    termination: bool,

    /// Write one dot edge per explored/visited-hit transition to this file.
    #[arg(long, value_name = "PATH")]
    dot_output: Option<PathBuf>,

    /// Print the exploration report as JSON instead of text.
    #[arg(long)]
    json: bool,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum CliReductionMode {
    None,
    Dpor,
}

impl From<CliReductionMode> for ReductionMode {
    fn from(value: CliReductionMode) -> Self {
        match value {
            CliReductionMode::None => ReductionMode::None,
            CliReductionMode::Dpor => ReductionMode::Dpor,
        }
    }
}

fn init_logging(verbosity: u8) {
    use tracing_subscriber::{fmt, EnvFilter};
    let default_level = match verbosity {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    fmt().with_env_filter(filter).init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Some(dir) = &cli.directory {
        if let Err(e) = std::env::set_current_dir(dir) {
            eprintln!("mc: cannot change to {}: {e}", dir.display());
            return ExitCode::from(2);
        }
    }

    let project_root = match std::env::current_dir() {
        Ok(dir) => dir,
        Err(e) => {
            eprintln!("mc: cannot read current directory: {e}");
            return ExitCode::from(2);
        }
    };

    let defaults = match config_file::load(&project_root) {
        Ok(defaults) => defaults,
        Err(e) => {
            eprintln!("mc: {e}");
            return ExitCode::from(2);
        }
    };

    let dot_output = cli.dot_output.clone().or_else(|| defaults.dot_output.clone());

    let config = config_file::merge(
        defaults,
        cli.reduction.map(ReductionMode::from),
        cli.max_depth,
        cli.max_visited_states,
        if cli.termination { Some(true) } else { None },
    );

    let dot_sink = match &dot_output {
        Some(path) => match File::create(path) {
            Ok(file) => Some(DotSink::new(file)),
            Err(e) => {
                eprintln!("mc: cannot create {}: {e}", path.display());
                return ExitCode::from(2);
            }
        },
        None => None,
    };

    let outcome = if cli.fake {
        let mut app = demo::build();
        run_exploration(&mut app, config, dot_sink)
    } else if let Some(command) = &cli.app {
        let mut app = match SubprocessRemoteApp::spawn(command, &cli.app_args) {
            Ok(app) => app,
            Err(e) => {
                eprintln!("mc: {e}");
                return ExitCode::from(2);
            }
        };
        run_exploration(&mut app, config, dot_sink)
    } else {
        eprintln!("mc: pass either --fake or --app <command>");
        return ExitCode::from(2);
    };

    match outcome {
        Ok(report) => {
            if cli.json {
                match serde_json::to_string_pretty(&report) {
                    Ok(json) => println!("{json}"),
                    Err(e) => eprintln!("mc: failed to serialize report: {e}"),
                }
            } else {
                println!("{report}");
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("mc: {e}");
            match e {
                ExploreError::RemoteAppFailure(_) => ExitCode::from(2),
                ExploreError::Deadlock
                | ExploreError::SafetyViolation(_)
                | ExploreError::Termination { .. } => ExitCode::from(1),
            }
        }
    }
}

fn run_exploration<R>(
    app: &mut R,
    config: ExplorerConfig,
    dot_sink: Option<DotSink>,
) -> Result<mc_explorer::ExplorationReport, ExploreError>
where
    R: RemoteApp,
{
    let mut explorer = DFSExplorer::new(app, config)?;
    if let Some(sink) = dot_sink {
        explorer.set_dot_sink(sink);
    }
    explorer.on_event(|event| {
        tracing::debug!(?event, "explorer event");
    });
    explorer.run(app)
}
