//! rowsync CLI entry point.

use clap::Parser;
use rowsync::cli::commands::{self, Target};
use rowsync::cli::{Cli, Commands};
use rowsync::error::Error;
use rowsync::sync::{Direction, SyncOptions};
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();

    if cli.no_color {
        colored::control::set_override(false);
    }

    // Set up tracing based on verbosity
    init_tracing(cli.verbose, cli.quiet);

    let json = cli.json;

    match run(&cli, json) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            if json {
                eprintln!("{}", e.to_structured_json());
            } else if let Some(hint) = e.hint() {
                eprintln!("Error: {e}\n  Hint: {hint}");
            } else {
                eprintln!("Error: {e}");
            }
            ExitCode::from(e.exit_code())
        }
    }
}

fn init_tracing(verbose: u8, quiet: bool) {
    use tracing_subscriber::EnvFilter;

    if quiet {
        return;
    }

    // Honor RUST_LOG if set, otherwise use verbosity flag
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else {
        match verbose {
            0 => EnvFilter::new("warn"),
            1 => EnvFilter::new("info"),
            2 => EnvFilter::new("debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .without_time()
        .init();
}

fn run(cli: &Cli, json: bool) -> Result<(), Error> {
    let target = Target {
        smithbox: cli.smithbox.as_ref(),
        paramdex: cli.paramdex.as_ref(),
        games: &cli.games,
    };

    match &cli.command {
        Commands::ToSmithbox(args) => {
            let options = SyncOptions {
                overwrite: args.overwrite,
                dry_run: cli.dry_run,
                skip_defs: true,
            };
            commands::sync::execute(Direction::ParamdexToSmithbox, options, target, json)
        }
        Commands::ToParamdex(args) => {
            let options = SyncOptions {
                overwrite: args.sync.overwrite,
                dry_run: cli.dry_run,
                skip_defs: args.skip_defs,
            };
            commands::sync::execute(Direction::SmithboxToParamdex, options, target, json)
        }
        Commands::Status => commands::status::execute(target, json),
        Commands::Version => commands::version::execute(json),
        Commands::Completions { shell } => commands::completions::execute(shell),
    }
}
