//! CLI entry point - the composition root.
//!
//! Parses arguments, wires infrastructure via bootstrap, then dispatches
//! to a handler. All handlers go through `CliContext`.

use clap::{CommandFactory, Parser};
use tracing_subscriber::EnvFilter;

use mcpdir_cli::{Cli, CliConfig, CliError, bootstrap, handlers};

/// Log filter used when `RUST_LOG` is unset and `--verbose` is given.
const VERBOSE_FILTER: &str = "warn,mcpdir_core=debug,mcpdir_api=debug,mcpdir_cli=debug";

fn init_tracing(verbose: bool) {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(if verbose { VERBOSE_FILTER } else { "warn" }));

    // Logs go to stderr so rendered views on stdout stay clean
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .compact()
        .init();
}

async fn run(mut cli: Cli) -> anyhow::Result<()> {
    let Some(command) = cli.command.take() else {
        Cli::command().print_help()?;
        return Ok(());
    };

    let config = CliConfig::from_cli(&cli)?;
    let ctx = bootstrap(config)?;

    let result = handlers::dispatch(&ctx, command).await;
    ctx.shutdown().await;
    result
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables before parsing so env fallbacks see them
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(err) = run(cli).await {
        eprintln!("Error: {err:#}");
        let code = err.downcast_ref::<CliError>().map_or(1, CliError::exit_code);
        std::process::exit(code);
    }
    Ok(())
}
