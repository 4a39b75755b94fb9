//! netjack - jack into a local AI model straight from your terminal.
//!
//! Sends a prompt to an Ollama-style `/api/generate` endpoint and prints the
//! answer as a single colored line.

mod config;
mod console;
mod protocol;
mod query;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use config::{QueryConfig, DEFAULT_API_URL};
use console::Terminal;
use query::QueryClient;
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "netjack")]
#[command(author, version, about = "Your personal NET interface to AI models")]
#[command(long_about = "Your personal NET interface - lets you jack into AI models straight from your terminal.\n\nThink of this as your deck's command center.")]
struct Cli {
    /// More diagnostics on stderr (-v, -vv, -vvv)
    #[arg(short = 'v', long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Send your message to an AI and bring back what it says
    Query(QueryArgs),
}

#[derive(clap::Args, Debug)]
struct QueryArgs {
    /// Which AI model you wanna connect to
    #[arg(short = 'm', long, value_name = "MODEL")]
    model: String,

    /// What you wanna ask the AI
    #[arg(short = 'p', long, value_name = "PROMPT")]
    prompt: String,

    /// Where to find the AI
    #[arg(long, value_name = "URL", default_value = DEFAULT_API_URL)]
    api_url: String,
}

impl From<QueryArgs> for QueryConfig {
    fn from(args: QueryArgs) -> Self {
        QueryConfig::new(args.model, args.prompt).with_api_url(args.api_url)
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose)?;

    match cli.command {
        Commands::Query(args) => handle_query(args.into()).await,
    }
}

/// Set up tracing on stderr. `RUST_LOG` wins over `-v`.
fn init_logging(verbose: u8) -> Result<()> {
    let level = match verbose {
        0 => "error",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(format!("netjack={},reqwest=error", level))
            .context("Failed to build log filter")?,
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {}", e))
}

/// Handle the query command.
///
/// Endpoint failures are reported on the console and still exit 0; only a
/// failure to write to stdout is returned as an error.
async fn handle_query(config: QueryConfig) -> Result<()> {
    debug!(?config, "resolved query config");

    let client = QueryClient::new();
    let mut console = Terminal::stdout();
    query::run(&client, &config, &mut console)
        .await
        .context("Failed to write to stdout")
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::error::ErrorKind;

    #[test]
    fn test_query_args() {
        let cli = Cli::try_parse_from([
            "netjack", "query", "--model", "llama3", "--prompt", "hi there",
        ])
        .unwrap();
        let Commands::Query(args) = cli.command;
        let config = QueryConfig::from(args);
        assert_eq!(config, QueryConfig::new("llama3", "hi there"));
        assert_eq!(config.api_url, "http://localhost:11434/api/generate");
    }

    #[test]
    fn test_short_flags_and_api_url() {
        let cli = Cli::try_parse_from([
            "netjack",
            "query",
            "-m",
            "phi4",
            "-p",
            "why?",
            "--api-url",
            "http://gpu-box:11434/api/generate",
        ])
        .unwrap();
        let Commands::Query(args) = cli.command;
        let config = QueryConfig::from(args);
        assert_eq!(config.model, "phi4");
        assert_eq!(config.prompt, "why?");
        assert_eq!(config.api_url, "http://gpu-box:11434/api/generate");
    }

    #[test]
    fn test_missing_model_is_usage_error() {
        let err = Cli::try_parse_from(["netjack", "query", "--prompt", "hi"])
            .err()
            .unwrap();
        assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);
    }

    #[test]
    fn test_missing_prompt_is_usage_error() {
        let err = Cli::try_parse_from(["netjack", "query", "-m", "llama3"])
            .err()
            .unwrap();
        assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);
    }

    #[test]
    fn test_subcommand_required() {
        assert!(Cli::try_parse_from(["netjack"]).is_err());
    }

    #[test]
    fn test_verbose_count() {
        let cli = Cli::try_parse_from([
            "netjack", "query", "-m", "a", "-p", "b", "-vv",
        ])
        .unwrap();
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn test_cli_definition() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
