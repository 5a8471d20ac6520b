//! Ask GrandPy a question from the terminal.
//!
//! Prints the same JSON the web endpoint returns.

use anyhow::{Context, Result};
use clap::Parser as ClapParser;
use grandpy_core::domains::answer::answer;
use grandpy_core::domains::parser::Parser;
use grandpy_core::kernel::ServerDeps;
use grandpy_core::Config;
use std::sync::Arc;

#[derive(ClapParser)]
#[command(name = "ask")]
#[command(about = "Ask GrandPy where a place is")]
struct Cli {
    /// The question, in French
    question: String,

    /// Only print the place name extracted from the question
    #[arg(long)]
    parse_only: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    if cli.parse_only {
        let lexicon = Config::lexicon_from_env().context("Failed to load lexicon")?;
        let parser = Parser::new(Arc::new(lexicon));
        println!("{}", parser.parse(&cli.question));
        return Ok(());
    }

    let config = Config::from_env().context("Failed to load configuration")?;
    let deps = ServerDeps::from_config(&config)?;
    let result = answer(&cli.question, &deps).await;
    println!("{}", serde_json::to_string_pretty(&result)?);

    Ok(())
}
