mod commands;
mod render;

use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};

use swot::GeneratorConfig;

#[derive(Parser)]
#[command(name = "swot-cli", about = "Generate flashcards and quizzes from extracted text", version)]
struct Cli {
    /// Output format
    #[arg(long, global = true, default_value = "plain")]
    format: OutputFormat,

    /// Seed the random source for reproducible output
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// TOML file overriding generator thresholds
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Clone, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Plain,
    Json,
}

#[derive(Subcommand)]
enum Command {
    /// Generate flashcards from a text file
    Cards {
        /// Input text file (use "-" to read from stdin)
        input: String,
        /// Number of flashcards to generate
        #[arg(long, default_value = "15")]
        count: usize,
    },
    /// Generate multiple-choice questions from a text file
    Quiz {
        /// Input text file (use "-" to read from stdin)
        input: String,
        /// Number of questions to generate
        #[arg(long, default_value = "10")]
        count: usize,
    },
}

/// Read the input text, resolving "-" as stdin
fn read_input(input: &str) -> anyhow::Result<String> {
    if input == "-" {
        let mut buf = String::new();
        std::io::Read::read_to_string(&mut std::io::stdin(), &mut buf)
            .context("Failed to read stdin")?;
        Ok(buf)
    } else {
        std::fs::read_to_string(input).with_context(|| format!("Failed to read '{}'", input))
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => GeneratorConfig::load(path)
            .with_context(|| format!("Failed to load config '{}'", path.display()))?,
        None => GeneratorConfig::default(),
    };

    match cli.command {
        Command::Cards { input, count } => {
            let text = read_input(&input)?;
            commands::cards::run(&text, count, &config, cli.seed, &cli.format)?;
        }
        Command::Quiz { input, count } => {
            let text = read_input(&input)?;
            commands::quiz::run(&text, count, &config, cli.seed, &cli.format)?;
        }
    }

    Ok(())
}
