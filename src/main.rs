//! `bookforge` CLI - generate a complete book and typeset it to PDF

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::{bail, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use bookforge::{pipeline, BookConfig};

#[derive(Parser)]
#[command(name = "bookforge")]
#[command(about = "Generate a complete book with an LLM and typeset it into PDF")]
#[command(version)]
struct Cli {
    /// Topic of the book (prompted for interactively when omitted)
    topic: Option<String>,

    /// Directory to create the book under (defaults to the current directory)
    #[arg(short, long)]
    output_dir: Option<PathBuf>,
}

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_target(false)
        .compact()
        .init();

    let cli = Cli::parse();

    let topic = match cli.topic {
        Some(topic) => topic,
        None => prompt_topic()?,
    };

    println!("\nInitializing book generation process...");

    let mut config = BookConfig::from_env()?;
    if let Some(dir) = cli.output_dir {
        config.output_root = dir;
    }

    let final_pdf = pipeline::run(&config, &topic)?;

    println!("\n✅ Final book PDF created: {}", final_pdf.display());
    println!("\nBook generation complete!");

    Ok(())
}

fn prompt_topic() -> Result<String> {
    print!("Enter the topic of the book: ");
    io::stdout().flush()?;

    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;

    let topic = line.trim().to_string();
    if topic.is_empty() {
        bail!("no topic provided");
    }
    Ok(topic)
}
