//! `copydesk` - render model-written articles and extract validation reports.

use std::io::Read;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use copydesk_core::{extract_report, HtmlRenderer, Theme};

#[derive(Parser, Debug)]
#[command(name = "copydesk", version, about = "Article rendering and report extraction")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Render a Markdown-subset article to HTML
    Render {
        /// Input file; reads stdin when omitted
        input: Option<PathBuf>,
        /// Emit no inline style attributes
        #[arg(long)]
        plain: bool,
    },
    /// Extract typed fields from a validation report
    Extract {
        /// Input file; reads stdin when omitted
        input: Option<PathBuf>,
        /// Include the raw report text in the output
        #[arg(long)]
        raw: bool,
    },
    /// Split a full model response, render the article, extract the report
    Process {
        /// Input file; reads stdin when omitted
        input: Option<PathBuf>,
        /// Emit no inline style attributes
        #[arg(long)]
        plain: bool,
    },
}

#[derive(Serialize)]
struct ExtractOut<'a> {
    score: u32,
    recommendation: String,
    flagged_items: &'a [String],
    #[serde(skip_serializing_if = "Option::is_none")]
    raw_text: Option<&'a str>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Render { input, plain } => {
            let text = read_input(input.as_deref())?;
            debug!(bytes = text.len(), plain, "rendering article");
            println!("{}", renderer(plain).render(&text));
        }
        Commands::Extract { input, raw } => {
            let text = read_input(input.as_deref())?;
            debug!(bytes = text.len(), "extracting report");
            let report = extract_report(&text);
            let out = ExtractOut {
                score: report.score,
                recommendation: report.recommendation.to_string(),
                flagged_items: &report.flagged_items,
                raw_text: raw.then_some(report.raw_text.as_str()),
            };
            println!("{}", serde_json::to_string_pretty(&out)?);
        }
        Commands::Process { input, plain } => {
            let text = read_input(input.as_deref())?;
            debug!(bytes = text.len(), plain, "processing full response");
            let processed = copydesk_core::process(&renderer(plain), &text);
            println!("{}", serde_json::to_string_pretty(&processed)?);
        }
    }

    Ok(())
}

fn renderer(plain: bool) -> HtmlRenderer {
    if plain {
        HtmlRenderer::new(Theme::plain())
    } else {
        HtmlRenderer::default()
    }
}

fn read_input(path: Option<&std::path::Path>) -> Result<String> {
    match path {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display())),
        None => {
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .context("failed to read stdin")?;
            Ok(text)
        }
    }
}
