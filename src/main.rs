//! CLI for konko-markup - post markup to HTML renderer

use clap::Parser;
use konko_markup::{LivePreviewTranscoder, MarkupRenderer, RenderOptions};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Input file path (post markup, or HTML with --to-markup)
    input: PathBuf,

    /// Output file path (optional, prints to stdout if not specified)
    output: Option<PathBuf>,

    /// TOML file with render options
    #[arg(long)]
    config: Option<PathBuf>,

    /// Page path prefixed to in-page anchor links (overrides the config file)
    #[arg(long)]
    page_path: Option<String>,

    /// Convert editor HTML back to markup instead of rendering
    #[arg(long)]
    to_markup: bool,

    /// Enable debug logging
    #[arg(long, short)]
    verbose: bool,
}

fn main() {
    let args = Args::parse();

    // --verbose enables DEBUG level, otherwise use RUST_LOG
    let filter = if args.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::from_default_env()
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run(args) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(args: Args) -> konko_markup::Result<()> {
    let mut options = match &args.config {
        Some(path) => RenderOptions::load(path)?,
        None => RenderOptions::default(),
    };
    if let Some(page_path) = args.page_path {
        options.page_path = page_path;
    }

    let input = std::fs::read_to_string(&args.input)?;
    let converted = if args.to_markup {
        LivePreviewTranscoder::new(options).to_markup(&input)
    } else {
        MarkupRenderer::new(options).render(&input)
    };

    match args.output {
        Some(output) => {
            std::fs::write(&output, &converted)?;
            tracing::info!(output = %output.display(), "wrote output");
        }
        None => println!("{}", converted),
    }
    Ok(())
}
