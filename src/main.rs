//! ALTO Engine command line
//!
//! Prints annotated text, plain text or search-hit coordinates for an ALTO
//! file.

use anyhow::Context;
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use alto_engine::{AltoEngine, EngineConfig};

#[derive(Parser)]
#[command(name = "alto-engine", version, about = "ALTO OCR full text and search-hit geometry")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Full text with named-entity markup
    Text { file: PathBuf },
    /// Plain full text
    Plain {
        file: PathBuf,
        /// Join words hyphenated across a line break
        #[arg(long)]
        merge_hyphenated: bool,
    },
    /// Coordinates of words matching the search terms
    Search {
        file: PathBuf,
        /// Search phrase, may be repeated
        #[arg(short, long = "term", required = true)]
        terms: Vec<String>,
        /// Clockwise display rotation (0, 90, 180, 270)
        #[arg(long)]
        rotation: Option<i32>,
        #[arg(long, default_value_t = 0)]
        footer_height: i32,
        /// Print one JSON object per occurrence
        #[arg(long)]
        json: bool,
    },
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "alto_engine=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let engine = AltoEngine::new(EngineConfig::from_env());

    match cli.command {
        Command::Text { file } => {
            let alto = read(&engine, &file)?;
            match engine.annotated_text(&alto) {
                Some(text) => println!("{}", text),
                None => tracing::info!("No full text available for {}", file.display()),
            }
        }
        Command::Plain {
            file,
            merge_hyphenated,
        } => {
            let alto = read(&engine, &file)?;
            match engine.plain_text(&alto, merge_hyphenated) {
                Some(text) => println!("{}", text),
                None => tracing::info!("No full text available for {}", file.display()),
            }
        }
        Command::Search {
            file,
            terms,
            rotation,
            footer_height,
            json,
        } => {
            let alto = read(&engine, &file)?;
            let rotation = rotation.unwrap_or(engine.config().default_rotation);

            if json {
                let matches = engine
                    .search_matches(&alto, &terms, rotation, footer_height)
                    .with_context(|| format!("Failed to search {}", file.display()))?;
                for m in matches {
                    println!("{}", serde_json::to_string(&m)?);
                }
            } else {
                for coords in engine.search_coordinates(&alto, &terms, rotation, footer_height) {
                    println!("{}", coords);
                }
            }
        }
    }

    Ok(())
}

fn read(engine: &AltoEngine, file: &Path) -> anyhow::Result<String> {
    engine
        .read_file(file)
        .with_context(|| format!("Failed to read ALTO file {}", file.display()))
}
