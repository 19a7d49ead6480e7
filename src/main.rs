use anyhow::{Context, Result};
use channel_analyzer::config::{DEFAULT_BIND, DEFAULT_MAX_CONTENT_BYTES};
use channel_analyzer::{render_text, Extractor, ServerConfig};
use clap::{Parser, Subcommand};
use std::net::SocketAddr;
use std::path::PathBuf;
use tokio::io::AsyncReadExt;
use tracing::{info, Level};

#[derive(Parser, Debug)]
#[command(name = "channel-analyzer")]
#[command(about = "Extract emails, Discord handles and social media links from text")]
#[command(version)]
struct Args {
    /// Log verbosity (error, warn, info, debug, trace)
    #[arg(long, global = true, default_value = "info")]
    log_level: Level,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Analyze a file, or stdin when no file is given
    Scan {
        /// Text file to analyze
        input: Option<PathBuf>,

        /// Print findings as JSON instead of labeled lists
        #[arg(long)]
        json: bool,
    },
    /// Serve the analyzer page and JSON endpoint
    Serve {
        /// Listen address
        #[arg(long, env = "CHANNEL_ANALYZER_BIND", default_value = DEFAULT_BIND)]
        bind: SocketAddr,

        /// Largest accepted `content` in bytes
        #[arg(long, env = "CHANNEL_ANALYZER_MAX_CONTENT_BYTES", default_value_t = DEFAULT_MAX_CONTENT_BYTES)]
        max_content_bytes: usize,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // WHY: structured JSON logs on stderr keep stdout clean for scan output
    tracing_subscriber::fmt()
        .with_target(false)
        .with_max_level(args.log_level)
        .with_writer(std::io::stderr)
        .json()
        .init();

    info!(?args, "Parsed CLI arguments");

    match args.command {
        Command::Scan { input, json } => scan(input, json).await,
        Command::Serve {
            bind,
            max_content_bytes,
        } => {
            let config = ServerConfig {
                bind_addr: bind,
                max_content_bytes,
            };
            channel_analyzer::serve(config).await
        }
    }
}

async fn scan(input: Option<PathBuf>, json: bool) -> Result<()> {
    let text = match input {
        Some(path) => tokio::fs::read_to_string(&path)
            .await
            .with_context(|| format!("Failed to read {}", path.display()))?,
        None => {
            let mut buffer = String::new();
            tokio::io::stdin()
                .read_to_string(&mut buffer)
                .await
                .context("Failed to read stdin")?;
            buffer
        }
    };

    let extractor = Extractor::new()?;
    let findings = extractor.analyze(&text);
    info!(found = findings.total(), bytes = text.len(), "Scan complete");

    if json {
        println!("{}", serde_json::to_string_pretty(&findings)?);
    } else {
        print!("{}", render_text(&findings));
    }

    Ok(())
}
