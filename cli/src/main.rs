mod backend;
mod render;

use std::io::{self, BufRead, Write};
use std::time::Duration;

use catalog::endpoints::DEFAULT_API_BASE;
use catalog::track::success_notice;
use catalog::{CatalogError, Listing, Transcript, UrlRejection};
use clap::{Parser, Subcommand};
use serde_json::Value;
use tracing_subscriber::EnvFilter;

use backend::Backend;

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("{0}")]
    Rejected(#[from] UrlRejection),
    #[error("invalid base URL: {0}")]
    InvalidBaseUrl(String),
    #[error("http request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("{message} (HTTP {status})")]
    Status { status: u16, message: String },
    #[error("invalid JSON payload: {0}")]
    InvalidJson(#[from] serde_json::Error),
    #[error("unexpected response: {0}")]
    Catalog(#[from] CatalogError),
    #[error("io error: {0}")]
    Io(#[from] io::Error),
}

#[derive(Parser, Debug)]
#[command(name = "price-tracker", about = "Price tracker backend CLI")]
struct Cli {
    #[arg(long, env = "PRICE_TRACKER_BASE_URL", default_value = DEFAULT_API_BASE)]
    base_url: String,

    #[arg(long, env = "PRICE_TRACKER_TIMEOUT_SECS", default_value_t = 30)]
    timeout_secs: u64,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Check that the backend answers its health route.
    Ping,
    /// Start tracking a product page.
    Track { url: String },
    /// List tracked products.
    List {
        #[arg(long, default_value_t = false)]
        json: bool,
    },
    /// List products from the general catalog listing.
    Products {
        #[arg(long, default_value_t = false)]
        json: bool,
    },
    /// Run a shopping analysis for a free-text query.
    Search {
        #[arg(required = true, num_args = 1..)]
        query: Vec<String>,
        #[arg(long, default_value_t = false)]
        json: bool,
    },
    /// Record a chat transcript from stdin, one user turn per line.
    Chat,
}

#[tokio::main]
async fn main() -> Result<(), CliError> {
    init_tracing();
    let cli = Cli::parse();
    let backend = Backend::new(&cli.base_url, Duration::from_secs(cli.timeout_secs))?;

    match cli.command {
        Command::Ping => {
            backend.ping().await?;
            println!("ok");
            Ok(())
        }
        Command::Track { url } => run_track(&backend, &url).await,
        Command::List { json } => run_listing(&backend, Listing::Tracked, json).await,
        Command::Products { json } => run_listing(&backend, Listing::Catalog, json).await,
        Command::Search { query, json } => run_search(&backend, &query.join(" "), json).await,
        Command::Chat => {
            let stdin = io::stdin();
            let stdout = io::stdout();
            run_chat(stdin.lock(), &mut stdout.lock())?;
            Ok(())
        }
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

async fn run_track(backend: &Backend, url: &str) -> Result<(), CliError> {
    let response = backend.track(url).await?;
    println!("{}", success_notice(&response));
    Ok(())
}

async fn run_listing(backend: &Backend, listing: Listing, json: bool) -> Result<(), CliError> {
    let products = backend.list(listing).await?;
    if json {
        print_json(&serde_json::to_value(&products)?)?;
    } else {
        print!("{}", render::product_list(&products));
    }
    Ok(())
}

async fn run_search(backend: &Backend, query: &str, json: bool) -> Result<(), CliError> {
    let result = backend.search(query).await?;
    if json {
        print_json(&serde_json::to_value(&result)?)?;
    } else {
        print!("{}", render::analysis(&result));
    }
    Ok(())
}

/// Append each non-blank input line as a user turn, then print the transcript.
fn run_chat<R: BufRead, W: Write>(input: R, out: &mut W) -> Result<Transcript, CliError> {
    let mut transcript = Transcript::with_greeting();
    for line in input.lines() {
        let line = line?;
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        transcript.push_user(trimmed);
    }
    tracing::debug!(turns = transcript.len(), "chat transcript recorded");
    out.write_all(render::transcript(&transcript).as_bytes())?;
    Ok(transcript)
}

fn print_json(value: &Value) -> Result<(), CliError> {
    let rendered = serde_json::to_string_pretty(value)?;
    println!("{rendered}");
    Ok(())
}
