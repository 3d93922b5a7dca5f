use chrono::Local;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use next_train::config::AppConfig;
use next_train::departures::{QueryError, next_departures};
use next_train::feed::{DEFAULT_PREVIEW_ROWS, DiskFeed, FeedClient, FeedConfig, FeedSummary};
use next_train::render::{render_board, render_json};

/// Train schedule information from the DART GTFS feed.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// Name of the station to get next train info for [default: ADDISON STATION]
    #[arg(long)]
    station: Option<String>,

    /// Number of trains to print per destination [default: 2]
    #[arg(long = "num-print", visible_alias = "num_print")]
    num_print: Option<usize>,

    /// Fetch the latest GTFS data instead of querying
    #[arg(long)]
    fetch: bool,

    /// Print the departures as JSON
    #[arg(long)]
    json: bool,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let config = AppConfig::from_env();

    if args.fetch {
        fetch(config.feed).await;
        return;
    }

    let station = args.station.unwrap_or(config.default_station);
    let per_destination = args.num_print.unwrap_or(config.default_per_destination);

    let feed = match DiskFeed::load(config.feed.extract_path()) {
        Ok(feed) => feed,
        Err(e) => {
            eprintln!(
                "Failed to load GTFS data from {}: {e}",
                config.feed.extract_path().display()
            );
            eprintln!("Run with --fetch to download it first.");
            return;
        }
    };

    let now = Local::now().naive_local();
    match next_departures(&feed, &station, per_destination, now) {
        Ok(board) if args.json => match render_json(&board) {
            Ok(json) => println!("{json}"),
            Err(e) => eprintln!("Failed to serialize departures: {e}"),
        },
        Ok(board) => print!("{}", render_board(&board)),
        Err(e @ QueryError::StationNotFound(_)) => println!("{e}"),
        Err(e) => eprintln!("{e}"),
    }
}

/// Download and extract the feed, then print what was loaded.
async fn fetch(config: FeedConfig) {
    let client = match FeedClient::new(config) {
        Ok(client) => client,
        Err(e) => {
            eprintln!("Failed to create feed client: {e}");
            return;
        }
    };

    println!("GTFS Data Information:");
    println!("URL: {}", client.config().feed_url);
    println!("Save Path: {}", client.config().download_path.display());

    match client.refresh().await {
        Ok(report) => println!(
            "GTFS data saved to {} ({} bytes, {} files extracted)",
            report.archive_path.display(),
            report.bytes_downloaded,
            report.files_extracted
        ),
        Err(e) => {
            eprintln!("{e}");
            return;
        }
    }

    match DiskFeed::load(client.config().extract_path()) {
        Ok(feed) => println!("{}", FeedSummary::from_feed(&feed, DEFAULT_PREVIEW_ROWS)),
        Err(e) => eprintln!("Downloaded feed could not be loaded: {e}"),
    }
}
