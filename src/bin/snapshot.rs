//! Headless dashboard snapshot
//!
//! Loads the same documents as the desktop dashboard, renders them into the
//! screen model and prints its text projection.
//!
//! # Usage
//! ```sh
//! cargo run --bin snapshot -- --data-dir ./data --sets 5
//! cargo run --bin snapshot -- --url https://example.org/lotto/data/ --round 1100
//! ```

use anyhow::{Context, Result};
use clap::Parser;
use lottoview::application::fetcher::DataFetcher;
use lottoview::application::state::AppState;
use lottoview::config::{Config, DataLocation};
use lottoview::infrastructure::factory::ServiceFactory;
use lottoview::interfaces::view_models::Screen;
use lottoview::interfaces::view_models::chart::render_frequency_chart;
use lottoview::interfaces::view_models::renderer::{render_dashboard, render_stats};
use lottoview::interfaces::view_models::text_report::format_screen;
use std::num::NonZeroU32;
use std::path::PathBuf;
use tracing::{info, warn};
use url::Url;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Directory holding the JSON documents (overrides LOTTO_DATA_DIR)
    #[arg(long, conflicts_with = "url")]
    data_dir: Option<PathBuf>,

    /// Base URL serving the JSON documents (overrides LOTTO_DATA_URL)
    #[arg(long)]
    url: Option<Url>,

    /// Historical round to show instead of the latest prediction
    #[arg(short, long)]
    round: Option<NonZeroU32>,

    /// Number of prediction sets to show (overrides LOTTO_SET_COUNT)
    #[arg(short, long)]
    sets: Option<usize>,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    // Logs go to stderr so stdout carries only the report.
    let subscriber = tracing_subscriber::FmtSubscriber::builder()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber).ok();

    let cli = Cli::parse();

    let mut config = Config::from_env()?;
    if let Some(dir) = cli.data_dir {
        config.data.location = DataLocation::Directory(dir);
    }
    if let Some(url) = cli.url {
        config.data.location = DataLocation::Http(url);
    }
    let set_count = cli.sets.unwrap_or(config.display.default_set_count).max(1);

    let fetcher = DataFetcher::new(ServiceFactory::create_data_source(&config));
    let mut screen = Screen::without(&config.display.hidden_panels);
    let mut state = AppState::new();

    let stats_then_frequencies = async {
        let stats = fetcher.fetch_stats().await;
        let frequencies = fetcher.fetch_frequencies().await;
        (stats, frequencies)
    };
    let (prediction, (stats, frequencies)) =
        tokio::join!(fetcher.fetch_prediction(cli.round), stats_then_frequencies);

    match stats {
        Ok(stats) => render_stats(&mut screen, &stats),
        Err(e) => warn!("Stats unavailable: {}", e),
    }
    match frequencies {
        Ok(frequencies) => render_frequency_chart(&mut screen, &frequencies),
        Err(e) => warn!("Frequencies unavailable: {}", e),
    }

    let payload = prediction.with_context(|| match cli.round {
        Some(round) => format!("Failed to load prediction for round {}", round),
        None => "Failed to load the latest prediction".to_string(),
    })?;
    info!("Rendering round {}", payload.next_round);

    state.set_prediction(payload);
    state.set_historical(cli.round.is_some());
    render_dashboard(&mut screen, &state, set_count);

    print!("{}", format_screen(&screen));
    Ok(())
}
