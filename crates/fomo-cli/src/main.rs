mod screens;

use std::sync::Arc;

use anyhow::Context;
use clap::{Parser, Subcommand};
use fomo_core::{AppConfig, SourceKind};
use fomo_source::{FilePlacesSource, HttpPlacesSource, PlacesSource, StaticPlacesSource};
use fomo_store::PlacesStore;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "fomo")]
#[command(about = "What's trending in the city today")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Show the Today feed.
    Today {
        /// Only list places in this category (exact match).
        #[arg(long)]
        category: Option<String>,
    },
    /// List map markers for every place.
    Map,
    /// Show the detail sheet for one place.
    Detail {
        /// Place id, e.g. madrid-006.
        id: String,
    },
    /// List the available categories.
    Categories,
}

fn build_source(config: &AppConfig) -> anyhow::Result<Arc<dyn PlacesSource>> {
    let source: Arc<dyn PlacesSource> = match config.source {
        SourceKind::Static => Arc::new(StaticPlacesSource::madrid()),
        SourceKind::Http => Arc::new(
            HttpPlacesSource::new(
                &config.places_url,
                config.http_timeout_secs,
                &config.user_agent,
            )
            .context("failed to build HTTP places source")?,
        ),
        SourceKind::File => {
            let path = config
                .places_path
                .as_ref()
                .context("FOMO_PLACES_PATH is required for the file source")?;
            Arc::new(FilePlacesSource::new(path))
        }
    };
    Ok(source)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = fomo_core::load_app_config().context("failed to load configuration")?;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.as_str()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    tracing::debug!(env = %config.env, source = %config.source, "configuration loaded");

    let store = PlacesStore::new(build_source(&config)?);

    match cli.command {
        Some(Commands::Today { category }) => screens::today(&store, category).await,
        Some(Commands::Map) => screens::map(&store).await,
        Some(Commands::Detail { id }) => screens::detail(&store, &id).await,
        Some(Commands::Categories) => screens::categories(&store).await,
        None => screens::today(&store, None).await,
    }
}
