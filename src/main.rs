use anyhow::Result;
use clap::Parser;
use rental_showcase::config::AppConfig;
use rental_showcase::navigation::{History, PageUrl};
use rental_showcase::pages::{ListingPage, ListingView};
use rental_showcase::store::{InMemoryStore, PropertyStore};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Render the property listing page for a URL against the demo catalogue
#[derive(Debug, Parser)]
#[command(name = "rental-showcase", version)]
struct Args {
    /// Listing URL, e.g. "/properties?city=Brooklyn&max_price=3000"
    #[arg(long, default_value = "/properties")]
    url: String,

    /// JSON config file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Print the rendered view as JSON
    #[arg(long)]
    json: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = Args::parse();
    let config = AppConfig::load(args.config.as_deref())?;

    info!("🏠 Rental Showcase");
    info!("==========================================");

    let store: Arc<dyn PropertyStore> = Arc::new(InMemoryStore::with_sample_data(config.page_size));
    let mut history = History::new(PageUrl::parse(&args.url)?);

    let (page, handle) = ListingPage::mount(store, &mut history);
    handle.await?;

    info!("Now at {}", history.current());
    let view = page.render();

    if args.json {
        println!("{}", serde_json::to_string_pretty(&view)?);
        return Ok(());
    }

    match view {
        ListingView::Loading => println!("Loading..."),
        ListingView::Error { message } => println!("⚠️  {} (retry available)", message),
        ListingView::Empty { search_mode } => {
            if search_mode {
                println!("No properties match these filters.");
            } else {
                println!("No properties listed yet.");
            }
        }
        ListingView::Results {
            cards,
            pagination,
            search_mode,
        } => {
            let heading = if search_mode { "Search results" } else { "All properties" };
            match pagination {
                Some(p) => info!("\n✅ {}: {} of {} (page {}/{})\n", heading, cards.len(), p.total, p.page, p.total_pages),
                None => info!("\n✅ {}: {}\n", heading, cards.len()),
            }

            for (i, card) in cards.iter().enumerate() {
                println!("{}. {} ({})", i + 1, card.title, card.price);
                println!("   {} · {}", card.summary, card.location);
                println!("   Status: {}", card.status);
                if !card.features.is_empty() {
                    println!("   Features: {}", card.features.join(", "));
                }
                println!("   Image: {}", card.cover_image);
                println!();
            }
        }
    }

    Ok(())
}
