use anyhow::{anyhow, Context, Result};
use chrono::Utc;
use clap::{Parser, Subcommand};
use colored::Colorize;
use listings::{
    Category, Condition, CriterionDraft, CriterionId, CriterionStore, FilterState, Marketplace,
    MarketplaceChoice, PriceRange, SortOption, WatchCriterion,
};
use ranker::BadgeStyle;
use search::{RankedListing, SearchOrchestrator};
use std::collections::HashSet;
use std::path::PathBuf;
use std::sync::Arc;
use supply::{FileSupply, MockSupply};

/// FlipSniper - marketplace watchlist and deal ranking
#[derive(Parser)]
#[command(name = "flip-sniper")]
#[command(about = "Watch marketplaces for underpriced listings", long_about = None)]
struct Cli {
    /// Path to the watchlist file
    #[arg(short, long, default_value = "watchlist.json")]
    watchlist: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Save a new watch criterion
    Add {
        /// What to search for
        #[arg(long)]
        keyword: String,

        /// Lowest acceptable price
        #[arg(long, default_value = "0")]
        min_price: u32,

        /// Price ceiling (also drives relevance scoring)
        #[arg(long)]
        max_price: u32,

        /// 5-digit ZIP code to search around
        #[arg(long)]
        zip: String,

        /// Search radius in miles (0-100)
        #[arg(long, default_value = "1")]
        radius: u8,

        /// Marketplace to watch: craigslist, facebook, or offerup
        #[arg(long)]
        marketplace: Marketplace,

        /// Listing category
        #[arg(long, default_value = "all")]
        category: Category,
    },

    /// Show all saved criteria
    List,

    /// Delete a criterion
    Remove {
        /// Criterion id to delete
        #[arg(long)]
        id: CriterionId,
    },

    /// Search listings for a saved criterion
    Search {
        /// Criterion id to search
        #[arg(long)]
        id: CriterionId,

        /// Sort order: newest, oldest, price-high, price-low, distance, relevance
        #[arg(long, default_value = "relevance")]
        sort: SortOption,

        /// Restrict the view to one marketplace (default: all)
        #[arg(long)]
        marketplace: Option<Marketplace>,

        /// View price floor
        #[arg(long)]
        min_price: Option<u32>,

        /// View price ceiling
        #[arg(long)]
        max_price: Option<u32>,

        /// Maximum distance in miles
        #[arg(long)]
        max_distance: Option<f64>,

        /// Accepted condition (repeatable); none means any
        #[arg(long = "condition")]
        conditions: Vec<Condition>,

        /// Accepted location (repeatable); none means any
        #[arg(long = "location")]
        locations: Vec<String>,

        /// Number of results to show
        #[arg(long, default_value = "20")]
        limit: usize,

        /// Seed for the synthetic supply
        #[arg(long, default_value = "0")]
        seed: u64,

        /// Rank a JSON listing feed instead of the synthetic supply
        #[arg(long)]
        feed: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Add {
            keyword,
            min_price,
            max_price,
            zip,
            radius,
            marketplace,
            category,
        } => handle_add(
            &cli.watchlist,
            CriterionDraft::new(keyword, max_price, zip, marketplace)
                .with_min_price(min_price)
                .with_radius(radius)
                .with_category(category),
        )?,
        Commands::List => handle_list(&cli.watchlist)?,
        Commands::Remove { id } => handle_remove(&cli.watchlist, id)?,
        Commands::Search {
            id,
            sort,
            marketplace,
            min_price,
            max_price,
            max_distance,
            conditions,
            locations,
            limit,
            seed,
            feed,
        } => {
            let filters = FilterState {
                marketplace: match marketplace {
                    Some(m) => MarketplaceChoice::Only(m),
                    None => MarketplaceChoice::All,
                },
                sort,
                price_range: PriceRange::new(
                    min_price.unwrap_or(0),
                    max_price.unwrap_or(u32::MAX),
                ),
                max_distance: max_distance.unwrap_or(f64::INFINITY),
                conditions: conditions.into_iter().collect::<HashSet<_>>(),
                locations: locations.into_iter().collect::<HashSet<_>>(),
            };
            handle_search(&cli.watchlist, id, filters, limit, seed, feed).await?
        }
    }

    Ok(())
}

/// Handle the 'add' command
fn handle_add(watchlist: &PathBuf, draft: CriterionDraft) -> Result<()> {
    let mut store = CriterionStore::load(watchlist).context("Failed to load watchlist")?;
    let id = store.create(draft)?;
    store.save(watchlist).context("Failed to save watchlist")?;

    let criterion = store.get(id).ok_or_else(|| anyhow!("criterion vanished"))?;
    println!(
        "{} Saved criterion {} ({:?} on {})",
        "✓".green(),
        id,
        criterion.keyword,
        criterion.marketplace
    );
    Ok(())
}

/// Handle the 'list' command
fn handle_list(watchlist: &PathBuf) -> Result<()> {
    let store = CriterionStore::load(watchlist).context("Failed to load watchlist")?;
    if store.is_empty() {
        println!("Watchlist is empty. Add a criterion with `flip-sniper add`.");
        return Ok(());
    }

    println!("{}", "Watchlist:".bold().blue());
    for criterion in store.all() {
        print_criterion(criterion);
    }
    Ok(())
}

/// Handle the 'remove' command
fn handle_remove(watchlist: &PathBuf, id: CriterionId) -> Result<()> {
    let mut store = CriterionStore::load(watchlist).context("Failed to load watchlist")?;
    let removed = store.remove(id)?;
    store.save(watchlist).context("Failed to save watchlist")?;
    println!("{} Removed criterion {} ({:?})", "✓".green(), id, removed.keyword);
    Ok(())
}

/// Handle the 'search' command
async fn handle_search(
    watchlist: &PathBuf,
    id: CriterionId,
    filters: FilterState,
    limit: usize,
    seed: u64,
    feed: Option<PathBuf>,
) -> Result<()> {
    let store = CriterionStore::load(watchlist).context("Failed to load watchlist")?;
    let criterion = store
        .get(id)
        .ok_or_else(|| anyhow!("No criterion with id {} in {}", id, watchlist.display()))?;

    let results = match feed {
        // Rank a feed file wholesale; unknown sources stay in play
        Some(path) => {
            let feed_supply = FileSupply::new(path);
            let batch = feed_supply.load_all()?;
            let orchestrator = SearchOrchestrator::new(Arc::new(feed_supply));
            orchestrator.rank_feed(batch, criterion, &filters, limit)?
        }
        None => {
            let supply = MockSupply::new(Utc::now().date_naive()).with_seed(seed);
            let orchestrator = SearchOrchestrator::new(Arc::new(supply));
            orchestrator.search(criterion, &filters, limit).await?
        }
    };

    if results.is_empty() {
        println!("No listings matched the current filters.");
        return Ok(());
    }

    println!(
        "{}",
        format!("Results for {:?} (sorted by {}):", criterion.keyword, filters.sort)
            .bold()
            .blue()
    );
    for (i, result) in results.iter().enumerate() {
        print_result(i + 1, result);
    }
    Ok(())
}

/// One watchlist line: id, keyword, price window, where
fn print_criterion(criterion: &WatchCriterion) {
    println!(
        "{} {:?} on {} - ${}-${}, within {} mi of {}, category {}",
        format!("[{}]", criterion.id).green(),
        criterion.keyword,
        criterion.marketplace,
        criterion.min_price,
        criterion.max_price,
        criterion.radius,
        criterion.zip,
        criterion.category,
    );
}

/// One ranked result line with a colored marketplace badge
fn print_result(rank: usize, result: &RankedListing) {
    let badge = colorize_badge(result);
    println!(
        "{:>3}. {} {:>8} {} - {} ({:.1} mi, {}, {})",
        rank.to_string().green(),
        badge,
        result.display_price.bold(),
        result.listing.title,
        result.listing.location,
        result.listing.distance,
        result.listing.date,
        result.listing.condition,
    );
}

fn colorize_badge(result: &RankedListing) -> String {
    let label = format!("[{}]", result.badge.label);
    match result.badge.style {
        BadgeStyle::Craigslist => label.purple().to_string(),
        BadgeStyle::Facebook => label.blue().to_string(),
        BadgeStyle::Offerup => label.green().to_string(),
        BadgeStyle::Neutral => label.dimmed().to_string(),
    }
}
