pub mod config;
pub mod error;
pub mod extractors;
pub mod fetchers;
pub mod ingredients;
pub mod model;
pub mod pipelines;
pub mod storage;

pub use config::FinderConfig;
pub use error::{ExtractError, FetchError, FinderError, StorageError};
pub use fetchers::{PageSource, RequestFetcher};
pub use ingredients::{parse_ingredient, ParsedIngredient};
pub use model::{RecipeRecord, RecipeSummary, ScrapeOutcome, TableCounts};
pub use pipelines::{load_menu, scrape_recipe, BatchRunner, FixedDelay, Throttle};
pub use storage::{IngestStatus, Repository};

/// Scrape a single food name from the configured site
///
/// # Example
/// ```no_run
/// use recipe_finder::{fetch_recipe, FinderConfig, ScrapeOutcome};
///
/// # async fn run() -> Result<(), recipe_finder::FinderError> {
/// let config = FinderConfig::default();
/// if let ScrapeOutcome::Found(record) = fetch_recipe(&config, "김치찌개").await? {
///     println!("{}", record.ingredients);
/// }
/// # Ok(())
/// # }
/// ```
pub async fn fetch_recipe(config: &FinderConfig, name: &str) -> Result<ScrapeOutcome, FinderError> {
    let fetcher = RequestFetcher::from_config(config)?;
    Ok(scrape_recipe(&fetcher, name).await)
}

/// Ingest every name of the configured menu file, returning the names that failed
pub async fn ingest_menu(config: &FinderConfig) -> Result<Vec<String>, FinderError> {
    let names = load_menu(&config.menu_path)?;
    BatchRunner::from_config(config)?.run(&names).await
}

/// Recipes sharing at least one ingredient with the comma separated filter
pub fn find_recipes(
    config: &FinderConfig,
    ingredients: &str,
) -> Result<Vec<RecipeSummary>, FinderError> {
    Ok(Repository::from_config(config)?.lookup(ingredients)?)
}
