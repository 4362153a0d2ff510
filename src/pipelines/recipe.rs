use crate::extractors::extract_recipe;
use crate::fetchers::PageSource;
use crate::model::ScrapeOutcome;
use log::{debug, warn};

/// Search the site for `name` and extract the first matching recipe.
///
/// This pipeline:
/// 1. Fetches the search page for the food name
/// 2. Follows the first recipe link to its detail page
/// 3. Decodes the JSON-LD block into a [`RecipeRecord`](crate::model::RecipeRecord)
///
/// Every failure comes back as a [`ScrapeOutcome`] variant rather than an error.
pub async fn scrape_recipe(source: &dyn PageSource, name: &str) -> ScrapeOutcome {
    let search_markup = match source.fetch_search_page(name).await {
        Ok(markup) => markup,
        Err(e) => {
            warn!("[{}] search failed: {}", name, e);
            return e.into();
        }
    };

    let outcome = extract_recipe(name, &search_markup, source).await;
    match &outcome {
        ScrapeOutcome::Found(record) => {
            debug!("[{}] {} steps extracted", name, record.steps.len())
        }
        ScrapeOutcome::NotFound => warn!("[{}] no recipe found", name),
        ScrapeOutcome::FetchFailed { status } => {
            warn!("[{}] detail page failed (status {:?})", name, status)
        }
        ScrapeOutcome::ExtractionFailed(reason) => {
            warn!("[{}] extraction failed: {}", name, reason)
        }
    }
    outcome
}
