use crate::error::{ExtractError, FetchError};

/// A recipe as scraped from the site, ready for ingestion.
///
/// `ingredients` holds every ingredient line joined by `", "`; `steps` are
/// already numbered (`"1. ..."`, `"2. ..."`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecipeRecord {
    pub name: String,
    pub ingredients: String,
    pub steps: Vec<String>,
}

/// A stored recipe as returned by the read path
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecipeSummary {
    pub name: String,
    /// Numbered steps joined by newlines
    pub recipe: String,
}

/// Row counts of the three tables
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TableCounts {
    pub recipes: u64,
    pub ingredients: u64,
    pub recipe_ingredients: u64,
}

/// Result of scraping a single food name
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScrapeOutcome {
    Found(RecipeRecord),
    /// A page could not be fetched; `status` is `None` when no response arrived
    FetchFailed { status: Option<u16> },
    /// The search returned no recipe
    NotFound,
    ExtractionFailed(String),
}

impl From<FetchError> for ScrapeOutcome {
    fn from(error: FetchError) -> Self {
        ScrapeOutcome::FetchFailed {
            status: error.status(),
        }
    }
}

impl From<ExtractError> for ScrapeOutcome {
    fn from(error: ExtractError) -> Self {
        match error {
            ExtractError::NoSearchResult => ScrapeOutcome::NotFound,
            other => ScrapeOutcome::ExtractionFailed(other.to_string()),
        }
    }
}
