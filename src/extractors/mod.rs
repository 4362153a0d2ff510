mod json_ld;
mod search;

pub use json_ld::parse_detail_page;
pub use search::{find_detail_id, RECIPE_LINK_CLASS};

use crate::fetchers::PageSource;
use crate::model::ScrapeOutcome;
use log::debug;

/// Turn a search page into a recipe record, fetching the detail page through `source`.
///
/// 1. Picks the first recipe link on the search page (`NotFound` if there is none)
/// 2. Fetches the detail page named by the link's last path segment
/// 3. Decodes the JSON-LD block into a numbered [`RecipeRecord`](crate::model::RecipeRecord)
pub async fn extract_recipe(
    name: &str,
    search_markup: &str,
    source: &dyn PageSource,
) -> ScrapeOutcome {
    let detail_id = match find_detail_id(search_markup) {
        Ok(id) => id,
        Err(e) => return e.into(),
    };
    debug!("[{}] detail page id {}", name, detail_id);

    let detail_markup = match source.fetch_detail_page(&detail_id).await {
        Ok(markup) => markup,
        Err(e) => return e.into(),
    };

    match parse_detail_page(name, &detail_markup) {
        Ok(record) => ScrapeOutcome::Found(record),
        Err(e) => e.into(),
    }
}
