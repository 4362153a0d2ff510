use crate::error::ExtractError;
use log::debug;
use scraper::{Html, Selector};

/// Class carried by every recipe card link on the site's search page
pub const RECIPE_LINK_CLASS: &str = "common_sp_link";

/// Find the detail page id of the first recipe link on a search page.
///
/// The id is the trailing path segment of the link, so
/// `/recipe/6903394` yields `6903394`.
pub fn find_detail_id(search_markup: &str) -> Result<String, ExtractError> {
    let document = Html::parse_document(search_markup);
    let selector = Selector::parse(&format!(".{RECIPE_LINK_CLASS}"))
        .map_err(|e| ExtractError::Malformed(format!("invalid selector: {e}")))?;

    let link = document
        .select(&selector)
        .next()
        .ok_or(ExtractError::NoSearchResult)?;

    let href = link
        .value()
        .attr("href")
        .ok_or(ExtractError::MissingDetailId)?;
    debug!("First recipe link: {}", href);

    let id = href.rsplit('/').next().unwrap_or_default().trim();
    if id.is_empty() {
        return Err(ExtractError::MissingDetailId);
    }

    Ok(id.to_string())
}
