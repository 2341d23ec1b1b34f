//! Player name to profile URL.

use crate::client::PageClient;
use crate::error::ScraperError;
use crate::parse::parse_search_results;
use crate::site::TourSite;

/// Searches `site` for `name` and returns the absolute profile URL of the
/// first result, or `None` when the search has no results.
///
/// Only the first result is considered; there is no disambiguation.
///
/// # Errors
///
/// Returns any [`ScraperError`] from fetching the search page.
pub async fn resolve_player(
    client: &PageClient,
    site: &TourSite,
    name: &str,
) -> Result<Option<String>, ScraperError> {
    let search_url = site.search_url(name);
    let body = client.fetch_page(&search_url).await?;

    let Some(href) = parse_search_results(&body) else {
        tracing::info!(tour = %site.tour(), name, "no search results");
        return Ok(None);
    };

    let profile_url = site.profile_url(&href);
    tracing::info!(tour = %site.tour(), name, profile_url = %profile_url, "resolved player");
    Ok(Some(profile_url))
}
