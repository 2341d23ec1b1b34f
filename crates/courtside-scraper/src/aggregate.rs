//! Profile URL to a full [`PlayerReport`].

use courtside_core::{GrandSlams, PlayerReport, Tour};

use crate::client::PageClient;
use crate::error::ScraperError;
use crate::parse::{parse_grand_slams, parse_matches, parse_overview, parse_performance, Section};

const OVERVIEW_SEGMENT: &str = "overview";

/// URL of `section` for the player whose overview page is `profile_url`.
///
/// The last path segment equal to `overview` is replaced by the section's
/// segment; the overview section is `profile_url` itself.
///
/// # Errors
///
/// - [`ScraperError::InvalidUrl`]: `profile_url` does not parse, or `section`
///   is not a profile section.
/// - [`ScraperError::MissingOverviewSegment`]: the path has no `overview` segment.
pub fn section_url(profile_url: &str, section: Section) -> Result<String, ScraperError> {
    let invalid = |reason: String| ScraperError::InvalidUrl {
        url: profile_url.to_owned(),
        reason,
    };

    let Some(segment) = section.path_segment() else {
        return Err(invalid(format!("{section:?} is not a profile section")));
    };

    let mut url = reqwest::Url::parse(profile_url).map_err(|e| invalid(e.to_string()))?;
    let mut segments: Vec<String> = url
        .path_segments()
        .ok_or_else(|| invalid("URL cannot have a path".to_owned()))?
        .map(str::to_owned)
        .collect();

    let Some(index) = segments.iter().rposition(|s| s == OVERVIEW_SEGMENT) else {
        return Err(ScraperError::MissingOverviewSegment {
            url: profile_url.to_owned(),
        });
    };

    if section == Section::Overview {
        return Ok(profile_url.to_owned());
    }

    segment.clone_into(&mut segments[index]);
    url.set_path(&format!("/{}", segments.join("/")));
    Ok(url.into())
}

/// Fetches and parses every section of a player's profile.
///
/// The section pages are requested concurrently. The grand slam page is only
/// requested for tours that count grand slams; other tours report
/// [`GrandSlams::NotApplicable`]. Any failed fetch fails the whole call, so a
/// report is either complete or not produced.
///
/// # Errors
///
/// Returns the first [`ScraperError`] from deriving a section URL or fetching
/// a section page. URL errors are reported before any request is made.
pub async fn aggregate_profile(
    client: &PageClient,
    profile_url: &str,
    tour: Tour,
) -> Result<PlayerReport, ScraperError> {
    let overview_url = section_url(profile_url, Section::Overview)?;
    let performance_url = section_url(profile_url, Section::Performance)?;
    let matches_url = section_url(profile_url, Section::Matches)?;
    let titles_url = section_url(profile_url, Section::GrandSlams)?;

    let overview = async {
        let body = client.fetch_page(&overview_url).await?;
        Ok::<_, ScraperError>(parse_overview(&body))
    };
    let performance = async {
        let body = client.fetch_page(&performance_url).await?;
        Ok::<_, ScraperError>(parse_performance(&body))
    };
    let matches = async {
        let body = client.fetch_page(&matches_url).await?;
        Ok::<_, ScraperError>(parse_matches(&body))
    };
    let grand_slams = async {
        if !tour.counts_grand_slams() {
            return Ok(GrandSlams::NotApplicable);
        }
        let body = client.fetch_page(&titles_url).await?;
        Ok::<_, ScraperError>(GrandSlams::Count(parse_grand_slams(&body)))
    };

    let (overview, performance, matches, grand_slams) =
        tokio::try_join!(overview, performance, matches, grand_slams)?;

    tracing::info!(
        profile_url,
        %tour,
        surfaces = performance.surfaces.len(),
        matches = matches.len(),
        %grand_slams,
        "aggregated player profile"
    );

    Ok(PlayerReport {
        tour,
        profile_url: profile_url.to_owned(),
        overview,
        performance,
        matches,
        grand_slams,
    })
}
