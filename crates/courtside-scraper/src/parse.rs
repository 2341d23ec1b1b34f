//! Section parsers for tour profile pages.
//!
//! Each parser is a pure function of the document text: the same body always
//! yields the same record. Selectors are literal matches against the sites'
//! current markup; a selector that matches nothing produces an absent field,
//! an empty list, or a zero count, never an error.

use std::sync::LazyLock;

use courtside_core::{MatchEntry, OverviewRecord, PerformanceRecord, SurfaceBreakdown};
use scraper::{Html, Selector};

use crate::parse_helpers::{child_text, first_text, selector, EmptyLabel, LabelTable};

/// Number of recent matches kept from the matches page.
pub const MAX_RECENT_MATCHES: usize = 5;

static SEARCH_RESULT: LazyLock<Selector> = LazyLock::new(|| selector("a.search-result-item"));
static PLAYER_NAME: LazyLock<Selector> = LazyLock::new(|| selector("h1"));
static BIO_ROWS: LazyLock<Selector> =
    LazyLock::new(|| selector(".player-profile-hero-table tr"));
static STAT_ROWS: LazyLock<Selector> =
    LazyLock::new(|| selector(".player-profile-stat-table tr"));
static SEASON_RECORD: LazyLock<Selector> =
    LazyLock::new(|| selector(".performance-season-record"));
static SURFACE_ROWS: LazyLock<Selector> = LazyLock::new(|| selector(".surface-breakdown tr"));
static MATCH_ROW: LazyLock<Selector> = LazyLock::new(|| selector(".match-row"));
static MATCH_TOURNAMENT: LazyLock<Selector> = LazyLock::new(|| selector(".tourney-title"));
static MATCH_ROUND: LazyLock<Selector> = LazyLock::new(|| selector(".round"));
static MATCH_OPPONENT: LazyLock<Selector> = LazyLock::new(|| selector(".opponent-name"));
static MATCH_SCORE: LazyLock<Selector> = LazyLock::new(|| selector(".score"));
static GRAND_SLAM: LazyLock<Selector> = LazyLock::new(|| selector(".tournament-type-grand-slam"));

/// The pages scraped for a player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    SearchResults,
    Overview,
    Performance,
    Matches,
    GrandSlams,
}

impl Section {
    /// Profile path segment that serves this section. Search results are not
    /// part of the profile and have none.
    #[must_use]
    pub fn path_segment(self) -> Option<&'static str> {
        match self {
            Section::SearchResults => None,
            Section::Overview => Some("overview"),
            Section::Performance => Some("performance"),
            Section::Matches => Some("matches"),
            Section::GrandSlams => Some("titles-and-finals"),
        }
    }
}

/// Output of [`parse_section`], one variant per [`Section`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParsedSection {
    /// Link of the first search result, as written in the page.
    SearchResults(Option<String>),
    Overview(OverviewRecord),
    Performance(PerformanceRecord),
    Matches(Vec<MatchEntry>),
    GrandSlams(usize),
}

/// Parses `body` as the page for `section`.
#[must_use]
pub fn parse_section(body: &str, section: Section) -> ParsedSection {
    match section {
        Section::SearchResults => ParsedSection::SearchResults(parse_search_results(body)),
        Section::Overview => ParsedSection::Overview(parse_overview(body)),
        Section::Performance => ParsedSection::Performance(parse_performance(body)),
        Section::Matches => ParsedSection::Matches(parse_matches(body)),
        Section::GrandSlams => ParsedSection::GrandSlams(parse_grand_slams(body)),
    }
}

/// `href` of the first search result; later results are ignored.
///
/// A result anchor without an `href` counts as no result.
#[must_use]
pub fn parse_search_results(body: &str) -> Option<String> {
    let document = Html::parse_document(body);
    document
        .select(&SEARCH_RESULT)
        .next()
        .and_then(|a| a.value().attr("href"))
        .map(str::to_owned)
}

/// Player name plus the bio and stat tables of the overview page.
///
/// Fields are looked up by their exact row label (`"Age"`, `"Career High Rank"`,
/// ...). Rows with an empty label are read but match no field.
#[must_use]
pub fn parse_overview(body: &str) -> OverviewRecord {
    let document = Html::parse_document(body);
    let bio = LabelTable::read(&document, &BIO_ROWS, EmptyLabel::Keep);
    let stats = LabelTable::read(&document, &STAT_ROWS, EmptyLabel::Keep);

    OverviewRecord {
        name: first_text(&document, &PLAYER_NAME),
        age: bio.get("Age"),
        height: bio.get("Height"),
        weight: bio.get("Weight"),
        country: bio.get("Country"),
        rank: stats.get("Rank"),
        career_high_rank: stats.get("Career High Rank"),
        win_loss: stats.get("Win/Loss"),
        titles: stats.get("Titles"),
    }
}

/// Season record and per-surface records of the performance page.
#[must_use]
pub fn parse_performance(body: &str) -> PerformanceRecord {
    let document = Html::parse_document(body);

    let mut surfaces = SurfaceBreakdown::new();
    for (surface, record) in
        LabelTable::read(&document, &SURFACE_ROWS, EmptyLabel::Skip).into_rows()
    {
        surfaces.insert(surface, record);
    }

    PerformanceRecord {
        season_win_loss: first_text(&document, &SEASON_RECORD),
        surfaces,
    }
}

/// First [`MAX_RECENT_MATCHES`] match rows, in document order.
#[must_use]
pub fn parse_matches(body: &str) -> Vec<MatchEntry> {
    let document = Html::parse_document(body);
    document
        .select(&MATCH_ROW)
        .take(MAX_RECENT_MATCHES)
        .map(|row| MatchEntry {
            tournament: child_text(row, &MATCH_TOURNAMENT),
            round: child_text(row, &MATCH_ROUND),
            opponent: child_text(row, &MATCH_OPPONENT),
            result: child_text(row, &MATCH_SCORE),
        })
        .collect()
}

/// Number of grand slam tagged entries on the titles-and-finals page.
#[must_use]
pub fn parse_grand_slams(body: &str) -> usize {
    Html::parse_document(body).select(&GRAND_SLAM).count()
}

#[cfg(test)]
#[path = "parse_test.rs"]
mod tests;
