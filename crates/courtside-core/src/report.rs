//! Records extracted from a player's profile pages.
//!
//! Every text field keeps the published formatting (units, separators). A
//! label missing from the page leaves its field `None`; nothing is inferred.

use std::fmt;

use crate::Tour;

/// Biography and career statistics from the overview page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OverviewRecord {
    pub name: Option<String>,
    pub age: Option<String>,
    pub height: Option<String>,
    pub weight: Option<String>,
    pub country: Option<String>,
    pub rank: Option<String>,
    pub career_high_rank: Option<String>,
    /// Career record, `"W-L"`.
    pub win_loss: Option<String>,
    pub titles: Option<String>,
}

/// Win/loss record per surface, in the order surfaces first appear on the page.
///
/// Inserting a surface that is already present replaces its record but keeps
/// its original position.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SurfaceBreakdown {
    entries: Vec<(String, String)>,
}

impl SurfaceBreakdown {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, surface: impl Into<String>, record: impl Into<String>) {
        let surface = surface.into();
        let record = record.into();
        match self.entries.iter_mut().find(|(s, _)| *s == surface) {
            Some((_, existing)) => *existing = record,
            None => self.entries.push((surface, record)),
        }
    }

    #[must_use]
    pub fn get(&self, surface: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(s, _)| s == surface)
            .map(|(_, r)| r.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(s, r)| (s.as_str(), r.as_str()))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Season record and surface breakdown from the performance page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PerformanceRecord {
    pub season_win_loss: Option<String>,
    pub surfaces: SurfaceBreakdown,
}

/// One row of the recent matches list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MatchEntry {
    pub tournament: String,
    pub round: String,
    pub opponent: String,
    pub result: String,
}

/// Grand slam titles counted on the titles-and-finals page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GrandSlams {
    Count(usize),
    /// The tour's site is not scraped for grand slams.
    NotApplicable,
}

impl fmt::Display for GrandSlams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GrandSlams::Count(n) => write!(f, "{n}"),
            GrandSlams::NotApplicable => write!(f, "N/A"),
        }
    }
}

/// Everything gathered for one player in one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerReport {
    pub tour: Tour,
    pub profile_url: String,
    pub overview: OverviewRecord,
    pub performance: PerformanceRecord,
    /// At most five, most recent first.
    pub matches: Vec<MatchEntry>,
    pub grand_slams: GrandSlams,
}
