//! Plain-text rendering of a [`PlayerReport`].

use std::fmt;

use courtside_core::PlayerReport;

const RULE: &str = "--------------------------------------------------";
const ABSENT: &str = "undefined";

fn or_absent(value: Option<&String>) -> &str {
    value.map_or(ABSENT, String::as_str)
}

/// Renders `report` with a fixed field order, surfaces in page order, and
/// matches numbered from 1. The text starts with a blank line and ends with
/// a newline.
pub(crate) fn render(report: &PlayerReport) -> String {
    Report(report).to_string()
}

struct Report<'a>(&'a PlayerReport);

impl fmt::Display for Report<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let report = self.0;
        let overview = &report.overview;
        let performance = &report.performance;

        let fields = [
            ("Name", or_absent(overview.name.as_ref())),
            ("Country", or_absent(overview.country.as_ref())),
            ("Age", or_absent(overview.age.as_ref())),
            ("Height", or_absent(overview.height.as_ref())),
            ("Weight", or_absent(overview.weight.as_ref())),
            ("Current Rank", or_absent(overview.rank.as_ref())),
            ("Career High Rank", or_absent(overview.career_high_rank.as_ref())),
            ("Career Win/Loss", or_absent(overview.win_loss.as_ref())),
            ("Season Win/Loss", or_absent(performance.season_win_loss.as_ref())),
            ("Titles", or_absent(overview.titles.as_ref())),
        ];

        writeln!(f, "\n🎾 PLAYER PROFILE")?;
        writeln!(f, "{RULE}")?;
        for (label, value) in fields {
            writeln!(f, "{label}: {value}")?;
        }
        writeln!(f, "Grand Slams: {}", report.grand_slams)?;

        writeln!(f, "\n📊 Surface Records")?;
        for (surface, record) in performance.surfaces.iter() {
            writeln!(f, "{surface}: {record}")?;
        }

        writeln!(f, "\n🕒 Recent Matches")?;
        for (i, m) in report.matches.iter().enumerate() {
            writeln!(
                f,
                "{}. {} | {} | vs {} | {}",
                i + 1,
                m.tournament,
                m.round,
                m.opponent,
                m.result
            )?;
        }
        writeln!(f, "{RULE}")
    }
}

#[cfg(test)]
mod tests {
    use courtside_core::{
        GrandSlams, MatchEntry, OverviewRecord, PerformanceRecord, SurfaceBreakdown, Tour,
    };

    use super::*;

    fn some(s: &str) -> Option<String> {
        Some(s.to_owned())
    }

    fn sample_report() -> PlayerReport {
        let mut surfaces = SurfaceBreakdown::new();
        surfaces.insert("Hard", "21-5");
        surfaces.insert("Clay", "12-3");
        PlayerReport {
            tour: Tour::Atp,
            profile_url: "https://www.atptour.com/en/players/novak-djokovic/d643/overview"
                .to_owned(),
            overview: OverviewRecord {
                name: some("Novak Djokovic"),
                age: some("37"),
                height: some("188cm"),
                weight: some("77kg"),
                country: some("Serbia"),
                rank: some("7"),
                career_high_rank: some("1"),
                win_loss: some("1123-226"),
                titles: some("99"),
            },
            performance: PerformanceRecord {
                season_win_loss: some("39-9"),
                surfaces,
            },
            matches: vec![
                MatchEntry {
                    tournament: "Shanghai".to_owned(),
                    round: "SF".to_owned(),
                    opponent: "Valentin Vacherot".to_owned(),
                    result: "3-6 4-6".to_owned(),
                },
                MatchEntry {
                    tournament: "Shanghai".to_owned(),
                    round: "QF".to_owned(),
                    opponent: "Zizou Bergs".to_owned(),
                    result: "6-3 7-5".to_owned(),
                },
            ],
            grand_slams: GrandSlams::Count(24),
        }
    }

    #[test]
    fn renders_full_report() {
        let expected = "\n🎾 PLAYER PROFILE\n\
            --------------------------------------------------\n\
            Name: Novak Djokovic\n\
            Country: Serbia\n\
            Age: 37\n\
            Height: 188cm\n\
            Weight: 77kg\n\
            Current Rank: 7\n\
            Career High Rank: 1\n\
            Career Win/Loss: 1123-226\n\
            Season Win/Loss: 39-9\n\
            Titles: 99\n\
            Grand Slams: 24\n\
            \n📊 Surface Records\n\
            Hard: 21-5\n\
            Clay: 12-3\n\
            \n🕒 Recent Matches\n\
            1. Shanghai | SF | vs Valentin Vacherot | 3-6 4-6\n\
            2. Shanghai | QF | vs Zizou Bergs | 6-3 7-5\n\
            --------------------------------------------------\n";
        assert_eq!(render(&sample_report()), expected);
    }

    #[test]
    fn absent_fields_render_as_undefined() {
        let mut report = sample_report();
        report.overview.age = None;
        report.performance.season_win_loss = None;
        let text = render(&report);
        assert!(text.contains("\nAge: undefined\n"), "{text}");
        assert!(text.contains("\nSeason Win/Loss: undefined\n"), "{text}");
    }

    #[test]
    fn wta_grand_slams_render_as_not_applicable() {
        let mut report = sample_report();
        report.tour = Tour::Wta;
        report.grand_slams = GrandSlams::NotApplicable;
        assert!(render(&report).contains("\nGrand Slams: N/A\n"));
    }

    #[test]
    fn empty_sections_keep_headings() {
        let mut report = sample_report();
        report.performance.surfaces = SurfaceBreakdown::new();
        report.matches.clear();
        let text = render(&report);
        assert!(text.contains("\n📊 Surface Records\n\n🕒 Recent Matches\n--------"));
    }
}
