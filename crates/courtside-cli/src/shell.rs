//! One interactive query: prompt, validate, resolve, aggregate, print.

use std::io::{BufRead, Write};

use anyhow::Context;
use courtside_core::{AppConfig, PlayerReport, Tour};
use courtside_scraper::{aggregate_profile, resolve_player, PageClient, TourSite};

use crate::render::render;

pub(crate) const NAME_PROMPT: &str = "Search player name: ";
pub(crate) const TOUR_PROMPT: &str = "Tour (ATP/WTA): ";
pub(crate) const INVALID_TOUR: &str = "❌ Invalid tour.";
pub(crate) const NOT_FOUND: &str = "❌ Player not found.";

/// Answers supplied on the command line; `None` means prompt for it.
#[derive(Debug, Default)]
pub(crate) struct Preset {
    pub name: Option<String>,
    pub tour: Option<String>,
}

/// How a run ended, short of a fetch error.
#[derive(Debug)]
pub(crate) enum Outcome {
    InvalidTour,
    NotFound,
    Report(Box<PlayerReport>),
}

/// Handles exactly one query.
///
/// An invalid tour and a player that cannot be found are printed and returned
/// as outcomes. No request is made for an invalid tour.
///
/// # Errors
///
/// Fails on terminal I/O errors and on any fetch error; nothing is printed for
/// a report whose sections could not all be fetched.
pub(crate) async fn run<R: BufRead, W: Write>(
    preset: &Preset,
    input: &mut R,
    output: &mut W,
    client: &PageClient,
    config: &AppConfig,
) -> anyhow::Result<Outcome> {
    let name = match &preset.name {
        Some(name) => name.clone(),
        None => prompt(input, output, NAME_PROMPT)?,
    };
    let tour_input = match &preset.tour {
        Some(tour) => tour.clone(),
        None => prompt(input, output, TOUR_PROMPT)?,
    };

    let tour = match tour_input.parse::<Tour>() {
        Ok(tour) => tour,
        Err(e) => {
            tracing::debug!(error = %e, "rejected tour input");
            writeln!(output, "{INVALID_TOUR}")?;
            return Ok(Outcome::InvalidTour);
        }
    };

    writeln!(output, "\n🔍 Searching...")?;
    output.flush()?;

    let site = TourSite::from_config(tour, config);
    let Some(profile_url) = resolve_player(client, &site, &name)
        .await
        .with_context(|| format!("failed to search {tour} for {name:?}"))?
    else {
        writeln!(output, "{NOT_FOUND}")?;
        return Ok(Outcome::NotFound);
    };

    let report = aggregate_profile(client, &profile_url, tour)
        .await
        .with_context(|| format!("failed to fetch player profile {profile_url}"))?;

    write!(output, "{}", render(&report))?;
    output.flush()?;
    Ok(Outcome::Report(Box::new(report)))
}

/// Prints `label`, then reads one line without its line ending. End of input
/// reads as an empty answer.
fn prompt<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    label: &str,
) -> anyhow::Result<String> {
    write!(output, "{label}")?;
    output.flush()?;

    let mut line = String::new();
    input
        .read_line(&mut line)
        .context("failed to read from standard input")?;
    Ok(line.trim_end_matches(['\r', '\n']).to_owned())
}

#[cfg(test)]
#[path = "shell_test.rs"]
mod tests;
