//! Fetching and parsing of ATP and WTA player profile pages.

pub mod aggregate;
pub mod client;
pub mod error;
pub mod parse;
pub mod resolve;
pub mod site;

mod parse_helpers;
mod rate_limit;

pub use aggregate::{aggregate_profile, section_url};
pub use client::PageClient;
pub use error::ScraperError;
pub use parse::{parse_section, ParsedSection, Section};
pub use resolve::resolve_player;
pub use site::TourSite;
