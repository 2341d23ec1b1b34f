//! Where a tour's pages live.

use courtside_core::{AppConfig, Tour};

/// A tour together with the base URL its pages are fetched from.
///
/// The base URL is normally the tour's public site; tests point it at a
/// local mock server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TourSite {
    tour: Tour,
    base_url: String,
}

impl TourSite {
    #[must_use]
    pub fn new(tour: Tour, base_url: &str) -> Self {
        Self {
            tour,
            base_url: base_url.trim_end_matches('/').to_owned(),
        }
    }

    /// The tour's public site.
    #[must_use]
    pub fn public(tour: Tour) -> Self {
        Self::new(tour, tour.default_base_url())
    }

    #[must_use]
    pub fn from_config(tour: Tour, config: &AppConfig) -> Self {
        Self::new(tour, config.base_url(tour))
    }

    #[must_use]
    pub fn tour(&self) -> Tour {
        self.tour
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Search page URL for a player name.
    #[must_use]
    pub fn search_url(&self, name: &str) -> String {
        format!("{}{}", self.base_url, self.tour.search_path(name))
    }

    /// Absolute profile URL for a link taken from a search result.
    ///
    /// Site-relative links are appended to the base URL; absolute links are
    /// returned unchanged.
    #[must_use]
    pub fn profile_url(&self, href: &str) -> String {
        if href.starts_with("https://") || href.starts_with("http://") {
            href.to_owned()
        } else if href.starts_with('/') {
            format!("{}{href}", self.base_url)
        } else {
            format!("{}/{href}", self.base_url)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn public_sites() {
        assert_eq!(
            TourSite::public(Tour::Atp).search_url("Novak Djokovic"),
            "https://www.atptour.com/en/players?search=Novak%20Djokovic"
        );
        assert_eq!(
            TourSite::public(Tour::Wta).search_url("Iga Swiatek"),
            "https://www.wtatennis.com/search?term=Iga%20Swiatek"
        );
    }

    #[test]
    fn base_url_trailing_slash_is_dropped() {
        let site = TourSite::new(Tour::Wta, "http://127.0.0.1:4000/");
        assert_eq!(site.base_url(), "http://127.0.0.1:4000");
        assert_eq!(
            site.search_url("x"),
            "http://127.0.0.1:4000/search?term=x"
        );
    }

    #[test]
    fn profile_url_joins_relative_links() {
        let site = TourSite::public(Tour::Atp);
        assert_eq!(
            site.profile_url("/en/players/novak-djokovic/d643/overview"),
            "https://www.atptour.com/en/players/novak-djokovic/d643/overview"
        );
        assert_eq!(
            site.profile_url("en/players/a/b/overview"),
            "https://www.atptour.com/en/players/a/b/overview"
        );
    }

    #[test]
    fn profile_url_keeps_absolute_links() {
        let site = TourSite::public(Tour::Wta);
        assert_eq!(
            site.profile_url("https://www.wtatennis.com/players/1/x/overview"),
            "https://www.wtatennis.com/players/1/x/overview"
        );
    }

    #[test]
    fn from_config_uses_configured_base() {
        let config = AppConfig {
            atp_base_url: "http://localhost:1234".to_owned(),
            ..AppConfig::default()
        };
        let site = TourSite::from_config(Tour::Atp, &config);
        assert_eq!(site.tour(), Tour::Atp);
        assert_eq!(site.base_url(), "http://localhost:1234");
    }
}
