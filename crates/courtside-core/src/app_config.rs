use crate::Tour;

pub const DEFAULT_USER_AGENT: &str =
    "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/124.0.0.0 Safari/537.36";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub log_level: String,
    pub request_timeout_secs: u64,
    pub user_agent: String,
    pub max_retries: u32,
    pub retry_backoff_base_secs: u64,
    pub atp_base_url: String,
    pub wta_base_url: String,
}

impl AppConfig {
    /// Base URL the given tour's pages are fetched from, without a trailing slash.
    #[must_use]
    pub fn base_url(&self, tour: Tour) -> &str {
        match tour {
            Tour::Atp => &self.atp_base_url,
            Tour::Wta => &self.wta_base_url,
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            log_level: "warn".to_owned(),
            request_timeout_secs: 30,
            user_agent: DEFAULT_USER_AGENT.to_owned(),
            max_retries: 2,
            retry_backoff_base_secs: 1,
            atp_base_url: Tour::Atp.default_base_url().to_owned(),
            wta_base_url: Tour::Wta.default_base_url().to_owned(),
        }
    }
}
