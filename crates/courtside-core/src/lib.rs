//! Domain types shared by the scraper and the command line front end.
//!
//! Nothing in this crate performs I/O beyond reading environment variables
//! in [`load_app_config`].

pub mod app_config;
pub mod config;
pub mod report;
pub mod tour;

use thiserror::Error;

pub use app_config::AppConfig;
pub use config::{load_app_config, load_app_config_from_env};
pub use report::{
    GrandSlams, MatchEntry, OverviewRecord, PerformanceRecord, PlayerReport, SurfaceBreakdown,
};
pub use tour::Tour;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("invalid tour: {0:?} (expected ATP or WTA)")]
    InvalidTour(String),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}
