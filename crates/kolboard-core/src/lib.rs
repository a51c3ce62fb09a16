//! Synthetic KOL analytics: generators, the immutable [`Dataset`] context,
//! and the read-only queries and insight aggregations served over HTTP.

pub mod app_config;
pub mod catalog;
pub mod config;
pub mod dataset;
pub mod generate;
pub mod insights;
pub mod query;
pub mod recommend;
pub mod stats;
pub mod stories;
pub mod types;

use thiserror::Error;

pub use app_config::{AppConfig, CorsOrigins, Environment};
pub use catalog::{CampaignStatus, Category, Platform};
pub use config::{load_app_config, load_app_config_from_env};
pub use dataset::{Dataset, GenerationSettings};
pub use types::{
    AudienceDemographic, BuzzTrend, Campaign, CampaignPerformance, DailyMetric, GenderSplit,
    InterestShare, Profile, SourceBreakdown, TopContent,
};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    #[error("unknown {kind}: {value}")]
    UnknownVariant { kind: &'static str, value: String },
}
