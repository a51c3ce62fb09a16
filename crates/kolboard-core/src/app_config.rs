use std::net::SocketAddr;

use crate::dataset::GenerationSettings;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Environment {
    Development,
    Test,
    Production,
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Development => write!(f, "development"),
            Environment::Test => write!(f, "test"),
            Environment::Production => write!(f, "production"),
        }
    }
}

/// Origins the HTTP layer accepts cross-origin requests from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CorsOrigins {
    Any,
    List(Vec<String>),
}

/// Origins used by the local dashboard dev servers.
pub const DEV_ORIGINS: &[&str] = &[
    "http://localhost:5173",
    "http://localhost:3000",
    "http://127.0.0.1:5173",
];

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub env: Environment,
    pub bind_addr: SocketAddr,
    pub log_level: String,
    pub seed: Option<u64>,
    pub profile_count: usize,
    pub campaign_count: usize,
    pub buzz_days: u32,
    pub allowed_origins: CorsOrigins,
}

impl AppConfig {
    #[must_use]
    pub fn generation_settings(&self) -> GenerationSettings {
        GenerationSettings {
            seed: self.seed,
            profile_count: self.profile_count,
            campaign_count: self.campaign_count,
            buzz_days: self.buzz_days,
        }
    }
}
