use std::collections::HashMap;

use chrono::{DateTime, Utc};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::catalog::BUZZ_KEYWORDS;
use crate::generate::{
    generate_audience, generate_buzz_trends, generate_campaigns, generate_performance,
    generate_profiles,
};
use crate::types::{AudienceDemographic, BuzzTrend, Campaign, CampaignPerformance, Profile};

/// Sizes and seed for one generation pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenerationSettings {
    /// When set, the same seed always produces the same dataset for a given clock.
    pub seed: Option<u64>,
    pub profile_count: usize,
    pub campaign_count: usize,
    pub buzz_days: u32,
}

impl Default for GenerationSettings {
    fn default() -> Self {
        Self {
            seed: None,
            profile_count: 28,
            campaign_count: 6,
            buzz_days: 30,
        }
    }
}

/// Every generated collection, built once and never mutated afterwards.
///
/// Query and insight functions borrow a `Dataset`; the server shares one behind an `Arc`.
#[derive(Debug, Clone)]
pub struct Dataset {
    generated_at: DateTime<Utc>,
    seed: Option<u64>,
    profiles: Vec<Profile>,
    audiences: HashMap<String, AudienceDemographic>,
    campaigns: Vec<Campaign>,
    performances: Vec<CampaignPerformance>,
    buzz_trends: Vec<BuzzTrend>,
}

impl Dataset {
    /// Generate a dataset against the wall clock, seeding from `settings.seed` or the OS.
    #[must_use]
    pub fn generate(settings: &GenerationSettings) -> Self {
        let mut rng = match settings.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Self::generate_with(&mut rng, Utc::now(), settings)
    }

    /// Generate a dataset from an explicit random source and clock.
    pub fn generate_with<R>(rng: &mut R, now: DateTime<Utc>, settings: &GenerationSettings) -> Self
    where
        R: Rng + ?Sized,
    {
        let profiles = generate_profiles(rng, settings.profile_count);
        tracing::debug!(count = profiles.len(), "generated profiles");

        let campaigns = generate_campaigns(rng, now, &profiles, settings.campaign_count);
        tracing::debug!(count = campaigns.len(), "generated campaigns");

        let performances: Vec<CampaignPerformance> = campaigns
            .iter()
            .map(|campaign| generate_performance(rng, now, campaign, &profiles))
            .collect();
        tracing::debug!(count = performances.len(), "derived campaign performance");

        let audiences: HashMap<String, AudienceDemographic> = profiles
            .iter()
            .map(|p| (p.id.clone(), generate_audience(rng, &p.id, p.category)))
            .collect();
        tracing::debug!(count = audiences.len(), "generated audience demographics");

        let buzz_trends = generate_buzz_trends(rng, now, settings.buzz_days, BUZZ_KEYWORDS);
        tracing::debug!(count = buzz_trends.len(), "generated buzz trends");

        tracing::info!(
            seed = ?settings.seed,
            profiles = profiles.len(),
            campaigns = campaigns.len(),
            buzz_entries = buzz_trends.len(),
            "dataset generated"
        );

        Self {
            generated_at: now,
            seed: settings.seed,
            profiles,
            audiences,
            campaigns,
            performances,
            buzz_trends,
        }
    }

    #[must_use]
    pub fn generated_at(&self) -> DateTime<Utc> {
        self.generated_at
    }

    #[must_use]
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    #[must_use]
    pub fn profiles(&self) -> &[Profile] {
        &self.profiles
    }

    #[must_use]
    pub fn campaigns(&self) -> &[Campaign] {
        &self.campaigns
    }

    #[must_use]
    pub fn performances(&self) -> &[CampaignPerformance] {
        &self.performances
    }

    /// Flat, keyword-major buzz series.
    #[must_use]
    pub fn buzz_trends(&self) -> &[BuzzTrend] {
        &self.buzz_trends
    }

    #[must_use]
    pub fn profile(&self, id: &str) -> Option<&Profile> {
        self.profiles.iter().find(|p| p.id == id)
    }

    #[must_use]
    pub fn audience(&self, kol_id: &str) -> Option<&AudienceDemographic> {
        self.audiences.get(kol_id)
    }

    #[must_use]
    pub fn campaign(&self, id: &str) -> Option<&Campaign> {
        self.campaigns.iter().find(|c| c.id == id)
    }

    #[must_use]
    pub fn performance(&self, campaign_id: &str) -> Option<&CampaignPerformance> {
        self.performances
            .iter()
            .find(|p| p.campaign_id == campaign_id)
    }
}
