use chrono::{DateTime, Duration, Utc};
use rand::seq::IndexedRandom;
use rand::Rng;

use super::pick;
use crate::catalog::{
    CampaignStatus, BRANDS, CAMPAIGN_OBJECTIVES, CAMPAIGN_SEASONS, STATUS_PATTERN,
    TARGET_AUDIENCES,
};
use crate::types::{Campaign, Profile};

/// Generate `count` campaigns, each referencing 3-8 distinct profiles.
///
/// Statuses cycle through [`STATUS_PATTERN`]; dates are placed relative to `now`
/// so completed campaigns are in the past, active ones straddle `now`, and
/// planned ones start in the future.
pub fn generate_campaigns<R>(
    rng: &mut R,
    now: DateTime<Utc>,
    profiles: &[Profile],
    count: usize,
) -> Vec<Campaign>
where
    R: Rng + ?Sized,
{
    (0..count)
        .map(|index| {
            let status = STATUS_PATTERN[index % STATUS_PATTERN.len()];
            generate_campaign(rng, now, profiles, index, status)
        })
        .collect()
}

fn generate_campaign<R>(
    rng: &mut R,
    now: DateTime<Utc>,
    profiles: &[Profile],
    index: usize,
    status: CampaignStatus,
) -> Campaign
where
    R: Rng + ?Sized,
{
    let brand = *pick(rng, BRANDS);
    let (start_date, end_date) = schedule(rng, now, status);

    let participant_count = rng.random_range(3..=8).min(profiles.len());
    let kol_ids: Vec<String> = profiles
        .choose_multiple(rng, participant_count)
        .map(|p| p.id.clone())
        .collect();

    let season = pick(rng, CAMPAIGN_SEASONS);
    let objective_count = rng.random_range(2..=4);
    let objectives = CAMPAIGN_OBJECTIVES
        .choose_multiple(rng, objective_count)
        .map(|o| (*o).to_string())
        .collect();

    Campaign {
        id: format!("camp_{:03}", index + 1),
        name: format!("{} {season}活動", brand.name),
        brand: brand.name.to_string(),
        brand_logo: brand.logo.to_string(),
        industry: brand.industry.to_string(),
        start_date,
        end_date,
        status,
        budget: rng.random_range(300_000..=3_000_000),
        kol_count: kol_ids.len(),
        kol_ids,
        objectives,
        target_audience: (*pick(rng, TARGET_AUDIENCES)).to_string(),
    }
}

fn schedule<R>(
    rng: &mut R,
    now: DateTime<Utc>,
    status: CampaignStatus,
) -> (DateTime<Utc>, DateTime<Utc>)
where
    R: Rng + ?Sized,
{
    match status {
        CampaignStatus::Completed => {
            let start = now - Duration::days(rng.random_range(60..=120));
            let end = start + Duration::days(rng.random_range(14..=45));
            (start, end)
        }
        CampaignStatus::Active => (
            now - Duration::days(rng.random_range(1..=14)),
            now + Duration::days(rng.random_range(7..=30)),
        ),
        CampaignStatus::Planning => {
            let start = now + Duration::days(rng.random_range(7..=30));
            let end = start + Duration::days(rng.random_range(14..=45));
            (start, end)
        }
    }
}
