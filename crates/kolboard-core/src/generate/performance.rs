use std::ops::RangeInclusive;

use chrono::{DateTime, Duration, Utc};
use rand::Rng;

use super::pick;
use crate::catalog::CONTENT_TYPES;
use crate::stats::{as_f64, mean, ratio_or_zero, round_to, truncate};
use crate::types::{Campaign, CampaignPerformance, DailyMetric, Profile, TopContent};

/// Length of the daily metric series attached to every campaign.
pub const DAILY_SERIES_DAYS: u32 = 30;
/// Days of the series amplified as the campaign peak.
const PEAK_WINDOW: RangeInclusive<u32> = 10..=20;
const PEAK_MULTIPLIER: f64 = 1.5;
const TOP_CONTENT_COUNT: usize = 5;

/// Derive the performance record of `campaign` from the profiles it references.
///
/// Ids in `campaign.kol_ids` that match no profile are ignored. With no matching
/// profiles every total is zero and the cost ratios fall back to zero.
pub fn generate_performance<R>(
    rng: &mut R,
    now: DateTime<Utc>,
    campaign: &Campaign,
    profiles: &[Profile],
) -> CampaignPerformance
where
    R: Rng + ?Sized,
{
    let participants: Vec<&Profile> = profiles
        .iter()
        .filter(|p| campaign.kol_ids.contains(&p.id))
        .collect();

    let total_followers: u64 = participants.iter().map(|p| p.followers).sum();
    let total_reach = truncate(as_f64(total_followers) * rng.random_range(0.3..0.8));
    let total_impressions = truncate(as_f64(total_reach) * rng.random_range(2.0..5.0));
    let avg_engagement_rate = mean(participants.iter().map(|p| p.engagement_rate));
    let total_engagement = truncate(as_f64(total_reach) * avg_engagement_rate / 100.0);

    // Neutral is capped by what positive leaves, so negative never drops below zero.
    let sentiment_positive = round_to(rng.random_range(55.0..=85.0), 1);
    let neutral_cap = 30.0_f64.min(100.0 - sentiment_positive);
    let sentiment_neutral = round_to(rng.random_range(10.0..=neutral_cap), 1);
    let sentiment_negative = round_to(100.0 - sentiment_positive - sentiment_neutral, 1).max(0.0);

    let daily_metrics = daily_series(rng, now, total_reach, avg_engagement_rate);
    let top_performing_content = top_content(rng, &participants);

    let budget = campaign.budget;

    CampaignPerformance {
        campaign_id: campaign.id.clone(),
        campaign_name: campaign.name.clone(),
        brand: campaign.brand.clone(),
        status: campaign.status,
        total_reach,
        total_impressions,
        total_engagement,
        engagement_rate: round_to(ratio_or_zero(as_f64(total_engagement) * 100.0, total_reach), 2),
        sentiment_positive,
        sentiment_neutral,
        sentiment_negative,
        top_performing_content,
        roi_estimate: round_to(rng.random_range(1.5..=5.5), 2),
        brand_mention_increase: round_to(rng.random_range(15.0..=150.0), 1),
        daily_metrics,
        budget,
        cost_per_engagement: round_to(ratio_or_zero(as_f64(budget), total_engagement), 2),
        cost_per_reach: round_to(ratio_or_zero(as_f64(budget) * 1000.0, total_reach), 2),
    }
}

/// Spread the total reach evenly over the series, jitter each day, and lift the peak window.
fn daily_series<R>(
    rng: &mut R,
    now: DateTime<Utc>,
    total_reach: u64,
    engagement_rate: f64,
) -> Vec<DailyMetric>
where
    R: Rng + ?Sized,
{
    let base_daily_reach = as_f64(total_reach / u64::from(DAILY_SERIES_DAYS));

    (0..DAILY_SERIES_DAYS)
        .map(|day| {
            let mut multiplier = 1.0 + rng.random_range(-0.4..0.6);
            if PEAK_WINDOW.contains(&day) {
                multiplier *= PEAK_MULTIPLIER;
            }
            let reach = base_daily_reach * multiplier;
            DailyMetric {
                date: (now - Duration::days(i64::from(DAILY_SERIES_DAYS - 1 - day))).date_naive(),
                reach: truncate(reach),
                engagement: truncate(reach * engagement_rate / 100.0),
                impressions: truncate(reach * rng.random_range(2.0..4.0)),
                sentiment: round_to(rng.random_range(0.5..=0.9), 2),
            }
        })
        .collect()
}

fn top_content<R>(rng: &mut R, participants: &[&Profile]) -> Vec<TopContent>
where
    R: Rng + ?Sized,
{
    if participants.is_empty() {
        return Vec::new();
    }

    let mut items: Vec<TopContent> = (0..TOP_CONTENT_COUNT)
        .map(|_| TopContent {
            kol_name: pick(rng, participants).name.clone(),
            content_type: (*pick(rng, CONTENT_TYPES)).to_string(),
            engagement: rng.random_range(5_000..=50_000),
            reach: rng.random_range(50_000..=500_000),
        })
        .collect();
    items.sort_by(|a, b| b.engagement.cmp(&a.engagement));
    items
}

#[cfg(test)]
#[path = "performance_test.rs"]
mod tests;
