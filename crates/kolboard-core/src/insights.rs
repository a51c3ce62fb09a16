//! Aggregations recomputed on demand from the generated collections.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::catalog::{CampaignStatus, Category, Platform};
use crate::dataset::Dataset;
use crate::stats::{first_max_by, mean, round_to};
use crate::types::Profile;

const TOP_PROFILE_COUNT: usize = 5;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlatformStats {
    pub count: usize,
    pub total_followers: u64,
    pub avg_engagement: f64,
    pub avg_influence: f64,
}

/// Per-platform counts and means. Platforms without profiles are omitted.
#[must_use]
pub fn platform_distribution(profiles: &[Profile]) -> BTreeMap<Platform, PlatformStats> {
    Platform::ALL
        .into_iter()
        .filter_map(|platform| {
            let members: Vec<&Profile> =
                profiles.iter().filter(|p| p.platform == platform).collect();
            if members.is_empty() {
                return None;
            }
            Some((
                platform,
                PlatformStats {
                    count: members.len(),
                    total_followers: members.iter().map(|p| p.followers).sum(),
                    avg_engagement: round_to(mean(members.iter().map(|p| p.engagement_rate)), 2),
                    avg_influence: round_to(mean(members.iter().map(|p| p.influence_score)), 1),
                },
            ))
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryInsight {
    pub category: Category,
    pub kol_count: usize,
    pub total_reach: u64,
    pub avg_engagement: f64,
    pub avg_influence: f64,
    /// Name of the most influential profile in the category.
    pub top_kol: String,
}

/// Per-category counts, means, and leader, in catalog order. Empty categories are omitted.
#[must_use]
pub fn category_insights(profiles: &[Profile]) -> Vec<CategoryInsight> {
    Category::ALL
        .into_iter()
        .filter_map(|category| {
            let members: Vec<&Profile> =
                profiles.iter().filter(|p| p.category == category).collect();
            let top = first_max_by(members.iter().copied(), |p| p.influence_score)?;
            Some(CategoryInsight {
                category,
                kol_count: members.len(),
                total_reach: members.iter().map(|p| p.followers).sum(),
                avg_engagement: round_to(mean(members.iter().map(|p| p.engagement_rate)), 2),
                avg_influence: round_to(mean(members.iter().map(|p| p.influence_score)), 1),
                top_kol: top.name.clone(),
            })
        })
        .collect()
}

/// Fixed five-axis projection used for side-by-side comparison, every axis 0-100.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RadarData {
    #[serde(rename = "影響力")]
    pub influence: f64,
    #[serde(rename = "互動率")]
    pub engagement: f64,
    #[serde(rename = "情緒正面")]
    pub sentiment: f64,
    #[serde(rename = "真實性")]
    pub authenticity: f64,
    #[serde(rename = "受眾品質")]
    pub audience_quality: f64,
}

impl RadarData {
    #[must_use]
    pub fn from_profile(profile: &Profile) -> Self {
        Self {
            influence: profile.influence_score,
            engagement: (profile.engagement_rate * 10.0).min(100.0),
            sentiment: profile.sentiment_score * 100.0,
            authenticity: profile.authenticity_score,
            audience_quality: profile.audience_quality_score,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComparisonRecord {
    pub id: String,
    pub name: String,
    pub avatar: String,
    pub platform: Platform,
    pub followers: u64,
    pub engagement_rate: f64,
    pub influence_score: f64,
    pub sentiment_score: f64,
    pub authenticity_score: f64,
    pub audience_quality_score: f64,
    pub price_range: String,
    pub brand_fit_tags: Vec<String>,
    pub radar_data: RadarData,
}

impl From<&Profile> for ComparisonRecord {
    fn from(p: &Profile) -> Self {
        Self {
            id: p.id.clone(),
            name: p.name.clone(),
            avatar: p.avatar.clone(),
            platform: p.platform,
            followers: p.followers,
            engagement_rate: p.engagement_rate,
            influence_score: p.influence_score,
            sentiment_score: p.sentiment_score,
            authenticity_score: p.authenticity_score,
            audience_quality_score: p.audience_quality_score,
            price_range: p.price_range.clone(),
            brand_fit_tags: p.brand_fit_tags.clone(),
            radar_data: RadarData::from_profile(p),
        }
    }
}

/// One record per profile whose id appears in `ids`, in collection order.
/// Unknown and repeated ids add nothing.
#[must_use]
pub fn compare_profiles<S>(profiles: &[Profile], ids: &[S]) -> Vec<ComparisonRecord>
where
    S: AsRef<str>,
{
    profiles
        .iter()
        .filter(|p| ids.iter().any(|id| id.as_ref() == p.id))
        .map(ComparisonRecord::from)
        .collect()
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardOverview<'a> {
    pub total_kols: usize,
    pub total_reach: u64,
    pub active_campaigns: usize,
    pub completed_campaigns: usize,
    pub total_engagement: u64,
    pub avg_engagement_rate: f64,
    /// Mean ROI over completed campaigns only; 0 when none have completed.
    pub avg_roi: f64,
    pub platform_distribution: BTreeMap<Platform, PlatformStats>,
    pub category_insights: Vec<CategoryInsight>,
    pub top_kols: Vec<&'a Profile>,
}

#[must_use]
pub fn dashboard_overview(dataset: &Dataset) -> DashboardOverview<'_> {
    let profiles = dataset.profiles();
    let count_status =
        |status: CampaignStatus| dataset.campaigns().iter().filter(|c| c.status == status).count();

    let mut top_kols: Vec<&Profile> = profiles.iter().collect();
    top_kols.sort_by(|a, b| b.influence_score.total_cmp(&a.influence_score));
    top_kols.truncate(TOP_PROFILE_COUNT);

    DashboardOverview {
        total_kols: profiles.len(),
        total_reach: profiles.iter().map(|p| p.followers).sum(),
        active_campaigns: count_status(CampaignStatus::Active),
        completed_campaigns: count_status(CampaignStatus::Completed),
        total_engagement: dataset.performances().iter().map(|p| p.total_engagement).sum(),
        avg_engagement_rate: round_to(mean(profiles.iter().map(|p| p.engagement_rate)), 2),
        avg_roi: round_to(
            mean(
                dataset
                    .performances()
                    .iter()
                    .filter(|p| p.status == CampaignStatus::Completed)
                    .map(|p| p.roi_estimate),
            ),
            2,
        ),
        platform_distribution: platform_distribution(profiles),
        category_insights: category_insights(profiles),
        top_kols,
    }
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;
    use crate::dataset::GenerationSettings;
    use crate::generate::generate_profiles;

    fn sample_dataset(seed: u64) -> Dataset {
        let mut rng = StdRng::seed_from_u64(seed);
        let now = Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap();
        Dataset::generate_with(&mut rng, now, &GenerationSettings::default())
    }

    #[test]
    fn platform_counts_cover_every_profile() {
        let mut rng = StdRng::seed_from_u64(1);
        let profiles = generate_profiles(&mut rng, 28);
        let distribution = platform_distribution(&profiles);
        let counted: usize = distribution.values().map(|s| s.count).sum();
        let followers: u64 = distribution.values().map(|s| s.total_followers).sum();
        assert_eq!(counted, profiles.len());
        assert_eq!(followers, profiles.iter().map(|p| p.followers).sum::<u64>());
        assert!(distribution.values().all(|s| s.count > 0));
    }

    #[test]
    fn empty_collections_aggregate_to_nothing() {
        assert!(platform_distribution(&[]).is_empty());
        assert!(category_insights(&[]).is_empty());
        assert!(compare_profiles::<&str>(&[], &["kol_001"]).is_empty());
    }

    #[test]
    fn category_leader_is_most_influential_member() {
        let mut rng = StdRng::seed_from_u64(2);
        let profiles = generate_profiles(&mut rng, 28);
        for insight in category_insights(&profiles) {
            let best = profiles
                .iter()
                .filter(|p| p.category == insight.category)
                .map(|p| p.influence_score)
                .fold(f64::MIN, f64::max);
            let leader = profiles.iter().find(|p| p.name == insight.top_kol).unwrap();
            assert!((leader.influence_score - best).abs() < f64::EPSILON);
            assert!(insight.kol_count > 0);
        }
    }

    #[test]
    fn comparison_returns_one_record_per_found_id() {
        let mut rng = StdRng::seed_from_u64(3);
        let profiles = generate_profiles(&mut rng, 10);
        let records = compare_profiles(&profiles, &["kol_003", "kol_001", "kol_999", "kol_003"]);
        let ids: Vec<&str> = records.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, ["kol_001", "kol_003"]);
    }

    #[test]
    fn radar_axes_stay_within_hundred() {
        let mut rng = StdRng::seed_from_u64(4);
        for profile in generate_profiles(&mut rng, 28) {
            let radar = RadarData::from_profile(&profile);
            for axis in [
                radar.influence,
                radar.engagement,
                radar.sentiment,
                radar.authenticity,
                radar.audience_quality,
            ] {
                assert!((0.0..=100.0).contains(&axis));
            }
        }
    }

    #[test]
    fn radar_serializes_with_display_axes() {
        let mut rng = StdRng::seed_from_u64(5);
        let profile = &generate_profiles(&mut rng, 1)[0];
        let json = serde_json::to_value(RadarData::from_profile(profile)).unwrap();
        for axis in ["影響力", "互動率", "情緒正面", "真實性", "受眾品質"] {
            assert!(json.get(axis).is_some(), "missing {axis}");
        }
    }

    #[test]
    fn dashboard_overview_totals() {
        let dataset = sample_dataset(6);
        let overview = dashboard_overview(&dataset);
        assert_eq!(overview.total_kols, 28);
        assert_eq!(overview.active_campaigns, 2);
        assert_eq!(overview.completed_campaigns, 3);
        assert_eq!(overview.top_kols.len(), 5);
        assert!(overview
            .top_kols
            .windows(2)
            .all(|w| w[0].influence_score >= w[1].influence_score));
        assert!((1.5..=5.5).contains(&overview.avg_roi));

        let json = serde_json::to_value(&overview).unwrap();
        assert!(json["platform_distribution"].is_object());
        assert!(json["top_kols"][0]["influence_score"].is_number());
    }

    #[test]
    fn roi_mean_is_zero_without_completed_campaigns() {
        let mut rng = StdRng::seed_from_u64(7);
        let now = Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap();
        let settings = GenerationSettings {
            campaign_count: 0,
            ..GenerationSettings::default()
        };
        let dataset = Dataset::generate_with(&mut rng, now, &settings);
        let overview = dashboard_overview(&dataset);
        assert!(overview.avg_roi.abs() < f64::EPSILON);
        assert_eq!(overview.total_engagement, 0);
    }
}
