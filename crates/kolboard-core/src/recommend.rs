//! Rule-based profile recommendations for a campaign brief.

use serde::Serialize;

use crate::catalog::Category;
use crate::dataset::Dataset;
use crate::stats::{as_f64, count_as_f64, round_to, truncate};
use crate::types::Profile;

pub const DEFAULT_RECOMMENDATION_LIMIT: usize = 5;

const HIGH_ENGAGEMENT_RATE: f64 = 5.0;
const POSITIVE_SENTIMENT: f64 = 0.7;
const HIGH_AUTHENTICITY: f64 = 80.0;
const BASE_MATCH_SCORE: f64 = 70.0;
const MATCH_SCORE_PER_REASON: f64 = 7.5;
const PREDICTED_REACH_SHARE: f64 = 0.6;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecommendationRequest {
    pub category: Option<Category>,
    /// Campaign budget in NT$.
    pub budget: Option<u64>,
    pub limit: usize,
}

/// Follower band a budget can afford.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BudgetTier {
    /// Under NT$50,000: accounts below 100k followers.
    Micro,
    /// Under NT$150,000: accounts strictly between 50k and 500k followers.
    Mid,
    Unrestricted,
}

impl BudgetTier {
    #[must_use]
    pub fn for_budget(budget: u64) -> Self {
        if budget < 50_000 {
            BudgetTier::Micro
        } else if budget < 150_000 {
            BudgetTier::Mid
        } else {
            BudgetTier::Unrestricted
        }
    }

    #[must_use]
    pub fn admits(self, followers: u64) -> bool {
        match self {
            BudgetTier::Micro => followers < 100_000,
            BudgetTier::Mid => followers > 50_000 && followers < 500_000,
            BudgetTier::Unrestricted => true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Recommendation<'a> {
    #[serde(flatten)]
    pub profile: &'a Profile,
    pub match_score: f64,
    pub match_reasons: Vec<String>,
    pub predicted_reach: u64,
    pub predicted_engagement: u64,
}

/// Rank profiles for `request`.
///
/// With a category, same-category profiles come first, then by influence
/// score; without one the collection order is kept. A restrictive budget tier
/// only drops profiles outside its follower band; it never adds a reason, so a
/// profile scores the same with or without a budget.
#[must_use]
pub fn recommend<'a>(
    dataset: &'a Dataset,
    request: &RecommendationRequest,
) -> Vec<Recommendation<'a>> {
    let mut candidates: Vec<&Profile> = dataset.profiles().iter().collect();

    if let Some(category) = request.category {
        candidates.sort_by(|a, b| {
            let rank = |p: &Profile| p.category == category;
            rank(b)
                .cmp(&rank(a))
                .then_with(|| b.influence_score.total_cmp(&a.influence_score))
        });
    }

    let tier = request.budget.map(BudgetTier::for_budget);
    if let Some(tier) = tier {
        candidates.retain(|p| tier.admits(p.followers));
    }

    candidates
        .into_iter()
        .take(request.limit)
        .map(|profile| {
            let match_reasons = match_reasons(profile, request.category);
            Recommendation {
                profile,
                match_score: match_score(match_reasons.len()),
                match_reasons,
                predicted_reach: truncate(as_f64(profile.followers) * PREDICTED_REACH_SHARE),
                predicted_engagement: truncate(
                    as_f64(profile.followers) * profile.engagement_rate / 100.0,
                ),
            }
        })
        .collect()
}

fn match_reasons(profile: &Profile, category: Option<Category>) -> Vec<String> {
    let mut reasons = Vec::new();
    if let Some(category) = category.filter(|c| *c == profile.category) {
        reasons.push(format!("類別匹配：{}", category.label()));
    }
    if profile.engagement_rate > HIGH_ENGAGEMENT_RATE {
        reasons.push("高互動率".to_string());
    }
    if profile.sentiment_score > POSITIVE_SENTIMENT {
        reasons.push("正面形象".to_string());
    }
    if profile.authenticity_score > HIGH_AUTHENTICITY {
        reasons.push("高真實性".to_string());
    }
    reasons
}

fn match_score(reason_count: usize) -> f64 {
    round_to(
        BASE_MATCH_SCORE + MATCH_SCORE_PER_REASON * count_as_f64(reason_count),
        1,
    )
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;
    use crate::dataset::GenerationSettings;

    fn sample_dataset(seed: u64, profile_count: usize) -> Dataset {
        let mut rng = StdRng::seed_from_u64(seed);
        let now = Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap();
        let settings = GenerationSettings {
            profile_count,
            ..GenerationSettings::default()
        };
        Dataset::generate_with(&mut rng, now, &settings)
    }

    #[test]
    fn budget_tiers() {
        assert_eq!(BudgetTier::for_budget(40_000), BudgetTier::Micro);
        assert_eq!(BudgetTier::for_budget(50_000), BudgetTier::Mid);
        assert_eq!(BudgetTier::for_budget(149_999), BudgetTier::Mid);
        assert_eq!(BudgetTier::for_budget(150_000), BudgetTier::Unrestricted);
        assert!(BudgetTier::Micro.admits(99_999));
        assert!(!BudgetTier::Micro.admits(100_000));
        assert!(!BudgetTier::Mid.admits(50_000));
        assert!(BudgetTier::Mid.admits(50_001));
        assert!(!BudgetTier::Mid.admits(500_000));
    }

    #[test]
    fn food_brief_on_small_budget_keeps_micro_accounts_with_reasons() {
        let dataset = sample_dataset(40, 1_000);
        let request = RecommendationRequest {
            category: Some(Category::Food),
            budget: Some(40_000),
            limit: 10,
        };
        let results = recommend(&dataset, &request);
        assert!(!results.is_empty());
        for r in &results {
            assert!(r.profile.followers < 100_000, "{}", r.profile.id);
        }
    }

    #[test]
    fn budget_filters_without_changing_scores() {
        let dataset = sample_dataset(44, 1_000);
        let unbudgeted = recommend(
            &dataset,
            &RecommendationRequest {
                category: Some(Category::Food),
                budget: None,
                limit: 1_000,
            },
        );
        let budgeted = recommend(
            &dataset,
            &RecommendationRequest {
                category: Some(Category::Food),
                budget: Some(40_000),
                limit: 1_000,
            },
        );
        assert!(!budgeted.is_empty());
        assert!(budgeted.len() < unbudgeted.len());
        for r in &budgeted {
            let same = unbudgeted
                .iter()
                .find(|u| u.profile.id == r.profile.id)
                .unwrap();
            assert_eq!(r.match_reasons, same.match_reasons);
            assert!((r.match_score - same.match_score).abs() < 1e-9);
        }
    }

    #[test]
    fn match_score_adds_per_reason() {
        assert!((match_score(0) - 70.0).abs() < 1e-9);
        assert!((match_score(2) - 85.0).abs() < 1e-9);
        assert!((match_score(4) - 100.0).abs() < 1e-9);
    }

    #[test]
    fn same_category_ranks_first_then_by_influence() {
        let dataset = sample_dataset(41, 28);
        let request = RecommendationRequest {
            category: Some(Category::Beauty),
            budget: None,
            limit: 28,
        };
        let results = recommend(&dataset, &request);
        assert_eq!(results.len(), 28);

        let split = results
            .iter()
            .position(|r| r.profile.category != Category::Beauty)
            .unwrap_or(results.len());
        assert!(results[split..]
            .iter()
            .all(|r| r.profile.category != Category::Beauty));
        for group in [&results[..split], &results[split..]] {
            assert!(group
                .windows(2)
                .all(|w| w[0].profile.influence_score >= w[1].profile.influence_score));
        }
        assert!(results[..split]
            .iter()
            .all(|r| r.match_reasons[0] == "類別匹配：美妝"));
    }

    #[test]
    fn scores_and_predictions_follow_reasons() {
        let dataset = sample_dataset(42, 28);
        let request = RecommendationRequest {
            limit: DEFAULT_RECOMMENDATION_LIMIT,
            ..RecommendationRequest::default()
        };
        let results = recommend(&dataset, &request);
        assert_eq!(results.len(), DEFAULT_RECOMMENDATION_LIMIT);
        for (r, p) in results.iter().zip(dataset.profiles()) {
            assert_eq!(r.profile.id, p.id);
            let expected = 70.0 + 7.5 * count_as_f64(r.match_reasons.len());
            assert!((r.match_score - expected).abs() < 1e-9);
            assert_eq!(r.predicted_reach, truncate(as_f64(p.followers) * 0.6));
            assert!(r.predicted_engagement <= p.followers);
        }
    }

    #[test]
    fn recommendation_serializes_flat() {
        let dataset = sample_dataset(43, 5);
        let request = RecommendationRequest {
            limit: 1,
            ..RecommendationRequest::default()
        };
        let results = recommend(&dataset, &request);
        let json = serde_json::to_value(&results[0]).unwrap();
        assert_eq!(json["id"], "kol_001");
        assert!(json["match_reasons"].is_array());
        assert!(json["predicted_reach"].is_u64());
    }
}
