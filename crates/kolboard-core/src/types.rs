use std::collections::BTreeMap;

use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;

use crate::catalog::{CampaignStatus, Category, Platform};

/// One influencer ("KOL") profile.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Profile {
    pub id: String,
    pub name: String,
    pub avatar: String,
    pub platform: Platform,
    pub category: Category,
    pub followers: u64,
    /// Percentage of followers interacting with a typical post.
    pub engagement_rate: f64,
    pub avg_likes: u64,
    pub avg_comments: u64,
    pub avg_shares: u64,
    /// 0-100.
    pub influence_score: f64,
    /// 0-1.
    pub sentiment_score: f64,
    /// 0-100.
    pub authenticity_score: f64,
    /// 0-100.
    pub audience_quality_score: f64,
    pub tags: Vec<String>,
    pub price_range: String,
    pub collaboration_count: u32,
    pub brand_fit_tags: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GenderSplit {
    pub female: f64,
    pub male: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InterestShare {
    pub name: String,
    pub percentage: f64,
}

/// Audience composition of a single profile. Every mapping sums to 100.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AudienceDemographic {
    pub kol_id: String,
    pub age_groups: BTreeMap<String, f64>,
    pub gender: GenderSplit,
    pub locations: BTreeMap<String, f64>,
    /// Sorted by percentage, highest first. Shares are independent and do not sum to 100.
    pub interests: Vec<InterestShare>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Campaign {
    pub id: String,
    pub name: String,
    pub brand: String,
    pub brand_logo: String,
    pub industry: String,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub status: CampaignStatus,
    pub budget: u64,
    pub kol_ids: Vec<String>,
    pub kol_count: usize,
    pub objectives: Vec<String>,
    pub target_audience: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TopContent {
    pub kol_name: String,
    #[serde(rename = "type")]
    pub content_type: String,
    pub engagement: u64,
    pub reach: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DailyMetric {
    pub date: NaiveDate,
    pub reach: u64,
    pub engagement: u64,
    pub impressions: u64,
    pub sentiment: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CampaignPerformance {
    pub campaign_id: String,
    pub campaign_name: String,
    pub brand: String,
    pub status: CampaignStatus,
    pub total_reach: u64,
    pub total_impressions: u64,
    pub total_engagement: u64,
    pub engagement_rate: f64,
    pub sentiment_positive: f64,
    pub sentiment_neutral: f64,
    pub sentiment_negative: f64,
    pub top_performing_content: Vec<TopContent>,
    pub roi_estimate: f64,
    pub brand_mention_increase: f64,
    pub daily_metrics: Vec<DailyMetric>,
    pub budget: u64,
    pub cost_per_engagement: f64,
    /// Cost per thousand reached.
    pub cost_per_reach: f64,
}

/// Share of mentions per source, normalized to sum to 100.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SourceBreakdown {
    pub instagram: f64,
    pub facebook: f64,
    pub youtube: f64,
    pub ptt: f64,
    pub news: f64,
}

impl SourceBreakdown {
    #[must_use]
    pub fn total(&self) -> f64 {
        self.instagram + self.facebook + self.youtube + self.ptt + self.news
    }
}

/// One (keyword, day) mention-volume observation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BuzzTrend {
    pub keyword: String,
    pub date: NaiveDate,
    pub volume: u64,
    pub sentiment: f64,
    pub source_breakdown: SourceBreakdown,
}
