//! Narrative insight cards summarizing the whole dataset.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::catalog::{CampaignStatus, Platform};
use crate::dataset::Dataset;
use crate::stats::{as_f64, first_max_by, group_thousands, mean, round_to};

const BUZZ_GROUP: &str = "輿情分析";
const PROFILE_GROUP: &str = "KOL 分析";
const CAMPAIGN_GROUP: &str = "成效驗證";
const MARKET_GROUP: &str = "市場洞察";
const DEEP_DIVE_GROUP: &str = "深度分析";
const MATCHING_GROUP: &str = "智慧推薦";

const STORY_GROUPS: [&str; 6] = [
    BUZZ_GROUP,
    PROFILE_GROUP,
    CAMPAIGN_GROUP,
    MARKET_GROUP,
    DEEP_DIVE_GROUP,
    MATCHING_GROUP,
];

/// Headline number of a story card.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Metric {
    Count(u64),
    Value(f64),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Story {
    pub id: &'static str,
    pub title: &'static str,
    #[serde(rename = "type")]
    pub story_type: &'static str,
    pub icon: &'static str,
    pub category: &'static str,
    pub content: String,
    pub insight: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metric: Option<Metric>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metric_label: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<BTreeMap<Platform, usize>>,
    pub data_source: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StoryGroup {
    pub name: &'static str,
    pub stories: Vec<Story>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct KeyMetrics {
    pub total_kols: usize,
    pub total_reach: u64,
    pub avg_engagement: f64,
    /// Mean buzz sentiment as a percentage.
    pub avg_sentiment: f64,
    pub active_campaigns: usize,
    pub total_buzz_volume: u64,
    pub total_campaign_engagement: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DataSource {
    pub name: &'static str,
    #[serde(rename = "type")]
    pub source_type: &'static str,
    pub description: &'static str,
}

pub const DATA_SOURCES: [DataSource; 4] = [
    DataSource {
        name: "Q-Search 輿情系統",
        source_type: "輿情數據",
        description: "社群留言、貼文、關鍵字聲量",
    },
    DataSource {
        name: "社群平台 API",
        source_type: "KOL 數據",
        description: "粉絲數、互動數據",
    },
    DataSource {
        name: "Campaign 追蹤",
        source_type: "成效數據",
        description: "專屬碼、UTM 追蹤",
    },
    DataSource {
        name: "12CN 會員系統",
        source_type: "會員數據",
        description: "MGM 導流、會員標籤",
    },
];

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DataStories {
    pub stories: Vec<Story>,
    pub categories: Vec<StoryGroup>,
    pub key_metrics: KeyMetrics,
    pub data_sources: &'static [DataSource],
}

/// Build every story card the dataset supports.
///
/// Cards about a leading profile, campaign, or keyword are left out when the
/// collection they draw on is empty.
#[must_use]
pub fn data_stories(dataset: &Dataset) -> DataStories {
    let profiles = dataset.profiles();
    let trends = dataset.buzz_trends();

    let total_buzz_volume: u64 = trends.iter().map(|t| t.volume).sum();
    let buzz_sentiment_pct = round_to(mean(trends.iter().map(|t| t.sentiment)) * 100.0, 1);
    let avg_audience_quality = round_to(mean(profiles.iter().map(|p| p.audience_quality_score)), 1);

    let mut keyword_volumes: Vec<(&str, u64)> = Vec::new();
    for trend in trends {
        match keyword_volumes.iter_mut().find(|(k, _)| *k == trend.keyword) {
            Some((_, volume)) => *volume += trend.volume,
            None => keyword_volumes.push((&trend.keyword, trend.volume)),
        }
    }

    let mut stories = Vec::with_capacity(8);

    let loudest = first_max_by(keyword_volumes.iter().copied(), |(_, volume)| as_f64(*volume));
    if let Some((keyword, _)) = loudest {
        stories.push(Story {
            id: "story_1",
            title: "輿情聲量領袖",
            story_type: "buzz",
            icon: "volume",
            category: BUZZ_GROUP,
            content: format!(
                "本月輿情總聲量達 {} 則，關鍵字「{keyword}」最受關注",
                group_thousands(total_buzz_volume)
            ),
            insight: "透過 Q-Search 輿情數據，追蹤社群討論熱度，即時掌握市場動態",
            metric: Some(Metric::Count(total_buzz_volume)),
            metric_label: Some("總聲量數"),
            data: None,
            data_source: "Q-Search 輿情資料",
        });
    }

    if let Some(kol) = first_max_by(profiles.iter(), |p| p.sentiment_score) {
        stories.push(Story {
            id: "story_2",
            title: "情緒指數觀測",
            story_type: "sentiment",
            icon: "heart",
            category: BUZZ_GROUP,
            content: format!(
                "整體輿情情緒指數為 {buzz_sentiment_pct}%，{} 擁有最佳正面形象 ({}%)",
                kol.name,
                round_to(kol.sentiment_score * 100.0, 1)
            ),
            insight: "情緒分析協助品牌事前評估 KOL 形象風險，降低合作風險",
            metric: Some(Metric::Value(buzz_sentiment_pct)),
            metric_label: Some("正面情緒佔比 %"),
            data: None,
            data_source: "社群留言情緒分析",
        });
    }

    if let Some(kol) = first_max_by(profiles.iter(), |p| p.influence_score) {
        stories.push(Story {
            id: "story_3",
            title: "影響力指數排行",
            story_type: "influence",
            icon: "crown",
            category: PROFILE_GROUP,
            content: format!(
                "{} 以 {} 分領先，結合粉絲數、互動率與情緒分數計算",
                kol.name, kol.influence_score
            ),
            insight: "數據驅動的 KOL 評估模型，協助品牌精準媒合最適合的創作者",
            metric: Some(Metric::Value(kol.influence_score)),
            metric_label: Some("影響力指數"),
            data: None,
            data_source: "綜合評估模型",
        });
    }

    if let Some(kol) = first_max_by(profiles.iter(), |p| p.engagement_rate) {
        stories.push(Story {
            id: "story_4",
            title: "互動效率之星",
            story_type: "engagement",
            icon: "zap",
            category: PROFILE_GROUP,
            content: format!("{} 擁有 {}% 的超高互動率", kol.name, kol.engagement_rate),
            insight: "高互動率代表更真實的粉絲連結，適合深度品牌溝通",
            metric: Some(Metric::Value(kol.engagement_rate)),
            metric_label: Some("互動率 %"),
            data: None,
            data_source: "社群平台數據",
        });
    }

    if let Some(best) = first_max_by(dataset.performances().iter(), |p| p.roi_estimate) {
        stories.push(Story {
            id: "story_5",
            title: "Campaign 成效追蹤",
            story_type: "campaign",
            icon: "trending-up",
            category: CAMPAIGN_GROUP,
            content: format!(
                "{} 達成 {} 觸及，ROI 估算 {}x",
                best.campaign_name,
                group_thousands(best.total_reach),
                best.roi_estimate
            ),
            insight: "Campaign 儀表板即時追蹤活動成效，驗證 KOL 影響力實際效益",
            metric: Some(Metric::Value(best.roi_estimate)),
            metric_label: Some("ROI 倍數"),
            data: None,
            data_source: "Campaign 追蹤碼",
        });
    }

    let platform_counts: BTreeMap<Platform, usize> = Platform::ALL
        .into_iter()
        .map(|platform| {
            let count = profiles.iter().filter(|p| p.platform == platform).count();
            (platform, count)
        })
        .collect();
    let count_of = |platform: Platform| platform_counts.get(&platform).copied().unwrap_or(0);
    stories.push(Story {
        id: "story_6",
        title: "平台生態分佈",
        story_type: "platform",
        icon: "bar-chart",
        category: MARKET_GROUP,
        content: format!(
            "Instagram {} 位、YouTube {} 位、TikTok {} 位 KOL 建檔",
            count_of(Platform::Instagram),
            count_of(Platform::Youtube),
            count_of(Platform::Tiktok)
        ),
        insight: "多平台佈局能觸及不同受眾群體，建議根據品牌目標選擇平台組合",
        metric: None,
        metric_label: None,
        data: Some(platform_counts.clone()),
        data_source: "KOL 資料庫",
    });

    if !profiles.is_empty() {
        stories.push(Story {
            id: "story_7",
            title: "受眾品質評估",
            story_type: "audience",
            icon: "users",
            category: DEEP_DIVE_GROUP,
            content: format!("平均受眾品質分數達 {avg_audience_quality} 分（滿分 100）"),
            insight: "高品質受眾能提升 Campaign 轉換潛力，適合品牌長期經營",
            metric: Some(Metric::Value(avg_audience_quality)),
            metric_label: Some("平均受眾品質"),
            data: None,
            data_source: "受眾分析模型",
        });
    }

    stories.push(Story {
        id: "story_8",
        title: "品牌適配推薦",
        story_type: "recommendation",
        icon: "target",
        category: MATCHING_GROUP,
        content: "根據品牌標籤與 KOL 屬性分析，系統可自動推薦最適配的創作者組合".to_string(),
        insight: "AI 驅動的媒合系統，為品牌省時省力找到對的 KOL",
        metric: Some(Metric::Count(u64::try_from(profiles.len()).unwrap_or(u64::MAX))),
        metric_label: Some("可推薦 KOL 數"),
        data: None,
        data_source: "智慧推薦引擎",
    });

    let categories = STORY_GROUPS
        .into_iter()
        .map(|name| StoryGroup {
            name,
            stories: stories
                .iter()
                .filter(|s| s.category == name)
                .cloned()
                .collect(),
        })
        .collect();

    let key_metrics = KeyMetrics {
        total_kols: profiles.len(),
        total_reach: profiles.iter().map(|p| p.followers).sum(),
        avg_engagement: round_to(mean(profiles.iter().map(|p| p.engagement_rate)), 2),
        avg_sentiment: buzz_sentiment_pct,
        active_campaigns: dataset
            .campaigns()
            .iter()
            .filter(|c| c.status == CampaignStatus::Active)
            .count(),
        total_buzz_volume,
        total_campaign_engagement: dataset
            .performances()
            .iter()
            .map(|p| p.total_engagement)
            .sum(),
    };

    DataStories {
        stories,
        categories,
        key_metrics,
        data_sources: &DATA_SOURCES,
    }
}
