//! Fixed enumerations and sampling pools the generators draw from.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::CoreError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Instagram,
    Youtube,
    Tiktok,
    Facebook,
}

impl Platform {
    pub const ALL: [Platform; 4] = [
        Platform::Instagram,
        Platform::Youtube,
        Platform::Tiktok,
        Platform::Facebook,
    ];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Platform::Instagram => "instagram",
            Platform::Youtube => "youtube",
            Platform::Tiktok => "tiktok",
            Platform::Facebook => "facebook",
        }
    }
}

impl std::fmt::Display for Platform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Platform {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Platform::ALL
            .into_iter()
            .find(|p| p.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| CoreError::UnknownVariant {
                kind: "platform",
                value: s.to_string(),
            })
    }
}

/// Content category of a profile. Serialized with the dashboard's display label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "美妝")]
    Beauty,
    #[serde(rename = "時尚")]
    Fashion,
    #[serde(rename = "美食")]
    Food,
    #[serde(rename = "旅遊")]
    Travel,
    #[serde(rename = "科技")]
    Tech,
    #[serde(rename = "生活風格")]
    Lifestyle,
    #[serde(rename = "親子")]
    Parenting,
    #[serde(rename = "健身")]
    Fitness,
    #[serde(rename = "遊戲")]
    Gaming,
    #[serde(rename = "教育")]
    Education,
}

/// Direction the audience gender split leans for a category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenderSkew {
    Female,
    Male,
    Neutral,
}

impl Category {
    pub const ALL: [Category; 10] = [
        Category::Beauty,
        Category::Fashion,
        Category::Food,
        Category::Travel,
        Category::Tech,
        Category::Lifestyle,
        Category::Parenting,
        Category::Fitness,
        Category::Gaming,
        Category::Education,
    ];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Category::Beauty => "美妝",
            Category::Fashion => "時尚",
            Category::Food => "美食",
            Category::Travel => "旅遊",
            Category::Tech => "科技",
            Category::Lifestyle => "生活風格",
            Category::Parenting => "親子",
            Category::Fitness => "健身",
            Category::Gaming => "遊戲",
            Category::Education => "教育",
        }
    }

    #[must_use]
    pub fn slug(self) -> &'static str {
        match self {
            Category::Beauty => "beauty",
            Category::Fashion => "fashion",
            Category::Food => "food",
            Category::Travel => "travel",
            Category::Tech => "tech",
            Category::Lifestyle => "lifestyle",
            Category::Parenting => "parenting",
            Category::Fitness => "fitness",
            Category::Gaming => "gaming",
            Category::Education => "education",
        }
    }

    /// Additive adjustments applied to the raw age-bracket weights.
    #[must_use]
    pub fn age_adjustments(self) -> &'static [(&'static str, f64)] {
        match self {
            Category::Parenting => &[("25-34", 15.0), ("35-44", 10.0), ("18-24", -10.0)],
            Category::Gaming => &[("13-17", 10.0), ("18-24", 15.0), ("35-44", -10.0)],
            Category::Beauty | Category::Fashion => &[("18-24", 10.0), ("25-34", 5.0)],
            _ => &[],
        }
    }

    #[must_use]
    pub fn gender_skew(self) -> GenderSkew {
        match self {
            Category::Beauty | Category::Fashion | Category::Parenting => GenderSkew::Female,
            Category::Gaming | Category::Tech | Category::Fitness => GenderSkew::Male,
            _ => GenderSkew::Neutral,
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Accepts either the display label (`美食`) or the ASCII slug (`food`).
impl FromStr for Category {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        Category::ALL
            .into_iter()
            .find(|c| c.label() == needle || c.slug().eq_ignore_ascii_case(needle))
            .ok_or_else(|| CoreError::UnknownVariant {
                kind: "category",
                value: s.to_string(),
            })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CampaignStatus {
    Planning,
    Active,
    Completed,
}

impl CampaignStatus {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            CampaignStatus::Planning => "planning",
            CampaignStatus::Active => "active",
            CampaignStatus::Completed => "completed",
        }
    }
}

impl std::fmt::Display for CampaignStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CampaignStatus {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "planning" => Ok(CampaignStatus::Planning),
            "active" => Ok(CampaignStatus::Active),
            "completed" => Ok(CampaignStatus::Completed),
            _ => Err(CoreError::UnknownVariant {
                kind: "campaign status",
                value: s.to_string(),
            }),
        }
    }
}

/// Campaign statuses are assigned by cycling through this pattern.
pub const STATUS_PATTERN: [CampaignStatus; 6] = [
    CampaignStatus::Completed,
    CampaignStatus::Completed,
    CampaignStatus::Completed,
    CampaignStatus::Active,
    CampaignStatus::Active,
    CampaignStatus::Planning,
];

pub const KOL_NAMES: &[&str] = &[
    "小安 AnnieLife",
    "阿滴英文",
    "千千進食中",
    "古娃娃WawaKu",
    "這群人TGOP",
    "蔡阿嘎",
    "理科太太",
    "館長成吉思汗",
    "HowHow",
    "黃阿瑪的後宮生活",
    "Joe是要對決",
    "欸你這週要幹嘛",
    "志祺七七",
    "啾啾鞋",
    "老高與小茉",
    "HOOK",
    "Joeman",
    "上班不要看",
    "反骨男孩",
    "小玉",
    "美食水水Mia",
    "穿搭日記Amber",
    "科技宅Eric",
    "旅行者Luna",
    "健身教練Max",
    "美妝達人Coco",
    "生活家居Nina",
    "親子日常Amy",
];

/// Tone tags mixed with the category labels when tagging a profile.
pub const STYLE_TAGS: &[&str] = &["幽默", "專業", "親民", "高質感", "創意"];

pub const BRAND_FIT_TAGS: &[&str] = &[
    "年輕族群",
    "高消費力",
    "女性市場",
    "男性市場",
    "家庭取向",
    "都會風格",
    "環保意識",
    "科技愛好者",
    "美食饕客",
    "運動健身",
    "時尚潮流",
    "質感生活",
];

#[derive(Debug, Clone, Copy)]
pub struct BrandEntry {
    pub name: &'static str,
    pub logo: &'static str,
    pub industry: &'static str,
}

pub const BRANDS: &[BrandEntry] = &[
    BrandEntry {
        name: "台灣大哥大",
        logo: "🔵",
        industry: "電信",
    },
    BrandEntry {
        name: "全家便利商店",
        logo: "🟢",
        industry: "零售",
    },
    BrandEntry {
        name: "蝦皮購物",
        logo: "🟠",
        industry: "電商",
    },
    BrandEntry {
        name: "foodpanda",
        logo: "🩷",
        industry: "外送",
    },
    BrandEntry {
        name: "ASUS 華碩",
        logo: "🔷",
        industry: "科技",
    },
    BrandEntry {
        name: "統一超商",
        logo: "🔴",
        industry: "零售",
    },
    BrandEntry {
        name: "Gogoro",
        logo: "🟡",
        industry: "交通",
    },
    BrandEntry {
        name: "momo購物網",
        logo: "🩵",
        industry: "電商",
    },
];

pub const CAMPAIGN_OBJECTIVES: &[&str] = &[
    "品牌曝光",
    "產品推廣",
    "導購轉換",
    "品牌形象",
    "新品上市",
    "節慶活動",
    "會員招募",
    "App下載",
];

pub const CAMPAIGN_SEASONS: &[&str] = &["春季", "夏季", "秋季", "冬季", "年度", "週年慶"];

pub const TARGET_AUDIENCES: &[&str] = &[
    "18-35歲都會女性",
    "25-45歲科技愛好者",
    "全年齡家庭客群",
    "18-30歲年輕族群",
];

pub const CONTENT_TYPES: &[&str] = &["Reels", "貼文", "限動", "影片"];

/// Age brackets with the uniform range their raw weight is drawn from.
pub const AGE_BRACKETS: &[(&str, f64, f64)] = &[
    ("13-17", 5.0, 15.0),
    ("18-24", 20.0, 35.0),
    ("25-34", 25.0, 40.0),
    ("35-44", 10.0, 25.0),
    ("45-54", 5.0, 15.0),
    ("55+", 2.0, 10.0),
];

/// Named cities with their share range; the remainder goes to [`OTHER_LOCATION`].
pub const CITY_SHARES: &[(&str, f64, f64)] = &[
    ("台北市", 20.0, 35.0),
    ("新北市", 15.0, 25.0),
    ("台中市", 10.0, 18.0),
    ("高雄市", 8.0, 15.0),
    ("桃園市", 6.0, 12.0),
];

pub const OTHER_LOCATION: &str = "其他";

pub const INTEREST_POOL: &[&str] = &[
    "購物",
    "美食",
    "旅遊",
    "運動",
    "電影",
    "音樂",
    "攝影",
    "閱讀",
    "遊戲",
    "投資理財",
    "寵物",
    "烹飪",
];

pub const BUZZ_KEYWORDS: &[&str] = &["品牌名稱", "產品關鍵字", "活動Hashtag", "代言人", "競品"];

/// Quoted price bracket by follower threshold, checked top-down with `followers > threshold`.
pub const PRICE_BRACKETS: &[(u64, &str)] = &[
    (1_000_000, "NT$ 150,000 - 500,000"),
    (500_000, "NT$ 80,000 - 150,000"),
    (100_000, "NT$ 30,000 - 80,000"),
    (50_000, "NT$ 10,000 - 30,000"),
];

pub const ENTRY_PRICE_BRACKET: &str = "NT$ 3,000 - 10,000";

#[must_use]
pub fn price_bracket(followers: u64) -> &'static str {
    PRICE_BRACKETS
        .iter()
        .find(|(threshold, _)| followers > *threshold)
        .map_or(ENTRY_PRICE_BRACKET, |(_, label)| label)
}
