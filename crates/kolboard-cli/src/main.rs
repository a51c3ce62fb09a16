use clap::builder::RangedU64ValueParser;
use clap::{Parser, ValueEnum};
use kolboard_core::query::{self, ProfileFilter, SortKey, SortOrder};
use kolboard_core::{insights, stories, Dataset, GenerationSettings};
use serde_json::{json, Value};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "kolboard-cli")]
#[command(about = "Generate a KOL analytics dataset and print one view of it as JSON")]
struct Cli {
    /// Seed for reproducible output; falls back to `KOLBOARD_SEED`, then the OS.
    #[arg(long)]
    seed: Option<u64>,

    #[arg(long, value_parser = RangedU64ValueParser::<usize>::new().range(1..))]
    profiles: Option<usize>,

    #[arg(long)]
    campaigns: Option<usize>,

    /// Days of buzz history per keyword.
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
    days: Option<u32>,

    #[arg(value_enum)]
    view: View,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum View {
    Overview,
    Kols,
    Campaigns,
    Performance,
    Audience,
    Trends,
    Insights,
    Stories,
}

impl Cli {
    fn settings(&self, base: GenerationSettings) -> GenerationSettings {
        GenerationSettings {
            seed: self.seed.or(base.seed),
            profile_count: self.profiles.unwrap_or(base.profile_count),
            campaign_count: self.campaigns.unwrap_or(base.campaign_count),
            buzz_days: self.days.unwrap_or(base.buzz_days),
        }
    }
}

fn render(dataset: &Dataset, view: View) -> serde_json::Result<Value> {
    match view {
        View::Overview => serde_json::to_value(insights::dashboard_overview(dataset)),
        View::Kols => {
            let listing = query::list_profiles(
                dataset,
                &ProfileFilter::default(),
                SortKey::default(),
                SortOrder::default(),
                usize::MAX,
            );
            Ok(json!({ "total": listing.total, "kols": listing.items }))
        }
        View::Campaigns => serde_json::to_value(dataset.campaigns()),
        View::Performance => serde_json::to_value(dataset.performances()),
        View::Audience => {
            let audiences: Vec<_> = dataset
                .profiles()
                .iter()
                .filter_map(|p| dataset.audience(&p.id))
                .collect();
            serde_json::to_value(audiences)
        }
        View::Trends => Ok(json!({
            "trends": dataset.buzz_trends(),
            "keywords": query::buzz_keywords(dataset),
        })),
        View::Insights => Ok(json!({
            "platform_distribution": insights::platform_distribution(dataset.profiles()),
            "category_insights": insights::category_insights(dataset.profiles()),
        })),
        View::Stories => serde_json::to_value(stories::data_stories(dataset)),
    }
}

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = kolboard_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let settings = cli.settings(config.generation_settings());
    tracing::info!(view = ?cli.view, seed = ?settings.seed, "generating dataset");

    let dataset = Dataset::generate(&settings);
    let output = render(&dataset, cli.view)?;
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}
