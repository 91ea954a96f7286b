//! Trending-videos demo — the most-popular chart from the YouTube Data API,
//! rendered as a three-column grid of title, thumbnail, channel, duration,
//! view count, and watch link.

use std::process::ExitCode;
use std::sync::Arc;
use std::time::Duration;

use clap::Parser;
use demopanel::endpoint::{AuthRule, EndpointSpec, ParamKind, ParamSpec, QueryState};
use demopanel::fetch::HttpFetch;
use demopanel::mapping::{DisplayMapping, FieldMapping, ValueFormat, WidgetKind};
use demopanel::panel::ApiPanel;
use demopanel::render::emit;
use demopanel::secret;

const SPEC: EndpointSpec = EndpointSpec {
    name: "trending",
    base_url: "https://www.googleapis.com/youtube/v3/videos",
    params: &[
        ParamSpec {
            name: "regionCode",
            kind: ParamKind::Choice { allowed: &["US", "GB", "DE", "FR", "JP", "KR", "BR", "IN"] },
            required: true,
            default: Some("US"),
        },
        ParamSpec {
            name: "maxResults",
            kind: ParamKind::Range { min: 1, max: 50 },
            required: true,
            default: Some("25"),
        },
    ],
    fixed: &[("part", "snippet,contentDetails,statistics"), ("chart", "mostPopular")],
    auth: AuthRule::Query { param: "key" },
    items_path: Some("items"),
};

const MAPPING: DisplayMapping = DisplayMapping {
    columns: 3,
    fields: &[
        FieldMapping::new("Title", "snippet.title", WidgetKind::Text),
        FieldMapping::new("", "snippet.thumbnails.medium.url", WidgetKind::Image),
        FieldMapping::new("By", "snippet.channelTitle", WidgetKind::Text),
        FieldMapping::new("Duration", "contentDetails.duration", WidgetKind::Metric { format: ValueFormat::DurationIso8601 }),
        FieldMapping::new("Views", "statistics.viewCount", WidgetKind::Metric { format: ValueFormat::Count }),
        FieldMapping::new("", "id", WidgetKind::Link { text: "Watch" }).with_prefix("https://www.youtube.com/watch?v="),
    ],
};

// Upstream recomputes the chart roughly hourly.
const CACHE_TTL: Duration = Duration::from_secs(3600);

#[derive(Parser, Debug)]
#[command(name = "trending", about = "Today's top trending videos")]
struct Args {
    /// Two-letter region code for the chart.
    #[arg(long, env = "DEMOPANEL_REGION", default_value = "US")]
    region: String,

    /// Number of videos to fetch (1-50).
    #[arg(long, default_value_t = 25)]
    max_results: i64,

    /// Emit the outcome as a JSON document instead of text.
    #[arg(long)]
    json: bool,
}

#[tokio::main]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();
    let args = Args::parse();

    let key = secret::require("YOUTUBE_API_KEY");
    let fetcher = match HttpFetch::new() {
        Ok(fetcher) => Arc::new(fetcher),
        Err(error) => {
            tracing::error!(code = error.code(), "{error}. {}", error.hint());
            return ExitCode::FAILURE;
        }
    };

    let panel = ApiPanel::new(SPEC, fetcher)
        .with_secret(key.value())
        .with_cache(CACHE_TTL);

    let state = QueryState::new()
        .with("regionCode", args.region.as_str())
        .with("maxResults", args.max_results);

    let result = panel.submit(&state).await;
    emit(&result, &MAPPING, args.json);

    if result.is_failure() { ExitCode::FAILURE } else { ExitCode::SUCCESS }
}
