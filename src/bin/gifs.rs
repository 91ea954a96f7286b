//! Animated-image search demo — GIF search against the Giphy API, rendered
//! as a four-column grid.

use std::process::ExitCode;
use std::sync::Arc;
use std::time::Duration;

use clap::Parser;
use demopanel::endpoint::{AuthRule, EndpointSpec, ParamKind, ParamSpec, QueryState};
use demopanel::fetch::HttpFetch;
use demopanel::mapping::{DisplayMapping, FieldMapping, WidgetKind};
use demopanel::panel::ApiPanel;
use demopanel::render::emit;
use demopanel::secret;

const SPEC: EndpointSpec = EndpointSpec {
    name: "gifs",
    base_url: "https://api.giphy.com/v1/gifs/search",
    params: &[
        ParamSpec { name: "q", kind: ParamKind::Text, required: true, default: None },
        ParamSpec { name: "limit", kind: ParamKind::Range { min: 1, max: 25 }, required: true, default: Some("8") },
        ParamSpec {
            name: "rating",
            kind: ParamKind::Choice { allowed: &["g", "pg", "pg-13", "r"] },
            required: true,
            default: Some("g"),
        },
    ],
    fixed: &[],
    auth: AuthRule::Query { param: "api_key" },
    items_path: Some("data"),
};

const MAPPING: DisplayMapping = DisplayMapping {
    columns: 4,
    fields: &[
        FieldMapping::new("Title", "title", WidgetKind::Text),
        FieldMapping::new("", "images.fixed_height.url", WidgetKind::Image),
        FieldMapping::new("", "url", WidgetKind::Link { text: "Open" }),
    ],
};

const CACHE_TTL: Duration = Duration::from_secs(600);

#[derive(Parser, Debug)]
#[command(name = "gifs", about = "Search animated images")]
struct Args {
    /// Search text.
    query: String,

    /// Number of results (1-25).
    #[arg(long, default_value_t = 8)]
    limit: i64,

    /// Content rating ceiling.
    #[arg(long, default_value = "g")]
    rating: String,

    /// Emit the outcome as a JSON document instead of text.
    #[arg(long)]
    json: bool,
}

#[tokio::main]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();
    let args = Args::parse();

    let key = secret::require("GIPHY_API_KEY");
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
        .with("q", args.query.as_str())
        .with("limit", args.limit)
        .with("rating", args.rating.as_str());

    let result = panel.submit(&state).await;
    emit(&result, &MAPPING, args.json);

    if result.is_failure() { ExitCode::FAILURE } else { ExitCode::SUCCESS }
}
