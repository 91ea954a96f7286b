//! Movie-search demo — title search against the TMDB API, with poster,
//! release date, and rating per result.

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
    name: "movies",
    base_url: "https://api.themoviedb.org/3/search/movie",
    params: &[
        ParamSpec { name: "query", kind: ParamKind::Text, required: true, default: None },
        ParamSpec { name: "page", kind: ParamKind::Range { min: 1, max: 500 }, required: true, default: Some("1") },
    ],
    fixed: &[("include_adult", "false")],
    auth: AuthRule::Query { param: "api_key" },
    items_path: Some("results"),
};

// Posters are relative CDN paths; some results carry none and the widget is
// simply omitted for those.
const MAPPING: DisplayMapping = DisplayMapping {
    columns: 3,
    fields: &[
        FieldMapping::new("Title", "title", WidgetKind::Text),
        FieldMapping::new("", "poster_path", WidgetKind::Image).with_prefix("https://image.tmdb.org/t/p/w342"),
        FieldMapping::new("Released", "release_date", WidgetKind::Text),
        FieldMapping::new("Rating", "vote_average", WidgetKind::Metric { format: ValueFormat::Rating }),
        FieldMapping::new("Votes", "vote_count", WidgetKind::Metric { format: ValueFormat::Count }),
        FieldMapping::new("", "id", WidgetKind::Link { text: "Details" }).with_prefix("https://www.themoviedb.org/movie/"),
    ],
};

const CACHE_TTL: Duration = Duration::from_secs(600);

#[derive(Parser, Debug)]
#[command(name = "movies", about = "Search movies by title")]
struct Args {
    /// Title text to search for.
    query: String,

    /// Result page (1-500).
    #[arg(long, default_value_t = 1)]
    page: i64,

    /// Emit the outcome as a JSON document instead of text.
    #[arg(long)]
    json: bool,
}

#[tokio::main]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();
    let args = Args::parse();

    let key = secret::require("TMDB_API_KEY");
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
        .with("query", args.query.as_str())
        .with("page", args.page);

    let result = panel.submit(&state).await;
    emit(&result, &MAPPING, args.json);

    if result.is_failure() { ExitCode::FAILURE } else { ExitCode::SUCCESS }
}
