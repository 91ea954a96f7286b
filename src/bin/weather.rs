//! Weather-lookup demo — current conditions by city name from the
//! OpenWeatherMap API. An unknown city comes back as HTTP 404 and renders
//! the not-found hint.

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
    name: "weather",
    base_url: "https://api.openweathermap.org/data/2.5/weather",
    params: &[
        ParamSpec { name: "q", kind: ParamKind::Text, required: true, default: None },
        ParamSpec {
            name: "units",
            kind: ParamKind::Choice { allowed: &["standard", "metric", "imperial"] },
            required: true,
            default: Some("metric"),
        },
    ],
    fixed: &[],
    auth: AuthRule::Query { param: "appid" },
    items_path: None,
};

const MAPPING: DisplayMapping = DisplayMapping {
    columns: 1,
    fields: &[
        FieldMapping::new("City", "name", WidgetKind::Text),
        FieldMapping::new("Conditions", "weather.0.description", WidgetKind::Text),
        FieldMapping::new("Temperature", "main.temp", WidgetKind::Metric { format: ValueFormat::Rating }),
        FieldMapping::new("Feels like", "main.feels_like", WidgetKind::Metric { format: ValueFormat::Rating }),
        FieldMapping::new("Humidity", "main.humidity", WidgetKind::Metric { format: ValueFormat::Plain }),
        FieldMapping::new("Wind", "wind.speed", WidgetKind::Metric { format: ValueFormat::Plain }),
    ],
};

// Conditions refresh on a ten-minute cadence upstream.
const CACHE_TTL: Duration = Duration::from_secs(600);

#[derive(Parser, Debug)]
#[command(name = "weather", about = "Current weather by city")]
struct Args {
    /// City name, optionally with a country code ("Seoul,KR").
    city: String,

    /// Unit system for temperatures and wind.
    #[arg(long, env = "DEMOPANEL_UNITS", default_value = "metric")]
    units: String,

    /// Emit the outcome as a JSON document instead of text.
    #[arg(long)]
    json: bool,
}

#[tokio::main]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();
    let args = Args::parse();

    let key = secret::require("OPENWEATHER_API_KEY");
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
        .with("q", args.city.as_str())
        .with("units", args.units.as_str());

    let result = panel.submit(&state).await;
    emit(&result, &MAPPING, args.json);

    if result.is_failure() { ExitCode::FAILURE } else { ExitCode::SUCCESS }
}
