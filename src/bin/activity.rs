//! Activity-suggestion demo — a random activity filtered by category and
//! participant count. The suggestion itself is random, so results are not
//! memoized.

use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;
use demopanel::endpoint::{AuthRule, EndpointSpec, ParamKind, ParamSpec, QueryState};
use demopanel::fetch::HttpFetch;
use demopanel::mapping::{DisplayMapping, FieldMapping, ValueFormat, WidgetKind};
use demopanel::panel::ApiPanel;
use demopanel::render::emit;

const SPEC: EndpointSpec = EndpointSpec {
    name: "activity",
    base_url: "https://bored.api.lewagon.com/api/activity",
    params: &[
        ParamSpec {
            name: "type",
            kind: ParamKind::Choice {
                allowed: &[
                    "education",
                    "recreational",
                    "social",
                    "diy",
                    "charity",
                    "cooking",
                    "relaxation",
                    "music",
                    "busywork",
                ],
            },
            required: false,
            default: None,
        },
        ParamSpec {
            name: "participants",
            kind: ParamKind::Range { min: 1, max: 8 },
            required: false,
            default: None,
        },
    ],
    fixed: &[],
    auth: AuthRule::None,
    items_path: None,
};

const MAPPING: DisplayMapping = DisplayMapping {
    columns: 1,
    fields: &[
        FieldMapping::new("Try this", "activity", WidgetKind::Text),
        FieldMapping::new("Category", "type", WidgetKind::Text),
        FieldMapping::new("Participants", "participants", WidgetKind::Metric { format: ValueFormat::Plain }),
        FieldMapping::new("Accessibility", "accessibility", WidgetKind::Metric { format: ValueFormat::Plain }),
    ],
};

#[derive(Parser, Debug)]
#[command(name = "activity", about = "Suggest something to do")]
struct Args {
    /// Activity category to filter by.
    #[arg(long)]
    kind: Option<String>,

    /// Number of participants (1-8).
    #[arg(long)]
    participants: Option<i64>,

    /// Emit the outcome as a JSON document instead of text.
    #[arg(long)]
    json: bool,
}

#[tokio::main]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();
    let args = Args::parse();

    let fetcher = match HttpFetch::new() {
        Ok(fetcher) => Arc::new(fetcher),
        Err(error) => {
            tracing::error!(code = error.code(), "{error}. {}", error.hint());
            return ExitCode::FAILURE;
        }
    };

    let panel = ApiPanel::new(SPEC, fetcher);

    let state = QueryState::new()
        .with_opt("type", args.kind)
        .with_opt("participants", args.participants);

    let result = panel.submit(&state).await;
    emit(&result, &MAPPING, args.json);

    if result.is_failure() { ExitCode::FAILURE } else { ExitCode::SUCCESS }
}
