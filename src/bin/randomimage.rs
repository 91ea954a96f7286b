//! Random-image demo — one random dog picture per submission. No
//! parameters, no credential, and no memoization: every submission fetches
//! a fresh image.

use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;
use demopanel::endpoint::{AuthRule, EndpointSpec, QueryState};
use demopanel::fetch::HttpFetch;
use demopanel::mapping::{DisplayMapping, FieldMapping, WidgetKind};
use demopanel::panel::ApiPanel;
use demopanel::render::emit;

const SPEC: EndpointSpec = EndpointSpec {
    name: "randomimage",
    base_url: "https://dog.ceo/api/breeds/image/random",
    params: &[],
    fixed: &[],
    auth: AuthRule::None,
    items_path: None,
};

const MAPPING: DisplayMapping = DisplayMapping {
    columns: 1,
    fields: &[FieldMapping::new("", "message", WidgetKind::Image)],
};

#[derive(Parser, Debug)]
#[command(name = "randomimage", about = "Fetch a random dog image")]
struct Args {
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

    let result = panel.submit(&QueryState::new()).await;
    emit(&result, &MAPPING, args.json);

    if result.is_failure() { ExitCode::FAILURE } else { ExitCode::SUCCESS }
}
