//! demopanel — parameterized external-API-backed display panels.
//!
//! ARCHITECTURE
//! ============
//! Every demo app in this repository is the same three-step flow: collect
//! user parameters, issue one HTTP GET against a public API, render the
//! classified outcome. The flow is factored into declarative pieces:
//!
//! - [`endpoint::EndpointSpec`] describes the remote endpoint, its
//!   parameters, and the credential injection rule.
//! - [`panel::ApiPanel`] validates, fetches (through the [`fetch::Fetch`]
//!   seam), optionally memoizes, and classifies every submission into an
//!   [`outcome::ApiResult`].
//! - [`mapping::DisplayMapping`] projects a successful payload onto display
//!   widgets, which [`render::render`] lays out through a
//!   [`render::WidgetSink`].
//!
//! The demo binaries under `src/bin/` instantiate one panel each; none of
//! them contain logic beyond their endpoint and mapping declarations.

pub mod cache;
pub mod endpoint;
pub mod fetch;
pub mod format;
pub mod mapping;
pub mod outcome;
pub mod panel;
pub mod render;
pub mod secret;

pub use endpoint::{AuthRule, EndpointSpec, ParamKind, ParamSpec, ParamValue, QueryState};
pub use mapping::{DisplayMapping, FieldMapping, ValueFormat, WidgetKind};
pub use outcome::{ApiResult, PanelError, Payload};
pub use panel::ApiPanel;
