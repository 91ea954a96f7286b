//! Rendering — submission outcome → widget sink.
//!
//! DESIGN
//! ======
//! The display surface is an opaque collaborator behind [`WidgetSink`];
//! `render` owns only the outcome dispatch and grid placement. The library
//! ships two sinks: a plain-terminal sink and a JSON sink for scripted use.

use serde::Serialize;

use crate::mapping::{DisplayMapping, ProjectedWidget};
use crate::outcome::ApiResult;

// =============================================================================
// SINK TRAIT
// =============================================================================

/// Output surface for one rendered submission.
pub trait WidgetSink {
    /// Begin item `index` in grid column `column`.
    fn begin_item(&mut self, index: usize, column: usize);

    /// Emit one widget of the current item.
    fn widget(&mut self, widget: &ProjectedWidget);

    /// Neutral no-results notice.
    fn notice(&mut self, message: &str);

    /// Failure message plus its remediation hint.
    fn failure(&mut self, message: &str, hint: &str);
}

/// Render one submission outcome through the mapping onto the sink.
pub fn render(result: &ApiResult, mapping: &DisplayMapping, sink: &mut dyn WidgetSink) {
    match result {
        ApiResult::Empty => sink.notice("No results found."),
        ApiResult::Failure(error) => sink.failure(&error.to_string(), error.hint()),
        ApiResult::Success(payload) => {
            for item in mapping.project(&payload.items) {
                sink.begin_item(item.index, item.column);
                for widget in &item.widgets {
                    sink.widget(widget);
                }
            }
        }
    }
}

/// Render to the terminal, or as a JSON document when `json` is set.
/// Shared tail of every demo binary.
pub fn emit(result: &ApiResult, mapping: &DisplayMapping, json: bool) {
    if json {
        let mut sink = JsonSink::default();
        render(result, mapping, &mut sink);
        println!("{}", sink.into_string());
    } else {
        render(result, mapping, &mut TerminalSink);
    }
}

// =============================================================================
// TERMINAL SINK
// =============================================================================

/// Plain-terminal sink used by the demo binaries.
#[derive(Debug, Default)]
pub struct TerminalSink;

impl WidgetSink for TerminalSink {
    fn begin_item(&mut self, index: usize, column: usize) {
        if index > 0 {
            println!();
        }
        println!("── item {} · column {column} ──", index + 1);
    }

    fn widget(&mut self, widget: &ProjectedWidget) {
        match widget {
            ProjectedWidget::Text { label, value } | ProjectedWidget::Metric { label, value } => {
                if label.is_empty() {
                    println!("{value}");
                } else {
                    println!("{label}: {value}");
                }
            }
            ProjectedWidget::Image { url } => println!("[image] {url}"),
            ProjectedWidget::Link { text, url } => println!("[{text}] {url}"),
        }
    }

    fn notice(&mut self, message: &str) {
        println!("{message}");
    }

    fn failure(&mut self, message: &str, hint: &str) {
        eprintln!("error: {message}");
        eprintln!("{hint}");
    }
}

// =============================================================================
// JSON SINK
// =============================================================================

#[derive(Debug, Default, Serialize, PartialEq, Eq, Clone, Copy)]
#[serde(rename_all = "snake_case")]
enum JsonStatus {
    #[default]
    Success,
    Empty,
    Failure,
}

#[derive(Debug, Serialize)]
struct JsonItem {
    column: usize,
    widgets: Vec<ProjectedWidget>,
}

#[derive(Debug, Default, Serialize)]
struct JsonDoc {
    status: JsonStatus,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    items: Vec<JsonItem>,
    #[serde(skip_serializing_if = "Option::is_none")]
    message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    hint: Option<String>,
}

/// Sink that accumulates the outcome into a JSON document for `--json`
/// output.
#[derive(Debug, Default)]
pub struct JsonSink {
    doc: JsonDoc,
}

impl JsonSink {
    /// Pretty-printed document; call after `render`.
    #[must_use]
    pub fn into_string(self) -> String {
        serde_json::to_string_pretty(&self.doc).unwrap_or_else(|_| "{}".to_owned())
    }
}

impl WidgetSink for JsonSink {
    fn begin_item(&mut self, _index: usize, column: usize) {
        self.doc.items.push(JsonItem { column, widgets: Vec::new() });
    }

    fn widget(&mut self, widget: &ProjectedWidget) {
        if let Some(item) = self.doc.items.last_mut() {
            item.widgets.push(widget.clone());
        }
    }

    fn notice(&mut self, message: &str) {
        self.doc.status = JsonStatus::Empty;
        self.doc.message = Some(message.to_owned());
    }

    fn failure(&mut self, message: &str, hint: &str) {
        self.doc.status = JsonStatus::Failure;
        self.doc.message = Some(message.to_owned());
        self.doc.hint = Some(hint.to_owned());
    }
}

#[cfg(test)]
#[path = "render_test.rs"]
mod tests;
