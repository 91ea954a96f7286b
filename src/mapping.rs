//! Display mappings — projecting a JSON payload onto widgets.
//!
//! DESIGN
//! ======
//! A [`DisplayMapping`] is an ordered list of (JSON path → widget) rules
//! plus a grid column count. Projection tolerates absent or malformed
//! optional fields by omitting the widget rather than failing, which is how
//! the demo apps skip a missing poster or thumbnail. Items cycle through
//! grid columns left to right: item `i` lands in column `i % columns`.

use std::time::Duration;

use serde::Serialize;
use serde_json::Value;

use crate::format;

// =============================================================================
// PATH LOOKUP
// =============================================================================

/// Walk a dotted path through a JSON tree. Numeric segments index arrays;
/// anything that does not resolve yields `None`.
#[must_use]
pub fn lookup<'a>(root: &'a Value, path: &str) -> Option<&'a Value> {
    let mut current = root;
    for segment in path.split('.') {
        current = match segment.parse::<usize>() {
            Ok(index) => current.get(index)?,
            Err(_) => current.get(segment)?,
        };
    }
    Some(current)
}

// =============================================================================
// MAPPING DECLARATIONS
// =============================================================================

/// Numeric or text treatment applied before display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueFormat {
    Plain,
    /// Thousands separators: 1000000 → "1,000,000".
    Count,
    /// One decimal place: 7.66 → "7.7".
    Rating,
    /// Whole seconds → `H:MM:SS` / `M:SS`.
    DurationSecs,
    /// ISO-8601 span (`PT2M30S`) → `H:MM:SS` / `M:SS`.
    DurationIso8601,
}

/// Widget a field projects into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WidgetKind {
    Text,
    Image,
    /// Hyperlink button; `text` is the visible label.
    Link { text: &'static str },
    Metric { format: ValueFormat },
}

/// One projection rule: JSON path → widget.
#[derive(Debug, Clone, Copy)]
pub struct FieldMapping {
    pub label: &'static str,
    pub path: &'static str,
    pub widget: WidgetKind,
    /// Prepended to extracted image and link values (CDN roots, watch-URL
    /// bases). Empty for fields that are already absolute.
    pub prefix: &'static str,
}

impl FieldMapping {
    #[must_use]
    pub const fn new(label: &'static str, path: &'static str, widget: WidgetKind) -> Self {
        Self { label, path, widget, prefix: "" }
    }

    #[must_use]
    pub const fn with_prefix(mut self, prefix: &'static str) -> Self {
        self.prefix = prefix;
        self
    }
}

/// Ordered projection rules plus grid shape. `columns` must be at least 1.
#[derive(Debug, Clone, Copy)]
pub struct DisplayMapping {
    pub columns: usize,
    pub fields: &'static [FieldMapping],
}

// =============================================================================
// PROJECTION
// =============================================================================

/// A rendered widget value, ready for a sink.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ProjectedWidget {
    Text { label: &'static str, value: String },
    Image { url: String },
    Link { text: &'static str, url: String },
    Metric { label: &'static str, value: String },
}

/// One payload item projected through the mapping, with its grid position.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProjectedItem {
    pub index: usize,
    pub column: usize,
    pub widgets: Vec<ProjectedWidget>,
}

impl DisplayMapping {
    /// Grid column for item `index`, cycling left to right.
    #[must_use]
    pub fn column_of(&self, index: usize) -> usize {
        index % self.columns.max(1)
    }

    /// Project payload items onto widgets in declaration order. Fields
    /// absent from an item are omitted; a malformed value never aborts the
    /// projection.
    #[must_use]
    pub fn project(&self, items: &[Value]) -> Vec<ProjectedItem> {
        items
            .iter()
            .enumerate()
            .map(|(index, item)| ProjectedItem {
                index,
                column: self.column_of(index),
                widgets: self.fields.iter().filter_map(|f| f.apply(item)).collect(),
            })
            .collect()
    }
}

impl FieldMapping {
    fn apply(&self, item: &Value) -> Option<ProjectedWidget> {
        let value = lookup(item, self.path)?;
        if value.is_null() {
            return None;
        }

        match self.widget {
            WidgetKind::Text => Some(ProjectedWidget::Text { label: self.label, value: display_string(value)? }),
            WidgetKind::Image => Some(ProjectedWidget::Image { url: self.prefixed(value.as_str()?) }),
            WidgetKind::Link { text } => Some(ProjectedWidget::Link { text, url: self.prefixed(&display_string(value)?) }),
            WidgetKind::Metric { format } => {
                Some(ProjectedWidget::Metric { label: self.label, value: format_value(format, value)? })
            }
        }
    }

    fn prefixed(&self, raw: &str) -> String {
        format!("{}{raw}", self.prefix)
    }
}

fn display_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

fn format_value(format: ValueFormat, value: &Value) -> Option<String> {
    match format {
        ValueFormat::Plain => display_string(value),
        ValueFormat::Count => Some(format::count(coerce_u64(value)?)),
        ValueFormat::Rating => Some(format::rating(value.as_f64()?)),
        ValueFormat::DurationSecs => Some(format::duration(Duration::from_secs(coerce_u64(value)?))),
        ValueFormat::DurationIso8601 => {
            let span = format::parse_iso8601_duration(value.as_str()?)?;
            Some(format::duration(span))
        }
    }
}

/// APIs disagree on whether counts are JSON numbers or strings; accept both.
fn coerce_u64(value: &Value) -> Option<u64> {
    match value {
        Value::Number(n) => n.as_u64(),
        Value::String(s) => s.parse().ok(),
        _ => None,
    }
}

#[cfg(test)]
#[path = "mapping_test.rs"]
mod tests;
