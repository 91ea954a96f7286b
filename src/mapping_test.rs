use serde_json::json;

use super::*;

const FIELDS: &[FieldMapping] = &[
    FieldMapping::new("Title", "snippet.title", WidgetKind::Text),
    FieldMapping::new("", "snippet.thumb.url", WidgetKind::Image),
    FieldMapping::new("Views", "stats.views", WidgetKind::Metric { format: ValueFormat::Count }),
    FieldMapping::new("Duration", "details.duration", WidgetKind::Metric { format: ValueFormat::DurationIso8601 }),
    FieldMapping::new("", "id", WidgetKind::Link { text: "Watch" }).with_prefix("https://example.test/watch?v="),
];

const MAPPING: DisplayMapping = DisplayMapping { columns: 3, fields: FIELDS };

fn video(id: &str) -> serde_json::Value {
    json!({
        "id": id,
        "snippet": { "title": "A video", "thumb": { "url": "https://img.example.test/1.jpg" } },
        "stats": { "views": "1000000" },
        "details": { "duration": "PT2M30S" },
    })
}

#[test]
fn lookup_walks_nested_objects() {
    let item = video("v1");
    assert_eq!(lookup(&item, "snippet.title").and_then(Value::as_str), Some("A video"));
    assert!(lookup(&item, "snippet.missing").is_none());
    assert!(lookup(&item, "snippet.title.deeper").is_none());
}

#[test]
fn lookup_indexes_arrays_with_numeric_segments() {
    let tree = json!({ "weather": [ { "description": "light rain" } ] });
    assert_eq!(
        lookup(&tree, "weather.0.description").and_then(Value::as_str),
        Some("light rain")
    );
    assert!(lookup(&tree, "weather.1.description").is_none());
    // A numeric segment against a non-array resolves to nothing.
    assert!(lookup(&tree, "weather.0.description.0").is_none());
}

#[test]
fn project_emits_widgets_in_declaration_order() {
    let items = vec![video("v1")];
    let projected = MAPPING.project(&items);

    assert_eq!(projected.len(), 1);
    let widgets = &projected[0].widgets;
    assert_eq!(
        widgets[0],
        ProjectedWidget::Text { label: "Title", value: "A video".into() }
    );
    assert_eq!(
        widgets[1],
        ProjectedWidget::Image { url: "https://img.example.test/1.jpg".into() }
    );
    assert_eq!(
        widgets[2],
        ProjectedWidget::Metric { label: "Views", value: "1,000,000".into() }
    );
    assert_eq!(
        widgets[3],
        ProjectedWidget::Metric { label: "Duration", value: "2:30".into() }
    );
    assert_eq!(
        widgets[4],
        ProjectedWidget::Link { text: "Watch", url: "https://example.test/watch?v=v1".into() }
    );
}

#[test]
fn missing_optional_fields_are_omitted_not_errors() {
    let mut item = video("v1");
    item["snippet"].as_object_mut().unwrap().remove("thumb");
    item["stats"] = json!({ "views": null });

    let projected = MAPPING.project(&[item]);
    let widgets = &projected[0].widgets;

    // Title, duration, and link survive; image and views are omitted.
    assert_eq!(widgets.len(), 3);
    assert!(widgets.iter().all(|w| !matches!(w, ProjectedWidget::Image { .. })));
}

#[test]
fn malformed_values_are_omitted() {
    let mut item = video("v1");
    item["details"]["duration"] = json!("not-a-duration");
    item["stats"]["views"] = json!({ "nested": true });

    let projected = MAPPING.project(&[item]);
    assert!(
        projected[0]
            .widgets
            .iter()
            .all(|w| !matches!(w, ProjectedWidget::Metric { .. }))
    );
}

#[test]
fn grid_cycles_columns_seven_items_three_columns() {
    let items: Vec<Value> = (0..7).map(|i| video(&format!("v{i}"))).collect();
    let projected = MAPPING.project(&items);

    let per_column = (0..3)
        .map(|c| projected.iter().filter(|item| item.column == c).count())
        .collect::<Vec<_>>();
    assert_eq!(per_column, vec![3, 2, 2]);

    assert_eq!(projected[0].column, 0);
    assert_eq!(projected[3].column, 0);
    assert_eq!(projected[5].column, 2);
}

#[test]
fn single_column_mapping_never_cycles() {
    let single = DisplayMapping { columns: 1, fields: FIELDS };
    let items: Vec<Value> = (0..3).map(|i| video(&format!("v{i}"))).collect();
    assert!(single.project(&items).iter().all(|item| item.column == 0));
}

#[test]
fn numeric_ids_still_build_links() {
    const FIELDS: &[FieldMapping] =
        &[FieldMapping::new("", "id", WidgetKind::Link { text: "Open" }).with_prefix("https://example.test/movie/")];
    let mapping = DisplayMapping { columns: 1, fields: FIELDS };

    let projected = mapping.project(&[json!({ "id": 603 })]);
    assert_eq!(
        projected[0].widgets[0],
        ProjectedWidget::Link { text: "Open", url: "https://example.test/movie/603".into() }
    );
}
