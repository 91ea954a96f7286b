use super::*;

const SPEC: EndpointSpec = EndpointSpec {
    name: "test",
    base_url: "https://api.example.test/v1/things/{id}",
    params: &[
        ParamSpec { name: "id", kind: ParamKind::Text, required: true, default: None },
        ParamSpec {
            name: "region",
            kind: ParamKind::Choice { allowed: &["US", "KR"] },
            required: true,
            default: Some("US"),
        },
        ParamSpec { name: "limit", kind: ParamKind::Range { min: 1, max: 50 }, required: true, default: Some("25") },
        ParamSpec { name: "tag", kind: ParamKind::Text, required: false, default: None },
    ],
    fixed: &[("part", "snippet")],
    auth: AuthRule::Query { param: "key" },
    items_path: Some("items"),
};

fn valid_state() -> QueryState {
    QueryState::new().with("id", "abc123")
}

#[test]
fn validate_accepts_defaults_for_missing_params() {
    assert!(SPEC.validate(&valid_state()).is_ok());
}

#[test]
fn validate_rejects_missing_required_without_default() {
    let err = SPEC.validate(&QueryState::new()).unwrap_err();
    assert_eq!(err.code(), "E_INVALID_INPUT");
    assert!(err.to_string().contains("`id`"));
}

#[test]
fn validate_rejects_unknown_parameter() {
    let state = valid_state().with("bogus", "x");
    let err = SPEC.validate(&state).unwrap_err();
    assert!(err.to_string().contains("unknown parameter `bogus`"));
}

#[test]
fn validate_rejects_choice_outside_allowed_set() {
    let state = valid_state().with("region", "XX");
    let err = SPEC.validate(&state).unwrap_err();
    assert!(err.to_string().contains("must be one of"));
}

#[test]
fn validate_rejects_range_out_of_bounds() {
    let state = valid_state().with("limit", 51);
    let err = SPEC.validate(&state).unwrap_err();
    assert!(err.to_string().contains("between 1 and 50"));

    let state = valid_state().with("limit", 0);
    assert!(SPEC.validate(&state).is_err());
}

#[test]
fn validate_accepts_numeric_strings_for_ranges() {
    let state = valid_state().with("limit", "10");
    assert!(SPEC.validate(&state).is_ok());

    let state = valid_state().with("limit", "ten");
    let err = SPEC.validate(&state).unwrap_err();
    assert!(err.to_string().contains("must be an integer"));
}

#[test]
fn normalized_merges_defaults_and_skips_absent_optionals() {
    let normalized = SPEC.normalized(&valid_state());
    assert_eq!(normalized.get("id").map(String::as_str), Some("abc123"));
    assert_eq!(normalized.get("region").map(String::as_str), Some("US"));
    assert_eq!(normalized.get("limit").map(String::as_str), Some("25"));
    assert!(!normalized.contains_key("tag"));
}

#[test]
fn explicit_default_and_omitted_share_a_cache_key() {
    let omitted = SPEC.normalized(&valid_state());
    let explicit = SPEC.normalized(&valid_state().with("region", "US").with("limit", 25));
    assert_eq!(SPEC.cache_key(&omitted), SPEC.cache_key(&explicit));
}

#[test]
fn cache_key_orders_parameters_stably() {
    let normalized = SPEC.normalized(&valid_state().with("tag", "t"));
    assert_eq!(SPEC.cache_key(&normalized), "test?id=abc123&limit=25&region=US&tag=t");
}

#[test]
fn request_parts_substitutes_path_and_builds_query() {
    let normalized = SPEC.normalized(&valid_state());
    let (url, query) = SPEC.request_parts(&normalized);

    assert_eq!(url, "https://api.example.test/v1/things/abc123");
    assert_eq!(query[0], ("part".to_owned(), "snippet".to_owned()));
    assert!(query.contains(&("region".to_owned(), "US".to_owned())));
    assert!(query.contains(&("limit".to_owned(), "25".to_owned())));
    // The path parameter is consumed, not repeated in the query.
    assert!(!query.iter().any(|(k, _)| k == "id"));
}

#[test]
fn with_opt_only_sets_present_values() {
    let state = QueryState::new()
        .with_opt("tag", Some("x"))
        .with_opt("region", None::<&str>);
    assert_eq!(state.get("tag"), Some(&ParamValue::Str("x".into())));
    assert!(state.get("region").is_none());
}
