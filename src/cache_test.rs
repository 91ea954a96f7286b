use std::time::{Duration, Instant};

use serde_json::json;

use super::*;
use crate::outcome::PanelError;

fn success() -> CachedOutcome {
    CachedOutcome::Success(Payload { tree: json!({"n": 1}), items: vec![json!({"n": 1})] })
}

#[test]
fn fresh_entry_is_returned() {
    let cache = ResultCache::new(Duration::from_secs(60));
    let now = Instant::now();

    cache.insert_at("k".into(), success(), now);
    assert!(cache.get_at("k", now + Duration::from_secs(59)).is_some());
}

#[test]
fn expired_entry_is_dropped() {
    let cache = ResultCache::new(Duration::from_secs(60));
    let now = Instant::now();

    cache.insert_at("k".into(), success(), now);
    assert!(cache.get_at("k", now + Duration::from_secs(60)).is_none());
    // The expired entry was removed, not just skipped.
    assert!(cache.get_at("k", now).is_none());
}

#[test]
fn empty_outcome_is_cacheable() {
    let cache = ResultCache::new(Duration::from_secs(60));
    let now = Instant::now();

    cache.insert_at("k".into(), CachedOutcome::Empty, now);
    assert!(matches!(cache.get_at("k", now), Some(CachedOutcome::Empty)));
}

#[test]
fn failures_are_not_cacheable() {
    let failure = ApiResult::Failure(PanelError::Network("down".into()));
    assert!(CachedOutcome::from_result(&failure).is_none());

    assert!(CachedOutcome::from_result(&ApiResult::Empty).is_some());
}

#[test]
fn round_trips_back_to_api_result() {
    let restored: ApiResult = success().into();
    match restored {
        ApiResult::Success(payload) => assert_eq!(payload.items.len(), 1),
        _ => panic!("expected success"),
    }
}
