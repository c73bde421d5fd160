//! Integration tests for the monkey service.
//!
//! These tests exercise the store and tracker together through the
//! `MonkeyService` surface, including concurrent callers.
//!
//! Tests CAN use `.unwrap()` and `.expect()` - this is allowed.

use monkey_core::{AccessTracker, CatalogError, CatalogStore, MonkeyService, SHIPPED_COUNT};
use std::collections::HashSet;
use std::sync::Arc;

// ============================================================================
// Lookup Tests
// ============================================================================

#[test]
fn test_every_record_resolves_to_itself() {
    let service = MonkeyService::shipped();

    for record in service.list_all() {
        let first = service.find_by_name(&record.name).expect("should resolve");
        assert_eq!(first, record);
        assert_eq!(service.access_count(&record.name), 1);

        let second = service.find_by_name(&record.name).expect("should resolve");
        assert_eq!(second, first);
        assert_eq!(service.access_count(&record.name), 2);
    }
}

#[test]
fn test_blank_names_are_not_found() {
    let service = MonkeyService::shipped();

    for name in ["", "   ", "\t\n"] {
        assert!(matches!(
            service.find_by_name(name),
            Err(CatalogError::NotFound { .. })
        ));
    }

    assert!(service.access_counts().is_empty());
}

#[test]
fn test_case_insensitive_lookup() {
    let service = MonkeyService::shipped();
    assert_eq!(service.find_by_name("BABOON").unwrap().name, "Baboon");
    assert_eq!(service.find_by_name("baboon").unwrap().name, "Baboon");
    assert_eq!(service.access_count("Baboon"), 2);
}

#[test]
fn test_never_accessed_is_zero() {
    let service = MonkeyService::shipped();
    assert_eq!(service.access_count("Sebastian"), 0);
    assert_eq!(service.access_count("Not A Monkey"), 0);
}

#[test]
fn test_mandrill_count_matches_lookups() {
    for n in [0_u64, 1, 7] {
        let service = MonkeyService::shipped();
        for _ in 0..n {
            service.find_by_name("Mandrill").unwrap();
        }
        assert_eq!(service.access_count("Mandrill"), n);
    }
}

#[test]
fn test_list_all_is_stable() {
    let service = MonkeyService::shipped();
    let first: Vec<String> = service.list_all().iter().map(|r| r.name.clone()).collect();
    let second: Vec<String> = service.list_all().iter().map(|r| r.name.clone()).collect();

    assert_eq!(first.len(), SHIPPED_COUNT);
    assert_eq!(first, second);
    assert_eq!(first.first().map(String::as_str), Some("Baboon"));
    assert_eq!(first.last().map(String::as_str), Some("Mooch"));
}

// ============================================================================
// Random Selection Tests
// ============================================================================

#[test]
fn test_pick_random_covers_catalog_and_counts_every_call() {
    let service = MonkeyService::shipped();
    let draws = 10_000_u64;
    let mut seen = HashSet::new();

    for _ in 0..draws {
        let record = service.pick_random().unwrap();
        seen.insert(record.name.clone());
    }

    assert_eq!(seen.len(), SHIPPED_COUNT);
    let counts = service.access_counts();
    assert_eq!(counts.values().sum::<u64>(), draws);
    assert_eq!(counts.len(), SHIPPED_COUNT);
}

#[test]
fn test_pick_random_on_empty_store() {
    let service = MonkeyService::new(CatalogStore::new(Vec::new()));
    assert_eq!(service.pick_random(), Err(CatalogError::EmptyCatalog));
}

#[test]
fn test_tracker_keys_are_catalog_names() {
    let service = MonkeyService::shipped();
    service.find_by_name("henry").unwrap();
    service.find_by_name("RED-SHANKED DOUC").unwrap();
    let _ = service.find_by_name("gorilla");
    for _ in 0..50 {
        service.pick_random().unwrap();
    }

    let names: HashSet<&str> = service.list_all().iter().map(|r| r.name.as_str()).collect();
    for key in service.access_counts().keys() {
        assert!(names.contains(key.as_str()), "unexpected key {key}");
    }
}

// ============================================================================
// Concurrency Tests
// ============================================================================

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_record_access_on_tracker() {
    let tracker = Arc::new(AccessTracker::new());

    let mut tasks = Vec::new();
    for _ in 0..100 {
        let tracker = Arc::clone(&tracker);
        tasks.push(tokio::spawn(async move {
            tracker.record_access("Henry");
        }));
    }

    for task in tasks {
        task.await.expect("task should not panic");
    }

    assert_eq!(tracker.get_count("Henry"), 100);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_lookups_through_service() {
    let service = Arc::new(MonkeyService::shipped());

    let mut tasks = Vec::new();
    for i in 0..100 {
        let service = Arc::clone(&service);
        tasks.push(tokio::spawn(async move {
            let query = if i % 2 == 0 { "henry" } else { "HENRY " };
            service.find_by_name(query).map(|r| r.name.clone())
        }));
    }

    for task in tasks {
        let name = task.await.expect("task should not panic");
        assert_eq!(name.as_deref(), Ok("Henry"));
    }

    assert_eq!(service.access_count("Henry"), 100);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_random_picks_are_all_counted() {
    let service = Arc::new(MonkeyService::shipped());

    let mut tasks = Vec::new();
    for _ in 0..50 {
        let service = Arc::clone(&service);
        tasks.push(tokio::spawn(async move {
            for _ in 0..20 {
                service.pick_random().expect("catalog is not empty");
            }
        }));
    }

    for task in tasks {
        task.await.expect("task should not panic");
    }

    assert_eq!(service.access_counts().values().sum::<u64>(), 1_000);
}
