//! Sequence Guard Integration Tests
//!
//! Exercises guarded resolution under out-of-order completion: a request
//! that finishes after a newer one started must not replace the newer
//! result, no matter how the futures interleave.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use chrono::NaiveDate;
use tokio::sync::Notify;
use timescope::adapters::{AlmanacDay, AlmanacSource, SourceError, SummarySource};
use timescope::{ResolutionGuard, Resolver};

/// Feed that answers immediately with an empty day.
struct EmptyFeed;

#[async_trait]
impl AlmanacSource for EmptyFeed {
    async fn day_entries(&self, _month: u32, _day: u32) -> Result<AlmanacDay, SourceError> {
        Ok(AlmanacDay::default())
    }
}

/// Feed whose first call blocks on a gate, letting a later request overtake
/// it. Subsequent calls answer immediately.
struct GatedFirstFeed {
    calls: AtomicUsize,
    gate: Arc<Notify>,
}

#[async_trait]
impl AlmanacSource for GatedFirstFeed {
    async fn day_entries(&self, _month: u32, _day: u32) -> Result<AlmanacDay, SourceError> {
        if self.calls.fetch_add(1, Ordering::SeqCst) == 0 {
            self.gate.notified().await;
        }
        Ok(AlmanacDay::default())
    }
}

struct NoSummary;

#[async_trait]
impl SummarySource for NoSummary {
    async fn summary(&self, _title: &str) -> Result<Option<String>, SourceError> {
        Ok(None)
    }
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[tokio::test]
async fn test_guarded_resolution_installs() {
    let resolver = Resolver::new(Arc::new(EmptyFeed), Arc::new(NoSummary));
    let guard = ResolutionGuard::new();

    let resolution = resolver
        .resolve_guarded(&guard, date(1947, 8, 15), false)
        .await
        .unwrap();

    assert_eq!(resolution.date, date(1947, 8, 15));
    assert_eq!(guard.current().unwrap().date, date(1947, 8, 15));
}

#[tokio::test]
async fn test_sequential_requests_each_win() {
    let resolver = Resolver::new(Arc::new(EmptyFeed), Arc::new(NoSummary));
    let guard = ResolutionGuard::new();

    let first = resolver
        .resolve_guarded(&guard, date(1947, 8, 15), false)
        .await;
    let second = resolver
        .resolve_guarded(&guard, date(1969, 7, 20), false)
        .await;

    assert!(first.is_some());
    assert!(second.is_some());
    assert_eq!(guard.current().unwrap().date, date(1969, 7, 20));
}

#[tokio::test]
async fn test_overtaken_request_is_dropped() {
    let gate = Arc::new(Notify::new());
    let resolver = Arc::new(Resolver::new(
        Arc::new(GatedFirstFeed {
            calls: AtomicUsize::new(0),
            gate: Arc::clone(&gate),
        }),
        Arc::new(NoSummary),
    ));
    let guard = Arc::new(ResolutionGuard::new());

    // The first request takes its ticket, then stalls in the feed.
    let slow = {
        let resolver = Arc::clone(&resolver);
        let guard = Arc::clone(&guard);
        tokio::spawn(async move {
            resolver
                .resolve_guarded(&guard, date(1947, 8, 15), false)
                .await
        })
    };
    tokio::task::yield_now().await;

    // The second request starts later but completes first.
    let fast = resolver
        .resolve_guarded(&guard, date(1969, 7, 20), false)
        .await;
    assert!(fast.is_some());
    assert_eq!(guard.current().unwrap().date, date(1969, 7, 20));

    // The stalled request finally finishes and must be dropped.
    gate.notify_one();
    let slow = slow.await.unwrap();
    assert!(slow.is_none());
    assert_eq!(guard.current().unwrap().date, date(1969, 7, 20));
}

#[tokio::test]
async fn test_alt_requests_flow_through_the_guard_too() {
    let resolver = Resolver::new(Arc::new(EmptyFeed), Arc::new(NoSummary));
    let guard = ResolutionGuard::new();

    resolver
        .resolve_guarded(&guard, date(1947, 8, 15), false)
        .await;
    let alt = resolver
        .resolve_guarded(&guard, date(1888, 5, 1), true)
        .await
        .unwrap();

    assert!(alt.alt_history);
    assert!(guard.current().unwrap().alt_history);
}
