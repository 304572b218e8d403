use crate::*;

use alloc::format;
use alloc::sync::Arc;
use alloc::vec::Vec;
use core::sync::atomic::{AtomicUsize, Ordering};

fn page(start: u64, len: usize) -> Vec<Item> {
    (0..len as u64)
        .map(|i| Item::new(start + i, format!("Mission {}", start + i)))
        .collect()
}

fn named(key: u64, title: &str) -> Item {
    Item::new(key, title)
}

#[test]
fn new_controller_is_idle_on_page_one() {
    let c = FeedController::default();
    assert_eq!(c.cursor(), 1);
    assert_eq!(c.query(), "");
    assert!(!c.is_loading());
    assert!(!c.is_exhausted());
    assert!(c.is_empty());
    assert_eq!(c.in_flight(), None);
}

#[test]
fn reset_requests_first_page_and_marks_loading() {
    let mut c = FeedController::default();
    let r = c.reset("");
    assert_eq!(r.page(), 1);
    assert_eq!(r.offset(), 0);
    assert_eq!(r.limit(), 10);
    assert_eq!(r.mode(), LoadMode::Replace);
    assert!(c.is_loading());
    assert_eq!(c.in_flight(), Some(r.id()));

    let out = c.complete(&r, Ok(page(1, 10)));
    assert_eq!(
        out,
        FetchOutcome::Applied {
            merged: 10,
            exhausted: false
        }
    );
    assert!(!c.is_loading());
    assert_eq!(c.cursor(), 2);
    assert_eq!(c.len(), 10);
}

#[test]
fn load_next_uses_cursor_for_offset() {
    let mut c = FeedController::default();
    let r = c.reset("");
    c.complete(&r, Ok(page(1, 10)));

    let r = c.load_next().unwrap();
    assert_eq!(r.page(), 2);
    assert_eq!(r.offset(), 10);
    assert_eq!(r.mode(), LoadMode::Append);
    c.complete(&r, Ok(page(11, 10)));

    let r = c.load_next().unwrap();
    assert_eq!(r.offset(), 20);
}

#[test]
fn ten_then_four_exhausts_after_two_loads() {
    let mut c = FeedController::default();

    let r = c.load_next().unwrap();
    assert_eq!(r.offset(), 0);
    c.complete(&r, Ok(page(1, 10)));

    let r = c.load_next().unwrap();
    assert_eq!(r.offset(), 10);
    let out = c.complete(&r, Ok(page(11, 4)));
    assert_eq!(
        out,
        FetchOutcome::Applied {
            merged: 4,
            exhausted: true
        }
    );

    assert_eq!(c.len(), 14);
    assert_eq!(c.cursor(), 3);
    assert!(c.is_exhausted());
    assert!(!c.has_more());
    assert!(c.load_next().is_none());
}

#[test]
fn cursor_tracks_successful_loads_and_len_tracks_filtered_pages() {
    let mut c = FeedController::new(FeedOptions::new().with_initial_query("even"));
    let mut expected_len = 0usize;
    for n in 0..5u64 {
        let r = c.load_next().unwrap();
        let raw: Vec<Item> = (0..10u64)
            .map(|i| {
                let key = n * 10 + i;
                let title = if key % 2 == 0 { "Even launch" } else { "Odd launch" };
                named(key, title)
            })
            .collect();
        expected_len += raw.iter().filter(|it| matches(it, "even")).count();
        assert!(c.complete(&r, Ok(raw)).is_applied());
        assert_eq!(c.cursor(), 1 + (n + 1));
    }
    assert_eq!(c.len(), expected_len);
    assert_eq!(c.len(), 25);
    assert!(c.items().iter().all(|it| it.key % 2 == 0));
}

#[test]
fn arrival_order_is_preserved_across_appends() {
    let mut c = FeedController::default();
    let r = c.reset("");
    c.complete(&r, Ok(page(100, 10)));
    let r = c.load_next().unwrap();
    c.complete(&r, Ok(page(1, 10)));

    let keys: Vec<u64> = c.items().iter().map(|it| it.key).collect();
    let mut expected: Vec<u64> = (100..110).collect();
    expected.extend(1..11);
    assert_eq!(keys, expected);
}

#[test]
fn load_next_while_loading_is_a_no_op() {
    let mut c = FeedController::default();
    let r = c.reset("");
    c.complete(&r, Ok(page(1, 10)));

    let r = c.load_next().unwrap();
    let before = c.state();
    let items_before = c.items().to_vec();

    assert!(c.load_next().is_none());
    assert!(c.load_next().is_none());

    assert_eq!(c.state(), before);
    assert_eq!(c.items(), &items_before[..]);
    assert_eq!(c.in_flight(), Some(r.id()));
}

#[test]
fn load_next_when_exhausted_is_a_no_op() {
    let mut c = FeedController::default();
    let r = c.reset("");
    c.complete(&r, Ok(page(1, 3)));
    assert!(c.is_exhausted());

    let before = c.state();
    assert!(c.load_next().is_none());
    assert_eq!(c.state(), before);
    assert!(!c.is_loading());
}

#[test]
fn reset_replaces_items_with_matching_subset() {
    let mut c = FeedController::default();
    let r = c.reset("");
    c.complete(&r, Ok(page(1, 10)));
    let r = c.load_next().unwrap();
    c.complete(&r, Ok(page(11, 10)));
    assert_eq!(c.len(), 20);

    let r = c.reset("Falcon");
    assert!(c.is_empty());
    assert_eq!(c.cursor(), 1);
    assert_eq!(r.offset(), 0);

    let raw = alloc::vec![
        named(1, "FalconSat"),
        named(2, "DemoSat"),
        named(3, "Trailblazer").with_description("Second stage of the falcon 1 failed"),
        named(4, "RatSat"),
        named(5, "RazakSat"),
        named(6, "Falcon 9 Test Flight"),
        named(7, "COTS 1"),
        named(8, "COTS 2"),
        named(9, "CRS-1"),
        named(10, "CRS-2"),
    ];
    c.complete(&r, Ok(raw));

    let keys: Vec<u64> = c.items().iter().map(|it| it.key).collect();
    assert_eq!(keys, alloc::vec![1, 3, 6]);
    assert!(c.items().iter().all(|it| matches(it, "falcon")));
    assert!(!c.is_exhausted());
    assert_eq!(c.cursor(), 2);
}

#[test]
fn reset_clears_exhaustion_before_fetch_completes() {
    let mut c = FeedController::default();
    let r = c.reset("");
    c.complete(&r, Ok(page(1, 2)));
    assert!(c.is_exhausted());

    let r = c.reset("sat");
    assert!(!c.is_exhausted());
    assert!(c.is_loading());

    c.complete(&r, Ok(page(1, 10)));
    assert!(!c.is_exhausted());
}

#[test]
fn reset_with_short_first_page_is_exhausted() {
    let mut c = FeedController::default();
    let r = c.reset("mission");
    c.complete(&r, Ok(page(1, 7)));
    assert!(c.is_exhausted());
    assert_eq!(c.len(), 7);
}

#[test]
fn filtered_out_full_page_does_not_exhaust() {
    let mut c = FeedController::default();
    let r = c.reset("crs");
    let mut raw = page(1, 8);
    raw.push(named(9, "CRS-1"));
    raw.push(named(10, "CRS-2"));
    let out = c.complete(&r, Ok(raw));

    assert_eq!(
        out,
        FetchOutcome::Applied {
            merged: 2,
            exhausted: false
        }
    );
    assert_eq!(c.cursor(), 2);
    assert!(c.load_next().is_some());
}

#[test]
fn empty_page_exhausts_and_still_advances_cursor() {
    let mut c = FeedController::default();
    let r = c.load_next().unwrap();
    c.complete(&r, Ok(Vec::new()));
    assert!(c.is_exhausted());
    assert_eq!(c.cursor(), 2);
    assert!(c.is_empty());
}

#[test]
fn stale_reset_result_is_discarded() {
    let stale = Arc::new(AtomicUsize::new(0));
    let mut c = FeedController::new(FeedOptions::new().with_on_diagnostic(Some({
        let stale = Arc::clone(&stale);
        move |d: &Diagnostic| {
            if matches!(d, Diagnostic::StaleResult { .. }) {
                stale.fetch_add(1, Ordering::Relaxed);
            }
        }
    })));

    let dragon = c.reset("dragon");
    let falcon = c.reset("falcon");
    assert!(!c.is_live(&dragon));
    assert!(c.is_live(&falcon));

    let out = c.complete(
        &falcon,
        Ok(alloc::vec![named(1, "Falcon Heavy Test"), named(2, "Starlink")]),
    );
    assert!(out.is_applied());
    let after_falcon = c.items().to_vec();
    let state = c.state();

    let out = c.complete(
        &dragon,
        Ok(alloc::vec![named(3, "Dragon CRS-1"), named(4, "Dragon CRS-2")]),
    );
    assert_eq!(out, FetchOutcome::Stale);
    assert_eq!(c.items(), &after_falcon[..]);
    assert_eq!(c.state(), state);
    assert_eq!(stale.load(Ordering::Relaxed), 1);
}

#[test]
fn stale_result_arriving_while_new_request_in_flight_keeps_loading() {
    let mut c = FeedController::default();
    let dragon = c.reset("dragon");
    let falcon = c.reset("falcon");

    assert_eq!(c.complete(&dragon, Ok(page(1, 10))), FetchOutcome::Stale);
    assert!(c.is_loading());
    assert_eq!(c.in_flight(), Some(falcon.id()));
    assert!(c.is_empty());

    // A stale failure is discarded too.
    assert_eq!(
        c.complete(&dragon, Err(TransportError::Status { status: 500 })),
        FetchOutcome::Stale
    );
    assert!(c.is_loading());
}

#[test]
fn append_request_superseded_by_same_query_reset_is_stale() {
    let mut c = FeedController::default();
    let r = c.reset("");
    c.complete(&r, Ok(page(1, 10)));

    let next = c.load_next().unwrap();
    let again = c.reset("");
    assert_eq!(next.query(), again.query());

    assert_eq!(c.complete(&next, Ok(page(11, 10))), FetchOutcome::Stale);
    c.complete(&again, Ok(page(1, 10)));
    assert_eq!(c.len(), 10);
    assert_eq!(c.cursor(), 2);
}

#[test]
fn completing_twice_is_stale_the_second_time() {
    let mut c = FeedController::default();
    let r = c.reset("");
    assert!(c.complete(&r, Ok(page(1, 10))).is_applied());
    assert_eq!(c.complete(&r, Ok(page(1, 10))), FetchOutcome::Stale);
    assert_eq!(c.len(), 10);
    assert_eq!(c.cursor(), 2);
}

#[test]
fn first_fetch_failure_leaves_state_untouched() {
    let failures = Arc::new(AtomicUsize::new(0));
    let mut c = FeedController::new(FeedOptions::new().with_on_diagnostic(Some({
        let failures = Arc::clone(&failures);
        move |d: &Diagnostic| {
            if let Diagnostic::FetchFailed { error, .. } = d {
                assert_eq!(error, &TransportError::connection("offline"));
                failures.fetch_add(1, Ordering::Relaxed);
            }
        }
    })));

    let r = c.reset("");
    let out = c.complete(&r, Err(TransportError::connection("offline")));
    assert_eq!(
        out,
        FetchOutcome::Failed(TransportError::connection("offline"))
    );
    assert!(c.is_empty());
    assert!(!c.is_loading());
    assert!(!c.is_exhausted());
    assert_eq!(c.cursor(), 1);
    assert_eq!(failures.load(Ordering::Relaxed), 1);
}

#[test]
fn failure_mid_feed_keeps_items_and_allows_retry() {
    let mut c = FeedController::default();
    let r = c.reset("");
    c.complete(&r, Ok(page(1, 10)));

    let r = c.load_next().unwrap();
    c.complete(&r, Err(TransportError::Status { status: 503 }));
    assert_eq!(c.len(), 10);
    assert_eq!(c.cursor(), 2);
    assert!(!c.is_loading());

    let retry = c.load_next().unwrap();
    assert_eq!(retry.page(), 2);
    assert_ne!(retry.id(), r.id());
    c.complete(&retry, Ok(page(11, 10)));
    assert_eq!(c.len(), 20);
}

#[test]
fn on_change_fires_on_issue_and_completion() {
    let calls = Arc::new(AtomicUsize::new(0));
    let mut c = FeedController::new(FeedOptions::new().with_on_change(Some({
        let calls = Arc::clone(&calls);
        move |_: &FeedController| {
            calls.fetch_add(1, Ordering::Relaxed);
        }
    })));

    let r = c.reset("");
    assert_eq!(calls.load(Ordering::Relaxed), 1);
    c.complete(&r, Ok(page(1, 10)));
    assert_eq!(calls.load(Ordering::Relaxed), 2);

    let _ = c.load_next();
    assert_eq!(calls.load(Ordering::Relaxed), 3);
    // Rejected: no notification.
    assert!(c.load_next().is_none());
    assert_eq!(calls.load(Ordering::Relaxed), 3);
}

#[test]
fn on_change_sees_updated_state() {
    let seen = Arc::new(AtomicUsize::new(0));
    let mut c = FeedController::default();
    c.set_on_change(Some({
        let seen = Arc::clone(&seen);
        move |c: &FeedController| {
            seen.store(c.len(), Ordering::Relaxed);
        }
    }));
    let r = c.reset("");
    c.complete(&r, Ok(page(1, 6)));
    assert_eq!(seen.load(Ordering::Relaxed), 6);
}

#[test]
fn custom_page_size_drives_offset_and_exhaustion() {
    let mut c = FeedController::new(FeedOptions::new().with_page_size(25));
    let r = c.reset("");
    assert_eq!(r.limit(), 25);
    c.complete(&r, Ok(page(1, 25)));
    assert!(!c.is_exhausted());

    let r = c.load_next().unwrap();
    assert_eq!(r.offset(), 25);
    c.complete(&r, Ok(page(26, 24)));
    assert!(c.is_exhausted());
}

#[test]
fn zero_page_size_is_clamped() {
    let mut c = FeedController::new(FeedOptions::new().with_page_size(0));
    let r = c.reset("");
    assert_eq!(r.limit(), 1);

    c.update_options(|o| o.page_size = 10);
    assert_eq!(c.options().page_size, 10);
}

// Walks through every logged transition; runs with and without the `tracing` feature.
#[test]
fn logged_transitions_keep_their_outcomes() {
    let mut c = FeedController::new(FeedOptions::new().with_page_size(3));
    c.update_options(|o| o.page_size = 2);

    let first = c.reset("");
    assert!(c.load_next().is_none());
    let second = c.reset("");
    assert_eq!(c.complete(&first, Ok(page(1, 2))), FetchOutcome::Stale);
    assert_eq!(
        c.complete(&second, Ok(page(1, 2))),
        FetchOutcome::Applied {
            merged: 2,
            exhausted: false
        }
    );

    let next = c.load_next().unwrap();
    assert_eq!(next.offset(), 2);
    assert_eq!(
        c.complete(&next, Err(TransportError::Status { status: 500 })),
        FetchOutcome::Failed(TransportError::Status { status: 500 })
    );
    assert_eq!(c.len(), 2);
    assert_eq!(c.cursor(), 2);

    let mut t = ExpansionTracker::<ItemKey>::new();
    assert!(t.toggle(1));
    assert!(!t.toggle(1));
}

#[test]
fn matches_is_case_insensitive_over_title_and_description() {
    let item = named(1, "FalconSat").with_description("Engine failure at 33 seconds");
    assert!(matches(&item, "falcon"));
    assert!(matches(&item, "FALCONSAT"));
    assert!(matches(&item, "ENGINE failure"));
    assert!(!matches(&item, "dragon"));
    assert!(matches(&item, ""));

    let bare = named(2, "DemoSat");
    assert!(!matches(&bare, "engine"));
    assert!(matches(&bare, ""));
}

#[test]
fn classify_prefers_upcoming() {
    let base = named(1, "x");
    assert_eq!(classify(&base), Status::Unknown);
    assert_eq!(
        classify(&base.clone().with_outcome(Outcome::Success)),
        Status::Success
    );
    assert_eq!(
        classify(&base.clone().with_outcome(Outcome::Failure)),
        Status::Failed
    );
    assert_eq!(
        classify(&base.clone().with_outcome(Outcome::Pending)),
        Status::Unknown
    );
    assert_eq!(
        classify(
            &base
                .clone()
                .with_outcome(Outcome::Failure)
                .with_upcoming(true)
        ),
        Status::Upcoming
    );
    assert_eq!(base.with_upcoming(true).status(), Status::Upcoming);
}

#[test]
fn status_labels_and_badges() {
    assert_eq!(Status::Upcoming.label(), "Upcoming");
    assert_eq!(Status::Upcoming.badge(), "processing");
    assert_eq!(Status::Success.badge(), "success");
    assert_eq!(Status::Failed.label(), "Failed");
    assert_eq!(Status::Failed.badge(), "error");
    assert_eq!(Status::Unknown.badge(), "default");
}

#[test]
fn outcome_maps_from_wire_flag() {
    assert_eq!(Outcome::from(Some(true)), Outcome::Success);
    assert_eq!(Outcome::from(Some(false)), Outcome::Failure);
    assert_eq!(Outcome::from(None), Outcome::Unknown);
    assert_eq!(Option::<bool>::from(Outcome::Pending), None);
}

#[test]
fn toggle_twice_restores_membership() {
    let mut t = ExpansionTracker::<u64>::new();
    assert!(!t.is_expanded(&7));
    assert!(t.toggle(7));
    assert!(t.is_expanded(&7));
    assert!(!t.toggle(7));
    assert!(!t.is_expanded(&7));

    t.toggle(3);
    t.toggle(9);
    t.toggle(9);
    assert!(t.is_expanded(&3));
    assert!(!t.is_expanded(&9));
    assert_eq!(t.len(), 1);
}

#[test]
fn expansion_survives_reset() {
    let mut c = FeedController::default();
    let mut t = ExpansionTracker::<ItemKey>::new();

    let r = c.reset("");
    c.complete(&r, Ok(page(1, 10)));
    t.toggle(3);

    let r = c.reset("nothing matches this");
    c.complete(&r, Ok(page(1, 10)));
    assert!(c.is_empty());
    assert!(t.is_expanded(&3));
    assert_eq!(t.iter().copied().collect::<Vec<_>>(), alloc::vec![3]);
}

#[test]
fn transport_error_messages() {
    use alloc::string::ToString;

    assert_eq!(
        TransportError::Status { status: 404 }.to_string(),
        "HTTP status 404"
    );
    assert_eq!(
        TransportError::connection("timed out").to_string(),
        "connection failed: timed out"
    );
    assert_eq!(
        TransportError::body("expected array").to_string(),
        "invalid response body: expected array"
    );
}

#[test]
fn packaged_readme_and_licenses_are_present() {
    assert!(include_str!("../README.md").starts_with("# launchfeed\n"));
    assert!(include_str!("../LICENSE-MIT").contains("The launchfeed Authors"));
    assert!(include_str!("../LICENSE-APACHE").contains("Apache License"));
}
