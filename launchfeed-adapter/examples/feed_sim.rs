use std::time::{SystemTime, UNIX_EPOCH};

use futures::executor::block_on;
use launchfeed::{FeedOptions, Item, Outcome, TransportError};
use launchfeed_adapter::{DEFAULT_BASE_URL, Feed, launches_url};

fn main() {
    // Simulated endpoint: 14 launches, every third one failed.
    let source = |offset: u64, limit: usize| async move {
        Ok::<_, TransportError>(
            (offset..14.min(offset + limit as u64))
                .map(|i| {
                    let outcome = if i % 3 == 0 {
                        Outcome::Failure
                    } else {
                        Outcome::Success
                    };
                    Item::new(i + 1, format!("Flight {}", i + 1))
                        .with_outcome(outcome)
                        .with_launch_date(1_143_239_400 + i as i64 * 86_400 * 90, "")
                })
                .collect(),
        )
    };

    let now = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs() as i64)
        .unwrap_or_default();
    let relative = move |secs: i64| format!("{} days ago", (now - secs) / 86_400);

    let mut feed = Feed::new(FeedOptions::new());
    let r = feed.mount();
    println!("GET {}", launches_url(DEFAULT_BASE_URL, &r));
    block_on(feed.run(&source, r));

    // The UI reports the list is scrolled near its end until the feed runs dry.
    while let Some(r) = feed.on_scroll_near_end() {
        println!("GET {}", launches_url(DEFAULT_BASE_URL, &r));
        block_on(feed.run(&source, r));
    }

    feed.on_toggle_expand(2);
    for row in feed.rows(&relative) {
        println!(
            "{:>3} {:<10} {:<8} {}",
            row.key,
            row.title,
            row.status.label(),
            if row.expanded { row.launch_date.as_str() } else { row.toggle_label() }
        );
    }
    println!("{:?}", feed.footer().message());
}
