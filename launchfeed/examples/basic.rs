// Example: paging through a feed and searching it.
use launchfeed::{FeedController, FeedOptions, Item, TransportError};

fn page(offset: u64, limit: usize) -> Vec<Item> {
    // 23 items on the "server".
    (offset..23.min(offset + limit as u64))
        .map(|i| Item::new(i + 1, format!("Mission {}", i + 1)))
        .collect()
}

fn main() {
    let mut c = FeedController::new(FeedOptions::new());

    let r = c.reset("");
    c.complete(&r, Ok(page(r.offset(), r.limit())));
    while let Some(r) = c.load_next() {
        let out = c.complete(&r, Ok(page(r.offset(), r.limit())));
        println!("page={} -> {:?}", r.page(), out);
    }
    println!("state={:?}", c.state());

    let r = c.reset("mission 1");
    let out = c.complete(&r, Ok(page(r.offset(), r.limit())));
    println!("search -> {:?}, items={}", out, c.len());

    let r = c.load_next().unwrap_or_else(|| c.reset(""));
    let out = c.complete(&r, Err(TransportError::connection("offline")));
    println!("failure -> {out:?}, loading={}", c.is_loading());
}
