// Example: a search that supersedes an in-flight one.
use launchfeed::{FeedController, FeedOptions, Item};

fn main() {
    let mut c = FeedController::new(FeedOptions::new().with_on_diagnostic(Some(
        |d: &launchfeed::Diagnostic| println!("diagnostic: {d:?}"),
    )));

    let page = vec![
        Item::new(1, "Dragon CRS-1"),
        Item::new(2, "Falcon Heavy Test Flight"),
    ];

    let dragon = c.reset("dragon");
    let falcon = c.reset("falcon");

    // The newer search resolves first.
    println!("falcon -> {:?}", c.complete(&falcon, Ok(page.clone())));
    // The older one arrives late and is dropped.
    println!("dragon -> {:?}", c.complete(&dragon, Ok(page)));

    for item in c.items() {
        println!("{} [{}]", item.title, item.status().label());
    }
}
