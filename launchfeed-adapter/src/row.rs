use alloc::format;
use alloc::string::String;

use launchfeed::{Item, ItemKey, Status};

/// Shown when an item has no details.
pub const NO_DETAILS: &str = "No details available";

/// Formats an item's launch date for display (e.g. "3 years ago").
///
/// Relative-time formatting is left to the embedding application; any `Fn(i64) -> String`
/// taking Unix seconds works.
pub trait DateFormatter {
    fn format_date(&self, unix_secs: i64) -> String;
}

impl<F: Fn(i64) -> String> DateFormatter for F {
    fn format_date(&self, unix_secs: i64) -> String {
        self(unix_secs)
    }
}

/// Everything the rendering layer needs for one item.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LaunchRow<'a> {
    pub key: ItemKey,
    pub title: &'a str,
    pub status: Status,
    pub launch_date: String,
    pub video_link: Option<&'a str>,
    pub article_link: Option<&'a str>,
    pub mission_patch: Option<&'a str>,
    /// The description, or [`NO_DETAILS`].
    pub details: &'a str,
    pub expanded: bool,
}

impl<'a> LaunchRow<'a> {
    pub fn new(item: &'a Item, expanded: bool, dates: &impl DateFormatter) -> Self {
        let details = match item.description() {
            "" => NO_DETAILS,
            details => details,
        };
        Self {
            key: item.key,
            title: &item.title,
            status: item.status(),
            launch_date: dates.format_date(item.launch_date_unix),
            video_link: non_empty(&item.links.video_link),
            article_link: non_empty(&item.links.article_link),
            mission_patch: non_empty(&item.links.mission_patch),
            details,
            expanded,
        }
    }

    pub fn toggle_label(&self) -> &'static str {
        if self.expanded {
            "Hide Details"
        } else {
            "Show Details"
        }
    }

    /// Alt text for the mission patch image.
    pub fn patch_alt(&self) -> String {
        format!("{} patch", self.title)
    }
}

fn non_empty(link: &Option<String>) -> Option<&str> {
    link.as_deref().filter(|s| !s.is_empty())
}

/// What to show below the list.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Footer {
    /// First page of a fresh query is loading; the list is empty.
    Spinner,
    /// More pages may follow.
    Loader,
    /// The feed is exhausted and nothing matched.
    NoMatches,
    /// The feed is exhausted.
    EndOfList,
}

impl Footer {
    pub fn message(self) -> Option<&'static str> {
        match self {
            Self::Spinner | Self::Loader => None,
            Self::NoMatches => Some("No launches found matching your search"),
            Self::EndOfList => Some("End of List."),
        }
    }
}
