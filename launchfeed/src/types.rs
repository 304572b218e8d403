use alloc::string::String;

pub type ItemKey = u64;

/// External links attached to an [`Item`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Links {
    #[cfg_attr(feature = "serde", serde(deserialize_with = "crate::lenient::or_default"))]
    pub mission_patch: Option<String>,
    #[cfg_attr(feature = "serde", serde(deserialize_with = "crate::lenient::or_default"))]
    pub video_link: Option<String>,
    #[cfg_attr(feature = "serde", serde(deserialize_with = "crate::lenient::or_default"))]
    pub article_link: Option<String>,
}

/// Outcome classification of an item.
///
/// On the wire this is `launch_success: bool | null`. `Pending` is never produced by decoding;
/// it exists for sources that know an outcome is still being determined.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "Option<bool>", into = "Option<bool>"))]
pub enum Outcome {
    Pending,
    Success,
    Failure,
    #[default]
    Unknown,
}

impl From<Option<bool>> for Outcome {
    fn from(value: Option<bool>) -> Self {
        match value {
            Some(true) => Self::Success,
            Some(false) => Self::Failure,
            None => Self::Unknown,
        }
    }
}

impl From<Outcome> for Option<bool> {
    fn from(value: Outcome) -> Self {
        match value {
            Outcome::Success => Some(true),
            Outcome::Failure => Some(false),
            Outcome::Pending | Outcome::Unknown => None,
        }
    }
}

/// A read-only feed entry, as delivered by the page source.
///
/// With `feature = "serde"`, this type (de)serializes using the SpaceX v3 launch field names.
/// Missing or malformed fields fall back to their defaults instead of failing the page.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Item {
    #[cfg_attr(
        feature = "serde",
        serde(rename = "flight_number", deserialize_with = "crate::lenient::or_default")
    )]
    pub key: ItemKey,
    #[cfg_attr(
        feature = "serde",
        serde(rename = "mission_name", deserialize_with = "crate::lenient::or_default")
    )]
    pub title: String,
    #[cfg_attr(
        feature = "serde",
        serde(rename = "details", deserialize_with = "crate::lenient::or_default")
    )]
    pub description: Option<String>,
    /// Ordering timestamp, seconds since the Unix epoch.
    #[cfg_attr(feature = "serde", serde(deserialize_with = "crate::lenient::or_default"))]
    pub launch_date_unix: i64,
    #[cfg_attr(feature = "serde", serde(deserialize_with = "crate::lenient::or_default"))]
    pub launch_date_utc: String,
    #[cfg_attr(feature = "serde", serde(deserialize_with = "crate::lenient::or_default"))]
    pub links: Links,
    #[cfg_attr(
        feature = "serde",
        serde(rename = "launch_success", deserialize_with = "crate::lenient::or_default")
    )]
    pub outcome: Outcome,
    #[cfg_attr(feature = "serde", serde(deserialize_with = "crate::lenient::or_default"))]
    pub upcoming: bool,
}

impl Item {
    pub fn new(key: ItemKey, title: impl Into<String>) -> Self {
        Self {
            key,
            title: title.into(),
            ..Self::default()
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_outcome(mut self, outcome: Outcome) -> Self {
        self.outcome = outcome;
        self
    }

    pub fn with_upcoming(mut self, upcoming: bool) -> Self {
        self.upcoming = upcoming;
        self
    }

    pub fn with_launch_date(mut self, unix: i64, utc: impl Into<String>) -> Self {
        self.launch_date_unix = unix;
        self.launch_date_utc = utc.into();
        self
    }

    pub fn with_links(mut self, links: Links) -> Self {
        self.links = links;
        self
    }

    /// The description, or an empty string when absent.
    pub fn description(&self) -> &str {
        self.description.as_deref().unwrap_or("")
    }

    pub fn status(&self) -> Status {
        classify(self)
    }
}

/// Display status of an item.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Status {
    Upcoming,
    Success,
    Failed,
    Unknown,
}

impl Status {
    pub fn label(self) -> &'static str {
        match self {
            Self::Upcoming => "Upcoming",
            Self::Success => "Success",
            Self::Failed => "Failed",
            Self::Unknown => "Unknown",
        }
    }

    /// Badge style name for the status indicator.
    pub fn badge(self) -> &'static str {
        match self {
            Self::Upcoming => "processing",
            Self::Success => "success",
            Self::Failed => "error",
            Self::Unknown => "default",
        }
    }
}

/// Classifies an item for display.
///
/// `upcoming` wins over the outcome; `Pending` and `Unknown` outcomes both map to
/// [`Status::Unknown`].
pub fn classify(item: &Item) -> Status {
    if item.upcoming {
        return Status::Upcoming;
    }
    match item.outcome {
        Outcome::Success => Status::Success,
        Outcome::Failure => Status::Failed,
        Outcome::Pending | Outcome::Unknown => Status::Unknown,
    }
}
