use serde::{Deserialize, Serialize};

use crate::{error::PositionError, lenient};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    LatestNews,
    CommunityActivities,
    BusinessBulletin,
    Crime,
    Wanted,
    Opinion,
    Misc,
    PrivateSales,
}

impl Category {
    pub const ALL: [Category; 8] = [
        Category::LatestNews,
        Category::CommunityActivities,
        Category::BusinessBulletin,
        Category::Crime,
        Category::Wanted,
        Category::Opinion,
        Category::Misc,
        Category::PrivateSales,
    ];

    /// Categories linked from the cover, in display order. Wanted posters are
    /// only reachable through the crime section's button.
    pub const COVER_LINKS: [Category; 7] = [
        Category::LatestNews,
        Category::CommunityActivities,
        Category::BusinessBulletin,
        Category::Crime,
        Category::Opinion,
        Category::PrivateSales,
        Category::Misc,
    ];

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|category| category.key() == key)
    }

    pub fn key(self) -> &'static str {
        match self {
            Category::LatestNews => "latest_news",
            Category::CommunityActivities => "community_activities",
            Category::BusinessBulletin => "business_bulletin",
            Category::Crime => "crime",
            Category::Wanted => "wanted",
            Category::Opinion => "opinion",
            Category::Misc => "misc",
            Category::PrivateSales => "private_sales",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Category::LatestNews => "Latest News",
            Category::CommunityActivities => "Community Activities",
            Category::BusinessBulletin => "Business Bulletins",
            Category::Crime => "Crime Reports",
            Category::Wanted => "WANTED",
            Category::Opinion => "Opinion & Editorial",
            Category::Misc => "Miscellaneous",
            Category::PrivateSales => "Private Sales",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IssueHeader {
    #[serde(
        default,
        deserialize_with = "lenient::opt_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub title: Option<String>,
    #[serde(
        default,
        deserialize_with = "lenient::opt_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub volume: Option<String>,
    #[serde(
        default,
        deserialize_with = "lenient::opt_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub date: Option<String>,
    #[serde(
        default,
        deserialize_with = "lenient::opt_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub number: Option<String>,
}

/// An article as the host sends it. `kind` is kept as the raw key so that
/// articles with unknown types stay addressable by their position.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Article {
    #[serde(rename = "type", default, deserialize_with = "lenient::string")]
    pub kind: String,
    #[serde(default, deserialize_with = "lenient::string")]
    pub title: String,
    #[serde(default, deserialize_with = "lenient::string")]
    pub content: String,
    #[serde(default, deserialize_with = "lenient::string")]
    pub author: String,
    #[serde(
        default,
        deserialize_with = "lenient::opt_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub image: Option<String>,
}

impl Article {
    pub fn category(&self) -> Option<Category> {
        Category::from_key(&self.kind)
    }

    pub fn is_wanted(&self) -> bool {
        self.category() == Some(Category::Wanted)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Advertisement {
    #[serde(default, deserialize_with = "lenient::string")]
    pub image: String,
    #[serde(default, deserialize_with = "lenient::string")]
    pub title: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Issue {
    #[serde(default, deserialize_with = "lenient::object")]
    pub header: IssueHeader,
    #[serde(default, deserialize_with = "lenient::list")]
    pub articles: Vec<Article>,
    #[serde(default, deserialize_with = "lenient::list")]
    pub advertisements: Vec<Advertisement>,
}

/// A pending article awaiting moderation. Every field is optional on the wire.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Submission {
    #[serde(
        default,
        deserialize_with = "lenient::opt_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub title: Option<String>,
    #[serde(
        default,
        deserialize_with = "lenient::opt_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub author: Option<String>,
    #[serde(
        default,
        deserialize_with = "lenient::opt_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub content: Option<String>,
    #[serde(
        rename = "type",
        default,
        deserialize_with = "lenient::opt_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub kind: Option<String>,
    /// Seconds since the unix epoch.
    #[serde(
        default,
        deserialize_with = "lenient::opt_timestamp",
        skip_serializing_if = "Option::is_none"
    )]
    pub timestamp: Option<i64>,
}

/// 1-based position of a submission in the list the host last returned.
///
/// Positions are only meaningful until the host mutates its queue, so callers
/// refetch after every action instead of reusing them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u32", try_from = "u32")]
pub struct SubmissionPosition(u32);

impl SubmissionPosition {
    pub fn new(position: u32) -> Option<Self> {
        (position > 0).then_some(Self(position))
    }

    /// Position of the entry at zero-based `offset` in a rendered list.
    pub fn from_offset(offset: usize) -> Self {
        Self(u32::try_from(offset).map_or(u32::MAX, |offset| offset.saturating_add(1)))
    }

    pub fn get(self) -> u32 {
        self.0
    }
}

impl TryFrom<u32> for SubmissionPosition {
    type Error = PositionError;

    fn try_from(position: u32) -> Result<Self, Self::Error> {
        Self::new(position).ok_or(PositionError)
    }
}

impl From<SubmissionPosition> for u32 {
    fn from(position: SubmissionPosition) -> Self {
        position.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ModerationAction {
    Approve,
    Reject,
}

impl ModerationAction {
    pub fn endpoint(self) -> &'static str {
        match self {
            ModerationAction::Approve => "approveSubmission",
            ModerationAction::Reject => "rejectSubmission",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeaderDetails {
    pub date: String,
    pub volume: String,
    pub number: String,
    pub title: String,
}
