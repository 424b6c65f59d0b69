use std::fmt;

use serde::{Deserialize, Serialize};

/// Page on Hacker News that hosts the discussion of an item.
const DISCUSSION_URL: &str = "https://news.ycombinator.com/item?id=";

/// Upstream identifier of a feed item, used as the merge key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(pub u64);

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for ItemId {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

/// A story as served by `GET /item/{id}`.
///
/// Immutable once received. Ask/Show posts carry no `url`, so it is optional.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub id: ItemId,
    #[serde(default)]
    pub title: String,
    #[serde(rename = "by", default)]
    pub author: String,
    #[serde(default)]
    pub url: Option<String>,
    /// Unix epoch seconds
    #[serde(rename = "time")]
    pub submitted_at: i64,
}

impl Item {
    /// Link to the item's comment thread.
    pub fn discussion_url(&self) -> String {
        format!("{DISCUSSION_URL}{}", self.id)
    }

    /// The URL opened when the item is activated.
    pub fn link(&self) -> String {
        match &self.url {
            Some(url) if !url.is_empty() => url.clone(),
            _ => self.discussion_url(),
        }
    }
}
