//! Read-only projection of the feed state for the presentation layer

use crate::{
    core::{pager::Sentinel, state::feed::FeedState},
    domain::item::Item,
};

/// Shown when the ranked list settled without data or error text
pub const LIST_ERROR_FALLBACK: &str = "There was a problem fetching the latest stories.";

pub const OFFLINE_NOTICE: &str =
    "Looks like you're offline. You'll be able to load more stories once you're back online.";

pub const LOADING_MORE: &str = "Loading more stories . . .";

/// One slot of the visible list
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Row<'a> {
    /// The id is known but its body has not arrived
    Placeholder,
    Story(&'a Item),
}

impl<'a> Row<'a> {
    pub fn story(&self) -> Option<&'a Item> {
        match self {
            Row::Story(item) => Some(item),
            Row::Placeholder => None,
        }
    }
}

/// What the presentation renders for one state snapshot
#[derive(Debug, Clone, PartialEq)]
pub struct FeedView<'a> {
    pub rows: Vec<Row<'a>>,
    /// Blocking list-level error; when set, `rows` is empty
    pub error: Option<String>,
    pub show_offline_notice: bool,
    /// The current page still has bodies in flight
    pub show_loading_more: bool,
    /// The pager is allowed to advance
    pub can_load_more: bool,
}

impl FeedView<'_> {
    /// The sentinel sits right after the last row
    pub fn sentinel(&self) -> Option<Sentinel> {
        match self.error {
            Some(_) => None,
            None => Some(Sentinel(self.rows.len())),
        }
    }

    pub fn placeholder_count(&self) -> usize {
        self.rows
            .iter()
            .filter(|row| matches!(row, Row::Placeholder))
            .count()
    }

    pub fn story_count(&self) -> usize {
        self.rows.len() - self.placeholder_count()
    }
}

/// Project the feed state into rows and flags.
///
/// Rows cover `expected_visible_count` ids in ranked order; while the ranked
/// list itself is loading, one page of placeholders is shown.
pub fn project(state: &FeedState) -> FeedView<'_> {
    let list = &state.item_list;
    if list.is_settled() && (list.error.is_some() || list.data.is_none()) {
        return FeedView {
            rows: Vec::new(),
            error: Some(
                list.error
                    .clone()
                    .unwrap_or_else(|| LIST_ERROR_FALLBACK.to_string()),
            ),
            show_offline_notice: false,
            show_loading_more: false,
            can_load_more: false,
        };
    }

    let count = state.expected_visible_count();
    let rows: Vec<Row<'_>> = match &list.data {
        Some(ids) => ids
            .iter()
            .take(count)
            .map(|id| state.item(id).map_or(Row::Placeholder, Row::Story))
            .collect(),
        None => vec![Row::Placeholder; count],
    };

    FeedView {
        show_loading_more: state.items.loading && !state.offline && !rows.is_empty(),
        rows,
        error: None,
        show_offline_notice: state.offline,
        can_load_more: state.can_load_more(),
    }
}
