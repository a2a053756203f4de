//! Filtering and grouping of roadmap items.
//!
//! Everything in here is a pure function over a borrowed slice of items: no
//! hidden state, stable output order, and no error conditions.

use crate::error::NexusError;
use crate::model::{Category, RoadmapItem, Status};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

/// Keyword that selects every value of a filter dimension.
pub const ALL_KEYWORD: &str = "ALL";

/// One filter dimension: either everything, or exactly one value.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Selection<T> {
    #[default]
    All,
    Only(T),
}

impl<T: PartialEq> Selection<T> {
    pub fn admits(&self, value: &T) -> bool {
        match self {
            Selection::All => true,
            Selection::Only(selected) => selected == value,
        }
    }

    pub fn is_all(&self) -> bool {
        matches!(self, Selection::All)
    }
}

impl<T: Clone + PartialEq> Selection<T> {
    /// Step through `options`, wrapping back to `All` after the last one.
    pub fn next_in(&self, options: &[T]) -> Self {
        let next_index = match self {
            Selection::All => 0,
            Selection::Only(current) => match options.iter().position(|o| o == current) {
                Some(i) => i + 1,
                None => options.len(),
            },
        };
        options
            .get(next_index)
            .cloned()
            .map(Selection::Only)
            .unwrap_or(Selection::All)
    }
}

impl<T: fmt::Display> fmt::Display for Selection<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Selection::All => write!(f, "{}", ALL_KEYWORD),
            Selection::Only(value) => write!(f, "{}", value),
        }
    }
}

impl<T> FromStr for Selection<T>
where
    T: FromStr<Err = NexusError>,
{
    type Err = NexusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case(ALL_KEYWORD) {
            Ok(Selection::All)
        } else {
            s.parse().map(Selection::Only)
        }
    }
}

/// Parse a date selection. Any label other than `ALL` is taken verbatim.
pub fn parse_date_selection(s: &str) -> Selection<String> {
    if s.trim().eq_ignore_ascii_case(ALL_KEYWORD) {
        Selection::All
    } else {
        Selection::Only(s.to_string())
    }
}

/// The current filter selection.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FilterCriteria {
    pub search: String,
    pub category: Selection<Category>,
    pub status: Selection<Status>,
    pub date: Selection<String>,
}

impl FilterCriteria {
    /// True when every item passes.
    pub fn is_unfiltered(&self) -> bool {
        self.search.is_empty()
            && self.category.is_all()
            && self.status.is_all()
            && self.date.is_all()
    }
}

/// Whether one item satisfies all four criteria.
pub fn matches(item: &RoadmapItem, criteria: &FilterCriteria) -> bool {
    let matches_search = if criteria.search.is_empty() {
        true
    } else {
        let query = criteria.search.to_lowercase();
        item.title.to_lowercase().contains(&query)
            || item.description.to_lowercase().contains(&query)
    };
    let matches_category = criteria.category.admits(&item.category);
    let matches_status = criteria.status.admits(&item.status);
    let matches_date = match &criteria.date {
        Selection::All => true,
        Selection::Only(date) => item.date.as_deref() == Some(date.as_str()),
    };

    matches_search && matches_category && matches_status && matches_date
}

/// The items that pass `criteria`, in their original relative order.
pub fn visible<'a>(items: &'a [RoadmapItem], criteria: &FilterCriteria) -> Vec<&'a RoadmapItem> {
    let result: Vec<_> = items
        .iter()
        .filter(|item| matches(item, criteria))
        .collect();
    tracing::debug!(total = items.len(), visible = result.len(), "Applied filter");
    result
}

/// Distinct non-empty date labels present in `items`, sorted ascending.
pub fn available_dates(items: &[RoadmapItem]) -> Vec<String> {
    items
        .iter()
        .filter_map(|item| item.date.as_deref())
        .filter(|date| !date.is_empty())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .map(str::to_string)
        .collect()
}

/// Items partitioned into one bucket per status.
///
/// All four buckets always exist, possibly empty.
#[derive(Debug, Clone, Default)]
pub struct StatusBoard<'a> {
    buckets: [Vec<&'a RoadmapItem>; 4],
}

impl<'a> StatusBoard<'a> {
    pub fn bucket(&self, status: Status) -> &[&'a RoadmapItem] {
        &self.buckets[status.index()]
    }

    /// Buckets in kanban column order.
    pub fn columns(&self) -> impl Iterator<Item = (Status, &[&'a RoadmapItem])> + '_ {
        Status::BOARD_ORDER
            .into_iter()
            .map(move |status| (status, self.bucket(status)))
    }

    /// Total number of items across all buckets.
    pub fn len(&self) -> usize {
        self.buckets.iter().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Group items by status, keeping their relative order inside each bucket.
pub fn group_by_status<'a, I>(items: I) -> StatusBoard<'a>
where
    I: IntoIterator<Item = &'a RoadmapItem>,
{
    let mut board = StatusBoard::default();
    for item in items {
        board.buckets[item.status.index()].push(item);
    }
    board
}
