//! Filter state owned by a presenting view
//!
//! `FilterState` is an immutable value. Views never mutate it in place; every user
//! action is expressed as a [`FilterAction`] and [`FilterState::reduce`] returns the
//! replacement state.

use std::{
    fmt::{self, Display},
    str::FromStr
};

use serde::{Deserialize, Serialize};

use crate::domain::event::{Event, EventStatus};

/// Sentinel accepted wherever a filter can be switched off.
pub const ALL: &str = "all";

/// Category clause: the `all` sentinel or one exact category label.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "String", from = "String")]
pub enum CategoryFilter {
    #[default]
    All,
    Only(String)
}

impl CategoryFilter {
    pub fn matches(&self, category: &str) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(wanted) => wanted == category
        }
    }

    pub fn is_all(&self) -> bool {
        matches!(self, CategoryFilter::All)
    }
}

impl From<String> for CategoryFilter {
    fn from(value: String) -> Self {
        if value == ALL { CategoryFilter::All } else { CategoryFilter::Only(value) }
    }
}

impl From<&str> for CategoryFilter {
    fn from(value: &str) -> Self {
        CategoryFilter::from(value.to_string())
    }
}

impl From<CategoryFilter> for String {
    fn from(value: CategoryFilter) -> Self {
        value.to_string()
    }
}

impl FromStr for CategoryFilter {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(CategoryFilter::from(s))
    }
}

impl Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CategoryFilter::All => f.write_str(ALL),
            CategoryFilter::Only(category) => f.write_str(category)
        }
    }
}

/// Status clause: the `all` sentinel or one exact status.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum StatusFilter {
    #[default]
    All,
    Only(EventStatus)
}

impl StatusFilter {
    pub fn matches(&self, status: EventStatus) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Only(wanted) => *wanted == status
        }
    }

    pub fn is_all(&self) -> bool {
        matches!(self, StatusFilter::All)
    }
}

impl FromStr for StatusFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case(ALL) {
            return Ok(StatusFilter::All);
        }
        s.parse::<EventStatus>().map(StatusFilter::Only)
    }
}

impl TryFrom<String> for StatusFilter {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<StatusFilter> for String {
    fn from(value: StatusFilter) -> Self {
        value.to_string()
    }
}

impl Display for StatusFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StatusFilter::All => f.write_str(ALL),
            StatusFilter::Only(status) => write!(f, "{}", status)
        }
    }
}

/// The active search/category/status filters of a view.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterState {
    /// Case-insensitive substring matched against title and description
    pub search:   String,
    pub category: CategoryFilter,
    /// Only meaningful for the current-events view
    pub status:   StatusFilter
}

/// A single user action on the filter bar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterAction {
    SetSearch(String),
    SetCategory(CategoryFilter),
    SetStatus(StatusFilter),
    /// Back to empty search and `all` everywhere
    Clear
}

impl FilterState {
    /// Fold a sequence of actions over the default state.
    pub fn from_actions<I>(actions: I) -> Self
    where
        I: IntoIterator<Item = FilterAction>
    {
        actions.into_iter().fold(FilterState::default(), |state, action| state.reduce(action))
    }

    /// Produce the state that replaces `self` after `action`.
    pub fn reduce(&self, action: FilterAction) -> FilterState {
        match action {
            FilterAction::SetSearch(search) => FilterState { search, ..self.clone() },
            FilterAction::SetCategory(category) => FilterState { category, ..self.clone() },
            FilterAction::SetStatus(status) => FilterState { status, ..self.clone() },
            FilterAction::Clear => FilterState::default()
        }
    }

    /// Same filters with the status clause switched off (past-events view).
    pub fn without_status(&self) -> FilterState {
        self.reduce(FilterAction::SetStatus(StatusFilter::All))
    }

    /// True when any clause narrows the result.
    pub fn has_active_filters(&self) -> bool {
        !self.search.is_empty() || !self.category.is_all() || !self.status.is_all()
    }

    /// The AND of the search, category and status clauses.
    pub fn matches(&self, event: &Event) -> bool {
        self.matches_search(event) && self.category.matches(&event.category) && self.status.matches(event.status)
    }

    fn matches_search(&self, event: &Event) -> bool {
        if self.search.is_empty() {
            return true;
        }
        let needle = self.search.to_lowercase();
        event.title.to_lowercase().contains(&needle) || event.description.to_lowercase().contains(&needle)
    }
}
