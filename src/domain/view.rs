//! View snapshots for the current-events and past-events screens
//!
//! Each snapshot holds everything a renderer needs, already derived by the engine.
//! Renderers never filter, sort or count on their own.

use std::fmt::{self, Display};

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use tracing::{Level, event};

use crate::domain::{
    constant::view,
    engine::{
        aggregate_stats, apply_filters, exclude_featured, extract_categories, partition_current, partition_past,
        select_featured, with_status
    },
    event::{Event, EventStatus},
    filter::FilterState,
    stats::EventStats
};

/// Layouts offered by the current-events view.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum CurrentLayout {
    #[default]
    Grid,
    Timeline,
    Featured
}

/// Layouts offered by the past-events view.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum PastLayout {
    #[default]
    Grid,
    List
}

impl Display for CurrentLayout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CurrentLayout::Grid => f.write_str("grid"),
            CurrentLayout::Timeline => f.write_str("timeline"),
            CurrentLayout::Featured => f.write_str("featured")
        }
    }
}

impl Display for PastLayout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PastLayout::Grid => f.write_str("grid"),
            PastLayout::List => f.write_str("list")
        }
    }
}

/// Title and hint shown when a view has nothing to list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EmptyState {
    pub title:       &'static str,
    pub description: &'static str,
    /// Offer to reset the filters
    pub offer_clear: bool
}

/// Everything the current-events screen shows.
#[derive(Debug, Clone, Serialize)]
pub struct CurrentView {
    pub layout:             CurrentLayout,
    pub filters:            FilterState,
    /// Soonest upcoming event, chosen from the unfiltered current list
    pub featured:           Option<Event>,
    pub stats:              EventStats,
    pub categories:         Vec<String>,
    /// Filtered events minus the featured one
    pub events:             Vec<Event>,
    /// Number of events matching the filters, featured included
    pub matched:            usize,
    /// Number of current events before filtering
    pub total:              usize,
    pub has_active_filters: bool
}

impl CurrentView {
    pub fn is_empty(&self) -> bool {
        self.matched == 0
    }

    pub fn empty_state(&self) -> Option<EmptyState> {
        self.is_empty().then(|| EmptyState {
            title:       "No events found",
            description: "Try adjusting your filters or search terms to find more events.",
            offer_clear: self.has_active_filters
        })
    }

    /// "Showing X of Y current events", only when something matched.
    pub fn summary(&self) -> Option<String> {
        (!self.is_empty()).then(|| format!("Showing {} of {} current events", self.matched, self.total))
    }
}

/// Everything the past-events screen shows.
#[derive(Debug, Clone, Serialize)]
pub struct PastView {
    pub layout:     PastLayout,
    pub filters:    FilterState,
    pub stats:      EventStats,
    pub categories: Vec<String>,
    pub events:     Vec<Event>,
    /// Number of completed events before filtering
    pub total:      usize
}

impl PastView {
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn empty_state(&self) -> Option<EmptyState> {
        self.is_empty().then_some(EmptyState {
            title:       "No past events found",
            description: "We haven't completed any events in this category yet.",
            offer_clear: false
        })
    }
}

/// Derive the current-events screen from the full event list.
pub fn derive_current_view(events: &[Event], filters: &FilterState, layout: CurrentLayout) -> CurrentView {
    let current = partition_current(events);
    let categories = extract_categories(&current);
    let upcoming = with_status(&current, EventStatus::Upcoming);
    let featured = select_featured(&upcoming).cloned();
    let stats = aggregate_stats(&current);
    let filtered = apply_filters(&current, filters);
    let body = exclude_featured(&filtered, featured.as_ref().map(|e| e.id.as_str()));

    event!(
        Level::DEBUG,
        event = view::CURRENT_DERIVED,
        layout = %layout,
        total = current.len(),
        matched = filtered.len(),
        featured = featured.as_ref().map(|e| e.id.as_str()).unwrap_or("none")
    );

    CurrentView {
        layout,
        filters: filters.clone(),
        featured,
        stats,
        categories,
        events: body,
        matched: filtered.len(),
        total: current.len(),
        has_active_filters: filters.has_active_filters()
    }
}

/// Derive the past-events screen; the status clause does not apply here.
pub fn derive_past_view(events: &[Event], filters: &FilterState, layout: PastLayout) -> PastView {
    let past = partition_past(events);
    let filters = filters.without_status();
    let categories = extract_categories(&past);
    let stats = aggregate_stats(&past);
    let filtered = apply_filters(&past, &filters);

    event!(Level::DEBUG, event = view::PAST_DERIVED, layout = %layout, total = past.len(), matched = filtered.len());

    PastView { layout, filters, stats, categories, events: filtered, total: past.len() }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{
        event::fixtures::{event, titled, with_attendees},
        filter::{FilterAction, StatusFilter}
    };

    fn board() -> Vec<Event> {
        vec![
            with_attendees(event("1", EventStatus::Completed, "March 15, 2024", "Guidance"), 85),
            with_attendees(event("2", EventStatus::Completed, "September 5, 2024", "Celebration"), 150),
            titled(event("3", EventStatus::Upcoming, "January 15, 2025", "Competition"), "Code Fiesta 2025", "Coding"),
            titled(event("4", EventStatus::Upcoming, "February 20, 2025", "Workshop"), "Web Dev Workshop", "React"),
            titled(event("5", EventStatus::Upcoming, "March 10, 2025", "Workshop"), "AI/ML Symposium", "AI trends"),
            with_attendees(event("6", EventStatus::Ongoing, "December 20, 2024", "Competition"), 45),
        ]
    }

    fn ids(events: &[Event]) -> Vec<&str> {
        events.iter().map(|e| e.id.as_str()).collect()
    }

    #[test]
    fn test_current_view_with_default_filters() {
        let view = derive_current_view(&board(), &FilterState::default(), CurrentLayout::Grid);

        assert_eq!(view.featured.as_ref().map(|e| e.id.as_str()), Some("3"));
        assert_eq!(ids(&view.events), vec!["4", "5", "6"]);
        assert_eq!(view.matched, 4);
        assert_eq!(view.total, 4);
        assert_eq!(view.categories, vec!["Competition", "Workshop"]);
        assert_eq!(view.stats.upcoming, 3);
        assert_eq!(view.stats.ongoing, 1);
        assert_eq!(view.stats.completed, 0);
        assert_eq!(view.stats.total_attendees, 45);
        assert!(!view.has_active_filters);
        assert_eq!(view.summary().as_deref(), Some("Showing 4 of 4 current events"));
        assert!(view.empty_state().is_none());
    }

    #[test]
    fn test_featured_comes_from_unfiltered_list() {
        let filters = FilterState::default().reduce(FilterAction::SetCategory("Workshop".into()));
        let view = derive_current_view(&board(), &filters, CurrentLayout::Timeline);

        assert_eq!(view.featured.as_ref().map(|e| e.id.as_str()), Some("3"));
        assert_eq!(ids(&view.events), vec!["4", "5"]);
        assert_eq!(view.summary().as_deref(), Some("Showing 2 of 4 current events"));
    }

    #[test]
    fn test_featured_only_match_is_not_empty() {
        let filters = FilterState::default().reduce(FilterAction::SetSearch("fiesta".to_string()));
        let view = derive_current_view(&board(), &filters, CurrentLayout::Grid);

        assert!(view.events.is_empty());
        assert_eq!(view.matched, 1);
        assert!(!view.is_empty());
        assert_eq!(view.summary().as_deref(), Some("Showing 1 of 4 current events"));
    }

    #[test]
    fn test_empty_current_view_offers_clear_when_filtered() {
        let filters = FilterState::default().reduce(FilterAction::SetSearch("zzz".to_string()));
        let view = derive_current_view(&board(), &filters, CurrentLayout::Grid);

        let empty = view.empty_state().expect("empty state");
        assert_eq!(empty.title, "No events found");
        assert!(empty.offer_clear);
        assert!(view.summary().is_none());
    }

    #[test]
    fn test_empty_catalog_has_no_clear_offer() {
        let view = derive_current_view(&[], &FilterState::default(), CurrentLayout::Featured);
        assert!(view.featured.is_none());
        assert_eq!(view.stats, EventStats::default());
        assert!(!view.empty_state().expect("empty state").offer_clear);
    }

    #[test]
    fn test_ongoing_status_filter_keeps_featured_out_of_body() {
        let filters = FilterState::default().reduce(FilterAction::SetStatus(StatusFilter::Only(EventStatus::Ongoing)));
        let view = derive_current_view(&board(), &filters, CurrentLayout::Grid);
        assert_eq!(ids(&view.events), vec!["6"]);
        assert_eq!(view.featured.as_ref().map(|e| e.id.as_str()), Some("3"));
    }

    #[test]
    fn test_past_view_ignores_status_filter() {
        let filters = FilterState::default().reduce(FilterAction::SetStatus(StatusFilter::Only(EventStatus::Upcoming)));
        let view = derive_past_view(&board(), &filters, PastLayout::List);

        assert_eq!(ids(&view.events), vec!["1", "2"]);
        assert!(view.filters.status.is_all());
        assert_eq!(view.categories, vec!["Guidance", "Celebration"]);
        assert_eq!(view.stats.completed, 2);
        assert_eq!(view.stats.total_attendees, 235);
    }

    #[test]
    fn test_past_view_category_filter_and_empty_state() {
        let filters = FilterState::default().reduce(FilterAction::SetCategory("Workshop".into()));
        let view = derive_past_view(&board(), &filters, PastLayout::Grid);

        assert!(view.is_empty());
        assert_eq!(view.total, 2);
        assert_eq!(view.empty_state().map(|e| e.title), Some("No past events found"));
    }

    #[test]
    fn test_layout_does_not_change_derivation() {
        let filters = FilterState::default();
        let grid = derive_current_view(&board(), &filters, CurrentLayout::Grid);
        let timeline = derive_current_view(&board(), &filters, CurrentLayout::Timeline);
        assert_eq!(grid.events, timeline.events);
        assert_eq!(grid.featured, timeline.featured);
    }
}
