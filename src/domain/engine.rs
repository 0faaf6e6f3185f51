//! Event derivation engine
//!
//! Pure functions turning a flat event list plus filter parameters into the subsets,
//! facets, featured pick and counts shown by the views. Nothing here performs I/O or
//! mutates its input, and no function can fail.

use std::collections::HashSet;

use tracing::{Level, event};

use crate::domain::{
    constant::engine,
    date::{compare_event_dates, parse_event_date},
    event::{Event, EventStatus},
    filter::FilterState,
    stats::EventStats
};

/// Upcoming and ongoing events, in input order.
pub fn partition_current(events: &[Event]) -> Vec<Event> {
    events.iter().filter(|e| e.is_current()).cloned().collect()
}

/// Completed events, in input order.
pub fn partition_past(events: &[Event]) -> Vec<Event> {
    events.iter().filter(|e| e.is_past()).cloned().collect()
}

/// Events with exactly the given status, in input order.
pub fn with_status(events: &[Event], status: EventStatus) -> Vec<Event> {
    events.iter().filter(|e| e.status == status).cloned().collect()
}

/// Distinct categories in order of first appearance.
pub fn extract_categories(events: &[Event]) -> Vec<String> {
    let mut seen = HashSet::new();
    events
        .iter()
        .filter(|e| seen.insert(e.category.as_str()))
        .map(|e| e.category.clone())
        .collect()
}

/// The earliest-dated event of an upcoming-only list.
///
/// Single linear scan; the running minimum is only replaced on strictly-earlier, so
/// the first of several equal dates wins. Unparseable dates order after every valid
/// one, so they are picked only when nothing valid exists (first one seen).
pub fn select_featured(upcoming: &[Event]) -> Option<&Event> {
    let mut featured: Option<(&Event, _)> = None;

    for candidate in upcoming {
        let when = parse_event_date(&candidate.date);
        if when.is_none() {
            event!(Level::DEBUG, event = engine::DATE_UNPARSEABLE, id = %candidate.id, date = %candidate.date);
        }

        featured = match featured {
            Some((current, current_when)) if !compare_event_dates(when, current_when).is_lt() => {
                Some((current, current_when))
            }
            _ => Some((candidate, when))
        };
    }

    match featured {
        Some((chosen, _)) => {
            event!(Level::DEBUG, event = engine::FEATURED_SELECTED, id = %chosen.id, date = %chosen.date);
            Some(chosen)
        }
        None => {
            event!(Level::DEBUG, event = engine::FEATURED_NONE);
            None
        }
    }
}

/// Events satisfying every clause of `filters`, in input order.
pub fn apply_filters(events: &[Event], filters: &FilterState) -> Vec<Event> {
    let filtered: Vec<Event> = events.iter().filter(|e| filters.matches(e)).cloned().collect();

    event!(
        Level::TRACE,
        event = engine::FILTERS_APPLIED,
        search = %filters.search,
        category = %filters.category,
        status = %filters.status,
        input = events.len(),
        output = filtered.len()
    );

    filtered
}

/// Drop the featured event from a body list; no-op without a matching id.
pub fn exclude_featured(events: &[Event], featured_id: Option<&str>) -> Vec<Event> {
    match featured_id {
        Some(id) => events.iter().filter(|e| e.id != id).cloned().collect(),
        None => events.to_vec()
    }
}

/// Per-status counts and the attendee total.
pub fn aggregate_stats(events: &[Event]) -> EventStats {
    events.iter().fold(EventStats::default(), |mut stats, e| {
        match e.status {
            EventStatus::Upcoming => stats.upcoming += 1,
            EventStatus::Ongoing => stats.ongoing += 1,
            EventStatus::Completed => stats.completed += 1
        }
        stats.total_attendees += u64::from(e.attendees.unwrap_or(0));
        stats
    })
}
