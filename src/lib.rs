//! # Event Board
//!
//! A library for deriving the sections of an events board from a flat list of events.
//!
//! This crate provides functionality to:
//! - Split events into current (upcoming, ongoing) and past (completed) sections
//! - Filter a section by free-text search, category and status
//! - Pick the featured upcoming event and keep it out of the main listing
//! - Aggregate per-status counters and attendee totals
//! - Load events from the bundled sample or a YAML/JSON catalog and render them as tables or JSON

// Public API modules
pub mod adapter;
pub mod cli;
pub mod config;
pub mod domain;
pub mod logging;
pub mod port;

// Re-export commonly used types
pub use cli::{EventsCli, EventsCommand};
pub use config::{Config, get_config_file_path, load_config};
pub use domain::{
    engine::{aggregate_stats, apply_filters, exclude_featured, extract_categories, partition_current, partition_past, select_featured},
    error::EventsError,
    event::{Event, EventCatalog, EventStatus},
    filter::{CategoryFilter, FilterAction, FilterState, StatusFilter},
    stats::EventStats,
    view::{CurrentLayout, CurrentView, PastLayout, PastView, derive_current_view, derive_past_view}
};
