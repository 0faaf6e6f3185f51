//! Domain Events - Structured log event names for internal monitoring and debugging

/// Catalog source events
pub mod source {
    pub const FETCH_STARTED: &str = "source.fetch_started";
    pub const FETCH_COMPLETED: &str = "source.fetch_completed";
    pub const FETCH_FAILED: &str = "source.fetch_failed";
    pub const DUPLICATE_ID: &str = "source.duplicate_id";
}

/// Derivation engine events
pub mod engine {
    pub const FEATURED_SELECTED: &str = "featured.selected";
    pub const FEATURED_NONE: &str = "featured.none";
    pub const DATE_UNPARSEABLE: &str = "date.unparseable";
    pub const FILTERS_APPLIED: &str = "filters.applied";
}

/// View derivation events
pub mod view {
    pub const CURRENT_DERIVED: &str = "current.derived";
    pub const PAST_DERIVED: &str = "past.derived";
}

/// Configuration events
pub mod config {
    pub const CONFIG_LOADED: &str = "config.loaded";
    pub const CONFIG_CREATED: &str = "config.created";
    pub const CONFIG_SAVED: &str = "config.saved";
}
