use std::io::Write;

use crate::domain::{
    error::EventsError,
    event::Event,
    stats::EventStats,
    view::{CurrentView, PastView}
};

/// Port for presenting derived views to the user
///
/// Implementations only format what they are given; every list, count and pick
/// is computed before it reaches a renderer.
pub trait Renderer: Send + Sync {
    /// Render the current-events screen in its selected layout
    fn render_current(&self, out: &mut dyn Write, view: &CurrentView) -> Result<(), EventsError>;

    /// Render the past-events screen in its selected layout
    fn render_past(&self, out: &mut dyn Write, view: &PastView) -> Result<(), EventsError>;

    /// Render the featured event card, or a notice when there is none
    fn render_featured(&self, out: &mut dyn Write, featured: Option<&Event>) -> Result<(), EventsError>;

    /// Render the aggregate counters
    fn render_stats(&self, out: &mut dyn Write, label: &str, stats: &EventStats) -> Result<(), EventsError>;

    /// Render the category facets of a view
    fn render_categories(&self, out: &mut dyn Write, categories: &[String]) -> Result<(), EventsError>;
}
