//! Terminal implementation of the renderer port

use std::io::Write;

use crossterm::style::{Color, Stylize, style};
use tabled::{Table, Tabled, settings::Style};

use crate::{
    domain::{
        error::EventsError,
        event::{Event, EventStatus},
        filter::FilterState,
        stats::EventStats,
        view::{CurrentLayout, CurrentView, EmptyState, PastLayout, PastView}
    },
    port::render::Renderer
};

/// Row of the grid layouts
#[derive(Tabled)]
struct EventRow {
    #[tabled(rename = "Title")]
    title:    String,
    #[tabled(rename = "Date")]
    date:     String,
    #[tabled(rename = "Time")]
    time:     String,
    #[tabled(rename = "Location")]
    location: String,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Status")]
    status:   EventStatus,
    #[tabled(rename = "Action")]
    action:   String
}

impl From<&Event> for EventRow {
    fn from(event: &Event) -> Self {
        let cta = event.call_to_action();
        let action = if cta.enabled { cta.label.to_string() } else { format!("{} (closed)", cta.label) };
        Self {
            title: event.title.clone(),
            date: event.date.clone(),
            time: event.time.clone(),
            location: event.location.clone(),
            category: event.category.clone(),
            status: event.status,
            action
        }
    }
}

#[derive(Tabled)]
struct CategoryRow {
    #[tabled(rename = "#")]
    position: usize,
    #[tabled(rename = "Category")]
    name:     String
}

/// Renders views as tables, cards and timelines for a terminal
pub struct TerminalRenderer {
    color: bool
}

impl TerminalRenderer {
    pub fn new(color: bool) -> Self {
        Self { color }
    }

    /// Renderer without ANSI escapes
    pub fn plain() -> Self {
        Self::new(false)
    }

    fn paint(&self, text: &str, color: Color) -> String {
        if self.color { style(text).with(color).to_string() } else { text.to_string() }
    }

    fn heading(&self, text: &str) -> String {
        if self.color { style(text).bold().to_string() } else { text.to_string() }
    }

    fn status_badge(&self, status: EventStatus) -> String {
        let color = match status {
            EventStatus::Upcoming => Color::Green,
            EventStatus::Ongoing => Color::Yellow,
            EventStatus::Completed => Color::Grey
        };
        self.paint(&format!("[{}]", status), color)
    }

    fn category_badge(&self, category: &str) -> String {
        let color = match category.to_lowercase().as_str() {
            "competition" => Color::Magenta,
            "workshop" => Color::DarkYellow,
            "celebration" => Color::Red,
            "guidance" => Color::Cyan,
            _ => Color::Blue
        };
        self.paint(&format!("[{}]", category), color)
    }

    fn action_line(&self, event: &Event) -> String {
        let cta = event.call_to_action();
        let label = if !cta.enabled {
            self.paint(&format!("{} (closed)", cta.label), Color::DarkGrey)
        } else if cta.primary {
            self.heading(cta.label)
        } else {
            cta.label.to_string()
        };
        match &event.registration_url {
            Some(url) if cta.enabled => format!("→ {} {}", label, url),
            _ => format!("→ {}", label)
        }
    }

    /// Multi-line card used by the featured highlight and the `featured` layout.
    fn card(&self, event: &Event, with_description: bool) -> Vec<String> {
        let mut lines = vec![format!(
            "  {}  {} {}",
            self.heading(&event.title),
            self.status_badge(event.status),
            self.category_badge(&event.category)
        )];
        if with_description && !event.description.is_empty() {
            lines.push(format!("  {}", event.description));
        }
        lines.push(format!("  Date:      {}", event.date));
        if !event.time.is_empty() {
            lines.push(format!("  Time:      {}", event.time));
        }
        if !event.location.is_empty() {
            lines.push(format!("  Location:  {}", event.location));
        }
        if let Some(attendees) = event.displayed_attendees() {
            lines.push(format!("  Attendees: {}", attendees));
        }
        lines.push(format!("  {}", self.action_line(event)));
        lines
    }

    fn timeline(&self, events: &[Event]) -> Vec<String> {
        let mut lines = Vec::new();
        for event in events {
            lines.push(format!("  ● {}", self.paint(&event.date, Color::Blue)));
            lines.push(format!(
                "  │ {} {} {}",
                self.heading(&event.title),
                self.status_badge(event.status),
                self.category_badge(&event.category)
            ));
            let details: Vec<&str> =
                [event.time.as_str(), event.location.as_str()].into_iter().filter(|s| !s.is_empty()).collect();
            if !details.is_empty() {
                lines.push(format!("  │ {}", details.join(" · ")));
            }
            if let Some(attendees) = event.displayed_attendees() {
                lines.push(format!("  │ {} attendees", attendees));
            }
            lines.push(format!("  │ {}", self.action_line(event)));
            lines.push("  │".to_string());
        }
        lines
    }

    fn list(&self, events: &[Event]) -> Vec<String> {
        events
            .iter()
            .map(|event| {
                let mut line = format!("  {} — {} {}", event.date, event.title, self.category_badge(&event.category));
                if !event.location.is_empty() {
                    line.push_str(&format!(" · {}", event.location));
                }
                if let Some(attendees) = event.displayed_attendees() {
                    line.push_str(&format!(" · {} attendees", attendees));
                }
                line
            })
            .collect()
    }

    fn grid(&self, events: &[Event]) -> String {
        let mut table = Table::new(events.iter().map(EventRow::from));
        table.with(Style::rounded());
        table.to_string()
    }

    fn stats_table(&self, stats: &EventStats) -> String {
        let mut table = Table::new(stats.rows());
        table.with(Style::rounded());
        table.to_string()
    }

    fn active_filters(&self, filters: &FilterState, with_status: bool) -> Option<String> {
        let mut parts = Vec::new();
        if !filters.search.is_empty() {
            parts.push(format!("search \"{}\"", filters.search));
        }
        if !filters.category.is_all() {
            parts.push(format!("category {}", filters.category));
        }
        if with_status && !filters.status.is_all() {
            parts.push(format!("status {}", filters.status));
        }
        (!parts.is_empty()).then(|| format!("Filters: {}", parts.join(" · ")))
    }

    fn empty(&self, empty: &EmptyState) -> Vec<String> {
        let mut lines = vec![self.heading(empty.title), empty.description.to_string()];
        if empty.offer_clear {
            lines.push("Clear the filters (drop --search/--category/--status) to see every event.".to_string());
        }
        lines
    }

    fn emit(out: &mut dyn Write, lines: &[String]) -> Result<(), EventsError> {
        for line in lines {
            writeln!(out, "{}", line).map_err(|e| EventsError::Render(e.to_string()))?;
        }
        Ok(())
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new(true)
    }
}

impl Renderer for TerminalRenderer {
    fn render_current(&self, out: &mut dyn Write, view: &CurrentView) -> Result<(), EventsError> {
        let mut lines = vec![self.heading("Current Events"), String::new()];

        if let Some(featured) = &view.featured {
            lines.push(self.paint("★ Featured Event", Color::Yellow));
            lines.extend(self.card(featured, true));
            lines.push(String::new());
        }

        lines.push(self.stats_table(&view.stats));
        if let Some(filters) = self.active_filters(&view.filters, true) {
            lines.push(filters);
        }
        lines.push(format!("Layout: {}", view.layout));
        lines.push(String::new());

        match view.empty_state() {
            Some(empty) => lines.extend(self.empty(&empty)),
            None => {
                if !view.events.is_empty() {
                    match view.layout {
                        CurrentLayout::Grid => lines.push(self.grid(&view.events)),
                        CurrentLayout::Timeline => lines.extend(self.timeline(&view.events)),
                        CurrentLayout::Featured => {
                            for event in &view.events {
                                lines.extend(self.card(event, true));
                                lines.push(String::new());
                            }
                        }
                    }
                }
                if let Some(summary) = view.summary() {
                    lines.push(String::new());
                    lines.push(summary);
                }
            }
        }

        Self::emit(out, &lines)
    }

    fn render_past(&self, out: &mut dyn Write, view: &PastView) -> Result<(), EventsError> {
        let mut lines = vec![self.heading("Past Events"), String::new(), self.stats_table(&view.stats)];

        if let Some(filters) = self.active_filters(&view.filters, false) {
            lines.push(filters);
        }
        lines.push(format!("Layout: {}", view.layout));
        lines.push(String::new());

        match view.empty_state() {
            Some(empty) => lines.extend(self.empty(&empty)),
            None => match view.layout {
                PastLayout::Grid => lines.push(self.grid(&view.events)),
                PastLayout::List => lines.extend(self.list(&view.events))
            }
        }

        Self::emit(out, &lines)
    }

    fn render_featured(&self, out: &mut dyn Write, featured: Option<&Event>) -> Result<(), EventsError> {
        let lines = match featured {
            Some(event) => {
                let mut lines = vec![self.paint("★ Featured Event", Color::Yellow)];
                lines.extend(self.card(event, true));
                lines
            }
            None => vec!["No upcoming event to feature.".to_string()]
        };
        Self::emit(out, &lines)
    }

    fn render_stats(&self, out: &mut dyn Write, label: &str, stats: &EventStats) -> Result<(), EventsError> {
        Self::emit(out, &[self.heading(label), self.stats_table(stats)])
    }

    fn render_categories(&self, out: &mut dyn Write, categories: &[String]) -> Result<(), EventsError> {
        if categories.is_empty() {
            return Self::emit(out, &["No categories.".to_string()]);
        }
        let rows = categories
            .iter()
            .enumerate()
            .map(|(index, name)| CategoryRow { position: index + 1, name: name.clone() });
        let mut table = Table::new(rows);
        table.with(Style::rounded());
        Self::emit(out, &[table.to_string()])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{
        event::fixtures::{event, titled, with_attendees},
        filter::FilterAction,
        view::{derive_current_view, derive_past_view}
    };

    fn board() -> Vec<Event> {
        vec![
            with_attendees(
                titled(event("1", EventStatus::Completed, "March 15, 2024", "Guidance"), "ICPC Guidance", "Tips"),
                85
            ),
            titled(event("3", EventStatus::Upcoming, "January 15, 2025", "Competition"), "Code Fiesta", "Coding"),
            titled(event("4", EventStatus::Upcoming, "February 20, 2025", "Workshop"), "Web Dev Workshop", "React"),
            with_attendees(
                titled(event("6", EventStatus::Ongoing, "December 20, 2024", "Competition"), "Hackathon", "OSS"),
                45
            ),
        ]
    }

    fn render(f: impl FnOnce(&TerminalRenderer, &mut Vec<u8>) -> Result<(), EventsError>) -> String {
        let renderer = TerminalRenderer::plain();
        let mut out = Vec::new();
        f(&renderer, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_current_grid_shows_featured_once_and_summary() {
        let view = derive_current_view(&board(), &FilterState::default(), CurrentLayout::Grid);
        let text = render(|r, out| r.render_current(out, &view));

        assert!(text.contains("★ Featured Event"));
        assert_eq!(text.matches("Code Fiesta").count(), 1);
        assert!(text.contains("Web Dev Workshop"));
        assert!(text.contains("Hackathon"));
        assert!(!text.contains("ICPC Guidance"));
        assert!(text.contains("Register Now"));
        assert!(text.contains("Join Now"));
        assert!(text.contains("Showing 3 of 3 current events"));
        assert!(!text.contains('\u{1b}'));
    }

    #[test]
    fn test_current_empty_state_offers_clear() {
        let filters = FilterState::default().reduce(FilterAction::SetSearch("zzz".to_string()));
        let view = derive_current_view(&board(), &filters, CurrentLayout::Timeline);
        let text = render(|r, out| r.render_current(out, &view));

        assert!(text.contains("No events found"));
        assert!(text.contains("Clear the filters"));
        assert!(text.contains("Filters: search \"zzz\""));
        assert!(!text.contains("Showing"));
    }

    #[test]
    fn test_timeline_lists_dates_and_attendees() {
        let view = derive_current_view(&board(), &FilterState::default(), CurrentLayout::Timeline);
        let text = render(|r, out| r.render_current(out, &view));

        assert!(text.contains("● February 20, 2025"));
        assert!(text.contains("● December 20, 2024"));
        assert!(text.contains("45 attendees"));
    }

    #[test]
    fn test_past_list_and_empty_state() {
        let view = derive_past_view(&board(), &FilterState::default(), PastLayout::List);
        let text = render(|r, out| r.render_past(out, &view));
        assert!(text.contains("Past Events"));
        assert!(text.contains("March 15, 2024 — ICPC Guidance"));
        assert!(text.contains("85 attendees"));

        let filters = FilterState::default().reduce(FilterAction::SetCategory("Workshop".into()));
        let view = derive_past_view(&board(), &filters, PastLayout::Grid);
        let text = render(|r, out| r.render_past(out, &view));
        assert!(text.contains("No past events found"));
        assert!(!text.contains("Clear the filters"));
    }

    #[test]
    fn test_completed_action_is_closed() {
        let view = derive_past_view(&board(), &FilterState::default(), PastLayout::Grid);
        let text = render(|r, out| r.render_past(out, &view));
        assert!(text.contains("View Details (closed)"));
    }

    #[test]
    fn test_featured_without_event() {
        let text = render(|r, out| r.render_featured(out, None));
        assert_eq!(text.trim(), "No upcoming event to feature.");
    }

    #[test]
    fn test_stats_and_categories_tables() {
        let stats = EventStats { upcoming: 2, ongoing: 1, completed: 1, total_attendees: 130 };
        let text = render(|r, out| r.render_stats(out, "All Events", &stats));
        assert!(text.contains("All Events"));
        assert!(text.contains("Total Attendees"));
        assert!(text.contains("130"));

        let categories = vec!["Competition".to_string(), "Workshop".to_string()];
        let text = render(|r, out| r.render_categories(out, &categories));
        assert!(text.contains("Competition"));
        assert!(text.contains("Workshop"));
    }

    #[test]
    fn test_colored_output_uses_ansi_escapes() {
        let renderer = TerminalRenderer::new(true);
        let mut out = Vec::new();
        renderer.render_featured(&mut out, board().get(1)).unwrap();
        assert!(String::from_utf8(out).unwrap().contains('\u{1b}'));
    }
}
