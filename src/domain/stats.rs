//! Aggregate counters shown above each events view

use serde::{Deserialize, Serialize};
use tabled::Tabled;

/// Per-status event counts plus the attendee total.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventStats {
    pub upcoming:        usize,
    pub ongoing:         usize,
    pub completed:       usize,
    /// Sum of attendees, absent counts as zero
    pub total_attendees: u64
}

impl EventStats {
    pub fn total_events(&self) -> usize {
        self.upcoming + self.ongoing + self.completed
    }

    /// One display row per counter, in board order.
    pub fn rows(&self) -> Vec<StatRow> {
        vec![
            StatRow::new("Upcoming Events", self.upcoming as u64),
            StatRow::new("Ongoing Events", self.ongoing as u64),
            StatRow::new("Completed Events", self.completed as u64),
            StatRow::new("Total Attendees", self.total_attendees),
        ]
    }
}

/// A labelled counter as rendered in the stats table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Tabled)]
pub struct StatRow {
    #[tabled(rename = "Metric")]
    pub label: &'static str,
    #[tabled(rename = "Value")]
    pub value: u64
}

impl StatRow {
    pub fn new(label: &'static str, value: u64) -> Self {
        Self { label, value }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rows_follow_board_order() {
        let stats = EventStats { upcoming: 3, ongoing: 1, completed: 2, total_attendees: 280 };
        let rows = stats.rows();

        assert_eq!(rows.len(), 4);
        assert_eq!(rows[0], StatRow::new("Upcoming Events", 3));
        assert_eq!(rows[1], StatRow::new("Ongoing Events", 1));
        assert_eq!(rows[2], StatRow::new("Completed Events", 2));
        assert_eq!(rows[3], StatRow::new("Total Attendees", 280));
        assert_eq!(stats.total_events(), 6);
    }
}
