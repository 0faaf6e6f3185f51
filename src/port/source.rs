use async_trait::async_trait;

use crate::domain::{error::EventsError, event::Event};

/// Port for fetching the event list shown on the board
#[async_trait]
pub trait EventSource: Send + Sync {
    /// Fetch every known event, in catalog order
    async fn fetch_events(&self) -> Result<Vec<Event>, EventsError>;

    /// Short name of the source for logs and diagnostics
    fn source_name(&self) -> &'static str;
}
