use std::{
    collections::HashSet,
    path::{Path, PathBuf},
    sync::Arc
};

use async_trait::async_trait;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use tracing::{Level, event};

use crate::{
    domain::{
        constant::source,
        error::EventsError,
        event::{Event, EventCatalog}
    },
    port::source::EventSource
};

/// Catalog bundled with the binary, used by the `sample` source
const SAMPLE_CATALOG: &str = include_str!("../../resource/events.yaml");

/// Event source backends
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum EventSourceType {
    /// Built-in sample catalog
    #[default]
    Sample,
    /// YAML or JSON catalog file
    File
}

impl std::fmt::Display for EventSourceType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EventSourceType::Sample => f.write_str("sample"),
            EventSourceType::File => f.write_str("file")
        }
    }
}

/// Serves the catalog compiled into the binary
#[derive(Debug, Default)]
pub struct SampleEventSource;

impl SampleEventSource {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl EventSource for SampleEventSource {
    async fn fetch_events(&self) -> Result<Vec<Event>, EventsError> {
        let catalog: EventCatalog = serde_yaml::from_str(SAMPLE_CATALOG)?;
        validate_catalog(&catalog.events)?;
        Ok(catalog.events)
    }

    fn source_name(&self) -> &'static str {
        "sample"
    }
}

/// Reads a catalog file with an `events:` list
///
/// `.json` files are parsed as JSON, everything else as YAML.
#[derive(Debug, Clone)]
pub struct FileEventSource {
    path: PathBuf
}

impl FileEventSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn parse(&self, content: &str) -> Result<EventCatalog, EventsError> {
        let is_json = self.path.extension().is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

        let parsed: Result<EventCatalog, EventsError> = if is_json {
            serde_json::from_str(content).map_err(EventsError::from)
        } else {
            serde_yaml::from_str(content).map_err(EventsError::from)
        };

        parsed.map_err(|e| {
            EventsError::Serialization(format!("Failed to parse catalog {}: {}", self.path.display(), e))
        })
    }
}

#[async_trait]
impl EventSource for FileEventSource {
    async fn fetch_events(&self) -> Result<Vec<Event>, EventsError> {
        event!(Level::DEBUG, event = source::FETCH_STARTED, path = %self.path.display());

        let content = tokio::fs::read_to_string(&self.path).await.map_err(|e| {
            event!(Level::WARN, event = source::FETCH_FAILED, path = %self.path.display(), error = %e);
            EventsError::FileSystem(format!("Failed to read catalog {}: {}", self.path.display(), e))
        })?;

        let catalog = self.parse(&content)?;
        validate_catalog(&catalog.events)?;

        event!(Level::DEBUG, event = source::FETCH_COMPLETED, path = %self.path.display(), count = catalog.events.len());
        Ok(catalog.events)
    }

    fn source_name(&self) -> &'static str {
        "file"
    }
}

/// Every event needs a non-empty id that no other event uses.
fn validate_catalog(events: &[Event]) -> Result<(), EventsError> {
    let mut seen = HashSet::new();

    for (position, item) in events.iter().enumerate() {
        if item.id.trim().is_empty() {
            return Err(EventsError::Validation(format!("Event at position {} has an empty id", position + 1)));
        }
        if !seen.insert(item.id.as_str()) {
            event!(Level::WARN, event = source::DUPLICATE_ID, id = %item.id);
            return Err(EventsError::Validation(format!("Duplicate event id '{}'", item.id)));
        }
    }

    Ok(())
}

/// Factory for creating event sources based on configuration
pub struct EventSourceFactory;

impl EventSourceFactory {
    pub fn create(source_type: EventSourceType, catalog: Option<&Path>) -> Result<Arc<dyn EventSource>, EventsError> {
        match source_type {
            EventSourceType::Sample => Ok(Arc::new(SampleEventSource::new())),
            EventSourceType::File => {
                let path = catalog.ok_or_else(|| {
                    EventsError::Configuration(
                        "The file source needs a catalog path (--catalog or `eb config set-catalog`)".to_string()
                    )
                })?;
                Ok(Arc::new(FileEventSource::new(path)))
            }
        }
    }
}
