use std::io::Write;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::{
    adapter::terminal::TerminalRenderer,
    domain::{
        error::EventsError,
        event::{CallToAction, Event},
        stats::EventStats,
        view::{CurrentView, PastView}
    },
    port::render::Renderer
};

/// Output formats for rendered views
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Tables, cards and timelines
    #[default]
    Table,
    /// Pretty-printed JSON
    Json
}

#[derive(Serialize)]
struct FeaturedCard<'a> {
    #[serde(flatten)]
    event:          &'a Event,
    call_to_action: CallToAction
}

#[derive(Serialize)]
struct LabelledStats<'a> {
    view:         &'a str,
    #[serde(flatten)]
    stats:        &'a EventStats,
    total_events: usize
}

/// Writes views as pretty-printed JSON documents
#[derive(Debug, Default)]
pub struct JsonRenderer;

impl JsonRenderer {
    pub fn new() -> Self {
        Self
    }

    fn write<T: Serialize + ?Sized>(&self, out: &mut dyn Write, value: &T) -> Result<(), EventsError> {
        serde_json::to_writer_pretty(&mut *out, value).map_err(|e| EventsError::Render(e.to_string()))?;
        writeln!(out).map_err(|e| EventsError::Render(e.to_string()))
    }
}

impl Renderer for JsonRenderer {
    fn render_current(&self, out: &mut dyn Write, view: &CurrentView) -> Result<(), EventsError> {
        self.write(out, view)
    }

    fn render_past(&self, out: &mut dyn Write, view: &PastView) -> Result<(), EventsError> {
        self.write(out, view)
    }

    fn render_featured(&self, out: &mut dyn Write, featured: Option<&Event>) -> Result<(), EventsError> {
        let card = featured.map(|event| FeaturedCard { event, call_to_action: event.call_to_action() });
        self.write(out, &card)
    }

    fn render_stats(&self, out: &mut dyn Write, label: &str, stats: &EventStats) -> Result<(), EventsError> {
        self.write(out, &LabelledStats { view: label, stats, total_events: stats.total_events() })
    }

    fn render_categories(&self, out: &mut dyn Write, categories: &[String]) -> Result<(), EventsError> {
        self.write(out, categories)
    }
}

/// Factory for creating renderers based on the requested format
pub struct RendererFactory;

impl RendererFactory {
    pub fn create(format: OutputFormat, color: bool) -> Box<dyn Renderer> {
        match format {
            OutputFormat::Table => Box::new(TerminalRenderer::new(color)),
            OutputFormat::Json => Box::new(JsonRenderer::new())
        }
    }
}
