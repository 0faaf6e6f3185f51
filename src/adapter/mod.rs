//! Adapters - concrete event sources and renderers

pub mod json;
pub mod source;
pub mod terminal;

pub use json::{JsonRenderer, OutputFormat, RendererFactory};
pub use source::{EventSourceFactory, EventSourceType, FileEventSource, SampleEventSource};
pub use terminal::TerminalRenderer;
