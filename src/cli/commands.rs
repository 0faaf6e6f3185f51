//! CLI command handlers

use std::{fmt::Display, io::Write, path::Path, sync::Arc};

use tracing::{Level, event};

use crate::{
    adapter::{
        json::RendererFactory,
        source::{EventSourceFactory, EventSourceType}
    },
    cli::args::{CategoryScope, ConfigCommands, CurrentArgs, EventsCli, PastArgs, StatsScope},
    config::{Config, load_config_from, update_config_at},
    domain::{
        constant::source,
        engine::{aggregate_stats, extract_categories, partition_current, partition_past, select_featured, with_status},
        error::EventsError,
        event::{Event, EventStatus},
        view::{CurrentLayout, PastLayout, derive_current_view, derive_past_view}
    },
    port::{EventSource, Renderer}
};

/// Dependencies shared by the listing commands
pub struct EventsContext {
    source:         Arc<dyn EventSource>,
    renderer:       Box<dyn Renderer>,
    current_layout: CurrentLayout,
    past_layout:    PastLayout
}

impl EventsContext {
    pub fn new(
        source: Arc<dyn EventSource>,
        renderer: Box<dyn Renderer>,
        current_layout: CurrentLayout,
        past_layout: PastLayout
    ) -> Self {
        Self { source, renderer, current_layout, past_layout }
    }

    /// Build the context from the stored config, with command-line flags taking precedence
    pub fn from_settings(cli: &EventsCli, config: &Config) -> Result<Self, EventsError> {
        let kind = cli.source.unwrap_or(if cli.catalog.is_some() { EventSourceType::File } else { config.source });
        let catalog = cli.catalog.as_deref().or(config.catalog_path.as_deref());
        let source = EventSourceFactory::create(kind, catalog)?;

        let color = config.color && !cli.no_color;
        let renderer = RendererFactory::create(cli.format.unwrap_or_default(), color);

        Ok(Self::new(source, renderer, config.current_layout, config.past_layout))
    }

    async fn events(&self) -> Result<Vec<Event>, EventsError> {
        let events = self.source.fetch_events().await?;
        event!(Level::DEBUG, event = source::FETCH_COMPLETED, source = self.source.source_name(), count = events.len());
        Ok(events)
    }
}

/// Handle the current command; also runs when no subcommand is given
pub async fn handle_current_command(
    context: &EventsContext,
    args: &CurrentArgs,
    out: &mut dyn Write
) -> Result<(), EventsError> {
    let events = context.events().await?;
    let layout = args.layout.unwrap_or(context.current_layout);
    let view = derive_current_view(&events, &args.filter_state(), layout);
    context.renderer.render_current(out, &view)
}

/// Handle the past command
pub async fn handle_past_command(
    context: &EventsContext,
    args: &PastArgs,
    out: &mut dyn Write
) -> Result<(), EventsError> {
    let events = context.events().await?;
    let layout = args.layout.unwrap_or(context.past_layout);
    let view = derive_past_view(&events, &args.filter_state(), layout);
    context.renderer.render_past(out, &view)
}

/// Handle the featured command
pub async fn handle_featured_command(context: &EventsContext, out: &mut dyn Write) -> Result<(), EventsError> {
    let events = context.events().await?;
    let upcoming = with_status(&events, EventStatus::Upcoming);
    context.renderer.render_featured(out, select_featured(&upcoming))
}

/// Handle the stats command
pub async fn handle_stats_command(
    context: &EventsContext,
    scope: StatsScope,
    out: &mut dyn Write
) -> Result<(), EventsError> {
    let events = context.events().await?;
    let (label, stats) = match scope {
        StatsScope::Current => ("Current Events", aggregate_stats(&partition_current(&events))),
        StatsScope::Past => ("Past Events", aggregate_stats(&partition_past(&events))),
        StatsScope::All => ("All Events", aggregate_stats(&events))
    };
    context.renderer.render_stats(out, label, &stats)
}

/// Handle the categories command
pub async fn handle_categories_command(
    context: &EventsContext,
    scope: CategoryScope,
    out: &mut dyn Write
) -> Result<(), EventsError> {
    let events = context.events().await?;
    let section = match scope {
        CategoryScope::Current => partition_current(&events),
        CategoryScope::Past => partition_past(&events)
    };
    context.renderer.render_categories(out, &extract_categories(&section))
}

/// Handle config commands against the config file at `config_path`
pub fn handle_config_command(
    command: &ConfigCommands,
    config_path: &Path,
    out: &mut dyn Write
) -> Result<(), EventsError> {
    match command {
        ConfigCommands::Show => {
            let config = load_config_from(config_path)?;
            let content = serde_yaml::to_string(&config)?;
            write_line(out, format!("# {}", config_path.display()))?;
            write!(out, "{}", content).map_err(|e| EventsError::Render(e.to_string()))?;
        }
        ConfigCommands::SetSource { kind } => {
            update_config_at(config_path, |config| {
                config.source = *kind;
                Ok(())
            })?;
            write_line(out, format!("Default source set to {}", kind))?;
        }
        ConfigCommands::SetCatalog { path } => {
            let config = update_config_at(config_path, |config| config.set_catalog_path(path))?;
            if let Some(catalog) = &config.catalog_path {
                write_line(out, format!("Catalog set to {}", catalog.display()))?;
            }
            if config.source != EventSourceType::File {
                write_line(out, "Run `eb config set-source file` to read events from it by default.")?;
            }
        }
        ConfigCommands::SetLayout { current, past } => {
            if current.is_none() && past.is_none() {
                return Err(EventsError::Configuration("Pass --current and/or --past".to_string()));
            }
            let config = update_config_at(config_path, |config| {
                config.set_layouts(*current, *past);
                Ok(())
            })?;
            write_line(out, format!("Layouts set to current: {}, past: {}", config.current_layout, config.past_layout))?;
        }
        ConfigCommands::SetLogLevel { level } => {
            update_config_at(config_path, |config| config.set_log_level(level))?;
            write_line(out, format!("Log level set to {}", level))?;
        }
        ConfigCommands::Path => {
            write_line(out, config_path.display())?;
        }
    }

    Ok(())
}

fn write_line(out: &mut dyn Write, line: impl Display) -> Result<(), EventsError> {
    writeln!(out, "{}", line).map_err(|e| EventsError::Render(e.to_string()))
}
