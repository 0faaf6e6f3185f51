//! # Event Board CLI
//!
//! Browse the current and past sections of an events board from the terminal.
//!
//! ## Usage
//!
//! ```bash
//! # Current events in the configured layout (same as `eb current`)
//! eb
//!
//! # Upcoming workshops as a timeline
//! eb current --category Workshop --status upcoming --layout timeline
//!
//! # Completed events from your own catalog, as JSON
//! eb past --catalog events.yaml --format json
//!
//! # Make timeline the default layout
//! eb config set-layout --current timeline
//! ```
//!
//! Logs go to stderr; set `RUST_LOG` or pass `-v` to see them.

use clap::Parser;
use eventboard::{
    cli::{
        EventsCli, EventsCommand,
        args::CurrentArgs,
        commands::{
            EventsContext, handle_categories_command, handle_config_command, handle_current_command,
            handle_featured_command, handle_past_command, handle_stats_command
        }
    },
    config::{get_config_file_path, load_config_from},
    domain::error::EventsError,
    logging::init_logging
};

#[tokio::main]
async fn main() -> Result<(), EventsError> {
    let cli = EventsCli::parse();
    let config_path = get_config_file_path()?;
    let config = load_config_from(&config_path)?;

    if let Err(e) = init_logging(&config.log_level, cli.verbose) {
        eprintln!("{}", e);
    }

    let mut stdout = std::io::stdout().lock();

    if let Some(EventsCommand::Config { command }) = &cli.command {
        return handle_config_command(command, &config_path, &mut stdout);
    }

    let context = EventsContext::from_settings(&cli, &config)?;

    match &cli.command {
        Some(EventsCommand::Current(args)) => handle_current_command(&context, args, &mut stdout).await,
        Some(EventsCommand::Past(args)) => handle_past_command(&context, args, &mut stdout).await,
        Some(EventsCommand::Featured) => handle_featured_command(&context, &mut stdout).await,
        Some(EventsCommand::Stats { view }) => handle_stats_command(&context, *view, &mut stdout).await,
        Some(EventsCommand::Categories { view }) => handle_categories_command(&context, *view, &mut stdout).await,
        Some(EventsCommand::Config { .. }) => Ok(()),
        None => handle_current_command(&context, &CurrentArgs::default(), &mut stdout).await
    }
}
