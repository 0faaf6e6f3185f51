//! CLI argument parsing

use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand, ValueEnum};

use crate::{
    adapter::{json::OutputFormat, source::EventSourceType},
    domain::{
        filter::{CategoryFilter, FilterAction, FilterState, StatusFilter},
        view::{CurrentLayout, PastLayout}
    }
};

/// Browse current and past events from the terminal
#[derive(Parser, Debug)]
#[command(name = "eb", author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct EventsCli {
    /// Event source (defaults to the configured one, or `file` when --catalog is given)
    #[arg(long, global = true, value_enum)]
    pub source: Option<EventSourceType>,

    /// Catalog file for the `file` source
    #[arg(long, global = true, value_name = "PATH")]
    pub catalog: Option<PathBuf>,

    /// Output format
    #[arg(long, global = true, value_enum)]
    pub format: Option<OutputFormat>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Raise the log level (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Option<EventsCommand>
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum EventsCommand {
    /// Show current (upcoming and ongoing) events
    Current(CurrentArgs),
    /// Show completed events
    Past(PastArgs),
    /// Show the featured event
    Featured,
    /// Show aggregate counters
    Stats {
        /// Events to count
        #[arg(long, value_enum, default_value_t = StatsScope::All)]
        view: StatsScope
    },
    /// List the categories present in a view
    Categories {
        /// Events to collect categories from
        #[arg(long, value_enum, default_value_t = CategoryScope::Current)]
        view: CategoryScope
    },
    /// Configuration management commands
    Config {
        #[command(subcommand)]
        command: ConfigCommands
    }
}

/// Search and category filters shared by the listing commands
#[derive(Args, Debug, Clone, Default)]
pub struct FilterArgs {
    /// Case-insensitive text matched against titles and descriptions
    #[arg(short, long)]
    pub search: Option<String>,

    /// Exact category, or `all`
    #[arg(short, long)]
    pub category: Option<CategoryFilter>
}

impl FilterArgs {
    fn actions(&self) -> Vec<FilterAction> {
        let mut actions = Vec::new();
        if let Some(search) = &self.search {
            actions.push(FilterAction::SetSearch(search.clone()));
        }
        if let Some(category) = &self.category {
            actions.push(FilterAction::SetCategory(category.clone()));
        }
        actions
    }
}

#[derive(Args, Debug, Clone, Default)]
pub struct CurrentArgs {
    #[command(flatten)]
    pub filters: FilterArgs,

    /// Status to show: all, upcoming, ongoing or completed
    #[arg(long)]
    pub status: Option<StatusFilter>,

    /// Layout (defaults to the configured one)
    #[arg(short, long, value_enum)]
    pub layout: Option<CurrentLayout>
}

impl CurrentArgs {
    pub fn filter_state(&self) -> FilterState {
        let mut actions = self.filters.actions();
        if let Some(status) = &self.status {
            actions.push(FilterAction::SetStatus(*status));
        }
        FilterState::from_actions(actions)
    }
}

#[derive(Args, Debug, Clone, Default)]
pub struct PastArgs {
    #[command(flatten)]
    pub filters: FilterArgs,

    /// Layout (defaults to the configured one)
    #[arg(short, long, value_enum)]
    pub layout: Option<PastLayout>
}

impl PastArgs {
    pub fn filter_state(&self) -> FilterState {
        FilterState::from_actions(self.filters.actions())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum StatsScope {
    Current,
    Past,
    All
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum CategoryScope {
    Current,
    Past
}

/// Configuration subcommands
#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show the current configuration
    Show,
    /// Set the default event source
    SetSource {
        #[arg(value_enum, value_name = "SOURCE")]
        kind: EventSourceType
    },
    /// Set the catalog file used by the `file` source
    SetCatalog {
        path: PathBuf
    },
    /// Set the default layouts
    SetLayout {
        /// Layout of `eb current`
        #[arg(long, value_enum)]
        current: Option<CurrentLayout>,
        /// Layout of `eb past`
        #[arg(long, value_enum)]
        past:    Option<PastLayout>
    },
    /// Set the log filter used when RUST_LOG is unset (e.g. `info`, `eventboard=debug`)
    SetLogLevel {
        level: String
    },
    /// Print the config file location
    Path
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::event::EventStatus;

    #[test]
    fn test_no_subcommand_parses() {
        let cli = EventsCli::try_parse_from(["eb"]).unwrap();
        assert!(cli.command.is_none());
        assert_eq!(cli.verbose, 0);
        assert!(cli.format.is_none());
    }

    #[test]
    fn test_current_filters_build_state() {
        let cli = EventsCli::try_parse_from([
            "eb", "current", "--search", "AI", "--category", "Workshop", "--status", "upcoming", "--layout", "timeline"
        ])
        .unwrap();

        let Some(EventsCommand::Current(args)) = cli.command else { panic!("expected current command") };
        let state = args.filter_state();

        assert_eq!(state.search, "AI");
        assert_eq!(state.category, CategoryFilter::Only("Workshop".to_string()));
        assert_eq!(state.status, StatusFilter::Only(EventStatus::Upcoming));
        assert_eq!(args.layout, Some(CurrentLayout::Timeline));
    }

    #[test]
    fn test_all_sentinels_and_defaults() {
        let cli = EventsCli::try_parse_from(["eb", "current", "--category", "all", "--status", "ALL"]).unwrap();
        let Some(EventsCommand::Current(args)) = cli.command else { panic!("expected current command") };

        assert_eq!(args.filter_state(), FilterState::default());
    }

    #[test]
    fn test_unknown_status_is_rejected() {
        assert!(EventsCli::try_parse_from(["eb", "current", "--status", "someday"]).is_err());
        assert!(EventsCli::try_parse_from(["eb", "past", "--layout", "timeline"]).is_err());
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = EventsCli::try_parse_from([
            "eb", "past", "--format", "json", "--no-color", "-vv", "--source", "file", "--catalog", "events.yaml"
        ])
        .unwrap();

        assert_eq!(cli.format, Some(OutputFormat::Json));
        assert!(cli.no_color);
        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.source, Some(EventSourceType::File));
        assert_eq!(cli.catalog, Some(PathBuf::from("events.yaml")));
    }

    #[test]
    fn test_scoped_commands_default() {
        let cli = EventsCli::try_parse_from(["eb", "stats"]).unwrap();
        assert!(matches!(cli.command, Some(EventsCommand::Stats { view: StatsScope::All })));

        let cli = EventsCli::try_parse_from(["eb", "categories", "--view", "past"]).unwrap();
        assert!(matches!(cli.command, Some(EventsCommand::Categories { view: CategoryScope::Past })));
    }

    #[test]
    fn test_config_subcommands() {
        let cli = EventsCli::try_parse_from(["eb", "config", "set-layout", "--past", "list"]).unwrap();
        assert!(matches!(
            cli.command,
            Some(EventsCommand::Config { command: ConfigCommands::SetLayout { current: None, past: Some(PastLayout::List) } })
        ));

        let cli = EventsCli::try_parse_from(["eb", "config", "set-source", "file"]).unwrap();
        assert!(matches!(
            cli.command,
            Some(EventsCommand::Config { command: ConfigCommands::SetSource { kind: EventSourceType::File } })
        ));
    }
}
