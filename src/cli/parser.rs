use clap::{Parser, Subcommand};

/// Command-line interface definition for rStatusboard
/// CLI application to keep a board of timed statuses in a JSON file
#[derive(Parser)]
#[command(
    name = "rstatusboard",
    version = env!("CARGO_PKG_VERSION"),
    about = "A small status board CLI: timed statuses (icon, description, start, duration) stored as JSON",
    long_about = None
)]
pub struct Cli {
    /// Override the status file path (useful for tests or a second board).
    /// Relative paths are resolved against the current directory.
    #[arg(global = true, long = "file")]
    pub file: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the configuration and an empty status file
    Init,

    /// Manage the configuration file (view or edit)
    Config {
        /// Print the current configuration to stdout
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        /// Edit the configuration file with your preferred editor
        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        /// Specify the editor to use (overrides $EDITOR/$VISUAL)
        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Add a status to the board
    Add {
        /// What the status means (e.g. "Deep work")
        description: String,

        /// Icon shown next to the description (default from config)
        #[arg(long = "icon", short = 'i')]
        icon: Option<String>,

        /// Start time: "YYYY-MM-DD HH:MM", ISO-8601, or "HH:MM" for today
        #[arg(long = "start", short = 's', help = "Start time (default: now)")]
        start: Option<String>,

        /// Duration in hours (1-168, default from config)
        #[arg(long = "duration", short = 'd')]
        duration: Option<u32>,
    },

    /// List statuses with their board number
    List {
        /// Only statuses active at the reference time
        #[arg(long, conflicts_with = "expired")]
        active: bool,

        /// Only statuses expired at the reference time
        #[arg(long)]
        expired: bool,

        /// Reference time instead of now ("YYYY-MM-DD HH:MM", ISO-8601 or "HH:MM")
        #[arg(long)]
        at: Option<String>,
    },

    /// Show the statuses active right now
    Now {
        /// Show every active status instead of collapsing after `max_shown`
        #[arg(long)]
        all: bool,

        /// Reference time instead of now
        #[arg(long)]
        at: Option<String>,
    },

    /// Delete a status by its board number (see `list`)
    Del {
        /// Board number as printed by `list` (starting at 1)
        number: usize,
    },

    /// Delete every status
    Clear,
}
