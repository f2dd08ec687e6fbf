// CLI module - process entry points

use clap::{Parser, Subcommand};

/// Catalog backend CLI
#[derive(Parser, Debug)]
#[command(name = "catalog")]
#[command(about = "Printing catalog REST API", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Apply migrations and run the HTTP server (default)
    Serve,

    /// Apply pending database migrations and exit
    Migrate,
}

impl Cli {
    /// The subcommand to run, defaulting to `serve`
    pub fn command(&self) -> &Commands {
        self.command.as_ref().unwrap_or(&Commands::Serve)
    }
}
