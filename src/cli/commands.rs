//! CLI command definitions

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "jotr")]
#[command(about = "Terminal note-taking application", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Notes file to use (overrides JOTR_FILE and jotr.toml)
    #[arg(short, long, value_name = "PATH", global = true)]
    pub file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add a note
    Add {
        /// Note title
        title: String,

        /// Note body
        body: String,
    },

    /// Replace the title and body of an existing note
    Edit {
        /// Id of the note to edit
        id: u64,

        /// New title
        title: String,

        /// New body
        body: String,
    },

    /// Delete a note
    Delete {
        /// Id of the note to delete
        id: u64,
    },

    /// List notes, optionally restricted to a date range
    List {
        /// Start date (YYYY-MM-DD)
        #[arg(long, value_name = "DATE")]
        from: Option<String>,

        /// End date (YYYY-MM-DD), inclusive
        #[arg(long, value_name = "DATE")]
        to: Option<String>,
    },

    /// View or modify configuration
    Config {
        /// Config key to get or set
        key: Option<String>,

        /// Value to set (if provided, sets the key)
        value: Option<String>,

        /// List all configuration
        #[arg(short, long)]
        list: bool,
    },
}
