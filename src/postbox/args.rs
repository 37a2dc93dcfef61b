use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "postbox")]
#[command(about = "Command-line client for a remote posts API", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List all posts
    #[command(alias = "ls")]
    List,

    /// View a post in full
    #[command(alias = "v")]
    View {
        /// Id of the post
        id: u64,
    },

    /// Create a new post
    #[command(alias = "n")]
    Create {
        /// Title of the post
        title: String,

        /// Body of the post
        body: String,
    },

    /// Edit an existing post
    #[command(alias = "e")]
    Edit {
        /// Id of the post
        id: u64,

        /// New title
        title: String,

        /// New body
        body: String,
    },

    /// Search posts by title or body
    Search { term: String },

    /// Interactive session: local drafts, pending edits and live search
    Shell,

    /// Get or set configuration
    Config {
        /// Configuration key (base-url, debounce-ms)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },
}
