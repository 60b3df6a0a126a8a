use clap::{Parser, Subcommand};

use crate::domain::DEFAULT_NUM_ARTICLES;

#[derive(Parser)]
#[command(name = "newsdigest")]
#[command(about = "Multi-source news digest with summarization and email delivery")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Build a digest for a topic and email it
    Send {
        /// Topic to search for
        #[arg(short, long)]
        query: String,

        /// Recipient email address
        #[arg(short, long)]
        email: String,

        /// Number of articles to include
        #[arg(short, long, default_value_t = DEFAULT_NUM_ARTICLES)]
        num_articles: usize,
    },

    /// Process a JSON digest request ({"query", "email", "num_articles"})
    Request {
        /// Path to the request file (reads stdin if not specified)
        path: Option<String>,
    },

    /// Build a digest and print it without sending anything
    Preview {
        /// Topic to search for
        #[arg(short, long)]
        query: String,

        /// Number of articles to include
        #[arg(short, long, default_value_t = DEFAULT_NUM_ARTICLES)]
        num_articles: usize,
    },

    /// List configured news sources in priority order
    Sources,
}
