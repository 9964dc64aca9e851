use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "opora")]
#[command(author, version, about = "Telegram customer-support relay bot", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the bot in long-polling mode
    Run {
        /// Path to the JSON config store (overrides the DATA_FILE env var)
        #[arg(long)]
        data_file: Option<String>,
    },
}

impl Cli {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
