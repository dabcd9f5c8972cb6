use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "playhub")]
#[command(author, version, about = "Browse and play a curated catalog of web games - GUI-first application", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List games in the catalog
    List {
        /// Only show games matching this search query
        #[arg(short, long)]
        query: Option<String>,
    },

    /// Show information about a game
    Info {
        /// Id of the game
        id: String,
    },

    /// Open a game in the system browser
    Open {
        /// Id of the game to open
        id: String,
    },

    /// Show status and configuration
    Status,

    /// Launch the GUI
    Gui,
}
