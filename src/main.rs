mod alert;
mod catalog;
mod chat;
mod cli;
mod config;
mod display;
mod error;
mod merge;
mod models;
mod publish;
mod renderer;
mod scrapers;
mod server;
mod state;
mod text;

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::display::ColorMode;

#[derive(Parser)]
#[command(name = "toolscout")]
#[command(about = "Discover new AI tools, keep a curated catalog and chat with it", long_about = None)]
struct Cli {
    /// When to use styled terminal output
    #[arg(long, global = true, value_enum, default_value_t = ColorMode::Auto)]
    color: ColorMode,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Configuration commands
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
    /// State management commands
    State {
        #[command(subcommand)]
        command: StateCommands,
    },
    /// Fetch AI tools from Product Hunt and GitHub Trending
    Scrape {
        /// Path to config file
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Only run specific sources (producthunt, github)
        #[arg(long)]
        only: Option<String>,
    },
    /// Deduplicate and sort the catalog, record new tools
    Merge {
        /// Path to config file
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
    /// Email new tools, then commit and push the catalog
    Alert {
        /// Path to config file
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Skip the email
        #[arg(long)]
        no_email: bool,

        /// Skip the git commit
        #[arg(long)]
        no_commit: bool,

        /// Commit without pushing
        #[arg(long)]
        no_push: bool,
    },
    /// Run scrape, merge and alert
    Daily {
        /// Path to config file
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
    /// List tools in the catalog
    Tools {
        /// Path to config file
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Category filter (e.g. finance, content)
        #[arg(long)]
        category: Option<String>,

        /// Free-text search over name and description
        #[arg(short, long)]
        query: Option<String>,

        /// Maximum number of tools to show
        #[arg(short, long)]
        limit: Option<usize>,
    },
    /// Ask the chatbot a question
    Ask {
        /// Path to config file
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// The question, e.g. "Show me finance tools"
        prompt: String,

        /// Category to use when the question names none
        #[arg(long)]
        category: Option<String>,
    },
    /// Start the web chat UI
    Serve {
        /// Path to config file
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Address to bind (overrides config)
        #[arg(long)]
        host: Option<String>,

        /// Port to bind (overrides config)
        #[arg(short, long)]
        port: Option<u16>,
    },
}

#[derive(Subcommand)]
enum ConfigCommands {
    /// Initialize toolscout.toml configuration file
    Init {
        /// Path where to create the config file
        #[arg(long)]
        path: Option<PathBuf>,
    },
}

#[derive(Subcommand)]
enum StateCommands {
    /// Clear pending alerts left by the last merge
    Reset {
        /// Path to the config file (defaults to toolscout.toml)
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
}

fn init_tracing() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    init_tracing();

    let cli = Cli::parse();
    let color = cli.color;

    let result = match cli.command {
        Commands::Config { command } => match command {
            ConfigCommands::Init { path } => cli::config::init(path),
        },
        Commands::State { command } => match command {
            StateCommands::Reset { config } => cli::state::reset(config),
        },
        Commands::Scrape { config, only } => cli::scrape::run(config, only).await,
        Commands::Merge { config } => cli::merge::run(config),
        Commands::Alert {
            config,
            no_email,
            no_commit,
            no_push,
        } => cli::alert::run(config, no_email, no_commit, no_push),
        Commands::Daily { config } => cli::daily::run(config).await,
        Commands::Tools {
            config,
            category,
            query,
            limit,
        } => cli::tools::list(config, category, query, limit, color),
        Commands::Ask {
            config,
            prompt,
            category,
        } => cli::ask::run(config, prompt, category, color).await,
        Commands::Serve { config, host, port } => cli::serve::run(config, host, port).await,
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
