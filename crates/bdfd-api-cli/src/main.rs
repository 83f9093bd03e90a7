//! `bdfd` — query the Bot Designer For Discord public API from the terminal.

use std::process::ExitCode;

use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;

use bdfd_api::BdfdClient;
use bdfd_api_cli::commands::{self, ResourceQuery};
use bdfd_api_cli::config::client_config;

#[derive(Parser)]
#[command(
    name = "bdfd",
    about = "Look up BDFD functions and callbacks, and check node status",
    version
)]
struct Cli {
    /// Output results as JSON (machine-readable)
    #[arg(long, global = true)]
    json: bool,

    /// Log level (trace, debug, info, warn, error).
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,

    /// Public API base URL. Also reads BDFD_API_URL.
    #[arg(long, global = true)]
    api_url: Option<String>,

    /// Status page URL. Also reads BDFD_STATUS_URL.
    #[arg(long, global = true)]
    status_url: Option<String>,

    /// Request timeout in milliseconds (transport default when unset).
    #[arg(long, global = true)]
    timeout: Option<u64>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Query functions
    Functions {
        #[command(subcommand)]
        action: ResourceAction,
    },
    /// Query callbacks
    Callbacks {
        #[command(subcommand)]
        action: ResourceAction,
    },
    /// Show default and high performance node status
    Nodes,
    /// Generate shell completion scripts
    Completions {
        /// Shell type (bash, zsh, fish, powershell, elvish).
        shell: Shell,
    },
}

#[derive(Subcommand)]
enum ResourceAction {
    /// Show one entry; partial tags are completed (e.g. "$addBu")
    Info {
        /// Full or partial tag
        tag: String,
    },
    /// Show every entry
    List,
    /// Print every tag
    Tags,
}

impl From<ResourceAction> for ResourceQuery {
    fn from(action: ResourceAction) -> Self {
        match action {
            ResourceAction::Info { tag } => ResourceQuery::Info(tag),
            ResourceAction::List => ResourceQuery::List,
            ResourceAction::Tags => ResourceQuery::Tags,
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&cli.log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let config = client_config(cli.api_url.as_deref(), cli.status_url.as_deref(), cli.timeout);
    tracing::debug!("api base {}, status page {}", config.api_base, config.status_url);

    match cli.command {
        Commands::Completions { shell } => {
            clap_complete::generate(shell, &mut Cli::command(), "bdfd", &mut std::io::stdout());
            Ok(ExitCode::SUCCESS)
        }
        Commands::Functions { action } => {
            let client = BdfdClient::new(config)?;
            commands::run_resource(client.functions(), action.into(), cli.json).await
        }
        Commands::Callbacks { action } => {
            let client = BdfdClient::new(config)?;
            commands::run_resource(client.callbacks(), action.into(), cli.json).await
        }
        Commands::Nodes => {
            let client = BdfdClient::new(config)?;
            commands::run_nodes(&client, cli.json).await
        }
    }
}
