//! User Directory - terminal browser for random and saved user profiles
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use userdir_cli::commands::{error_message, Command, OutputFormat, Session};
use userdir_client::{ApiError, UserDirectoryClient};

#[derive(Parser)]
#[command(name = "userdir")]
#[command(about = "Browse random user profiles and manage saved ones", long_about = None)]
struct Cli {
    /// Configuration file path
    #[arg(short, long, global = true, env = "USERDIR_CONFIG")]
    config: Option<PathBuf>,

    /// Print JSON instead of text
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "userdir=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let format = if cli.json {
        OutputFormat::Json
    } else {
        OutputFormat::Text
    };

    if let Err(err) = run(cli.config, cli.command, format).await {
        tracing::debug!(error = ?err, "Command failed");

        match (format, err.downcast_ref::<ApiError>()) {
            (OutputFormat::Json, Some(api)) => {
                let summary = serde_json::to_string(&api.summary())
                    .unwrap_or_else(|_| api.message());
                eprintln!("{}", summary);
            }
            _ => eprintln!("Error: {}", error_message(&err)),
        }

        std::process::exit(1);
    }
}

async fn run(
    config_path: Option<PathBuf>,
    command: Command,
    format: OutputFormat,
) -> anyhow::Result<()> {
    let config = userdir_cli::config::load(config_path.as_deref())?;
    tracing::debug!(api_url = %config.api_url, "Loaded configuration");

    let client = UserDirectoryClient::new(config)?;
    let mut session = Session::new(&client, format);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    session.run(command, &mut out).await
}
