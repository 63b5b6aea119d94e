use anyhow::Result;
use clap::{Parser, Subcommand};
use std::net::SocketAddr;
use std::sync::Arc;
use symptom_triage::{TriageBot, config::Config, console, http};
use tracing::info;

#[derive(Parser)]
#[command(name = "symptom-triage")]
#[command(about = "Hospital reception symptom triage chatbot", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Chat on the console (default)
    Chat,
    /// Serve POST /chat over HTTP
    Serve {
        /// Address to bind, overrides config and TRIAGE_HTTP_BIND
        #[arg(long)]
        bind: Option<SocketAddr>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = Config::load().map_err(|e| {
        eprintln!("Failed to load configuration: {}", e);
        e
    })?;

    // Logs go to stderr so the console transcript stays clean
    tracing_subscriber::fmt()
        .with_env_filter(config.runtime.log_level.as_str())
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();

    let bot: Arc<TriageBot> = Arc::new(TriageBot::default());

    match cli.command.unwrap_or(Commands::Chat) {
        Commands::Chat => {
            info!("Starting console chat");
            tokio::task::spawn_blocking(move || console::run_stdio(&*bot)).await??;
        }
        Commands::Serve { bind } => {
            if let Some(addr) = bind {
                config.server.http_bind = addr;
            }
            http::start_http_server(&config, bot).await?;
        }
    }

    Ok(())
}
