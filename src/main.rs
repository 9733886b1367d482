use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use zill_dashboard::{api, config::Config, gateway::Gateway, view::DashboardController};

#[derive(Parser)]
#[command(name = "zill")]
#[command(about = "Personal productivity dashboard with a chat assistant")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Serve the dashboard
    Serve {
        /// Address to bind
        #[arg(long, default_value = "127.0.0.1")]
        host: String,

        /// Port for the dashboard
        #[arg(short, long, default_value = "3000")]
        port: u16,
    },
}

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::new(
        std::env::var("RUST_LOG")
            .unwrap_or_else(|_| "zill_dashboard=debug,tower_http=debug".into()),
    );

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}

async fn serve(host: &str, port: u16) -> anyhow::Result<()> {
    let config = Config::from_env()?;
    tracing::debug!(?config, "Loaded configuration");
    if config.completion_api_key.is_none() {
        tracing::warn!("ZILL_COMPLETION_API_KEY is not set; the assistant will be unavailable");
    }

    let controller = DashboardController::new(Gateway::new(&config));
    let app = api::create_router(controller);

    let listener = tokio::net::TcpListener::bind(format!("{}:{}", host, port)).await?;
    tracing::info!("Zill dashboard listening on http://{}:{}", host, port);

    axum::serve(listener, app).await?;
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing();

    match cli.command {
        Some(Commands::Serve { host, port }) => serve(&host, port).await,
        None => serve("127.0.0.1", 3000).await,
    }
}
