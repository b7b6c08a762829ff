use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use wishmeta_extract::{MetadataPipeline, PageClient};

#[derive(Parser)]
#[command(name = "wishmeta-cli", about = "Wishlist page metadata tools", version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Fetch a page and print its extracted metadata as JSON.
    Fetch {
        /// Absolute http(s) URL of the page.
        url: String,
        /// Override the configured fetch timeout.
        #[arg(long)]
        timeout_secs: Option<u64>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = wishmeta_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let cli = Cli::parse();
    match cli.command {
        Command::Fetch { url, timeout_secs } => {
            let timeout = timeout_secs.unwrap_or(config.fetch_timeout_secs);
            let client = PageClient::new(timeout, &config.fetch_user_agent)?;
            let pipeline = MetadataPipeline::new(client);
            let metadata = pipeline.run(&url).await?;
            println!("{}", serde_json::to_string_pretty(&metadata)?);
        }
    }
    Ok(())
}
