mod cli;
mod config;
mod error;
mod models;
mod service;

use clap::Parser;
use cli::{App, Cli};
use colored::*;
use config::Config;
use error::Result;
use service::PeerChannel;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    dotenv::dotenv().ok();

    let args = Cli::parse();

    let config = match Config::load() {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {:?}", e);
            eprintln!("{}", e.to_string().red());
            return Err(e.into_process());
        },
    };

    info!("Starting snapshot command (interactive: {})", args.interactive);

    let service = PeerChannel::new(config.clone());
    let app = App::new(config, service);

    let outcome = if args.interactive {
        app.run_interactive().await
    } else {
        app.run(args).await
    };

    if let Err(e) = outcome {
        error!("Command execution failed: {:?}", e);
        eprintln!("{}", e.to_string().red());
        return Err(e);
    }

    Ok(())
}
