//! repodump - Export GitHub organization repository metadata to CSV

use clap::Parser;

mod cache;
mod cli;
mod client;
mod config;
mod error;
mod export;
mod flatten;
mod listing;
mod output;

use cli::Cli;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    if cli.debug {
        builder.filter_level(log::LevelFilter::Debug);
    }
    builder.init();

    if let Err(err) = export::run(cli).await {
        eprintln!("Error: {}", err);
        std::process::exit(1);
    }
}
