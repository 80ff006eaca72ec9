//! filetype-server binary - serves `POST /file` classification over HTTP.

use clap::Parser;
use filetype::server::{self, ServerConfig};

#[tokio::main]
async fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = ServerConfig::parse();

    if let Err(e) = server::run(config).await {
        log::error!("Server error: {e}");
        std::process::exit(e.exit_code());
    }
}
