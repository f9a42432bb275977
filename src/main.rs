//! Service entry-point: wires the people endpoints and health probes.

use std::net::{IpAddr, SocketAddr};
use std::sync::Arc;

use actix_web::web;
use clap::Parser;
use tracing::warn;
use tracing_subscriber::{fmt, EnvFilter};

use people_service::inbound::http::health::HealthState;
use people_service::inbound::http::state::HttpState;
use people_service::outbound::persistence::InMemoryPersonStore;
use people_service::server::{run, ServerConfig};

/// Command-line options for the HTTP server.
#[derive(Debug, Parser)]
#[command(name = "people-service", about = "Web resource manager for people")]
struct Cli {
    /// Address to bind the HTTP listener to.
    #[arg(long, default_value = "0.0.0.0")]
    host: String,

    /// Port to bind the HTTP listener to.
    #[arg(long, default_value_t = 8080)]
    port: u16,
}

/// Application bootstrap.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let cli = Cli::parse();
    let host: IpAddr = cli
        .host
        .parse()
        .map_err(|e| std::io::Error::other(format!("invalid host {}: {e}", cli.host)))?;
    let config = ServerConfig::new(SocketAddr::new(host, cli.port));

    let store = Arc::new(InMemoryPersonStore::seeded());
    let http_state = web::Data::new(HttpState::new(store));
    let health_state = web::Data::new(HealthState::new());

    let server = run(&config, http_state, health_state.clone())?;
    health_state.mark_ready();
    server.await
}
