//! Backend entry-point: loads settings, installs tracing, and serves the CMS API.

mod server;

use actix_web::web;
use ortho_config::OrthoConfig;
use tracing::info;

use burzcontent::inbound::http::health::HealthState;
use burzcontent::settings::ServerSettings;
use burzcontent::telemetry;
use server::{ServerConfig, create_server};

/// Application bootstrap.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    let settings = ServerSettings::load_from_iter(std::env::args_os())
        .map_err(|e| std::io::Error::other(format!("failed to load settings: {e}")))?;
    let environment = settings
        .environment()
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidInput, e))?;
    telemetry::init(environment.log_format());

    let bind_addr = settings
        .bind_addr()
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidInput, e))?;
    info!(?environment, %bind_addr, "starting burzcontent");

    let health_state = web::Data::new(HealthState::new());
    create_server(health_state, ServerConfig::new(bind_addr))?.await
}
