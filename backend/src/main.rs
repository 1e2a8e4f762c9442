//! Todo service entry-point: logging, configuration, storage, HTTP server.

use std::ffi::OsString;

use actix_web::web;
use ortho_config::OrthoConfig;
use tracing::{error, info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use todo_backend::inbound::http::health::HealthState;
use todo_backend::server::{
    ServerConfig, ServiceSettings, StartupError, connect, create_server, prepare_storage,
};

/// Application bootstrap.
///
/// The listener binds before migrations run so health checks answer during startup;
/// `/health/ready` turns 200 only once storage is prepared.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let settings = ServiceSettings::load_from_iter(std::env::args_os().collect::<Vec<OsString>>())
        .map_err(|e| StartupError::config(e.to_string()))?;
    let bind_addr = settings.bind_addr()?;
    info!(
        %bind_addr,
        seed_sample_data = settings.seed_sample_data(),
        "configuration loaded"
    );

    let pool = connect(&settings).await.inspect_err(|e| {
        error!(error = %e, "startup failed");
    })?;

    let health_state = web::Data::new(HealthState::new());
    let server = create_server(health_state.clone(), ServerConfig::new(bind_addr, pool.clone()))?;
    let handle = server.handle();
    let running = actix_web::rt::spawn(server);

    if let Err(e) = prepare_storage(&settings, &pool, &health_state).await {
        error!(error = %e, "startup failed");
        health_state.mark_draining();
        handle.stop(true).await;
        return Err(e.into());
    }
    info!("todo service ready");

    running.await.map_err(std::io::Error::other)?
}
