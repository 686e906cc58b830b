//! JobStream entry-point: loads settings, prepares storage and serves HTTP.

mod server;

use std::net::{IpAddr, SocketAddr};
use std::sync::Arc;

use actix_web::web;
use color_eyre::eyre::{Context, Result, eyre};
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use jobstream::config::ServiceSettings;
use jobstream::domain::{IdentityRegistryService, JobCatalogService};
use jobstream::inbound::http::health::HealthState;
use jobstream::inbound::http::state::HttpState;
use jobstream::outbound::crypto::Argon2CredentialHasher;
use jobstream::outbound::persistence::{
    DbPool, DieselJobRepository, DieselUserRepository, run_pending_migrations,
};
use ortho_config::OrthoConfig;
use server::{ServerConfig, create_server};

#[actix_web::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let settings =
        ServiceSettings::load().map_err(|err| eyre!("failed to load configuration: {err}"))?;
    let pool_config = settings.pool_config()?;

    let database_url = pool_config.database_url().to_owned();
    tokio::task::spawn_blocking(move || run_pending_migrations(&database_url))
        .await
        .wrap_err("migration task panicked")??;

    let pool = DbPool::new(pool_config)
        .await
        .wrap_err("failed to create database pool")?;
    let hasher = Argon2CredentialHasher::new(settings.hasher_config())
        .wrap_err("invalid password hashing parameters")?;

    let identity = IdentityRegistryService::new(
        Arc::new(DieselUserRepository::new(pool.clone())),
        Arc::new(hasher),
    );
    let jobs = JobCatalogService::new(Arc::new(DieselJobRepository::new(pool)));
    let http_state = HttpState::new(Arc::new(identity), Arc::new(jobs));

    let host: IpAddr = settings
        .host()
        .parse()
        .wrap_err_with(|| format!("invalid listen host {}", settings.host()))?;
    let bind_addr = SocketAddr::new(host, settings.port());

    let health_state = web::Data::new(HealthState::new());
    let server = create_server(health_state, ServerConfig::new(bind_addr, http_state))?;
    info!(%bind_addr, "listening");
    server.await?;
    Ok(())
}
