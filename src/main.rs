mod commands;
mod config;
mod endpoints;
mod error;
mod models;
mod queries;
mod request;
mod services;

use crate::config::Settings;
use crate::services::store::SessionFactory;
use actix_web::middleware::NormalizePath;
use actix_web::web::Data;
use actix_web::{middleware, App, HttpServer};
use anyhow::Context;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let settings = Settings::from_env();
    log::info!(
        "Using database {} with up to {} connections",
        settings.database_url,
        settings.max_connections
    );

    let sessions = SessionFactory::connect(&settings)
        .await
        .with_context(|| format!("Failed to open database {}", settings.database_url))?;

    let server = HttpServer::new(move || {
        App::new()
            .wrap(NormalizePath::trim())
            .wrap(middleware::Logger::default())
            .app_data(Data::new(sessions.clone()))
            .configure(endpoints::configure)
    })
    .bind((settings.host.as_str(), settings.port))
    .with_context(|| format!("Failed to bind {}:{}", settings.host, settings.port))?
    .run();

    // On server start
    tokio::join!(server, on_server_start(&settings))
        .0
        .context("Server stopped with an error")
}

async fn on_server_start(settings: &Settings) {
    log::info!("Inventory server started on {}:{}", settings.host, settings.port);
}
