//! AI Summary HTTP Server
//!
//! Actix-web REST API for summary generation and editor settings

use actix_cors::Cors;
use actix_files::Files;
use actix_web::{web, App, HttpServer};
use aisummary_common::{AppConfig, Result};
use aisummary_llm::{ProviderRegistry, SummaryGenerator};
use std::sync::Arc;
use tracing::info;
use tracing_actix_web::TracingLogger;

mod routes;
mod settings_store;
mod state;
mod types;

pub use settings_store::SettingsStore;
pub use state::AppState;

/// Start the HTTP server with the given configuration
pub async fn start_server(config: AppConfig) -> Result<()> {
    config.validate()?;

    let registry = Arc::new(ProviderRegistry::from_config(&config)?);
    let generator = Arc::new(SummaryGenerator::new(registry));
    let state = Arc::new(AppState::new(config.clone(), generator)?);

    let bind_address = config.server_bind_address();
    let static_dir = config.static_dir.clone();
    info!("Starting server on {}", bind_address);

    HttpServer::new(move || {
        // Permissive CORS so an embedding CMS on another origin can call the API
        App::new()
            .wrap(TracingLogger::default())
            .wrap(Cors::permissive())
            .app_data(web::Data::new(state.clone()))
            .service(
                web::scope("/api")
                    .service(routes::summary::generate_summary)
                    .service(routes::settings::get_settings)
                    .service(routes::settings::update_settings)
                    .service(routes::system::health),
            )
            .service(Files::new("/", static_dir.clone()).index_file("index.html"))
    })
    .bind(&bind_address)?
    .run()
    .await?;

    Ok(())
}
