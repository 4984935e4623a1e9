//! CMS entry-point: loads settings, opens the document root and credential
//! file, and serves the pages.

mod server;

use std::sync::Arc;

use actix_web::web;
use mockable::DefaultEnv;
use ortho_config::OrthoConfig;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use cms::config::CmsSettings;
use cms::domain::DocumentService;
use cms::inbound::http::health::HealthState;
use cms::inbound::http::session_config::{BuildMode, session_settings_from_env};
use cms::inbound::http::state::HttpState;
use cms::inbound::http::views::Views;
use cms::outbound::credentials::YamlCredentialStore;
use cms::outbound::fs::FsDocumentRepository;

use server::{ServerConfig, create_server};

fn startup_error(context: &str, error: impl std::fmt::Display) -> std::io::Error {
    std::io::Error::other(format!("{context}: {error}"))
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

    let settings = CmsSettings::load_from_iter(std::env::args_os())
        .map_err(|e| startup_error("configuration", e))?;
    let bind_addr = settings
        .bind_addr()
        .map_err(|e| startup_error("configuration", e))?;
    let session = session_settings_from_env(&DefaultEnv::new(), BuildMode::from_debug_assertions())
        .map_err(|e| startup_error("session configuration", e))?;

    let repository = FsDocumentRepository::open(settings.data_dir())
        .map_err(|e| startup_error("document root", e))?;
    let credentials = YamlCredentialStore::load(&settings.users_file())
        .map_err(|e| startup_error("credentials", e))?;
    let views = Views::new().map_err(|e| startup_error("templates", e))?;
    info!(
        data_dir = %repository.path().display(),
        users = credentials.len(),
        %bind_addr,
        "starting cms"
    );

    let service = Arc::new(DocumentService::new(Arc::new(repository)));
    let http_state = HttpState::new(
        service.clone(),
        service,
        Arc::new(credentials),
        Arc::new(views),
    );

    let health_state = web::Data::new(HealthState::new());
    let server = create_server(
        health_state,
        ServerConfig::new(session, bind_addr, http_state),
    )?;
    server.await
}
