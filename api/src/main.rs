use std::sync::Arc;

use actix_web::{web, HttpServer};
use dotenvy::dotenv;
use tracing_subscriber::EnvFilter;

use tb_core::services::auth::AuthService;
use tb_core::services::session::SessionService;
use tb_core::services::token::{TokenService, TokenServiceConfig};
use tb_infra::database::connection::DatabasePool;
use tb_infra::database::postgres::PgAccountRepository;
use tb_shared::config::AppConfig;

use tb_api::app::create_app;
use tb_api::routes::AppState;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = AppConfig::from_env();
    if config.tokens.is_using_default_secret() {
        tracing::warn!("signing secrets are not configured; using development defaults");
    }

    let pool = DatabasePool::new(config.database.clone()).await?;
    pool.health_check().await?;

    let repository = Arc::new(PgAccountRepository::new(pool.get_pool().clone()));
    let tokens = Arc::new(TokenService::new(TokenServiceConfig::from(
        config.tokens.clone(),
    )));
    let sessions = Arc::new(SessionService::new(Arc::clone(&repository), tokens));
    let auth = Arc::new(AuthService::new(
        Arc::clone(&repository),
        Arc::clone(&sessions),
    ));

    let state = web::Data::new(AppState::new(auth, sessions, config.cookie.clone()));

    let bind_address = config.server.bind_address();
    tracing::info!(%bind_address, "starting server");

    HttpServer::new(move || create_app(state.clone()))
        .bind(&bind_address)?
        .run()
        .await?;

    Ok(())
}
