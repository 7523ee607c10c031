use anyhow::Context;
use tokio::net::TcpListener;

use crate::auth::TokenService;
use crate::config::AppConfig;
use crate::database::{self, schema};
use crate::routes;
use crate::state::AppState;

pub async fn handle(config: AppConfig, port: Option<u16>) -> anyhow::Result<()> {
    // Fails before binding when the signing secret is unusable.
    let tokens = TokenService::new(&config.security.token_secret)?;

    let pool = database::connect(&config.database.url, config.database.max_connections).await?;
    schema::migrate(&pool).await?;

    let app = routes::app(AppState::new(pool.clone(), tokens));

    let bind_addr = format!("0.0.0.0:{}", port.unwrap_or(config.server.port));
    let listener = TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("failed to bind {bind_addr}"))?;

    tracing::info!(%bind_addr, "Dinodex API listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    pool.close().await;
    tracing::info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "could not listen for ctrl-c");
        std::future::pending::<()>().await;
    }
}
