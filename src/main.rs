use std::{env, net::SocketAddr, sync::Arc};

use crate::{
    app::{env::Envy, router::build_router},
    settings::models::key_store::KeyStore,
};

mod app;
mod settings;
mod video;

#[cfg(test)]
mod test_util;

#[derive(Clone)]
pub struct AppState {
    pub envy: Arc<Envy>,
    pub key_store: Arc<KeyStore>,
}

#[tokio::main]
async fn main() {
    // tracing
    tracing_subscriber::fmt::init();

    // environment
    let app_env = env::var("APP_ENV").unwrap_or("development".to_string());
    let _ = dotenvy::from_filename(format!(".env.{}", app_env));
    let envy = match envy::from_env::<Envy>() {
        Ok(config) => config,
        Err(e) => panic!("{:#?}", e),
    };

    // properties
    let port = envy.port();
    tracing::info!("starting in {} mode", envy.app_env);

    let key_store = KeyStore::open(envy.storage_path())
        .await
        .expect("failed to open key store");

    tracing::info!("opened key store at {:?}", key_store.path());

    let state = AppState {
        envy: Arc::new(envy),
        key_store: Arc::new(key_store),
    };

    let app = build_router(state);

    let addr = SocketAddr::from(([127, 0, 0, 1], port));
    tracing::info!("listening on {}", addr);

    let server = axum::Server::bind(&addr)
        .serve(app.into_make_service())
        .with_graceful_shutdown(shutdown_signal());

    if let Err(e) = server.await {
        tracing::error!("server error: {}", e);
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("failed to listen for shutdown signal: {}", e);
    }

    tracing::info!("shutting down");
}
