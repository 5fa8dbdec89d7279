use axum::{
    Extension, Router,
    routing::{get, post},
};
use std::{net::SocketAddr, str::FromStr, sync::Arc};

use crate::{api, config, error, info, management::CredentialCache};

pub async fn start_api_server(cache: Arc<CredentialCache>) {
    let app = Router::new()
        .route("/health", get(api::health))
        .route(
            "/recommendations",
            post(api::recommendations).layer(Extension(cache)),
        )
        .route("/playlists", post(api::save_playlist));

    let addr = match SocketAddr::from_str(&config::server_addr()) {
        Ok(addr) => addr,
        Err(e) => error!("Failed to parse server address: {}", e),
    };

    info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}
