// rest/mod.rs — HTTP server for the RSVP site.
//
// Axum server, local only by default. Page routes render inline HTML;
// everything under /api/v1 speaks JSON.
//
// Endpoints:
//   GET  /                  homepage (RSVP form)
//   POST /rsvp              submit an RSVP (form-encoded)
//   GET  /api/v1/health
//   GET  /api/v1/guests
//   GET  /api/v1/treats

pub mod routes;

use anyhow::Result;
use axum::{
    routing::{get, post},
    Router,
};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;

use crate::AppContext;

pub async fn start_rest_server(ctx: Arc<AppContext>) -> Result<()> {
    let bind = format!("{}:{}", ctx.config.bind_address, ctx.config.port);
    let addr: SocketAddr = bind.parse()?;

    let router = build_router(ctx);

    info!("RSVP site listening on http://{}", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, router).await?;
    Ok(())
}

pub fn build_router(ctx: Arc<AppContext>) -> Router {
    Router::new()
        // Pages
        .route("/", get(routes::pages::homepage))
        .route("/rsvp", post(routes::pages::rsvp))
        // JSON API
        .route("/api/v1/health", get(routes::health::health))
        .route("/api/v1/guests", get(routes::guests::list_guests))
        .route("/api/v1/treats", get(routes::treats::get_treats))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(ctx)
}
