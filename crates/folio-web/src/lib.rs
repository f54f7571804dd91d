use std::sync::Arc;

use anyhow::{Context, Result};
use axum::{
    Router, middleware,
    routing::{get, post},
};

use folio_core::{ContentStore, LogoLookup, LogoResolver, SiteConfig};

mod assets;
mod dto;
mod error;
mod handlers;
mod markdown;
mod render;
mod security;

#[cfg(test)]
mod tests;

pub use dto::{CONTACT_ACK_MESSAGE, ContactAck};

#[derive(Clone)]
pub(crate) struct WebState {
    pub(crate) store: ContentStore,
    pub(crate) logos: Arc<dyn LogoLookup>,
}

impl WebState {
    fn new(store: ContentStore, logos: Arc<dyn LogoLookup>) -> Self {
        Self { store, logos }
    }

    fn site_title(&self) -> &str {
        &self.store.config().site.title
    }
}

/// Start the portfolio web server and block until shutdown.
///
/// # Errors
/// Returns an error when the content directories cannot be created, the runtime
/// cannot be built, the socket cannot be bound, or the server exits with a failure.
pub fn serve_web(config: SiteConfig, logos: LogoResolver) -> Result<()> {
    let store = ContentStore::new(config);
    let created = store
        .ensure_layout()
        .context("failed to prepare content directories")?;
    tracing::info!(
        created = created.len(),
        data_root = %store.config().content.data_root.display(),
        "content layout ready"
    );

    let bind_addr = store.config().bind_addr();
    let state = WebState::new(store, Arc::new(logos));
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("failed to build web runtime")?;

    runtime.block_on(async move {
        let listener = tokio::net::TcpListener::bind(&bind_addr)
            .await
            .with_context(|| format!("failed to bind web server at {bind_addr}"))?;
        tracing::info!(addr = %listener.local_addr()?, "portfolio listening");

        axum::serve(listener, app_router(state))
            .with_graceful_shutdown(async {
                let _ = tokio::signal::ctrl_c().await;
                tracing::info!("shutdown requested");
            })
            .await
            .context("web server failed")
    })
}

pub(crate) fn app_router(state: WebState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/about", get(handlers::about))
        .route("/projects", get(handlers::projects))
        .route("/certificates", get(handlers::certificates))
        .route("/contact", get(handlers::contact))
        .route("/send-message", post(handlers::send_message))
        .route("/static/css/style.css", get(handlers::style_css))
        .route("/static/js/main.js", get(handlers::main_js))
        .route("/static/js/contact.js", get(handlers::contact_js))
        .route("/static/images/{*path}", get(handlers::image))
        .fallback(handlers::not_found)
        .layer(middleware::from_fn(security::security_headers_middleware))
        .with_state(state)
}
