//! HTTP server: renders the app and serves static assets

use crate::app::App;
use axum::Router;
use leptos::{get_configuration, LeptosOptions};
use leptos_axum::{generate_route_list, LeptosRoutes};
use thiserror::Error;
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const DEFAULT_ASSETS_DIR: &str = "public";
const DEFAULT_LOG_FILTER: &str = "agri_site=info,tower_http=info";

#[derive(Error, Debug)]
pub enum ServerError {
    #[error("Failed to load site configuration: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub fn init_tracing() {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| DEFAULT_LOG_FILTER.into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();
}

/// Static assets directory, overridable with `AGRI_ASSETS_DIR`
pub fn assets_dir() -> String {
    assets_dir_from(std::env::var("AGRI_ASSETS_DIR").ok())
}

fn assets_dir_from(value: Option<String>) -> String {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .unwrap_or_else(|| DEFAULT_ASSETS_DIR.to_string())
}

pub fn router(leptos_options: LeptosOptions, assets: &str) -> Router {
    let routes = generate_route_list(App);

    Router::new()
        .leptos_routes(&leptos_options, routes, App)
        .nest_service("/banners", ServeDir::new(format!("{assets}/banners")))
        .nest_service("/brochures", ServeDir::new(format!("{assets}/brochures")))
        .route_service("/logo.png", ServeFile::new(format!("{assets}/logo.png")))
        .fallback(leptos_axum::file_and_error_handler(App))
        .with_state(leptos_options)
        .layer(TraceLayer::new_for_http())
}

pub async fn run() -> Result<(), ServerError> {
    let conf = get_configuration(None)
        .await
        .map_err(|e| ServerError::Config(e.to_string()))?;
    let leptos_options = conf.leptos_options;
    let addr = leptos_options.site_addr;
    let assets = assets_dir();

    let app = router(leptos_options, &assets);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("KropKraft site listening on http://{}", addr);
    tracing::info!("Serving assets from {}", assets);
    axum::serve(listener, app.into_make_service()).await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_assets_dir_default() {
        assert_eq!(assets_dir_from(None), "public");
        assert_eq!(assets_dir_from(Some("  ".into())), "public");
        assert_eq!(assets_dir_from(Some("/srv/site".into())), "/srv/site");
    }

    #[test]
    fn test_error_display() {
        let err = ServerError::Config("missing Cargo.toml".into());
        assert_eq!(err.to_string(), "Failed to load site configuration: missing Cargo.toml");
    }
}
