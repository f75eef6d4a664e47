//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! This module stitches the health endpoint, static client assets, and
//! Leptos SSR rendering under a single Axum router. The app's routes are
//! generated from the route tree the client defines; WASM, JS, and CSS
//! bundles are served from the site root's `pkg` directory.


use std::path::PathBuf;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::get;
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use tower_http::compression::CompressionLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

/// Full application router: health check, `/pkg` assets, and SSR pages.
///
/// # Errors
///
/// Returns an error if the Leptos configuration cannot be loaded (missing
/// or malformed leptos metadata or environment).
pub fn leptos_app() -> Result<Router, String> {
    let conf = get_configuration(None).map_err(|e| format!("leptos configuration: {e}"))?;
    Ok(router(conf.leptos_options))
}

/// Assemble the router over explicit Leptos options.
fn router(leptos_options: LeptosOptions) -> Router {
    let routes = generate_route_list(app::app::App);
    let site_root_path = PathBuf::from(leptos_options.site_root.as_ref());

    Router::new()
        .route("/healthz", get(healthz))
        .nest_service("/pkg", ServeDir::new(site_root_path.join("pkg")))
        .leptos_routes(&leptos_options, routes, {
            let opts = leptos_options.clone();
            move || app::app::shell(opts.clone())
        })
        .layer(TraceLayer::new_for_http())
        .layer(CompressionLayer::new())
        .with_state(leptos_options)
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
