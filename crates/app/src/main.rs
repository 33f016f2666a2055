use dioxus::prelude::*;
use shared_types::FeatureFlags;

mod auth;
mod components;
mod format_helpers;
mod routes;
mod task;

use auth::AuthState;
use routes::Route;

const THEME: Asset = asset!("/assets/theme.css");

fn main() {
    #[cfg(feature = "server")]
    dioxus::serve(|| async move {
        let config = server::config::load_config();

        if config.features.telemetry {
            server::telemetry::init_telemetry();
        }
        server::health::record_start_time();

        server::auth::jwt::require_secret()
            .inspect_err(|e| tracing::error!(error = %e.message, "refusing to start"))?;

        // Build the store before the first request so seed errors fail startup.
        let store = server::state::store()?;

        let mut router = dioxus::server::router(App).merge(server::openapi::api_router(store));

        if config.features.telemetry {
            router = router.layer(server::telemetry::OtelTraceLayer);
        }

        let router = router
            .layer(axum::middleware::from_fn(
                server::auth::middleware::auth_middleware,
            ))
            .layer(tower_http::request_id::PropagateRequestIdLayer::x_request_id())
            .layer(tower_http::request_id::SetRequestIdLayer::x_request_id(
                tower_http::request_id::MakeRequestUuid,
            ));
        Ok(router)
    });

    #[cfg(not(feature = "server"))]
    dioxus::launch(App);
}

/// Detect the client platform from compile-time feature flags.
pub fn client_platform() -> &'static str {
    if cfg!(feature = "web") {
        "web"
    } else if cfg!(feature = "desktop") {
        "desktop"
    } else if cfg!(feature = "mobile") {
        "mobile"
    } else {
        "unknown"
    }
}

#[component]
fn App() -> Element {
    // Set the X-Client-Platform header on all server function calls
    use_hook(|| {
        use dioxus::fullstack::{set_request_headers, HeaderMap, HeaderValue};

        let mut headers = HeaderMap::new();
        headers.insert(
            "x-client-platform",
            HeaderValue::from_static(client_platform()),
        );
        set_request_headers(headers);
    });

    // Fetch feature flags once and provide via context (defaults on error)
    let flags_resource =
        use_server_future(move || async move { server::api::get_feature_flags().await })?;

    let flags = flags_resource
        .read()
        .as_ref()
        .cloned()
        .unwrap_or(Ok(FeatureFlags::default()))
        .unwrap_or_default();

    use_context_provider(|| flags);

    use_context_provider(AuthState::new);

    rsx! {
        document::Link { rel: "stylesheet", href: THEME }
        SuspenseBoundary {
            fallback: |_| rsx! {
                div { class: "auth-guard-loading",
                    p { "Loading..." }
                }
            },
            Router::<Route> {}
        }
    }
}
