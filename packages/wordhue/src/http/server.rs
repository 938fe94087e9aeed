use axum::routing::get;
use axum_tracing_opentelemetry::middleware::OtelAxumLayer;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utils::{context::AppContext, telemetry::HttpMetrics};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;
use wildmatch::WildMatch;

use crate::config::Config;

use super::{
    handlers::{
        handle_color_palette, handle_config, handle_health, handle_hello, handle_not_found,
        handle_random_color, handle_random_everything, handle_random_noun, handle_random_verb,
        handle_root, handle_word_by_category, openapi::ApiDoc,
    },
    state::HttpState,
};

// this is called from main, loads the word lists and randomness from config
pub fn start(ctx: AppContext, config: Config, metrics: HttpMetrics) -> anyhow::Result<()> {
    // The server runs within the tokio runtime
    ctx.rt.clone().block_on(async move {
        let (host, port) = (config.host.clone(), config.port);

        let mut shutdown_signal = ctx.shutdown_receiver();

        let state = HttpState::new(config, metrics)?;
        let router = make_router(state);

        let listener = tokio::net::TcpListener::bind(&format!("{}:{}", host, port)).await?;

        tracing::info!("Http server starting on: {}", listener.local_addr()?);

        axum::serve(listener, router)
            .with_graceful_shutdown(async move {
                shutdown_signal.recv().await.ok();

                tracing::debug!("Http server shutting down");
            })
            .await?;

        anyhow::Ok(())
    })?;

    Ok(())
}

// this is called from start and tests
pub fn make_router(state: HttpState) -> axum::Router {
    let cors = cors_layer(&state.config);

    // "/api/{category}" only sees what the fixed /api routes don't match
    let router = axum::Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .route("/", get(handle_root))
        .route("/health", get(handle_health))
        .route("/config", get(handle_config))
        .route("/hello/{slug}", get(handle_hello))
        .route("/api/random", get(handle_random_everything))
        .route("/api/random-noun", get(handle_random_noun))
        .route("/api/random-verb", get(handle_random_verb))
        .route("/api/color", get(handle_random_color))
        .route("/api/color-palette", get(handle_color_palette))
        .route("/api/{category}", get(handle_word_by_category))
        .fallback(handle_not_found)
        .layer(TraceLayer::new_for_http())
        .layer(OtelAxumLayer::default())
        .with_state(state);

    match cors {
        Some(cors) => router.layer(cors),
        None => router,
    }
}

fn cors_layer(config: &Config) -> Option<CorsLayer> {
    if config.cors_allowed_origins.is_empty() {
        return None;
    }

    let allowed_origins: Vec<WildMatch> = config
        .cors_allowed_origins
        .iter()
        .map(|s| WildMatch::new(s))
        .collect();

    Some(
        CorsLayer::new()
            // a predicate so origins like "http://localhost:*" work
            .allow_origin(tower_http::cors::AllowOrigin::predicate(
                move |origin, _parts| {
                    origin
                        .to_str()
                        .map(|origin| allowed_origins.iter().any(|allowed| allowed.matches(origin)))
                        .unwrap_or(false)
                },
            ))
            .allow_methods(tower_http::cors::Any)
            .allow_headers(tower_http::cors::Any),
    )
}
