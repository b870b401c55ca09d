// Greeter - Web Server
// JSON API over the greeting core, built with Axum

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Json},
    routing::{get, post},
    Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use greeter::{greet_all, GreeterConfig, Greeting, GreetingRequest, GreetingResponse, Person};

/// Shared application state
#[derive(Clone)]
struct AppState {
    config: Arc<GreeterConfig>,
}

/// API Response wrapper
#[derive(Serialize)]
struct ApiResponse<T> {
    success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

impl<T> ApiResponse<T> {
    fn ok(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    fn err(message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(message.into()),
        }
    }
}

/// Query string for GET /api/greet
#[derive(Debug, Deserialize)]
struct GreetQuery {
    style: Option<String>,
    name: Option<String>,
    /// Parsed by hand so a bad value still gets the JSON error wrapper
    age: Option<String>,
}

// ============================================================================
// API Handlers
// ============================================================================

/// GET /api/health - Health check
async fn health_check() -> impl IntoResponse {
    Json(ApiResponse::ok("OK"))
}

/// GET /api/greet - Greet one person, falling back to configured defaults
async fn greet_one(
    State(state): State<AppState>,
    Query(query): Query<GreetQuery>,
) -> impl IntoResponse {
    match build_request(&state.config, query) {
        Ok(request) => (StatusCode::OK, Json(ApiResponse::ok(request.respond()))).into_response(),
        Err(message) => {
            tracing::warn!(%message, "rejected greet request");
            (
                StatusCode::BAD_REQUEST,
                Json(ApiResponse::<GreetingResponse>::err(message)),
            )
                .into_response()
        }
    }
}

fn build_request(config: &GreeterConfig, query: GreetQuery) -> Result<GreetingRequest, String> {
    let style = match query.style.as_deref() {
        Some(raw) => raw.parse::<Greeting>().map_err(|e| e.to_string())?,
        None => config.default_style,
    };

    let age = match query.age.as_deref() {
        Some(raw) => raw
            .trim()
            .parse::<i64>()
            .map_err(|_| format!("Invalid age '{}'", raw))?,
        None => config.default_person.age,
    };

    let name = query
        .name
        .unwrap_or_else(|| config.default_person.name.clone());

    Ok(GreetingRequest::new(style, Person::new(name, age)))
}

/// POST /api/greet/batch - Greet every request in the body
async fn greet_batch(Json(requests): Json<Vec<GreetingRequest>>) -> impl IntoResponse {
    tracing::debug!(count = requests.len(), "batch greet");
    Json(ApiResponse::ok(greet_all(&requests)))
}

fn router(state: AppState) -> Router {
    let api_routes = Router::new()
        .route("/health", get(health_check))
        .route("/greet", get(greet_one))
        .route("/greet/batch", post(greet_batch))
        .with_state(state);

    Router::new()
        .nest("/api", api_routes)
        .layer(CorsLayer::permissive())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "greeter=info,greeter_server=info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config_path = std::env::args().nth(1).map(std::path::PathBuf::from);
    let config = GreeterConfig::load(config_path.as_deref())?;
    let addr = config.bind_addr.clone();

    let state = AppState {
        config: Arc::new(config),
    };

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Greeter server listening on http://{}", addr);
    tracing::info!("   API: http://{}/api/greet?style=formal&name=World", addr);

    axum::serve(listener, router(state)).await?;

    Ok(())
}

// ============================================================================
// TESTS
// ============================================================================
