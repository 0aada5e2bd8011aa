//! Route handlers for the agent configuration API.

use std::sync::Arc;

use agent_schema::{Bio, StyleConfig};
use agent_store::AgentRecord;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use serde::Serialize;
use serde_json::{json, Value};
use tower_http::cors::{Any, CorsLayer};
use tracing::info;

use crate::{ApiError, AppState, CorsMode, CreatePolicy};

/// Builds the service router.
pub fn router(state: Arc<AppState>, cors: CorsMode) -> Router {
    let router = Router::new()
        .route("/healthz", get(healthz))
        .route("/api/agents", get(list_agents).post(create_agent))
        .route(
            "/api/agents/:name",
            get(get_agent).put(update_agent).delete(delete_agent),
        )
        .with_state(state);

    match cors {
        CorsMode::Permissive => router.layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        ),
        CorsMode::Off => router,
    }
}

/// Summary of the stored configuration echoed back on creation.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct AgentSummary {
    name: String,
    model_provider: String,
    bio: Bio,
    clients: Vec<String>,
    plugins: Vec<String>,
    style: StyleConfig,
}

impl From<&AgentRecord> for AgentSummary {
    fn from(record: &AgentRecord) -> Self {
        Self {
            name: record.config.name.clone(),
            model_provider: record.config.model_provider.clone(),
            bio: record.config.bio.clone(),
            clients: record.config.clients.clone(),
            plugins: record.config.plugins.clone(),
            style: record.config.style.clone(),
        }
    }
}

#[derive(Serialize)]
struct CreateResponse {
    success: bool,
    message: &'static str,
    data: AgentSummary,
    record: AgentRecord,
}

async fn healthz() -> Json<Value> {
    Json(json!({"status": "ok"}))
}

async fn create_agent(
    State(state): State<Arc<AppState>>,
    Json(document): Json<Value>,
) -> Result<Response, ApiError> {
    let config = state.validator.validate(&document)?;
    let name = config.name.clone();

    let (status, record) = match state.create_policy {
        CreatePolicy::Strict => (StatusCode::CREATED, state.store.insert(config).await?),
        CreatePolicy::Upsert => (StatusCode::OK, state.store.upsert(config).await?),
    };

    info!(agent = %name, policy = ?state.create_policy, "agent configuration saved");
    let body = CreateResponse {
        success: true,
        message: "agent configuration saved",
        data: AgentSummary::from(&record),
        record,
    };
    Ok((status, Json(body)).into_response())
}

async fn list_agents(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<AgentRecord>>, ApiError> {
    Ok(Json(state.store.list().await?))
}

async fn get_agent(
    State(state): State<Arc<AppState>>,
    Path(name): Path<String>,
) -> Result<Json<AgentRecord>, ApiError> {
    Ok(Json(state.store.get(&name).await?))
}

async fn update_agent(
    State(state): State<Arc<AppState>>,
    Path(name): Path<String>,
    Json(document): Json<Value>,
) -> Result<Json<AgentRecord>, ApiError> {
    let config = state.validator.validate(&document)?;
    if config.name != name {
        return Err(ApiError::NameMismatch {
            path: name,
            body: config.name,
        });
    }

    let record = state.store.replace(&name, config).await?;
    info!(agent = %name, "agent configuration replaced");
    Ok(Json(record))
}

async fn delete_agent(
    State(state): State<Arc<AppState>>,
    Path(name): Path<String>,
) -> Result<Json<Value>, ApiError> {
    state.store.remove(&name).await?;
    info!(agent = %name, "agent configuration deleted");
    Ok(Json(json!({"message": "agent deleted"})))
}
