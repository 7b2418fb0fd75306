// src/ports/proxy.rs
use crate::application::{
    BatchOutcome, NotebookLister, NotebookRunner, PermissionManager, RunGate,
};
use crate::constants::{BUSY_MESSAGE, UNAVAILABLE_MESSAGE};
use crate::domain::{ClientError, Credential, Permission};
use crate::infrastructure::{ServerConfig, SessionFactory, ZeppelinClient};
use anyhow::{Context, Result};
use axum::{
    body::Bytes,
    extract::{Query, Request, State},
    http::StatusCode,
    middleware::{self, Next},
    response::{IntoResponse, Response},
    routing::any,
    Router,
};
use serde::{Deserialize, Serialize};
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;
use tracing::{error, info, warn};

/// Shared by all requests: the session factory and the `/run` slot.
#[derive(Debug)]
pub struct AppState {
    pub sessions: SessionFactory,
    pub run_gate: RunGate,
}

impl AppState {
    pub fn new(config: &ServerConfig) -> Self {
        Self {
            sessions: SessionFactory::new(config.hostname.clone()),
            run_gate: RunGate::new(config.run_window()),
        }
    }
}

/// Query parameters understood by the proxy routes.
#[derive(Debug, Default, Deserialize)]
pub struct ProxyQuery {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
    #[serde(default, rename = "notebookID")]
    pub notebook_id: Option<String>,
    #[serde(default, rename = "notebookIDs")]
    pub notebook_ids: Option<String>,
}

impl ProxyQuery {
    pub fn credential(&self) -> Credential {
        Credential::new(self.username.clone(), self.password.clone())
    }

    pub fn notebook_id(&self) -> Option<&str> {
        self.notebook_id
            .as_deref()
            .map(str::trim)
            .filter(|id| !id.is_empty())
    }

    /// Comma separated ids; blanks are dropped.
    pub fn notebook_ids(&self) -> Vec<String> {
        self.notebook_ids
            .as_deref()
            .unwrap_or_default()
            .split(',')
            .map(str::trim)
            .filter(|id| !id.is_empty())
            .map(str::to_string)
            .collect()
    }
}

/// Body returned by the multi-notebook routes.
///
/// A failure part-way through is reported with status 206 and the responses
/// gathered before it.
#[derive(Debug, Serialize)]
pub struct BatchReport<T> {
    pub responses: Vec<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub failed_notebook: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T> From<BatchOutcome<T, ClientError>> for BatchReport<T> {
    fn from(outcome: BatchOutcome<T, ClientError>) -> Self {
        let (failed_notebook, error) = match outcome.failure {
            Some(failure) => (Some(failure.id), Some(failure.error.to_string())),
            None => (None, None),
        };
        Self {
            responses: outcome.completed,
            failed_notebook,
            error,
        }
    }
}

pub fn usage_text(hostname: &str) -> String {
    format!(
        r#"
endpoints:
  - list          => list notebooks available on {hostname}
  - run           => run notebooks by IDs given as comma separated URL parameter notebookIDs
  - getpermission => get permission for notebook notebookID
  - setpermission => set permission for notebooks notebookIDs, using JSON from the request body
all endpoints expect URL parameters username and password
"#
    )
}

pub fn create_router(state: Arc<AppState>, request_timeout: Duration) -> Router {
    Router::new()
        .route("/", any(usage))
        .route("/list", any(list))
        .route("/run", any(run))
        .route("/getpermission", any(get_permission))
        .route("/setpermission", any(set_permission))
        .fallback(usage)
        .layer(middleware::from_fn_with_state(
            request_timeout,
            enforce_deadline,
        ))
        .with_state(state)
}

/// Bind and serve until Ctrl-C or SIGTERM. Only a bind failure is fatal.
pub async fn serve(config: ServerConfig) -> Result<()> {
    let state = Arc::new(AppState::new(&config));
    let app = create_router(state, config.request_timeout());

    let addr = config.bind_address();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;

    info!(%addr, zeppelin = %config.hostname, "Serving Zeppelin proxy");
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server stopped")?;

    info!("Proxy shutdown complete");
    Ok(())
}

async fn usage(State(state): State<Arc<AppState>>) -> String {
    usage_text(state.sessions.hostname())
}

async fn list(State(state): State<Arc<AppState>>, Query(query): Query<ProxyQuery>) -> Response {
    let client = match open_session(&state, &query) {
        Ok(client) => client,
        Err(response) => return response,
    };

    info!(user = %query.username, "Listing notebooks");
    let hostname = state.sessions.hostname().to_string();
    detach(async move {
        match NotebookLister::new(client).list_notebooks().await {
            Ok(notebooks) => json_response(StatusCode::OK, &notebooks),
            Err(e) => error_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("could not list notebooks from {}: {}", hostname, e),
            ),
        }
    })
    .await
}

async fn run(State(state): State<Arc<AppState>>, Query(query): Query<ProxyQuery>) -> Response {
    let notebook_ids = query.notebook_ids();
    if notebook_ids.is_empty() {
        return missing_parameter(&state, "notebookIDs");
    }

    let client = match open_session(&state, &query) {
        Ok(client) => client,
        Err(response) => return response,
    };

    if !state.run_gate.try_acquire() {
        info!(user = %query.username, "Run refused, slot still held");
        return (StatusCode::OK, BUSY_MESSAGE).into_response();
    }

    info!(user = %query.username, ?notebook_ids, "Running notebooks");
    detach(async move {
        let outcome = NotebookRunner::new(client)
            .run_notebooks(&notebook_ids)
            .await;
        batch_response(outcome)
    })
    .await
}

async fn get_permission(
    State(state): State<Arc<AppState>>,
    Query(query): Query<ProxyQuery>,
) -> Response {
    let Some(notebook_id) = query.notebook_id().map(str::to_string) else {
        return missing_parameter(&state, "notebookID");
    };

    let client = match open_session(&state, &query) {
        Ok(client) => client,
        Err(response) => return response,
    };

    info!(user = %query.username, %notebook_id, "Reading notebook permission");
    detach(async move {
        match PermissionManager::new(client).get_permission(&notebook_id).await {
            Ok(permission) => json_response(StatusCode::OK, &permission),
            Err(e) => error_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("could not get permission of notebook {}: {}", notebook_id, e),
            ),
        }
    })
    .await
}

async fn set_permission(
    State(state): State<Arc<AppState>>,
    Query(query): Query<ProxyQuery>,
    body: Bytes,
) -> Response {
    let notebook_ids = query.notebook_ids();
    if notebook_ids.is_empty() {
        return missing_parameter(&state, "notebookIDs");
    }

    let permission: Permission = match serde_json::from_slice(&body) {
        Ok(permission) => permission,
        Err(e) => {
            return error_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("could not decode input json: {}", e),
            )
        }
    };

    let client = match open_session(&state, &query) {
        Ok(client) => client,
        Err(response) => return response,
    };

    info!(user = %query.username, ?notebook_ids, "Setting notebook permission");
    detach(async move {
        let outcome = PermissionManager::new(client)
            .set_permission(&notebook_ids, &permission)
            .await;
        batch_response(outcome)
    })
    .await
}

async fn enforce_deadline(State(limit): State<Duration>, request: Request, next: Next) -> Response {
    let path = request.uri().path().to_string();
    match tokio::time::timeout(limit, next.run(request)).await {
        Ok(response) => response,
        Err(_) => {
            warn!(%path, ?limit, "Request exceeded deadline");
            (StatusCode::SERVICE_UNAVAILABLE, UNAVAILABLE_MESSAGE).into_response()
        }
    }
}

/// Run handler work on its own task so that a request hitting the deadline
/// abandons the result without cancelling the Zeppelin calls in flight.
async fn detach<F>(work: F) -> Response
where
    F: Future<Output = Response> + Send + 'static,
{
    match tokio::spawn(work).await {
        Ok(response) => response,
        Err(e) => {
            error!("Request task failed: {}", e);
            error_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                "request could not be completed".to_string(),
            )
        }
    }
}

fn open_session(state: &AppState, query: &ProxyQuery) -> Result<ZeppelinClient, Response> {
    state.sessions.open(query.credential()).map_err(|e| {
        error_response(
            StatusCode::INTERNAL_SERVER_ERROR,
            format!("could not connect to {}: {}", state.sessions.hostname(), e),
        )
    })
}

fn missing_parameter(state: &AppState, parameter: &str) -> Response {
    info!(parameter, "Required URL parameter missing");
    let text = format!(
        "url parameter `{}` is missing\n{}",
        parameter,
        usage_text(state.sessions.hostname())
    );
    (StatusCode::OK, text).into_response()
}

fn batch_response<T: Serialize>(outcome: BatchOutcome<T, ClientError>) -> Response {
    let status = if outcome.is_complete() {
        StatusCode::OK
    } else {
        StatusCode::PARTIAL_CONTENT
    };
    json_response(status, &BatchReport::from(outcome))
}

fn json_response<T: Serialize>(status: StatusCode, value: &T) -> Response {
    match serde_json::to_string_pretty(value) {
        Ok(body) => (
            status,
            [(axum::http::header::CONTENT_TYPE, "application/json")],
            body,
        )
            .into_response(),
        Err(e) => error_response(
            StatusCode::INTERNAL_SERVER_ERROR,
            format!("could not format response: {}", e),
        ),
    }
}

fn error_response(status: StatusCode, message: String) -> Response {
    warn!(%status, %message, "Request failed");
    (status, message).into_response()
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutdown signal received, draining connections...");
}
