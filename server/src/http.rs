use std::{
    net::{IpAddr, SocketAddr},
    sync::Arc,
};

use anyhow::Context;
use async_graphql::http::GraphiQLSource;
use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::{
    Json, Router,
    extract::{Query, State},
    http::{self, HeaderName, HeaderValue, Method, StatusCode},
    response::{Html, IntoResponse, Response},
    routing::{get, post},
};
use products_hr::{
    DirectoryError, DuplicateCheckError, DuplicateCheckRequest, DuplicateCheckResponse,
    EmployeeDirectory, OrgTreeError, build_org_tree, check_duplicate,
};
use serde::{Deserialize, Serialize};
use tower::ServiceBuilder;
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    trace::TraceLayer,
};
use tracing::{info, instrument, warn};

use crate::{config::AppConfig, graphql::SchemaType};

#[derive(Clone)]
pub struct AppState {
    pub directory: Arc<dyn EmployeeDirectory>,
    pub schema: SchemaType,
    pub config: Arc<AppConfig>,
}

#[derive(Clone, Debug)]
pub struct ServeConfig {
    addr: SocketAddr,
}

impl ServeConfig {
    pub fn new(host: IpAddr, port: u16) -> Self {
        Self {
            addr: SocketAddr::from((host, port)),
        }
    }
}

pub async fn serve(config: ServeConfig, state: AppState) -> anyhow::Result<()> {
    let router = build_router(state);
    let listener = tokio::net::TcpListener::bind(config.addr)
        .await
        .with_context(|| format!("failed to bind {}", config.addr))?;

    info!(%config.addr, "hr server listening");
    axum::serve(listener, router.into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("HTTP server error")?;
    Ok(())
}

fn cors_layer(origins: &[String]) -> CorsLayer {
    let allowed = origins
        .iter()
        .filter_map(|origin| origin.parse::<HeaderValue>().ok())
        .collect::<Vec<_>>();
    let allow_origin = if allowed.is_empty() {
        AllowOrigin::any()
    } else {
        AllowOrigin::list(allowed)
    };
    CorsLayer::new()
        .allow_headers([http::header::CONTENT_TYPE])
        .allow_methods([Method::POST, Method::GET])
        .allow_origin(allow_origin)
}

pub fn build_router(state: AppState) -> Router {
    let request_id = MakeRequestUuid;
    let header_name = HeaderName::from_static("x-request-id");
    Router::new()
        .route("/health", get(health_handler))
        .route("/api/org-chart", get(org_chart_handler))
        .route(
            "/api/employees/check-duplicate",
            post(check_duplicate_handler),
        )
        .route("/graphql", get(graphiql_handler).post(graphql_handler))
        .layer(
            ServiceBuilder::new()
                .layer(SetRequestIdLayer::new(header_name.clone(), request_id))
                .layer(PropagateRequestIdLayer::new(header_name))
                .layer(TraceLayer::new_for_http())
                .layer(cors_layer(&state.config.cors_allowed_origins)),
        )
        .with_state(state)
}

#[derive(Debug, Deserialize)]
struct OrgChartQuery {
    root: Option<String>,
}

#[instrument(name = "http.org_chart", skip(state))]
async fn org_chart_handler(
    State(state): State<AppState>,
    Query(query): Query<OrgChartQuery>,
) -> HttpResult<Response> {
    let records = state
        .directory
        .active_employees()
        .await
        .map_err(HttpError::directory)?;
    let root = query
        .root
        .as_deref()
        .map(str::trim)
        .filter(|root| !root.is_empty())
        .or(state.config.default_root.as_deref());
    match build_org_tree(&records, root)? {
        Some(tree) => Ok(Json(tree).into_response()),
        None => Ok(StatusCode::NO_CONTENT.into_response()),
    }
}

async fn check_duplicate_handler(
    State(state): State<AppState>,
    Json(request): Json<DuplicateCheckRequest>,
) -> HttpResult<Json<DuplicateCheckResponse>> {
    let response = check_duplicate(state.directory.as_ref(), request).await?;
    Ok(Json(response))
}

async fn graphql_handler(State(state): State<AppState>, request: GraphQLRequest) -> GraphQLResponse {
    state.schema.execute(request.into_inner()).await.into()
}

async fn graphiql_handler() -> Html<String> {
    Html(GraphiQLSource::build().endpoint("/graphql").finish())
}

async fn health_handler(State(state): State<AppState>) -> impl IntoResponse {
    let db_ok = match state.directory.ping().await {
        Ok(()) => true,
        Err(err) => {
            warn!(error = %err, "directory ping failed");
            false
        }
    };
    Json(HealthResponse {
        ok: db_ok,
        db_ok,
        version: env!("CARGO_PKG_VERSION"),
    })
}

#[derive(Serialize)]
struct HealthResponse {
    ok: bool,
    db_ok: bool,
    version: &'static str,
}

type HttpResult<T> = Result<T, HttpError>;

#[derive(Debug)]
struct HttpError {
    status: StatusCode,
    message: String,
    details: Option<String>,
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<String>,
}

impl HttpError {
    fn new(status: StatusCode, msg: &str) -> Self {
        Self {
            status,
            message: msg.to_string(),
            details: None,
        }
    }

    fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    fn directory(err: DirectoryError) -> Self {
        Self::new(
            StatusCode::INTERNAL_SERVER_ERROR,
            "employee directory unavailable",
        )
        .with_details(err.to_string())
    }
}

impl From<DuplicateCheckError> for HttpError {
    fn from(value: DuplicateCheckError) -> Self {
        match value {
            DuplicateCheckError::Validation(message) => {
                Self::new(StatusCode::BAD_REQUEST, message)
            }
            DuplicateCheckError::Dependency(details) => {
                Self::new(StatusCode::INTERNAL_SERVER_ERROR, "duplicate check failed")
                    .with_details(details)
            }
        }
    }
}

impl From<OrgTreeError> for HttpError {
    fn from(value: OrgTreeError) -> Self {
        Self::new(StatusCode::UNPROCESSABLE_ENTITY, &value.to_string())
    }
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let body = ErrorBody {
            error: self.message,
            details: self.details,
        };
        (self.status, Json(body)).into_response()
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install CTRL+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{SignalKind, signal};

        signal(SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    };
    info!("shutdown signal received");
}
