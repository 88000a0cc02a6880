mod payload;

use axum::{
    Router,
    extract::{
        Json, Path, Query,
        rejection::{JsonRejection, QueryRejection},
    },
    http::{HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
    routing::get,
};
use serde::{Serialize, de::DeserializeOwned};
use std::net::SocketAddr;
use thiserror::Error;
use tokio::net::TcpListener;
use tracing::{debug, info, warn};

use crate::core::{CalcError, Calculation, FieldIssue, ranges};
use payload::{
    FutureWealthPayload, GoalPayload, HomeLoanPayload, RetirementPayload, SipPayload,
    SipSwpPayload, SwpPayload,
};

#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Calc(#[from] CalcError),

    #[error("invalid query string: {}", .0.body_text())]
    Query(#[from] QueryRejection),

    #[error("invalid request body: {}", .0.body_text())]
    Body(#[from] JsonRejection),

    #[error("Not found")]
    NotFound,
}

#[derive(Debug, Serialize)]
struct ErrorResponse {
    error: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    fields: Vec<FieldIssue>,
}

#[derive(Debug, Serialize)]
struct HealthResponse {
    status: &'static str,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, fields) = match &self {
            ApiError::Calc(CalcError::Invalid(report)) => {
                (StatusCode::BAD_REQUEST, report.issues.clone())
            }
            ApiError::Query(rejection) => (rejection.status(), Vec::new()),
            ApiError::Body(rejection) => (rejection.status(), Vec::new()),
            ApiError::Calc(CalcError::UnknownCalculator(_)) | ApiError::NotFound => {
                (StatusCode::NOT_FOUND, Vec::new())
            }
        };
        json_response(
            status,
            ErrorResponse {
                error: self.to_string(),
                fields,
            },
        )
    }
}

pub fn router() -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .route("/api/ranges", get(ranges_handler))
        .route("/api/ranges/:calculator", get(range_table_handler))
        .route(
            "/api/future-wealth",
            get(calculate_get::<FutureWealthPayload>).post(calculate_post::<FutureWealthPayload>),
        )
        .route(
            "/api/sip",
            get(calculate_get::<SipPayload>).post(calculate_post::<SipPayload>),
        )
        .route(
            "/api/goal",
            get(calculate_get::<GoalPayload>).post(calculate_post::<GoalPayload>),
        )
        .route(
            "/api/home-loan",
            get(calculate_get::<HomeLoanPayload>).post(calculate_post::<HomeLoanPayload>),
        )
        .route(
            "/api/retirement",
            get(calculate_get::<RetirementPayload>).post(calculate_post::<RetirementPayload>),
        )
        .route(
            "/api/sip-swp",
            get(calculate_get::<SipSwpPayload>).post(calculate_post::<SipSwpPayload>),
        )
        .route(
            "/api/swp",
            get(calculate_get::<SwpPayload>).post(calculate_post::<SwpPayload>),
        )
        .fallback(not_found_handler)
}

pub async fn run_http_server(port: u16) -> std::io::Result<()> {
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    let listener = TcpListener::bind(addr).await?;
    info!(%addr, "calculator API listening");
    info!("local access: http://127.0.0.1:{port}/api/ranges");

    axum::serve(listener, router()).await
}

async fn health_handler() -> Response {
    json_response(StatusCode::OK, HealthResponse { status: "ok" })
}

async fn ranges_handler() -> Response {
    json_response(StatusCode::OK, ranges::TABLES)
}

async fn range_table_handler(Path(calculator): Path<String>) -> Result<Response, ApiError> {
    let table = ranges::table(&calculator)?;
    Ok(json_response(StatusCode::OK, table))
}

async fn not_found_handler() -> ApiError {
    ApiError::NotFound
}

async fn calculate_get<P>(
    payload: Result<Query<P>, QueryRejection>,
) -> Result<Response, ApiError>
where
    P: DeserializeOwned + Into<Calculation>,
{
    let Query(payload) = payload?;
    calculate(payload.into())
}

async fn calculate_post<P>(payload: Result<Json<P>, JsonRejection>) -> Result<Response, ApiError>
where
    P: DeserializeOwned + Into<Calculation>,
{
    let Json(payload) = payload?;
    calculate(payload.into())
}

fn calculate(calculation: Calculation) -> Result<Response, ApiError> {
    let name = calculation.name();
    let output = calculation.run().inspect_err(|e| {
        warn!(calculator = name, error = %e, "rejected calculation input");
    })?;
    debug!(calculator = name, "calculation completed");
    Ok(json_response(StatusCode::OK, output))
}

fn json_response<T: Serialize>(status: StatusCode, body: T) -> Response {
    let mut response = (status, Json(body)).into_response();
    response
        .headers_mut()
        .insert(header::CACHE_CONTROL, HeaderValue::from_static("no-store"));
    response
}
