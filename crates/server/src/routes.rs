//! HTTP routes for key management and the employee directory
//!
//! # Endpoints
//!
//! - `POST /keys` - Generate and store an RSA-2048 key pair
//! - `GET /keys/:id/public-key` - Base64 of the stored PEM public key
//! - `GET|POST /employees`, `GET|PUT|DELETE /employees/:id` - Employee CRUD
//! - `GET /swagger/openapi.yaml` - OpenAPI document
//! - `GET /health` - Health check
//!
//! Every response carries permissive CORS headers and any `OPTIONS`
//! request is answered with an empty 200.

use std::collections::HashMap;
use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::{FromRequest, Path, Query, Request, State},
    http::{header, HeaderValue, Method, StatusCode},
    middleware::{self, Next},
    response::{Html, IntoResponse, Response},
    routing::{get, post},
    Form, Json, Router,
};
use keyservice::{
    DirectoryError, Employee, EmployeeDirectory, EmployeeDraft, KeyManager, ServiceError,
};
use keyservice_crypto::{CryptoError, OaepHash};
use serde::Serialize;
use serde_json::Value;
use tower_http::trace::TraceLayer;
use tracing::error;

const OPENAPI_YAML: &str = include_str!("../public/swagger/openapi.yaml");

const INDEX_HTML: &str = "<h1>keyservice</h1>\n\
<p>Keys: /keys</p>\n\
<p>CRUD: /employees</p>\n\
<p>OpenAPI: <a href=\"/swagger/openapi.yaml\">/swagger/openapi.yaml</a></p>\n";

// ============================================================================
// Server State
// ============================================================================

/// Shared server state
#[derive(Clone)]
pub struct AppState {
    pub keys: KeyManager,
    pub employees: Arc<EmployeeDirectory>,
}

impl AppState {
    /// Empty key store and directory
    pub fn new(hash: OaepHash) -> Self {
        Self {
            keys: KeyManager::with_hash(hash),
            employees: Arc::new(EmployeeDirectory::new()),
        }
    }
}

// ============================================================================
// Request/Response Types
// ============================================================================

#[derive(Debug, Serialize)]
struct KeyCreatedResponse {
    id: u64,
}

#[derive(Debug, Serialize)]
struct PublicKeyResponse {
    id: u64,
    #[serde(rename = "publicKey")]
    public_key: String,
}

#[derive(Debug, Serialize)]
struct MessageResponse {
    message: &'static str,
}

#[derive(Debug, Serialize)]
struct HealthResponse {
    status: &'static str,
    version: &'static str,
    #[serde(rename = "oaepHash")]
    oaep_hash: String,
    keys: usize,
    employees: usize,
}

#[derive(Debug, Serialize)]
struct ErrorResponse {
    error: String,
}

// ============================================================================
// Errors
// ============================================================================

/// Error response: a status code and a `{"error": ...}` body
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    message: String,
}

impl ApiError {
    fn bad_request<S: Into<String>>(message: S) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: message.into(),
        }
    }

    fn not_found<S: Into<String>>(message: S) -> Self {
        Self {
            status: StatusCode::NOT_FOUND,
            message: message.into(),
        }
    }

    fn internal<E: std::fmt::Display>(e: E) -> Self {
        error!(error = %e, "internal error");
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: e.to_string(),
        }
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }
}

impl From<ServiceError> for ApiError {
    fn from(e: ServiceError) -> Self {
        if e.is_not_found() {
            Self::not_found(e.to_string())
        } else if e.is_client_error() {
            Self::bad_request(e.to_string())
        } else {
            Self::internal(e)
        }
    }
}

impl From<CryptoError> for ApiError {
    fn from(e: CryptoError) -> Self {
        ServiceError::from(e).into()
    }
}

impl From<DirectoryError> for ApiError {
    fn from(e: DirectoryError) -> Self {
        ServiceError::from(e).into()
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (
            self.status,
            Json(ErrorResponse {
                error: self.message,
            }),
        )
            .into_response()
    }
}

// ============================================================================
// Router
// ============================================================================

/// Build the application router
pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/health", get(health))
        .route("/swagger/openapi.yaml", get(openapi))
        .route("/keys", post(create_key))
        .route("/keys/:id/public-key", get(get_public_key))
        .route("/employees", get(list_employees).post(create_employee))
        .route(
            "/employees/:id",
            get(get_employee).put(update_employee).delete(delete_employee),
        )
        .fallback(not_found)
        .with_state(state)
        .layer(middleware::from_fn(cors))
        .layer(TraceLayer::new_for_http())
}

/// Adds CORS headers to every response and short-circuits preflight
async fn cors(request: Request, next: Next) -> Response {
    let mut response = if request.method() == Method::OPTIONS {
        StatusCode::OK.into_response()
    } else {
        next.run(request).await
    };

    let headers = response.headers_mut();
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_ORIGIN,
        HeaderValue::from_static("*"),
    );
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_METHODS,
        HeaderValue::from_static("GET, POST, PUT, DELETE, OPTIONS"),
    );
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_HEADERS,
        HeaderValue::from_static("Content-Type, Authorization, Accept"),
    );
    response
}

// ============================================================================
// Handlers
// ============================================================================

async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

async fn openapi() -> impl IntoResponse {
    ([(header::CONTENT_TYPE, "text/yaml")], OPENAPI_YAML)
}

async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        version: env!("CARGO_PKG_VERSION"),
        oaep_hash: state.keys.oaep_hash().to_string(),
        keys: state.keys.store().len(),
        employees: state.employees.len(),
    })
}

async fn not_found() -> ApiError {
    ApiError::not_found("Not found")
}

async fn create_key(
    State(state): State<AppState>,
) -> Result<(StatusCode, Json<KeyCreatedResponse>), ApiError> {
    let manager = state.keys.clone();
    let id = tokio::task::spawn_blocking(move || manager.generate_and_store())
        .await
        .map_err(ApiError::internal)??;

    Ok((StatusCode::CREATED, Json(KeyCreatedResponse { id })))
}

async fn get_public_key(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<PublicKeyResponse>, ApiError> {
    let id = parse_id(&id).ok_or_else(|| ApiError::not_found("Key not found"))?;
    let public_key = state
        .keys
        .public_key_base64(id)
        .ok_or(ServiceError::KeyNotFound { id })?;

    Ok(Json(PublicKeyResponse { id, public_key }))
}

async fn list_employees(State(state): State<AppState>) -> Json<Vec<Employee>> {
    Json(state.employees.list())
}

async fn get_employee(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Employee>, ApiError> {
    let employee = parse_id(&id)
        .and_then(|id| state.employees.get(id))
        .ok_or(DirectoryError::NotFound)?;
    Ok(Json(employee))
}

async fn create_employee(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<(StatusCode, Json<Employee>), ApiError> {
    let draft = EmployeeDraft::from_json(&parse_json_body(&body)?);
    let employee = state.employees.create(draft)?;
    Ok((StatusCode::CREATED, Json(employee)))
}

/// JSON bodies are read when the media type says so; anything else is
/// read as form fields layered over the query string.
async fn update_employee(
    State(state): State<AppState>,
    Path(id): Path<String>,
    request: Request,
) -> Result<Json<Employee>, ApiError> {
    let id = parse_id(&id)
        .filter(|id| state.employees.get(*id).is_some())
        .ok_or(DirectoryError::NotFound)?;

    let is_json = request
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| v.contains("application/json"));

    let draft = if is_json {
        let body = Bytes::from_request(request, &())
            .await
            .map_err(|_| ApiError::bad_request("Invalid JSON"))?;
        EmployeeDraft::from_json(&parse_json_body(&body)?)
    } else {
        let mut params = Query::<HashMap<String, String>>::try_from_uri(request.uri())
            .map(|Query(q)| q)
            .unwrap_or_default();
        if let Ok(Form(form)) = Form::<HashMap<String, String>>::from_request(request, &()).await
        {
            params.extend(form);
        }
        EmployeeDraft::from_params(&params)
    };

    Ok(Json(state.employees.update(id, draft)?))
}

async fn delete_employee(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>, ApiError> {
    let id = parse_id(&id).ok_or(DirectoryError::NotFound)?;
    state.employees.delete(id)?;
    Ok(Json(MessageResponse { message: "Deleted" }))
}

// ============================================================================
// Helpers
// ============================================================================

/// Path ids that are not non-negative integers never match a record
fn parse_id(raw: &str) -> Option<u64> {
    raw.trim().parse().ok()
}

/// Blank bodies read as an empty object
fn parse_json_body(body: &[u8]) -> Result<Value, ApiError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(Value::Object(Default::default()));
    }
    serde_json::from_slice(body).map_err(|_| ApiError::bad_request("Invalid JSON"))
}
