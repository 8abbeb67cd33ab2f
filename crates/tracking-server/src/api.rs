use axum::{
    Form, Json, Router,
    extract::{
        DefaultBodyLimit, Multipart, State,
        multipart::{Field, MultipartRejection},
        rejection::{FormRejection, JsonRejection},
    },
    response::IntoResponse,
    routing::{get, post},
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::{str::FromStr, sync::Arc};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::debug;

use application::{AccessToken, CreateAgent, SubmitDelivery};
use domain::{Coordinates, DomainError, Package};

use crate::error::ApiError;
use crate::extract::CurrentAgent;
use crate::state::AppState;

/// Upper bound for request bodies; delivery photos come from phone cameras.
const MAX_UPLOAD_BYTES: usize = 20 * 1024 * 1024;

pub fn create_router(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let api = Router::new()
        .route("/token", post(login))
        .route("/packages", get(list_packages))
        .route("/deliver", post(deliver))
        .route("/agents/create", post(create_agent));

    let prefix = normalize_prefix(&state.api_prefix);
    let router = Router::new().route("/health", get(health));
    let router = if prefix.is_empty() {
        router.merge(api)
    } else {
        router.nest(&prefix, api)
    };

    router
        .layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// `/api/v1/` -> `/api/v1`, `api` -> `/api`, `/` -> `` (mount at root)
fn normalize_prefix(prefix: &str) -> String {
    let trimmed = prefix.trim().trim_matches('/');
    if trimmed.is_empty() {
        String::new()
    } else {
        format!("/{trimmed}")
    }
}

async fn health() -> impl IntoResponse {
    Json(json!({ "status": "ok" }))
}

#[derive(Deserialize)]
struct LoginForm {
    username: String,
    password: String,
}

async fn login(
    State(state): State<Arc<AppState>>,
    form: Result<Form<LoginForm>, FormRejection>,
) -> Result<Json<AccessToken>, ApiError> {
    let Form(form) = form?;
    match state.auth.login(&form.username, &form.password).await {
        Ok(token) => Ok(Json(token)),
        Err(DomainError::Unauthorized) => Err(ApiError::Unauthorized("Incorrect credentials")),
        Err(e) => Err(e.into()),
    }
}

/// Public shape of a package; internal columns stay server-side.
#[derive(Debug, Serialize)]
struct PackageOut {
    id: i32,
    package_uid: String,
    address: String,
    city: Option<String>,
    state: Option<String>,
    postal_code: Option<String>,
    status: String,
}

impl From<Package> for PackageOut {
    fn from(p: Package) -> Self {
        Self {
            id: p.id,
            package_uid: p.package_uid,
            address: p.address,
            city: p.city,
            state: p.state,
            postal_code: p.postal_code,
            status: p.status.as_str().to_string(),
        }
    }
}

async fn list_packages(
    State(state): State<Arc<AppState>>,
    CurrentAgent(agent): CurrentAgent,
) -> Result<Json<Vec<PackageOut>>, ApiError> {
    let packages = state.packages.packages_for_agent(agent.id).await?;
    Ok(Json(packages.into_iter().map(PackageOut::from).collect()))
}

#[derive(Debug, Serialize)]
struct DeliveryAck {
    detail: &'static str,
    delivery_id: i32,
}

#[derive(Default)]
struct DeliveryForm {
    package_id: Option<i32>,
    latitude: Option<f64>,
    longitude: Option<f64>,
    notes: Option<String>,
    file: Option<(String, Vec<u8>)>,
}

async fn deliver(
    State(state): State<Arc<AppState>>,
    CurrentAgent(agent): CurrentAgent,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<DeliveryAck>, ApiError> {
    let mut multipart = multipart?;
    let mut form = DeliveryForm::default();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::Validation(e.body_text()))?
    {
        let name = field.name().unwrap_or_default().to_string();
        match name.as_str() {
            "package_id" => form.package_id = Some(parse_field(field, "package_id").await?),
            "latitude" => form.latitude = Some(parse_field(field, "latitude").await?),
            "longitude" => form.longitude = Some(parse_field(field, "longitude").await?),
            "notes" => form.notes = Some(field_text(field).await?),
            "file" => {
                let file_name = field.file_name().unwrap_or_default().to_string();
                let contents = field
                    .bytes()
                    .await
                    .map_err(|e| ApiError::Validation(e.body_text()))?;
                form.file = Some((file_name, contents.to_vec()));
            }
            other => debug!(field = %other, "Ignoring unexpected multipart field"),
        }
    }

    let package_id = form.package_id.ok_or_else(|| missing("package_id"))?;
    let latitude = form.latitude.ok_or_else(|| missing("latitude"))?;
    let longitude = form.longitude.ok_or_else(|| missing("longitude"))?;
    let (file_name, contents) = form.file.ok_or_else(|| missing("file"))?;
    let coordinates = Coordinates::new(latitude, longitude)?;

    let delivery = state
        .deliveries
        .submit(
            &agent,
            SubmitDelivery {
                package_id,
                coordinates,
                notes: form.notes,
                file_name,
                contents,
            },
        )
        .await?;

    Ok(Json(DeliveryAck {
        detail: "Delivery recorded",
        delivery_id: delivery.id,
    }))
}

fn missing(field: &str) -> ApiError {
    ApiError::Validation(format!("{field}: field required"))
}

async fn field_text(field: Field<'_>) -> Result<String, ApiError> {
    field
        .text()
        .await
        .map_err(|e| ApiError::Validation(e.body_text()))
}

async fn parse_field<T: FromStr>(field: Field<'_>, name: &str) -> Result<T, ApiError> {
    let text = field_text(field).await?;
    text.trim()
        .parse()
        .map_err(|_| ApiError::Validation(format!("{name}: invalid value '{}'", text.trim())))
}

#[derive(Debug, Serialize)]
struct AgentCreated {
    id: i32,
    username: String,
}

// TODO: require an admin credential before exposing this outside development.
async fn create_agent(
    State(state): State<Arc<AppState>>,
    request: Result<Json<CreateAgent>, JsonRejection>,
) -> Result<Json<AgentCreated>, ApiError> {
    let Json(request) = request?;
    let agent = state.agents.create_agent(request).await?;
    Ok(Json(AgentCreated {
        id: agent.id,
        username: agent.username,
    }))
}
