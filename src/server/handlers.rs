//! Request handlers

use axum::Form;
use axum::extract::State;
use axum::extract::rejection::FormRejection;
use axum::http::{Method, Uri, header};
use axum::response::{IntoResponse, Response};
use serde::Deserialize;
use tracing::{debug, info};

use super::AppState;
use super::assets::{Asset, AssetError, FAVICON_FILE, INDEX_FILE};
use super::error::ApiError;
use crate::validation::{DocumentValidator, render_report};

/// Path prefix reserved for the API
pub const API_PREFIX: &str = "/api";

/// Path prefix for bundled static assets
pub const STATIC_PREFIX: &str = "/static/";

/// Form fields accepted by the validation endpoint.
///
/// Missing fields are treated as empty text, which the validator then
/// reports as unparseable.
#[derive(Debug, Deserialize)]
pub struct ValidateForm {
    #[serde(default)]
    pub schema: String,
    #[serde(default)]
    pub document: String,
}

/// `GET|POST /api/v1/validate`
pub async fn validate(
    State(state): State<AppState>,
    form: Result<Form<ValidateForm>, FormRejection>,
) -> Result<String, ApiError> {
    let Form(ValidateForm { schema, document }) = form?;
    state.limits.check_submission(&schema, &document)?;

    // Validation is CPU-bound; keep it off the async workers.
    let (schema, document, outcome) = tokio::task::spawn_blocking(move || {
        let outcome = DocumentValidator::new().validate(&schema, &document);
        (schema, document, outcome)
    })
    .await
    .map_err(|e| ApiError::Internal(format!("validation task failed: {}", e)))?;

    let report = outcome?;
    info!(
        valid = report.is_valid(),
        problems = report.len(),
        "Validated document"
    );

    Ok(render_report(&schema, &document, &report))
}

/// Methods other than GET/HEAD on a registered API route
pub async fn method_not_allowed() -> ApiError {
    ApiError::MethodNotAllowed
}

/// Everything outside the validation route: the UI bundle, plus 404s for
/// unknown API paths.
pub async fn site(State(state): State<AppState>, method: Method, uri: Uri) -> Response {
    match serve_site(&state, &method, uri.path()).await {
        Ok(asset) => asset_response(asset),
        Err(err) => err.into_response(),
    }
}

async fn serve_site(state: &AppState, method: &Method, path: &str) -> Result<Asset, ApiError> {
    if is_api_path(path) {
        return Err(ApiError::NotFound);
    }

    if *method != Method::GET && *method != Method::HEAD {
        return Err(ApiError::MethodNotAllowed);
    }

    let asset = match path {
        "/" => state.assets.load(INDEX_FILE).await?,
        "/favicon.ico" => state.assets.load(FAVICON_FILE).await?,
        _ => match state.assets.load(path).await {
            Ok(asset) => asset,
            Err(AssetError::NotFound(_)) if is_client_route(path) => {
                debug!(path, "Serving index for client-side route");
                state.assets.load(INDEX_FILE).await?
            }
            Err(err) => return Err(err.into()),
        },
    };

    Ok(asset)
}

fn asset_response(asset: Asset) -> Response {
    ([(header::CONTENT_TYPE, asset.content_type)], asset.body).into_response()
}

/// True for `/api` and anything below it
pub fn is_api_path(path: &str) -> bool {
    path == API_PREFIX || path.starts_with("/api/")
}

/// Extension-less paths outside `/static/` belong to the single-page app.
///
/// Anything that looks like a file name is a real asset request and gets a
/// 404 when missing.
pub fn is_client_route(path: &str) -> bool {
    if path.starts_with(STATIC_PREFIX) {
        return false;
    }
    let last = path.rsplit('/').next().unwrap_or_default();
    !last.contains('.')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_api_path() {
        assert!(is_api_path("/api"));
        assert!(is_api_path("/api/"));
        assert!(is_api_path("/api/v2/validate"));
        assert!(!is_api_path("/apiary"));
        assert!(!is_api_path("/static/api.js"));
    }

    #[test]
    fn test_is_client_route() {
        assert!(is_client_route("/about"));
        assert!(is_client_route("/docs/getting-started"));
        assert!(!is_client_route("/robots.txt"));
        assert!(!is_client_route("/static/app"));
        assert!(!is_client_route("/static/missing.js"));
    }
}
