//! HTTP route handlers.

use askama::Template;
use axum::{
    Json, Router,
    extract::{Query, State, rejection::QueryRejection},
    http::{HeaderMap, StatusCode, header},
    response::{Html, IntoResponse, Response},
    routing::get,
};
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use crate::domain::{Coordinate, CoordinateError};
use crate::locate::{LocatedStation, Selection, StationQuery, locate};
use crate::ocm::{FetchRequest, OcmError};

use super::dto::*;
use super::state::AppState;
use super::templates::*;

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(postal_code_listing))
        .route("/nearest", get(nearest_listing))
        .route("/health", get(health))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Response body format, chosen from the `Accept` header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseFormat {
    Html,
    Json,
}

impl ResponseFormat {
    /// HTML unless the client asks for JSON and not for HTML.
    fn from_headers(headers: &HeaderMap) -> Self {
        let accept = headers
            .get(header::ACCEPT)
            .and_then(|v| v.to_str().ok())
            .unwrap_or("");

        if accept.contains("application/json") && !accept.contains("text/html") {
            ResponseFormat::Json
        } else {
            ResponseFormat::Html
        }
    }
}

/// Stations in a postal code, nearest first.
async fn postal_code_listing(
    State(state): State<AppState>,
    headers: HeaderMap,
    query: Result<Query<LocateRequest>, QueryRejection>,
) -> Response {
    let format = ResponseFormat::from_headers(&headers);

    let (postal_code, result) = match query {
        Ok(Query(req)) => (
            req.postalcode.clone(),
            postal_code_response(&state, req, format).await,
        ),
        Err(rejection) => (None, Err(AppError::from(rejection))),
    };

    result.unwrap_or_else(|e| {
        warn!(
            route = "/",
            postal_code = postal_code.as_deref(),
            status = %e.status(),
            message = e.message(),
            "listing failed"
        );
        e.into_response_as(format)
    })
}

async fn postal_code_response(
    state: &AppState,
    req: LocateRequest,
    format: ResponseFormat,
) -> Result<Response, AppError> {
    // A bare visit to `/` gets the lookup form.
    let Some(postal_code) = req.postalcode.filter(|c| !c.trim().is_empty()) else {
        return match format {
            ResponseFormat::Html => Ok(IndexTemplate::new(
                state.config.default_reference,
                state.config.api_key.is_some(),
            )
            .into_response()),
            ResponseFormat::Json => Err(AppError::BadRequest {
                message: "postalcode is required".to_string(),
            }),
        };
    };

    let reference = Coordinate::parse_or(
        req.latitude.as_deref(),
        req.longitude.as_deref(),
        state.config.default_reference,
    )?;
    let api_key = require_api_key(state, req.apikey.as_deref())?;

    let fetch = FetchRequest::postal_code(&postal_code, api_key);
    let query = StationQuery::postal_code(postal_code, reference);

    let located = run_query(state, &fetch, &query).await?;
    render_listing(located, &query, format)
}

/// The closest stations to a point, regardless of postal code.
async fn nearest_listing(
    State(state): State<AppState>,
    headers: HeaderMap,
    query: Result<Query<NearestRequest>, QueryRejection>,
) -> Response {
    let format = ResponseFormat::from_headers(&headers);

    let (reference, result) = match query {
        Ok(Query(req)) => {
            let reference = format!(
                "{},{}",
                req.latitude.as_deref().unwrap_or(""),
                req.longitude.as_deref().unwrap_or("")
            );
            (Some(reference), nearest_response(&state, req, format).await)
        }
        Err(rejection) => (None, Err(AppError::from(rejection))),
    };

    result.unwrap_or_else(|e| {
        warn!(
            route = "/nearest",
            reference = reference.as_deref(),
            status = %e.status(),
            message = e.message(),
            "listing failed"
        );
        e.into_response_as(format)
    })
}

async fn nearest_response(
    state: &AppState,
    req: NearestRequest,
    format: ResponseFormat,
) -> Result<Response, AppError> {
    let reference = Coordinate::parse_or(
        req.latitude.as_deref(),
        req.longitude.as_deref(),
        state.config.default_reference,
    )?;
    let api_key = require_api_key(state, req.apikey.as_deref())?;
    let limit = state.config.nearest_limit(req.limit);

    let fetch = FetchRequest::around(reference, api_key);
    let query = StationQuery::nearest(limit, reference);

    let located = run_query(state, &fetch, &query).await?;
    render_listing(located, &query, format)
}

fn require_api_key(state: &AppState, requested: Option<&str>) -> Result<String, AppError> {
    state.api_key(requested).ok_or_else(|| AppError::BadRequest {
        message: "apikey is required".to_string(),
    })
}

/// Fetch upstream and run the locate pipeline.
async fn run_query(
    state: &AppState,
    fetch: &FetchRequest,
    query: &StationQuery,
) -> Result<Vec<LocatedStation>, AppError> {
    let stations = state.source.fetch(fetch).await?;
    let located = locate(stations, query);

    info!(
        source = state.source.label(),
        selection = ?query.selection,
        reference = %query.reference,
        count = located.len(),
        "listing served"
    );

    Ok(located)
}

fn render_listing(
    located: Vec<LocatedStation>,
    query: &StationQuery,
    format: ResponseFormat,
) -> Result<Response, AppError> {
    match format {
        ResponseFormat::Html => {
            let html = ChargerListTemplate::from_located(&located)
                .render()
                .map_err(|e| AppError::Internal {
                    message: format!("Template error: {}", e),
                })?;
            Ok(Html(html).into_response())
        }
        ResponseFormat::Json => {
            let postal_code = match &query.selection {
                Selection::PostalCode(code) => Some(code.clone()),
                Selection::Nearest { .. } => None,
            };
            Ok(Json(LocateResponse {
                count: located.len(),
                reference: query.reference,
                postal_code,
                stations: located,
            })
            .into_response())
        }
    }
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
    Upstream { message: String },
    Internal { message: String },
}

impl AppError {
    fn status(&self) -> StatusCode {
        match self {
            AppError::BadRequest { .. } => StatusCode::BAD_REQUEST,
            AppError::Upstream { .. } => StatusCode::BAD_GATEWAY,
            AppError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn title(&self) -> &'static str {
        match self {
            AppError::BadRequest { .. } => "Bad request",
            AppError::Upstream { .. } => "Charger data unavailable",
            AppError::Internal { .. } => "Internal error",
        }
    }

    fn message(&self) -> &str {
        match self {
            AppError::BadRequest { message }
            | AppError::Upstream { message }
            | AppError::Internal { message } => message,
        }
    }

    /// Render the error in the format the client asked for.
    pub fn into_response_as(self, format: ResponseFormat) -> Response {
        let status = self.status();

        match format {
            ResponseFormat::Json => {
                let body = Json(ErrorResponse {
                    error: self.message().to_string(),
                });
                (status, body).into_response()
            }
            ResponseFormat::Html => {
                let template = ErrorTemplate {
                    title: self.title().to_string(),
                    message: self.message().to_string(),
                };
                match template.render() {
                    Ok(html) => (status, Html(html)).into_response(),
                    Err(e) => (status, format!("{}: {}", self.message(), e)).into_response(),
                }
            }
        }
    }
}

impl From<CoordinateError> for AppError {
    fn from(e: CoordinateError) -> Self {
        AppError::BadRequest {
            message: e.to_string(),
        }
    }
}

impl From<QueryRejection> for AppError {
    fn from(e: QueryRejection) -> Self {
        AppError::BadRequest {
            message: e.body_text(),
        }
    }
}

impl From<OcmError> for AppError {
    fn from(e: OcmError) -> Self {
        AppError::Upstream {
            message: e.to_string(),
        }
    }
}
