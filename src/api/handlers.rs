//! HTTP request handlers for the MinWinTid mock API.
//!
//! This module contains the handler functions for all routes: the liveness
//! probe, the two time-data variants, and the OAuth token stub.

use axum::{
    extract::{rejection::QueryRejection, Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use rand::{rngs::StdRng, SeedableRng};
use serde_json::json;
use tracing::{info, warn};
use uuid::Uuid;

use crate::generator::{generate_timesheet, SalaryPolicy};

use super::legacy::TiddataResponse;
use super::ords::{OrdsTiddataResponse, TokenResponse};
use super::request::TiddataParams;
use super::response::{ApiError, ApiErrorResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(root_handler))
        .route("/json/Hr/Vaktor/Vaktor_Tiddata", get(legacy_tiddata_handler))
        .route("/ords/dvh/hr/vaktor/tiddata", get(ords_tiddata_handler))
        .route("/ords/dvh/oauth/token", post(token_handler))
        .with_state(state)
}

/// Handler for the `GET /` liveness probe.
async fn root_handler() -> impl IntoResponse {
    Json(json!({"Hello": "World"}))
}

/// Handler for the legacy `GET /json/Hr/Vaktor/Vaktor_Tiddata` endpoint.
///
/// Salaries are re-drawn for every day, matching the legacy feed.
async fn legacy_tiddata_handler(
    State(state): State<AppState>,
    params: Result<Query<TiddataParams>, QueryRejection>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();
    let params = match extract_params(correlation_id, params) {
        Ok(params) => params,
        Err(error) => return error.into_response(),
    };
    info!(
        correlation_id = %correlation_id,
        ident = %params.ident,
        fra_dato = %params.fra_dato,
        til_dato = %params.til_dato,
        "Processing legacy tiddata request"
    );

    let range = match params.date_range() {
        Ok(range) => range,
        Err(err) => {
            warn!(correlation_id = %correlation_id, error = %err, "Rejecting malformed date");
            return ApiErrorResponse::from(err).into_response();
        }
    };

    let mut rng = StdRng::from_entropy();
    let days = generate_timesheet(&range, SalaryPolicy::PerDay, &mut rng);

    match TiddataResponse::build(&params.ident, &days, state.profile()) {
        Ok(payload) => {
            info!(
                correlation_id = %correlation_id,
                days = days.len(),
                "Generated legacy timesheet"
            );
            (StatusCode::OK, Json(payload)).into_response()
        }
        Err(err) => {
            warn!(correlation_id = %correlation_id, error = %err, "Failed to build response");
            ApiErrorResponse::from(err).into_response()
        }
    }
}

/// Handler for the `GET /ords/dvh/hr/vaktor/tiddata` endpoint.
///
/// The salary is drawn once per request and reused across every day,
/// matching the ORDS feed.
async fn ords_tiddata_handler(
    State(state): State<AppState>,
    params: Result<Query<TiddataParams>, QueryRejection>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();
    let params = match extract_params(correlation_id, params) {
        Ok(params) => params,
        Err(error) => return error.into_response(),
    };
    info!(
        correlation_id = %correlation_id,
        ident = %params.ident,
        fra_dato = %params.fra_dato,
        til_dato = %params.til_dato,
        "Processing ORDS tiddata request"
    );

    let range = match params.date_range() {
        Ok(range) => range,
        Err(err) => {
            warn!(correlation_id = %correlation_id, error = %err, "Rejecting malformed date");
            return ApiErrorResponse::from(err).into_response();
        }
    };

    let mut rng = StdRng::from_entropy();
    let policy = SalaryPolicy::per_request(&mut rng);
    let days = generate_timesheet(&range, policy, &mut rng);

    match OrdsTiddataResponse::build(&params.ident, &days, state.profile()) {
        Ok(payload) => {
            info!(
                correlation_id = %correlation_id,
                days = days.len(),
                "Generated ORDS timesheet"
            );
            (StatusCode::OK, Json(payload)).into_response()
        }
        Err(err) => {
            warn!(correlation_id = %correlation_id, error = %err, "Failed to build response");
            ApiErrorResponse::from(err).into_response()
        }
    }
}

/// Handler for the `POST /ords/dvh/oauth/token` stub.
///
/// Returns the fixed bearer payload regardless of the request body; nothing
/// is validated.
async fn token_handler() -> impl IntoResponse {
    Json(TokenResponse::stub())
}

/// Unwraps the query extractor, mapping a rejection to a 400 response.
fn extract_params(
    correlation_id: Uuid,
    params: Result<Query<TiddataParams>, QueryRejection>,
) -> Result<TiddataParams, ApiErrorResponse> {
    match params {
        Ok(Query(params)) => Ok(params),
        Err(rejection) => {
            let body_text = rejection.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "Query parameter rejection"
            );
            let error = if body_text.contains("missing field") {
                ApiError::missing_parameter(body_text)
            } else {
                ApiError::invalid_query(body_text)
            };
            Err(ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use serde_json::Value;
    use tower::ServiceExt;

    use crate::api::legacy::LegacyDay;
    use crate::config::ServiceConfig;

    fn create_test_router() -> Router {
        create_router(AppState::new(ServiceConfig::default()))
    }

    async fn get_json(router: Router, uri: &str) -> (StatusCode, Value) {
        let response = router
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&body).unwrap())
    }

    #[tokio::test]
    async fn test_root_returns_hello_world() {
        let (status, json) = get_json(create_test_router(), "/").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["Hello"], "World");
    }

    #[tokio::test]
    async fn test_legacy_tiddata_returns_envelope() {
        let (status, json) = get_json(
            create_test_router(),
            "/json/Hr/Vaktor/Vaktor_Tiddata?ident=E123456&fra_dato=2024-01-01&til_dato=2024-01-07",
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        let result = &json["Vaktor.Vaktor_TiddataResponse"]["Vaktor.Vaktor_TiddataResult"][0];
        assert_eq!(result["Vaktor.resource_id"], "E123456");

        let days: Vec<LegacyDay> =
            serde_json::from_str(result["Vaktor.dager"].as_str().unwrap()).unwrap();
        assert_eq!(days.len(), 7);
    }

    #[tokio::test]
    async fn test_missing_parameter_returns_400() {
        let (status, json) = get_json(
            create_test_router(),
            "/json/Hr/Vaktor/Vaktor_Tiddata?ident=E123456&fra_dato=2024-01-01",
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["code"], "MISSING_PARAMETER");
    }

    #[tokio::test]
    async fn test_malformed_date_returns_400() {
        let (status, json) = get_json(
            create_test_router(),
            "/ords/dvh/hr/vaktor/tiddata?ident=E123456&fra_dato=01.01.2024&til_dato=2024-01-07",
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["code"], "MALFORMED_DATE");
    }

    #[tokio::test]
    async fn test_token_stub_ignores_body() {
        let router = create_test_router();
        let response = router
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/ords/dvh/oauth/token")
                    .body(Body::from("grant_type=client_credentials"))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let json: Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["token_type"], "bearer");
        assert_eq!(json["expires_in"], 1);
    }
}
