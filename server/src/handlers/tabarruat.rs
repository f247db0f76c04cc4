use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::header::SET_COOKIE;
use axum::http::HeaderMap;
use axum::response::{AppendHeaders, IntoResponse, Redirect, Response};
use axum::Json;
use serde::Serialize;

use crate::models::list_options;
use crate::services::SubmissionCandidate;
use crate::state::AppState;
use crate::utils::error::AppError;
use crate::utils::flash;
use crate::utils::response::{respond, success};

pub const CONFIRMATION_PATH: &str = "/tabarruat/berjaya";

#[derive(Serialize)]
struct FormPayload {
    options: &'static [&'static str],
}

#[derive(Serialize)]
struct PastiOptions {
    pasti: &'static [&'static str],
}

pub async fn show_form() -> Response {
    success(
        FormPayload {
            options: list_options(),
        },
        "Tabarruat form",
    )
    .into_response()
}

/// Accepts a pledge. On success the confirmation is parked in the flash
/// store and the client is sent to the confirmation page.
pub async fn submit(
    State(state): State<AppState>,
    payload: Result<Json<SubmissionCandidate>, JsonRejection>,
) -> Result<Response, AppError> {
    let Json(candidate) = payload?;

    let confirmation = state.submissions.submit(candidate).await?;
    let token = state.flash.put(confirmation).await;

    Ok((
        AppendHeaders([(SET_COOKIE, flash::set_cookie(token, state.flash.ttl()))]),
        Redirect::to(CONFIRMATION_PATH),
    )
        .into_response())
}

/// Shows the last confirmation once. Later visits get `data: null`.
pub async fn confirmation(State(state): State<AppState>, headers: HeaderMap) -> Response {
    let data = match flash::token_from_headers(&headers) {
        Some(token) => state.flash.take(token).await,
        None => None,
    };

    let message = if data.is_some() {
        "Tabarruat submitted"
    } else {
        "No recent submission"
    };

    (
        AppendHeaders([(SET_COOKIE, flash::clear_cookie())]),
        respond(data, message),
    )
        .into_response()
}

pub async fn pasti_options() -> Response {
    success(
        PastiOptions {
            pasti: list_options(),
        },
        "PASTI options",
    )
    .into_response()
}
