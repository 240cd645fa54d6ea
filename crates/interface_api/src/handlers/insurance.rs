//! Insurance quote handlers

use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use tracing::{info, warn};

use domain_premium::QuoteRequest;

use crate::dto::insurance::{InsuranceRequest, InsuranceResponse};
use crate::error::ApiError;
use crate::AppState;

/// Calculates a premium quote
///
/// Malformed JSON is a 400, well-formed input failing field validation is a
/// 422, and a request the rating rules reject (e.g. an applied rate above
/// 100%) is a 400.
pub async fn calculate(
    State(state): State<AppState>,
    payload: Result<Json<InsuranceRequest>, JsonRejection>,
) -> Result<Json<InsuranceResponse>, ApiError> {
    let Json(request) = payload.map_err(|rejection| {
        warn!(error = %rejection.body_text(), "Rejected quote payload");
        ApiError::from(rejection)
    })?;

    if let Err(e) = request.check(state.calculator.current_year()) {
        warn!(error = %e, "Quote request failed validation");
        return Err(e);
    }

    let quote = QuoteRequest::from(request);
    let result = state.calculator.quote(&quote).map_err(|e| {
        warn!(
            make = %quote.make,
            model = %quote.model,
            year = quote.year,
            error = %e,
            "Quote rejected"
        );
        ApiError::from(e)
    })?;

    info!(
        make = %quote.make,
        model = %quote.model,
        year = quote.year,
        premium = %result.premium,
        "Quote calculated"
    );

    Ok(Json(result.into()))
}
