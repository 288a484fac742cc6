//! Handlers for the `/terminal` (Stripe in-person payment) routes.
//!
//! The flow: the point-of-sale client fetches a connection token to pair
//! with a card reader, creates a card-present PaymentIntent for the rental
//! amount, and captures (or cancels) it once the reader finishes. Stripe's
//! responses, including its error bodies, relay verbatim.

use axum::extract::{Path, State};
use axum::response::Response;
use axum::Json;
use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::response::relay;
use crate::state::AppState;

/// Request payload for creating a card-present PaymentIntent.
#[derive(Debug, Deserialize)]
pub struct CreatePaymentIntentRequest {
    /// Amount in the currency's smallest unit (cents for USD).
    pub amount: i64,
    /// Three-letter ISO currency code.
    pub currency: String,
}

/// POST /api/terminal/connection_token
pub async fn connection_token(State(state): State<AppState>) -> AppResult<Response> {
    let relayed = state.stripe.connection_token().await?;
    Ok(relay(relayed))
}

/// POST /api/terminal/payment_intent
pub async fn create_payment_intent(
    State(state): State<AppState>,
    Json(payload): Json<CreatePaymentIntentRequest>,
) -> AppResult<Response> {
    if payload.amount <= 0 {
        return Err(AppError::BadRequest(
            "amount must be a positive integer in the smallest currency unit".into(),
        ));
    }
    if payload.currency.len() != 3 || !payload.currency.chars().all(|c| c.is_ascii_alphabetic()) {
        return Err(AppError::BadRequest(
            "currency must be a three-letter ISO code".into(),
        ));
    }

    let currency = payload.currency.to_lowercase();
    let relayed = state
        .stripe
        .create_payment_intent(payload.amount, &currency)
        .await?;

    tracing::info!(amount = payload.amount, %currency, "Created terminal payment intent");

    Ok(relay(relayed))
}

/// POST /api/terminal/payment_intent/{id}/capture
pub async fn capture_payment_intent(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Response> {
    let relayed = state.stripe.capture_payment_intent(&id).await?;
    Ok(relay(relayed))
}

/// POST /api/terminal/payment_intent/{id}/cancel
pub async fn cancel_payment_intent(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Response> {
    let relayed = state.stripe.cancel_payment_intent(&id).await?;
    Ok(relay(relayed))
}
