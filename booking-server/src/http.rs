/// HTTP façade
/// Request/response mapping around the stores, the search assembler and
/// the chat assistant. No business logic of its own.

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::routing::{get, post};
use axum::{Json, Router};
use booking_core::assemble_offers;
use serde::Deserialize;
use serde_json::{json, Value};
use sqlx::SqlitePool;
use tower_http::cors::CorsLayer;

use crate::chat::ChatAssistant;
use crate::error::ApiError;
use crate::store::{
    booking::NewBooking, BookingStore, DistrictStore, DroppingPointStore, ProviderStore,
    RouteStore,
};

#[derive(Clone)]
pub struct AppState {
    pub districts: DistrictStore,
    pub dropping_points: DroppingPointStore,
    pub providers: ProviderStore,
    pub routes: RouteStore,
    pub bookings: BookingStore,
    pub chat: Arc<ChatAssistant>,
}

impl AppState {
    pub fn new(pool: SqlitePool, chat: ChatAssistant) -> Self {
        Self {
            districts: DistrictStore::new(pool.clone()),
            dropping_points: DroppingPointStore::new(pool.clone()),
            providers: ProviderStore::new(pool.clone()),
            routes: RouteStore::new(pool.clone()),
            bookings: BookingStore::new(pool),
            chat: Arc::new(chat),
        }
    }
}

/// Build the application router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(root))
        .route("/health", get(health))
        .route("/search-buses", post(search_buses))
        .route("/book-ticket", post(book_ticket))
        .route("/my-bookings/:phone", get(my_bookings))
        .route("/cancel-booking", post(cancel_booking))
        .route("/districts", get(get_districts))
        .route("/bus-providers", get(get_providers))
        .route("/bus-providers/district/:district_name", get(get_providers_by_district))
        .route("/bus-providers/:provider_name", get(get_provider_details))
        .route("/chat", post(chat))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

async fn root() -> Json<Value> {
    Json(json!({"message": "Bus Booking System API"}))
}

async fn health() -> Json<Value> {
    Json(json!({"status": "healthy"}))
}

#[derive(Debug, Deserialize)]
struct SearchBusRequest {
    from_district: String,
    to_district: String,
    max_price: Option<i64>,
}

/// Intersect the providers serving both districts and cross them with
/// the destination's priced dropping points.
async fn search_buses(
    State(state): State<AppState>,
    Json(req): Json<SearchBusRequest>,
) -> Result<Json<Value>, ApiError> {
    tracing::info!(
        "[SEARCH] from={}, to={}, max_price={:?}",
        req.from_district,
        req.to_district,
        req.max_price
    );

    let from_providers = state.providers.get_serving_district(&req.from_district).await?;
    let to_providers = state.providers.get_serving_district(&req.to_district).await?;
    let dropping_points = state
        .dropping_points
        .get_by_district_name(&req.to_district)
        .await?;

    let offers = assemble_offers(
        &req.from_district,
        &req.to_district,
        &from_providers,
        &to_providers,
        &dropping_points,
        req.max_price,
    );

    tracing::info!("[SEARCH] {} offers assembled", offers.len());
    Ok(Json(json!({"results": offers})))
}

#[derive(Debug, Deserialize)]
struct BookingRequest {
    customer_name: String,
    customer_phone: String,
    from_district: String,
    to_district: String,
    dropping_point: String,
    bus_provider: String,
    travel_date: String,
    fare: i64,
}

async fn book_ticket(
    State(state): State<AppState>,
    Json(req): Json<BookingRequest>,
) -> Result<Json<Value>, ApiError> {
    tracing::info!(
        "[BOOK] customer={}, route={} -> {}",
        req.customer_name,
        req.from_district,
        req.to_district
    );

    let travel_date = chrono::NaiveDate::parse_from_str(&req.travel_date, "%Y-%m-%d")
        .map_err(|_| ApiError::Validation("travel_date must be in YYYY-MM-DD format".to_string()))?;

    let new_booking = NewBooking {
        customer_name: req.customer_name,
        customer_phone: req.customer_phone.clone(),
        from_district: req.from_district,
        to_district: req.to_district,
        dropping_point: req.dropping_point,
        bus_provider: req.bus_provider,
        travel_date: travel_date.to_string(),
        fare: req.fare,
    };

    let reference = state.bookings.create(&new_booking).await?;
    let booking = state
        .bookings
        .get_by_reference_and_phone(&reference, &req.customer_phone)
        .await?;

    tracing::info!("[BOOK] created booking {}", reference);
    Ok(Json(json!({
        "success": true,
        "booking_reference": reference,
        "booking": booking,
    })))
}

async fn my_bookings(
    State(state): State<AppState>,
    Path(phone): Path<String>,
) -> Result<Json<Value>, ApiError> {
    let bookings = state.bookings.get_by_phone(&phone).await?;
    Ok(Json(json!({"bookings": bookings})))
}

#[derive(Debug, Deserialize)]
struct CancelBookingRequest {
    booking_reference: String,
    customer_phone: String,
}

async fn cancel_booking(
    State(state): State<AppState>,
    Json(req): Json<CancelBookingRequest>,
) -> Result<Json<Value>, ApiError> {
    tracing::info!("[CANCEL] reference={}", req.booking_reference);

    let booking = state
        .bookings
        .get_by_reference_and_phone(&req.booking_reference, &req.customer_phone)
        .await?
        .ok_or_else(|| {
            ApiError::NotFound("Booking not found or phone number doesn't match".to_string())
        })?;

    if booking.status == "cancelled" {
        return Err(ApiError::Validation("Booking already cancelled".to_string()));
    }

    let success = state
        .bookings
        .cancel(&req.booking_reference, &req.customer_phone)
        .await?;

    let message = if success {
        "Booking cancelled successfully"
    } else {
        "Failed to cancel"
    };
    Ok(Json(json!({"success": success, "message": message})))
}

async fn get_districts(State(state): State<AppState>) -> Result<Json<Value>, ApiError> {
    let districts = state.districts.get_all().await?;
    Ok(Json(json!({"districts": districts})))
}

async fn get_providers(State(state): State<AppState>) -> Result<Json<Value>, ApiError> {
    let providers = state.providers.get_all().await?;
    Ok(Json(json!({"providers": providers})))
}

async fn get_provider_details(
    State(state): State<AppState>,
    Path(provider_name): Path<String>,
) -> Result<Json<Value>, ApiError> {
    let provider = state
        .providers
        .get_by_name(&provider_name)
        .await?
        .ok_or_else(|| ApiError::NotFound("Provider not found".to_string()))?;
    Ok(Json(json!(provider)))
}

async fn get_providers_by_district(
    State(state): State<AppState>,
    Path(district_name): Path<String>,
) -> Result<Json<Value>, ApiError> {
    let providers = state.providers.get_serving_district(&district_name).await?;
    Ok(Json(json!({"providers": providers})))
}

#[derive(Debug, Deserialize)]
struct ChatRequest {
    message: String,
}

/// Chat endpoint. Never fails: the assistant folds every error into the
/// reply text.
async fn chat(State(state): State<AppState>, Json(req): Json<ChatRequest>) -> Json<Value> {
    tracing::info!("[CHAT] message length {}", req.message.len());
    let response = state.chat.process_query(&req.message).await;
    Json(json!({"response": response}))
}
