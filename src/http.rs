use crate::configuration::Configuration;
use crate::engine::BookingEngine;
use crate::schedule::Schedule;
use crate::store::BookingStore;
use crate::types::{BookingError, NewBooking, SlotState};
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::{
    routing::{get, post},
    Json, Router,
};
use chrono::{Local, NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use tower_http::cors::{Any, CorsLayer};
use tracing::error;
use uuid::Uuid;
use validator::Validate;

#[derive(Clone)]
pub struct AppState<S: BookingStore> {
    engine: BookingEngine<S>,
}

#[derive(Debug, Clone, Deserialize)]
struct SlotsQuery {
    date: NaiveDate,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct SlotResponse {
    time: String,
    state: SlotState,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct DayScheduleResponse {
    label: String,
    slots: Vec<SlotResponse>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
struct BookSlotRequest {
    date: NaiveDate,
    time: String,
    #[validate(length(min = 1, message = "name is required"))]
    name: String,
    #[validate(length(min = 1, message = "phone is required"))]
    phone: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct BookingAccepted {
    success: bool,
    #[serde(rename = "bookingId")]
    booking_id: Uuid,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct BookingRejected {
    success: bool,
    #[serde(rename = "errorKind")]
    error_kind: String,
    message: String,
}

pub fn create_app<S: BookingStore, C: Configuration>(store: S, configuration: C) -> Router {
    let schedule = Schedule::new(
        configuration.start_hour(),
        configuration.end_hour(),
        configuration.slot_minutes(),
        configuration.weekdays(),
    );
    let state = AppState {
        engine: BookingEngine::new(schedule, store),
    };

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/slots", get(get_slots::<S>))
        .route("/book", post(book_slot::<S>))
        .with_state(state)
        .layer(cors)
}

fn rejection(err: BookingError) -> Response {
    let (status, kind) = match &err {
        BookingError::Validation(_) => (StatusCode::UNPROCESSABLE_ENTITY, "VALIDATION"),
        BookingError::InvalidSlot => (StatusCode::BAD_REQUEST, "INVALID_SLOT"),
        BookingError::AlreadyBooked => (StatusCode::CONFLICT, "ALREADY_BOOKED"),
        BookingError::Storage(_) => (StatusCode::INTERNAL_SERVER_ERROR, "STORAGE_FAILURE"),
    };
    (
        status,
        Json(BookingRejected {
            success: false,
            error_kind: kind.into(),
            message: err.to_string(),
        }),
    )
        .into_response()
}

async fn get_slots<S: BookingStore>(
    State(state): State<AppState<S>>,
    Query(query): Query<SlotsQuery>,
) -> Response {
    let today = Local::now().date_naive();
    match state.engine.day_schedule(query.date, today) {
        Ok(day) => {
            let slots = day
                .slots
                .iter()
                .map(|slot| SlotResponse {
                    time: slot.time.format("%H:%M").to_string(),
                    state: slot.state,
                })
                .collect();
            Json(DayScheduleResponse {
                label: day.label,
                slots,
            })
            .into_response()
        }
        Err(err) => {
            error!(?err, date = %query.date, "Failed to load slot states");
            rejection(err)
        }
    }
}

async fn book_slot<S: BookingStore>(
    State(state): State<AppState<S>>,
    Json(request): Json<BookSlotRequest>,
) -> Response {
    if let Err(err) = request.validate() {
        return rejection(BookingError::Validation(err.to_string()));
    }

    let Ok(time) = NaiveTime::parse_from_str(&request.time, "%H:%M") else {
        return rejection(BookingError::InvalidSlot);
    };

    let today = Local::now().date_naive();
    let new_booking = NewBooking {
        date: request.date,
        time,
        customer_name: request.name,
        customer_phone: request.phone,
    };
    match state.engine.book_slot(new_booking, today) {
        Ok(id) => Json(BookingAccepted {
            success: true,
            booking_id: id,
        })
        .into_response(),
        Err(err) => rejection(err),
    }
}
