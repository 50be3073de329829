//! Handlers for the activity catalogue.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use oasis_db::models::activity::{ActivityResponse, CreateActivity};
use oasis_db::repositories::ActivityRepo;

use crate::error::{AppResult, ErrorResponse};
use crate::extract::ValidatedJson;
use crate::state::AppState;

/// POST /activities
///
/// Create an activity. The id and `created_at` are assigned by the database.
#[utoipa::path(
    post,
    path = "/activities",
    tag = "activities",
    request_body = CreateActivity,
    responses(
        (status = 201, description = "Activity created", body = ActivityResponse),
        (status = 415, description = "Body is not declared as JSON", body = ErrorResponse),
        (status = 422, description = "Invalid payload", body = ErrorResponse)
    )
)]
pub async fn create_activity(
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<CreateActivity>,
) -> AppResult<impl IntoResponse> {
    let activity = ActivityRepo::create(&state.pool, &input).await?;

    tracing::info!(
        activity_id = %activity.id,
        category = %activity.category,
        duration_minutes = activity.duration_minutes.minutes(),
        "Activity created",
    );

    Ok((StatusCode::CREATED, Json(ActivityResponse::from(activity))))
}

/// GET /activities
///
/// List every activity in database order.
#[utoipa::path(
    get,
    path = "/activities",
    tag = "activities",
    responses(
        (status = 200, description = "All activities", body = Vec<ActivityResponse>),
        (status = 500, description = "Database unavailable", body = ErrorResponse)
    )
)]
pub async fn list_activities(
    State(state): State<AppState>,
) -> AppResult<Json<Vec<ActivityResponse>>> {
    let activities = ActivityRepo::list(&state.pool).await?;

    Ok(Json(
        activities.into_iter().map(ActivityResponse::from).collect(),
    ))
}
