use axum::{extract::State, http::StatusCode, Json};
use shared::api::{CreateWebinarRequest, CreatedResponse, ListWebinarsResponse, WebinarResponse};
use shared::models::{WebinarDocument, WEBINARS_COLLECTION};
use shared::schedule::compose_schedule;
use validator::Validate;

use crate::error::ApiResult;
use crate::state::AppState;
use crate::store::{add_document, list_documents};

pub async fn list_webinars(
    State(state): State<AppState>,
) -> ApiResult<Json<ListWebinarsResponse>> {
    let documents =
        list_documents::<WebinarDocument>(state.store.as_ref(), WEBINARS_COLLECTION).await?;

    let webinars: Vec<WebinarResponse> = documents
        .into_iter()
        .map(|(id, doc)| WebinarResponse::from_document(id, doc))
        .collect();

    Ok(Json(ListWebinarsResponse {
        total: webinars.len(),
        webinars,
    }))
}

/// Composes start and end instants from the picked date and times in the
/// configured zone, then stores the webinar.
pub async fn create_webinar(
    State(state): State<AppState>,
    Json(payload): Json<CreateWebinarRequest>,
) -> ApiResult<(StatusCode, Json<CreatedResponse>)> {
    payload.validate()?;

    let schedule = compose_schedule(
        payload.date,
        payload.start_time,
        payload.end_time,
        &state.webinar_timezone,
    )?;

    let document = WebinarDocument {
        title: payload.title,
        meet_link: payload.meet_link,
        start_time: Some(schedule.start),
        end_time: Some(schedule.end),
        description: payload.description,
    };
    let id = add_document(state.store.as_ref(), WEBINARS_COLLECTION, &document).await?;

    tracing::info!(
        "Webinar {} scheduled for {} ({})",
        id,
        schedule.start,
        state.webinar_timezone
    );
    Ok((StatusCode::CREATED, Json(CreatedResponse { id })))
}
