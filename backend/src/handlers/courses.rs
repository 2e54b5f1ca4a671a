use axum::{extract::State, http::StatusCode, Json};
use chrono::Utc;
use shared::api::{CourseResponse, CreateCourseRequest, CreatedResponse, ListCoursesResponse};
use shared::models::{CourseDocument, COURSES_COLLECTION};

use crate::error::ApiResult;
use crate::state::AppState;
use crate::store::{add_document, list_documents};

pub async fn list_courses(State(state): State<AppState>) -> ApiResult<Json<ListCoursesResponse>> {
    let documents =
        list_documents::<CourseDocument>(state.store.as_ref(), COURSES_COLLECTION).await?;

    let courses: Vec<CourseResponse> = documents
        .into_iter()
        .map(|(id, doc)| CourseResponse::from_document(id, doc))
        .collect();

    Ok(Json(ListCoursesResponse {
        total: courses.len(),
        courses,
    }))
}

/// Stores the course exactly as entered, stamped with the creation time.
pub async fn create_course(
    State(state): State<AppState>,
    Json(payload): Json<CreateCourseRequest>,
) -> ApiResult<(StatusCode, Json<CreatedResponse>)> {
    let document = payload.into_document(Utc::now());
    let id = add_document(state.store.as_ref(), COURSES_COLLECTION, &document).await?;

    tracing::info!("Course created with ID: {}", id);
    Ok((StatusCode::CREATED, Json(CreatedResponse { id })))
}
