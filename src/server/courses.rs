use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, Query, State},
    http::{StatusCode, header},
    response::IntoResponse,
};

use crate::server::AppState;
use crate::server::dto::{CourseBody, CourseResponse, DeleteCourseParams, course_location};
use crate::server::response::{ApiError, StoreOptionExt};
use crate::server::validation;
use crate::types::Course;

pub async fn list_courses(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let store = state.store.as_ref();

    let courses = store.list_courses()?;
    let mut responses = Vec::with_capacity(courses.len());
    for course in courses {
        let review_ids = store.list_course_review_ids(course.id)?;
        responses.push(CourseResponse::new(course, &review_ids));
    }

    Ok::<_, ApiError>(Json(responses))
}

pub async fn create_course(
    State(state): State<Arc<AppState>>,
    Json(body): Json<CourseBody>,
) -> impl IntoResponse {
    let input = validation::course_input(&body)?;

    // A duplicate url comes back as a conflict from the store's unique
    // constraint and maps to a 409 here.
    let course = state.store.create_course(&input)?;

    let location = course_location(course.id);
    Ok::<_, ApiError>((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(CourseResponse::new(course, &[])),
    ))
}

pub async fn get_course(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> impl IntoResponse {
    let store = state.store.as_ref();

    let course = store.get_course(id)?.or_not_found("course", id)?;
    let review_ids = store.list_course_review_ids(course.id)?;

    Ok::<_, ApiError>(Json(CourseResponse::new(course, &review_ids)))
}

pub async fn update_course(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
    Json(body): Json<CourseBody>,
) -> impl IntoResponse {
    let store = state.store.as_ref();
    let input = validation::course_input(&body)?;

    // Updating a missing id is an explicit 404, not a zero-row no-op.
    let existing = store.get_course(id)?.or_not_found("course", id)?;
    store.update_course(id, &input)?;

    let course = Course {
        id,
        title: input.title,
        url: input.url,
        created_at: existing.created_at,
    };
    let review_ids = store.list_course_review_ids(id)?;

    Ok::<_, ApiError>((
        [(header::LOCATION, course_location(id))],
        Json(CourseResponse::new(course, &review_ids)),
    ))
}

pub async fn delete_course(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
    Query(params): Query<DeleteCourseParams>,
) -> impl IntoResponse {
    let store = state.store.as_ref();

    let course = store.get_course(id)?.or_not_found("course", id)?;

    let review_count = store.count_course_reviews(course.id)?;
    if review_count > 0 && params.force != Some(true) {
        return Err(ApiError::conflict(
            "Course has reviews. Use ?force=true to delete them as well",
        ));
    }

    store.delete_course(course.id)?;

    Ok::<_, ApiError>(StatusCode::NO_CONTENT)
}
