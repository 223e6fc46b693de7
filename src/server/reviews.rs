use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, State},
    http::{StatusCode, header},
    response::IntoResponse,
};

use crate::server::AppState;
use crate::server::dto::{ReviewBody, ReviewResponse, review_location};
use crate::server::response::{ApiError, StoreOptionExt};
use crate::server::validation;

pub async fn list_reviews(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let reviews = state.store.list_reviews()?;
    let responses: Vec<ReviewResponse> = reviews.into_iter().map(ReviewResponse::from).collect();

    Ok::<_, ApiError>(Json(responses))
}

pub async fn create_review(
    State(state): State<Arc<AppState>>,
    Json(body): Json<ReviewBody>,
) -> impl IntoResponse {
    let input = validation::review_input(&body)?;

    // A nonexistent course id trips the foreign key and maps to a 400
    // naming the missing course.
    let review = state.store.create_review(&input)?;

    let location = review_location(review.id);
    Ok::<_, ApiError>((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(ReviewResponse::from(review)),
    ))
}

pub async fn get_review(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> impl IntoResponse {
    let review = state.store.get_review(id)?.or_not_found("review", id)?;

    Ok::<_, ApiError>(Json(ReviewResponse::from(review)))
}

pub async fn update_review(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
    Json(body): Json<ReviewBody>,
) -> impl IntoResponse {
    let store = state.store.as_ref();
    let input = validation::review_input(&body)?;

    store.get_review(id)?.or_not_found("review", id)?;
    store.update_review(id, &input)?;

    let review = store.get_review(id)?.or_not_found("review", id)?;

    Ok::<_, ApiError>((
        [(header::LOCATION, review_location(id))],
        Json(ReviewResponse::from(review)),
    ))
}

pub async fn delete_review(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> impl IntoResponse {
    let store = state.store.as_ref();

    let review = store.get_review(id)?.or_not_found("review", id)?;
    store.delete_review(review.id)?;

    Ok::<_, ApiError>(StatusCode::NO_CONTENT)
}
