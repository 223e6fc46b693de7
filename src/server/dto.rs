use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::types::{Course, Review};

pub const API_PREFIX: &str = "/api/v1";

#[must_use]
pub fn course_location(id: i64) -> String {
    format!("{API_PREFIX}/courses/{id}")
}

#[must_use]
pub fn review_location(id: i64) -> String {
    format!("{API_PREFIX}/reviews/{id}")
}

/// Course payload. Fields are optional so that presence can be checked
/// with a field-specific message instead of a deserializer error.
#[derive(Debug, Default, Deserialize)]
pub struct CourseBody {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
}

/// Review payload. `course` is the id of the reviewed course.
#[derive(Debug, Default, Deserialize)]
pub struct ReviewBody {
    #[serde(default)]
    pub course: Option<i64>,
    #[serde(default)]
    pub rating: Option<i64>,
    #[serde(default)]
    pub comment: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct DeleteCourseParams {
    #[serde(default)]
    pub force: Option<bool>,
}

/// Course representation with its review links embedded.
#[derive(Debug, Serialize)]
pub struct CourseResponse {
    pub id: i64,
    pub title: String,
    pub url: String,
    pub reviews: Vec<String>,
}

impl CourseResponse {
    #[must_use]
    pub fn new(course: Course, review_ids: &[i64]) -> Self {
        Self {
            id: course.id,
            title: course.title,
            url: course.url,
            reviews: review_ids.iter().map(|id| review_location(*id)).collect(),
        }
    }
}

/// Review representation with a link back to its course embedded.
#[derive(Debug, Serialize)]
pub struct ReviewResponse {
    pub id: i64,
    pub for_course: String,
    pub rating: i64,
    pub comment: String,
    pub created_at: DateTime<Utc>,
}

impl From<Review> for ReviewResponse {
    fn from(review: Review) -> Self {
        Self {
            id: review.id,
            for_course: course_location(review.course_id),
            rating: review.rating,
            comment: review.comment,
            created_at: review.created_at,
        }
    }
}
