use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Course {
    pub id: i64,
    pub title: String,
    pub url: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Review {
    pub id: i64,
    pub course_id: i64,
    pub rating: i64,
    pub comment: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub username: String,
    pub email: String,
    /// Argon2id PHC string. The raw credential is never stored.
    #[serde(skip)]
    pub password: String,
    pub created_at: DateTime<Utc>,
}

/// Validated fields for a course insert or update.
#[derive(Debug, Clone)]
pub struct CourseInput {
    pub title: String,
    pub url: String,
}

/// Validated fields for a review insert or update.
#[derive(Debug, Clone)]
pub struct ReviewInput {
    pub course_id: i64,
    pub rating: i64,
    pub comment: String,
}

/// Registration input. `password` is the raw credential and is hashed
/// before it reaches the store.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub username: String,
    pub email: String,
    pub password: String,
}
