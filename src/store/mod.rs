mod schema;
mod sqlite;

pub use sqlite::SqliteStore;

use crate::error::Result;
use crate::types::*;

/// Store defines the database interface.
pub trait Store: Send + Sync {
    fn initialize(&self) -> Result<()>;

    // Course operations
    fn create_course(&self, input: &CourseInput) -> Result<Course>;
    fn get_course(&self, id: i64) -> Result<Option<Course>>;
    fn list_courses(&self) -> Result<Vec<Course>>;
    fn update_course(&self, id: i64, input: &CourseInput) -> Result<()>;
    fn delete_course(&self, id: i64) -> Result<bool>;
    fn count_course_reviews(&self, id: i64) -> Result<i64>;
    fn list_course_review_ids(&self, id: i64) -> Result<Vec<i64>>;

    // Review operations
    fn create_review(&self, input: &ReviewInput) -> Result<Review>;
    fn get_review(&self, id: i64) -> Result<Option<Review>>;
    fn list_reviews(&self) -> Result<Vec<Review>>;
    fn update_review(&self, id: i64, input: &ReviewInput) -> Result<()>;
    fn delete_review(&self, id: i64) -> Result<bool>;

    // User operations
    fn create_user(&self, username: &str, email: &str, password_hash: &str) -> Result<User>;
    fn get_user_by_username(&self, username: &str) -> Result<Option<User>>;
    fn find_user_by_username_or_email(
        &self,
        username: &str,
        email: &str,
    ) -> Result<Option<User>>;
}
