use std::path::Path;
use std::sync::Mutex;

use chrono::{DateTime, Utc};
use rusqlite::{Connection, OptionalExtension, params};

use super::Store;
use super::schema::SCHEMA;
use crate::error::{Error, Result};
use crate::types::*;

pub struct SqliteStore {
    conn: Mutex<Connection>,
}

impl SqliteStore {
    pub fn new<P: AsRef<Path>>(db_path: P) -> Result<Self> {
        let conn = Connection::open(db_path)?;

        conn.pragma_update(None, "foreign_keys", "ON")?;
        conn.pragma_update(None, "journal_mode", "WAL")?;

        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    fn conn(&self) -> std::sync::MutexGuard<'_, Connection> {
        self.conn.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Returns a guard to the underlying database connection.
    /// This allows consuming applications to execute custom SQL.
    pub fn connection(&self) -> std::sync::MutexGuard<'_, Connection> {
        self.conn()
    }
}

fn parse_datetime(s: &str) -> DateTime<Utc> {
    DateTime::parse_from_rfc3339(s)
        .map(|dt| dt.with_timezone(&Utc))
        .or_else(|_| {
            // Handle SQLite's default datetime format: "YYYY-MM-DD HH:MM:SS"
            chrono::NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S").map(|ndt| ndt.and_utc())
        })
        .unwrap_or_else(|e| {
            tracing::error!("Invalid datetime in database: '{}' - {}", s, e);
            Utc::now()
        })
}

fn format_datetime(dt: &DateTime<Utc>) -> String {
    dt.to_rfc3339()
}

/// Maps SQLite constraint failures to the crate's conflict and referential
/// error variants so handlers can tell them apart from generic failures.
fn map_constraint(err: rusqlite::Error, unique_msg: String, fk_msg: String) -> Error {
    match err {
        rusqlite::Error::SqliteFailure(e, _)
            if e.extended_code == rusqlite::ffi::SQLITE_CONSTRAINT_UNIQUE =>
        {
            Error::Conflict(unique_msg)
        }
        rusqlite::Error::SqliteFailure(e, _)
            if e.extended_code == rusqlite::ffi::SQLITE_CONSTRAINT_FOREIGNKEY =>
        {
            Error::ForeignKey(fk_msg)
        }
        other => Error::Database(other),
    }
}

fn course_from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Course> {
    Ok(Course {
        id: row.get(0)?,
        title: row.get(1)?,
        url: row.get(2)?,
        created_at: parse_datetime(&row.get::<_, String>(3)?),
    })
}

fn review_from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Review> {
    Ok(Review {
        id: row.get(0)?,
        course_id: row.get(1)?,
        rating: row.get(2)?,
        comment: row.get(3)?,
        created_at: parse_datetime(&row.get::<_, String>(4)?),
    })
}

fn user_from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<User> {
    Ok(User {
        id: row.get(0)?,
        username: row.get(1)?,
        email: row.get(2)?,
        password: row.get(3)?,
        created_at: parse_datetime(&row.get::<_, String>(4)?),
    })
}

impl Store for SqliteStore {
    fn initialize(&self) -> Result<()> {
        self.conn().execute_batch(SCHEMA)?;
        Ok(())
    }

    // Course operations

    fn create_course(&self, input: &CourseInput) -> Result<Course> {
        let created_at = Utc::now();
        let conn = self.conn();
        conn.execute(
            "INSERT INTO courses (title, url, created_at) VALUES (?1, ?2, ?3)",
            params![input.title, input.url, format_datetime(&created_at)],
        )
        .map_err(|e| {
            map_constraint(
                e,
                format!("course url '{}' already exists", input.url),
                String::new(),
            )
        })?;

        Ok(Course {
            id: conn.last_insert_rowid(),
            title: input.title.clone(),
            url: input.url.clone(),
            created_at,
        })
    }

    fn get_course(&self, id: i64) -> Result<Option<Course>> {
        let conn = self.conn();
        conn.query_row(
            "SELECT id, title, url, created_at FROM courses WHERE id = ?1",
            params![id],
            course_from_row,
        )
        .optional()
        .map_err(Error::from)
    }

    fn list_courses(&self) -> Result<Vec<Course>> {
        let conn = self.conn();
        let mut stmt = conn.prepare("SELECT id, title, url, created_at FROM courses ORDER BY id")?;

        let rows = stmt.query_map([], course_from_row)?;

        rows.collect::<std::result::Result<Vec<_>, _>>()
            .map_err(Error::from)
    }

    fn update_course(&self, id: i64, input: &CourseInput) -> Result<()> {
        let rows = self
            .conn()
            .execute(
                "UPDATE courses SET title = ?1, url = ?2 WHERE id = ?3",
                params![input.title, input.url, id],
            )
            .map_err(|e| {
                map_constraint(
                    e,
                    format!("course url '{}' already exists", input.url),
                    String::new(),
                )
            })?;

        if rows == 0 {
            return Err(Error::not_found("course", id));
        }
        Ok(())
    }

    fn delete_course(&self, id: i64) -> Result<bool> {
        let rows = self
            .conn()
            .execute("DELETE FROM courses WHERE id = ?1", params![id])?;
        Ok(rows > 0)
    }

    fn count_course_reviews(&self, id: i64) -> Result<i64> {
        let conn = self.conn();
        conn.query_row(
            "SELECT COUNT(*) FROM reviews WHERE course_id = ?1",
            params![id],
            |row| row.get(0),
        )
        .map_err(Error::from)
    }

    fn list_course_review_ids(&self, id: i64) -> Result<Vec<i64>> {
        let conn = self.conn();
        let mut stmt = conn.prepare("SELECT id FROM reviews WHERE course_id = ?1 ORDER BY id")?;

        let rows = stmt.query_map(params![id], |row| row.get(0))?;

        rows.collect::<std::result::Result<Vec<_>, _>>()
            .map_err(Error::from)
    }

    // Review operations

    fn create_review(&self, input: &ReviewInput) -> Result<Review> {
        let created_at = Utc::now();
        let conn = self.conn();
        conn.execute(
            "INSERT INTO reviews (course_id, rating, comment, created_at)
             VALUES (?1, ?2, ?3, ?4)",
            params![
                input.course_id,
                input.rating,
                input.comment,
                format_datetime(&created_at),
            ],
        )
        .map_err(|e| {
            map_constraint(
                e,
                "review already exists".to_string(),
                format!("course {} does not exist", input.course_id),
            )
        })?;

        Ok(Review {
            id: conn.last_insert_rowid(),
            course_id: input.course_id,
            rating: input.rating,
            comment: input.comment.clone(),
            created_at,
        })
    }

    fn get_review(&self, id: i64) -> Result<Option<Review>> {
        let conn = self.conn();
        conn.query_row(
            "SELECT id, course_id, rating, comment, created_at FROM reviews WHERE id = ?1",
            params![id],
            review_from_row,
        )
        .optional()
        .map_err(Error::from)
    }

    fn list_reviews(&self) -> Result<Vec<Review>> {
        let conn = self.conn();
        let mut stmt = conn
            .prepare("SELECT id, course_id, rating, comment, created_at FROM reviews ORDER BY id")?;

        let rows = stmt.query_map([], review_from_row)?;

        rows.collect::<std::result::Result<Vec<_>, _>>()
            .map_err(Error::from)
    }

    fn update_review(&self, id: i64, input: &ReviewInput) -> Result<()> {
        let rows = self
            .conn()
            .execute(
                "UPDATE reviews SET course_id = ?1, rating = ?2, comment = ?3 WHERE id = ?4",
                params![input.course_id, input.rating, input.comment, id],
            )
            .map_err(|e| {
                map_constraint(
                    e,
                    "review already exists".to_string(),
                    format!("course {} does not exist", input.course_id),
                )
            })?;

        if rows == 0 {
            return Err(Error::not_found("review", id));
        }
        Ok(())
    }

    fn delete_review(&self, id: i64) -> Result<bool> {
        let rows = self
            .conn()
            .execute("DELETE FROM reviews WHERE id = ?1", params![id])?;
        Ok(rows > 0)
    }

    // User operations

    fn create_user(&self, username: &str, email: &str, password_hash: &str) -> Result<User> {
        let created_at = Utc::now();
        let conn = self.conn();
        conn.execute(
            "INSERT INTO users (username, email, password, created_at)
             VALUES (?1, ?2, ?3, ?4)",
            params![username, email, password_hash, format_datetime(&created_at)],
        )
        .map_err(|e| {
            map_constraint(
                e,
                format!("user '{username}' already exists"),
                String::new(),
            )
        })?;

        Ok(User {
            id: conn.last_insert_rowid(),
            username: username.to_string(),
            email: email.to_string(),
            password: password_hash.to_string(),
            created_at,
        })
    }

    fn get_user_by_username(&self, username: &str) -> Result<Option<User>> {
        let conn = self.conn();
        conn.query_row(
            "SELECT id, username, email, password, created_at FROM users WHERE username = ?1",
            params![username],
            user_from_row,
        )
        .optional()
        .map_err(Error::from)
    }

    fn find_user_by_username_or_email(
        &self,
        username: &str,
        email: &str,
    ) -> Result<Option<User>> {
        let conn = self.conn();
        conn.query_row(
            "SELECT id, username, email, password, created_at FROM users
             WHERE username = ?1 OR email = ?2",
            params![username, email],
            user_from_row,
        )
        .optional()
        .map_err(Error::from)
    }
}
