use url::Url;

use crate::server::dto::{CourseBody, ReviewBody};
use crate::server::response::ApiError;
use crate::types::{CourseInput, ReviewInput};

const MIN_RATING: i64 = 1;
const MAX_RATING: i64 = 5;

fn validate_url(raw: &str) -> Result<(), String> {
    let parsed = Url::parse(raw).map_err(|_| format!("'{raw}' is not a valid URL"))?;
    if !parsed.has_host() {
        return Err(format!("'{raw}' is not an absolute URL"));
    }
    Ok(())
}

/// Checks a course payload field by field and produces the validated input.
pub fn course_input(body: &CourseBody) -> Result<CourseInput, ApiError> {
    let title = body
        .title
        .as_deref()
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .ok_or_else(|| ApiError::bad_request("No course title provided"))?;

    let url = body
        .url
        .as_deref()
        .ok_or_else(|| ApiError::bad_request("No course URL provided"))?;
    validate_url(url).map_err(ApiError::bad_request)?;

    Ok(CourseInput {
        title: title.to_string(),
        url: url.to_string(),
    })
}

/// Checks a review payload field by field and produces the validated input.
pub fn review_input(body: &ReviewBody) -> Result<ReviewInput, ApiError> {
    let course_id = body
        .course
        .ok_or_else(|| ApiError::bad_request("No course provided"))?;
    if course_id < 1 {
        return Err(ApiError::bad_request("course must be a positive integer"));
    }

    let rating = body
        .rating
        .ok_or_else(|| ApiError::bad_request("No rating provided"))?;
    if !(MIN_RATING..=MAX_RATING).contains(&rating) {
        return Err(ApiError::bad_request(format!(
            "rating must be between {MIN_RATING} and {MAX_RATING}"
        )));
    }

    Ok(ReviewInput {
        course_id,
        rating,
        comment: body.comment.clone().unwrap_or_default(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn course_body(title: Option<&str>, url: Option<&str>) -> CourseBody {
        CourseBody {
            title: title.map(str::to_string),
            url: url.map(str::to_string),
        }
    }

    fn review_body(course: Option<i64>, rating: Option<i64>, comment: Option<&str>) -> ReviewBody {
        ReviewBody {
            course,
            rating,
            comment: comment.map(str::to_string),
        }
    }

    #[test]
    fn test_course_input_valid() {
        let input = course_input(&course_body(
            Some("Intro to Systems"),
            Some("https://example.com/c1"),
        ))
        .unwrap();
        assert_eq!(input.title, "Intro to Systems");
        assert_eq!(input.url, "https://example.com/c1");
    }

    #[test]
    fn test_course_input_requires_title() {
        let err = course_input(&course_body(None, Some("https://example.com/c1"))).unwrap_err();
        assert_eq!(err.message, "No course title provided");

        let err = course_input(&course_body(Some("   "), Some("https://example.com/c1")))
            .unwrap_err();
        assert_eq!(err.message, "No course title provided");
    }

    #[test]
    fn test_course_input_requires_absolute_url() {
        let err = course_input(&course_body(Some("Intro"), None)).unwrap_err();
        assert_eq!(err.message, "No course URL provided");

        assert!(course_input(&course_body(Some("Intro"), Some("not a url"))).is_err());
        assert!(course_input(&course_body(Some("Intro"), Some("/relative/path"))).is_err());
    }

    #[test]
    fn test_review_input_valid() {
        let input = review_input(&review_body(Some(1), Some(5), Some("great"))).unwrap();
        assert_eq!(input.course_id, 1);
        assert_eq!(input.rating, 5);
        assert_eq!(input.comment, "great");
    }

    #[test]
    fn test_review_comment_defaults_to_empty() {
        let input = review_input(&review_body(Some(1), Some(3), None)).unwrap();
        assert_eq!(input.comment, "");
    }

    #[test]
    fn test_review_rating_bounds() {
        assert!(review_input(&review_body(Some(1), Some(1), None)).is_ok());
        assert!(review_input(&review_body(Some(1), Some(5), None)).is_ok());
        assert!(review_input(&review_body(Some(1), Some(0), None)).is_err());
        assert!(review_input(&review_body(Some(1), Some(6), None)).is_err());
        assert!(review_input(&review_body(Some(1), None, None)).is_err());
    }

    #[test]
    fn test_review_course_must_be_positive() {
        assert!(review_input(&review_body(Some(0), Some(3), None)).is_err());
        assert!(review_input(&review_body(Some(-2), Some(3), None)).is_err());
        assert!(review_input(&review_body(None, Some(3), None)).is_err());
    }
}
