//! Error types for the blog

use iron::status::{self, Status};
use iron::IronError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum BlogError {
    /// The requested post position is outside the store.
    #[error("Post not found: {0}")]
    NotFound(String),

    #[error("Invalid date: {0}")]
    InvalidDate(String),
}

impl BlogError {
    /// HTTP status this error is surfaced as.
    pub fn status(&self) -> Status {
        match *self {
            BlogError::NotFound(_) => status::NotFound,
            BlogError::InvalidDate(_) => status::InternalServerError,
        }
    }
}

impl From<BlogError> for IronError {
    fn from(err: BlogError) -> IronError {
        let status = err.status();
        IronError::new(err, status)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_maps_to_404() {
        let err = BlogError::NotFound("999".to_string());
        assert_eq!(err.status(), status::NotFound);
        assert_eq!(err.to_string(), "Post not found: 999");
    }

    #[test]
    fn invalid_date_is_a_server_error() {
        let err = BlogError::InvalidDate("2024-02-30 00:00".to_string());
        assert_eq!(err.status(), status::InternalServerError);
    }

    #[test]
    fn iron_error_carries_the_status() {
        let err: IronError = BlogError::NotFound("abc".to_string()).into();
        assert_eq!(err.response.status, Some(status::NotFound));
    }
}
