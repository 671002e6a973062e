use axum::response::{IntoResponse, Response};
use axum_helpers::AppError;
use thiserror::Error;
use validator::ValidationErrors;

#[derive(Debug, Error)]
pub enum ItemError {
    #[error("Invalid input: {0}")]
    Validation(#[from] ValidationErrors),

    #[error("{0}")]
    InvalidArgument(String),

    #[error("Item {0} not found")]
    NotFound(i64),

    #[error("Item store is unreadable: {0}")]
    CorruptStore(String),

    #[error("Failed to write data: {0}")]
    Persistence(String),

    #[error("No item id available after {0}")]
    IdsExhausted(i64),
}

pub type ItemResult<T> = Result<T, ItemError>;

/// Convert ItemError to AppError for standardized error responses
impl From<ItemError> for AppError {
    fn from(err: ItemError) -> Self {
        match err {
            ItemError::Validation(errors) => AppError::ValidationError(errors),
            ItemError::InvalidArgument(msg) => AppError::BadRequest(msg),
            ItemError::NotFound(_) => AppError::NotFound(err.to_string()),
            ItemError::CorruptStore(_)
            | ItemError::Persistence(_)
            | ItemError::IdsExhausted(_) => {
                AppError::InternalServerError(err.to_string())
            }
        }
    }
}

impl IntoResponse for ItemError {
    fn into_response(self) -> Response {
        let app_error: AppError = self.into();
        app_error.into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;

    #[test]
    fn test_status_per_variant() {
        let cases = [
            (ItemError::Validation(ValidationErrors::new()), StatusCode::BAD_REQUEST),
            (
                ItemError::InvalidArgument("Invalid item ID".to_string()),
                StatusCode::BAD_REQUEST,
            ),
            (ItemError::NotFound(9), StatusCode::NOT_FOUND),
            (
                ItemError::CorruptStore("expected value".to_string()),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
            (
                ItemError::Persistence("permission denied".to_string()),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
            (ItemError::IdsExhausted(i64::MAX), StatusCode::INTERNAL_SERVER_ERROR),
        ];

        for (err, status) in cases {
            assert_eq!(err.into_response().status(), status);
        }
    }

    #[test]
    fn test_not_found_message_names_the_id() {
        assert_eq!(ItemError::NotFound(42).to_string(), "Item 42 not found");
    }
}
