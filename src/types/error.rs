use crate::utils::token::TokenError;
use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use serde::Serialize;
use thiserror::Error;

/// Service-wide error taxonomy. Every failure a request can hit is one of
/// these; the `ResponseError` impl is the single place they turn into HTTP.
#[derive(Debug, Error)]
pub enum AppError {
    // auth flow
    #[error("user alredy exist")]
    DuplicateUser,
    #[error("user not found")]
    UserNotFound,
    #[error("Wrong credentials")]
    InvalidCredentials,
    #[error("token missing")]
    MissingToken,
    #[error(transparent)]
    InvalidToken(#[from] TokenError),
    /// Token decoded fine but its subject no longer exists in the store.
    #[error("user not found")]
    SubjectNotFound,

    // infra things
    #[error("database error")]
    Db(#[from] sea_orm::DbErr),
    #[error("internal error: {0}")]
    Internal(String),
}

#[derive(Serialize)]
struct ErrorBody<'a> {
    message: &'a str,
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::DuplicateUser | Self::UserNotFound => StatusCode::BAD_REQUEST,
            Self::InvalidCredentials | Self::MissingToken => StatusCode::UNAUTHORIZED,
            // Structurally broken tokens are the caller's bug, not a
            // failed credential.
            Self::InvalidToken(TokenError::Malformed) => StatusCode::BAD_REQUEST,
            Self::InvalidToken(_) => StatusCode::UNAUTHORIZED,
            Self::SubjectNotFound => StatusCode::NOT_FOUND,
            Self::Db(_) | Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(ErrorBody {
            message: &self.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn statuses_distinguish_token_failures() {
        assert_eq!(
            AppError::InvalidToken(TokenError::Expired).status_code(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            AppError::InvalidToken(TokenError::InvalidSignature).status_code(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            AppError::InvalidToken(TokenError::Malformed).status_code(),
            StatusCode::BAD_REQUEST
        );
    }

    #[test]
    fn duplicate_user_keeps_the_wire_message() {
        assert_eq!(AppError::DuplicateUser.to_string(), "user alredy exist");
        assert_eq!(AppError::DuplicateUser.status_code(), StatusCode::BAD_REQUEST);
    }
}
