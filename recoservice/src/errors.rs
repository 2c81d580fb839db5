use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use paperclip::actix::api_v2_errors;

use crate::api::{ErrorDetails, ErrorResponse, InvalidUserId};
use crate::recommendations::RecoError;

/// Errors returned by the handlers, rendered as `{"errors": [...]}`
#[api_v2_errors(
    code = 404,
    description = "User or model not found",
    code = 422,
    description = "User id is not an integer"
)]
#[derive(thiserror::Error, Debug)]
pub enum ApiError {
    #[error(transparent)]
    Reco(#[from] RecoError),

    #[error(transparent)]
    InvalidUserId(#[from] InvalidUserId),
}

impl ApiError {
    fn details(&self) -> ErrorDetails {
        match self {
            ApiError::Reco(err) => ErrorDetails {
                error_key: err.error_key().to_string(),
                error_message: err.to_string(),
                error_loc: None,
            },
            ApiError::InvalidUserId(err) => ErrorDetails {
                error_key: "validation_error".to_string(),
                error_message: err.to_string(),
                error_loc: Some(vec!["path".to_string(), "user_id".to_string()]),
            },
        }
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Reco(_) => StatusCode::NOT_FOUND,
            ApiError::InvalidUserId(_) => StatusCode::UNPROCESSABLE_ENTITY,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(ErrorResponse {
            errors: vec![self.details()],
        })
    }
}
