use std::borrow::Cow;

use derive_more::Display;
use log::warn;
use rocket::http::Status;
use rocket::serde::json::Json;
use rocket::{response, Request};
use serde::Serialize;

use expression::ExpressionError;
use telemetry::IsErr;

#[derive(Debug, Display)]
pub enum ApiError {
    #[display(fmt = "{}", _0)]
    InvalidExpression(ExpressionError),
}

impl From<ExpressionError> for ApiError {
    fn from(e: ExpressionError) -> Self {
        ApiError::InvalidExpression(e)
    }
}

// Rejected expressions are caused by the request
impl IsErr for ApiError {
    fn is_err(&self) -> bool {
        false
    }
}

#[derive(Serialize)]
pub struct ErrorResponse<'a> {
    pub error: Cow<'a, str>,
}

impl<'r> response::Responder<'r, 'static> for ApiError {
    fn respond_to(self, req: &'r Request<'_>) -> response::Result<'static> {
        warn!("Rejected expression: {}", self);
        let error = Cow::Owned(self.to_string());
        response::status::Custom(Status::BadRequest, Json(ErrorResponse { error }))
            .respond_to(req)
    }
}
