use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use error_stack::Report;
use kernel::KernelError;
use serde_json::json;
use std::fmt::Display;
use std::process::{ExitCode, Termination};

#[derive(Debug)]
pub struct StackTrace(Report<KernelError>);

impl From<Report<KernelError>> for StackTrace {
    fn from(e: Report<KernelError>) -> Self {
        StackTrace(e)
    }
}

impl Termination for StackTrace {
    fn report(self) -> ExitCode {
        self.0.report()
    }
}

/// Rejections raised while turning a request into a use case input.
#[derive(Debug, Eq, PartialEq)]
pub enum RequestError {
    MissingBookField,
}

impl Display for RequestError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RequestError::MissingBookField => write!(f, "Please provide bookId and title"),
        }
    }
}

#[derive(Debug)]
pub enum ErrorStatus {
    Request(RequestError),
    NotFound,
    Kernel(Report<KernelError>),
}

impl From<RequestError> for ErrorStatus {
    fn from(e: RequestError) -> Self {
        ErrorStatus::Request(e)
    }
}

impl From<Report<KernelError>> for ErrorStatus {
    fn from(e: Report<KernelError>) -> Self {
        ErrorStatus::Kernel(e)
    }
}

impl IntoResponse for ErrorStatus {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ErrorStatus::Request(e) => (StatusCode::BAD_REQUEST, e.to_string()),
            ErrorStatus::NotFound => (StatusCode::NOT_FOUND, "Book does not exist".to_string()),
            ErrorStatus::Kernel(report) => {
                tracing::error!("{report:?}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
        };
        (status, Json(json!({ "error": message }))).into_response()
    }
}
