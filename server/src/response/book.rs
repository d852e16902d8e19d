use crate::controller::Exhaust;
use application::transfer::BookDto;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookResponse {
    book_id: String,
    title: String,
}

impl IntoResponse for BookResponse {
    fn into_response(self) -> Response {
        (axum::http::StatusCode::OK, axum::Json(self)).into_response()
    }
}

pub struct BookPresenter;

impl Exhaust<BookDto> for BookPresenter {
    type To = BookResponse;
    fn emit(&self, input: BookDto) -> Self::To {
        BookResponse {
            book_id: input.id,
            title: input.title,
        }
    }
}

impl Exhaust<Option<BookDto>> for BookPresenter {
    type To = Option<BookResponse>;
    fn emit(&self, input: Option<BookDto>) -> Self::To {
        input.map(|input| <Self as Exhaust<BookDto>>::emit(self, input))
    }
}
