use crate::controller::{Intake, TryIntake};
use crate::error::RequestError;
use application::transfer::{BookDto, GetBookDto};
use serde::Deserialize;

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateBookRequest {
    book_id: Option<String>,
    title: Option<String>,
}

#[derive(Debug)]
pub struct GetBookRequest {
    id: String,
}

impl GetBookRequest {
    pub fn new(id: String) -> Self {
        Self { id }
    }
}

pub struct BookTransformer;

impl TryIntake<CreateBookRequest> for BookTransformer {
    type To = BookDto;
    type Error = RequestError;
    fn emit(&self, input: CreateBookRequest) -> Result<Self::To, Self::Error> {
        let present = |field: Option<String>| field.filter(|value| !value.is_empty());
        match (present(input.book_id), present(input.title)) {
            (Some(id), Some(title)) => Ok(BookDto { id, title }),
            _ => Err(RequestError::MissingBookField),
        }
    }
}

impl Intake<GetBookRequest> for BookTransformer {
    type To = GetBookDto;
    fn emit(&self, input: GetBookRequest) -> Self::To {
        GetBookDto { id: input.id }
    }
}
