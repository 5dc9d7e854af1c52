use crate::controller::{Exhaust, TryExhaust};
use crate::error::ErrorStatus;
use application::transfer::BookDto;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use kernel::KernelError;
use serde::Serialize;
use uuid::Uuid;

#[derive(Debug, Serialize)]
pub struct BookResponse {
    id: Uuid,
    title: String,
    author: Uuid,
}

impl From<BookDto> for BookResponse {
    fn from(value: BookDto) -> Self {
        Self {
            id: value.id,
            title: value.title,
            author: value.author_id,
        }
    }
}

impl IntoResponse for BookResponse {
    fn into_response(self) -> Response {
        (StatusCode::OK, Json(self)).into_response()
    }
}

pub struct BookPresenter;

impl Exhaust<Vec<BookDto>> for BookPresenter {
    type To = Json<Vec<BookResponse>>;
    fn emit(&self, input: Vec<BookDto>) -> Self::To {
        Json(input.into_iter().map(BookResponse::from).collect())
    }
}

impl TryExhaust<Option<BookDto>> for BookPresenter {
    type To = BookResponse;
    type Error = ErrorStatus;
    fn emit(&self, input: Option<BookDto>) -> Result<Self::To, Self::Error> {
        input
            .map(BookResponse::from)
            .ok_or_else(|| ErrorStatus::new(KernelError::NotFound, "Book not found"))
    }
}

impl Exhaust<BookDto> for BookPresenter {
    type To = (StatusCode, Json<BookResponse>);
    fn emit(&self, input: BookDto) -> Self::To {
        (StatusCode::CREATED, Json(BookResponse::from(input)))
    }
}

impl Exhaust<()> for BookPresenter {
    type To = StatusCode;
    fn emit(&self, _: ()) -> Self::To {
        StatusCode::NO_CONTENT
    }
}
