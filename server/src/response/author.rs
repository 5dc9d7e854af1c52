use crate::controller::{Exhaust, TryExhaust};
use crate::error::ErrorStatus;
use application::transfer::{AuthorDto, BookSummaryDto};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use kernel::KernelError;
use serde::Serialize;
use uuid::Uuid;

#[derive(Debug, Serialize)]
pub struct AuthorBookResponse {
    id: Uuid,
    title: String,
}

#[derive(Debug, Serialize)]
pub struct AuthorResponse {
    id: Uuid,
    name: String,
    books: Vec<AuthorBookResponse>,
    #[serde(skip_serializing_if = "Option::is_none")]
    biography: Option<String>,
}

impl From<AuthorDto> for AuthorResponse {
    fn from(value: AuthorDto) -> Self {
        Self {
            id: value.id,
            name: value.name,
            books: value
                .books
                .into_iter()
                .map(|BookSummaryDto { id, title }| AuthorBookResponse { id, title })
                .collect(),
            biography: value.biography,
        }
    }
}

impl IntoResponse for AuthorResponse {
    fn into_response(self) -> Response {
        (StatusCode::OK, Json(self)).into_response()
    }
}

pub struct AuthorPresenter;

impl Exhaust<Vec<AuthorDto>> for AuthorPresenter {
    type To = Json<Vec<AuthorResponse>>;
    fn emit(&self, input: Vec<AuthorDto>) -> Self::To {
        Json(input.into_iter().map(AuthorResponse::from).collect())
    }
}

impl TryExhaust<Option<AuthorDto>> for AuthorPresenter {
    type To = AuthorResponse;
    type Error = ErrorStatus;
    fn emit(&self, input: Option<AuthorDto>) -> Result<Self::To, Self::Error> {
        input
            .map(AuthorResponse::from)
            .ok_or_else(|| ErrorStatus::new(KernelError::NotFound, "Author not found"))
    }
}

impl Exhaust<AuthorDto> for AuthorPresenter {
    type To = (StatusCode, Json<AuthorResponse>);
    fn emit(&self, input: AuthorDto) -> Self::To {
        (StatusCode::CREATED, Json(AuthorResponse::from(input)))
    }
}

impl Exhaust<()> for AuthorPresenter {
    type To = StatusCode;
    fn emit(&self, _: ()) -> Self::To {
        StatusCode::NO_CONTENT
    }
}

#[cfg(test)]
mod test {
    use application::transfer::{AuthorDto, BookSummaryDto};
    use axum::http::StatusCode;
    use axum::response::IntoResponse;
    use uuid::Uuid;

    use super::{AuthorPresenter, AuthorResponse};
    use crate::controller::TryExhaust;

    #[test]
    fn author_shape() {
        let (id, book) = (Uuid::new_v4(), Uuid::new_v4());
        let response = AuthorResponse::from(AuthorDto {
            id,
            name: "Orwell".to_string(),
            biography: None,
            books: vec![BookSummaryDto {
                id: book,
                title: "1984".to_string(),
            }],
        });
        assert_eq!(
            serde_json::to_value(&response).unwrap(),
            serde_json::json!({
                "id": id,
                "name": "Orwell",
                "books": [{ "id": book, "title": "1984" }],
            })
        );
    }

    #[test]
    fn missing_author_is_not_found() {
        let rejection = AuthorPresenter.emit(None).err().unwrap();
        assert_eq!(rejection.into_response().status(), StatusCode::NOT_FOUND);
    }
}
