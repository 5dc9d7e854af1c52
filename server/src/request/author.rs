use crate::controller::Intake;
use application::transfer::{CreateAuthorDto, DeleteAuthorDto, GetAuthorDto};
use serde::Deserialize;
use uuid::Uuid;

#[derive(Debug, Deserialize)]
pub struct CreateAuthorRequest {
    name: Option<String>,
    biography: Option<String>,
}

#[derive(Debug)]
pub struct GetAuthorRequest {
    id: Uuid,
}

impl GetAuthorRequest {
    pub fn new(id: Uuid) -> Self {
        Self { id }
    }
}

#[derive(Debug)]
pub struct DeleteAuthorRequest {
    id: Uuid,
}

impl DeleteAuthorRequest {
    pub fn new(id: Uuid) -> Self {
        Self { id }
    }
}

pub struct AuthorTransformer;

impl Intake<CreateAuthorRequest> for AuthorTransformer {
    type To = CreateAuthorDto;
    fn emit(&self, input: CreateAuthorRequest) -> Self::To {
        CreateAuthorDto {
            name: input.name,
            biography: input.biography,
        }
    }
}

impl Intake<GetAuthorRequest> for AuthorTransformer {
    type To = GetAuthorDto;
    fn emit(&self, input: GetAuthorRequest) -> Self::To {
        GetAuthorDto { id: input.id }
    }
}

impl Intake<DeleteAuthorRequest> for AuthorTransformer {
    type To = DeleteAuthorDto;
    fn emit(&self, input: DeleteAuthorRequest) -> Self::To {
        DeleteAuthorDto { id: input.id }
    }
}
