use crate::controller::Controller;
use crate::error::ErrorStatus;
use crate::extract::AdminCaller;
use crate::handler::AppModule;
use crate::request::{AuthorTransformer, CreateAuthorRequest, DeleteAuthorRequest, GetAuthorRequest};
use crate::response::AuthorPresenter;
use application::service::{CreateAuthorService, DeleteAuthorService, GetAuthorService};
use axum::extract::{Path, State};
use axum::routing::get;
use axum::{Json, Router};
use uuid::Uuid;

pub trait AuthorRouter {
    fn route_author(self) -> Self;
}

impl AuthorRouter for Router<AppModule> {
    fn route_author(self) -> Self {
        self.route(
            "/authors",
            get(|State(module): State<AppModule>| async move {
                Controller::new((), AuthorPresenter)
                    .bypass(|| module.pgpool().get_all_authors())
                    .await
                    .map_err(ErrorStatus::from)
            })
            .post(
                |State(module): State<AppModule>,
                 AdminCaller(admin): AdminCaller,
                 Json(req): Json<CreateAuthorRequest>| async move {
                    Controller::new(AuthorTransformer, AuthorPresenter)
                        .intake(req)
                        .handle(|dto| async move {
                            module.pgpool().create_author(&admin, dto).await
                        })
                        .await
                        .map_err(ErrorStatus::from)
                },
            ),
        )
        .route(
            "/authors/:id",
            get(
                |State(module): State<AppModule>, Path(id): Path<Uuid>| async move {
                    Controller::new(AuthorTransformer, AuthorPresenter)
                        .intake(GetAuthorRequest::new(id))
                        .try_handle(|dto| async move { module.pgpool().get_author(dto).await })
                        .await
                },
            )
            .delete(
                |State(module): State<AppModule>,
                 AdminCaller(admin): AdminCaller,
                 Path(id): Path<Uuid>| async move {
                    Controller::new(AuthorTransformer, AuthorPresenter)
                        .intake(DeleteAuthorRequest::new(id))
                        .handle(|dto| async move {
                            module.pgpool().delete_author(&admin, dto).await
                        })
                        .await
                        .map_err(ErrorStatus::from)
                },
            ),
        )
    }
}
