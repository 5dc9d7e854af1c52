use crate::controller::Controller;
use crate::error::ErrorStatus;
use crate::extract::AdminCaller;
use crate::handler::AppModule;
use crate::request::{BookTransformer, CreateBookRequest, DeleteBookRequest, GetBookRequest};
use crate::response::BookPresenter;
use application::service::{CreateBookService, DeleteBookService, GetBookService};
use axum::extract::{Path, State};
use axum::routing::get;
use axum::{Json, Router};
use uuid::Uuid;

pub trait BookRouter {
    fn route_book(self) -> Self;
}

impl BookRouter for Router<AppModule> {
    fn route_book(self) -> Self {
        self.route(
            "/books",
            get(|State(module): State<AppModule>| async move {
                Controller::new((), BookPresenter)
                    .bypass(|| module.pgpool().get_all_books())
                    .await
                    .map_err(ErrorStatus::from)
            })
            .post(
                |State(module): State<AppModule>,
                 AdminCaller(admin): AdminCaller,
                 Json(req): Json<CreateBookRequest>| async move {
                    Controller::new(BookTransformer, BookPresenter)
                        .intake(req)
                        .handle(|dto| async move { module.pgpool().create_book(&admin, dto).await })
                        .await
                        .map_err(ErrorStatus::from)
                },
            ),
        )
        .route(
            "/books/:id",
            get(
                |State(module): State<AppModule>, Path(id): Path<Uuid>| async move {
                    Controller::new(BookTransformer, BookPresenter)
                        .intake(GetBookRequest::new(id))
                        .try_handle(|dto| async move { module.pgpool().get_book(dto).await })
                        .await
                },
            )
            .delete(
                |State(module): State<AppModule>,
                 AdminCaller(admin): AdminCaller,
                 Path(id): Path<Uuid>| async move {
                    Controller::new(BookTransformer, BookPresenter)
                        .intake(DeleteBookRequest::new(id))
                        .handle(|dto| async move { module.pgpool().delete_book(&admin, dto).await })
                        .await
                        .map_err(ErrorStatus::from)
                },
            ),
        )
    }
}
