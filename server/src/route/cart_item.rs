use crate::controller::Controller;
use crate::error::ErrorStatus;
use crate::extract::AuthenticatedCaller;
use crate::handler::AppModule;
use crate::request::{
    AddCartItemRequest, CartItemTransformer, GetCartItemsRequest, RemoveCartItemRequest,
    UpdateCartItemRequest,
};
use crate::response::CartItemPresenter;
use application::service::{
    AddCartItemService, GetCartItemService, RemoveCartItemService, UpdateCartItemService,
};
use axum::extract::{Path, State};
use axum::routing::{get, patch};
use axum::{Json, Router};
use uuid::Uuid;

pub trait CartItemRouter {
    fn route_cart_item(self) -> Self;
}

impl CartItemRouter for Router<AppModule> {
    fn route_cart_item(self) -> Self {
        self.route(
            "/carts/:cart_id/items",
            get(
                |State(module): State<AppModule>,
                 AuthenticatedCaller(_): AuthenticatedCaller,
                 Path(cart_id): Path<Uuid>| async move {
                    Controller::new(CartItemTransformer, CartItemPresenter)
                        .intake(GetCartItemsRequest::new(cart_id))
                        .handle(|dto| async move { module.pgpool().get_cart_items(dto).await })
                        .await
                        .map_err(ErrorStatus::from)
                },
            )
            .post(
                |State(module): State<AppModule>,
                 AuthenticatedCaller(_): AuthenticatedCaller,
                 Path(cart_id): Path<Uuid>,
                 Json(req): Json<AddCartItemRequest>| async move {
                    Controller::new(CartItemTransformer, CartItemPresenter)
                        .intake((cart_id, req))
                        .handle(|dto| async move { module.pgpool().add_cart_item(dto).await })
                        .await
                        .map_err(ErrorStatus::from)
                },
            ),
        )
        .route(
            "/carts/:cart_id/items/:id",
            patch(
                |State(module): State<AppModule>,
                 AuthenticatedCaller(_): AuthenticatedCaller,
                 Path(ids): Path<(Uuid, Uuid)>,
                 Json(req): Json<UpdateCartItemRequest>| async move {
                    Controller::new(CartItemTransformer, CartItemPresenter)
                        .intake((ids, req))
                        .handle(|dto| async move { module.pgpool().update_cart_item(dto).await })
                        .await
                        .map_err(ErrorStatus::from)
                },
            )
            .delete(
                |State(module): State<AppModule>,
                 AuthenticatedCaller(_): AuthenticatedCaller,
                 Path((cart_id, id)): Path<(Uuid, Uuid)>| async move {
                    Controller::new(CartItemTransformer, CartItemPresenter)
                        .intake(RemoveCartItemRequest::new(cart_id, id))
                        .handle(|dto| async move { module.pgpool().remove_cart_item(dto).await })
                        .await
                        .map_err(ErrorStatus::from)
                },
            ),
        )
    }
}
