mod author;
mod book;
mod cart_item;

pub use self::{author::*, book::*, cart_item::*};

use axum::Router;

use crate::handler::AppModule;

/// Every resource route, bound to the application state.
pub fn router(module: AppModule) -> Router {
    Router::new()
        .route_author()
        .route_book()
        .route_cart_item()
        .with_state(module)
}

#[cfg(test)]
mod test {
    use std::time::{SystemTime, UNIX_EPOCH};

    use axum::body::{to_bytes, Body};
    use axum::http::header::{AUTHORIZATION, CONTENT_TYPE};
    use axum::http::{Method, Request, StatusCode};
    use axum::Router;
    use driver::auth::{CallerClaims, JwtAuthenticator};
    use driver::database::PostgresDatabase;
    use jsonwebtoken::{encode, EncodingKey, Header};
    use serde_json::{json, Value};
    use tower::ServiceExt;
    use uuid::Uuid;

    use crate::handler::Handler;

    const SECRET: &[u8] = b"route-secret";

    async fn app() -> Router {
        let pgpool = PostgresDatabase::new().await.unwrap();
        let authenticator = JwtAuthenticator::from_secret(SECRET);
        super::router(Handler::new(pgpool, authenticator).into())
    }

    fn bearer(is_admin: bool) -> String {
        let exp = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap()
            .as_secs()
            + 600;
        let claims = CallerClaims {
            sub: Uuid::new_v4(),
            is_admin,
            exp,
        };
        let token = encode(&Header::default(), &claims, &EncodingKey::from_secret(SECRET)).unwrap();
        format!("Bearer {token}")
    }

    async fn send(
        app: &Router,
        method: Method,
        uri: &str,
        authorization: Option<String>,
        body: Option<Value>,
    ) -> (StatusCode, Option<Value>) {
        let mut request = Request::builder().method(method).uri(uri);
        if let Some(value) = authorization {
            request = request.header(AUTHORIZATION, value);
        }
        let body = match body {
            Some(body) => {
                request = request.header(CONTENT_TYPE, "application/json");
                Body::from(body.to_string())
            }
            None => Body::empty(),
        };
        let response = app
            .clone()
            .oneshot(request.body(body).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let json = serde_json::from_slice(&bytes).ok();
        (status, json)
    }

    #[test_with::env(POSTGRES_TEST)]
    #[tokio::test]
    async fn author_creation_checks_caller_before_body() {
        let app = app().await;

        let (status, body) = send(&app, Method::POST, "/authors", None, Some(json!({}))).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body, Some(json!({ "error": "Unauthorized access" })));

        let (status, _) = send(
            &app,
            Method::POST,
            "/authors",
            Some(bearer(false)),
            Some(json!({})),
        )
        .await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);

        let (status, body) = send(
            &app,
            Method::POST,
            "/authors",
            Some(bearer(true)),
            Some(json!({ "biography": "no name" })),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, Some(json!({ "error": "Missing required field name" })));
    }

    #[test_with::env(POSTGRES_TEST)]
    #[tokio::test]
    async fn author_lifecycle_status_codes() {
        let app = app().await;
        let admin = bearer(true);

        let (status, author) = send(
            &app,
            Method::POST,
            "/authors",
            Some(admin.clone()),
            Some(json!({ "name": "Le Guin" })),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        let author_id = author.unwrap()["id"].as_str().unwrap().to_string();

        let (status, book) = send(
            &app,
            Method::POST,
            "/books",
            Some(admin.clone()),
            Some(json!({ "title": "The Dispossessed", "author": author_id })),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        let book_id = book.unwrap()["id"].as_str().unwrap().to_string();

        let uri = format!("/authors/{author_id}");
        let (status, found) = send(&app, Method::GET, &uri, None, None).await;
        assert_eq!(status, StatusCode::OK);
        let found = found.unwrap();
        assert_eq!(found["books"][0]["id"].as_str(), Some(book_id.as_str()));

        let (status, _) = send(&app, Method::DELETE, &uri, Some(admin.clone()), None).await;
        assert_eq!(status, StatusCode::NO_CONTENT);

        let (status, body) = send(&app, Method::GET, &uri, None, None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, Some(json!({ "error": "Author not found" })));

        let book_uri = format!("/books/{book_id}");
        let (status, _) = send(&app, Method::GET, &book_uri, None, None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);

        let (status, body) = send(&app, Method::DELETE, &uri, Some(admin), None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, Some(json!({ "error": "Author not found" })));
    }

    #[test_with::env(POSTGRES_TEST)]
    #[tokio::test]
    async fn cart_item_status_codes() {
        let app = app().await;
        let admin = bearer(true);
        let user = bearer(false);

        let (_, author) = send(
            &app,
            Method::POST,
            "/authors",
            Some(admin.clone()),
            Some(json!({ "name": "Calvino" })),
        )
        .await;
        let author_id = author.unwrap()["id"].as_str().unwrap().to_string();
        let (_, book) = send(
            &app,
            Method::POST,
            "/books",
            Some(admin.clone()),
            Some(json!({ "title": "Invisible Cities", "author": author_id })),
        )
        .await;
        let book_id = book.unwrap()["id"].as_str().unwrap().to_string();

        let items = format!("/carts/{}/items", Uuid::new_v4());
        let (status, _) = send(&app, Method::GET, &items, None, None).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);

        let (status, item) = send(
            &app,
            Method::POST,
            &items,
            Some(user.clone()),
            Some(json!({ "book": book_id })),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        let item = item.unwrap();
        assert_eq!(item["quantity"], json!(1));
        let item_uri = format!("{items}/{}", item["id"].as_str().unwrap());

        let (status, _) = send(
            &app,
            Method::PATCH,
            &item_uri,
            Some(user.clone()),
            Some(json!({ "quantity": 3 })),
        )
        .await;
        assert_eq!(status, StatusCode::NO_CONTENT);

        let (status, listed) = send(&app, Method::GET, &items, Some(user.clone()), None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(listed.unwrap()[0]["quantity"], json!(3));

        let (status, _) = send(&app, Method::DELETE, &item_uri, Some(user.clone()), None).await;
        assert_eq!(status, StatusCode::NO_CONTENT);
        let (status, _) = send(&app, Method::DELETE, &item_uri, Some(user), None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);

        let (status, _) = send(
            &app,
            Method::DELETE,
            &format!("/authors/{author_id}"),
            Some(admin),
            None,
        )
        .await;
        assert_eq!(status, StatusCode::NO_CONTENT);
    }
}
