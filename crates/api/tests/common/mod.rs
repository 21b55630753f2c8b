#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;

use pizzeria_api::config::{LogFormat, ServerConfig};
use pizzeria_api::router::build_app_router;
use pizzeria_api::state::AppState;
use pizzeria_db::models::pizza::{CreatePizza, Pizza};
use pizzeria_db::models::restaurant::{CreateRestaurant, Restaurant};
use pizzeria_db::repositories::{PizzaRepo, RestaurantRepo};

/// Build a test `ServerConfig` with safe defaults.
///
/// The database URL is never used; tests hand the router a pool directly.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        database_url: "postgres://unused".to_string(),
        db_max_connections: 5,
        cors_origins: vec!["http://localhost:4000".to_string()],
        request_timeout_secs: 30,
        log_format: LogFormat::Pretty,
    }
}

/// Build the full application router, with all middleware layers, over the
/// given pool.
pub fn build_test_app(pool: PgPool) -> Router {
    let state = AppState {
        pool,
        config: Arc::new(test_config()),
    };
    build_app_router(state).expect("test config must produce a valid router")
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

pub async fn send(app: Router, request: Request<Body>) -> Response<Body> {
    app.oneshot(request).await.unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

pub async fn delete(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::DELETE)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    post_raw(app, uri, Some("application/json"), body.to_string()).await
}

/// POST an arbitrary body, optionally with a content type.
pub async fn post_raw(
    app: Router,
    uri: &str,
    content_type: Option<&str>,
    body: impl Into<Body>,
) -> Response<Body> {
    let mut builder = Request::builder().method(Method::POST).uri(uri);
    if let Some(content_type) = content_type {
        builder = builder.header("content-type", content_type);
    }
    send(app, builder.body(body.into()).unwrap()).await
}

pub async fn body_bytes(response: Response<Body>) -> Vec<u8> {
    response
        .into_body()
        .collect()
        .await
        .unwrap()
        .to_bytes()
        .to_vec()
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    serde_json::from_slice(&body_bytes(response).await).unwrap()
}

// ---------------------------------------------------------------------------
// Fixtures
// ---------------------------------------------------------------------------

pub async fn create_restaurant(pool: &PgPool, name: &str, address: &str) -> Restaurant {
    RestaurantRepo::create(
        pool,
        &CreateRestaurant {
            name: name.to_string(),
            address: address.to_string(),
        },
    )
    .await
    .unwrap()
}

pub async fn create_pizza(pool: &PgPool, name: &str, ingredients: &str) -> Pizza {
    PizzaRepo::create(
        pool,
        &CreatePizza {
            name: name.to_string(),
            ingredients: ingredients.to_string(),
        },
    )
    .await
    .unwrap()
}

pub async fn count_restaurant_pizzas(pool: &PgPool) -> i64 {
    sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM restaurant_pizzas")
        .fetch_one(pool)
        .await
        .unwrap()
}
