use std::sync::Arc;
use std::time::Duration;

use axum::body::Body;
use axum::http::Request;
use axum::http::Response;
use axum::middleware;
use axum::routing::get;
use axum::routing::post;
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::Span;

use super::handlers::auth::login::login;
use super::handlers::auth::me::me;
use super::handlers::auth::refresh::refresh;
use super::handlers::auth::register::register;
use super::handlers::cart::add_item::add_item;
use super::handlers::cart::cart_summary::cart_summary;
use super::handlers::cart::cart_total::cart_total;
use super::handlers::cart::clear_cart::clear_cart;
use super::handlers::cart::get_item::get_item;
use super::handlers::cart::list_items::list_items;
use super::handlers::cart::remove_item::remove_item;
use super::handlers::cart::update_item::update_item;
use super::middleware::authenticate as auth_middleware;
use crate::domain::cart::service::CartService;
use crate::domain::user::service::AuthService;
use crate::outbound::repositories::cart::PostgresCartRepository;
use crate::outbound::repositories::user::PostgresUserRepository;

#[derive(Clone)]
pub struct AppState {
    pub auth_service: Arc<AuthService<PostgresUserRepository>>,
    pub cart_service: Arc<CartService<PostgresCartRepository>>,
}

pub fn create_router(
    auth_service: Arc<AuthService<PostgresUserRepository>>,
    cart_service: Arc<CartService<PostgresCartRepository>>,
) -> Router {
    let state = AppState {
        auth_service,
        cart_service,
    };

    let public_routes = Router::new()
        .route("/auth/register", post(register))
        .route("/auth/login", post(login));

    let protected_routes = Router::new()
        .route("/auth/refresh", post(refresh))
        .route("/auth/me", get(me))
        .route(
            "/cart",
            post(add_item).get(list_items).delete(clear_cart),
        )
        .route(
            "/cart/:item_id",
            get(get_item).patch(update_item).delete(remove_item),
        )
        .route("/cart/summary/total", get(cart_total))
        .route("/cart/summary/full", get(cart_summary))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            auth_middleware,
        ));

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(|request: &Request<Body>| {
            tracing::info_span!(
                "http_request",
                method = %request.method(),
                uri = %request.uri(),
                version = ?request.version(),
            )
        })
        .on_request(|request: &Request<Body>, _span: &Span| {
            tracing::info!(
                method = %request.method(),
                uri = %request.uri(),
                "Request started"
            );
        })
        .on_response(
            |response: &Response<Body>, latency: Duration, _span: &Span| {
                tracing::info!(
                    status = response.status().as_u16(),
                    latency_ms = latency.as_millis(),
                    "Request completed"
                );
            },
        );

    Router::new()
        .merge(public_routes)
        .merge(protected_routes)
        .layer(trace_layer)
        .layer(CorsLayer::permissive())
        .with_state(state)
}
