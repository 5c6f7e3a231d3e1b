use axum::extract::Request;
use axum::middleware::{self, Next};
use axum::response::Response;
use axum::routing::{get, post, put};
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::{
    DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer,
};
use tracing::Level;

use crate::auth::require_bearer;
use crate::state::AppState;

pub mod books;
pub mod dashboard;
pub mod health;
pub mod transactions;
pub mod users;

async fn track_requests(req: Request, next: Next) -> Response {
    common::observability::REQUESTS_TOTAL.inc();
    next.run(req).await
}

/// Build the full application router: public routes, bearer-protected
/// routes, CORS, and request tracing.
pub fn build_router(state: AppState, cors: CorsLayer) -> Router {
    let public = Router::new()
        .route("/books", get(books::list))
        .route("/books/:id", get(books::get))
        .route("/users/login", post(users::login))
        .route("/users/register", post(users::register))
        .route(
            "/transactions",
            get(transactions::list).post(transactions::create),
        )
        .route("/health", get(health::check))
        .route("/metrics", get(health::metrics));

    let protected = Router::new()
        .route("/books", post(books::create))
        .route("/books/:id", put(books::update).delete(books::delete))
        .route("/users/:user_id/books", get(books::by_user))
        .route("/dashboard/:user_id", get(dashboard::get))
        .route_layer(middleware::from_fn_with_state(state.clone(), require_bearer));

    public
        .merge(protected)
        .with_state(state)
        .layer(middleware::from_fn(track_requests))
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(
                    DefaultMakeSpan::new()
                        .level(Level::INFO)
                        .include_headers(false),
                )
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(
                    DefaultOnResponse::new()
                        .level(Level::INFO)
                        .include_headers(false),
                )
                .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
        )
}
