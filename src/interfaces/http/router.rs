//! API Router with Swagger UI

use std::sync::Arc;
use std::time::Instant;

use axum::{
    routing::{delete, get, post, put},
    Router,
};
use sea_orm::DatabaseConnection;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::application::users::UserService;
use crate::infrastructure::database::repositories::UserRepository;
use crate::interfaces::http::modules::{health, users};

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        // Health
        health::handlers::health_check,
        // Users
        users::handlers::register,
        users::handlers::login,
        users::handlers::update_role,
        users::handlers::update_profile,
        users::handlers::delete_user,
        users::handlers::list_users,
    ),
    tags(
        (name = "Users", description = "User account management"),
        (name = "Health", description = "Service health"),
    )
)]
struct ApiDoc;

/// Build the service router: user routes, health check, Swagger UI, CORS
/// and request tracing.
pub fn create_api_router(
    db: DatabaseConnection,
    user_service: Arc<UserService<UserRepository>>,
) -> Router {
    let user_state = users::UserHandlerState { user_service };
    let health_state = health::HealthState {
        db,
        started_at: Arc::new(Instant::now()),
    };

    let user_routes = Router::new()
        .route("/api/v1/users", get(users::handlers::list_users))
        .route("/api/v1/users/register", post(users::handlers::register))
        .route("/api/v1/users/login", post(users::handlers::login))
        .route(
            "/api/v1/users/{id}/role",
            put(users::handlers::update_role),
        )
        .route(
            "/api/v1/users/{id}/profile",
            put(users::handlers::update_profile),
        )
        .route("/api/v1/users/{id}", delete(users::handlers::delete_user))
        .with_state(user_state);

    let health_routes = Router::new()
        .route("/health", get(health::handlers::health_check))
        .with_state(health_state);

    Router::new()
        .merge(user_routes)
        .merge(health_routes)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
}
