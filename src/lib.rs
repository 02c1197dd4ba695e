use axum::{
    routing::{delete, get, post},
    Router,
};
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

pub mod auth;
pub mod config;
pub mod database;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod services;
pub mod types;
pub mod validation;

/// Assemble the full application router.
pub fn app() -> Router {
    Router::new()
        .route("/health", get(handlers::health::health))
        .nest("/api/v1/user-auth", user_auth_routes())
        .nest("/api/v1/admin", admin_routes())
        .nest("/api/v1/spells", spell_catalog_routes())
        .nest("/api/v1/house", house_catalog_routes())
        // Global middleware
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}

fn user_auth_routes() -> Router {
    Router::new().route("/create", post(handlers::users::create_user))
}

fn admin_routes() -> Router {
    // Everything past create/login sits behind the bearer-token gate.
    let guarded = Router::new()
        .route("/get-users", get(handlers::admins::get_users))
        .route("/get-user/:id", get(handlers::admins::get_user_detail))
        .route("/spell-type", get(handlers::spell_types::get_spell_types))
        .route(
            "/spell-type/create",
            post(handlers::spell_types::create_spell_type),
        )
        .route(
            "/spell-type/edit/:id",
            post(handlers::spell_types::edit_spell_type),
        )
        .route(
            "/spell-type/delete/:id",
            delete(handlers::spell_types::delete_spell_type),
        )
        .route(
            "/spell-type/:id",
            get(handlers::spell_types::get_spell_type_by_id),
        )
        .route("/spell", get(handlers::spells::get_spells))
        .route("/spell/create", post(handlers::spells::create_spell))
        .route("/spell/edit/:id", post(handlers::spells::edit_spell))
        .route("/spell/delete/:id", delete(handlers::spells::delete_spell))
        .route("/spell/:id", get(handlers::spells::get_spell_by_id))
        .route("/house", get(handlers::houses::get_houses))
        .route("/house/create", post(handlers::houses::create_house))
        .route("/house/edit/:id", post(handlers::houses::edit_house))
        .route("/house/delete/:id", delete(handlers::houses::delete_house))
        .route("/house/:id", get(handlers::houses::get_house_by_id))
        .route_layer(axum::middleware::from_fn(middleware::admin_auth_middleware));

    Router::new()
        .route("/create", post(handlers::admins::create_admin))
        .route("/login", post(handlers::admins::admin_login))
        .merge(guarded)
}

/// Read-only spell catalog: API-key resolution, then the quota gate.
fn spell_catalog_routes() -> Router {
    Router::new()
        .route("/", get(handlers::spells::get_spells))
        .route("/types", get(handlers::spell_types::get_spell_types))
        .route(
            "/types/:id",
            get(handlers::spell_types::get_spell_type_by_id),
        )
        .route("/:id", get(handlers::spells::get_spell_by_id))
        .layer(
            ServiceBuilder::new()
                .layer(axum::middleware::from_fn(
                    middleware::api_key_auth_middleware,
                ))
                .layer(axum::middleware::from_fn(middleware::rate_limit_middleware)),
        )
}

fn house_catalog_routes() -> Router {
    Router::new()
        .route("/", get(handlers::houses::get_houses))
        .layer(
            ServiceBuilder::new()
                .layer(axum::middleware::from_fn(
                    middleware::api_key_auth_middleware,
                ))
                .layer(axum::middleware::from_fn(middleware::rate_limit_middleware)),
        )
}
