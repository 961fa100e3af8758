//! Route registration for the catalog REST surface

use crate::config::AuthConfig;
use crate::domain::Service;
use super::{auth, handlers};
use axum::{middleware, routing::get, Extension, Router};
use std::sync::Arc;

/// Register all catalog routes on the given router
///
/// The role gate wraps every route; it only inspects mutating verbs and is
/// inert unless enabled in configuration.
pub fn register_routes(router: Router, service: Arc<Service>, auth: Arc<AuthConfig>) -> Router {
    router
        // Products
        .route(
            "/api/productos",
            get(handlers::list_products).post(handlers::create_product),
        )
        .route(
            "/api/productos/{id}",
            get(handlers::get_product)
                .put(handlers::update_product)
                .delete(handlers::delete_product),
        )
        // Orders
        .route(
            "/api/ordenes",
            get(handlers::list_orders).post(handlers::create_order),
        )
        .route(
            "/api/ordenes/{id}",
            get(handlers::get_order)
                .put(handlers::update_order)
                .delete(handlers::delete_order),
        )
        // Profiles
        .route(
            "/api/perfiles",
            get(handlers::list_profiles).post(handlers::create_profile),
        )
        .route(
            "/api/perfiles/{id}",
            get(handlers::get_profile)
                .put(handlers::update_profile)
                .delete(handlers::delete_profile),
        )
        // Users
        .route(
            "/api/usuarios",
            get(handlers::list_users).post(handlers::create_user),
        )
        .route(
            "/api/usuarios/{id}",
            get(handlers::get_user)
                .put(handlers::update_user)
                .delete(handlers::delete_user),
        )
        // Role gate and shared service
        .layer(middleware::from_fn_with_state(
            auth,
            auth::require_write_role,
        ))
        .layer(Extension(service))
}
