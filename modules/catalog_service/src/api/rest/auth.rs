//! Role gate for mutating endpoints
//!
//! Reads stay open; when the gate is enabled, POST/PUT/DELETE require a
//! bearer token (HS256) whose role claim is listed in the write roles.
//! Disabled by default.

use crate::config::AuthConfig;
use super::error::Problem;
use axum::{
    extract::{Request, State},
    http::{header, Method, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
};
use jsonwebtoken::{decode, DecodingKey, Validation};
use serde::Deserialize;
use std::sync::Arc;

/// Bearer token claims
#[derive(Debug, Deserialize)]
struct Claims {
    sub: String,
    role: String,
}

pub async fn require_write_role(
    State(auth): State<Arc<AuthConfig>>,
    request: Request,
    next: Next,
) -> Response {
    if !auth.enabled || !is_mutation(request.method()) {
        return next.run(request).await;
    }

    let Some(token) = bearer_token(&request) else {
        return Problem::new(StatusCode::UNAUTHORIZED, "Missing Credentials")
            .with_detail("A bearer token is required for write operations")
            .into_response();
    };

    let key = DecodingKey::from_secret(auth.secret.as_bytes());
    let claims = match decode::<Claims>(token, &key, &Validation::default()) {
        Ok(data) => data.claims,
        Err(error) => {
            tracing::debug!(error = %error, "rejected bearer token");
            return Problem::new(StatusCode::UNAUTHORIZED, "Invalid Credentials").into_response();
        }
    };

    if !auth.write_roles.iter().any(|role| role == &claims.role) {
        return Problem::new(StatusCode::FORBIDDEN, "Insufficient Role")
            .with_detail(format!("role '{}' may not modify resources", claims.role))
            .into_response();
    }

    tracing::debug!(user = %claims.sub, role = %claims.role, "write authorized");
    next.run(request).await
}

fn is_mutation(method: &Method) -> bool {
    matches!(*method, Method::POST | Method::PUT | Method::DELETE | Method::PATCH)
}

fn bearer_token(request: &Request) -> Option<&str> {
    request
        .headers()
        .get(header::AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
}
