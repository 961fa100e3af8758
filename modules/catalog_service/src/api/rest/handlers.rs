//! HTTP request handlers - thin layer that delegates to the domain service
//!
//! Every handler follows the same line: validate shape, call the service,
//! map models to DTOs, translate the outcome to a status code. PUT responds
//! with the caller-submitted body rather than re-fetching the persisted row.

use crate::contract;
use crate::domain::Service;
use super::{dto::*, error::{error_response, ApiJson}};
use axum::{
    extract::{Path, Query},
    http::{header, HeaderName, StatusCode},
    response::{IntoResponse, Response},
    Extension, Json,
};
use std::sync::Arc;

type Created<T> = (StatusCode, [(HeaderName, String); 1], Json<T>);

fn created<T>(location: String, body: T) -> Created<T> {
    (
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(body),
    )
}

// ===== Product Handlers =====

pub async fn list_products(
    Extension(service): Extension<Arc<Service>>,
    Query(query): Query<PageQuery>,
) -> Result<Json<Paged<ProductDto>>, Response> {
    let page = service
        .list_products(query.pagina_actual, query.registros_por_pagina)
        .await
        .map_err(error_response)?;

    Ok(Json(Paged::new(
        page.items.into_iter().map(Into::into).collect(),
        page.total,
        query.pagina_actual,
        query.registros_por_pagina,
    )))
}

pub async fn get_product(
    Extension(service): Extension<Arc<Service>>,
    Path(id): Path<i64>,
) -> Result<Json<ProductDto>, Response> {
    let product = service.get_product(id).await.map_err(error_response)?;

    Ok(Json(product.into()))
}

pub async fn create_product(
    Extension(service): Extension<Arc<Service>>,
    ApiJson(dto): ApiJson<ProductDto>,
) -> Result<Created<ProductDto>, Response> {
    let product = service
        .create_product(dto.into())
        .await
        .map_err(error_response)?;

    let location = format!("/api/productos/{}", product.id);
    Ok(created(location, ProductDto::from(product)))
}

pub async fn update_product(
    Extension(service): Extension<Arc<Service>>,
    Path(id): Path<i64>,
    ApiJson(body): ApiJson<Option<ProductDto>>,
) -> Result<Json<ProductDto>, Response> {
    let Some(dto) = body else {
        return Err(StatusCode::NOT_FOUND.into_response());
    };

    let mut product = contract::Product::from(dto.clone());
    product.id = id;

    service
        .update_product(product)
        .await
        .map_err(error_response)?;

    // Echo the submitted body, not the persisted row
    Ok(Json(dto))
}

pub async fn delete_product(
    Extension(service): Extension<Arc<Service>>,
    Path(id): Path<i64>,
) -> Result<StatusCode, Response> {
    service.delete_product(id).await.map_err(error_response)?;

    Ok(StatusCode::NO_CONTENT)
}

// ===== Order Handlers =====

pub async fn list_orders(
    Extension(service): Extension<Arc<Service>>,
    Query(query): Query<PageQuery>,
) -> Result<Json<Paged<OrderDto>>, Response> {
    let page = service
        .list_orders(query.pagina_actual, query.registros_por_pagina)
        .await
        .map_err(error_response)?;

    Ok(Json(Paged::new(
        page.items.into_iter().map(Into::into).collect(),
        page.total,
        query.pagina_actual,
        query.registros_por_pagina,
    )))
}

pub async fn get_order(
    Extension(service): Extension<Arc<Service>>,
    Path(id): Path<i64>,
) -> Result<Json<OrderDto>, Response> {
    let order = service.get_order(id).await.map_err(error_response)?;

    Ok(Json(order.into()))
}

pub async fn create_order(
    Extension(service): Extension<Arc<Service>>,
    ApiJson(dto): ApiJson<OrderDto>,
) -> Result<Created<OrderDto>, Response> {
    let order = service
        .create_order(dto.into())
        .await
        .map_err(error_response)?;

    let location = format!("/api/ordenes/{}", order.id);
    Ok(created(location, OrderDto::from(order)))
}

pub async fn update_order(
    Extension(service): Extension<Arc<Service>>,
    Path(id): Path<i64>,
    ApiJson(body): ApiJson<Option<OrderDto>>,
) -> Result<Json<OrderDto>, Response> {
    let Some(dto) = body else {
        return Err(StatusCode::NOT_FOUND.into_response());
    };

    let mut order = contract::Order::from(dto.clone());
    order.id = id;

    service.update_order(order).await.map_err(error_response)?;

    // Echo the submitted body, not the persisted row
    Ok(Json(dto))
}

pub async fn delete_order(
    Extension(service): Extension<Arc<Service>>,
    Path(id): Path<i64>,
) -> Result<StatusCode, Response> {
    service.delete_order(id).await.map_err(error_response)?;

    Ok(StatusCode::NO_CONTENT)
}

// ===== Profile Handlers =====

pub async fn list_profiles(
    Extension(service): Extension<Arc<Service>>,
    Query(query): Query<PageQuery>,
) -> Result<Json<Paged<ProfileDto>>, Response> {
    let page = service
        .list_profiles(query.pagina_actual, query.registros_por_pagina)
        .await
        .map_err(error_response)?;

    Ok(Json(Paged::new(
        page.items.into_iter().map(Into::into).collect(),
        page.total,
        query.pagina_actual,
        query.registros_por_pagina,
    )))
}

pub async fn get_profile(
    Extension(service): Extension<Arc<Service>>,
    Path(id): Path<i64>,
) -> Result<Json<ProfileDto>, Response> {
    let profile = service.get_profile(id).await.map_err(error_response)?;

    Ok(Json(profile.into()))
}

pub async fn create_profile(
    Extension(service): Extension<Arc<Service>>,
    ApiJson(dto): ApiJson<ProfileDto>,
) -> Result<Created<ProfileDto>, Response> {
    let profile = service
        .create_profile(dto.into())
        .await
        .map_err(error_response)?;

    let location = format!("/api/perfiles/{}", profile.id);
    Ok(created(location, ProfileDto::from(profile)))
}

pub async fn update_profile(
    Extension(service): Extension<Arc<Service>>,
    Path(id): Path<i64>,
    ApiJson(body): ApiJson<Option<ProfileDto>>,
) -> Result<Json<ProfileDto>, Response> {
    let Some(dto) = body else {
        return Err(StatusCode::NOT_FOUND.into_response());
    };

    let mut profile = contract::Profile::from(dto.clone());
    profile.id = id;

    service
        .update_profile(profile)
        .await
        .map_err(error_response)?;

    // Echo the submitted body, not the persisted row
    Ok(Json(dto))
}

pub async fn delete_profile(
    Extension(service): Extension<Arc<Service>>,
    Path(id): Path<i64>,
) -> Result<StatusCode, Response> {
    service.delete_profile(id).await.map_err(error_response)?;

    Ok(StatusCode::NO_CONTENT)
}

// ===== User Handlers =====

pub async fn list_users(
    Extension(service): Extension<Arc<Service>>,
    Query(query): Query<PageQuery>,
) -> Result<Json<Paged<UserDto>>, Response> {
    let page = service
        .list_users(query.pagina_actual, query.registros_por_pagina)
        .await
        .map_err(error_response)?;

    Ok(Json(Paged::new(
        page.items.into_iter().map(Into::into).collect(),
        page.total,
        query.pagina_actual,
        query.registros_por_pagina,
    )))
}

pub async fn get_user(
    Extension(service): Extension<Arc<Service>>,
    Path(id): Path<i64>,
) -> Result<Json<UserDto>, Response> {
    let user = service.get_user(id).await.map_err(error_response)?;

    Ok(Json(user.into()))
}

pub async fn create_user(
    Extension(service): Extension<Arc<Service>>,
    ApiJson(req): ApiJson<UpsertUserRequest>,
) -> Result<Created<UserDto>, Response> {
    let user = contract::User::try_from(req).map_err(error_response)?;

    let user = service.create_user(user).await.map_err(error_response)?;

    let location = format!("/api/usuarios/{}", user.id);
    Ok(created(location, UserDto::from(user)))
}

pub async fn update_user(
    Extension(service): Extension<Arc<Service>>,
    Path(id): Path<i64>,
    ApiJson(body): ApiJson<Option<UpsertUserRequest>>,
) -> Result<Json<UserDto>, Response> {
    let Some(req) = body else {
        return Err(StatusCode::NOT_FOUND.into_response());
    };

    let mut user = contract::User::try_from(req).map_err(error_response)?;
    user.id = id;

    // The echo keeps the submitted fields but never the credential
    let echo = UserDto::from(user.clone());

    service.update_user(user).await.map_err(error_response)?;

    Ok(Json(echo))
}

pub async fn delete_user(
    Extension(service): Extension<Arc<Service>>,
    Path(id): Path<i64>,
) -> Result<StatusCode, Response> {
    service.delete_user(id).await.map_err(error_response)?;

    Ok(StatusCode::NO_CONTENT)
}
