//! REST DTOs with serde derives for HTTP API
//!
//! Wire names: resource paths and paging query parameters keep the store's
//! Spanish names; item and envelope fields are camelCase.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

// ===== Paging =====

/// Paging query parameters
#[derive(Debug, Clone, Deserialize)]
pub struct PageQuery {
    /// 1-based page number
    #[serde(default = "default_page_number", rename = "paginaActual")]
    pub pagina_actual: u64,

    /// Rows per page
    #[serde(default = "default_page_size", rename = "registrosPorPagina")]
    pub registros_por_pagina: u64,
}

impl Default for PageQuery {
    fn default() -> Self {
        Self {
            pagina_actual: default_page_number(),
            registros_por_pagina: default_page_size(),
        }
    }
}

fn default_page_number() -> u64 {
    1
}

fn default_page_size() -> u64 {
    3
}

/// Paged envelope wrapping one page of items
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Paged<T> {
    pub items: Vec<T>,
    /// Row count across all pages
    pub total_count: u64,
    pub page_number: u64,
    pub page_size: u64,
}

impl<T> Paged<T> {
    pub fn new(items: Vec<T>, total_count: u64, page_number: u64, page_size: u64) -> Self {
        Self {
            items,
            total_count,
            page_number,
            page_size,
        }
    }
}

// ===== Product DTOs =====

/// Product transfer object, used in both directions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProductDto {
    /// Generated server-side; ignored on create
    #[serde(default)]
    pub id: i64,

    pub name: String,

    #[schema(example = "249.50")]
    pub price: Decimal,

    pub stock: i32,

    pub category_id: i64,
}

// ===== Order DTOs =====

/// Order transfer object with its lines
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OrderDto {
    #[serde(default)]
    pub id: i64,

    /// Customer reference
    pub user_id: i64,

    /// Set server-side at creation when omitted
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,

    pub lines: Vec<OrderLineDto>,
}

/// Order line transfer object
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OrderLineDto {
    #[serde(default)]
    pub id: i64,

    /// Populated server-side from the owning order
    #[serde(default)]
    pub order_id: i64,

    pub product_id: i64,

    pub quantity: i32,

    /// Price snapshot for the line
    #[schema(example = "19.99")]
    pub unit_price: Decimal,
}

// ===== Profile DTOs =====

/// Profile transfer object, used in both directions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProfileDto {
    #[serde(default)]
    pub id: i64,

    pub first_name: String,

    pub last_name: String,

    pub user_id: i64,
}

// ===== User DTOs =====

/// User response DTO; never carries the credential
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserDto {
    pub id: i64,

    pub username: String,

    /// "Administrador" | "Vendedor"
    #[schema(example = "Vendedor")]
    pub role: String,
}

/// Create/update request for users; the credential is write-only
#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpsertUserRequest {
    #[serde(default)]
    pub id: i64,

    pub username: String,

    pub password: String,

    /// "Administrador" | "Vendedor"
    #[schema(example = "Vendedor")]
    pub role: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_query_defaults_to_first_page_of_three() {
        let query: PageQuery = serde_json::from_str("{}").expect("empty query");
        assert_eq!(query.pagina_actual, 1);
        assert_eq!(query.registros_por_pagina, 3);
    }

    #[test]
    fn page_query_reads_spanish_parameter_names() {
        let query: PageQuery =
            serde_json::from_str(r#"{"paginaActual": 4, "registrosPorPagina": 10}"#)
                .expect("spanish names");
        assert_eq!(query.pagina_actual, 4);
        assert_eq!(query.registros_por_pagina, 10);
    }

    #[test]
    fn paged_envelope_serializes_camel_case_fields() {
        let paged = Paged::new(vec![1, 2], 9, 2, 2);
        let json = serde_json::to_value(&paged).expect("serialize");
        assert_eq!(json["totalCount"], 9);
        assert_eq!(json["pageNumber"], 2);
        assert_eq!(json["pageSize"], 2);
        assert_eq!(json["items"], serde_json::json!([1, 2]));
    }
}
