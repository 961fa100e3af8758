//! Contract models for the catalog service
//!
//! These models are transport-agnostic; the REST layer maps them to DTOs and
//! the storage layer maps them to SeaORM entities.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

/// Catalog product
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Product {
    /// Generated identifier (0 until persisted)
    pub id: i64,
    pub name: String,
    /// Unit price, non-negative
    pub price: Decimal,
    /// Units in stock
    pub stock: i32,
    /// Category reference
    pub category_id: i64,
}

/// Customer order with its lines
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Order {
    pub id: i64,
    /// Customer reference
    pub user_id: i64,
    pub created_at: DateTime<Utc>,
    pub lines: Vec<OrderLine>,
}

/// Single line of an order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderLine {
    pub id: i64,
    pub order_id: i64,
    pub product_id: i64,
    /// Ordered units, strictly positive
    pub quantity: i32,
    /// Price snapshot taken when the line was created
    pub unit_price: Decimal,
}

/// Display profile linked to a user account
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Profile {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub user_id: i64,
}

/// User account
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: i64,
    pub username: String,
    /// Opaque credential; never serialized outward
    pub password: String,
    pub role: Role,
}

/// Roles recognized by the store
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Administrador,
    Vendedor,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Administrador => "Administrador",
            Role::Vendedor => "Vendedor",
        }
    }
}

impl std::str::FromStr for Role {
    type Err = UnknownRole;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Administrador" => Ok(Role::Administrador),
            "Vendedor" => Ok(Role::Vendedor),
            other => Err(UnknownRole(other.to_string())),
        }
    }
}

/// Raised when a stored or submitted role name is not recognized
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown role: {0}")]
pub struct UnknownRole(pub String);

/// One page of a stable-ordered listing
///
/// Invariants: `items.len() <= page_size` for the page size that produced it;
/// `total` is the unfiltered row count regardless of the page requested.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub total: u64,
}
