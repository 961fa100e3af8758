//! Mapper implementations for converting between DTOs and contract models
//!
//! Pure field-by-field conversions; the only fallible direction is parsing a
//! submitted role name.

use super::dto::*;
use crate::contract::{self, CatalogError};

// ===== Product conversions =====

impl From<contract::Product> for ProductDto {
    fn from(product: contract::Product) -> Self {
        Self {
            id: product.id,
            name: product.name,
            price: product.price,
            stock: product.stock,
            category_id: product.category_id,
        }
    }
}

impl From<ProductDto> for contract::Product {
    fn from(dto: ProductDto) -> Self {
        Self {
            id: dto.id,
            name: dto.name,
            price: dto.price,
            stock: dto.stock,
            category_id: dto.category_id,
        }
    }
}

// ===== Order conversions =====

impl From<contract::Order> for OrderDto {
    fn from(order: contract::Order) -> Self {
        Self {
            id: order.id,
            user_id: order.user_id,
            created_at: Some(order.created_at),
            lines: order.lines.into_iter().map(Into::into).collect(),
        }
    }
}

impl From<OrderDto> for contract::Order {
    fn from(dto: OrderDto) -> Self {
        Self {
            id: dto.id,
            user_id: dto.user_id,
            created_at: dto.created_at.unwrap_or_else(chrono::Utc::now),
            lines: dto.lines.into_iter().map(Into::into).collect(),
        }
    }
}

impl From<contract::OrderLine> for OrderLineDto {
    fn from(line: contract::OrderLine) -> Self {
        Self {
            id: line.id,
            order_id: line.order_id,
            product_id: line.product_id,
            quantity: line.quantity,
            unit_price: line.unit_price,
        }
    }
}

impl From<OrderLineDto> for contract::OrderLine {
    fn from(dto: OrderLineDto) -> Self {
        Self {
            id: dto.id,
            order_id: dto.order_id,
            product_id: dto.product_id,
            quantity: dto.quantity,
            unit_price: dto.unit_price,
        }
    }
}

// ===== Profile conversions =====

impl From<contract::Profile> for ProfileDto {
    fn from(profile: contract::Profile) -> Self {
        Self {
            id: profile.id,
            first_name: profile.first_name,
            last_name: profile.last_name,
            user_id: profile.user_id,
        }
    }
}

impl From<ProfileDto> for contract::Profile {
    fn from(dto: ProfileDto) -> Self {
        Self {
            id: dto.id,
            first_name: dto.first_name,
            last_name: dto.last_name,
            user_id: dto.user_id,
        }
    }
}

// ===== User conversions =====

impl From<contract::User> for UserDto {
    fn from(user: contract::User) -> Self {
        Self {
            id: user.id,
            username: user.username,
            role: user.role.as_str().to_string(),
        }
    }
}

impl TryFrom<UpsertUserRequest> for contract::User {
    type Error = CatalogError;

    fn try_from(req: UpsertUserRequest) -> Result<Self, Self::Error> {
        let role = req.role.parse().map_err(|_| CatalogError::Validation {
            message: format!("unknown role: {}", req.role),
        })?;

        Ok(Self {
            id: req.id,
            username: req.username,
            password: req.password,
            role,
        })
    }
}
