//! Domain service - orchestration over the repositories
//!
//! Stateless between calls; each method is one unit of work against the
//! persistence layer. Expected conditions come back as `CatalogError`
//! variants, data-access faults are logged here and collapsed to `Internal`.

use crate::contract::{CatalogError, Order, Page, Product, Profile, User};
use super::repository::{
    OrdersRepository, ProductsRepository, ProfilesRepository, UsersRepository,
};
use rust_decimal::Decimal;
use std::sync::Arc;

/// Domain service for the store catalog
pub struct Service {
    products: Arc<dyn ProductsRepository>,
    orders: Arc<dyn OrdersRepository>,
    profiles: Arc<dyn ProfilesRepository>,
    users: Arc<dyn UsersRepository>,
}

impl Service {
    pub fn new(
        products: Arc<dyn ProductsRepository>,
        orders: Arc<dyn OrdersRepository>,
        profiles: Arc<dyn ProfilesRepository>,
        users: Arc<dyn UsersRepository>,
    ) -> Self {
        Self {
            products,
            orders,
            profiles,
            users,
        }
    }

    // ===== Product Operations =====

    pub async fn list_products(
        &self,
        page_number: u64,
        page_size: u64,
    ) -> Result<Page<Product>, CatalogError> {
        validate_paging(page_number, page_size)?;

        self.products
            .find_page(page_number, page_size)
            .await
            .map_err(|e| internal("list products", e))
    }

    pub async fn get_product(&self, id: i64) -> Result<Product, CatalogError> {
        self.products
            .find_by_id(id)
            .await
            .map_err(|e| internal("get product", e))?
            .ok_or(CatalogError::NotFound {
                resource: "product",
                id,
            })
    }

    pub async fn create_product(&self, product: Product) -> Result<Product, CatalogError> {
        validate_product(&product)?;

        self.products
            .insert(&product)
            .await
            .map_err(|e| internal("create product", e))
    }

    pub async fn update_product(&self, product: Product) -> Result<(), CatalogError> {
        validate_product(&product)?;

        let updated = self
            .products
            .update(&product)
            .await
            .map_err(|e| internal("update product", e))?;

        if updated {
            Ok(())
        } else {
            Err(CatalogError::OperationFailed {
                resource: "product",
                id: product.id,
            })
        }
    }

    pub async fn delete_product(&self, id: i64) -> Result<(), CatalogError> {
        let deleted = self
            .products
            .delete(id)
            .await
            .map_err(|e| internal("delete product", e))?;

        if deleted {
            Ok(())
        } else {
            Err(CatalogError::OperationFailed {
                resource: "product",
                id,
            })
        }
    }

    // ===== Order Operations =====

    pub async fn list_orders(
        &self,
        page_number: u64,
        page_size: u64,
    ) -> Result<Page<Order>, CatalogError> {
        validate_paging(page_number, page_size)?;

        self.orders
            .find_page(page_number, page_size)
            .await
            .map_err(|e| internal("list orders", e))
    }

    pub async fn get_order(&self, id: i64) -> Result<Order, CatalogError> {
        self.orders
            .find_by_id(id)
            .await
            .map_err(|e| internal("get order", e))?
            .ok_or(CatalogError::NotFound {
                resource: "order",
                id,
            })
    }

    pub async fn create_order(&self, order: Order) -> Result<Order, CatalogError> {
        validate_order(&order)?;

        self.orders
            .insert(&order)
            .await
            .map_err(|e| internal("create order", e))
    }

    pub async fn update_order(&self, order: Order) -> Result<(), CatalogError> {
        let updated = self
            .orders
            .update(&order)
            .await
            .map_err(|e| internal("update order", e))?;

        if updated {
            Ok(())
        } else {
            Err(CatalogError::OperationFailed {
                resource: "order",
                id: order.id,
            })
        }
    }

    pub async fn delete_order(&self, id: i64) -> Result<(), CatalogError> {
        let deleted = self
            .orders
            .delete(id)
            .await
            .map_err(|e| internal("delete order", e))?;

        if deleted {
            Ok(())
        } else {
            Err(CatalogError::OperationFailed {
                resource: "order",
                id,
            })
        }
    }

    // ===== Profile Operations =====

    pub async fn list_profiles(
        &self,
        page_number: u64,
        page_size: u64,
    ) -> Result<Page<Profile>, CatalogError> {
        validate_paging(page_number, page_size)?;

        self.profiles
            .find_page(page_number, page_size)
            .await
            .map_err(|e| internal("list profiles", e))
    }

    pub async fn get_profile(&self, id: i64) -> Result<Profile, CatalogError> {
        self.profiles
            .find_by_id(id)
            .await
            .map_err(|e| internal("get profile", e))?
            .ok_or(CatalogError::NotFound {
                resource: "profile",
                id,
            })
    }

    pub async fn create_profile(&self, profile: Profile) -> Result<Profile, CatalogError> {
        self.profiles
            .insert(&profile)
            .await
            .map_err(|e| internal("create profile", e))
    }

    pub async fn update_profile(&self, profile: Profile) -> Result<(), CatalogError> {
        let updated = self
            .profiles
            .update(&profile)
            .await
            .map_err(|e| internal("update profile", e))?;

        if updated {
            Ok(())
        } else {
            Err(CatalogError::OperationFailed {
                resource: "profile",
                id: profile.id,
            })
        }
    }

    pub async fn delete_profile(&self, id: i64) -> Result<(), CatalogError> {
        let deleted = self
            .profiles
            .delete(id)
            .await
            .map_err(|e| internal("delete profile", e))?;

        if deleted {
            Ok(())
        } else {
            Err(CatalogError::OperationFailed {
                resource: "profile",
                id,
            })
        }
    }

    // ===== User Operations =====

    pub async fn list_users(
        &self,
        page_number: u64,
        page_size: u64,
    ) -> Result<Page<User>, CatalogError> {
        validate_paging(page_number, page_size)?;

        self.users
            .find_page(page_number, page_size)
            .await
            .map_err(|e| internal("list users", e))
    }

    pub async fn get_user(&self, id: i64) -> Result<User, CatalogError> {
        self.users
            .find_by_id(id)
            .await
            .map_err(|e| internal("get user", e))?
            .ok_or(CatalogError::NotFound {
                resource: "user",
                id,
            })
    }

    pub async fn create_user(&self, user: User) -> Result<User, CatalogError> {
        validate_user(&user)?;

        self.users
            .insert(&user)
            .await
            .map_err(|e| internal("create user", e))
    }

    pub async fn update_user(&self, user: User) -> Result<(), CatalogError> {
        validate_user(&user)?;

        let updated = self
            .users
            .update(&user)
            .await
            .map_err(|e| internal("update user", e))?;

        if updated {
            Ok(())
        } else {
            Err(CatalogError::OperationFailed {
                resource: "user",
                id: user.id,
            })
        }
    }

    pub async fn delete_user(&self, id: i64) -> Result<(), CatalogError> {
        let deleted = self
            .users
            .delete(id)
            .await
            .map_err(|e| internal("delete user", e))?;

        if deleted {
            Ok(())
        } else {
            Err(CatalogError::OperationFailed {
                resource: "user",
                id,
            })
        }
    }
}

// ===== Helpers =====

fn validate_paging(page_number: u64, page_size: u64) -> Result<(), CatalogError> {
    if page_number < 1 {
        return Err(CatalogError::Validation {
            message: "page number must be at least 1".to_string(),
        });
    }
    if page_size < 1 {
        return Err(CatalogError::Validation {
            message: "page size must be at least 1".to_string(),
        });
    }
    Ok(())
}

fn validate_product(product: &Product) -> Result<(), CatalogError> {
    if product.name.trim().is_empty() {
        return Err(CatalogError::Validation {
            message: "product name cannot be empty".to_string(),
        });
    }
    if product.price < Decimal::ZERO {
        return Err(CatalogError::Validation {
            message: format!("product price cannot be negative: {}", product.price),
        });
    }
    Ok(())
}

fn validate_order(order: &Order) -> Result<(), CatalogError> {
    if order.lines.is_empty() {
        return Err(CatalogError::Validation {
            message: "order must have at least one line".to_string(),
        });
    }
    for line in &order.lines {
        if line.quantity <= 0 {
            return Err(CatalogError::Validation {
                message: format!(
                    "order line quantity must be positive, got {} for product {}",
                    line.quantity, line.product_id
                ),
            });
        }
        if line.unit_price < Decimal::ZERO {
            return Err(CatalogError::Validation {
                message: format!(
                    "order line unit price cannot be negative for product {}",
                    line.product_id
                ),
            });
        }
    }
    Ok(())
}

fn validate_user(user: &User) -> Result<(), CatalogError> {
    if user.username.trim().is_empty() {
        return Err(CatalogError::Validation {
            message: "username cannot be empty".to_string(),
        });
    }
    Ok(())
}

fn internal(operation: &str, error: anyhow::Error) -> CatalogError {
    tracing::error!(error = %error, "{operation} failed");
    CatalogError::Internal
}
