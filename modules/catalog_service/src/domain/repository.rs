//! Repository traits for data access
//!
//! These traits define the interface for data access operations.
//! Implementations are in infra/storage/repositories.rs
//!
//! Shared semantics across aggregates:
//! - `find_page` skips `(page_number - 1) * page_size` rows of the id-ordered
//!   set, takes `page_size`, and counts the unfiltered set. A page past the
//!   end yields empty `items`, not an error. Callers validate the bounds.
//! - `find_by_id` reports absence as `None`, never as an error.
//! - `update`/`delete` report a missing row as `false`.
//! - `Err(_)` always means a data-access fault, not an expected outcome.

use crate::contract::{Order, Page, Product, Profile, User};
use anyhow::Result;
use async_trait::async_trait;

/// Repository for catalog products
#[async_trait]
pub trait ProductsRepository: Send + Sync {
    async fn find_page(&self, page_number: u64, page_size: u64) -> Result<Page<Product>>;

    async fn find_by_id(&self, id: i64) -> Result<Option<Product>>;

    /// Insert a product; the incoming id is ignored and a fresh one generated
    async fn insert(&self, product: &Product) -> Result<Product>;

    async fn update(&self, product: &Product) -> Result<bool>;

    async fn delete(&self, id: i64) -> Result<bool>;
}

/// Repository for orders and their lines
///
/// Lines ride on the order aggregate: `insert` persists the order and all of
/// its lines in one transaction, and reads return orders with lines attached.
#[async_trait]
pub trait OrdersRepository: Send + Sync {
    async fn find_page(&self, page_number: u64, page_size: u64) -> Result<Page<Order>>;

    async fn find_by_id(&self, id: i64) -> Result<Option<Order>>;

    async fn insert(&self, order: &Order) -> Result<Order>;

    /// Update the order row only; lines are immutable after creation
    async fn update(&self, order: &Order) -> Result<bool>;

    async fn delete(&self, id: i64) -> Result<bool>;
}

/// Repository for user profiles
#[async_trait]
pub trait ProfilesRepository: Send + Sync {
    async fn find_page(&self, page_number: u64, page_size: u64) -> Result<Page<Profile>>;

    async fn find_by_id(&self, id: i64) -> Result<Option<Profile>>;

    async fn insert(&self, profile: &Profile) -> Result<Profile>;

    async fn update(&self, profile: &Profile) -> Result<bool>;

    async fn delete(&self, id: i64) -> Result<bool>;
}

/// Repository for user accounts
#[async_trait]
pub trait UsersRepository: Send + Sync {
    async fn find_page(&self, page_number: u64, page_size: u64) -> Result<Page<User>>;

    async fn find_by_id(&self, id: i64) -> Result<Option<User>>;

    async fn insert(&self, user: &User) -> Result<User>;

    async fn update(&self, user: &User) -> Result<bool>;

    async fn delete(&self, id: i64) -> Result<bool>;
}
