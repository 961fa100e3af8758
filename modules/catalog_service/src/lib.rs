//! Catalog Service Module
//!
//! Data-backed REST API for the store catalog: products, orders with their
//! lines, user profiles and users. Requests flow through a thin HTTP layer
//! into a domain service that talks to per-aggregate repositories backed by
//! SeaORM.

// Public exports
pub mod contract;
pub use contract::{
    error::CatalogError, Order, OrderLine, Page, Product, Profile, Role, User,
};

pub mod config;
pub use config::{AuthConfig, CatalogConfig};

// Internal modules (hidden from public API)
#[doc(hidden)]
pub mod api;
#[doc(hidden)]
pub mod domain;
#[doc(hidden)]
pub mod infra;
