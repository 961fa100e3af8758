//! Contract layer - transport-agnostic models and errors
//!
//! NO serde derives on models - these are pure domain types.

pub mod error;
pub mod model;

pub use error::CatalogError;
pub use model::{Order, OrderLine, Page, Product, Profile, Role, User};
