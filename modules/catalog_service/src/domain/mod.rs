//! Domain layer - repository ports and the orchestration service

pub mod repository;
pub mod service;

pub use repository::{
    OrdersRepository, ProductsRepository, ProfilesRepository, UsersRepository,
};
pub use service::Service;
