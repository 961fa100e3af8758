//! Common test utilities: in-memory repositories and fixtures

use async_trait::async_trait;
use catalog_service::api::rest::routes::register_routes;
use catalog_service::config::AuthConfig;
use catalog_service::contract::{Order, Page, Product, Profile, Role, User};
use catalog_service::domain::repository::{
    OrdersRepository, ProductsRepository, ProfilesRepository, UsersRepository,
};
use catalog_service::domain::Service;
use parking_lot::RwLock;
use rust_decimal::Decimal;
use std::collections::HashMap;
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Arc;

/// In-memory table with generated identifiers and id-ordered paging
pub struct Table<T> {
    rows: RwLock<HashMap<i64, T>>,
    next_id: AtomicI64,
}

impl<T: Clone> Table<T> {
    pub fn new() -> Self {
        Self {
            rows: RwLock::new(HashMap::new()),
            next_id: AtomicI64::new(1),
        }
    }

    pub fn allocate_id(&self) -> i64 {
        self.next_id.fetch_add(1, Ordering::SeqCst)
    }

    pub fn put(&self, id: i64, row: T) {
        self.rows.write().insert(id, row);
    }

    pub fn get(&self, id: i64) -> Option<T> {
        self.rows.read().get(&id).cloned()
    }

    /// Replace an existing row; false when the id is unknown
    pub fn replace(&self, id: i64, row: T) -> bool {
        let mut rows = self.rows.write();
        if let std::collections::hash_map::Entry::Occupied(mut entry) = rows.entry(id) {
            entry.insert(row);
            true
        } else {
            false
        }
    }

    pub fn remove(&self, id: i64) -> bool {
        self.rows.write().remove(&id).is_some()
    }

    /// Page of rows in ascending id order plus the unfiltered count
    pub fn page(&self, page_number: u64, page_size: u64) -> (Vec<T>, u64) {
        let rows = self.rows.read();
        let mut ids: Vec<i64> = rows.keys().copied().collect();
        ids.sort_unstable();

        let total = ids.len() as u64;
        let items = ids
            .into_iter()
            .skip(((page_number - 1) * page_size) as usize)
            .take(page_size as usize)
            .filter_map(|id| rows.get(&id).cloned())
            .collect();

        (items, total)
    }

    pub fn len(&self) -> usize {
        self.rows.read().len()
    }
}

// ===== Mock repositories =====

pub struct MockProductsRepo {
    pub table: Table<Product>,
}

impl MockProductsRepo {
    pub fn new() -> Self {
        Self {
            table: Table::new(),
        }
    }
}

#[async_trait]
impl ProductsRepository for MockProductsRepo {
    async fn find_page(&self, page_number: u64, page_size: u64) -> anyhow::Result<Page<Product>> {
        let (items, total) = self.table.page(page_number, page_size);
        Ok(Page { items, total })
    }

    async fn find_by_id(&self, id: i64) -> anyhow::Result<Option<Product>> {
        Ok(self.table.get(id))
    }

    async fn insert(&self, product: &Product) -> anyhow::Result<Product> {
        let mut created = product.clone();
        created.id = self.table.allocate_id();
        self.table.put(created.id, created.clone());
        Ok(created)
    }

    async fn update(&self, product: &Product) -> anyhow::Result<bool> {
        Ok(self.table.replace(product.id, product.clone()))
    }

    async fn delete(&self, id: i64) -> anyhow::Result<bool> {
        Ok(self.table.remove(id))
    }
}

pub struct MockOrdersRepo {
    pub table: Table<Order>,
    next_line_id: AtomicI64,
}

impl MockOrdersRepo {
    pub fn new() -> Self {
        Self {
            table: Table::new(),
            next_line_id: AtomicI64::new(1),
        }
    }
}

#[async_trait]
impl OrdersRepository for MockOrdersRepo {
    async fn find_page(&self, page_number: u64, page_size: u64) -> anyhow::Result<Page<Order>> {
        let (items, total) = self.table.page(page_number, page_size);
        Ok(Page { items, total })
    }

    async fn find_by_id(&self, id: i64) -> anyhow::Result<Option<Order>> {
        Ok(self.table.get(id))
    }

    async fn insert(&self, order: &Order) -> anyhow::Result<Order> {
        let mut created = order.clone();
        created.id = self.table.allocate_id();
        for line in &mut created.lines {
            line.id = self.next_line_id.fetch_add(1, Ordering::SeqCst);
            line.order_id = created.id;
        }
        self.table.put(created.id, created.clone());
        Ok(created)
    }

    async fn update(&self, order: &Order) -> anyhow::Result<bool> {
        // Lines are immutable after creation; only the order row changes
        let Some(mut existing) = self.table.get(order.id) else {
            return Ok(false);
        };
        existing.user_id = order.user_id;
        Ok(self.table.replace(order.id, existing))
    }

    async fn delete(&self, id: i64) -> anyhow::Result<bool> {
        Ok(self.table.remove(id))
    }
}

pub struct MockProfilesRepo {
    pub table: Table<Profile>,
}

impl MockProfilesRepo {
    pub fn new() -> Self {
        Self {
            table: Table::new(),
        }
    }
}

#[async_trait]
impl ProfilesRepository for MockProfilesRepo {
    async fn find_page(&self, page_number: u64, page_size: u64) -> anyhow::Result<Page<Profile>> {
        let (items, total) = self.table.page(page_number, page_size);
        Ok(Page { items, total })
    }

    async fn find_by_id(&self, id: i64) -> anyhow::Result<Option<Profile>> {
        Ok(self.table.get(id))
    }

    async fn insert(&self, profile: &Profile) -> anyhow::Result<Profile> {
        let mut created = profile.clone();
        created.id = self.table.allocate_id();
        self.table.put(created.id, created.clone());
        Ok(created)
    }

    async fn update(&self, profile: &Profile) -> anyhow::Result<bool> {
        Ok(self.table.replace(profile.id, profile.clone()))
    }

    async fn delete(&self, id: i64) -> anyhow::Result<bool> {
        Ok(self.table.remove(id))
    }
}

pub struct MockUsersRepo {
    pub table: Table<User>,
}

impl MockUsersRepo {
    pub fn new() -> Self {
        Self {
            table: Table::new(),
        }
    }
}

#[async_trait]
impl UsersRepository for MockUsersRepo {
    async fn find_page(&self, page_number: u64, page_size: u64) -> anyhow::Result<Page<User>> {
        let (items, total) = self.table.page(page_number, page_size);
        Ok(Page { items, total })
    }

    async fn find_by_id(&self, id: i64) -> anyhow::Result<Option<User>> {
        Ok(self.table.get(id))
    }

    async fn insert(&self, user: &User) -> anyhow::Result<User> {
        let mut created = user.clone();
        created.id = self.table.allocate_id();
        self.table.put(created.id, created.clone());
        Ok(created)
    }

    async fn update(&self, user: &User) -> anyhow::Result<bool> {
        Ok(self.table.replace(user.id, user.clone()))
    }

    async fn delete(&self, id: i64) -> anyhow::Result<bool> {
        Ok(self.table.remove(id))
    }
}

// ===== Fixtures =====

/// Service over fresh in-memory repositories, with handles kept for state
/// assertions
pub struct TestStore {
    pub service: Arc<Service>,
    pub products: Arc<MockProductsRepo>,
    pub orders: Arc<MockOrdersRepo>,
    pub profiles: Arc<MockProfilesRepo>,
    pub users: Arc<MockUsersRepo>,
}

impl TestStore {
    pub fn new() -> Self {
        let products = Arc::new(MockProductsRepo::new());
        let orders = Arc::new(MockOrdersRepo::new());
        let profiles = Arc::new(MockProfilesRepo::new());
        let users = Arc::new(MockUsersRepo::new());
        let service = Arc::new(Service::new(
            products.clone(),
            orders.clone(),
            profiles.clone(),
            users.clone(),
        ));

        Self {
            service,
            products,
            orders,
            profiles,
            users,
        }
    }

    /// Router over this store with the given role-gate configuration
    pub fn router_with_auth(&self, auth: AuthConfig) -> axum::Router {
        register_routes(axum::Router::new(), self.service.clone(), Arc::new(auth))
    }

    /// Router over this store with the role gate left at its default
    /// (disabled)
    pub fn router(&self) -> axum::Router {
        self.router_with_auth(AuthConfig::default())
    }
}

pub fn product(name: &str, price: &str) -> Product {
    Product {
        id: 0,
        name: name.to_string(),
        price: price.parse().unwrap_or(Decimal::ZERO),
        stock: 10,
        category_id: 1,
    }
}

pub fn vendedor(username: &str) -> User {
    User {
        id: 0,
        username: username.to_string(),
        password: "secret".to_string(),
        role: Role::Vendedor,
    }
}
