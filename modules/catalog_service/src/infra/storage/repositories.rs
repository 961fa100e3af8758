//! SeaORM repository implementations

use crate::contract::{Order, Page, Product, Profile, User};
use crate::domain::repository::{
    OrdersRepository, ProductsRepository, ProfilesRepository, UsersRepository,
};
use anyhow::Result;
use async_trait::async_trait;
use sea_orm::{
    ActiveValue::NotSet, ColumnTrait, DatabaseConnection, EntityTrait, ModelTrait,
    PaginatorTrait, QueryFilter, QueryOrder, TransactionTrait,
};
use std::collections::HashMap;
use std::sync::Arc;

use super::entity;
use super::mapper::order_from_rows;

// ===== Products Repository =====

pub struct SeaOrmProductsRepository {
    db: Arc<DatabaseConnection>,
}

impl SeaOrmProductsRepository {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ProductsRepository for SeaOrmProductsRepository {
    async fn find_page(&self, page_number: u64, page_size: u64) -> Result<Page<Product>> {
        let paginator = entity::producto::Entity::find()
            .order_by_asc(entity::producto::Column::Id)
            .paginate(&*self.db, page_size);

        let total = paginator.num_items().await?;
        let items = paginator.fetch_page(page_number - 1).await?;

        Ok(Page {
            items: items.into_iter().map(Into::into).collect(),
            total,
        })
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Product>> {
        let result = entity::producto::Entity::find_by_id(id)
            .one(&*self.db)
            .await?;

        Ok(result.map(Into::into))
    }

    async fn insert(&self, product: &Product) -> Result<Product> {
        let mut active: entity::producto::ActiveModel = product.into();
        active.id = NotSet;

        let created = entity::producto::Entity::insert(active)
            .exec_with_returning(&*self.db)
            .await?;

        Ok(created.into())
    }

    async fn update(&self, product: &Product) -> Result<bool> {
        let existing = entity::producto::Entity::find_by_id(product.id)
            .one(&*self.db)
            .await?;
        if existing.is_none() {
            return Ok(false);
        }

        let active: entity::producto::ActiveModel = product.into();
        entity::producto::Entity::update(active).exec(&*self.db).await?;

        Ok(true)
    }

    async fn delete(&self, id: i64) -> Result<bool> {
        let result = entity::producto::Entity::delete_by_id(id)
            .exec(&*self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}

// ===== Orders Repository =====

pub struct SeaOrmOrdersRepository {
    db: Arc<DatabaseConnection>,
}

impl SeaOrmOrdersRepository {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl OrdersRepository for SeaOrmOrdersRepository {
    async fn find_page(&self, page_number: u64, page_size: u64) -> Result<Page<Order>> {
        let paginator = entity::orden::Entity::find()
            .order_by_asc(entity::orden::Column::Id)
            .paginate(&*self.db, page_size);

        let total = paginator.num_items().await?;
        let orders = paginator.fetch_page(page_number - 1).await?;

        // One batched query for the lines of every order on the page
        let order_ids: Vec<i64> = orders.iter().map(|o| o.id).collect();
        let mut lines_by_order: HashMap<i64, Vec<entity::detalle_orden::Model>> = HashMap::new();
        if !order_ids.is_empty() {
            let lines = entity::detalle_orden::Entity::find()
                .filter(entity::detalle_orden::Column::OrderId.is_in(order_ids))
                .order_by_asc(entity::detalle_orden::Column::Id)
                .all(&*self.db)
                .await?;
            for line in lines {
                lines_by_order.entry(line.order_id).or_default().push(line);
            }
        }

        Ok(Page {
            items: orders
                .into_iter()
                .map(|o| {
                    let lines = lines_by_order.remove(&o.id).unwrap_or_default();
                    order_from_rows(o, lines)
                })
                .collect(),
            total,
        })
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Order>> {
        let Some(order) = entity::orden::Entity::find_by_id(id).one(&*self.db).await? else {
            return Ok(None);
        };

        let lines = order
            .find_related(entity::detalle_orden::Entity)
            .order_by_asc(entity::detalle_orden::Column::Id)
            .all(&*self.db)
            .await?;

        Ok(Some(order_from_rows(order, lines)))
    }

    async fn insert(&self, order: &Order) -> Result<Order> {
        let txn = self.db.begin().await?;

        let mut active: entity::orden::ActiveModel = order.into();
        active.id = NotSet;
        let created = entity::orden::Entity::insert(active)
            .exec_with_returning(&txn)
            .await?;

        let mut lines = Vec::with_capacity(order.lines.len());
        for line in &order.lines {
            let mut active: entity::detalle_orden::ActiveModel = line.into();
            active.id = NotSet;
            active.order_id = sea_orm::ActiveValue::Set(created.id);
            let created_line = entity::detalle_orden::Entity::insert(active)
                .exec_with_returning(&txn)
                .await?;
            lines.push(created_line);
        }

        txn.commit().await?;

        Ok(order_from_rows(created, lines))
    }

    async fn update(&self, order: &Order) -> Result<bool> {
        let existing = entity::orden::Entity::find_by_id(order.id)
            .one(&*self.db)
            .await?;
        if existing.is_none() {
            return Ok(false);
        }

        let active: entity::orden::ActiveModel = order.into();
        entity::orden::Entity::update(active).exec(&*self.db).await?;

        Ok(true)
    }

    async fn delete(&self, id: i64) -> Result<bool> {
        let txn = self.db.begin().await?;

        entity::detalle_orden::Entity::delete_many()
            .filter(entity::detalle_orden::Column::OrderId.eq(id))
            .exec(&txn)
            .await?;
        let result = entity::orden::Entity::delete_by_id(id).exec(&txn).await?;

        txn.commit().await?;

        Ok(result.rows_affected > 0)
    }
}

// ===== Profiles Repository =====

pub struct SeaOrmProfilesRepository {
    db: Arc<DatabaseConnection>,
}

impl SeaOrmProfilesRepository {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ProfilesRepository for SeaOrmProfilesRepository {
    async fn find_page(&self, page_number: u64, page_size: u64) -> Result<Page<Profile>> {
        let paginator = entity::perfil::Entity::find()
            .order_by_asc(entity::perfil::Column::Id)
            .paginate(&*self.db, page_size);

        let total = paginator.num_items().await?;
        let items = paginator.fetch_page(page_number - 1).await?;

        Ok(Page {
            items: items.into_iter().map(Into::into).collect(),
            total,
        })
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Profile>> {
        let result = entity::perfil::Entity::find_by_id(id).one(&*self.db).await?;

        Ok(result.map(Into::into))
    }

    async fn insert(&self, profile: &Profile) -> Result<Profile> {
        let mut active: entity::perfil::ActiveModel = profile.into();
        active.id = NotSet;

        let created = entity::perfil::Entity::insert(active)
            .exec_with_returning(&*self.db)
            .await?;

        Ok(created.into())
    }

    async fn update(&self, profile: &Profile) -> Result<bool> {
        let existing = entity::perfil::Entity::find_by_id(profile.id)
            .one(&*self.db)
            .await?;
        if existing.is_none() {
            return Ok(false);
        }

        let active: entity::perfil::ActiveModel = profile.into();
        entity::perfil::Entity::update(active).exec(&*self.db).await?;

        Ok(true)
    }

    async fn delete(&self, id: i64) -> Result<bool> {
        let result = entity::perfil::Entity::delete_by_id(id)
            .exec(&*self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}

// ===== Users Repository =====

pub struct SeaOrmUsersRepository {
    db: Arc<DatabaseConnection>,
}

impl SeaOrmUsersRepository {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl UsersRepository for SeaOrmUsersRepository {
    async fn find_page(&self, page_number: u64, page_size: u64) -> Result<Page<User>> {
        let paginator = entity::usuario::Entity::find()
            .order_by_asc(entity::usuario::Column::Id)
            .paginate(&*self.db, page_size);

        let total = paginator.num_items().await?;
        let items = paginator.fetch_page(page_number - 1).await?;

        Ok(Page {
            items: items
                .into_iter()
                .map(TryInto::try_into)
                .collect::<Result<Vec<_>>>()?,
            total,
        })
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<User>> {
        let result = entity::usuario::Entity::find_by_id(id).one(&*self.db).await?;

        match result {
            Some(entity) => Ok(Some(entity.try_into()?)),
            None => Ok(None),
        }
    }

    async fn insert(&self, user: &User) -> Result<User> {
        let mut active: entity::usuario::ActiveModel = user.into();
        active.id = NotSet;

        let created = entity::usuario::Entity::insert(active)
            .exec_with_returning(&*self.db)
            .await?;

        created.try_into()
    }

    async fn update(&self, user: &User) -> Result<bool> {
        let existing = entity::usuario::Entity::find_by_id(user.id)
            .one(&*self.db)
            .await?;
        if existing.is_none() {
            return Ok(false);
        }

        let active: entity::usuario::ActiveModel = user.into();
        entity::usuario::Entity::update(active).exec(&*self.db).await?;

        Ok(true)
    }

    async fn delete(&self, id: i64) -> Result<bool> {
        let result = entity::usuario::Entity::delete_by_id(id)
            .exec(&*self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
