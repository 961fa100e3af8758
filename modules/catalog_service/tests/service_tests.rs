//! Integration tests for the catalog domain service

use catalog_service::contract::{CatalogError, Order, OrderLine, Profile, Role, User};
use rust_decimal::Decimal;

mod common;
use common::{product, vendedor, TestStore};

fn line(product_id: i64, quantity: i32, unit_price: &str) -> OrderLine {
    OrderLine {
        id: 0,
        order_id: 0,
        product_id,
        quantity,
        unit_price: unit_price.parse().unwrap_or(Decimal::ZERO),
    }
}

fn order(user_id: i64, lines: Vec<OrderLine>) -> Order {
    Order {
        id: 0,
        user_id,
        created_at: chrono::Utc::now(),
        lines,
    }
}

// ===== Paging =====

#[tokio::test]
async fn page_item_count_never_exceeds_page_size() {
    let store = TestStore::new();
    for i in 1..=7 {
        store
            .service
            .create_product(product(&format!("Producto {i}"), "10.00"))
            .await
            .expect("create product");
    }

    for page_number in 1..=4 {
        let page = store
            .service
            .list_products(page_number, 3)
            .await
            .expect("list products");
        assert!(
            page.items.len() <= 3,
            "page {} returned {} items",
            page_number,
            page.items.len()
        );
    }
}

#[tokio::test]
async fn total_count_is_the_unfiltered_count_on_every_page() {
    let store = TestStore::new();
    for i in 1..=7 {
        store
            .service
            .create_product(product(&format!("Producto {i}"), "10.00"))
            .await
            .expect("create product");
    }

    for page_number in 1..=5 {
        let page = store
            .service
            .list_products(page_number, 3)
            .await
            .expect("list products");
        assert_eq!(page.total, 7);
    }
}

#[tokio::test]
async fn page_beyond_the_last_is_empty_not_an_error() {
    let store = TestStore::new();
    for i in 1..=4 {
        store
            .service
            .create_product(product(&format!("Producto {i}"), "10.00"))
            .await
            .expect("create product");
    }

    let page = store.service.list_products(99, 3).await.expect("list");
    assert!(page.items.is_empty());
    assert_eq!(page.total, 4);
}

#[tokio::test]
async fn paging_bounds_are_validated() {
    let store = TestStore::new();

    let result = store.service.list_products(0, 3).await;
    assert!(matches!(result, Err(CatalogError::Validation { .. })));

    let result = store.service.list_products(1, 0).await;
    assert!(matches!(result, Err(CatalogError::Validation { .. })));
}

#[tokio::test]
async fn pages_are_ordered_by_identifier() {
    let store = TestStore::new();
    for i in 1..=5 {
        store
            .service
            .create_product(product(&format!("Producto {i}"), "10.00"))
            .await
            .expect("create product");
    }

    let first = store.service.list_products(1, 2).await.expect("page 1");
    let second = store.service.list_products(2, 2).await.expect("page 2");

    let ids: Vec<i64> = first
        .items
        .iter()
        .chain(second.items.iter())
        .map(|p| p.id)
        .collect();
    assert_eq!(ids, vec![1, 2, 3, 4]);
}

// ===== Products =====

#[tokio::test]
async fn create_product_assigns_an_identifier() {
    let store = TestStore::new();

    let created = store
        .service
        .create_product(product("Guitarra clasica", "249.50"))
        .await
        .expect("create product");

    assert!(created.id > 0);

    let fetched = store
        .service
        .get_product(created.id)
        .await
        .expect("get product");
    assert_eq!(fetched.name, "Guitarra clasica");
}

#[tokio::test]
async fn negative_price_is_rejected() {
    let store = TestStore::new();

    let result = store
        .service
        .create_product(product("Producto roto", "-1.00"))
        .await;

    assert!(matches!(result, Err(CatalogError::Validation { .. })));
    assert_eq!(store.products.table.len(), 0);
}

#[tokio::test]
async fn get_missing_product_reports_not_found() {
    let store = TestStore::new();

    let result = store.service.get_product(42).await;
    assert!(matches!(
        result,
        Err(CatalogError::NotFound {
            resource: "product",
            id: 42
        })
    ));
}

#[tokio::test]
async fn update_missing_product_reports_operation_failed() {
    let store = TestStore::new();

    let mut missing = product("Fantasma", "5.00");
    missing.id = 42;

    let result = store.service.update_product(missing).await;
    assert!(matches!(
        result,
        Err(CatalogError::OperationFailed { id: 42, .. })
    ));
}

#[tokio::test]
async fn delete_then_get_reports_not_found() {
    let store = TestStore::new();

    let created = store
        .service
        .create_product(product("Efimero", "1.00"))
        .await
        .expect("create product");

    store
        .service
        .delete_product(created.id)
        .await
        .expect("delete product");

    let result = store.service.get_product(created.id).await;
    assert!(matches!(result, Err(CatalogError::NotFound { .. })));
}

#[tokio::test]
async fn delete_missing_product_reports_operation_failed() {
    let store = TestStore::new();

    let result = store.service.delete_product(42).await;
    assert!(matches!(result, Err(CatalogError::OperationFailed { .. })));
}

// ===== Orders =====

#[tokio::test]
async fn order_lines_ride_with_the_order() {
    let store = TestStore::new();

    let created = store
        .service
        .create_order(order(1, vec![line(1, 2, "19.99"), line(2, 1, "5.25")]))
        .await
        .expect("create order");

    assert!(created.id > 0);
    assert_eq!(created.lines.len(), 2);
    assert!(created.lines.iter().all(|l| l.order_id == created.id));
    assert!(created.lines.iter().all(|l| l.id > 0));

    let fetched = store.service.get_order(created.id).await.expect("get order");
    assert_eq!(fetched.lines, created.lines);
}

#[tokio::test]
async fn order_requires_positive_line_quantities() {
    let store = TestStore::new();

    let result = store
        .service
        .create_order(order(1, vec![line(1, 0, "19.99")]))
        .await;

    assert!(matches!(result, Err(CatalogError::Validation { .. })));
    assert_eq!(store.orders.table.len(), 0);
}

#[tokio::test]
async fn order_requires_at_least_one_line() {
    let store = TestStore::new();

    let result = store.service.create_order(order(1, vec![])).await;
    assert!(matches!(result, Err(CatalogError::Validation { .. })));
}

#[tokio::test]
async fn order_update_changes_the_customer_only() {
    let store = TestStore::new();

    let created = store
        .service
        .create_order(order(1, vec![line(1, 2, "19.99")]))
        .await
        .expect("create order");

    let mut changed = created.clone();
    changed.user_id = 9;

    store.service.update_order(changed).await.expect("update");

    let fetched = store.service.get_order(created.id).await.expect("get");
    assert_eq!(fetched.user_id, 9);
    assert_eq!(fetched.lines, created.lines);
}

// ===== Profiles and users =====

#[tokio::test]
async fn profile_crud_round_trip() {
    let store = TestStore::new();

    let created = store
        .service
        .create_profile(Profile {
            id: 0,
            first_name: "Ana".to_string(),
            last_name: "Reyes".to_string(),
            user_id: 1,
        })
        .await
        .expect("create profile");

    let fetched = store
        .service
        .get_profile(created.id)
        .await
        .expect("get profile");
    assert_eq!(fetched.first_name, "Ana");

    store
        .service
        .delete_profile(created.id)
        .await
        .expect("delete profile");
    assert!(store.service.get_profile(created.id).await.is_err());
}

#[tokio::test]
async fn user_requires_a_username() {
    let store = TestStore::new();

    let mut blank = vendedor("");
    blank.username = "   ".to_string();

    let result = store.service.create_user(blank).await;
    assert!(matches!(result, Err(CatalogError::Validation { .. })));
}

#[tokio::test]
async fn user_round_trip_preserves_role() {
    let store = TestStore::new();

    let created = store
        .service
        .create_user(User {
            id: 0,
            username: "admin".to_string(),
            password: "secret".to_string(),
            role: Role::Administrador,
        })
        .await
        .expect("create user");

    let fetched = store.service.get_user(created.id).await.expect("get user");
    assert_eq!(fetched.role, Role::Administrador);

    assert_eq!(store.users.table.len(), 1);
    assert_eq!(store.profiles.table.len(), 0);
}
