//! Entity to model mappers
//!
//! Conversions between SeaORM entities and contract models. Orders are
//! assembled from an order row plus its line rows.

use crate::contract::{Order, OrderLine, Product, Profile, User};
use super::entity;

// ===== Product Conversions =====

impl From<entity::producto::Model> for Product {
    fn from(entity: entity::producto::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            price: entity.price,
            stock: entity.stock,
            category_id: entity.category_id,
        }
    }
}

impl From<&Product> for entity::producto::ActiveModel {
    fn from(model: &Product) -> Self {
        use sea_orm::ActiveValue::Set;

        Self {
            id: Set(model.id),
            name: Set(model.name.clone()),
            price: Set(model.price),
            stock: Set(model.stock),
            category_id: Set(model.category_id),
        }
    }
}

// ===== Order Conversions =====

/// Assemble an order from its row and line rows
pub fn order_from_rows(
    order: entity::orden::Model,
    lines: Vec<entity::detalle_orden::Model>,
) -> Order {
    Order {
        id: order.id,
        user_id: order.user_id,
        created_at: order.created_at,
        lines: lines.into_iter().map(Into::into).collect(),
    }
}

impl From<&Order> for entity::orden::ActiveModel {
    fn from(model: &Order) -> Self {
        use sea_orm::ActiveValue::Set;

        Self {
            id: Set(model.id),
            user_id: Set(model.user_id),
            created_at: Set(model.created_at),
        }
    }
}

impl From<entity::detalle_orden::Model> for OrderLine {
    fn from(entity: entity::detalle_orden::Model) -> Self {
        Self {
            id: entity.id,
            order_id: entity.order_id,
            product_id: entity.product_id,
            quantity: entity.quantity,
            unit_price: entity.unit_price,
        }
    }
}

impl From<&OrderLine> for entity::detalle_orden::ActiveModel {
    fn from(model: &OrderLine) -> Self {
        use sea_orm::ActiveValue::Set;

        Self {
            id: Set(model.id),
            order_id: Set(model.order_id),
            product_id: Set(model.product_id),
            quantity: Set(model.quantity),
            unit_price: Set(model.unit_price),
        }
    }
}

// ===== Profile Conversions =====

impl From<entity::perfil::Model> for Profile {
    fn from(entity: entity::perfil::Model) -> Self {
        Self {
            id: entity.id,
            first_name: entity.first_name,
            last_name: entity.last_name,
            user_id: entity.user_id,
        }
    }
}

impl From<&Profile> for entity::perfil::ActiveModel {
    fn from(model: &Profile) -> Self {
        use sea_orm::ActiveValue::Set;

        Self {
            id: Set(model.id),
            first_name: Set(model.first_name.clone()),
            last_name: Set(model.last_name.clone()),
            user_id: Set(model.user_id),
        }
    }
}

// ===== User Conversions =====

impl TryFrom<entity::usuario::Model> for User {
    type Error = anyhow::Error;

    fn try_from(entity: entity::usuario::Model) -> Result<Self, Self::Error> {
        let role = entity.role.parse()?;

        Ok(Self {
            id: entity.id,
            username: entity.username,
            password: entity.password,
            role,
        })
    }
}

impl From<&User> for entity::usuario::ActiveModel {
    fn from(model: &User) -> Self {
        use sea_orm::ActiveValue::Set;

        Self {
            id: Set(model.id),
            username: Set(model.username.clone()),
            password: Set(model.password.clone()),
            role: Set(model.role.as_str().to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contract::Role;
    use rust_decimal::Decimal;

    #[test]
    fn product_round_trip_preserves_fields() {
        let entity = entity::producto::Model {
            id: 7,
            name: "Guitarra clasica".to_string(),
            price: Decimal::new(24950, 2),
            stock: 12,
            category_id: 3,
        };

        let model: Product = entity.clone().into();
        let active: entity::producto::ActiveModel = (&model).into();

        assert_eq!(active.id, sea_orm::ActiveValue::Set(entity.id));
        assert_eq!(active.name, sea_orm::ActiveValue::Set(entity.name));
        assert_eq!(active.price, sea_orm::ActiveValue::Set(entity.price));
        assert_eq!(active.stock, sea_orm::ActiveValue::Set(entity.stock));
        assert_eq!(
            active.category_id,
            sea_orm::ActiveValue::Set(entity.category_id)
        );
    }

    #[test]
    fn user_role_parsing_rejects_unknown_names() {
        let entity = entity::usuario::Model {
            id: 1,
            username: "admin".to_string(),
            password: "secret".to_string(),
            role: "Supervisor".to_string(),
        };

        assert!(User::try_from(entity).is_err());
    }

    #[test]
    fn user_round_trip_preserves_role() {
        let entity = entity::usuario::Model {
            id: 4,
            username: "vendedor1".to_string(),
            password: "secret".to_string(),
            role: "Vendedor".to_string(),
        };

        let model = User::try_from(entity).expect("known role");
        assert_eq!(model.role, Role::Vendedor);

        let active: entity::usuario::ActiveModel = (&model).into();
        assert_eq!(
            active.role,
            sea_orm::ActiveValue::Set("Vendedor".to_string())
        );
    }
}
