//! SeaORM entities for database tables
//!
//! Table and column names keep the store's legacy Spanish schema; the Rust
//! field names are mapped explicitly per column.

/// Products table entity
pub mod producto {
    use sea_orm::entity::prelude::*;

    #[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
    #[sea_orm(table_name = "productos")]
    pub struct Model {
        #[sea_orm(primary_key)]
        pub id: i64,

        #[sea_orm(column_name = "nombre")]
        pub name: String,

        #[sea_orm(column_name = "precio", column_type = "Decimal(Some((18, 2)))")]
        pub price: Decimal,

        #[sea_orm(column_name = "existencias")]
        pub stock: i32,

        #[sea_orm(column_name = "categoria_id")]
        pub category_id: i64,
    }

    #[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
    pub enum Relation {
        #[sea_orm(has_many = "super::detalle_orden::Entity")]
        DetallesOrden,
    }

    impl Related<super::detalle_orden::Entity> for Entity {
        fn to() -> RelationDef {
            Relation::DetallesOrden.def()
        }
    }

    impl ActiveModelBehavior for ActiveModel {}
}

/// Orders table entity
pub mod orden {
    use sea_orm::entity::prelude::*;

    #[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
    #[sea_orm(table_name = "ordenes")]
    pub struct Model {
        #[sea_orm(primary_key)]
        pub id: i64,

        /// Customer reference
        #[sea_orm(column_name = "usuario_id")]
        pub user_id: i64,

        #[sea_orm(column_name = "fecha_registro")]
        pub created_at: DateTimeUtc,
    }

    #[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
    pub enum Relation {
        #[sea_orm(has_many = "super::detalle_orden::Entity")]
        DetallesOrden,
        #[sea_orm(
            belongs_to = "super::usuario::Entity",
            from = "Column::UserId",
            to = "super::usuario::Column::Id"
        )]
        Usuario,
    }

    impl Related<super::detalle_orden::Entity> for Entity {
        fn to() -> RelationDef {
            Relation::DetallesOrden.def()
        }
    }

    impl Related<super::usuario::Entity> for Entity {
        fn to() -> RelationDef {
            Relation::Usuario.def()
        }
    }

    impl ActiveModelBehavior for ActiveModel {}
}

/// Order lines table entity
pub mod detalle_orden {
    use sea_orm::entity::prelude::*;

    #[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
    #[sea_orm(table_name = "detalles_orden")]
    pub struct Model {
        #[sea_orm(primary_key)]
        pub id: i64,

        #[sea_orm(column_name = "orden_id")]
        pub order_id: i64,

        #[sea_orm(column_name = "producto_id")]
        pub product_id: i64,

        #[sea_orm(column_name = "cantidad")]
        pub quantity: i32,

        /// Unit price snapshot at the time the line was created
        #[sea_orm(column_name = "precio_unitario", column_type = "Decimal(Some((18, 2)))")]
        pub unit_price: Decimal,
    }

    #[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
    pub enum Relation {
        #[sea_orm(
            belongs_to = "super::orden::Entity",
            from = "Column::OrderId",
            to = "super::orden::Column::Id"
        )]
        Orden,
        #[sea_orm(
            belongs_to = "super::producto::Entity",
            from = "Column::ProductId",
            to = "super::producto::Column::Id"
        )]
        Producto,
    }

    impl Related<super::orden::Entity> for Entity {
        fn to() -> RelationDef {
            Relation::Orden.def()
        }
    }

    impl Related<super::producto::Entity> for Entity {
        fn to() -> RelationDef {
            Relation::Producto.def()
        }
    }

    impl ActiveModelBehavior for ActiveModel {}
}

/// Profiles table entity
pub mod perfil {
    use sea_orm::entity::prelude::*;

    #[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
    #[sea_orm(table_name = "perfiles")]
    pub struct Model {
        #[sea_orm(primary_key)]
        pub id: i64,

        #[sea_orm(column_name = "nombres")]
        pub first_name: String,

        #[sea_orm(column_name = "apellidos")]
        pub last_name: String,

        #[sea_orm(column_name = "usuario_id")]
        pub user_id: i64,
    }

    #[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
    pub enum Relation {
        #[sea_orm(
            belongs_to = "super::usuario::Entity",
            from = "Column::UserId",
            to = "super::usuario::Column::Id"
        )]
        Usuario,
    }

    impl Related<super::usuario::Entity> for Entity {
        fn to() -> RelationDef {
            Relation::Usuario.def()
        }
    }

    impl ActiveModelBehavior for ActiveModel {}
}

/// Users table entity
pub mod usuario {
    use sea_orm::entity::prelude::*;

    #[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
    #[sea_orm(table_name = "usuarios")]
    pub struct Model {
        #[sea_orm(primary_key)]
        pub id: i64,

        #[sea_orm(column_name = "nombre_usuario", unique)]
        pub username: String,

        #[sea_orm(column_name = "clave")]
        pub password: String,

        /// Role name as stored ("Administrador" | "Vendedor")
        #[sea_orm(column_name = "rol")]
        pub role: String,
    }

    #[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
    pub enum Relation {
        #[sea_orm(has_many = "super::perfil::Entity")]
        Perfiles,
        #[sea_orm(has_many = "super::orden::Entity")]
        Ordenes,
    }

    impl Related<super::perfil::Entity> for Entity {
        fn to() -> RelationDef {
            Relation::Perfiles.def()
        }
    }

    impl Related<super::orden::Entity> for Entity {
        fn to() -> RelationDef {
            Relation::Ordenes.def()
        }
    }

    impl ActiveModelBehavior for ActiveModel {}
}
