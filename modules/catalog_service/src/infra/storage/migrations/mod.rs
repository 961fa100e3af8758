//! Database migrations for the catalog service

use sea_orm_migration::prelude::*;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20240115_000001_create_usuarios::Migration),
            Box::new(m20240115_000002_create_perfiles::Migration),
            Box::new(m20240115_000003_create_productos::Migration),
            Box::new(m20240115_000004_create_ordenes::Migration),
        ]
    }
}

mod m20240115_000001_create_usuarios {
    use super::*;

    #[derive(DeriveMigrationName)]
    pub struct Migration;

    #[async_trait::async_trait]
    impl MigrationTrait for Migration {
        async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .create_table(
                    Table::create()
                        .table(Usuarios::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(Usuarios::Id)
                                .big_integer()
                                .not_null()
                                .auto_increment()
                                .primary_key(),
                        )
                        .col(
                            ColumnDef::new(Usuarios::NombreUsuario)
                                .string()
                                .not_null()
                                .unique_key(),
                        )
                        .col(ColumnDef::new(Usuarios::Clave).string().not_null())
                        .col(ColumnDef::new(Usuarios::Rol).string().not_null())
                        .to_owned(),
                )
                .await
        }

        async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .drop_table(Table::drop().table(Usuarios::Table).to_owned())
                .await
        }
    }
}

mod m20240115_000002_create_perfiles {
    use super::*;

    #[derive(DeriveMigrationName)]
    pub struct Migration;

    #[async_trait::async_trait]
    impl MigrationTrait for Migration {
        async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .create_table(
                    Table::create()
                        .table(Perfiles::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(Perfiles::Id)
                                .big_integer()
                                .not_null()
                                .auto_increment()
                                .primary_key(),
                        )
                        .col(ColumnDef::new(Perfiles::Nombres).string().not_null())
                        .col(ColumnDef::new(Perfiles::Apellidos).string().not_null())
                        .col(ColumnDef::new(Perfiles::UsuarioId).big_integer().not_null())
                        .foreign_key(
                            ForeignKey::create()
                                .name("fk_perfiles_usuario")
                                .from(Perfiles::Table, Perfiles::UsuarioId)
                                .to(Usuarios::Table, Usuarios::Id)
                                .on_delete(ForeignKeyAction::Restrict)
                                .on_update(ForeignKeyAction::Cascade),
                        )
                        .to_owned(),
                )
                .await?;

            manager
                .create_index(
                    Index::create()
                        .name("idx_perfiles_usuario_id")
                        .table(Perfiles::Table)
                        .col(Perfiles::UsuarioId)
                        .to_owned(),
                )
                .await
        }

        async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .drop_table(Table::drop().table(Perfiles::Table).to_owned())
                .await
        }
    }
}

mod m20240115_000003_create_productos {
    use super::*;

    #[derive(DeriveMigrationName)]
    pub struct Migration;

    #[async_trait::async_trait]
    impl MigrationTrait for Migration {
        async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .create_table(
                    Table::create()
                        .table(Productos::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(Productos::Id)
                                .big_integer()
                                .not_null()
                                .auto_increment()
                                .primary_key(),
                        )
                        .col(ColumnDef::new(Productos::Nombre).string().not_null())
                        .col(
                            ColumnDef::new(Productos::Precio)
                                .decimal_len(18, 2)
                                .not_null(),
                        )
                        .col(ColumnDef::new(Productos::Existencias).integer().not_null())
                        .col(ColumnDef::new(Productos::CategoriaId).big_integer().not_null())
                        .to_owned(),
                )
                .await
        }

        async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .drop_table(Table::drop().table(Productos::Table).to_owned())
                .await
        }
    }
}

mod m20240115_000004_create_ordenes {
    use super::*;

    #[derive(DeriveMigrationName)]
    pub struct Migration;

    #[async_trait::async_trait]
    impl MigrationTrait for Migration {
        async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .create_table(
                    Table::create()
                        .table(Ordenes::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(Ordenes::Id)
                                .big_integer()
                                .not_null()
                                .auto_increment()
                                .primary_key(),
                        )
                        .col(ColumnDef::new(Ordenes::UsuarioId).big_integer().not_null())
                        .col(
                            ColumnDef::new(Ordenes::FechaRegistro)
                                .timestamp_with_time_zone()
                                .not_null()
                                .default(Expr::current_timestamp()),
                        )
                        .foreign_key(
                            ForeignKey::create()
                                .name("fk_ordenes_usuario")
                                .from(Ordenes::Table, Ordenes::UsuarioId)
                                .to(Usuarios::Table, Usuarios::Id)
                                .on_delete(ForeignKeyAction::Restrict)
                                .on_update(ForeignKeyAction::Cascade),
                        )
                        .to_owned(),
                )
                .await?;

            manager
                .create_table(
                    Table::create()
                        .table(DetallesOrden::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(DetallesOrden::Id)
                                .big_integer()
                                .not_null()
                                .auto_increment()
                                .primary_key(),
                        )
                        .col(ColumnDef::new(DetallesOrden::OrdenId).big_integer().not_null())
                        .col(
                            ColumnDef::new(DetallesOrden::ProductoId)
                                .big_integer()
                                .not_null(),
                        )
                        .col(ColumnDef::new(DetallesOrden::Cantidad).integer().not_null())
                        .col(
                            ColumnDef::new(DetallesOrden::PrecioUnitario)
                                .decimal_len(18, 2)
                                .not_null(),
                        )
                        .foreign_key(
                            ForeignKey::create()
                                .name("fk_detalles_orden_orden")
                                .from(DetallesOrden::Table, DetallesOrden::OrdenId)
                                .to(Ordenes::Table, Ordenes::Id)
                                .on_delete(ForeignKeyAction::Cascade)
                                .on_update(ForeignKeyAction::Cascade),
                        )
                        .foreign_key(
                            ForeignKey::create()
                                .name("fk_detalles_orden_producto")
                                .from(DetallesOrden::Table, DetallesOrden::ProductoId)
                                .to(Productos::Table, Productos::Id)
                                .on_delete(ForeignKeyAction::Restrict)
                                .on_update(ForeignKeyAction::Cascade),
                        )
                        .to_owned(),
                )
                .await?;

            manager
                .create_index(
                    Index::create()
                        .name("idx_ordenes_usuario_id")
                        .table(Ordenes::Table)
                        .col(Ordenes::UsuarioId)
                        .to_owned(),
                )
                .await?;

            manager
                .create_index(
                    Index::create()
                        .name("idx_detalles_orden_orden_id")
                        .table(DetallesOrden::Table)
                        .col(DetallesOrden::OrdenId)
                        .to_owned(),
                )
                .await?;

            manager
                .create_index(
                    Index::create()
                        .name("idx_detalles_orden_producto_id")
                        .table(DetallesOrden::Table)
                        .col(DetallesOrden::ProductoId)
                        .to_owned(),
                )
                .await
        }

        async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .drop_table(Table::drop().table(DetallesOrden::Table).to_owned())
                .await?;
            manager
                .drop_table(Table::drop().table(Ordenes::Table).to_owned())
                .await
        }
    }
}

#[derive(DeriveIden)]
enum Usuarios {
    Table,
    Id,
    NombreUsuario,
    Clave,
    Rol,
}

#[derive(DeriveIden)]
enum Perfiles {
    Table,
    Id,
    Nombres,
    Apellidos,
    UsuarioId,
}

#[derive(DeriveIden)]
enum Productos {
    Table,
    Id,
    Nombre,
    Precio,
    Existencias,
    CategoriaId,
}

#[derive(DeriveIden)]
enum Ordenes {
    Table,
    Id,
    UsuarioId,
    FechaRegistro,
}

#[derive(DeriveIden)]
enum DetallesOrden {
    Table,
    Id,
    OrdenId,
    ProductoId,
    Cantidad,
    PrecioUnitario,
}
