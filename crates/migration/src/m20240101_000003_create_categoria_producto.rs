//! Create `categoria_producto` table.
//! Enumerations are stored as their upper-case string values.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(CategoriaProducto::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(CategoriaProducto::Id).big_integer().not_null().auto_increment().primary_key())
                    .col(string_len(CategoriaProducto::CategoriaProducto, 32).not_null())
                    .col(string_len_null(CategoriaProducto::DescripcionProducto, 255))
                    .col(timestamp_with_time_zone(CategoriaProducto::FechaCreacion).not_null())
                    .col(timestamp_with_time_zone(CategoriaProducto::FechaModificacion).not_null())
                    .col(string_len(CategoriaProducto::EstadoCategoria, 16).not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(CategoriaProducto::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum CategoriaProducto {
    Table,
    Id,
    CategoriaProducto,
    DescripcionProducto,
    FechaCreacion,
    FechaModificacion,
    EstadoCategoria,
}
