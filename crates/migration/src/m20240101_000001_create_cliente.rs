//! Create `cliente` table.
//!
//! Owner of orders; `pedido.cliente_id` references it.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Cliente::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Cliente::Id).big_integer().not_null().auto_increment().primary_key())
                    .col(string_len(Cliente::Nombre, 128).not_null())
                    .col(string_len(Cliente::Email, 255).not_null())
                    .col(string_len_null(Cliente::Telefono, 32))
                    .col(string_len_null(Cliente::Direccion, 255))
                    .col(timestamp_with_time_zone(Cliente::FechaCreacion).not_null())
                    .col(timestamp_with_time_zone(Cliente::FechaModificacion).not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Cliente::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Cliente { Table, Id, Nombre, Email, Telefono, Direccion, FechaCreacion, FechaModificacion }
