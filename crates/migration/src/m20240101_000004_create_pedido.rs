//! Create `pedido` table.
//! Orders belong to a client (required) and optionally to a priority.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Pedido::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Pedido::Id).big_integer().not_null().auto_increment().primary_key())
                    .col(big_integer(Pedido::ClienteId).not_null())
                    .col(big_integer_null(Pedido::PrioridadId))
                    .col(timestamp_with_time_zone(Pedido::FechaPedido).not_null())
                    .col(timestamp_with_time_zone_null(Pedido::FechaEntrega))
                    .col(string_len(Pedido::EstadoPedido, 16).not_null())
                    .col(ColumnDef::new(Pedido::MontoTotal).decimal_len(12, 2).not_null())
                    .col(string_len(Pedido::MetodoPago, 32).not_null())
                    .col(string_len(Pedido::DireccionEnvio, 255).not_null())
                    .col(timestamp_with_time_zone(Pedido::FechaModificacion).not_null())
                    .col(string_len_null(Pedido::NumeroSeguimiento, 64))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_pedido_cliente")
                            .from(Pedido::Table, Pedido::ClienteId)
                            .to(Cliente::Table, Cliente::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_pedido_prioridad")
                            .from(Pedido::Table, Pedido::PrioridadId)
                            .to(Prioridad::Table, Prioridad::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Pedido::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Pedido {
    Table,
    Id,
    ClienteId,
    PrioridadId,
    FechaPedido,
    FechaEntrega,
    EstadoPedido,
    MontoTotal,
    MetodoPago,
    DireccionEnvio,
    FechaModificacion,
    NumeroSeguimiento,
}

#[derive(DeriveIden)]
enum Cliente { Table, Id }

#[derive(DeriveIden)]
enum Prioridad { Table, Id }
