use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Pedido: lookups by owning client
        manager
            .create_index(
                Index::create()
                    .name("idx_pedido_cliente")
                    .table(Pedido::Table)
                    .col(Pedido::ClienteId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_pedido_estado")
                    .table(Pedido::Table)
                    .col(Pedido::EstadoPedido)
                    .to_owned(),
            )
            .await?;

        // Tracking numbers are unique when present (NULLs do not collide)
        manager
            .create_index(
                Index::create()
                    .name("uniq_pedido_numero_seguimiento")
                    .table(Pedido::Table)
                    .col(Pedido::NumeroSeguimiento)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("uniq_cliente_email")
                    .table(Cliente::Table)
                    .col(Cliente::Email)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(Index::drop().name("idx_pedido_cliente").table(Pedido::Table).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_pedido_estado").table(Pedido::Table).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("uniq_pedido_numero_seguimiento").table(Pedido::Table).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("uniq_cliente_email").table(Cliente::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Pedido { Table, ClienteId, EstadoPedido, NumeroSeguimiento }

#[derive(DeriveIden)]
enum Cliente { Table, Email }
