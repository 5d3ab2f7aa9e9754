//! Create `prioridad` table.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Prioridad::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Prioridad::Id).big_integer().not_null().auto_increment().primary_key())
                    .col(string_len(Prioridad::Nivel, 16).not_null())
                    .col(string_len_null(Prioridad::Descripcion, 255))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Prioridad::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Prioridad { Table, Id, Nivel, Descripcion }
