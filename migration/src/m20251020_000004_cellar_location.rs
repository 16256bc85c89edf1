use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(CellarLocation::Table)
                    .if_not_exists()
                    .col(pk_auto(CellarLocation::Id))
                    .col(string(CellarLocation::Name))
                    .col(string(CellarLocation::Temperature))
                    .col(string(CellarLocation::Humidity))
                    .col(integer(CellarLocation::Capacity))
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(CellarLocation::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum CellarLocation {
    Table,
    Id,
    Name,
    Temperature,
    Humidity,
    Capacity,
}
