use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Winery::Table)
                    .if_not_exists()
                    .col(pk_auto(Winery::Id))
                    .col(string(Winery::Name))
                    .col(string(Winery::Region))
                    .col(string(Winery::Country))
                    .col(integer(Winery::Founded))
                    .col(timestamp(Winery::CreatedAt))
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Winery::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Winery {
    Table,
    Id,
    Name,
    Region,
    Country,
    Founded,
    CreatedAt,
}
