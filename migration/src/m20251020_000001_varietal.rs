use sea_orm_migration::{prelude::*, schema::*};

static IDX_VARIETAL_WINE_TYPE: &str = "idx-varietal-wine_type";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Varietal::Table)
                    .if_not_exists()
                    .col(pk_auto(Varietal::Id))
                    .col(string_uniq(Varietal::Name))
                    .col(string(Varietal::WineType))
                    .col(text(Varietal::Description))
                    .col(json(Varietal::CommonRegions))
                    .col(json(Varietal::Characteristics))
                    .col(json(Varietal::Aliases))
                    .col(timestamp(Varietal::CreatedAt))
                    .col(timestamp(Varietal::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_VARIETAL_WINE_TYPE)
                    .table(Varietal::Table)
                    .col(Varietal::WineType)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_VARIETAL_WINE_TYPE)
                    .table(Varietal::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Varietal::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Varietal {
    Table,
    Id,
    Name,
    WineType,
    Description,
    CommonRegions,
    Characteristics,
    Aliases,
    CreatedAt,
    UpdatedAt,
}
