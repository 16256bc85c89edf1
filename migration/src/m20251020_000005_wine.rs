use sea_orm_migration::{prelude::*, schema::*};

use crate::{m20251020_000001_varietal::Varietal, m20251020_000002_winery::Winery};

static IDX_WINE_WINERY_ID: &str = "idx-wine-winery_id";
static IDX_WINE_VARIETAL_ID: &str = "idx-wine-varietal_id";
static IDX_WINE_WINE_TYPE: &str = "idx-wine-wine_type";
static FK_WINE_WINERY_ID: &str = "fk-wine-winery_id";
static FK_WINE_VARIETAL_ID: &str = "fk-wine-varietal_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Wine::Table)
                    .if_not_exists()
                    .col(pk_auto(Wine::Id))
                    .col(string(Wine::Name))
                    .col(integer_null(Wine::Vintage))
                    .col(integer(Wine::WineryId))
                    .col(integer_null(Wine::VarietalId))
                    .col(string(Wine::Region))
                    .col(string(Wine::Country))
                    .col(string(Wine::WineType))
                    .col(string_null(Wine::Sweetness))
                    .col(integer(Wine::Quantity).default(1))
                    .col(string(Wine::BottleSize).default("STANDARD"))
                    .col(date_null(Wine::PurchaseDate))
                    .col(double_null(Wine::PurchasePrice))
                    .col(string_null(Wine::PurchaseLocation))
                    .col(string_null(Wine::Retailer))
                    .col(string_null(Wine::StorageLocation))
                    .col(string_null(Wine::Bin))
                    .col(string_null(Wine::Rack))
                    .col(integer_null(Wine::DrinkFrom))
                    .col(integer_null(Wine::DrinkTo))
                    .col(integer_null(Wine::PeakDrinking))
                    .col(integer_null(Wine::PersonalRating))
                    .col(integer_null(Wine::CriticRating))
                    .col(text_null(Wine::TastingNotes))
                    .col(double_null(Wine::CurrentValue))
                    .col(double_null(Wine::EstimatedValue))
                    .col(string(Wine::Status).default("IN_CELLAR"))
                    .col(timestamp(Wine::CreatedAt))
                    .col(timestamp(Wine::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        for (name, column) in [
            (IDX_WINE_WINERY_ID, Wine::WineryId),
            (IDX_WINE_VARIETAL_ID, Wine::VarietalId),
            (IDX_WINE_WINE_TYPE, Wine::WineType),
        ] {
            manager
                .create_index(
                    Index::create()
                        .name(name)
                        .table(Wine::Table)
                        .col(column)
                        .to_owned(),
                )
                .await?;
        }

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_WINE_WINERY_ID)
                    .from_tbl(Wine::Table)
                    .from_col(Wine::WineryId)
                    .to_tbl(Winery::Table)
                    .to_col(Winery::Id)
                    .on_delete(ForeignKeyAction::Restrict)
                    .on_update(ForeignKeyAction::Cascade)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_WINE_VARIETAL_ID)
                    .from_tbl(Wine::Table)
                    .from_col(Wine::VarietalId)
                    .to_tbl(Varietal::Table)
                    .to_col(Varietal::Id)
                    .on_delete(ForeignKeyAction::SetNull)
                    .on_update(ForeignKeyAction::Cascade)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        for name in [FK_WINE_VARIETAL_ID, FK_WINE_WINERY_ID] {
            manager
                .drop_foreign_key(ForeignKey::drop().name(name).table(Wine::Table).to_owned())
                .await?;
        }

        for name in [IDX_WINE_WINE_TYPE, IDX_WINE_VARIETAL_ID, IDX_WINE_WINERY_ID] {
            manager
                .drop_index(Index::drop().name(name).table(Wine::Table).to_owned())
                .await?;
        }

        manager
            .drop_table(Table::drop().table(Wine::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Wine {
    Table,
    Id,
    Name,
    Vintage,
    WineryId,
    VarietalId,
    Region,
    Country,
    WineType,
    Sweetness,
    Quantity,
    BottleSize,
    PurchaseDate,
    PurchasePrice,
    PurchaseLocation,
    Retailer,
    StorageLocation,
    Bin,
    Rack,
    DrinkFrom,
    DrinkTo,
    PeakDrinking,
    PersonalRating,
    CriticRating,
    TastingNotes,
    CurrentValue,
    EstimatedValue,
    Status,
    CreatedAt,
    UpdatedAt,
}
