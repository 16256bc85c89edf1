use sea_orm_migration::{prelude::*, schema::*};

use crate::m20251020_000005_wine::Wine;

static IDX_PHOTO_WINE_ID: &str = "idx-photo-wine_id";
static FK_PHOTO_WINE_ID: &str = "fk-photo-wine_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Photo::Table)
                    .if_not_exists()
                    .col(pk_auto(Photo::Id))
                    .col(integer(Photo::WineId))
                    .col(string(Photo::Url))
                    .col(string(Photo::StorageKey))
                    .col(timestamp(Photo::CreatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_PHOTO_WINE_ID)
                    .table(Photo::Table)
                    .col(Photo::WineId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_PHOTO_WINE_ID)
                    .from_tbl(Photo::Table)
                    .from_col(Photo::WineId)
                    .to_tbl(Wine::Table)
                    .to_col(Wine::Id)
                    .on_delete(ForeignKeyAction::Cascade)
                    .on_update(ForeignKeyAction::Cascade)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_PHOTO_WINE_ID)
                    .table(Photo::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_PHOTO_WINE_ID)
                    .table(Photo::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Photo::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum Photo {
    Table,
    Id,
    WineId,
    Url,
    StorageKey,
    CreatedAt,
}
