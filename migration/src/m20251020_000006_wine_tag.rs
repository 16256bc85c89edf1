use sea_orm_migration::{prelude::*, schema::*};

use crate::{m20251020_000003_tag::Tag, m20251020_000005_wine::Wine};

static IDX_WINE_TAG_TAG_ID: &str = "idx-wine_tag-tag_id";
static FK_WINE_TAG_WINE_ID: &str = "fk-wine_tag-wine_id";
static FK_WINE_TAG_TAG_ID: &str = "fk-wine_tag-tag_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(WineTag::Table)
                    .if_not_exists()
                    .col(integer(WineTag::WineId))
                    .col(integer(WineTag::TagId))
                    .primary_key(Index::create().col(WineTag::WineId).col(WineTag::TagId))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_WINE_TAG_TAG_ID)
                    .table(WineTag::Table)
                    .col(WineTag::TagId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_WINE_TAG_WINE_ID)
                    .from_tbl(WineTag::Table)
                    .from_col(WineTag::WineId)
                    .to_tbl(Wine::Table)
                    .to_col(Wine::Id)
                    .on_delete(ForeignKeyAction::Cascade)
                    .on_update(ForeignKeyAction::Cascade)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_WINE_TAG_TAG_ID)
                    .from_tbl(WineTag::Table)
                    .from_col(WineTag::TagId)
                    .to_tbl(Tag::Table)
                    .to_col(Tag::Id)
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
                    .name(FK_WINE_TAG_TAG_ID)
                    .table(WineTag::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_WINE_TAG_WINE_ID)
                    .table(WineTag::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_WINE_TAG_TAG_ID)
                    .table(WineTag::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(WineTag::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum WineTag {
    Table,
    WineId,
    TagId,
}
