use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "tag")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub name: String,
    pub color: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::wine_tag::Entity")]
    WineTag,
}

impl Related<super::wine_tag::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::WineTag.def()
    }
}

impl Related<super::wine::Entity> for Entity {
    fn to() -> RelationDef {
        super::wine_tag::Relation::Wine.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::wine_tag::Relation::Tag.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
