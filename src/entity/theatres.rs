use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "theatres")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: Uuid,
    // The resolver's natural key; backed by a unique index.
    #[sea_orm(unique)]
    pub name: String,
    pub address: Option<String>,
    pub city: String,
    pub state: String,
    pub country: String,
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::screens::Entity")]
    Screens,
    #[sea_orm(has_many = "super::reviews::Entity")]
    Reviews,
}

impl Related<super::screens::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Screens.def()
    }
}

impl Related<super::reviews::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Reviews.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
