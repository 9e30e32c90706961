use sea_orm::entity::prelude::*;

use super::sea_orm_active_enums::{HorseBreed, HorseGender};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "horses")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub owner_id: i32,
    pub name: String,
    pub breed: HorseBreed,
    pub age: i32,
    pub gender: HorseGender,
    pub color: String,
    /// Height in hands.
    #[sea_orm(column_type = "Double", nullable)]
    pub height: Option<f64>,
    /// Weight in kilograms.
    #[sea_orm(column_type = "Double", nullable)]
    pub weight: Option<f64>,
    #[sea_orm(column_type = "Text", nullable)]
    pub description: Option<String>,
    pub training_level: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub health_records: Option<String>,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::OwnerId",
        to = "super::user::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    User,
    #[sea_orm(has_many = "super::horse_image::Entity")]
    HorseImage,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl Related<super::horse_image::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::HorseImage.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
