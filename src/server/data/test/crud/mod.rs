use crate::server::{
    data::crud::{list_select, CrudRepository},
    model::{
        horse::UpdateHorseParams,
        query::{Filter, ListQuery, Search, Sort, SortOrder},
    },
};
use entity::{
    prelude::Horse,
    sea_orm_active_enums::{HorseBreed, HorseGender},
};
use sea_orm::{ActiveValue, DbBackend, DbErr, EntityTrait, PaginatorTrait, QueryTrait};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod get;
mod list;
mod update;

fn new_horse(owner_id: i32, name: &str) -> entity::horse::ActiveModel {
    entity::horse::ActiveModel {
        owner_id: ActiveValue::Set(owner_id),
        name: ActiveValue::Set(name.to_string()),
        breed: ActiveValue::Set(HorseBreed::Friesian),
        age: ActiveValue::Set(6),
        gender: ActiveValue::Set(HorseGender::Stallion),
        color: ActiveValue::Set("Black".to_string()),
        height: ActiveValue::Set(Some(16.0)),
        weight: ActiveValue::Set(None),
        description: ActiveValue::Set(Some("Calm under saddle".to_string())),
        training_level: ActiveValue::Set(None),
        health_records: ActiveValue::Set(None),
        ..Default::default()
    }
}
