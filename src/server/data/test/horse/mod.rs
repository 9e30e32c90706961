use crate::server::{
    data::horse::HorseRepository,
    model::{
        horse::{CreateHorseImageParams, CreateHorseParams, UpdateHorseParams},
        query::{Filter, ListQuery},
    },
};
use entity::sea_orm_active_enums::{HorseBreed, HorseGender};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create_with_owner;
mod get_by_owner;
mod images;
mod list;
mod update;
