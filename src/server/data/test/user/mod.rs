use crate::server::data::user::{NewUser, UserChanges, UserRepository};
use sea_orm::{DbErr, EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod find;
mod update;
