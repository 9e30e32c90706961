use crate::server::error::{auth::AuthError, AppError};
use sea_orm::{DbErr, EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};

mod horse;
mod rental;
