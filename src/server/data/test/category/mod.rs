use crate::server::{
    data::category::CategoryRepository,
    model::category::{CreateCategoryParams, UpdateCategoryParams},
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod get_all_with_counts_paginated;
mod update;
mod upsert_by_name;

fn params(name: &str, slug: &str) -> CreateCategoryParams {
    CreateCategoryParams {
        name: name.to_string(),
        slug: slug.to_string(),
        description: Some(format!("{} description", name)),
    }
}
