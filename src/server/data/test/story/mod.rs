use crate::server::{
    data::story::StoryRepository,
    model::story::{CreateStoryParams, SortOrder, StoryFilter, StorySort, UpdateStoryParams},
};
use entity::story::StoryStatus;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod get_paginated;
mod increment_view;
mod set_published;
mod update;

fn create_params(author_id: i32, title: &str, slug: &str) -> CreateStoryParams {
    CreateStoryParams {
        author_id,
        author_name: "Tác Giả".to_string(),
        title: title.to_string(),
        slug: slug.to_string(),
        description: None,
        cover_image: None,
        tags: None,
        country: None,
        category_ids: vec![],
    }
}
