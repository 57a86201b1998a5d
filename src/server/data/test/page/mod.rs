use crate::server::{data::page::PageRepository, model::page::CreatePageParams};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod find_active_by_slug;
mod upsert_by_slug;

fn params(slug: &str, title: &str) -> CreatePageParams {
    CreatePageParams {
        slug: slug.to_string(),
        title: title.to_string(),
        description: None,
        content: format!("<p>{}</p>", title),
        is_active: true,
    }
}
