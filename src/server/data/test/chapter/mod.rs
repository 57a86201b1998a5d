use crate::server::{
    data::chapter::ChapterRepository,
    model::chapter::{CreateChapterParams, UpdateChapterParams},
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory, factory::helpers::create_story_with_author};

mod create;
mod get_by_story;
mod next_sort_order;
mod set_sort_order;
mod slug_exists;
mod update;

fn create_params(
    story_id: i32,
    uploader_id: i32,
    title: &str,
    slug: &str,
    sort_order: i32,
) -> CreateChapterParams {
    CreateChapterParams {
        story_id,
        uploader_id,
        title: title.to_string(),
        slug: slug.to_string(),
        content: "<p>một hai ba bốn năm</p>".to_string(),
        sort_order,
        word_count: 5,
        reading_time: 1,
        is_published: true,
    }
}
