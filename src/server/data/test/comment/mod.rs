use crate::server::{data::comment::CommentRepository, model::comment::CreateCommentParams};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory, factory::helpers::create_story_with_author};

mod create;
mod get_for_story;
mod restore;
mod soft_delete;

fn story_comment(user_id: i32, story_id: i32) -> CreateCommentParams {
    CreateCommentParams {
        user_id,
        content: "Truyện hay quá!".to_string(),
        story_id: Some(story_id),
        chapter_id: None,
        parent_id: None,
    }
}

fn reply(user_id: i32, story_id: i32, parent_id: i32) -> CreateCommentParams {
    CreateCommentParams {
        user_id,
        content: "Đồng ý".to_string(),
        story_id: Some(story_id),
        chapter_id: None,
        parent_id: Some(parent_id),
    }
}
