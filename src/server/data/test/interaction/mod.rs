use crate::server::data::interaction::InteractionRepository;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory, factory::helpers::create_story_with_author};

mod follow;
mod like;
mod rate;
