use crate::server::data::ad::AdRepository;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod get_active;
