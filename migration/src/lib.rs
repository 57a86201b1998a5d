pub use sea_orm_migration::prelude::*;

mod m20260601_000001_create_user_table;
mod m20260601_000002_create_category_table;
mod m20260601_000003_create_story_table;
mod m20260601_000004_create_story_category_table;
mod m20260601_000005_create_chapter_table;
mod m20260601_000006_create_comment_table;
mod m20260601_000007_create_story_follow_table;
mod m20260601_000008_create_story_like_table;
mod m20260601_000009_create_story_rating_table;
mod m20260601_000010_create_page_table;
mod m20260601_000011_create_ad_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260601_000001_create_user_table::Migration),
            Box::new(m20260601_000002_create_category_table::Migration),
            Box::new(m20260601_000003_create_story_table::Migration),
            Box::new(m20260601_000004_create_story_category_table::Migration),
            Box::new(m20260601_000005_create_chapter_table::Migration),
            Box::new(m20260601_000006_create_comment_table::Migration),
            Box::new(m20260601_000007_create_story_follow_table::Migration),
            Box::new(m20260601_000008_create_story_like_table::Migration),
            Box::new(m20260601_000009_create_story_rating_table::Migration),
            Box::new(m20260601_000010_create_page_table::Migration),
            Box::new(m20260601_000011_create_ad_table::Migration),
        ]
    }
}
