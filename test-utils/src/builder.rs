use entity::prelude::*;
use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{context::TestContext, error::TestError};

/// Builder for creating test contexts with customizable database schemas.
///
/// Use the builder pattern to add entity tables, then call `build()` to
/// create the configured test context with an in-memory SQLite database.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::builder::TestBuilder;
/// use entity::prelude::{User, Category};
///
/// let test = TestBuilder::new()
///     .with_table(User)
///     .with_table(Category)
///     .build()
///     .await?;
/// ```
pub struct TestBuilder {
    tables: Vec<TableCreateStatement>,
}

impl TestBuilder {
    pub fn new() -> Self {
        Self { tables: Vec::new() }
    }

    /// Adds an entity table to the test database schema.
    ///
    /// Tables should be added in dependency order (tables with foreign keys
    /// after their referenced tables).
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Adds the content tables in dependency order:
    /// User, Category, Story, StoryCategory, Chapter.
    ///
    /// Use this for story and chapter tests that don't involve comments or
    /// reader interactions.
    pub fn with_content_tables(self) -> Self {
        self.with_table(User)
            .with_table(Category)
            .with_table(Story)
            .with_table(StoryCategory)
            .with_table(Chapter)
    }

    /// Content tables plus Comment.
    pub fn with_comment_tables(self) -> Self {
        self.with_content_tables().with_table(Comment)
    }

    /// Content tables plus the reader-interaction tables
    /// (StoryLike, StoryFollow, StoryRating).
    pub fn with_interaction_tables(self) -> Self {
        self.with_content_tables()
            .with_table(StoryLike)
            .with_table(StoryFollow)
            .with_table(StoryRating)
    }

    /// Builds and initializes the test context with configured tables.
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut setup = TestContext::new();

        setup.with_tables(self.tables).await?;

        Ok(setup)
    }
}
