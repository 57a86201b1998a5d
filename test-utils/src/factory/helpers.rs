//! Shared helper utilities for factory methods.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique IDs in tests.
///
/// This atomic counter ensures each factory-created entity gets a unique
/// identifier to prevent collisions in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates an author with one published story.
///
/// Convenience for chapter and comment tests that just need a story to hang
/// records off. Use the individual factories to customize either entity.
///
/// # Returns
/// - `Ok((author, story))` - Tuple of the created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_story_with_author(
    db: &DatabaseConnection,
) -> Result<(entity::user::Model, entity::story::Model), DbErr> {
    let author = crate::factory::user::UserFactory::new(db)
        .role(entity::user::UserRole::Author)
        .build()
        .await?;
    let story = crate::factory::story::StoryFactory::new(db, author.id)
        .published(true)
        .build()
        .await?;

    Ok((author, story))
}
