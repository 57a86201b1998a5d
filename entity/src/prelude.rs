pub use super::ad::Entity as Ad;
pub use super::category::Entity as Category;
pub use super::chapter::Entity as Chapter;
pub use super::comment::Entity as Comment;
pub use super::page::Entity as Page;
pub use super::story::Entity as Story;
pub use super::story_category::Entity as StoryCategory;
pub use super::story_follow::Entity as StoryFollow;
pub use super::story_like::Entity as StoryLike;
pub use super::story_rating::Entity as StoryRating;
pub use super::user::Entity as User;
