use axum::{
    routing::{delete, get, patch, post, put},
    Router,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::{
    model::{
        admin::{BatchItemResultDto, BatchRequestDto, BatchResponseDto},
        api::{ErrorDto, PageMeta, Paginated},
        category::{CategoryDto, CategoryListItemDto, CreateCategoryDto},
        story::{StoryDto, StoryListItemDto},
    },
    server::{
        controller::{ad, admin, auth, category, chapter, comment, page, story, user},
        state::AppState,
    },
};

#[derive(OpenApi)]
#[openapi(
    paths(
        story::list_stories,
        story::get_story,
        category::list_categories,
        category::list_categories_admin,
        category::create_category,
        admin::batch_stories,
    ),
    components(schemas(
        ErrorDto,
        PageMeta,
        StoryDto,
        StoryListItemDto,
        Paginated<StoryListItemDto>,
        CategoryDto,
        CategoryListItemDto,
        Paginated<CategoryListItemDto>,
        CreateCategoryDto,
        BatchRequestDto,
        BatchItemResultDto,
        BatchResponseDto,
    ))
)]
struct ApiDoc;

pub fn router() -> Router<AppState> {
    Router::new()
        // auth
        .route("/api/auth/register", post(auth::register))
        .route("/api/auth/login", post(auth::login))
        .route("/api/auth/logout", get(auth::logout))
        .route("/api/auth/me", get(auth::get_user))
        .route("/api/auth/verify", get(auth::verify_email))
        .route("/api/auth/google", get(auth::google_login))
        .route("/api/auth/google/callback", get(auth::google_callback))
        .route("/api/auth/facebook", get(auth::facebook_login))
        .route("/api/auth/facebook/callback", get(auth::facebook_callback))
        // profile
        .route("/api/users/me", put(user::update_own_profile))
        // public catalog
        .route("/api/stories", get(story::list_stories).post(story::create_story))
        .route("/api/categories", get(category::list_categories))
        .route("/api/pages/{slug}", get(page::get_page))
        .route("/api/ads", get(ad::list_active_ads))
        .route("/api/authors/{id}", get(user::get_author_profile))
        // stories: GET resolves by slug, the write verbs take the story id.
        // One param name per position, as the route table requires.
        .route(
            "/api/stories/{story}",
            get(story::get_story)
                .put(story::update_story)
                .delete(story::delete_story),
        )
        .route(
            "/api/stories/{story}/chapters",
            get(chapter::list_chapters).post(chapter::create_chapter),
        )
        .route(
            "/api/stories/{story}/chapters/{chapter}",
            get(chapter::read_chapter),
        )
        // author workspace
        .route("/api/users/me/stories", get(story::list_own_stories))
        .route(
            "/api/chapters/{id}",
            put(chapter::update_chapter).delete(chapter::delete_chapter),
        )
        .route("/api/chapters/{id}/reorder", patch(chapter::reorder_chapter))
        // reader interactions (story id)
        .route(
            "/api/stories/{story}/like",
            post(story::like_story).delete(story::unlike_story),
        )
        .route(
            "/api/stories/{story}/follow",
            post(story::follow_story).delete(story::unfollow_story),
        )
        .route("/api/stories/{story}/rating", put(story::rate_story))
        // comments
        .route(
            "/api/stories/{story}/comments",
            get(comment::list_story_comments),
        )
        .route(
            "/api/chapters/{id}/comments",
            get(comment::list_chapter_comments),
        )
        .route("/api/comments/{id}/replies", get(comment::list_replies))
        .route("/api/comments", post(comment::create_comment))
        .route("/api/comments/{id}", delete(comment::delete_comment))
        // admin: users
        .route("/api/admin/users", get(admin::list_users))
        .route("/api/admin/users/{id}/role", patch(admin::set_user_role))
        .route("/api/admin/users/{id}/active", patch(admin::set_user_active))
        .route("/api/admin/users/{id}/notify", post(admin::notify_user))
        .route("/api/admin/users/batch", post(admin::batch_users))
        // admin: stories
        .route("/api/admin/stories", get(admin::list_stories))
        .route("/api/admin/stories/{id}/approve", patch(admin::approve_story))
        .route("/api/admin/stories/{id}/reject", patch(admin::reject_story))
        .route(
            "/api/admin/stories/{id}/recommend",
            patch(admin::set_story_recommended),
        )
        .route("/api/admin/stories/batch", post(admin::batch_stories))
        // admin: chapters
        .route("/api/admin/chapters", get(admin::list_chapters))
        .route(
            "/api/admin/chapters/{id}/publish",
            patch(admin::set_chapter_published),
        )
        .route("/api/admin/chapters/batch", post(admin::batch_chapters))
        // admin: comments
        .route("/api/admin/comments", get(admin::list_comments))
        .route("/api/admin/comments/{id}/restore", patch(admin::restore_comment))
        .route("/api/admin/comments/batch", post(admin::batch_comments))
        // admin: categories
        .route(
            "/api/admin/categories",
            get(category::list_categories_admin).post(category::create_category),
        )
        .route(
            "/api/admin/categories/{id}",
            put(category::update_category).delete(category::delete_category),
        )
        // admin: pages
        .route(
            "/api/admin/pages",
            get(page::list_pages_admin).post(page::create_page),
        )
        .route(
            "/api/admin/pages/{id}",
            put(page::update_page).delete(page::delete_page),
        )
        // admin: ads
        .route("/api/admin/ads", get(ad::list_ads_admin).post(ad::create_ad))
        .route("/api/admin/ads/{id}", put(ad::update_ad).delete(ad::delete_ad))
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
}
