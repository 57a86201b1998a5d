use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        story::{CreateStoryDto, RateStoryDto, StoryDto, StoryListItemDto, UpdateStoryDto},
    },
    server::{
        controller::optional_user,
        data::category::CategoryRepository,
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::story::{SortOrder, StoryFilter, StorySort},
        service::story::StoryService,
        state::AppState,
    },
};

/// Tag for grouping story endpoints in OpenAPI documentation
pub static STORY_TAG: &str = "story";

/// Query parameters for story listings: pagination plus search, status,
/// category, and sort controls.
#[derive(Deserialize)]
pub struct StoryListParams {
    #[serde(default = "default_page")]
    pub page: u64,
    #[serde(default = "default_limit")]
    pub limit: u64,
    pub search: Option<String>,
    pub status: Option<String>,
    pub category: Option<String>,
    pub sort_by: Option<String>,
    pub sort_order: Option<String>,
}

fn default_page() -> u64 {
    1
}

fn default_limit() -> u64 {
    20
}

impl StoryListParams {
    /// Builds a repository filter from the raw query values, resolving the
    /// category slug and rejecting unknown enum values.
    pub(crate) async fn into_filter(
        self,
        state: &AppState,
        published_only: bool,
    ) -> Result<(StoryFilter, u64, u64), AppError> {
        let page = self.page.max(1);
        let limit = self.limit.clamp(1, 100);

        let status = match &self.status {
            Some(raw) => Some(
                crate::server::model::story::str_to_status(raw)
                    .ok_or_else(|| AppError::BadRequest(format!("Unknown status '{}'", raw)))?,
            ),
            None => None,
        };

        let category_id = match &self.category {
            Some(slug) => {
                let category = CategoryRepository::new(&state.db)
                    .find_by_slug(slug)
                    .await?
                    .ok_or_else(|| AppError::NotFound("Category not found".to_string()))?;
                Some(category.id)
            }
            None => None,
        };

        let sort_by = match &self.sort_by {
            Some(raw) => StorySort::parse(raw)
                .ok_or_else(|| AppError::BadRequest(format!("Unknown sort key '{}'", raw)))?,
            None => StorySort::UpdatedAt,
        };

        let sort_order = match &self.sort_order {
            Some(raw) => SortOrder::parse(raw)
                .ok_or_else(|| AppError::BadRequest(format!("Unknown sort order '{}'", raw)))?,
            None => SortOrder::Desc,
        };

        let filter = StoryFilter {
            search: self.search.filter(|s| !s.trim().is_empty()),
            status,
            category_id,
            author_id: None,
            published_only,
            sort_by,
            sort_order,
        };

        Ok((filter, page, limit))
    }
}

/// List published stories.
///
/// Public catalog endpoint with pagination, search over title and author
/// name, and status/category/sort filters. Responses use the uniform
/// `{data, meta}` envelope.
#[utoipa::path(
    get,
    path = "/api/stories",
    tag = STORY_TAG,
    params(
        ("page" = Option<u64>, Query, description = "Page number, 1-indexed (default: 1)"),
        ("limit" = Option<u64>, Query, description = "Items per page (default: 20, max: 100)"),
        ("search" = Option<String>, Query, description = "Match against title and author name"),
        ("status" = Option<String>, Query, description = "Filter by story status"),
        ("category" = Option<String>, Query, description = "Filter by category slug"),
        ("sort_by" = Option<String>, Query, description = "created_at | updated_at | view_count | rating | title"),
        ("sort_order" = Option<String>, Query, description = "asc | desc")
    ),
    responses(
        (status = 200, description = "Paginated published stories", body = crate::model::api::Paginated<StoryListItemDto>),
        (status = 400, description = "Invalid filter value", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_stories(
    State(state): State<AppState>,
    Query(params): Query<StoryListParams>,
) -> Result<impl IntoResponse, AppError> {
    let (filter, page, limit) = params.into_filter(&state, true).await?;

    let service = StoryService::new(&state.db);

    let stories = service.get_paginated(&filter, page, limit).await?;

    Ok((StatusCode::OK, Json(stories.into_dto(|s| s.into_dto()))))
}

/// Get a story by slug.
///
/// Public detail endpoint. Reading a published story increments its view
/// counter; unpublished stories are only visible to their author and admins.
#[utoipa::path(
    get,
    path = "/api/stories/{story}",
    tag = STORY_TAG,
    params(
        ("story" = String, Path, description = "Story slug")
    ),
    responses(
        (status = 200, description = "Story detail", body = StoryDto),
        (status = 404, description = "Story not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_story(
    State(state): State<AppState>,
    session: Session,
    Path(slug): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let viewer = optional_user(&state.db, &session).await?;

    let service = StoryService::new(&state.db);

    let story = service.get_by_slug(&slug, viewer.as_ref()).await?;

    match story {
        Some(story) => Ok((StatusCode::OK, Json(story.into_dto()))),
        None => Err(AppError::NotFound("Story not found".to_string())),
    }
}

/// Create a story. Requires an author or admin account.
pub async fn create_story(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<CreateStoryDto>,
) -> Result<impl IntoResponse, AppError> {
    let author = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Author])
        .await?;

    let service = StoryService::new(&state.db);

    let story = service.create(&author, payload).await?;

    Ok((StatusCode::CREATED, Json(story.into_dto())))
}

/// Update a story. Authors may only update their own.
pub async fn update_story(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateStoryDto>,
) -> Result<impl IntoResponse, AppError> {
    let actor = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Author])
        .await?;

    let service = StoryService::new(&state.db);

    let story = service.update(&actor, id, payload).await?;

    match story {
        Some(story) => Ok((StatusCode::OK, Json(story.into_dto()))),
        None => Err(AppError::NotFound("Story not found".to_string())),
    }
}

/// Delete a story. Authors may only delete their own.
pub async fn delete_story(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let actor = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Author])
        .await?;

    let service = StoryService::new(&state.db);

    let deleted = service.delete(&actor, id).await?;

    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Ok(StatusCode::NOT_FOUND)
    }
}

/// List the authenticated author's own stories, drafts included.
pub async fn list_own_stories(
    State(state): State<AppState>,
    session: Session,
    Query(params): Query<StoryListParams>,
) -> Result<impl IntoResponse, AppError> {
    let author = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Author])
        .await?;

    let (mut filter, page, limit) = params.into_filter(&state, false).await?;
    filter.author_id = Some(author.id);

    let service = StoryService::new(&state.db);

    let stories = service.get_paginated(&filter, page, limit).await?;

    Ok((StatusCode::OK, Json(stories.into_dto(|s| s.into_dto()))))
}

pub async fn like_story(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    StoryService::new(&state.db).like(user.id, id).await?;

    Ok(StatusCode::NO_CONTENT)
}

pub async fn unlike_story(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    StoryService::new(&state.db).unlike(user.id, id).await?;

    Ok(StatusCode::NO_CONTENT)
}

pub async fn follow_story(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    StoryService::new(&state.db).follow(user.id, id).await?;

    Ok(StatusCode::NO_CONTENT)
}

pub async fn unfollow_story(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    StoryService::new(&state.db).unfollow(user.id, id).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Rate a story from 1 to 5. Re-rating replaces the previous score.
pub async fn rate_story(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Json(payload): Json<RateStoryDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let (rating, rating_count) = StoryService::new(&state.db)
        .rate(user.id, id, payload.score)
        .await?;

    Ok((
        StatusCode::OK,
        Json(serde_json::json!({ "rating": rating, "rating_count": rating_count })),
    ))
}
