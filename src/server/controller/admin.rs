//! Administrative moderation endpoints.
//!
//! Every handler here requires an admin account. Batch endpoints apply one
//! action to many ids and answer with per-item outcomes instead of a single
//! all-or-nothing status.

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
        admin::{BatchRequestDto, BatchResponseDto},
        api::ErrorDto,
        story::RejectStoryDto,
        user::{SetActiveDto, UpdateRoleDto},
    },
    server::{
        controller::{story::StoryListParams, PaginationParams},
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        service::{
            chapter::ChapterService,
            comment::CommentService,
            moderation::{BatchTarget, ModerationService},
            story::StoryService,
            user::UserService,
        },
        state::AppState,
    },
};

/// Tag for grouping admin endpoints in OpenAPI documentation
pub static ADMIN_TAG: &str = "admin";

#[derive(Deserialize)]
pub struct UserListParams {
    #[serde(default = "default_page")]
    pub page: u64,
    #[serde(default = "default_limit")]
    pub limit: u64,
    pub search: Option<String>,
}

fn default_page() -> u64 {
    1
}

fn default_limit() -> u64 {
    20
}

/// Paginated user listing with optional search over email, username, and
/// display name.
pub async fn list_users(
    State(state): State<AppState>,
    session: Session,
    Query(params): Query<UserListParams>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let page = params.page.max(1);
    let limit = params.limit.clamp(1, 100);

    let service = UserService::new(&state.db);

    let users = service
        .get_paginated(page, limit, params.search.as_deref())
        .await?;

    Ok((StatusCode::OK, Json(users.into_dto(|u| u.into_dto()))))
}

/// Change an account's role (user / author / admin).
pub async fn set_user_role(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateRoleDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let service = UserService::new(&state.db);

    let updated = service.set_role(id, &payload.role).await?;

    if updated {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Ok(StatusCode::NOT_FOUND)
    }
}

/// Activate or deactivate an account. Deactivation takes effect on the
/// user's next request.
pub async fn set_user_active(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Json(payload): Json<SetActiveDto>,
) -> Result<impl IntoResponse, AppError> {
    let admin = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    if admin.id == id && !payload.is_active {
        return Err(AppError::BadRequest(
            "You cannot deactivate your own account".to_string(),
        ));
    }

    let service = UserService::new(&state.db);

    let updated = service.set_active(id, payload.is_active).await?;

    if updated {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Ok(StatusCode::NOT_FOUND)
    }
}

#[derive(Deserialize)]
pub struct NotifyDto {
    pub subject: String,
    pub message: String,
}

/// Send a free-form system notice to one user by email.
///
/// Best-effort like every notification: the endpoint succeeds even when
/// delivery fails, and the failure is logged server-side.
pub async fn notify_user(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Json(payload): Json<NotifyDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let service = UserService::new(&state.db);

    let Some(user) = service.get_by_id(id).await? else {
        return Err(AppError::NotFound("User not found".to_string()));
    };

    state
        .mailer
        .send_system_notice(&user.email, &payload.subject, &payload.message)
        .await;

    Ok(StatusCode::NO_CONTENT)
}

/// Paginated story listing over all statuses, drafts included.
pub async fn list_stories(
    State(state): State<AppState>,
    session: Session,
    Query(params): Query<StoryListParams>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let (filter, page, limit) = params.into_filter(&state, false).await?;

    let service = StoryService::new(&state.db);

    let stories = service.get_paginated(&filter, page, limit).await?;

    Ok((StatusCode::OK, Json(stories.into_dto(|s| s.into_dto()))))
}

/// Approve a story: publish it and notify the author by email.
pub async fn approve_story(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let service = ModerationService::new(&state.db);

    let story = service.approve_story(id, &state.mailer).await?;

    match story {
        Some(story) => Ok((StatusCode::OK, Json(story.into_dto()))),
        None => Err(AppError::NotFound("Story not found".to_string())),
    }
}

/// Reject a story: send it back to draft and notify the author with the
/// moderator's reason.
pub async fn reject_story(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Json(payload): Json<RejectStoryDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let service = ModerationService::new(&state.db);

    let story = service
        .reject_story(id, payload.reason.as_deref(), &state.mailer)
        .await?;

    match story {
        Some(story) => Ok((StatusCode::OK, Json(story.into_dto()))),
        None => Err(AppError::NotFound("Story not found".to_string())),
    }
}

#[derive(Deserialize)]
pub struct RecommendDto {
    pub is_recommended: bool,
}

pub async fn set_story_recommended(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Json(payload): Json<RecommendDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let service = ModerationService::new(&state.db);

    let updated = service.set_story_recommended(id, payload.is_recommended).await?;

    if updated {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Ok(StatusCode::NOT_FOUND)
    }
}

#[derive(Deserialize)]
pub struct ChapterListParams {
    #[serde(default = "default_page")]
    pub page: u64,
    #[serde(default = "default_limit")]
    pub limit: u64,
    pub story_id: Option<i32>,
}

/// Paginated chapter listing, optionally scoped to one story.
pub async fn list_chapters(
    State(state): State<AppState>,
    session: Session,
    Query(params): Query<ChapterListParams>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let page = params.page.max(1);
    let limit = params.limit.clamp(1, 100);

    let service = ChapterService::new(&state.db);

    let chapters = service.get_admin_list(page, limit, params.story_id).await?;

    Ok((StatusCode::OK, Json(chapters.into_dto(|c| c.into_dto()))))
}

#[derive(Deserialize)]
pub struct PublishDto {
    pub is_published: bool,
}

pub async fn set_chapter_published(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Json(payload): Json<PublishDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let service = ModerationService::new(&state.db);

    let updated = service.set_chapter_published(id, payload.is_published).await?;

    if updated {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Ok(StatusCode::NOT_FOUND)
    }
}

/// Paginated comment listing, soft-deleted comments included.
pub async fn list_comments(
    State(state): State<AppState>,
    session: Session,
    Query(params): Query<PaginationParams>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let (page, limit) = params.clamped();

    let service = CommentService::new(&state.db);

    let comments = service.get_all(page, limit).await?;

    Ok((StatusCode::OK, Json(comments.into_dto(|c| c.into_dto()))))
}

/// Reverse a comment's soft deletion.
pub async fn restore_comment(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let service = CommentService::new(&state.db);

    let restored = service.restore(id).await?;

    if restored {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Ok(StatusCode::NOT_FOUND)
    }
}

/// Apply one moderation action to many stories.
///
/// Items are processed independently; the response lists one outcome per
/// requested id. Already-applied items are not rolled back when a later one
/// fails.
#[utoipa::path(
    post,
    path = "/api/admin/stories/batch",
    tag = ADMIN_TAG,
    request_body = BatchRequestDto,
    responses(
        (status = 200, description = "Per-item outcomes in request order", body = BatchResponseDto),
        (status = 400, description = "Unknown batch action", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn batch_stories(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<BatchRequestDto>,
) -> Result<impl IntoResponse, AppError> {
    batch(state, session, BatchTarget::Stories, payload).await
}

pub async fn batch_chapters(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<BatchRequestDto>,
) -> Result<impl IntoResponse, AppError> {
    batch(state, session, BatchTarget::Chapters, payload).await
}

pub async fn batch_comments(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<BatchRequestDto>,
) -> Result<impl IntoResponse, AppError> {
    batch(state, session, BatchTarget::Comments, payload).await
}

pub async fn batch_users(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<BatchRequestDto>,
) -> Result<impl IntoResponse, AppError> {
    batch(state, session, BatchTarget::Users, payload).await
}

async fn batch(
    state: AppState,
    session: Session,
    target: BatchTarget,
    payload: BatchRequestDto,
) -> Result<(StatusCode, Json<BatchResponseDto>), AppError> {
    let admin = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    if payload.ids.is_empty() {
        return Err(AppError::BadRequest("No ids given".to_string()));
    }

    // Admins cannot deactivate themselves, batched or not.
    if target == BatchTarget::Users
        && payload.action == "deactivate"
        && payload.ids.contains(&admin.id)
    {
        return Err(AppError::BadRequest(
            "You cannot deactivate your own account".to_string(),
        ));
    }

    let service = ModerationService::new(&state.db);

    let results = service
        .batch(target, &payload.action, &payload.ids, &state.mailer)
        .await?;

    Ok((StatusCode::OK, Json(BatchResponseDto { results })))
}
