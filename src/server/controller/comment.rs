use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::comment::CreateCommentDto,
    server::{
        controller::PaginationParams,
        error::AppError,
        middleware::auth::AuthGuard,
        service::comment::CommentService,
        state::AppState,
    },
};

/// Top-level comments on a story, newest first.
pub async fn list_story_comments(
    State(state): State<AppState>,
    Path(story_id): Path<i32>,
    Query(params): Query<PaginationParams>,
) -> Result<impl IntoResponse, AppError> {
    let (page, limit) = params.clamped();

    let service = CommentService::new(&state.db);

    let comments = service.get_for_story(story_id, page, limit).await?;

    Ok((StatusCode::OK, Json(comments.into_dto(|c| c.into_dto()))))
}

/// Top-level comments on a chapter, newest first.
pub async fn list_chapter_comments(
    State(state): State<AppState>,
    Path(chapter_id): Path<i32>,
    Query(params): Query<PaginationParams>,
) -> Result<impl IntoResponse, AppError> {
    let (page, limit) = params.clamped();

    let service = CommentService::new(&state.db);

    let comments = service.get_for_chapter(chapter_id, page, limit).await?;

    Ok((StatusCode::OK, Json(comments.into_dto(|c| c.into_dto()))))
}

/// Replies to a comment, oldest first.
pub async fn list_replies(
    State(state): State<AppState>,
    Path(comment_id): Path<i32>,
    Query(params): Query<PaginationParams>,
) -> Result<impl IntoResponse, AppError> {
    let (page, limit) = params.clamped();

    let service = CommentService::new(&state.db);

    let replies = service.get_replies(comment_id, page, limit).await?;

    Ok((StatusCode::OK, Json(replies.into_dto(|c| c.into_dto()))))
}

/// Post a comment on a story or chapter, optionally as a reply.
pub async fn create_comment(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<CreateCommentDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let service = CommentService::new(&state.db);

    let comment = service.create(&user, payload).await?;

    Ok((StatusCode::CREATED, Json(comment.into_dto())))
}

/// Soft-delete a comment. Owners may delete their own; admins any.
pub async fn delete_comment(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let service = CommentService::new(&state.db);

    let deleted = service.delete(&user, id).await?;

    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Ok(StatusCode::NOT_FOUND)
    }
}
