use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::chapter::{CreateChapterDto, ReorderChapterDto, UpdateChapterDto},
    server::{
        controller::optional_user,
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        service::chapter::ChapterService,
        state::AppState,
    },
};

/// List a story's chapters in reading order.
///
/// Readers see published chapters of published stories; the story's author
/// and admins also see drafts.
pub async fn list_chapters(
    State(state): State<AppState>,
    session: Session,
    Path(story_slug): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let viewer = optional_user(&state.db, &session).await?;

    let service = ChapterService::new(&state.db);

    let chapters = service.list_for_story(&story_slug, viewer.as_ref()).await?;

    match chapters {
        Some(chapters) => Ok((
            StatusCode::OK,
            Json(
                chapters
                    .into_iter()
                    .map(|c| c.into_dto())
                    .collect::<Vec<_>>(),
            ),
        )),
        None => Err(AppError::NotFound("Story not found".to_string())),
    }
}

/// Reading endpoint: chapter content by story and chapter slug.
///
/// A public read increments the chapter's view counter.
pub async fn read_chapter(
    State(state): State<AppState>,
    session: Session,
    Path((story_slug, chapter_slug)): Path<(String, String)>,
) -> Result<impl IntoResponse, AppError> {
    let viewer = optional_user(&state.db, &session).await?;

    let service = ChapterService::new(&state.db);

    let chapter = service
        .read(&story_slug, &chapter_slug, viewer.as_ref())
        .await?;

    match chapter {
        Some(chapter) => Ok((StatusCode::OK, Json(chapter.into_content_dto()))),
        None => Err(AppError::NotFound("Chapter not found".to_string())),
    }
}

/// Append a chapter to a story. Requires ownership of the story.
pub async fn create_chapter(
    State(state): State<AppState>,
    session: Session,
    Path(story_id): Path<i32>,
    Json(payload): Json<CreateChapterDto>,
) -> Result<impl IntoResponse, AppError> {
    let actor = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Author])
        .await?;

    let service = ChapterService::new(&state.db);

    let chapter = service.create(&actor, story_id, payload).await?;

    Ok((StatusCode::CREATED, Json(chapter.into_dto())))
}

pub async fn update_chapter(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateChapterDto>,
) -> Result<impl IntoResponse, AppError> {
    let actor = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Author])
        .await?;

    let service = ChapterService::new(&state.db);

    let chapter = service.update(&actor, id, payload).await?;

    match chapter {
        Some(chapter) => Ok((StatusCode::OK, Json(chapter.into_dto()))),
        None => Err(AppError::NotFound("Chapter not found".to_string())),
    }
}

/// Move a chapter to an explicit position in the reading sequence.
pub async fn reorder_chapter(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Json(payload): Json<ReorderChapterDto>,
) -> Result<impl IntoResponse, AppError> {
    let actor = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Author])
        .await?;

    let service = ChapterService::new(&state.db);

    let moved = service.reorder(&actor, id, payload.sort_order).await?;

    if moved {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Ok(StatusCode::NOT_FOUND)
    }
}

pub async fn delete_chapter(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let actor = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Author])
        .await?;

    let service = ChapterService::new(&state.db);

    let deleted = service.delete(&actor, id).await?;

    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Ok(StatusCode::NOT_FOUND)
    }
}
