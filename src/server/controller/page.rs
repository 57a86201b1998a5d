use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::page::{CreatePageDto, UpdatePageDto},
    server::{
        controller::PaginationParams,
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        service::page::PageService,
        state::AppState,
    },
};

/// Public static page by slug (about, contact, copyright, ...). Inactive
/// pages 404.
pub async fn get_page(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let service = PageService::new(&state.db);

    let page = service.get_active_by_slug(&slug).await?;

    match page {
        Some(page) => Ok((StatusCode::OK, Json(page.into_dto()))),
        None => Err(AppError::NotFound("Page not found".to_string())),
    }
}

/// Admin: paginated listing of all pages, inactive included.
pub async fn list_pages_admin(
    State(state): State<AppState>,
    session: Session,
    Query(params): Query<PaginationParams>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let (page, limit) = params.clamped();

    let service = PageService::new(&state.db);

    let pages = service.get_paginated(page, limit).await?;

    Ok((StatusCode::OK, Json(pages.into_dto(|p| p.into_dto()))))
}

pub async fn create_page(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<CreatePageDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let service = PageService::new(&state.db);

    let page = service.create(payload).await?;

    Ok((StatusCode::CREATED, Json(page.into_dto())))
}

pub async fn update_page(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Json(payload): Json<UpdatePageDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let service = PageService::new(&state.db);

    let page = service.update(id, payload).await?;

    match page {
        Some(page) => Ok((StatusCode::OK, Json(page.into_dto()))),
        None => Err(AppError::NotFound("Page not found".to_string())),
    }
}

pub async fn delete_page(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let service = PageService::new(&state.db);

    let deleted = service.delete(id).await?;

    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Ok(StatusCode::NOT_FOUND)
    }
}
