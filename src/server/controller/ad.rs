use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use tower_sessions::Session;

use crate::{
    model::ad::{CreateAdDto, UpdateAdDto},
    server::{
        controller::PaginationParams,
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        service::ad::AdService,
        state::AppState,
    },
};

#[derive(Deserialize)]
pub struct AdQuery {
    pub ad_type: Option<String>,
    pub position: Option<String>,
}

/// Active ads for reading pages, optionally narrowed by type and placement
/// slot.
pub async fn list_active_ads(
    State(state): State<AppState>,
    Query(params): Query<AdQuery>,
) -> Result<impl IntoResponse, AppError> {
    let service = AdService::new(&state.db);

    let ads = service
        .get_active(params.ad_type.as_deref(), params.position.as_deref())
        .await?;

    Ok((
        StatusCode::OK,
        Json(ads.into_iter().map(|a| a.into_dto()).collect::<Vec<_>>()),
    ))
}

/// Admin: paginated listing of all ads, inactive included.
pub async fn list_ads_admin(
    State(state): State<AppState>,
    session: Session,
    Query(params): Query<PaginationParams>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let (page, limit) = params.clamped();

    let service = AdService::new(&state.db);

    let ads = service.get_paginated(page, limit).await?;

    Ok((StatusCode::OK, Json(ads.into_dto(|a| a.into_dto()))))
}

pub async fn create_ad(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<CreateAdDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let service = AdService::new(&state.db);

    let ad = service.create(payload).await?;

    Ok((StatusCode::CREATED, Json(ad.into_dto())))
}

pub async fn update_ad(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateAdDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let service = AdService::new(&state.db);

    let ad = service.update(id, payload).await?;

    match ad {
        Some(ad) => Ok((StatusCode::OK, Json(ad.into_dto()))),
        None => Err(AppError::NotFound("Ad not found".to_string())),
    }
}

pub async fn delete_ad(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let service = AdService::new(&state.db);

    let deleted = service.delete(id).await?;

    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Ok(StatusCode::NOT_FOUND)
    }
}
