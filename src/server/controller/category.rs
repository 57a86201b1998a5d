use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        category::{CategoryDto, CategoryListItemDto, CreateCategoryDto, UpdateCategoryDto},
    },
    server::{
        controller::PaginationParams,
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        service::category::CategoryService,
        state::AppState,
    },
};

/// Tag for grouping category endpoints in OpenAPI documentation
pub static CATEGORY_TAG: &str = "category";

/// List all categories.
///
/// Public endpoint feeding the navigation menu; not paginated because the
/// category set is small and bounded.
#[utoipa::path(
    get,
    path = "/api/categories",
    tag = CATEGORY_TAG,
    responses(
        (status = 200, description = "All categories ordered by name", body = Vec<CategoryDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_categories(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let service = CategoryService::new(&state.db);

    let categories = service.get_all().await?;

    Ok((
        StatusCode::OK,
        Json(
            categories
                .into_iter()
                .map(|c| c.into_dto())
                .collect::<Vec<_>>(),
        ),
    ))
}

/// Paginated categories with story counts for the admin screen.
///
/// # Access Control
/// - `Admin` - Only admins can list categories with counts
#[utoipa::path(
    get,
    path = "/api/admin/categories",
    tag = CATEGORY_TAG,
    params(
        ("page" = Option<u64>, Query, description = "Page number, 1-indexed (default: 1)"),
        ("limit" = Option<u64>, Query, description = "Items per page (default: 20, max: 100)")
    ),
    responses(
        (status = 200, description = "Paginated categories with story counts", body = crate::model::api::Paginated<CategoryListItemDto>),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_categories_admin(
    State(state): State<AppState>,
    session: Session,
    Query(params): Query<PaginationParams>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let (page, limit) = params.clamped();

    let service = CategoryService::new(&state.db);

    let categories = service.get_paginated(page, limit).await?;

    Ok((StatusCode::OK, Json(categories.into_dto(|c| c.into_dto()))))
}

/// Create a category.
///
/// # Access Control
/// - `Admin` - Only admins can create categories
#[utoipa::path(
    post,
    path = "/api/admin/categories",
    tag = CATEGORY_TAG,
    request_body = CreateCategoryDto,
    responses(
        (status = 201, description = "Category created", body = CategoryDto),
        (status = 400, description = "Invalid category data", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 409, description = "Name already in use", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_category(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<CreateCategoryDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let service = CategoryService::new(&state.db);

    let category = service.create(payload).await?;

    Ok((StatusCode::CREATED, Json(category.into_dto())))
}

/// Update a category. A changed name re-derives the slug.
///
/// # Access Control
/// - `Admin` - Only admins can update categories
pub async fn update_category(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateCategoryDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let service = CategoryService::new(&state.db);

    let category = service.update(id, payload).await?;

    match category {
        Some(category) => Ok((StatusCode::OK, Json(category.into_dto()))),
        None => Err(AppError::NotFound("Category not found".to_string())),
    }
}

/// Delete a category. Story associations cascade.
///
/// # Access Control
/// - `Admin` - Only admins can delete categories
pub async fn delete_category(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let service = CategoryService::new(&state.db);

    let deleted = service.delete(id).await?;

    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Ok(StatusCode::NOT_FOUND)
    }
}
