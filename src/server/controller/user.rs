use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::user::UpdateProfileDto,
    server::{
        error::AppError,
        middleware::auth::AuthGuard,
        model::user::UpdateProfileParams,
        service::user::UserService,
        state::AppState,
    },
};

/// GET /api/authors/{id} - Public author profile shown on story pages.
///
/// Deactivated accounts are hidden.
pub async fn get_author_profile(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let service = UserService::new(&state.db);

    let user = service.get_by_id(id).await?;

    match user {
        Some(user) if user.is_active => Ok((StatusCode::OK, Json(user.into_author_dto()))),
        _ => Err(AppError::NotFound("Author not found".to_string())),
    }
}

/// PUT /api/users/me - Update the authenticated user's profile.
pub async fn update_own_profile(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<UpdateProfileDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let service = UserService::new(&state.db);

    let updated = service
        .update_profile(user.id, UpdateProfileParams::from_dto(payload))
        .await?;

    match updated {
        Some(updated) => Ok((StatusCode::OK, Json(updated.into_dto()))),
        None => Err(AppError::NotFound("User not found".to_string())),
    }
}
