//! HTTP request handlers.
//!
//! Controllers validate access with `AuthGuard`, convert DTOs to parameter
//! models, call the matching service, and convert domain models back to DTOs
//! for the response.

pub mod ad;
pub mod admin;
pub mod auth;
pub mod category;
pub mod chapter;
pub mod comment;
pub mod page;
pub mod story;
pub mod user;

use sea_orm::DatabaseConnection;
use serde::Deserialize;
use tower_sessions::Session;

use crate::server::{
    data::user::UserRepository, error::AppError, middleware::session::AuthSession,
    model::user::User,
};

/// Page cap keeping a single request from dragging the whole table along.
const MAX_PAGE_SIZE: u64 = 100;

#[derive(Deserialize)]
pub struct PaginationParams {
    #[serde(default = "default_page")]
    pub page: u64,
    #[serde(default = "default_limit")]
    pub limit: u64,
}

fn default_page() -> u64 {
    1
}

fn default_limit() -> u64 {
    20
}

impl PaginationParams {
    /// Normalizes the raw query values: `page` is 1-indexed and `limit` is
    /// clamped to a sane range.
    pub fn clamped(&self) -> (u64, u64) {
        let page = self.page.max(1);
        let limit = self.limit.clamp(1, MAX_PAGE_SIZE);
        (page, limit)
    }
}

/// Resolves the session to a user without requiring one.
///
/// Used by public endpoints whose responses widen for owners and admins
/// (e.g. unpublished chapters in a story the viewer wrote).
pub(crate) async fn optional_user(
    db: &DatabaseConnection,
    session: &Session,
) -> Result<Option<User>, AppError> {
    let Some(user_id) = AuthSession::new(session).get_user_id().await? else {
        return Ok(None);
    };

    UserRepository::new(db)
        .find_by_id(user_id)
        .await
        .map_err(Into::into)
}
