use sea_orm::DatabaseConnection;

use crate::server::{
    data::user::UserRepository,
    error::AppError,
    model::{
        user::{str_to_role, UpdateProfileParams, User},
        Page,
    },
};

pub struct UserService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<User>, AppError> {
        let repo = UserRepository::new(self.db);

        Ok(repo.find_by_id(id).await?)
    }

    pub async fn update_profile(
        &self,
        id: i32,
        params: UpdateProfileParams,
    ) -> Result<Option<User>, AppError> {
        let repo = UserRepository::new(self.db);

        Ok(repo.update_profile(id, params).await?)
    }

    /// Admin: paginated user listing with optional search.
    pub async fn get_paginated(
        &self,
        page: u64,
        limit: u64,
        search: Option<&str>,
    ) -> Result<Page<User>, AppError> {
        let repo = UserRepository::new(self.db);

        let (items, total) = repo
            .get_all_paginated(page.saturating_sub(1), limit, search)
            .await?;

        Ok(Page::new(items, total, page, limit))
    }

    /// Admin: changes an account's role.
    pub async fn set_role(&self, id: i32, role: &str) -> Result<bool, AppError> {
        let repo = UserRepository::new(self.db);

        let role = str_to_role(role)
            .ok_or_else(|| AppError::BadRequest(format!("Unknown role '{}'", role)))?;

        Ok(repo.set_role(id, role).await?)
    }

    /// Admin: activates or deactivates an account.
    pub async fn set_active(&self, id: i32, is_active: bool) -> Result<bool, AppError> {
        let repo = UserRepository::new(self.db);

        Ok(repo.set_active(id, is_active).await?)
    }
}
