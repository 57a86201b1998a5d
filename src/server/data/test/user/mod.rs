use crate::server::{
    data::user::UserRepository,
    model::user::{CreateUserParams, OAuthUserParams},
};
use entity::user::{AuthProvider, UserRole};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod get_all_paginated;
mod mark_email_verified;
mod set_active;
mod upsert_oauth;

fn register_params(email: &str, username: &str) -> CreateUserParams {
    CreateUserParams {
        email: email.to_string(),
        username: username.to_string(),
        password_hash: "$argon2id$v=19$m=19456,t=2,p=1$c2FsdA$hash".to_string(),
        display_name: None,
        role: UserRole::User,
        email_verified: false,
        verification_token: Some("token123".to_string()),
    }
}
