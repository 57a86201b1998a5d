use entity::user::UserRole;
use test_utils::{builder::TestBuilder, factory};

use crate::server::{
    error::{auth::AuthError, AppError},
    middleware::{
        auth::{AuthGuard, Permission},
        session::AuthSession,
    },
};

mod require_admin;
mod require_author;
mod session_resolution;
