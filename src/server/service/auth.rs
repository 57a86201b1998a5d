//! Local (email/password) authentication.

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use rand::RngCore;
use sea_orm::DatabaseConnection;

use crate::{
    model::auth::RegisterDto,
    server::{
        data::user::UserRepository,
        error::{auth::AuthError, AppError},
        model::user::{CreateUserParams, User},
        service::email::EmailService,
    },
};

pub struct AuthService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AuthService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Registers a local account and sends the verification email.
    ///
    /// The email send is best-effort: registration succeeds even when the
    /// notification cannot be delivered.
    pub async fn register(
        &self,
        dto: RegisterDto,
        mailer: &EmailService,
    ) -> Result<User, AppError> {
        let repo = UserRepository::new(self.db);

        let email = dto.email.trim().to_lowercase();
        let username = dto.username.trim().to_string();

        if !email.contains('@') {
            return Err(AppError::BadRequest("Invalid email address".to_string()));
        }
        if username.len() < 3 {
            return Err(AppError::BadRequest(
                "Username must be at least 3 characters".to_string(),
            ));
        }
        if dto.password.len() < 8 {
            return Err(AppError::BadRequest(
                "Password must be at least 8 characters".to_string(),
            ));
        }

        if repo.email_exists(&email).await? {
            return Err(AuthError::AlreadyRegistered("Email").into());
        }
        if repo.username_exists(&username).await? {
            return Err(AuthError::AlreadyRegistered("Username").into());
        }

        let password_hash = hash_password(&dto.password)?;
        let token = generate_token();

        let entity = repo
            .create(CreateUserParams {
                email,
                username,
                password_hash,
                display_name: dto.display_name,
                role: entity::user::UserRole::User,
                email_verified: false,
                verification_token: Some(token.clone()),
            })
            .await?;

        let user = User::from_entity(entity);

        mailer
            .send_verification(&user.email, user.public_name(), &token)
            .await;

        Ok(user)
    }

    /// Checks credentials and returns the account for session establishment.
    pub async fn login(&self, email: &str, password: &str) -> Result<User, AppError> {
        let repo = UserRepository::new(self.db);

        let Some(entity) = repo.find_entity_by_email(email.trim().to_lowercase().as_str()).await?
        else {
            return Err(AuthError::InvalidCredentials.into());
        };

        // OAuth accounts have no password hash and cannot log in locally.
        let Some(stored_hash) = entity.password_hash.clone() else {
            return Err(AuthError::InvalidCredentials.into());
        };

        verify_password(password, &stored_hash)?;

        if !entity.is_active {
            return Err(AuthError::AccountDisabled.into());
        }

        Ok(User::from_entity(entity))
    }

    /// Redeems a verification token, marking the email as confirmed and
    /// sending the welcome mail.
    pub async fn verify_email(&self, token: &str, mailer: &EmailService) -> Result<User, AppError> {
        let repo = UserRepository::new(self.db);

        let Some(entity) = repo.find_entity_by_verification_token(token).await? else {
            return Err(AuthError::InvalidVerificationToken.into());
        };

        repo.mark_email_verified(entity.id).await?;

        let user = User::from_entity(entity);

        mailer.send_welcome(&user.email, user.public_name()).await;

        Ok(user)
    }
}

pub fn hash_password(password: &str) -> Result<String, AppError> {
    let salt = SaltString::generate(&mut OsRng);

    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| AppError::InternalError(format!("Failed to hash password: {}", e)))
}

fn verify_password(password: &str, stored_hash: &str) -> Result<(), AppError> {
    let parsed = PasswordHash::new(stored_hash)
        .map_err(|e| AppError::InternalError(format!("Stored password hash is invalid: {}", e)))?;

    Argon2::default()
        .verify_password(password.as_bytes(), &parsed)
        .map_err(|_| AuthError::InvalidCredentials.into())
}

/// Random 64-character hex token for email verification links.
fn generate_token() -> String {
    let mut bytes = [0u8; 32];
    rand::rng().fill_bytes(&mut bytes);

    bytes.iter().map(|b| format!("{:02x}", b)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_utils::builder::TestBuilder;

    fn mailer() -> EmailService {
        EmailService::console("https://hungyeu.example")
    }

    fn register_dto(email: &str, username: &str) -> RegisterDto {
        RegisterDto {
            email: email.to_string(),
            username: username.to_string(),
            password: "mật-khẩu-dài".to_string(),
            display_name: None,
        }
    }

    /// Registration must succeed even though no SMTP transport is
    /// configured; the verification mail is logged instead.
    #[tokio::test]
    async fn registration_survives_unconfigured_mailer() {
        let test = TestBuilder::new()
            .with_table(entity::prelude::User)
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let service = AuthService::new(db);
        let user = service
            .register(register_dto("moi@example.com", "nguoimoi"), &mailer())
            .await
            .unwrap();

        assert_eq!(user.email, "moi@example.com");
        assert!(!user.email_verified);
    }

    #[tokio::test]
    async fn register_then_login_roundtrip() {
        let test = TestBuilder::new()
            .with_table(entity::prelude::User)
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let service = AuthService::new(db);
        service
            .register(register_dto("login@example.com", "login-user"), &mailer())
            .await
            .unwrap();

        let user = service.login("login@example.com", "mật-khẩu-dài").await.unwrap();
        assert_eq!(user.username, "login-user");

        let wrong = service.login("login@example.com", "sai").await;
        assert!(matches!(
            wrong,
            Err(AppError::AuthErr(AuthError::InvalidCredentials))
        ));
    }

    #[tokio::test]
    async fn duplicate_registration_conflicts() {
        let test = TestBuilder::new()
            .with_table(entity::prelude::User)
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let service = AuthService::new(db);
        service
            .register(register_dto("dup@example.com", "dup"), &mailer())
            .await
            .unwrap();

        let same_email = service
            .register(register_dto("dup@example.com", "khac"), &mailer())
            .await;
        assert!(matches!(
            same_email,
            Err(AppError::AuthErr(AuthError::AlreadyRegistered("Email")))
        ));

        let same_username = service
            .register(register_dto("khac@example.com", "dup"), &mailer())
            .await;
        assert!(same_username.is_err());
    }

    #[tokio::test]
    async fn verification_token_roundtrip() {
        let test = TestBuilder::new()
            .with_table(entity::prelude::User)
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let service = AuthService::new(db);
        service
            .register(register_dto("verify@example.com", "verify"), &mailer())
            .await
            .unwrap();

        let repo = UserRepository::new(db);
        let stored = repo
            .find_entity_by_email("verify@example.com")
            .await
            .unwrap()
            .unwrap();
        let token = stored.verification_token.unwrap();

        let verified = service.verify_email(&token, &mailer()).await.unwrap();
        assert_eq!(verified.email, "verify@example.com");

        // The token is one-shot.
        let replay = service.verify_email(&token, &mailer()).await;
        assert!(matches!(
            replay,
            Err(AppError::AuthErr(AuthError::InvalidVerificationToken))
        ));
    }

    #[test]
    fn password_roundtrip() {
        let hash = hash_password("mật-khẩu-bí-mật").unwrap();

        assert!(verify_password("mật-khẩu-bí-mật", &hash).is_ok());
        assert!(verify_password("sai-mật-khẩu", &hash).is_err());
    }

    #[test]
    fn tokens_are_hex_and_unique() {
        let a = generate_token();
        let b = generate_token();

        assert_eq!(a.len(), 64);
        assert!(a.chars().all(|c| c.is_ascii_hexdigit()));
        assert_ne!(a, b);
    }
}
