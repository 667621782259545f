use std::sync::Arc;

use anyhow::anyhow;
use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng},
};
use crates::domain::{
    entities::{
        super_admins::{InsertSuperAdminEntity, SuperAdminEntity},
        users::{InsertUserEntity, UserEntity},
    },
    repositories::{
        mailer::TransactionalMailer, super_admins::SuperAdminRepository, users::UserRepository,
    },
    value_objects::{
        custom_ids::generate_referral_code,
        enums::user_statuses::UserStatus,
        registrations::{LoginModel, RegisterSuperAdminModel, RegisterUserModel},
    },
};
use thiserror::Error;
use tracing::{error, info, warn};
use uuid::Uuid;

use crate::auth::{ROLE_ADMIN, ROLE_USER, TokenPair, issue_token_pair, validate_refresh_token};
use crate::config::config_model::ZeptoMail;

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("Email or phone number already exists")]
    EmailOrPhoneExists,
    #[error("Invalid email or password")]
    InvalidCredentials,
    #[error("User not found")]
    UserNotFound,
    #[error("User is already verified")]
    AlreadyVerified,
    #[error("Invalid refresh token")]
    InvalidRefreshToken,
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl AuthError {
    pub fn status_code(&self) -> axum::http::StatusCode {
        use axum::http::StatusCode;
        match self {
            AuthError::EmailOrPhoneExists => StatusCode::CONFLICT,
            AuthError::InvalidCredentials => StatusCode::UNAUTHORIZED,
            AuthError::UserNotFound => StatusCode::NOT_FOUND,
            AuthError::AlreadyVerified => StatusCode::BAD_REQUEST,
            AuthError::InvalidRefreshToken => StatusCode::UNAUTHORIZED,
            AuthError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

pub type UseCaseResult<T> = std::result::Result<T, AuthError>;

pub struct AuthUseCase<U, A, M>
where
    U: UserRepository + Send + Sync + 'static,
    A: SuperAdminRepository + Send + Sync + 'static,
    M: TransactionalMailer + Send + Sync + 'static,
{
    user_repo: Arc<U>,
    super_admin_repo: Arc<A>,
    mailer: Arc<M>,
    mail_config: ZeptoMail,
}

impl<U, A, M> AuthUseCase<U, A, M>
where
    U: UserRepository + Send + Sync + 'static,
    A: SuperAdminRepository + Send + Sync + 'static,
    M: TransactionalMailer + Send + Sync + 'static,
{
    pub fn new(
        user_repo: Arc<U>,
        super_admin_repo: Arc<A>,
        mailer: Arc<M>,
        mail_config: ZeptoMail,
    ) -> Self {
        Self {
            user_repo,
            super_admin_repo,
            mailer,
            mail_config,
        }
    }

    pub async fn register_user(&self, model: RegisterUserModel) -> UseCaseResult<UserEntity> {
        let existing = self
            .user_repo
            .find_by_email_or_phone(&model.email, &model.phone_number)
            .await
            .map_err(|err| {
                error!(email = %model.email, db_error = ?err, "auth: uniqueness check failed");
                AuthError::Internal(err)
            })?;

        if existing.is_some() {
            let err = AuthError::EmailOrPhoneExists;
            warn!(
                email = %model.email,
                status = err.status_code().as_u16(),
                "auth: duplicate user registration"
            );
            return Err(err);
        }

        let referral_code = generate_referral_code(&model.first_name, &model.last_name)
            .map_err(AuthError::Internal)?;
        let password_hash = hash_password(&model.password)?;

        let user_id = self
            .user_repo
            .create(InsertUserEntity {
                first_name: model.first_name.clone(),
                last_name: model.last_name.clone(),
                email: model.email.clone(),
                phone_number: model.phone_number.clone(),
                password_hash,
                referral_code: referral_code.clone(),
                how_did_you_hear_about_us: model.how_did_you_hear_about_us.clone(),
                status: UserStatus::Unverified.to_string(),
            })
            .await
            .map_err(|err| {
                error!(email = %model.email, db_error = ?err, "auth: failed to create user");
                AuthError::Internal(err)
            })?;

        info!(%user_id, "auth: user registered");

        self.send_mail_best_effort(
            &self.mail_config.welcome_template,
            &model.email,
            &model.first_name,
            "✉️ Welcome To Solace!",
            serde_json::json!({ "firstName": model.first_name }),
        )
        .await;

        self.send_mail_best_effort(
            &self.mail_config.referral_code_template,
            &model.email,
            &model.first_name,
            "✉️ Your Solace Referral Code is Here!",
            serde_json::json!({
                "firstName": model.first_name,
                "referralCode": referral_code,
            }),
        )
        .await;

        self.user_repo
            .find_by_id(user_id)
            .await
            .map_err(AuthError::Internal)?
            .ok_or(AuthError::UserNotFound)
    }

    pub async fn login_user(&self, model: LoginModel) -> UseCaseResult<UserEntity> {
        let user = self
            .user_repo
            .find_by_email(&model.email)
            .await
            .map_err(|err| {
                error!(email = %model.email, db_error = ?err, "auth: user lookup failed");
                AuthError::Internal(err)
            })?
            .ok_or_else(|| {
                warn!(email = %model.email, "auth: login for unknown email");
                AuthError::InvalidCredentials
            })?;

        if !verify_password(&model.password, &user.password_hash) {
            warn!(email = %model.email, "auth: wrong password");
            return Err(AuthError::InvalidCredentials);
        }

        self.send_mail_best_effort(
            &self.mail_config.login_notification_template,
            &user.email,
            &user.first_name,
            "✉️ Solace Account Login Notification",
            serde_json::json!({ "firstName": user.first_name }),
        )
        .await;

        info!(user_id = %user.id, "auth: user logged in");
        Ok(user)
    }

    pub async fn register_super_admin(
        &self,
        model: RegisterSuperAdminModel,
    ) -> UseCaseResult<TokenPair> {
        let existing = self
            .super_admin_repo
            .find_by_email_or_phone(&model.email, &model.phone_number)
            .await
            .map_err(|err| {
                error!(email = %model.email, db_error = ?err, "auth: admin uniqueness check failed");
                AuthError::Internal(err)
            })?;

        if existing.is_some() {
            let err = AuthError::EmailOrPhoneExists;
            warn!(
                email = %model.email,
                status = err.status_code().as_u16(),
                "auth: duplicate super admin registration"
            );
            return Err(err);
        }

        let password_hash = hash_password(&model.password)?;

        let admin_id = self
            .super_admin_repo
            .create(InsertSuperAdminEntity {
                first_name: model.first_name.clone(),
                last_name: model.last_name,
                email: model.email.clone(),
                phone_number: model.phone_number,
                password_hash,
            })
            .await
            .map_err(|err| {
                error!(email = %model.email, db_error = ?err, "auth: failed to create super admin");
                AuthError::Internal(err)
            })?;

        info!(%admin_id, "auth: super admin registered");

        self.send_mail_best_effort(
            &self.mail_config.welcome_template,
            &model.email,
            &model.first_name,
            "✉️ Welcome To Solace!",
            serde_json::json!({ "firstName": model.first_name }),
        )
        .await;

        issue_token_pair(admin_id, ROLE_ADMIN).map_err(AuthError::Internal)
    }

    pub async fn login_super_admin(
        &self,
        model: LoginModel,
    ) -> UseCaseResult<(SuperAdminEntity, TokenPair)> {
        let admin = self
            .super_admin_repo
            .find_by_email(&model.email)
            .await
            .map_err(|err| {
                error!(email = %model.email, db_error = ?err, "auth: admin lookup failed");
                AuthError::Internal(err)
            })?
            .ok_or_else(|| {
                warn!(email = %model.email, "auth: admin login for unknown email");
                AuthError::InvalidCredentials
            })?;

        if !verify_password(&model.password, &admin.password_hash) {
            warn!(email = %model.email, "auth: wrong admin password");
            return Err(AuthError::InvalidCredentials);
        }

        let tokens = issue_token_pair(admin.id, ROLE_ADMIN).map_err(AuthError::Internal)?;

        self.send_mail_best_effort(
            &self.mail_config.login_notification_template,
            &admin.email,
            &admin.first_name,
            "✉️ Solace Account Login Notification",
            serde_json::json!({ "firstName": admin.first_name }),
        )
        .await;

        info!(admin_id = %admin.id, "auth: super admin logged in");
        Ok((admin, tokens))
    }

    /// Verifies the refresh token, confirms the account still exists, then
    /// rotates: a new access + refresh pair replaces the old one.
    pub async fn refresh_tokens(&self, refresh_token: &str) -> UseCaseResult<TokenPair> {
        let claims = validate_refresh_token(refresh_token).map_err(|_| {
            warn!("auth: refresh token rejected");
            AuthError::InvalidRefreshToken
        })?;

        let account_id =
            Uuid::parse_str(&claims.sub).map_err(|_| AuthError::InvalidRefreshToken)?;

        match claims.role.as_str() {
            ROLE_ADMIN => {
                self.super_admin_repo
                    .find_by_id(account_id)
                    .await
                    .map_err(AuthError::Internal)?
                    .ok_or(AuthError::UserNotFound)?;
            }
            ROLE_USER => {
                self.user_repo
                    .find_by_id(account_id)
                    .await
                    .map_err(AuthError::Internal)?
                    .ok_or(AuthError::UserNotFound)?;
            }
            other => {
                warn!(role = other, "auth: refresh token with unknown role");
                return Err(AuthError::InvalidRefreshToken);
            }
        }

        info!(%account_id, role = %claims.role, "auth: tokens rotated");
        issue_token_pair(account_id, &claims.role).map_err(AuthError::Internal)
    }

    pub async fn verify_user(&self, user_id: Uuid) -> UseCaseResult<UserEntity> {
        let user = self
            .user_repo
            .find_by_id(user_id)
            .await
            .map_err(AuthError::Internal)?
            .ok_or_else(|| {
                warn!(%user_id, "auth: verify requested for unknown user");
                AuthError::UserNotFound
            })?;

        if user.status == UserStatus::Verified.to_string() {
            let err = AuthError::AlreadyVerified;
            warn!(
                %user_id,
                status = err.status_code().as_u16(),
                "auth: user already verified"
            );
            return Err(err);
        }

        let updated = self
            .user_repo
            .mark_verified(user_id)
            .await
            .map_err(AuthError::Internal)?;
        if updated == 0 {
            // Lost the race against a concurrent verification.
            return Err(AuthError::AlreadyVerified);
        }

        info!(%user_id, "auth: user verified");

        self.send_mail_best_effort(
            &self.mail_config.welcome_template,
            &user.email,
            &user.first_name,
            "✅ Your Solace Account is Verified!",
            serde_json::json!({ "firstName": user.first_name }),
        )
        .await;

        self.user_repo
            .find_by_id(user_id)
            .await
            .map_err(AuthError::Internal)?
            .ok_or(AuthError::UserNotFound)
    }

    async fn send_mail_best_effort(
        &self,
        template_key: &str,
        to_address: &str,
        to_name: &str,
        subject: &str,
        merge_info: serde_json::Value,
    ) {
        if let Err(err) = self
            .mailer
            .send_template(template_key, to_address, to_name, subject, merge_info)
            .await
        {
            warn!(
                to = %to_address,
                template_key,
                error = ?err,
                "auth: notification email failed"
            );
        }
    }
}

fn hash_password(password: &str) -> UseCaseResult<String> {
    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|err| AuthError::Internal(anyhow!("failed to hash password: {}", err)))
}

fn verify_password(password: &str, stored_hash: &str) -> bool {
    let Ok(parsed) = PasswordHash::new(stored_hash) else {
        return false;
    };

    Argon2::default()
        .verify_password(password.as_bytes(), &parsed)
        .is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use crates::domain::repositories::{
        mailer::MockTransactionalMailer, super_admins::MockSuperAdminRepository,
        users::MockUserRepository,
    };

    fn mail_config() -> ZeptoMail {
        ZeptoMail {
            token: "token".to_string(),
            from_address: "noreply@example.com".to_string(),
            from_name: "Solace".to_string(),
            welcome_template: "welcome".to_string(),
            referral_code_template: "referral".to_string(),
            login_notification_template: "login".to_string(),
            caregiver_welcome_template: "caregiver".to_string(),
            subscription_template: "subscription".to_string(),
        }
    }

    fn set_jwt_env() {
        unsafe {
            std::env::set_var("JWT_SECRET", "accesssecretforunittesting1234567890");
            std::env::set_var("JWT_REFRESH_SECRET", "refreshsecretforunittesting1234567890");
        }
    }

    fn sample_user(password: &str) -> UserEntity {
        UserEntity {
            id: Uuid::new_v4(),
            first_name: "Ada".to_string(),
            last_name: "Obi".to_string(),
            email: "a@b.com".to_string(),
            phone_number: "08012345678".to_string(),
            password_hash: hash_password(password).unwrap(),
            referral_code: "AD1234OB".to_string(),
            how_did_you_hear_about_us: "Twitter".to_string(),
            status: UserStatus::Unverified.to_string(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn duplicate_registration_is_a_conflict() {
        let mut users = MockUserRepository::new();
        users
            .expect_find_by_email_or_phone()
            .returning(|_, _| Box::pin(async { Ok(Some(sample_user("pw"))) }));

        let usecase = AuthUseCase::new(
            Arc::new(users),
            Arc::new(MockSuperAdminRepository::new()),
            Arc::new(MockTransactionalMailer::new()),
            mail_config(),
        );

        let model: RegisterUserModel = serde_json::from_value(serde_json::json!({
            "firstName": "Ada",
            "lastName": "Obi",
            "email": "a@b.com",
            "phoneNumber": "08012345678",
            "password": "Sup3rSecret",
            "howDidYouHearAboutUs": "Twitter"
        }))
        .unwrap();

        let err = usecase.register_user(model).await.unwrap_err();
        assert_eq!(err.status_code(), axum::http::StatusCode::CONFLICT);
    }

    #[tokio::test]
    async fn login_rejects_a_wrong_password() {
        let mut users = MockUserRepository::new();
        users
            .expect_find_by_email()
            .returning(|_| Box::pin(async { Ok(Some(sample_user("right-password"))) }));

        let usecase = AuthUseCase::new(
            Arc::new(users),
            Arc::new(MockSuperAdminRepository::new()),
            Arc::new(MockTransactionalMailer::new()),
            mail_config(),
        );

        let err = usecase
            .login_user(LoginModel {
                email: "a@b.com".to_string(),
                password: "wrong-password".to_string(),
            })
            .await
            .unwrap_err();

        assert_eq!(err.status_code(), axum::http::StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn login_accepts_the_right_password_and_notifies() {
        let mut users = MockUserRepository::new();
        users
            .expect_find_by_email()
            .returning(|_| Box::pin(async { Ok(Some(sample_user("right-password"))) }));

        let mut mailer = MockTransactionalMailer::new();
        mailer
            .expect_send_template()
            .withf(|template, _, _, _, _| template == "login")
            .times(1)
            .returning(|_, _, _, _, _| Box::pin(async { Ok(()) }));

        let usecase = AuthUseCase::new(
            Arc::new(users),
            Arc::new(MockSuperAdminRepository::new()),
            Arc::new(mailer),
            mail_config(),
        );

        let user = usecase
            .login_user(LoginModel {
                email: "a@b.com".to_string(),
                password: "right-password".to_string(),
            })
            .await
            .unwrap();

        assert_eq!(user.email, "a@b.com");
    }

    #[tokio::test]
    async fn garbage_refresh_token_is_rejected() {
        set_jwt_env();

        let usecase = AuthUseCase::new(
            Arc::new(MockUserRepository::new()),
            Arc::new(MockSuperAdminRepository::new()),
            Arc::new(MockTransactionalMailer::new()),
            mail_config(),
        );

        let err = usecase.refresh_tokens("not.a.jwt").await.unwrap_err();
        assert_eq!(err.status_code(), axum::http::StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn refresh_rotates_for_an_existing_user() {
        set_jwt_env();

        let user = sample_user("pw");
        let user_id = user.id;

        let mut users = MockUserRepository::new();
        users
            .expect_find_by_id()
            .returning(move |_| {
                let user = user.clone();
                Box::pin(async move { Ok(Some(user)) })
            });

        let usecase = AuthUseCase::new(
            Arc::new(users),
            Arc::new(MockSuperAdminRepository::new()),
            Arc::new(MockTransactionalMailer::new()),
            mail_config(),
        );

        let pair = issue_token_pair(user_id, ROLE_USER).unwrap();
        let rotated = usecase.refresh_tokens(&pair.refresh_token).await.unwrap();

        let claims = validate_refresh_token(&rotated.refresh_token).unwrap();
        assert_eq!(claims.sub, user_id.to_string());
    }

    #[tokio::test]
    async fn verify_user_rejects_an_already_verified_account() {
        let mut verified = sample_user("pw");
        verified.status = UserStatus::Verified.to_string();

        let mut users = MockUserRepository::new();
        users.expect_find_by_id().returning(move |_| {
            let user = verified.clone();
            Box::pin(async move { Ok(Some(user)) })
        });

        let usecase = AuthUseCase::new(
            Arc::new(users),
            Arc::new(MockSuperAdminRepository::new()),
            Arc::new(MockTransactionalMailer::new()),
            mail_config(),
        );

        let err = usecase.verify_user(Uuid::new_v4()).await.unwrap_err();
        assert_eq!(err.status_code(), axum::http::StatusCode::BAD_REQUEST);
    }
}
