//! Authentication service - login, logout and login history.
//!
//! User names are not unique, so login verifies the password against every
//! active candidate and accepts the first match. Argon2 work runs on the
//! blocking pool.

use async_trait::async_trait;
use axum::http::StatusCode;
use std::sync::Arc;

#[cfg(test)]
use mockall::automock;

use crate::domain::{LoginLogResponse, LoginRequest, LoginResponse, NewLoginLog, Password, User};
use crate::errors::AppError;
use crate::infra::{LoginLogRepository, UserRepository};
use crate::types::{Done, Outcome};
use crate::utils::clock;

/// Authentication service trait for dependency injection.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait AuthService: Send + Sync {
    /// Verify credentials and record a login event.
    ///
    /// Any mismatch yields the same 401 whether the name or the password
    /// was wrong.
    async fn login(&self, input: LoginRequest) -> Outcome<LoginResponse>;

    /// Stamp the logout time on the user's latest open session.
    async fn logout(&self, user_id: i32) -> Outcome<LoginLogResponse>;

    /// Login events of an active user, newest first.
    async fn login_history(&self, user_id: i32) -> Outcome<Vec<LoginLogResponse>>;
}

/// Concrete implementation of AuthService.
pub struct Authenticator {
    users: Arc<dyn UserRepository>,
    logs: Arc<dyn LoginLogRepository>,
}

impl Authenticator {
    pub fn new(users: Arc<dyn UserRepository>, logs: Arc<dyn LoginLogRepository>) -> Self {
        Self { users, logs }
    }
}

#[async_trait]
impl AuthService for Authenticator {
    async fn login(&self, input: LoginRequest) -> Outcome<LoginResponse> {
        let candidates = self
            .users
            .get_by_user_name(input.user_name.clone())
            .await?
            .into_data();

        let password = input.password;
        let matched = tokio::task::spawn_blocking(move || {
            if candidates.is_empty() {
                // Same cost as a real verification so unknown names are not observable
                Password::simulate_verify(&password);
                return None;
            }
            candidates.into_iter().filter(User::is_active).find(|user| {
                Password::from_hash(user.password_hash.clone()).verify(&password)
            })
        })
        .await
        .map_err(|e| AppError::internal(format!("Password verification task failed: {}", e)))?;

        let Some(user) = matched else {
            tracing::warn!("Login rejected: invalid credentials");
            return Err(AppError::InvalidCredentials);
        };

        let login_time = clock::now();
        self.logs
            .create(NewLoginLog {
                user_id: user.user_id,
                login_time,
            })
            .await?;

        tracing::info!(user_id = user.user_id, "Login successful");

        Ok(Done::with(
            LoginResponse {
                bio_id: user.bio_id,
                user_name: user.user_name,
                login_time,
            },
            "Login successful",
            StatusCode::OK,
        ))
    }

    async fn logout(&self, user_id: i32) -> Outcome<LoginLogResponse> {
        let mut session = self.logs.get_open_session(user_id).await?.into_data();
        session.close(clock::now());

        let session = self.logs.update(session).await?.into_data();
        tracing::info!(user_id, "Logout recorded");

        Ok(Done::with(
            LoginLogResponse::from(session),
            "Logout successful",
            StatusCode::OK,
        ))
    }

    async fn login_history(&self, user_id: i32) -> Outcome<Vec<LoginLogResponse>> {
        self.users.get_by_id(user_id).await?;
        let logs = self.logs.get_by_user(user_id).await?.into_data();

        Ok(Done::with(
            logs.into_iter().map(LoginLogResponse::from).collect(),
            "Login history fetched successfully",
            StatusCode::OK,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{RECORD_ACTIVE, RECORD_DELETED};
    use crate::domain::LoginLog;
    use crate::infra::{MockLoginLogRepository, MockUserRepository};
    use crate::types::OutcomeExt;

    fn user(id: i32, password: &str) -> User {
        User {
            user_id: id,
            bio_id: Some(id * 100),
            user_name: "shared".to_string(),
            password_hash: Password::new(password).unwrap().into_string(),
            created_by: None,
            created_at: clock::now(),
            updated_by: None,
            updated_at: None,
            is_deleted: RECORD_ACTIVE,
        }
    }

    fn request(password: &str) -> LoginRequest {
        LoginRequest {
            user_name: "shared".to_string(),
            password: password.to_string(),
        }
    }

    #[tokio::test]
    async fn test_login_matches_second_candidate() {
        let mut users = MockUserRepository::new();
        users.expect_get_by_user_name().returning(|_| {
            Ok(Done::ok(vec![user(1, "FirstPass1"), user(2, "SecondPass2")]))
        });
        let mut logs = MockLoginLogRepository::new();
        logs.expect_create()
            .withf(|log| log.user_id == 2)
            .times(1)
            .returning(|log| {
                Ok(Done::ok(LoginLog {
                    log_id: 1,
                    user_id: log.user_id,
                    login_time: log.login_time,
                    logout_time: None,
                }))
            });

        let service = Authenticator::new(Arc::new(users), Arc::new(logs));
        let outcome = service.login(request("SecondPass2")).await;

        assert_eq!(outcome.message(), "Login successful");
        assert_eq!(outcome.data().and_then(|r| r.bio_id), Some(200));
    }

    #[tokio::test]
    async fn test_wrong_password_writes_no_log() {
        let mut users = MockUserRepository::new();
        users
            .expect_get_by_user_name()
            .returning(|_| Ok(Done::ok(vec![user(1, "RightPass1")])));
        let mut logs = MockLoginLogRepository::new();
        logs.expect_create().times(0);

        let service = Authenticator::new(Arc::new(users), Arc::new(logs));
        let outcome = service.login(request("WrongPass1")).await;

        assert_eq!(outcome.code(), StatusCode::UNAUTHORIZED);
        assert_eq!(outcome.message(), "Invalid username or password");
        assert!(outcome.data().is_none());
    }

    #[tokio::test]
    async fn test_unknown_user_gets_same_rejection() {
        let mut users = MockUserRepository::new();
        users
            .expect_get_by_user_name()
            .returning(|_| Ok(Done::ok(Vec::new())));
        let mut logs = MockLoginLogRepository::new();
        logs.expect_create().times(0);

        let service = Authenticator::new(Arc::new(users), Arc::new(logs));
        let outcome = service.login(request("Whatever1")).await;

        assert_eq!(outcome.code(), StatusCode::UNAUTHORIZED);
        assert_eq!(outcome.message(), "Invalid username or password");
    }

    #[tokio::test]
    async fn test_deleted_candidate_never_matches() {
        let mut users = MockUserRepository::new();
        users.expect_get_by_user_name().returning(|_| {
            let mut deleted = user(1, "RightPass1");
            deleted.is_deleted = RECORD_DELETED;
            Ok(Done::ok(vec![deleted]))
        });
        let mut logs = MockLoginLogRepository::new();
        logs.expect_create().times(0);

        let service = Authenticator::new(Arc::new(users), Arc::new(logs));
        let outcome = service.login(request("RightPass1")).await;

        assert_eq!(outcome.code(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn test_concurrent_logins_verify_off_the_runtime() {
        let mut users = MockUserRepository::new();
        users.expect_get_by_user_name().returning(|_| {
            Ok(Done::ok(vec![
                user(1, "FirstPass1"),
                user(3, "ThirdPass3"),
            ]))
        });
        let mut logs = MockLoginLogRepository::new();
        logs.expect_create().times(3).returning(|log| {
            Ok(Done::ok(LoginLog {
                log_id: 1,
                user_id: log.user_id,
                login_time: log.login_time,
                logout_time: None,
            }))
        });

        let service = Arc::new(Authenticator::new(Arc::new(users), Arc::new(logs)));
        let handles: Vec<_> = (0..3)
            .map(|_| {
                let service = Arc::clone(&service);
                tokio::spawn(async move { service.login(request("ThirdPass3")).await })
            })
            .collect();

        for handle in handles {
            let outcome = handle.await.unwrap();
            assert_eq!(outcome.data().and_then(|r| r.bio_id), Some(300));
        }
    }

    #[tokio::test]
    async fn test_failed_log_write_fails_login() {
        let mut users = MockUserRepository::new();
        users
            .expect_get_by_user_name()
            .returning(|_| Ok(Done::ok(vec![user(1, "RightPass1")])));
        let mut logs = MockLoginLogRepository::new();
        logs.expect_create().returning(|_| {
            Err(AppError::database(
                "Database error while creating login session",
                sea_orm::DbErr::Custom("disk full".to_string()),
            ))
        });

        let service = Authenticator::new(Arc::new(users), Arc::new(logs));
        let outcome = service.login(request("RightPass1")).await;

        assert_eq!(outcome.code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert!(!outcome.message().contains("disk full"));
    }

    #[tokio::test]
    async fn test_logout_without_session_is_404() {
        let users = MockUserRepository::new();
        let mut logs = MockLoginLogRepository::new();
        logs.expect_get_open_session()
            .returning(|_| Err(AppError::not_found("Login session")));
        logs.expect_update().times(0);

        let service = Authenticator::new(Arc::new(users), Arc::new(logs));
        let outcome = service.logout(1).await;

        assert_eq!(outcome.code(), StatusCode::NOT_FOUND);
        assert_eq!(outcome.message(), "Login session not found");
    }
}
