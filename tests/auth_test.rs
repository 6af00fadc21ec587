//! Login/logout flow against a real (in-memory) database.

mod common;

use axum::http::StatusCode;
use sea_orm::EntityTrait;

use invoai_api::domain::{CreateUser, LoginRequest};
use invoai_api::infra::repositories::entities::LoginLogEntity;
use invoai_api::types::{Outcome, OutcomeExt};

async fn seed_user(
    services: &dyn invoai_api::services::ServiceContainer,
    name: &str,
    password: &str,
    bio_id: i32,
) -> i32 {
    services
        .users()
        .create_user(CreateUser {
            user_name: name.to_string(),
            bio_id: Some(bio_id),
            password: password.to_string(),
            created_by: None,
        })
        .await
        .unwrap()
        .into_data()
        .user_id
}

fn login(name: &str, password: &str) -> LoginRequest {
    LoginRequest {
        user_name: name.to_string(),
        password: password.to_string(),
    }
}

#[tokio::test]
async fn test_login_records_exactly_one_log_row() {
    let db = common::setup_db().await;
    let services = common::services(&db);
    let user_id = seed_user(services.as_ref(), "jdoe", "CorrectHorse1", 501).await;

    let outcome = services.auth().login(login("jdoe", "CorrectHorse1")).await;

    assert!(outcome.success());
    assert_eq!(outcome.message(), "Login successful");
    let response = outcome.unwrap().into_data();
    assert_eq!(response.bio_id, Some(501));

    let rows = LoginLogEntity::find().all(&db).await.unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].user_id, user_id);
    assert_eq!(rows[0].login_time, response.login_time);
    assert!(rows[0].logout_time.is_none());
}

#[tokio::test]
async fn test_wrong_password_leaves_log_empty() {
    let db = common::setup_db().await;
    let services = common::services(&db);
    seed_user(services.as_ref(), "jdoe", "CorrectHorse1", 501).await;

    let wrong = services.auth().login(login("jdoe", "WrongHorse1")).await;
    let unknown = services.auth().login(login("nobody", "CorrectHorse1")).await;

    for outcome in [&wrong, &unknown] {
        assert_eq!(outcome.code(), StatusCode::UNAUTHORIZED);
        assert_eq!(outcome.message(), "Invalid username or password");
    }
    assert!(LoginLogEntity::find().all(&db).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_shared_user_name_logs_in_matching_account() {
    let db = common::setup_db().await;
    let services = common::services(&db);
    seed_user(services.as_ref(), "shared", "FirstSecret1", 1).await;
    let second = seed_user(services.as_ref(), "shared", "SecondSecret2", 2).await;

    let outcome = services.auth().login(login("shared", "SecondSecret2")).await;
    assert_eq!(outcome.data().and_then(|r| r.bio_id), Some(2));

    let rows = LoginLogEntity::find().all(&db).await.unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].user_id, second);
}

#[tokio::test]
async fn test_logout_closes_session_and_history_lists_it() {
    let db = common::setup_db().await;
    let services = common::services(&db);
    let user_id = seed_user(services.as_ref(), "jdoe", "CorrectHorse1", 501).await;

    services
        .auth()
        .login(login("jdoe", "CorrectHorse1"))
        .await
        .unwrap();

    let logout = services.auth().logout(user_id).await;
    assert_eq!(logout.message(), "Logout successful");
    assert!(logout.data().and_then(|l| l.logout_time).is_some());

    let again: Outcome<_> = services.auth().logout(user_id).await;
    assert_eq!(again.code(), StatusCode::NOT_FOUND);

    let history = services.auth().login_history(user_id).await.unwrap().into_data();
    assert_eq!(history.len(), 1);
    assert!(history[0].logout_time.is_some());
}

#[tokio::test]
async fn test_deleted_user_cannot_log_in() {
    let db = common::setup_db().await;
    let services = common::services(&db);
    let user_id = seed_user(services.as_ref(), "jdoe", "CorrectHorse1", 501).await;

    services.users().delete_user(user_id).await.unwrap();
    let outcome = services.auth().login(login("jdoe", "CorrectHorse1")).await;

    assert_eq!(outcome.code(), StatusCode::UNAUTHORIZED);
}
