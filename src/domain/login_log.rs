//! Login/logout event rows.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Append-only login event; `logout_time` is filled once on logout.
#[derive(Debug, Clone, PartialEq)]
pub struct LoginLog {
    pub log_id: i32,
    pub user_id: i32,
    pub login_time: DateTime<Utc>,
    pub logout_time: Option<DateTime<Utc>>,
}

impl LoginLog {
    pub fn close(&mut self, now: DateTime<Utc>) {
        self.logout_time = Some(now);
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewLoginLog {
    pub user_id: i32,
    pub login_time: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct LoginLogResponse {
    pub log_id: i32,
    pub user_id: i32,
    pub login_time: DateTime<Utc>,
    pub logout_time: Option<DateTime<Utc>>,
}

impl From<LoginLog> for LoginLogResponse {
    fn from(log: LoginLog) -> Self {
        Self {
            log_id: log.log_id,
            user_id: log.user_id,
            login_time: log.login_time,
            logout_time: log.logout_time,
        }
    }
}
