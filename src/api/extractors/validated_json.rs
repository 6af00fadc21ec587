//! Request body extractor: deserialize, then validate.

use axum::{
    async_trait,
    extract::{rejection::JsonRejection, FromRequest, Request},
    Json,
};
use serde::de::DeserializeOwned;
use validator::Validate;

use crate::errors::AppError;

/// JSON body that has passed its `validator` constraints.
///
/// Malformed JSON, wrong field types and constraint violations all reject
/// with a 422 failure envelope.
pub struct ValidatedJson<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Validate,
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|e| AppError::validation(e.body_text()))?;

        value
            .validate()
            .map_err(|e| AppError::validation(format_validation_errors(&e)))?;

        Ok(ValidatedJson(value))
    }
}

/// One `field: message` entry per violated constraint, sorted by field.
fn format_validation_errors(errors: &validator::ValidationErrors) -> String {
    let mut fields: Vec<_> = errors.field_errors().into_iter().collect();
    fields.sort_by(|a, b| a.0.cmp(&b.0));

    fields
        .into_iter()
        .flat_map(|(field, errs)| {
            errs.iter().map(move |e| match &e.message {
                Some(message) => format!("{}: {}", field, message),
                None => format!("{}: invalid value ({})", field, e.code),
            })
        })
        .collect::<Vec<_>>()
        .join("; ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{CreateUser, CreateVendor};

    #[test]
    fn test_messages_are_prefixed_and_sorted_by_field() {
        let input = CreateUser {
            user_name: String::new(),
            bio_id: None,
            password: "short".to_string(),
            created_by: None,
        };

        let errors = input.validate().unwrap_err();
        assert_eq!(
            format_validation_errors(&errors),
            "password: Password must be at least 8 characters; \
             user_name: User name must be 1 to 25 characters"
        );
    }

    #[test]
    fn test_over_long_vendor_name_is_reported() {
        let input = CreateVendor {
            vendor_name: "v".repeat(101),
            created_by: None,
        };

        let message = format_validation_errors(&input.validate().unwrap_err());
        assert!(message.starts_with("vendor_name: "));
    }
}
