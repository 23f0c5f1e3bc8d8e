//! Custom query-string extractor that returns errors as JSON

use axum::{
    extract::{FromRequestParts, Query as AxumQuery},
    http::request::Parts,
};
use serde::de::DeserializeOwned;

use super::error::ApiError;

/// Query extractor whose rejections use the API error format.
///
/// A missing required parameter is reported with its name in `param`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Query<T>(pub T);

impl<T> Query<T> {
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T> std::ops::Deref for Query<T> {
    type Target = T;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<S, T> FromRequestParts<S> for Query<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        match AxumQuery::<T>::from_request_parts(parts, state).await {
            Ok(AxumQuery(value)) => Ok(Query(value)),
            Err(rejection) => {
                let detail = rejection.body_text();
                let mut err = ApiError::bad_request(format!("Ongeldige queryparameters: {}", detail))
                    .with_code("query_parse_error");

                if let Some(field) = missing_field(&detail) {
                    err = ApiError::bad_request(format!("Queryparameter '{}' is verplicht", field))
                        .with_param(field)
                        .with_code("missing_parameter");
                }

                Err(err)
            }
        }
    }
}

/// Pull the field name out of serde's "missing field `name`" message
fn missing_field(message: &str) -> Option<&str> {
    let rest = message.split("missing field `").nth(1)?;
    rest.split('`').next().filter(|s| !s.is_empty())
}
