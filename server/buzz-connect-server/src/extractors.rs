//! Request extractors

use std::convert::Infallible;

use axum::{async_trait, extract::FromRequestParts, http::request::Parts};
use url::form_urlencoded;

/// Query string extractor that never rejects
///
/// Pairs are percent-decoded and handed to `T` in order, so a repeated key
/// resolves however `T` folds them (last value wins for the types in this
/// crate). Unknown keys are left to `T` to ignore.
///
/// Usage:
/// ```rust,ignore
/// pub async fn handler(LenientQuery(params): LenientQuery<MyParams>) { }
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct LenientQuery<T>(pub T);

#[async_trait]
impl<T, S> FromRequestParts<S> for LenientQuery<T>
where
    T: FromIterator<(String, String)>,
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let query = parts.uri.query().unwrap_or_default();
        let value = form_urlencoded::parse(query.as_bytes())
            .into_owned()
            .collect();

        Ok(LenientQuery(value))
    }
}
