//! Authorization extractor for the delete route.
//!
//! The shared secret is a static string compared by equality against the
//! `secret_key` query parameter. It is a placeholder credential, not a
//! security mechanism. Keeping the check behind an extractor means route
//! logic never touches the comparison, so the credential scheme can be
//! replaced later without rewriting handlers.

use std::sync::Arc;

use axum::extract::{FromRequestParts, Query};
use axum::http::request::Parts;
use serde::Deserialize;

use crate::error::ApiError;
use crate::state::AppState;

/// Proof that the caller presented the correct shared secret.
#[derive(Debug, Clone)]
pub struct DeleteAuth;

#[derive(Debug, Deserialize)]
struct SecretQuery {
    #[serde(default)]
    secret_key: Option<String>,
}

impl FromRequestParts<Arc<AppState>> for DeleteAuth {
    type Rejection = ApiError;

    fn from_request_parts<'life0, 'life1, 'async_trait>(
        parts: &'life0 mut Parts,
        state: &'life1 Arc<AppState>,
    ) -> ::core::pin::Pin<
        Box<
            dyn ::core::future::Future<Output = Result<Self, Self::Rejection>>
                + ::core::marker::Send
                + 'async_trait,
        >,
    >
    where
        'life0: 'async_trait,
        'life1: 'async_trait,
        Self: 'async_trait,
    {
        Box::pin(async move {
            // An absent or unreadable query string is the same failure as a
            // wrong key: the caller did not present the secret.
            let Query(query) = Query::<SecretQuery>::try_from_uri(&parts.uri)
                .map_err(|_| ApiError::Forbidden)?;

            match query.secret_key {
                Some(ref key) if *key == state.config.secret_key => Ok(DeleteAuth),
                _ => Err(ApiError::Forbidden),
            }
        })
    }
}
