//! Session claim resolution.
//!
//! The identity provider signs a JWT carrying the user id and the onboarding
//! flags. This module decodes it and checks expiry; provenance is the
//! provider's job and is trusted here. Every failure mode (missing token,
//! expired, malformed, bad signature) resolves to the anonymous state so the
//! policy's fail-closed path takes over.

use axum::http::{header, HeaderMap};
use jsonwebtoken::{decode, errors::ErrorKind, DecodingKey, Validation};
use serde::{Deserialize, Serialize};

use crate::policy::AuthState;

/// Payload of the session token issued by the auth service.
#[derive(Debug, Serialize, Deserialize)]
pub struct IdentityClaims {
    /// User id; absent on tokens issued to anonymous sessions.
    #[serde(default)]
    pub sub: Option<String>,

    /// Set when the account signs in for the first time; cleared on the
    /// token reissued after onboarding completes.
    #[serde(default)]
    pub first_login: bool,

    /// Written by the profile service when the onboarding flow finishes.
    #[serde(default)]
    pub onboarding_completed: bool,

    /// Expiration time (seconds since epoch).
    pub exp: usize,
}

impl AuthState {
    pub fn from_claims(claims: &IdentityClaims) -> Self {
        Self {
            is_authenticated: claims.sub.is_some(),
            needs_onboarding: claims.first_login,
        }
    }
}

/// Pull the session token from `Authorization: Bearer` or the session cookie.
fn extract_token<'a>(headers: &'a HeaderMap, cookie_name: &str) -> Option<&'a str> {
    if let Some(token) = headers
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
    {
        return Some(token);
    }

    headers
        .get(header::COOKIE)
        .and_then(|value| value.to_str().ok())
        .and_then(|cookies| {
            cookies.split(';').map(str::trim).find_map(|pair| {
                pair.strip_prefix(cookie_name)
                    .and_then(|rest| rest.strip_prefix('='))
            })
        })
}

/// Resolve the request's auth state from its headers.
pub fn resolve_auth_state(headers: &HeaderMap, cookie_name: &str, key: &DecodingKey) -> AuthState {
    let Some(token) = extract_token(headers, cookie_name) else {
        return AuthState::anonymous();
    };

    let mut validation = Validation::default();
    validation.validate_exp = true;

    match decode::<IdentityClaims>(token, key, &validation) {
        Ok(data) => AuthState::from_claims(&data.claims),
        Err(e) => {
            match e.kind() {
                ErrorKind::ExpiredSignature => tracing::debug!("Session token expired"),
                _ => tracing::debug!(error = %e, "Session token rejected"),
            }
            AuthState::anonymous()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;
    use jsonwebtoken::{encode, EncodingKey, Header};

    const SECRET: &str = "test-secret";

    fn token(claims: &IdentityClaims) -> String {
        let key = EncodingKey::from_secret(SECRET.as_bytes());
        encode(&Header::default(), claims, &key).unwrap()
    }

    fn far_future() -> usize {
        4_102_444_800 // 2100-01-01
    }

    fn decoding_key() -> DecodingKey {
        DecodingKey::from_secret(SECRET.as_bytes())
    }

    #[test]
    fn test_missing_token_is_anonymous() {
        let headers = HeaderMap::new();
        let state = resolve_auth_state(&headers, "session", &decoding_key());
        assert_eq!(state, AuthState::anonymous());
    }

    #[test]
    fn test_bearer_token_resolves_claims() {
        let jwt = token(&IdentityClaims {
            sub: Some("user-1".to_string()),
            first_login: true,
            onboarding_completed: false,
            exp: far_future(),
        });
        let mut headers = HeaderMap::new();
        headers.insert(
            header::AUTHORIZATION,
            HeaderValue::from_str(&format!("Bearer {jwt}")).unwrap(),
        );
        let state = resolve_auth_state(&headers, "session", &decoding_key());
        assert!(state.is_authenticated);
        assert!(state.needs_onboarding);
    }

    #[test]
    fn test_session_cookie_resolves_claims() {
        let jwt = token(&IdentityClaims {
            sub: Some("user-2".to_string()),
            first_login: false,
            onboarding_completed: true,
            exp: far_future(),
        });
        let mut headers = HeaderMap::new();
        headers.insert(
            header::COOKIE,
            HeaderValue::from_str(&format!("theme=dark; session={jwt}; lang=en")).unwrap(),
        );
        let state = resolve_auth_state(&headers, "session", &decoding_key());
        assert!(state.is_authenticated);
        assert!(!state.needs_onboarding);
    }

    #[test]
    fn test_expired_token_is_anonymous() {
        let jwt = token(&IdentityClaims {
            sub: Some("user-3".to_string()),
            first_login: false,
            onboarding_completed: true,
            exp: 1_000_000, // long past
        });
        let mut headers = HeaderMap::new();
        headers.insert(
            header::AUTHORIZATION,
            HeaderValue::from_str(&format!("Bearer {jwt}")).unwrap(),
        );
        let state = resolve_auth_state(&headers, "session", &decoding_key());
        assert_eq!(state, AuthState::anonymous());
    }

    #[test]
    fn test_garbage_token_is_anonymous() {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::AUTHORIZATION,
            HeaderValue::from_static("Bearer not-a-jwt"),
        );
        let state = resolve_auth_state(&headers, "session", &decoding_key());
        assert_eq!(state, AuthState::anonymous());
    }

    #[test]
    fn test_token_without_subject_is_anonymous() {
        let jwt = token(&IdentityClaims {
            sub: None,
            first_login: false,
            onboarding_completed: false,
            exp: far_future(),
        });
        let mut headers = HeaderMap::new();
        headers.insert(
            header::AUTHORIZATION,
            HeaderValue::from_str(&format!("Bearer {jwt}")).unwrap(),
        );
        let state = resolve_auth_state(&headers, "session", &decoding_key());
        assert!(!state.is_authenticated);
    }
}
