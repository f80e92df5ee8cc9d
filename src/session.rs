//! Session
//!
//! Sign-in lives outside this app. The auth flow stores the signed-in
//! user in localStorage; we only read the token back out and hand it to
//! the API client.

use std::fmt;

use serde::Deserialize;
use tracing::warn;

/// Opaque token sent verbatim in the `Authorization` header
#[derive(Clone, PartialEq, Eq)]
pub struct AuthToken(String);

impl AuthToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for AuthToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AuthToken(***)")
    }
}

#[derive(Deserialize)]
struct StoredUser {
    token: String,
}

/// Parse the stored user record; blank tokens count as signed out.
pub fn parse_session(raw: &str) -> Option<AuthToken> {
    match serde_json::from_str::<StoredUser>(raw) {
        Ok(user) if !user.token.trim().is_empty() => Some(AuthToken::new(user.token)),
        Ok(_) => None,
        Err(e) => {
            warn!("Ignoring malformed session record: {e}");
            None
        }
    }
}

/// Token of the signed-in user, if any
pub fn load_session(key: &str) -> Option<AuthToken> {
    let storage = web_sys::window()?.local_storage().ok()??;
    let raw = storage.get_item(key).ok()??;
    parse_session(&raw)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_session() {
        let token = parse_session(r#"{"token":"abc123","email":"a@b.c"}"#);
        assert_eq!(token, Some(AuthToken::new("abc123")));
    }

    #[test]
    fn test_parse_session_rejects_blank_and_garbage() {
        assert_eq!(parse_session(r#"{"token":"  "}"#), None);
        assert_eq!(parse_session("not json"), None);
        assert_eq!(parse_session(r#"{"email":"a@b.c"}"#), None);
    }

    #[test]
    fn test_debug_hides_token() {
        assert_eq!(format!("{:?}", AuthToken::new("secret")), "AuthToken(***)");
    }
}
