use serde::{Deserialize, Serialize};

/// Clerk session-token claims.
///
/// `sub` is the Clerk user ID (an opaque `user_...` string, not a UUID).
/// Email and name are custom claims added through the instance's session
/// token template, so all of them are optional here.
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    /// The Clerk user ID.
    pub sub: String,
    /// Token expiration (Unix timestamp).
    pub exp: usize,
    /// Token issued-at (Unix timestamp).
    pub iat: Option<usize>,
    /// Issuer — the Clerk frontend API URL.
    pub iss: Option<String>,
    /// Authorized party (the browser origin the token was minted for).
    pub azp: Option<String>,
    pub email: Option<String>,
    pub name: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

impl Claims {
    /// The external identity reference we key `users.clerk_id` on.
    pub fn clerk_id(&self) -> &str {
        &self.sub
    }

    pub fn user_email(&self) -> Option<String> {
        self.email.clone()
    }

    /// Best-effort display name: prefer the full `name` claim, fall back to
    /// first + last.
    pub fn display_name(&self) -> Option<String> {
        if let Some(name) = &self.name {
            return Some(name.clone());
        }
        match (&self.first_name, &self.last_name) {
            (Some(first), Some(last)) => Some(format!("{first} {last}")),
            (Some(first), None) => Some(first.clone()),
            (None, Some(last)) => Some(last.clone()),
            (None, None) => None,
        }
    }
}
