//! Session and sign-in primitives shared across the UI.
//!
//! # Design
//! - Keep the session as plain data so callers can persist/clear it without side effects.
//! - A persisted session is all-or-nothing: a missing or corrupt half reads as signed out.
//! - Leave header encoding to the transport client to keep core DOM-free.

use crate::core::config::AUTH_PATH_PREFIX;
use roster_api_models::{AuthResponse, LoginRequest, RegisterRequest};
use serde::{Deserialize, Serialize};

/// Signed-in user as shown in the header.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    /// Display name.
    pub name: String,
    /// Account email.
    pub email: String,
    /// Role label.
    pub role: String,
}

/// Bearer token plus the user it belongs to.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Session {
    /// Bearer token.
    pub token: String,
    /// Signed-in user.
    pub user: UserProfile,
}

impl From<AuthResponse> for Session {
    fn from(response: AuthResponse) -> Self {
        Self {
            token: response.token,
            user: UserProfile {
                name: response.name,
                email: response.email,
                role: response.role,
            },
        }
    }
}

impl Session {
    /// Rebuild a session from its persisted token and user JSON.
    #[must_use]
    pub fn restore(token: Option<String>, user_json: Option<String>) -> Option<Self> {
        let token = token.filter(|token| !token.trim().is_empty())?;
        let user = serde_json::from_str::<UserProfile>(user_json.as_deref()?).ok()?;
        Some(Self { token, user })
    }

    /// Header label, e.g. `Jane Admin (ADMIN)`.
    #[must_use]
    pub fn label(&self) -> String {
        format!("{} ({})", self.user.name, self.user.role)
    }
}

/// Whether `path` targets the auth endpoints.
#[must_use]
pub fn is_auth_path(path: &str) -> bool {
    path.starts_with(AUTH_PATH_PREFIX)
}

/// Login page mode.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AuthMode {
    /// Existing account.
    #[default]
    SignIn,
    /// New account.
    Register,
}

impl AuthMode {
    /// Card title.
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::SignIn => "Sign In",
            Self::Register => "Create Account",
        }
    }

    /// Submit button label.
    #[must_use]
    pub const fn submit_label(self) -> &'static str {
        match self {
            Self::SignIn => "Sign In",
            Self::Register => "Register",
        }
    }

    /// Prompt next to the mode switch.
    #[must_use]
    pub const fn switch_prompt(self) -> &'static str {
        match self {
            Self::SignIn => "Don't have an account?",
            Self::Register => "Already have an account?",
        }
    }

    /// The other mode.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::SignIn => Self::Register,
            Self::Register => Self::SignIn,
        }
    }
}

/// Login/register form fields.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LoginForm {
    /// Current mode.
    pub mode: AuthMode,
    /// Display name (register only).
    pub name: String,
    /// Account email.
    pub email: String,
    /// Account password.
    pub password: String,
}

/// Request a [`LoginForm`] submits.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AuthRequest {
    /// `POST /auth/login`.
    Login(LoginRequest),
    /// `POST /auth/register`.
    Register(RegisterRequest),
}

impl AuthRequest {
    /// Endpoint path.
    #[must_use]
    pub const fn path(&self) -> &'static str {
        match self {
            Self::Login(_) => "/auth/login",
            Self::Register(_) => "/auth/register",
        }
    }
}

impl LoginForm {
    /// Request for the current mode.
    #[must_use]
    pub fn request(&self) -> AuthRequest {
        let email = self.email.trim().to_string();
        match self.mode {
            AuthMode::SignIn => AuthRequest::Login(LoginRequest {
                email,
                password: self.password.clone(),
            }),
            AuthMode::Register => AuthRequest::Register(RegisterRequest {
                name: self.name.trim().to_string(),
                email,
                password: self.password.clone(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stored_user() -> String {
        r#"{"name":"Jane","email":"jane@test.com","role":"ADMIN"}"#.to_string()
    }

    #[test]
    fn restore_requires_both_halves() {
        assert!(Session::restore(None, Some(stored_user())).is_none());
        assert!(Session::restore(Some("tok".into()), None).is_none());
        assert!(Session::restore(Some("  ".into()), Some(stored_user())).is_none());
        assert!(Session::restore(Some("tok".into()), Some("{oops".into())).is_none());
        let session = Session::restore(Some("tok".into()), Some(stored_user())).unwrap();
        assert_eq!(session.label(), "Jane (ADMIN)");
    }

    #[test]
    fn auth_response_becomes_session() {
        let session = Session::from(AuthResponse {
            token: "abc".into(),
            name: "Jane".into(),
            email: "jane@test.com".into(),
            role: "ADMIN".into(),
        });
        assert_eq!(session.user.email, "jane@test.com");
        let json = serde_json::to_string(&session.user).unwrap();
        assert_eq!(
            Session::restore(Some("abc".into()), Some(json)),
            Some(session)
        );
    }

    #[test]
    fn auth_paths_are_recognised_by_prefix() {
        assert!(is_auth_path("/auth/login"));
        assert!(is_auth_path("/auth/register"));
        assert!(!is_auth_path("/students"));
        assert!(!is_auth_path("/authors"));
    }

    #[test]
    fn form_builds_request_for_mode() {
        let mut form = LoginForm {
            name: " Jane ".into(),
            email: " jane@test.com ".into(),
            password: "secret".into(),
            ..LoginForm::default()
        };
        let login = form.request();
        assert_eq!(login.path(), "/auth/login");
        assert_eq!(
            login,
            AuthRequest::Login(LoginRequest {
                email: "jane@test.com".into(),
                password: "secret".into()
            })
        );
        form.mode = form.mode.toggled();
        let AuthRequest::Register(register) = form.request() else {
            panic!("expected register");
        };
        assert_eq!(register.name, "Jane");
        assert_eq!(form.mode.title(), "Create Account");
    }
}
