//! Authentication primitives: submitted credentials and the signed-in user.
//!
//! Inbound adapters build [`LoginCredentials`] from form fields and hand them
//! to a [`crate::domain::ports::CredentialStore`]; on success the session
//! records a [`Username`].

use std::fmt;

use zeroize::Zeroizing;

/// Reasons a sign-in submission is rejected before any lookup happens.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LoginValidationError {
    /// Username was missing.
    #[error("username must not be empty")]
    EmptyUsername,
    /// Password was missing.
    #[error("password must not be empty")]
    EmptyPassword,
}

/// Name of an authenticated user as stored in the session.
///
/// ## Invariants
/// - Non-empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Username(String);

impl Username {
    /// Wrap a raw username, rejecting empty input.
    pub fn new(raw: impl Into<String>) -> Result<Self, LoginValidationError> {
        let raw = raw.into();
        if raw.is_empty() {
            return Err(LoginValidationError::EmptyUsername);
        }
        Ok(Self(raw))
    }

    /// Borrow the username.
    #[must_use]
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl AsRef<str> for Username {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for Username {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Sign-in form values.
///
/// ## Invariants
/// - `username` and `password` are non-empty. Neither is trimmed: the
///   credential file is matched exactly.
/// - The password buffer is wiped on drop.
///
/// # Examples
/// ```
/// use cms::domain::LoginCredentials;
///
/// let creds = LoginCredentials::try_from_parts("admin", "secret").unwrap();
/// assert_eq!(creds.username().as_str(), "admin");
/// assert_eq!(creds.password(), "secret");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginCredentials {
    username: Username,
    password: Zeroizing<String>,
}

impl LoginCredentials {
    /// Construct credentials from raw form inputs.
    pub fn try_from_parts(username: &str, password: &str) -> Result<Self, LoginValidationError> {
        let username = Username::new(username)?;
        if password.is_empty() {
            return Err(LoginValidationError::EmptyPassword);
        }
        Ok(Self {
            username,
            password: Zeroizing::new(password.to_owned()),
        })
    }

    /// Submitted username.
    #[must_use]
    pub fn username(&self) -> &Username {
        &self.username
    }

    /// Submitted plaintext password.
    #[must_use]
    pub fn password(&self) -> &str {
        self.password.as_str()
    }
}
