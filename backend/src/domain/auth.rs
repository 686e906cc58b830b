//! Credential primitives shared by registration and login.
//!
//! Inbound adapters hand raw strings to [`Credentials::try_from_parts`]; the
//! domain never sees untrimmed input.

use std::fmt;

use zeroize::Zeroizing;

/// Validation failure for an email/password pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CredentialsValidationError {
    /// Email was missing or blank once trimmed.
    EmptyEmail,
    /// Password was missing or blank once trimmed.
    EmptyPassword,
}

impl fmt::Display for CredentialsValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyEmail => write!(f, "email must not be empty"),
            Self::EmptyPassword => write!(f, "password must not be empty"),
        }
    }
}

impl std::error::Error for CredentialsValidationError {}

/// Trimmed, non-empty email and password.
///
/// ## Invariants
/// - `email` is trimmed and non-empty; case is kept as entered.
/// - `password` is trimmed and non-empty; the buffer is zeroed on drop.
///
/// # Examples
/// ```
/// use jobstream::domain::Credentials;
///
/// let creds = Credentials::try_from_parts(" a@x.com ", " secret123 ").unwrap();
/// assert_eq!(creds.email(), "a@x.com");
/// assert_eq!(creds.password(), "secret123");
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    email: String,
    password: Zeroizing<String>,
}

impl Credentials {
    /// Trim and validate raw inputs.
    pub fn try_from_parts(email: &str, password: &str) -> Result<Self, CredentialsValidationError> {
        let email = email.trim();
        if email.is_empty() {
            return Err(CredentialsValidationError::EmptyEmail);
        }

        let password = password.trim();
        if password.is_empty() {
            return Err(CredentialsValidationError::EmptyPassword);
        }

        Ok(Self {
            email: email.to_owned(),
            password: Zeroizing::new(password.to_owned()),
        })
    }

    /// Email used for exact-match lookups.
    #[must_use]
    pub fn email(&self) -> &str {
        self.email.as_str()
    }

    /// Plaintext password.
    #[must_use]
    pub fn password(&self) -> &str {
        self.password.as_str()
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("", "pw", CredentialsValidationError::EmptyEmail)]
    #[case("   ", "pw", CredentialsValidationError::EmptyEmail)]
    #[case("a@x.com", "", CredentialsValidationError::EmptyPassword)]
    #[case("a@x.com", " \t ", CredentialsValidationError::EmptyPassword)]
    fn blank_inputs_are_rejected(
        #[case] email: &str,
        #[case] password: &str,
        #[case] expected: CredentialsValidationError,
    ) {
        let err = Credentials::try_from_parts(email, password).expect_err("blank input");
        assert_eq!(err, expected);
    }

    #[rstest]
    #[case("  A@X.com  ", "secret123", "A@X.com", "secret123")]
    #[case("a@x.com", "  padded  ", "a@x.com", "padded")]
    fn inputs_are_trimmed_but_case_is_kept(
        #[case] email: &str,
        #[case] password: &str,
        #[case] expected_email: &str,
        #[case] expected_password: &str,
    ) {
        let creds = Credentials::try_from_parts(email, password).expect("valid input");
        assert_eq!(creds.email(), expected_email);
        assert_eq!(creds.password(), expected_password);
    }

    #[rstest]
    fn debug_output_hides_password() {
        let creds = Credentials::try_from_parts("a@x.com", "hunter2").expect("valid input");
        let rendered = format!("{creds:?}");
        assert!(!rendered.contains("hunter2"));
    }
}
