//! Login and registration request types.
//!
//! Validation mirrors what the account screens enforce before calling the
//! backend: fields present, and the registration password typed the same
//! way twice. Tokens and sessions are entirely server-side concerns.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Message shown when a login field is left empty.
pub const MISSING_CREDENTIALS_MESSAGE: &str = "Please fill details! Fields can't be empty";

/// Message shown when a registration field is left empty.
pub const MISSING_REGISTRATION_FIELDS_MESSAGE: &str = "Please fill in all fields";

/// Message shown when the registration passwords differ.
pub const PASSWORD_MISMATCH_MESSAGE: &str = "Passwords do not match";

/// Request body for `POST /api/login`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

/// Request body for `POST /api/register`.
///
/// The confirmation field is checked locally and never reaches the wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Registration {
    pub email: String,
    pub password: String,
    #[serde(skip_serializing, default)]
    pub confirm_password: String,
}

/// Validate login credentials: both fields must be present.
pub fn validate_credentials(credentials: &Credentials) -> Result<(), CoreError> {
    if credentials.email.is_empty() || credentials.password.is_empty() {
        return Err(CoreError::Validation(
            MISSING_CREDENTIALS_MESSAGE.to_string(),
        ));
    }
    Ok(())
}

/// Validate a registration: every field present, passwords matching.
pub fn validate_registration(registration: &Registration) -> Result<(), CoreError> {
    if registration.email.is_empty()
        || registration.password.is_empty()
        || registration.confirm_password.is_empty()
    {
        return Err(CoreError::Validation(
            MISSING_REGISTRATION_FIELDS_MESSAGE.to_string(),
        ));
    }
    if registration.password != registration.confirm_password {
        return Err(CoreError::Validation(PASSWORD_MISMATCH_MESSAGE.to_string()));
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    fn registration(email: &str, password: &str, confirm: &str) -> Registration {
        Registration {
            email: email.into(),
            password: password.into(),
            confirm_password: confirm.into(),
        }
    }

    #[test]
    fn complete_credentials_pass() {
        let creds = Credentials {
            email: "user@example.com".into(),
            password: "hunter2".into(),
        };
        assert!(validate_credentials(&creds).is_ok());
    }

    #[test]
    fn empty_credential_fields_are_rejected() {
        let creds = Credentials {
            email: String::new(),
            password: "hunter2".into(),
        };
        assert_matches!(
            validate_credentials(&creds),
            Err(CoreError::Validation(msg)) if msg == MISSING_CREDENTIALS_MESSAGE
        );

        let creds = Credentials {
            email: "user@example.com".into(),
            password: String::new(),
        };
        assert!(validate_credentials(&creds).is_err());
    }

    #[test]
    fn complete_registration_passes() {
        let reg = registration("user@example.com", "hunter2", "hunter2");
        assert!(validate_registration(&reg).is_ok());
    }

    #[test]
    fn registration_requires_every_field() {
        for reg in [
            registration("", "hunter2", "hunter2"),
            registration("user@example.com", "", "hunter2"),
            registration("user@example.com", "hunter2", ""),
        ] {
            assert_matches!(
                validate_registration(&reg),
                Err(CoreError::Validation(msg)) if msg == MISSING_REGISTRATION_FIELDS_MESSAGE
            );
        }
    }

    #[test]
    fn mismatched_passwords_are_rejected() {
        let reg = registration("user@example.com", "hunter2", "hunter3");
        assert_matches!(
            validate_registration(&reg),
            Err(CoreError::Validation(msg)) if msg == PASSWORD_MISMATCH_MESSAGE
        );
    }

    #[test]
    fn confirmation_never_serializes() {
        let reg = registration("user@example.com", "hunter2", "hunter2");
        let json = serde_json::to_value(&reg).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "email": "user@example.com",
                "password": "hunter2",
            })
        );
    }
}
