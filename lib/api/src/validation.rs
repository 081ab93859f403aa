//! Form validation performed before any request is sent.
//!
//! Each form holds the raw text the user typed. `validate` turns it into the
//! typed request body or reports the first problem found, so a form that
//! fails validation never reaches the network.

use ballotbox_core::Result;
use serde::Serialize;
use std::fmt;

/// Minimum length of a new password, in characters.
pub const MINIMUM_PASSWORD_LEN: usize = 6;

/// Number of digits in an Aadhaar number.
pub const AADHAAR_DIGITS: usize = 12;

/// A form that cannot be submitted as typed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// A required field is blank.
    MissingField { field: &'static str },
    /// Password and confirmation differ.
    PasswordMismatch,
    /// The Aadhaar number is not exactly twelve digits.
    InvalidAadhaar,
    /// The age is not a whole number.
    InvalidAge { value: String },
    /// The new password is too short.
    PasswordTooShort,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingField { field } => write!(f, "{field} is required"),
            Self::PasswordMismatch => f.write_str("Passwords don't match!"),
            Self::InvalidAadhaar => f.write_str("Aadhar must be 12 digits"),
            Self::InvalidAge { .. } => f.write_str("Age must be a number"),
            Self::PasswordTooShort => write!(
                f,
                "New password must be at least {MINIMUM_PASSWORD_LEN} characters long."
            ),
        }
    }
}

impl std::error::Error for ValidationError {}

fn required(value: &str, field: &'static str) -> Result<String, ValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::MissingField { field }.into());
    }
    Ok(trimmed.to_string())
}

fn whole_number(value: &str) -> Result<u32, ValidationError> {
    let trimmed = value.trim();
    trimmed.parse::<u32>().map_err(|_| {
        ValidationError::InvalidAge {
            value: trimmed.to_string(),
        }
        .into()
    })
}

fn aadhaar(value: &str) -> Result<String, ValidationError> {
    let trimmed = value.trim();
    if trimmed.len() != AADHAAR_DIGITS || !trimmed.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ValidationError::InvalidAadhaar.into());
    }
    Ok(trimmed.to_string())
}

/// Raw voter registration form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SignupForm {
    pub name: String,
    pub age: String,
    pub address: String,
    pub email: String,
    pub mobile: String,
    pub aadhar_card_number: String,
    pub password: String,
    pub confirm_password: String,
}

/// Registration request body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Registration {
    pub name: String,
    pub age: u32,
    pub address: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mobile: Option<String>,
    pub aadhar_card_number: String,
    pub password: String,
}

impl SignupForm {
    /// Checks the form in the order the user sees problems reported:
    /// password confirmation first, then the Aadhaar number, then age.
    pub fn validate(&self) -> Result<Registration, ValidationError> {
        if self.password != self.confirm_password {
            return Err(ValidationError::PasswordMismatch.into());
        }
        let aadhar_card_number = aadhaar(&self.aadhar_card_number)?;
        let age = whole_number(&self.age)?;
        let name = required(&self.name, "Name")?;
        let address = required(&self.address, "Address")?;
        if self.password.is_empty() {
            return Err(ValidationError::MissingField { field: "Password" }.into());
        }

        let optional = |value: &str| Some(value.trim().to_string()).filter(|v| !v.is_empty());
        Ok(Registration {
            name,
            age,
            address,
            email: optional(&self.email),
            mobile: optional(&self.mobile),
            aadhar_card_number,
            password: self.password.clone(),
        })
    }
}

/// Raw login form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoginForm {
    pub aadhar_card_number: String,
    pub password: String,
}

/// Login request body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    pub aadhar_card_number: String,
    pub password: String,
}

impl LoginForm {
    /// Requires both fields. The Aadhaar format is left to the remote
    /// service so that its own message is shown.
    pub fn validate(&self) -> Result<LoginRequest, ValidationError> {
        let aadhar_card_number = required(&self.aadhar_card_number, "Aadhar number")?;
        if self.password.is_empty() {
            return Err(ValidationError::MissingField { field: "Password" }.into());
        }
        Ok(LoginRequest {
            aadhar_card_number,
            password: self.password.clone(),
        })
    }
}

/// Raw password change form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PasswordChangeForm {
    pub current_password: String,
    pub new_password: String,
}

/// Password change request body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PasswordChange {
    pub current_password: String,
    pub new_password: String,
}

impl PasswordChangeForm {
    pub fn validate(&self) -> Result<PasswordChange, ValidationError> {
        if self.new_password.chars().count() < MINIMUM_PASSWORD_LEN {
            return Err(ValidationError::PasswordTooShort.into());
        }
        if self.current_password.is_empty() {
            return Err(ValidationError::MissingField {
                field: "Current password",
            }
            .into());
        }
        Ok(PasswordChange {
            current_password: self.current_password.clone(),
            new_password: self.new_password.clone(),
        })
    }
}

/// Raw candidate form, shared by the add and update views.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CandidateForm {
    pub name: String,
    pub party: String,
    pub age: String,
}

/// Candidate request body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CandidateDraft {
    pub name: String,
    pub party: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub age: Option<u32>,
}

impl CandidateForm {
    /// Validates a new candidate; age is required.
    pub fn validate_new(&self) -> Result<CandidateDraft, ValidationError> {
        let name = required(&self.name, "Name")?;
        let party = required(&self.party, "Party")?;
        let age = whole_number(&self.age)?;
        Ok(CandidateDraft {
            name,
            party,
            age: Some(age),
        })
    }

    /// Validates an update; a blank age leaves the stored age unchanged.
    pub fn validate_update(&self) -> Result<CandidateDraft, ValidationError> {
        let name = required(&self.name, "Name")?;
        let party = required(&self.party, "Party")?;
        let age = if self.age.trim().is_empty() {
            None
        } else {
            Some(whole_number(&self.age)?)
        };
        Ok(CandidateDraft { name, party, age })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn signup() -> SignupForm {
        SignupForm {
            name: "Asha Rao".to_string(),
            age: "30".to_string(),
            address: "12 MG Road, Pune".to_string(),
            email: String::new(),
            mobile: "9876543210".to_string(),
            aadhar_card_number: "123456789012".to_string(),
            password: "secret1".to_string(),
            confirm_password: "secret1".to_string(),
        }
    }

    fn reason<T: fmt::Debug>(result: Result<T, ValidationError>) -> ValidationError {
        result.expect_err("should be invalid").current_context().clone()
    }

    #[test]
    fn valid_signup_builds_registration() {
        let registration = signup().validate().expect("should be valid");
        assert_eq!(registration.age, 30);
        assert_eq!(registration.email, None);
        assert_eq!(registration.mobile.as_deref(), Some("9876543210"));

        let body = serde_json::to_value(&registration).expect("should serialize");
        assert_eq!(body["aadharCardNumber"], "123456789012");
        assert_eq!(body["age"], 30);
        assert!(body.get("confirmPassword").is_none());
        assert!(body.get("email").is_none());
    }

    #[test]
    fn mismatched_passwords_are_reported_first() {
        let form = SignupForm {
            confirm_password: "other".to_string(),
            aadhar_card_number: "12".to_string(),
            ..signup()
        };
        let err = reason(form.validate());
        assert_eq!(err, ValidationError::PasswordMismatch);
        assert_eq!(err.to_string(), "Passwords don't match!");
    }

    #[test]
    fn aadhaar_must_be_twelve_digits() {
        for bad in ["12345678901", "1234567890123", "12345678901a", ""] {
            let form = SignupForm {
                aadhar_card_number: bad.to_string(),
                ..signup()
            };
            let err = reason(form.validate());
            assert_eq!(err, ValidationError::InvalidAadhaar, "{bad:?}");
            assert_eq!(err.to_string(), "Aadhar must be 12 digits");
        }
    }

    #[test]
    fn age_must_be_numeric() {
        let form = SignupForm {
            age: "thirty".to_string(),
            ..signup()
        };
        assert!(matches!(
            reason(form.validate()),
            ValidationError::InvalidAge { .. }
        ));

        // Eligibility is the remote service's decision.
        let form = SignupForm {
            age: "17".to_string(),
            ..signup()
        };
        assert_eq!(form.validate().expect("should be valid").age, 17);
    }

    #[test]
    fn login_requires_both_fields() {
        let form = LoginForm {
            aadhar_card_number: "  ".to_string(),
            password: "x".to_string(),
        };
        assert!(matches!(
            reason(form.validate()),
            ValidationError::MissingField { .. }
        ));

        let request = LoginForm {
            aadhar_card_number: "123456789012".to_string(),
            password: "x".to_string(),
        }
        .validate()
        .expect("should be valid");
        let body = serde_json::to_value(&request).expect("should serialize");
        assert_eq!(body["aadharCardNumber"], "123456789012");
    }

    #[test]
    fn new_password_needs_six_characters() {
        let form = PasswordChangeForm {
            current_password: "old".to_string(),
            new_password: "12345".to_string(),
        };
        let err = reason(form.validate());
        assert_eq!(
            err.to_string(),
            "New password must be at least 6 characters long."
        );

        let change = PasswordChangeForm {
            current_password: "old".to_string(),
            new_password: "123456".to_string(),
        }
        .validate()
        .expect("should be valid");
        let body = serde_json::to_value(&change).expect("should serialize");
        assert_eq!(body["currentPassword"], "old");
        assert_eq!(body["newPassword"], "123456");
    }

    #[test]
    fn new_candidate_requires_age() {
        let form = CandidateForm {
            name: "Ravi".to_string(),
            party: "Green".to_string(),
            age: String::new(),
        };
        assert!(matches!(
            reason(form.validate_new()),
            ValidationError::InvalidAge { .. }
        ));
        let draft = form.validate_update().expect("blank age is fine on update");
        assert_eq!(draft.age, None);
    }

    #[test]
    fn candidate_requires_name_and_party() {
        let form = CandidateForm {
            name: "Ravi".to_string(),
            party: " ".to_string(),
            age: "40".to_string(),
        };
        assert_eq!(
            reason(form.validate_new()),
            ValidationError::MissingField { field: "Party" }
        );
    }
}
