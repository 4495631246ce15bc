//! Per-step input validation

use thiserror::Error;

use super::state::{FormValues, Step, WizardState};
use crate::constants::MIN_PASSWORD_LENGTH;

/// Why a step can't be left yet. `Display` is the message shown to the user.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Please select a language and a timezone.")]
    LocaleMissing,

    #[error("Please select a disk to install to.")]
    NoDiskSelected,

    #[error("Please fill in all required fields.")]
    MissingFields,

    #[error("Passwords do not match.")]
    PasswordMismatch,

    #[error("Password must be at least {} characters long.", MIN_PASSWORD_LENGTH)]
    PasswordTooShort,
}

impl ValidationError {
    /// Account errors interrupt with a dialog; the others only show a hint
    pub fn is_blocking(&self) -> bool {
        matches!(
            self,
            ValidationError::MissingFields
                | ValidationError::PasswordMismatch
                | ValidationError::PasswordTooShort
        )
    }
}

/// Check whether the given step may be left going forward
pub fn validate(
    step: Step,
    state: &WizardState,
    form: &FormValues,
) -> Result<(), ValidationError> {
    match step {
        Step::Locale => {
            if form.language.is_empty() || form.timezone.is_empty() {
                return Err(ValidationError::LocaleMissing);
            }
            Ok(())
        }
        Step::Disk => {
            if state.selected_disk.is_none() {
                return Err(ValidationError::NoDiskSelected);
            }
            Ok(())
        }
        Step::User => validate_account(&form.username, &form.password, &form.password_confirm),
        _ => Ok(()),
    }
}

/// Validate the account fields, reporting the first problem found
pub fn validate_account(
    username: &str,
    password: &str,
    confirm: &str,
) -> Result<(), ValidationError> {
    if username.is_empty() || password.is_empty() {
        return Err(ValidationError::MissingFields);
    }
    if password != confirm {
        return Err(ValidationError::PasswordMismatch);
    }
    if password.chars().count() < MIN_PASSWORD_LENGTH {
        return Err(ValidationError::PasswordTooShort);
    }
    Ok(())
}
