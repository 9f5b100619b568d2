//! Record validation rules
//!
//! Field-level checks for candidate user records plus the password-strength
//! predicate. Rules are checked in field declaration order and every
//! violated field is reported, so callers can aggregate one combined
//! message instead of failing on the first hit.

use validator::ValidateEmail;

use crate::domain::{UserDraft, UserRole};

const MIN_NAME_LEN: usize = 5;
const MIN_ADDRESS_LEN: usize = 15;
const MIN_PHONE_DIGITS: usize = 9;

const PASSWORD_MIN_LEN: usize = 8;
const PASSWORD_MAX_LEN: usize = 15;
const PASSWORD_SYMBOLS: &str = "!@#$%^&*()_+-=[]{};':\"\\|,.<>/?";

/// Fixed message returned when a registration password fails the
/// strength predicate.
pub const PASSWORD_RULE: &str = "Password must be 8-15 characters and include an uppercase letter, \
     a lowercase letter, a digit and a special character";

/// A single violated rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldViolation {
    pub field: &'static str,
    pub message: &'static str,
}

/// Join violations into the single aggregated message callers report,
/// `"{field}: {message}"` entries separated by `"; "`.
pub fn aggregate(violations: &[FieldViolation]) -> String {
    violations
        .iter()
        .map(|v| format!("{}: {}", v.field, v.message))
        .collect::<Vec<_>>()
        .join("; ")
}

/// Field-rule checker for candidate user records.
///
/// Explicitly constructed and injected into the service rather than living
/// behind a global.
#[derive(Debug, Clone, Copy, Default)]
pub struct RecordValidator;

impl RecordValidator {
    pub fn new() -> Self {
        Self
    }

    /// Check a draft against the structural rules.
    ///
    /// Returns an empty vec when the record is fully valid; otherwise one
    /// violation per offending field, in declaration order.
    pub fn validate_record(&self, draft: &UserDraft) -> Vec<FieldViolation> {
        let mut violations = Vec::new();

        if draft.email.trim().is_empty() {
            violations.push(FieldViolation {
                field: "email",
                message: "Email is required",
            });
        } else if !draft.email.validate_email() {
            violations.push(FieldViolation {
                field: "email",
                message: "Email must have a valid format",
            });
        }

        if draft.password.trim().is_empty() {
            violations.push(FieldViolation {
                field: "password",
                message: "Password is required",
            });
        }

        if draft.first_name.trim().is_empty() {
            violations.push(FieldViolation {
                field: "first_name",
                message: "First name is required",
            });
        } else if draft.first_name.chars().count() < MIN_NAME_LEN {
            violations.push(FieldViolation {
                field: "first_name",
                message: "First name must be at least 5 characters",
            });
        }

        if draft.last_name.trim().is_empty() {
            violations.push(FieldViolation {
                field: "last_name",
                message: "Last name is required",
            });
        } else if draft.last_name.chars().count() < MIN_NAME_LEN {
            violations.push(FieldViolation {
                field: "last_name",
                message: "Last name must be at least 5 characters",
            });
        }

        if draft.role.trim().is_empty() {
            violations.push(FieldViolation {
                field: "role",
                message: "Role is required",
            });
        } else if !matches!(draft.role.as_str(), "admin" | "cliente") {
            violations.push(FieldViolation {
                field: "role",
                message: "Role must be 'admin' or 'cliente'",
            });
        }

        if let Some(address) = &draft.address {
            if address.chars().count() < MIN_ADDRESS_LEN {
                violations.push(FieldViolation {
                    field: "address",
                    message: "Address must be at least 15 characters",
                });
            }
        }

        if let Some(phone) = &draft.phone {
            let digits_only = !phone.is_empty() && phone.chars().all(|c| c.is_ascii_digit());
            if !digits_only || phone.chars().count() < MIN_PHONE_DIGITS {
                violations.push(FieldViolation {
                    field: "phone",
                    message: "Phone must contain only digits and have at least 9 digits",
                });
            }
        }

        violations
    }

    /// Strength predicate for registration passwords: 8-15 characters with
    /// at least one lowercase letter, one uppercase letter, one digit and
    /// one symbol from the fixed set; nothing outside that alphabet.
    pub fn validate_password_strength(&self, password: &str) -> bool {
        let len = password.chars().count();
        if !(PASSWORD_MIN_LEN..=PASSWORD_MAX_LEN).contains(&len) {
            return false;
        }

        let (mut lower, mut upper, mut digit, mut symbol) = (false, false, false, false);
        for c in password.chars() {
            if c.is_ascii_lowercase() {
                lower = true;
            } else if c.is_ascii_uppercase() {
                upper = true;
            } else if c.is_ascii_digit() {
                digit = true;
            } else if PASSWORD_SYMBOLS.contains(c) {
                symbol = true;
            } else {
                return false;
            }
        }

        lower && upper && digit && symbol
    }

    /// Case-insensitive membership test against the fixed role set.
    pub fn is_valid_role(&self, value: &str) -> bool {
        UserRole::parse(value).is_some()
    }
}
