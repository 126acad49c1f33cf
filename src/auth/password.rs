//! Password strength rules
//!
//! Every rule is checked independently so a caller can list all of the
//! problems at once instead of one per submission.

use serde::Deserialize;
use std::fmt;

/// Which rules a password must satisfy
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct PasswordPolicy {
    pub min_length: usize,
    pub require_uppercase: bool,
    pub require_lowercase: bool,
    pub require_digit: bool,
    pub require_special: bool,
}

impl Default for PasswordPolicy {
    fn default() -> Self {
        Self {
            min_length: 8,
            require_uppercase: true,
            require_lowercase: true,
            require_digit: true,
            require_special: true,
        }
    }
}

/// A single failed rule
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PasswordIssue {
    TooShort { min: usize },
    MissingUppercase,
    MissingLowercase,
    MissingDigit,
    MissingSpecial,
}

impl fmt::Display for PasswordIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PasswordIssue::TooShort { min } => write!(f, "must be at least {} characters", min),
            PasswordIssue::MissingUppercase => write!(f, "must contain an uppercase letter"),
            PasswordIssue::MissingLowercase => write!(f, "must contain a lowercase letter"),
            PasswordIssue::MissingDigit => write!(f, "must contain a digit"),
            PasswordIssue::MissingSpecial => write!(f, "must contain a special character"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum PasswordStrength {
    Weak,
    Fair,
    Strong,
}

impl fmt::Display for PasswordStrength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PasswordStrength::Weak => write!(f, "weak"),
            PasswordStrength::Fair => write!(f, "fair"),
            PasswordStrength::Strong => write!(f, "strong"),
        }
    }
}

/// Outcome of `check_password`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PasswordReport {
    pub issues: Vec<PasswordIssue>,
    pub strength: PasswordStrength,
}

impl PasswordReport {
    pub fn is_acceptable(&self) -> bool {
        self.issues.is_empty()
    }
}

fn is_special(c: char) -> bool {
    !c.is_alphanumeric() && !c.is_whitespace()
}

/// Checks `password` against every rule enabled in `policy`.
///
/// Strong means no issues, fair means one issue that is not length,
/// anything else is weak.
pub fn check_password(password: &str, policy: &PasswordPolicy) -> PasswordReport {
    let mut issues = Vec::new();

    if password.chars().count() < policy.min_length {
        issues.push(PasswordIssue::TooShort {
            min: policy.min_length,
        });
    }
    if policy.require_uppercase && !password.chars().any(char::is_uppercase) {
        issues.push(PasswordIssue::MissingUppercase);
    }
    if policy.require_lowercase && !password.chars().any(char::is_lowercase) {
        issues.push(PasswordIssue::MissingLowercase);
    }
    if policy.require_digit && !password.chars().any(|c| c.is_ascii_digit()) {
        issues.push(PasswordIssue::MissingDigit);
    }
    if policy.require_special && !password.chars().any(is_special) {
        issues.push(PasswordIssue::MissingSpecial);
    }

    let strength = match issues.as_slice() {
        [] => PasswordStrength::Strong,
        [PasswordIssue::TooShort { .. }] => PasswordStrength::Weak,
        [_] => PasswordStrength::Fair,
        _ => PasswordStrength::Weak,
    };

    PasswordReport { issues, strength }
}
