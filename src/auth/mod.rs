//! Authentication support
//!
//! Credential checking seam, password strength rules, and token generation.

pub mod credentials;
pub mod password;
pub mod token;
pub mod validator;

pub use credentials::{CredentialVerifier, StaticCredentials};
pub use password::{PasswordIssue, PasswordPolicy, PasswordReport, PasswordStrength, check_password};
pub use token::{DEFAULT_TOKEN_LENGTH, generate_token};
pub use validator::is_valid_input;
