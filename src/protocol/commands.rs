//! Module `commands`
//!
//! Parsing of console input lines into `Command` values and the result
//! structure handlers return.

use std::fmt;

use crate::auth::DEFAULT_TOKEN_LENGTH;

/// A parsed console command.
#[derive(Debug, PartialEq, Eq)]
pub enum Command {
    Login { username: String, password: String },
    Logout,
    Whoami,
    Status,
    CheckPassword(String),
    Token(usize),
    Quit,
    /// Known command with missing or unparseable arguments; holds the usage line
    BadArguments(&'static str),
    Unknown(String),
}

/// Outcome status of executing a command.
#[derive(Debug, PartialEq, Eq)]
pub enum CommandStatus {
    Success,
    Failure(String),
    CloseConnection,
}

/// Full result of a command execution.
#[derive(Debug)]
pub struct CommandResult {
    pub status: CommandStatus,
    pub message: String,
}

/// Display form safe for logs: secrets are masked.
impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Command::Login { username, .. } => write!(f, "LOGIN {} ***", username),
            Command::Logout => write!(f, "LOGOUT"),
            Command::Whoami => write!(f, "WHOAMI"),
            Command::Status => write!(f, "STATUS"),
            Command::CheckPassword(_) => write!(f, "CHECKPW ***"),
            Command::Token(len) => write!(f, "TOKEN {}", len),
            Command::Quit => write!(f, "QUIT"),
            Command::BadArguments(usage) => write!(f, "bad arguments ({})", usage),
            Command::Unknown(raw) => write!(f, "unknown {:?}", raw),
        }
    }
}

/// Parses a raw console line into the `Command` enum.
///
/// Passwords may contain spaces; everything after the username is the
/// password, minus surrounding whitespace.
pub fn parse_command(raw: &str) -> Command {
    let trimmed = raw.trim();
    let mut parts = trimmed.splitn(2, char::is_whitespace);
    let cmd = parts.next().unwrap_or("").to_ascii_uppercase();
    let arg = parts.next().unwrap_or("").trim();

    match cmd.as_str() {
        "LOGIN" => {
            let mut creds = arg.splitn(2, char::is_whitespace);
            let username = creds.next().unwrap_or("");
            let password = creds.next().unwrap_or("").trim();
            if username.is_empty() || password.is_empty() {
                Command::BadArguments("LOGIN <username> <password>")
            } else {
                Command::Login {
                    username: username.to_string(),
                    password: password.to_string(),
                }
            }
        }
        "LOGOUT" => Command::Logout,
        "WHOAMI" => Command::Whoami,
        "STATUS" => Command::Status,
        "CHECKPW" if !arg.is_empty() => Command::CheckPassword(arg.to_string()),
        "CHECKPW" => Command::BadArguments("CHECKPW <password>"),
        "TOKEN" if arg.is_empty() => Command::Token(DEFAULT_TOKEN_LENGTH),
        "TOKEN" => match arg.parse() {
            Ok(len) => Command::Token(len),
            Err(_) => Command::BadArguments("TOKEN [length]"),
        },
        "QUIT" | "Q" => Command::Quit,
        _ => Command::Unknown(trimmed.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_basic_commands() {
        assert_eq!(parse_command("QUIT"), Command::Quit);
        assert_eq!(parse_command("q"), Command::Quit);
        assert_eq!(parse_command("logout"), Command::Logout);
        assert_eq!(parse_command("WhoAmI"), Command::Whoami);
        assert_eq!(parse_command("STATUS"), Command::Status);
    }

    #[test]
    fn test_parse_login() {
        assert_eq!(
            parse_command("LOGIN alice Alice#2024"),
            Command::Login {
                username: "alice".into(),
                password: "Alice#2024".into()
            }
        );
        assert_eq!(
            parse_command("  login  bob   correct horse  "),
            Command::Login {
                username: "bob".into(),
                password: "correct horse".into()
            }
        );
    }

    #[test]
    fn test_parse_login_missing_arguments() {
        assert!(matches!(parse_command("LOGIN"), Command::BadArguments(_)));
        assert!(matches!(parse_command("LOGIN alice"), Command::BadArguments(_)));
        assert!(matches!(parse_command("LOGIN alice   "), Command::BadArguments(_)));
    }

    #[test]
    fn test_parse_token() {
        assert_eq!(parse_command("TOKEN"), Command::Token(DEFAULT_TOKEN_LENGTH));
        assert_eq!(parse_command("TOKEN 16"), Command::Token(16));
        assert!(matches!(parse_command("TOKEN many"), Command::BadArguments(_)));
        assert!(matches!(parse_command("TOKEN -1"), Command::BadArguments(_)));
    }

    #[test]
    fn test_parse_checkpw() {
        assert_eq!(
            parse_command("CHECKPW hunter2"),
            Command::CheckPassword("hunter2".into())
        );
        assert!(matches!(parse_command("CHECKPW"), Command::BadArguments(_)));
    }

    #[test]
    fn test_unknown_commands() {
        assert_eq!(parse_command("FOO bar"), Command::Unknown("FOO bar".into()));
        assert_eq!(parse_command(""), Command::Unknown("".into()));
    }

    #[test]
    fn test_display_masks_secrets() {
        let login = parse_command("LOGIN alice Alice#2024");
        assert_eq!(login.to_string(), "LOGIN alice ***");
        assert!(!parse_command("CHECKPW s3cret").to_string().contains("s3cret"));
    }
}
