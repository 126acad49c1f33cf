//! Command handlers for the login console.
//!
//! Each handler turns a parsed command plus the session into a response.
//! Handlers never touch the transport.

use crate::auth::{check_password, generate_token};
use crate::error::ThrottleError;
use crate::error::handlers::error_to_code;
use crate::limiter::Clock;
use crate::protocol::responses::{self, format_response};
use crate::protocol::{Command, CommandResult, CommandStatus};
use crate::session::{ConsoleContext, LoginOutcome, Session};
use crate::utils::format_remaining;

const MIN_TOKEN_LENGTH: usize = 8;
const MAX_TOKEN_LENGTH: usize = 128;

/// Dispatches a parsed command to its handler.
pub fn handle_command<C: Clock>(
    session: &mut Session<C>,
    command: &Command,
    context: &ConsoleContext,
) -> CommandResult {
    match command {
        Command::Login { username, password } => {
            handle_cmd_login(session, username, password, context)
        }
        Command::Logout => handle_cmd_logout(session),
        Command::Whoami => handle_cmd_whoami(session),
        Command::Status => handle_cmd_status(session),
        Command::CheckPassword(password) => handle_cmd_checkpw(password, context),
        Command::Token(len) => handle_cmd_token(*len),
        Command::Quit => handle_cmd_quit(session),
        Command::BadArguments(usage) => failure(
            responses::BAD_ARGUMENTS,
            &format!("Usage: {}", usage),
        ),
        Command::Unknown(_) => failure(responses::UNKNOWN_COMMAND, "Unknown command"),
    }
}

fn success(code: u16, message: &str) -> CommandResult {
    CommandResult {
        status: CommandStatus::Success,
        message: format_response(code, message),
    }
}

fn failure(code: u16, message: &str) -> CommandResult {
    CommandResult {
        status: CommandStatus::Failure(message.to_string()),
        message: format_response(code, message),
    }
}

fn error_result(err: ThrottleError) -> CommandResult {
    failure(error_to_code(&err), &err.to_string())
}

/// Handles LOGIN: limiter first, then the credential check.
fn handle_cmd_login<C: Clock>(
    session: &mut Session<C>,
    username: &str,
    password: &str,
    context: &ConsoleContext,
) -> CommandResult {
    match session.attempt_login(username, password, &context.verifier) {
        LoginOutcome::LoggedIn { display_name, .. } => success(
            responses::LOGGED_IN,
            &format!("Logged in as {}", display_name),
        ),
        LoginOutcome::Rejected(e) => error_result(e.into()),
        LoginOutcome::Throttled { remaining_ms } => failure(
            responses::TOO_MANY_ATTEMPTS,
            &format!(
                "Too many attempts. Try again in {}",
                format_remaining(remaining_ms)
            ),
        ),
    }
}

fn handle_cmd_logout<C: Clock>(session: &mut Session<C>) -> CommandResult {
    match session.logout() {
        Ok(username) => success(responses::OK, &format!("Logged out {}", username)),
        Err(e) => error_result(e.into()),
    }
}

fn handle_cmd_whoami<C: Clock>(session: &Session<C>) -> CommandResult {
    match session.whoami() {
        Ok((username, display_name)) => {
            success(responses::OK, &format!("{} ({})", username, display_name))
        }
        Err(e) => error_result(e.into()),
    }
}

fn handle_cmd_status<C: Clock>(session: &Session<C>) -> CommandResult {
    let status = session.login_status();
    let user = status.username.as_deref().unwrap_or("nobody");

    let message = if status.remaining_block_ms > 0 {
        format!(
            "{}; login blocked for {}",
            user,
            format_remaining(status.remaining_block_ms)
        )
    } else {
        format!(
            "{}; {}/{} login attempts recorded",
            user, status.recorded_attempts, status.max_attempts
        )
    };
    success(responses::STATUS, &message)
}

fn handle_cmd_checkpw(password: &str, context: &ConsoleContext) -> CommandResult {
    let report = check_password(password, &context.password_policy);
    if report.is_acceptable() {
        return success(responses::OK, &format!("Password is {}", report.strength));
    }

    let issues: Vec<String> = report.issues.iter().map(ToString::to_string).collect();
    success(
        responses::OK,
        &format!("Password is {}: {}", report.strength, issues.join("; ")),
    )
}

fn handle_cmd_token(len: usize) -> CommandResult {
    if !(MIN_TOKEN_LENGTH..=MAX_TOKEN_LENGTH).contains(&len) {
        return failure(
            responses::BAD_ARGUMENTS,
            &format!(
                "Token length must be between {} and {}",
                MIN_TOKEN_LENGTH, MAX_TOKEN_LENGTH
            ),
        );
    }
    success(responses::OK, &generate_token(len))
}

/// Handles QUIT: logs out if needed and signals the loop to stop.
fn handle_cmd_quit<C: Clock>(session: &mut Session<C>) -> CommandResult {
    let _ = session.logout();
    CommandResult {
        status: CommandStatus::CloseConnection,
        message: format_response(responses::GOODBYE, "Goodbye"),
    }
}
