//! Console loop
//!
//! Reads command lines from any async reader, dispatches them against the
//! session, and writes one response line per command. Generic over the
//! transport so the same loop serves stdin/stdout and in-memory tests.

use log::{debug, info, warn};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};

use super::state::Session;
use crate::auth::{PasswordPolicy, StaticCredentials};
use crate::config::ThrottleConfig;
use crate::error::ThrottleError;
use crate::limiter::Clock;
use crate::middleware::logging::log_command;
use crate::protocol::responses::{self, format_response};
use crate::protocol::{CommandStatus, handle_command, parse_command};

/// Shared, read-only inputs for command handlers.
pub struct ConsoleContext {
    pub verifier: StaticCredentials,
    pub password_policy: PasswordPolicy,
    pub max_command_length: usize,
}

impl ConsoleContext {
    pub fn new(
        verifier: StaticCredentials,
        password_policy: PasswordPolicy,
        max_command_length: usize,
    ) -> Self {
        Self {
            verifier,
            password_policy,
            max_command_length,
        }
    }

    pub fn from_config(config: &ThrottleConfig) -> Self {
        Self::new(
            StaticCredentials::new(config.credentials.clone()),
            config.password_policy.clone(),
            config.max_command_length,
        )
    }
}

/// Runs the console until QUIT or end of input.
///
/// The session is borrowed mutably for the whole run, which keeps every
/// limiter check serialized.
pub async fn run_console<R, W, C>(
    mut reader: R,
    mut writer: W,
    session: &mut Session<C>,
    context: &ConsoleContext,
) -> Result<(), ThrottleError>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
    C: Clock,
{
    writer
        .write_all(format_response(responses::READY, "Login console ready").as_bytes())
        .await?;
    writer.flush().await?;

    let mut buf = Vec::new();
    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf).await? == 0 {
            info!("Input closed for session {}", session.id());
            break;
        }

        let line = match std::str::from_utf8(&buf) {
            Ok(line) => line,
            Err(e) => {
                warn!("Session {} sent non UTF-8 input: {}", session.id(), e);
                writer
                    .write_all(
                        format_response(responses::UNKNOWN_COMMAND, "Invalid command encoding")
                            .as_bytes(),
                    )
                    .await?;
                writer.flush().await?;
                continue;
            }
        };

        let raw = line.trim_end_matches(['\r', '\n']);
        if raw.len() > context.max_command_length {
            writer
                .write_all(format_response(responses::UNKNOWN_COMMAND, "Command too long").as_bytes())
                .await?;
            writer.flush().await?;
            continue;
        }

        let command = parse_command(raw);
        log_command(session.id(), &command.to_string());

        let result = handle_command(session, &command, context);
        writer.write_all(result.message.as_bytes()).await?;
        writer.flush().await?;

        match result.status {
            CommandStatus::CloseConnection => {
                info!("Session {} requested to quit", session.id());
                break;
            }
            CommandStatus::Failure(reason) => {
                debug!("Session {} command {} failed: {}", session.id(), command, reason);
            }
            CommandStatus::Success => {}
        }
    }

    Ok(())
}
