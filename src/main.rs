//! Login Throttle - Entry Point
//!
//! Interactive login console on stdin/stdout with attempt limiting.

use log::info;
use std::process;
use tokio::io::{BufReader, stdin, stdout};

use login_throttle::ThrottleConfig;
use login_throttle::error::handlers::handle_error;
use login_throttle::session::{ConsoleContext, Session, run_console};

#[tokio::main]
async fn main() {
    // Initialize the logger (env_logger picks up RUST_LOG environment variable)
    env_logger::init();

    info!("Launching login console...");

    let config = match ThrottleConfig::load() {
        Ok(config) => config,
        Err(e) => {
            handle_error(&e.into());
            process::exit(1);
        }
    };

    let context = ConsoleContext::from_config(&config);
    let mut session = Session::new(config.login_limiter, config.display_names);

    if let Err(e) = run_console(BufReader::new(stdin()), stdout(), &mut session, &context).await {
        handle_error(&e);
        process::exit(1);
    }
}
