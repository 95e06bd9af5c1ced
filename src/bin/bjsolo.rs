//! Terminal blackjack against an automated dealer.
//!
//! Set `BJSOLO_DEBUG` to log the deck listing each round and `RUST_LOG` to
//! adjust log verbosity.

use std::io;
use std::process::ExitCode;
use std::time::{SystemTime, UNIX_EPOCH};

use bjsolo::GameOptions;
use bjsolo::console::Session;

fn main() -> ExitCode {
    let debug = std::env::var_os("BJSOLO_DEBUG").is_some();
    let filter = if debug { "info" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(filter)).init();

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let options = GameOptions::default().with_debug(debug);

    let mut session = Session::new(io::stdin().lock(), io::stdout(), options, seed);
    match session.run() {
        Ok(rounds) => {
            log::debug!("played {rounds} round(s)");
            ExitCode::SUCCESS
        }
        Err(err) => {
            log::error!("{err}");
            ExitCode::FAILURE
        }
    }
}
