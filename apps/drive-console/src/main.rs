//! Feed chat messages to the interpreter from stdin.
//!
//! Usage: drive-console [--json]
//!
//! Each input line is treated as one chat message. Without flags the reply
//! that would be sent back to the chat is printed; `--json` prints the
//! outcome object handed to the drive executor instead.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use drive_command::{
    CommandInterpreter, CommandOutcome, DryRunExecutor, InterpreterConfig, MessageHandler,
};

const CONFIG_PATH_ENV: &str = "DRIVE_COMMAND_CONFIG";

fn load_config() -> Result<InterpreterConfig, drive_command::ConfigError> {
    let config = match std::env::var_os(CONFIG_PATH_ENV) {
        Some(path) => InterpreterConfig::load(&PathBuf::from(path))?,
        None => InterpreterConfig::default(),
    };
    config.apply_env()
}

fn main() {
    // Load .env file from the crate root directory
    let _ = dotenvy::from_path(std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join(".env"));
    env_logger::init();

    let json = std::env::args().skip(1).any(|arg| arg == "--json");
    let config = match load_config() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load config: {}", e);
            std::process::exit(1);
        }
    };
    log::info!("starting drive console with {:?}", config);

    let handler = MessageHandler::new(CommandInterpreter::new(config), DryRunExecutor);
    let stdin = io::stdin();
    let mut stdout = io::stdout().lock();

    for line in stdin.lock().lines() {
        let line = match line {
            Ok(line) => line,
            Err(e) => {
                eprintln!("Failed to read input: {}", e);
                std::process::exit(1);
            }
        };

        let reply = if json {
            let result = handler.interpreter().parse(&line);
            match CommandOutcome::from(&result).to_json() {
                Ok(json) => json,
                Err(e) => {
                    log::error!("failed to encode outcome: {}", e);
                    continue;
                }
            }
        } else {
            handler.handle(&line)
        };

        if writeln!(stdout, "{}", reply).is_err() {
            break;
        }
    }
}
