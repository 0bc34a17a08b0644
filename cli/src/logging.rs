use colored::*;
use std::env;

// Simple logging functions layered over the env_logger setup in main;
// BASIX_DEBUG gates the chatty ones

pub fn log_info(message: &str) {
    if env::var("BASIX_DEBUG").is_ok() {
        eprintln!("{} {}", "[INFO]".cyan(), message);
    }
}

pub fn log_error(message: &str) {
    eprintln!("{} {}", "[ERROR]".red().bold(), message);
}
