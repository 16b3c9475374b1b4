//! Console input and output for the read loop.
//!
//! All user-facing text goes through here: the greeting and farewell, the
//! prompt, error display and the purge confirmation. The parser and the
//! command handlers never read from stdin themselves, except through these
//! helpers.

use std::io::{self, BufRead, Write};

use crate::error::ParseError;

const DIVIDER: &str = "----------------------------------------------------------------";

pub fn show_greeting() {
    println!("{DIVIDER}");
    println!("Welcome to Moolah, your command-line money manager.");
    println!("Enter \"help\" to see the available commands.");
    println!("{DIVIDER}");
}

pub fn show_farewell() {
    println!("{DIVIDER}");
    println!("Goodbye! Your transactions are saved.");
    println!("{DIVIDER}");
}

/// Print the fixed message for a parse error between dividers.
pub fn show_error(error: &ParseError) {
    println!("{DIVIDER}");
    println!("{error}");
    println!("{DIVIDER}");
}

/// Prompt and read one line of input. Returns `None` on end of input.
pub fn read_command() -> Option<String> {
    print!("> ");
    io::stdout().flush().ok();
    let mut line = String::new();
    match io::stdin().lock().read_line(&mut line) {
        Ok(0) => None,
        Ok(_) => Some(line),
        Err(_) => None,
    }
}

/// Ask for confirmation before purging; only a literal `Y` proceeds.
pub fn confirm_purge() -> bool {
    println!("{DIVIDER}");
    println!("This will delete ALL of your transactions. Enter Y to confirm.");
    println!("{DIVIDER}");
    match read_command() {
        Some(line) => line.trim() == "Y",
        None => false,
    }
}

pub fn divider() -> &'static str {
    DIVIDER
}
