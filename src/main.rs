//! # Moolah - interactive money manager
//!
//! A command-line personal finance tracker. Commands are read interactively;
//! each line starts with a command word followed by two-character tag
//! parameters, e.g.:
//!
//! ```text
//! add t/expense c/Food a/20 d/31102022 i/lunch
//! list t/expense
//! stats s/categories
//! ```
//!
//! Transactions are stored as a local JSON file (`~/.moolah/transactions.json`
//! by default, or the path given via `--db`) and saved after every change.

use std::path::PathBuf;

use clap::Parser;

pub mod cli;
pub mod cmd;
pub mod command;
pub mod db;
pub mod error;
pub mod fields;
pub mod parser;
pub mod transaction;
pub mod ui;

use cli::Cli;
use cmd::*;
use command::CommandWord;
use db::Database;

fn main() {
    let cli = Cli::parse();

    // Determine the transaction file, creating the data directory if needed.
    let db_path = cli.db.unwrap_or_else(|| {
        let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
        let data_dir = PathBuf::from(home).join(".moolah");
        if let Err(e) = std::fs::create_dir_all(&data_dir) {
            eprintln!("Failed to create data directory {}: {}", data_dir.display(), e);
            std::process::exit(1);
        }
        data_dir.join("transactions.json")
    });

    let mut db = Database::load(&db_path);
    ui::show_greeting();

    loop {
        let Some(line) = ui::read_command() else {
            // End of input counts as a goodbye.
            ui::show_farewell();
            break;
        };
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let command = match parser::parse_input(line) {
            Ok(command) => command,
            Err(error) => {
                ui::show_error(&error);
                continue;
            }
        };

        match command.word {
            CommandWord::Add => cmd_add(&mut db, &db_path, command.args),
            CommandWord::List => cmd_list(&db, command.args),
            CommandWord::Edit => cmd_edit(&mut db, &db_path, command.args),
            CommandWord::Delete => cmd_delete(&mut db, &db_path, command.args),
            CommandWord::Purge => cmd_purge(&mut db, &db_path),
            CommandWord::Stats => cmd_stats(&db, command.args),
            CommandWord::Help => cmd_help(command.args),
            CommandWord::Bye => {
                ui::show_farewell();
                break;
            }
        }
    }
}
