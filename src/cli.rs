use std::path::PathBuf;

use clap::Parser;

/// Interactive, file-backed money manager.
/// Storage defaults to ~/.moolah/transactions.json or a path passed via --db.
#[derive(Parser)]
#[command(name = "moolah", version, about = "Interactive CLI money manager")]
pub struct Cli {
    /// Path to the JSON transaction file.
    #[arg(long)]
    pub db: Option<PathBuf>,
}
