//! Command implementations for the interactive loop.
//!
//! Each handler takes the loaded `Database` plus the arguments the parser
//! populated, prints its outcome and saves after any mutation. Entry-number
//! range checking against the live list happens here, not in the parser.

use std::path::Path;

use crate::command::Arguments;
use crate::db::Database;
use crate::fields::StatsType;
use crate::transaction::Transaction;
use crate::ui;

fn save_or_warn(db: &Database, db_path: &Path) {
    if let Err(e) = db.save(db_path) {
        eprintln!("Failed to save transactions to {}: {}", db_path.display(), e);
    }
}

/// Append a new transaction built from the mandatory add tags.
pub fn cmd_add(db: &mut Database, db_path: &Path, args: Arguments) {
    // The parser guarantees every mandatory tag of add was present.
    let (Some(kind), Some(category), Some(amount), Some(date), Some(description)) =
        (args.kind, args.category, args.amount, args.date, args.description)
    else {
        return;
    };
    let transaction = Transaction {
        kind,
        description,
        amount,
        category,
        date,
    };
    println!("I have added the following transaction:");
    println!("  {transaction}");
    db.add(transaction);
    save_or_warn(db, db_path);
}

/// Print transactions, optionally narrowed by type, category and date.
pub fn cmd_list(db: &Database, args: Arguments) {
    let matches = db.filtered(args.kind, args.category.as_deref(), args.date);
    if matches.is_empty() {
        println!("There are no transactions to show.");
        return;
    }
    println!("Here are your transactions:");
    for (number, transaction) in matches {
        println!("{number:>4}. {transaction}");
    }
}

/// Apply the supplied optional tags to an existing entry.
pub fn cmd_edit(db: &mut Database, db_path: &Path, args: Arguments) {
    let Some(number) = args.entry else {
        return;
    };
    let changed = args.kind.is_some()
        || args.category.is_some()
        || args.amount.is_some()
        || args.date.is_some()
        || args.description.is_some();
    if !changed {
        println!("Nothing to change; give at least one of t/ c/ a/ d/ i/.");
        return;
    }
    let Some(transaction) = db.entry_mut(number) else {
        println!("There is no entry number {number} in the list.");
        return;
    };
    if let Some(kind) = args.kind {
        transaction.kind = kind;
    }
    if let Some(category) = args.category {
        transaction.category = category;
    }
    if let Some(amount) = args.amount {
        transaction.amount = amount;
    }
    if let Some(date) = args.date {
        transaction.date = date;
    }
    if let Some(description) = args.description {
        transaction.description = description;
    }
    println!("Entry {number} is now:");
    println!("  {transaction}");
    save_or_warn(db, db_path);
}

/// Remove one entry by its 1-based number.
pub fn cmd_delete(db: &mut Database, db_path: &Path, args: Arguments) {
    let Some(number) = args.entry else {
        return;
    };
    match db.remove_entry(number) {
        Some(transaction) => {
            println!("I have deleted the following transaction:");
            println!("  {transaction}");
            save_or_warn(db, db_path);
        }
        None => println!("There is no entry number {number} in the list."),
    }
}

/// Delete everything, after an explicit confirmation.
pub fn cmd_purge(db: &mut Database, db_path: &Path) {
    if db.is_empty() {
        println!("There are no transactions to purge.");
        return;
    }
    if !ui::confirm_purge() {
        println!("Aborting purge, nothing was deleted.");
        return;
    }
    db.purge();
    save_or_warn(db, db_path);
    println!("All transactions have been deleted.");
}

/// Print the requested statistics view.
pub fn cmd_stats(db: &Database, args: Arguments) {
    let Some(stats_type) = args.stats_type else {
        return;
    };
    match stats_type {
        StatsType::Categories => {
            let totals = db.category_totals();
            if totals.is_empty() {
                println!("There are no transactions to summarise.");
                return;
            }
            println!("Net totals by category (income minus expenses):");
            for (category, total) in totals {
                let entries = if total.entries == 1 { "entry" } else { "entries" };
                println!(
                    "  {category}: ${} over {} {entries}",
                    total.net, total.entries
                );
            }
        }
    }
}

/// Show the command summary, with tag grammar when `o/detailed` was given.
pub fn cmd_help(args: Arguments) {
    println!("{}", ui::divider());
    println!("add     - record a new expense or income entry");
    println!("list    - show recorded entries, with optional filters");
    println!("edit    - change fields of an existing entry");
    println!("delete  - remove one entry by its number");
    println!("purge   - remove every entry (asks for confirmation)");
    println!("stats   - show statistics, e.g. totals by category");
    println!("help    - show this summary (help o/detailed for tag usage)");
    println!("bye     - save and exit");
    if args.detailed == Some(true) {
        println!();
        println!("Tags are two-character prefixes followed by a value, one per tag:");
        println!("  add t/TYPE c/CATEGORY a/AMOUNT d/DATE i/DESCRIPTION");
        println!("      TYPE is expense or income, AMOUNT a whole number up to");
        println!("      10000000, DATE in ddMMyyyy form, e.g. 31102022.");
        println!("  list [t/TYPE] [c/CATEGORY] [d/DATE]");
        println!("  edit e/ENTRY [t/TYPE] [c/CATEGORY] [a/AMOUNT] [d/DATE] [i/DESCRIPTION]");
        println!("  delete e/ENTRY");
        println!("  stats s/categories");
    }
    println!("{}", ui::divider());
}
