//! Interprets one line of user input into a typed `Command`.
//!
//! The command word selects the command and its tag contract; everything
//! after the word is the parameter portion, a space-delimited sequence of
//! `xx/value` tokens. Parsing walks a fixed pipeline and stops at the first
//! violation:
//!
//! 1. split the parameter portion on single spaces;
//! 2. confirm every mandatory tag of the command appears (this runs even
//!    for empty input, so commands with mandatory tags reject it);
//! 3. for non-empty input: reject unsupported tags, duplicated tags and
//!    tags with no value, then convert each token and store it on the
//!    command's arguments.
//!
//! Converters validate character classes before numeric parsing so that a
//! failure always has a single, reportable cause.

use chrono::NaiveDate;

use crate::command::{Command, CommandWord, Tag};
use crate::error::ParseError;
use crate::fields::{StatsType, TransactionKind, DATE_INPUT_PATTERN, MAX_AMOUNT};

/// Number of characters in a tag prefix.
const TAG_LENGTH: usize = 2;

/// Characters rejected inside categories and amounts.
const SPECIAL_SYMBOLS: &str = "!@#$%&*()_+=|<>?{}[]~-";

/// Parse one full input line into a command with populated arguments.
///
/// The first space separates the command word from the parameter portion;
/// a line without a space has an empty parameter portion.
pub fn parse_input(input: &str) -> Result<Command, ParseError> {
    let (word, parameters) = match input.split_once(' ') {
        Some((word, rest)) => (word, rest),
        None => (input, ""),
    };
    let mut command = command_for_word(word)?;
    parse_parameters(&mut command, parameters)?;
    Ok(command)
}

/// Look the command word up, case-insensitively.
fn command_for_word(word: &str) -> Result<Command, ParseError> {
    let word = match word.to_lowercase().as_str() {
        "add" => CommandWord::Add,
        "list" => CommandWord::List,
        "edit" => CommandWord::Edit,
        "delete" => CommandWord::Delete,
        "purge" => CommandWord::Purge,
        "stats" => CommandWord::Stats,
        "help" => CommandWord::Help,
        "bye" => CommandWord::Bye,
        _ => return Err(ParseError::UnknownCommand),
    };
    Ok(Command::new(word))
}

/// Validate the parameter portion against the command's tag contract and
/// store the converted values on the command.
///
/// The first violation aborts parsing; the command's arguments may have
/// been partially written by then and the caller is expected to discard
/// the instance on any error.
pub fn parse_parameters(command: &mut Command, parameters_input: &str) -> Result<(), ParseError> {
    let splits: Vec<&str> = parameters_input.split(' ').collect();

    check_mandatory_tags_exist(command, &splits)?;

    // An empty parameter portion that passed the mandatory check means the
    // command takes no mandatory tags; nothing remains to validate or set.
    if parameters_input.is_empty() {
        return Ok(());
    }

    check_unsupported_tags_not_exist(command, &splits)?;
    check_duplicate_tags_not_exist(&splits)?;
    check_parameters_not_empty(&splits)?;

    for split in splits {
        let (symbol, value) = split.split_at(TAG_LENGTH);
        set_parameter(command, symbol, value)?;
    }
    Ok(())
}

/// Every mandatory tag must prefix at least one token.
fn check_mandatory_tags_exist(command: &Command, splits: &[&str]) -> Result<(), ParseError> {
    for tag in command.mandatory_tags() {
        let found = splits.iter().any(|split| split.starts_with(tag.symbol()));
        if !found {
            return Err(ParseError::MissingTag);
        }
    }
    Ok(())
}

/// Every token must be long enough to carry a tag, and that tag must be in
/// the command's mandatory or optional set.
fn check_unsupported_tags_not_exist(command: &Command, splits: &[&str]) -> Result<(), ParseError> {
    for split in splits {
        // A token shorter than a tag cannot be one; a token whose third
        // byte is mid-character cannot start with any supported tag either,
        // since all tag symbols are ASCII.
        if split.len() < TAG_LENGTH || !split.is_char_boundary(TAG_LENGTH) {
            return Err(ParseError::UnsupportedTag);
        }
        if !command.supports_tag(&split[..TAG_LENGTH]) {
            return Err(ParseError::UnsupportedTag);
        }
    }
    Ok(())
}

/// No two tokens may share a tag; the first repeat fails.
fn check_duplicate_tags_not_exist(splits: &[&str]) -> Result<(), ParseError> {
    let mut seen = std::collections::HashSet::new();
    for split in splits {
        if !seen.insert(&split[..TAG_LENGTH]) {
            return Err(ParseError::DuplicateTag);
        }
    }
    Ok(())
}

/// Every token must carry at least one character of value after its tag.
fn check_parameters_not_empty(splits: &[&str]) -> Result<(), ParseError> {
    for split in splits {
        if split.len() <= TAG_LENGTH {
            return Err(ParseError::EmptyParameter);
        }
    }
    Ok(())
}

/// Convert one token's value and store it on the matching argument field.
fn set_parameter(command: &mut Command, symbol: &str, value: &str) -> Result<(), ParseError> {
    // Unreachable after the unsupported-tag check, but kept as a guard so
    // this function stands on its own.
    let tag = Tag::from_symbol(symbol).ok_or(ParseError::MissingTag)?;
    let args = &mut command.args;
    match tag {
        Tag::Type => args.kind = Some(parse_type_tag(value)?),
        Tag::Category => args.category = Some(parse_category_tag(value)?),
        Tag::Amount => args.amount = Some(parse_amount_tag(value)?),
        Tag::Date => args.date = Some(parse_date_tag(value)?),
        Tag::Description => args.description = Some(value.to_string()),
        Tag::Entry => args.entry = Some(parse_entry_tag(value)?),
        Tag::HelpOption => args.detailed = Some(parse_help_option_tag(value)?),
        Tag::StatsType => args.stats_type = Some(parse_stats_type_tag(value)?),
    }
    Ok(())
}

/// The type value must be one of the canonical transaction kind names.
pub fn parse_type_tag(value: &str) -> Result<TransactionKind, ParseError> {
    if value == TransactionKind::Expense.name() {
        Ok(TransactionKind::Expense)
    } else if value == TransactionKind::Income.name() {
        Ok(TransactionKind::Income)
    } else {
        Err(ParseError::UnknownTransactionType)
    }
}

/// Categories carry no digits and none of the special symbols.
pub fn parse_category_tag(value: &str) -> Result<String, ParseError> {
    if contains_numeric(value) || contains_special_symbol(value) {
        return Err(ParseError::InvalidCategory);
    }
    Ok(value.to_string())
}

/// Amounts are whole numbers in `0..=10_000_000`.
///
/// The character-class checks run before the numeric parse so that a bare
/// parse failure is never the reported cause.
pub fn parse_amount_tag(value: &str) -> Result<u32, ParseError> {
    if contains_alphabet(value) || contains_special_symbol(value) {
        return Err(ParseError::InvalidAmount);
    }
    let amount: u32 = value.parse().map_err(|_| ParseError::InvalidAmount)?;
    if amount > MAX_AMOUNT {
        return Err(ParseError::InvalidAmount);
    }
    Ok(amount)
}

/// Dates must match the fixed `ddMMyyyy` input pattern.
pub fn parse_date_tag(value: &str) -> Result<NaiveDate, ParseError> {
    NaiveDate::parse_from_str(value, DATE_INPUT_PATTERN).map_err(|_| ParseError::InvalidDate)
}

/// Entry numbers are any integer; range checking against the live list is
/// the executing command's job.
pub fn parse_entry_tag(value: &str) -> Result<i64, ParseError> {
    value.parse().map_err(|_| ParseError::EntryNotNumeric)
}

/// The only help option is the literal `detailed`.
pub fn parse_help_option_tag(value: &str) -> Result<bool, ParseError> {
    if value == "detailed" {
        Ok(true)
    } else {
        Err(ParseError::UnknownHelpOption)
    }
}

/// The only statistics type is the literal `categories`.
pub fn parse_stats_type_tag(value: &str) -> Result<StatsType, ParseError> {
    match value {
        "categories" => Ok(StatsType::Categories),
        _ => Err(ParseError::InvalidStatsType),
    }
}

/// Whether the value holds at least one decimal digit.
pub fn contains_numeric(value: &str) -> bool {
    value.chars().any(|c| c.is_ascii_digit())
}

/// Whether the value holds at least one alphabetic character.
pub fn contains_alphabet(value: &str) -> bool {
    value.chars().any(|c| c.is_alphabetic())
}

fn contains_special_symbol(value: &str) -> bool {
    value.chars().any(|c| SPECIAL_SYMBOLS.contains(c))
}
