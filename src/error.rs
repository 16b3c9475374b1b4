//! Typed errors raised while parsing user input.
//!
//! Every violation the parser can detect maps to exactly one variant here.
//! The messages are fixed and user-displayable; the read loop prints them
//! verbatim and re-prompts. No variant carries dynamic data.

use thiserror::Error;

/// First violation found while interpreting one input line.
///
/// The parser never aggregates: the earliest failing check wins and parsing
/// stops immediately.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseError {
    #[error("I don't recognise that command. Enter \"help\" to see what I can do.")]
    UnknownCommand,

    #[error("The command is missing one or more of its mandatory tags.")]
    MissingTag,

    #[error("The command was given a tag it does not support.")]
    UnsupportedTag,

    #[error("The same tag was given more than once.")]
    DuplicateTag,

    #[error("A tag was given without a parameter after it.")]
    EmptyParameter,

    #[error("The transaction type must be either \"expense\" or \"income\".")]
    UnknownTransactionType,

    #[error("The category must not contain any digit or special symbol.")]
    InvalidCategory,

    #[error("The amount must be a whole number from 0 to 10000000.")]
    InvalidAmount,

    #[error("The date must be given as ddMMyyyy, e.g. 31102022.")]
    InvalidDate,

    #[error("The entry number must be numeric.")]
    EntryNotNumeric,

    #[error("The only supported help option is \"detailed\".")]
    UnknownHelpOption,

    #[error("The only supported statistics type is \"categories\".")]
    InvalidStatsType,
}
