//! Command words, tag contracts and the parsed-argument sink.
//!
//! Each command word declares which tags it requires and which it merely
//! accepts. The contracts are fixed `'static` data; the parser consults them
//! and fills the command's `Arguments` with typed values, leaving every
//! field whose tag did not appear at its default.

use chrono::NaiveDate;

use crate::fields::{StatsType, TransactionKind};

/// A two-character parameter prefix, e.g. `t/` or `a/`.
///
/// Tags are case-sensitive and may appear at most once per input line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tag {
    /// `t/` — transaction type (`expense` or `income`).
    Type,
    /// `c/` — category name.
    Category,
    /// `a/` — whole-unit amount.
    Amount,
    /// `d/` — date in `ddMMyyyy` form.
    Date,
    /// `i/` — free-text description.
    Description,
    /// `e/` — 1-based entry number of an existing transaction.
    Entry,
    /// `o/` — help option (`detailed`).
    HelpOption,
    /// `s/` — statistics type (`categories`).
    StatsType,
}

impl Tag {
    /// The literal two-character prefix for this tag.
    pub const fn symbol(self) -> &'static str {
        match self {
            Tag::Type => "t/",
            Tag::Category => "c/",
            Tag::Amount => "a/",
            Tag::Date => "d/",
            Tag::Description => "i/",
            Tag::Entry => "e/",
            Tag::HelpOption => "o/",
            Tag::StatsType => "s/",
        }
    }

    /// Look a tag up by its two-character prefix.
    pub fn from_symbol(symbol: &str) -> Option<Tag> {
        match symbol {
            "t/" => Some(Tag::Type),
            "c/" => Some(Tag::Category),
            "a/" => Some(Tag::Amount),
            "d/" => Some(Tag::Date),
            "i/" => Some(Tag::Description),
            "e/" => Some(Tag::Entry),
            "o/" => Some(Tag::HelpOption),
            "s/" => Some(Tag::StatsType),
            _ => None,
        }
    }
}

/// The command words the read loop understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandWord {
    Add,
    List,
    Edit,
    Delete,
    Purge,
    Stats,
    Help,
    Bye,
}

/// Typed values decoded from the tags present in one input line.
///
/// Only fields whose tag appeared are set; the rest stay `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Arguments {
    pub kind: Option<TransactionKind>,
    pub category: Option<String>,
    pub amount: Option<u32>,
    pub date: Option<NaiveDate>,
    pub description: Option<String>,
    pub entry: Option<i64>,
    pub detailed: Option<bool>,
    pub stats_type: Option<StatsType>,
}

/// One user command: the word that selected it plus its parsed arguments.
#[derive(Debug, Clone, PartialEq)]
pub struct Command {
    pub word: CommandWord,
    pub args: Arguments,
}

impl Command {
    /// Fresh command instance with default (unset) arguments.
    pub fn new(word: CommandWord) -> Self {
        Command {
            word,
            args: Arguments::default(),
        }
    }

    /// Tags that must appear in the parameter portion of the input.
    pub fn mandatory_tags(&self) -> &'static [Tag] {
        match self.word {
            CommandWord::Add => &[
                Tag::Type,
                Tag::Category,
                Tag::Amount,
                Tag::Date,
                Tag::Description,
            ],
            CommandWord::Edit | CommandWord::Delete => &[Tag::Entry],
            CommandWord::Stats => &[Tag::StatsType],
            CommandWord::List | CommandWord::Purge | CommandWord::Help | CommandWord::Bye => &[],
        }
    }

    /// Tags that may appear in addition to the mandatory ones.
    ///
    /// Disjoint from `mandatory_tags` for every command word.
    pub fn optional_tags(&self) -> &'static [Tag] {
        match self.word {
            CommandWord::List => &[Tag::Type, Tag::Category, Tag::Date],
            CommandWord::Edit => &[
                Tag::Type,
                Tag::Category,
                Tag::Amount,
                Tag::Date,
                Tag::Description,
            ],
            CommandWord::Help => &[Tag::HelpOption],
            CommandWord::Add
            | CommandWord::Delete
            | CommandWord::Purge
            | CommandWord::Stats
            | CommandWord::Bye => &[],
        }
    }

    /// Whether `symbol` names a tag in this command's contract.
    pub fn supports_tag(&self, symbol: &str) -> bool {
        self.mandatory_tags()
            .iter()
            .chain(self.optional_tags())
            .any(|tag| tag.symbol() == symbol)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn symbol_round_trip() {
        for tag in [
            Tag::Type,
            Tag::Category,
            Tag::Amount,
            Tag::Date,
            Tag::Description,
            Tag::Entry,
            Tag::HelpOption,
            Tag::StatsType,
        ] {
            assert_eq!(Tag::from_symbol(tag.symbol()), Some(tag));
            assert_eq!(tag.symbol().len(), 2);
        }
        assert_eq!(Tag::from_symbol("x/"), None);
    }

    #[test]
    fn contracts_are_disjoint() {
        for word in [
            CommandWord::Add,
            CommandWord::List,
            CommandWord::Edit,
            CommandWord::Delete,
            CommandWord::Purge,
            CommandWord::Stats,
            CommandWord::Help,
            CommandWord::Bye,
        ] {
            let command = Command::new(word);
            for tag in command.mandatory_tags() {
                assert!(
                    !command.optional_tags().contains(tag),
                    "{word:?} lists {tag:?} as both mandatory and optional"
                );
            }
        }
    }

    #[test]
    fn supports_tag_covers_both_sets() {
        let edit = Command::new(CommandWord::Edit);
        assert!(edit.supports_tag("e/"));
        assert!(edit.supports_tag("a/"));
        assert!(!edit.supports_tag("s/"));
    }
}
