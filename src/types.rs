//! This module defines the core data structures produced by the parser: symbols, atoms,
//! actions, configuration records, and the error taxonomy for malformed input.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;
use thiserror::Error;

/// The token used in a spec to denote the blank (empty) tape cell.
pub const BLANK_TOKEN: &str = "None";
/// The character that starts a whole-line comment.
pub const COMMENT_MARKER: char = '#';
/// The separator between the fields of a rule line.
pub const FIELD_SEPARATOR: char = ',';
/// The number of fields every rule line must have.
pub const FIELD_COUNT: usize = 4;
/// The maximum allowed size for a spec loaded from disk, in bytes.
pub const MAX_SPEC_SIZE: usize = 65536; // 64KB

/// An opaque, case-sensitive identifier used for state names and named symbols.
///
/// Atoms share their backing storage when produced by the same [`crate::symbol::Interner`],
/// so cloning one is cheap.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Atom(Arc<str>);

impl Atom {
    /// Returns the identifier text.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Atom {
    fn from(name: &str) -> Self {
        Atom(Arc::from(name))
    }
}

impl From<Arc<str>> for Atom {
    fn from(name: Arc<str>) -> Self {
        Atom(name)
    }
}

impl AsRef<str> for Atom {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Atom {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A tape-cell value.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "SymbolRecord")]
pub enum Symbol {
    /// No symbol; the cell is empty.
    Blank,
    /// One of the two digits of the reference alphabet, `0` or `1`.
    Digit(u8),
    /// Any other token, kept verbatim.
    Atom(Atom),
}

/// The unchecked wire shape of a [`Symbol`].
#[derive(Deserialize)]
enum SymbolRecord {
    Blank,
    Digit(u8),
    Atom(Atom),
}

impl TryFrom<SymbolRecord> for Symbol {
    type Error = RecordError;

    fn try_from(record: SymbolRecord) -> Result<Self, Self::Error> {
        match record {
            SymbolRecord::Blank => Ok(Symbol::Blank),
            SymbolRecord::Digit(d @ (0 | 1)) => Ok(Symbol::Digit(d)),
            SymbolRecord::Digit(d) => Err(RecordError::InvalidDigit(d)),
            SymbolRecord::Atom(atom) => Ok(Symbol::Atom(atom)),
        }
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Symbol::Blank => f.write_str(BLANK_TOKEN),
            Symbol::Digit(d) => write!(f, "{d}"),
            Symbol::Atom(atom) => write!(f, "{atom}"),
        }
    }
}

/// One primitive instruction within a rule.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    /// Write a symbol to the current cell.
    Write(Symbol),
    /// Move the head one cell to the left.
    MoveLeft,
    /// Move the head one cell to the right.
    MoveRight,
    /// Clear the current cell.
    Erase,
}

impl Action {
    /// Returns `true` for the actions that end a rule's action sequence.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Action::Write(_))
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Write(symbol) => write!(f, "P{symbol}"),
            Action::MoveLeft => f.write_str("L"),
            Action::MoveRight => f.write_str("R"),
            Action::Erase => f.write_str("E"),
        }
    }
}

/// One parsed transition rule.
///
/// The action sequence always holds one terminal action, optionally preceded by a single
/// `Write`. Records are built by the parser and are read-only afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "ConfigurationRecord")]
pub struct Configuration {
    state: Atom,
    read_symbol: Symbol,
    actions: Vec<Action>,
    end_state: Atom,
}

impl Configuration {
    pub(crate) fn new(
        state: Atom,
        read_symbol: Symbol,
        actions: Vec<Action>,
        end_state: Atom,
    ) -> Self {
        Self {
            state,
            read_symbol,
            actions,
            end_state,
        }
    }

    /// The state this rule applies in.
    pub fn state(&self) -> &Atom {
        &self.state
    }

    /// The symbol that must be under the head for this rule to apply.
    pub fn read_symbol(&self) -> &Symbol {
        &self.read_symbol
    }

    /// The ordered actions to perform.
    pub fn actions(&self) -> &[Action] {
        &self.actions
    }

    /// The state to switch to afterwards.
    pub fn end_state(&self) -> &Atom {
        &self.end_state
    }

    /// Returns the symbol written by this rule, if any.
    pub fn writes(&self) -> Option<&Symbol> {
        self.actions.iter().find_map(|action| match action {
            Action::Write(symbol) => Some(symbol),
            _ => None,
        })
    }

    /// Returns the move or erase that ends the action sequence.
    pub fn terminal(&self) -> Option<&Action> {
        self.actions.last().filter(|action| action.is_terminal())
    }
}

/// The unchecked wire shape of a [`Configuration`].
#[derive(Deserialize)]
struct ConfigurationRecord {
    state: Atom,
    read_symbol: Symbol,
    actions: Vec<Action>,
    end_state: Atom,
}

impl TryFrom<ConfigurationRecord> for Configuration {
    type Error = RecordError;

    fn try_from(record: ConfigurationRecord) -> Result<Self, Self::Error> {
        check_actions(&record.actions)?;

        Ok(Configuration::new(
            record.state,
            record.read_symbol,
            record.actions,
            record.end_state,
        ))
    }
}

/// Checks the shape of an action sequence: one terminal action, optionally preceded by
/// a single `Write`.
fn check_actions(actions: &[Action]) -> Result<(), RecordError> {
    if !(1..=2).contains(&actions.len()) {
        return Err(RecordError::ActionCount(actions.len()));
    }

    match actions {
        [.., last] if !last.is_terminal() => Err(RecordError::MissingTerminal),
        [_] | [Action::Write(_), _] => Ok(()),
        _ => Err(RecordError::MisplacedWrite),
    }
}

impl fmt::Display for Configuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let actions: String = self.actions.iter().map(ToString::to_string).collect();
        write!(
            f,
            "{}, {}, {}, {}",
            self.state, self.read_symbol, actions, self.end_state
        )
    }
}

/// Errors raised while turning spec text into configuration records.
///
/// Every variant carries the 1-based physical line number and the raw text of the
/// offending line.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// The line does not split into exactly four comma-separated fields.
    #[error("line {line}: expected 4 comma-separated fields, found {found}: '{text}'")]
    FieldCount {
        line: usize,
        text: String,
        found: usize,
    },
    /// One of the fields is empty after trimming.
    #[error("line {line}: empty {field} field: '{text}'")]
    EmptyField {
        line: usize,
        text: String,
        field: &'static str,
    },
    /// The symbol field cannot be turned into a symbol.
    #[error("line {line}: invalid symbol '{token}': '{text}'")]
    InvalidSymbol {
        line: usize,
        text: String,
        token: String,
    },
    /// The action field is not of the form `(P<char>)? (R|L|E)`.
    #[error("line {line}: malformed actions '{token}': '{text}'")]
    MalformedAction {
        line: usize,
        text: String,
        token: String,
    },
}

impl ParseError {
    /// The 1-based line number the error was found on.
    pub fn line(&self) -> usize {
        match self {
            ParseError::FieldCount { line, .. }
            | ParseError::EmptyField { line, .. }
            | ParseError::InvalidSymbol { line, .. }
            | ParseError::MalformedAction { line, .. } => *line,
        }
    }

    /// The raw text of the offending line.
    pub fn text(&self) -> &str {
        match self {
            ParseError::FieldCount { text, .. }
            | ParseError::EmptyField { text, .. }
            | ParseError::InvalidSymbol { text, .. }
            | ParseError::MalformedAction { text, .. } => text,
        }
    }
}

/// A line-independent failure from one of the decoding stages. The parser attaches the
/// line context to turn it into a [`ParseError`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TokenError {
    #[error("invalid symbol '{0}'")]
    InvalidSymbol(String),
    #[error("malformed actions '{0}'")]
    MalformedAction(String),
}

impl TokenError {
    /// Attaches the line number and raw line text.
    pub fn at(self, line: usize, text: &str) -> ParseError {
        let text = text.to_string();
        match self {
            TokenError::InvalidSymbol(token) => ParseError::InvalidSymbol { line, text, token },
            TokenError::MalformedAction(token) => ParseError::MalformedAction { line, text, token },
        }
    }
}

/// Reasons a deserialized record is rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RecordError {
    #[error("digit symbols are 0 or 1, found {0}")]
    InvalidDigit(u8),
    #[error("expected 1 or 2 actions, found {0}")]
    ActionCount(usize),
    #[error("the last action must be a move or an erase")]
    MissingTerminal,
    #[error("only the first of two actions may be a write")]
    MisplacedWrite,
}

/// Errors raised while reading a spec from outside the process.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The spec could not be read.
    #[error("File error: {0}")]
    FileError(String),
    /// The spec exceeds [`MAX_SPEC_SIZE`].
    #[error("Spec is too large: {0} bytes (limit {})", MAX_SPEC_SIZE)]
    TooLarge(usize),
    /// The spec was read but did not parse.
    #[error("Spec parsing error: {0}")]
    ParseError(#[from] ParseError),
    /// A built-in demo was requested that does not exist.
    #[error("Demo not found: {0}")]
    NotFound(String),
}

/// Serializes a sequence of records to pretty-printed JSON.
pub fn to_json(configurations: &[Configuration]) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(configurations)
}
