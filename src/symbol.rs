//! Maps raw tokens to [`Symbol`] values and interns identifiers for the duration of a
//! single parse.

use crate::types::{Atom, Symbol, TokenError, BLANK_TOKEN};
use std::collections::HashSet;
use std::sync::Arc;

/// A string table scoped to one parse call.
///
/// Equal identifiers interned through the same table share one allocation. The table
/// is owned by the caller, so independent parses never touch shared state.
#[derive(Debug, Default)]
pub struct Interner {
    names: HashSet<Arc<str>>,
}

impl Interner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the atom for `name`, reusing an earlier allocation when there is one.
    pub fn intern(&mut self, name: &str) -> Atom {
        if let Some(existing) = self.names.get(name) {
            return Atom::from(Arc::clone(existing));
        }

        let name: Arc<str> = Arc::from(name);
        self.names.insert(Arc::clone(&name));
        Atom::from(name)
    }

    /// The number of distinct identifiers seen so far.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

/// Normalizes a symbol token.
///
/// `None` is the blank, the single characters `0` and `1` are digits, and any other
/// non-empty token is kept verbatim as an atom. Other numerals such as `2` are atoms too.
pub fn normalize(token: &str, interner: &mut Interner) -> Result<Symbol, TokenError> {
    match token {
        "" => Err(TokenError::InvalidSymbol(token.to_string())),
        BLANK_TOKEN => Ok(Symbol::Blank),
        "0" => Ok(Symbol::Digit(0)),
        "1" => Ok(Symbol::Digit(1)),
        _ => Ok(Symbol::Atom(interner.intern(token))),
    }
}

/// Normalizes the single character following a `P` in an action string.
pub fn normalize_char(c: char, interner: &mut Interner) -> Symbol {
    match c {
        '0' => Symbol::Digit(0),
        '1' => Symbol::Digit(1),
        _ => {
            let mut buf = [0u8; 4];
            Symbol::Atom(interner.intern(c.encode_utf8(&mut buf)))
        }
    }
}
