//! Decodes the compact action field of a rule (`P0R`, `R`, `E`, ...) into an ordered
//! list of [`Action`]s, using the `pest` grammar in `grammar.pest`.

use crate::{
    symbol::{normalize_char, Interner},
    types::{Action, TokenError},
};
use pest::{iterators::Pair, Parser as PestParser};
use pest_derive::Parser as PestParser;

/// Derives a `PestParser` for the action grammar defined in `grammar.pest`.
#[derive(PestParser)]
#[grammar = "grammar.pest"]
pub struct ActionParser;

/// Decodes an action string.
///
/// The result holds one terminal action (`MoveLeft`, `MoveRight` or `Erase`), optionally
/// preceded by a single `Write`. Tokens keep their input order; anything else, including
/// an empty string, a bare write, or a write after the terminal, is rejected.
///
/// # Arguments
///
/// * `input` - The trimmed action field.
/// * `interner` - The table used for atoms written by a `P<char>` token.
///
/// # Returns
///
/// * `Ok(Vec<Action>)` with one or two actions.
/// * `Err(TokenError::MalformedAction)` if the string does not match the grammar.
pub fn decode(input: &str, interner: &mut Interner) -> Result<Vec<Action>, TokenError> {
    let malformed = || TokenError::MalformedAction(input.to_string());

    let root = ActionParser::parse(Rule::actions, input)
        .map_err(|_| malformed())?
        .next()
        .ok_or_else(malformed)?;

    let mut actions = Vec::with_capacity(2);
    for pair in root.into_inner() {
        match pair.as_rule() {
            Rule::write => actions.push(parse_write(pair, interner).ok_or_else(malformed)?),
            Rule::move_right => actions.push(Action::MoveRight),
            Rule::move_left => actions.push(Action::MoveLeft),
            Rule::erase => actions.push(Action::Erase),
            _ => {} // EOI
        }
    }

    Ok(actions)
}

/// Extracts the written symbol from a `Pair<Rule::write>`.
fn parse_write(pair: Pair<Rule>, interner: &mut Interner) -> Option<Action> {
    let c = pair.into_inner().next()?.as_str().chars().next()?;
    Some(Action::Write(normalize_char(c, interner)))
}
