//! This module provides the parser for transition-table specs. It splits each retained
//! line into its four fields, hands the symbol and action fields to their decoders, and
//! assembles the results into an ordered list of [`Configuration`] records.

use crate::{
    action::decode,
    filter::{retained_lines, RetainedLine},
    symbol::{normalize, Interner},
    types::{Configuration, ParseError, FIELD_COUNT, FIELD_SEPARATOR},
};

/// The names of the four fields, in line order, as used in error messages.
const FIELD_NAMES: [&str; FIELD_COUNT] = ["state", "symbol", "actions", "end state"];

/// Parses the given spec text into configuration records.
///
/// This is the main entry point. Blank lines and `#` comment lines are skipped; every
/// other line must have the form `<state>, <symbol>, <actions>, <end_state>`. The records
/// come back in input order. The first malformed line aborts the whole parse.
///
/// # Arguments
///
/// * `input` - A string slice containing the spec.
///
/// # Returns
///
/// * `Ok(Vec<Configuration>)` with one record per retained line.
/// * `Err(ParseError)` describing the first offending line.
pub fn parse(input: &str) -> Result<Vec<Configuration>, ParseError> {
    let mut interner = Interner::new();

    retained_lines(input)
        .map(|line| parse_line(line, &mut interner))
        .collect()
}

/// Parses a single retained line into a `Configuration`.
fn parse_line(line: RetainedLine<'_>, interner: &mut Interner) -> Result<Configuration, ParseError> {
    let [state, symbol, actions, end_state] = split_fields(line)?;

    let state = interner.intern(state);
    let read_symbol = normalize(symbol, interner).map_err(|e| e.at(line.number, line.text))?;
    let actions = decode(actions, interner).map_err(|e| e.at(line.number, line.text))?;
    let end_state = interner.intern(end_state);

    Ok(Configuration::new(state, read_symbol, actions, end_state))
}

/// Splits a line on commas into exactly four trimmed, non-empty fields.
fn split_fields<'a>(line: RetainedLine<'a>) -> Result<[&'a str; FIELD_COUNT], ParseError> {
    let fields: Vec<&'a str> = line.text.split(FIELD_SEPARATOR).map(str::trim).collect();

    let fields: [&'a str; FIELD_COUNT] = fields.try_into().map_err(|fields: Vec<&str>| {
        ParseError::FieldCount {
            line: line.number,
            text: line.text.to_string(),
            found: fields.len(),
        }
    })?;

    check_non_empty(&fields, line)?;

    Ok(fields)
}

/// Checks that no field is empty, reporting the first empty one.
fn check_non_empty(fields: &[&str; FIELD_COUNT], line: RetainedLine<'_>) -> Result<(), ParseError> {
    match fields.iter().position(|field| field.is_empty()) {
        Some(index) => Err(ParseError::EmptyField {
            line: line.number,
            text: line.text.to_string(),
            field: FIELD_NAMES[index],
        }),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Action, Symbol};

    const TURING_FIRST: &str = "\
b, None, P0R, c
c, None, R,   e
e, None, P1R, f
f, None, R,   b
";

    fn config(state: &str, symbol: Symbol, actions: Vec<Action>, end: &str) -> Configuration {
        Configuration::new(state.into(), symbol, actions, end.into())
    }

    #[test]
    fn test_parse_turing_first_machine() {
        let result = parse(TURING_FIRST);
        assert!(result.is_ok());

        let configs = result.unwrap();
        assert_eq!(
            configs,
            vec![
                config(
                    "b",
                    Symbol::Blank,
                    vec![Action::Write(Symbol::Digit(0)), Action::MoveRight],
                    "c"
                ),
                config("c", Symbol::Blank, vec![Action::MoveRight], "e"),
                config(
                    "e",
                    Symbol::Blank,
                    vec![Action::Write(Symbol::Digit(1)), Action::MoveRight],
                    "f"
                ),
                config("f", Symbol::Blank, vec![Action::MoveRight], "b"),
            ]
        );
    }

    #[test]
    fn test_parse_is_deterministic() {
        assert_eq!(parse(TURING_FIRST), parse(TURING_FIRST));
    }

    #[test]
    fn test_parse_on_separate_threads() {
        let (first, second) = std::thread::scope(|scope| {
            let first = scope.spawn(|| parse(TURING_FIRST));
            let second = scope.spawn(|| parse(TURING_FIRST));
            (first.join().unwrap(), second.join().unwrap())
        });

        assert_eq!(first.unwrap(), second.unwrap());
    }

    #[test]
    fn test_parse_without_trailing_newline() {
        let configs = parse("b, None, P0R, c").unwrap();
        assert_eq!(configs.len(), 1);
        assert_eq!(configs[0].end_state().as_str(), "c");
    }

    #[test]
    fn test_parse_empty_input() {
        assert_eq!(parse(""), Ok(vec![]));
        assert_eq!(parse("# nothing here\n\n   \n"), Ok(vec![]));
    }

    #[test]
    fn test_comments_and_blank_lines_do_not_change_output() {
        let noisy = "\
# Turing's first example

b, None, P0R, c

  # print nothing, move on
c, None, R,   e
e, None, P1R, f
\t
f, None, R,   b
# end
";
        assert_eq!(parse(noisy), parse(TURING_FIRST));
    }

    #[test]
    fn test_parse_preserves_order() {
        let configs = parse("z, 0, L, y\na, 1, R, b\nm, x, E, n").unwrap();
        let states: Vec<&str> = configs.iter().map(|c| c.state().as_str()).collect();

        assert_eq!(states, vec!["z", "a", "m"]);
    }

    #[test]
    fn test_parse_symbols_and_atoms() {
        let configs = parse("q0, x, PyL, Q0\nq0, 2, E, q0").unwrap();

        assert_eq!(configs[0].state().as_str(), "q0");
        assert_eq!(configs[0].end_state().as_str(), "Q0");
        assert_eq!(configs[0].read_symbol(), &Symbol::Atom("x".into()));
        assert_eq!(
            configs[0].actions(),
            &[Action::Write(Symbol::Atom("y".into())), Action::MoveLeft]
        );
        assert_eq!(configs[1].read_symbol(), &Symbol::Atom("2".into()));
        assert_eq!(configs[1].actions(), &[Action::Erase]);
    }

    #[test]
    fn test_parse_shares_interned_states() {
        let configs = parse("b, None, R, c\nc, None, R, b").unwrap();

        assert!(std::ptr::eq(
            configs[0].end_state().as_str(),
            configs[1].state().as_str()
        ));
    }

    #[test]
    fn test_parse_trims_fields() {
        let configs = parse("  b ,\tNone\t,  P0R ,c  \r\n").unwrap();
        assert_eq!(configs[0].to_string(), "b, None, P0R, c");
    }

    #[test]
    fn test_parse_too_few_fields() {
        let input = "b, None, P0R, c\nc, None, R";
        let error = parse(input).unwrap_err();

        assert_eq!(
            error,
            ParseError::FieldCount {
                line: 2,
                text: "c, None, R".to_string(),
                found: 3,
            }
        );
    }

    #[test]
    fn test_parse_too_many_fields() {
        let error = parse("b, None, R, c, d").unwrap_err();
        assert!(matches!(error, ParseError::FieldCount { found: 5, .. }));
        assert!(error.to_string().contains("expected 4"));
    }

    #[test]
    fn test_parse_empty_fields() {
        let error = parse("b, , R, c").unwrap_err();
        assert!(matches!(
            error,
            ParseError::EmptyField {
                line: 1,
                field: "symbol",
                ..
            }
        ));

        let error = parse(", None, R, c").unwrap_err();
        assert!(matches!(error, ParseError::EmptyField { field: "state", .. }));

        let error = parse("b, None, , c").unwrap_err();
        assert!(matches!(error, ParseError::EmptyField { field: "actions", .. }));

        let error = parse("b, None, R,   ").unwrap_err();
        assert!(matches!(
            error,
            ParseError::EmptyField {
                field: "end state",
                ..
            }
        ));
    }

    #[test]
    fn test_parse_write_without_move() {
        let error = parse("b, None, PX, c").unwrap_err();

        assert_eq!(
            error,
            ParseError::MalformedAction {
                line: 1,
                text: "b, None, PX, c".to_string(),
                token: "PX".to_string(),
            }
        );
    }

    #[test]
    fn test_parse_fails_fast_on_first_error() {
        let input = "\
b, None, P0R, c
# comment
c, None, RR, e
e, None
";
        let error = parse(input).unwrap_err();

        assert!(matches!(error, ParseError::MalformedAction { line: 3, .. }));
        assert_eq!(error.text(), "c, None, RR, e");
    }

    #[test]
    fn test_parse_reports_physical_line_numbers() {
        let input = "\n\n# header\nb, None, R\n";
        let error = parse(input).unwrap_err();

        assert_eq!(error.line(), 4);
    }
}
