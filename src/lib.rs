//! This crate parses a small line-oriented language of Turing machine transition rules
//! into typed configuration records for an execution engine.
//! Each line has the form `<state>, <symbol>, <actions>, <end_state>`, for example
//! `b, None, P0R, c`. Blank lines and `#` comment lines are ignored.

pub mod action;
pub mod demos;
pub mod filter;
pub mod loader;
pub mod parser;
pub mod symbol;
pub mod types;

/// Re-exports the action decoder.
pub use action::decode;
/// Re-exports the built-in demo registry.
pub use demos::{Demo, DemoInfo, DemoManager, DEMOS};
/// Re-exports the `SpecLoader` struct from the loader module.
pub use loader::SpecLoader;
/// Re-exports the `parse` function from the parser module.
pub use parser::parse;
/// Re-exports the symbol normalizer and its per-parse interner.
pub use symbol::{normalize, Interner};
/// Re-exports the record and error types.
pub use types::{
    to_json, Action, Atom, Configuration, LoadError, ParseError, RecordError, Symbol,
    TokenError, MAX_SPEC_SIZE,
};
