use crate::parser::parse;
use crate::types::{Atom, Configuration, LoadError};
use std::collections::BTreeSet;

// Embedded demo specs
const DEMO_TEXTS: [(&str, &str); 4] = [
    ("turing-first", include_str!("../demos/turing-first.tm")),
    ("ones", include_str!("../demos/ones.tm")),
    ("alternate-left", include_str!("../demos/alternate-left.tm")),
    ("scrub", include_str!("../demos/scrub.tm")),
];

/// A built-in spec together with its parsed records.
#[derive(Debug, Clone)]
pub struct Demo {
    pub name: &'static str,
    pub text: &'static str,
    pub configurations: Vec<Configuration>,
}

lazy_static::lazy_static! {
    /// The built-in demos, parsed once on first use and shared read-only afterwards.
    pub static ref DEMOS: Vec<Demo> = DEMO_TEXTS
        .iter()
        .filter_map(|&(name, text)| match parse(text) {
            Ok(configurations) => Some(Demo {
                name,
                text,
                configurations,
            }),
            Err(e) => {
                eprintln!("Failed to parse demo '{}': {}", name, e);
                None
            }
        })
        .collect();
}

pub struct DemoManager;

impl DemoManager {
    /// Get the number of available demos
    pub fn count() -> usize {
        DEMOS.len()
    }

    /// Get a demo by its index
    pub fn get_by_index(index: usize) -> Result<&'static Demo, LoadError> {
        DEMOS
            .get(index)
            .ok_or_else(|| LoadError::NotFound(format!("index {}", index)))
    }

    /// Get a demo by its name
    pub fn get_by_name(name: &str) -> Result<&'static Demo, LoadError> {
        DEMOS
            .iter()
            .find(|demo| demo.name == name)
            .ok_or_else(|| LoadError::NotFound(name.to_string()))
    }

    /// List all demo names
    pub fn list_names() -> Vec<&'static str> {
        DEMOS.iter().map(|demo| demo.name).collect()
    }

    /// Get summary information about a demo by its index
    pub fn get_info(index: usize) -> Result<DemoInfo, LoadError> {
        let demo = Self::get_by_index(index)?;

        let states: BTreeSet<&Atom> = demo
            .configurations
            .iter()
            .flat_map(|config| [config.state(), config.end_state()])
            .collect();

        Ok(DemoInfo {
            index,
            name: demo.name,
            initial_state: demo
                .configurations
                .first()
                .map(|config| config.state().to_string()),
            state_count: states.len(),
            rule_count: demo.configurations.len(),
        })
    }

    /// Search for demos by name
    pub fn search(query: &str) -> Vec<usize> {
        let query = query.to_lowercase();

        DEMOS
            .iter()
            .enumerate()
            .filter(|(_, demo)| demo.name.to_lowercase().contains(&query))
            .map(|(index, _)| index)
            .collect()
    }
}

#[derive(Debug, Clone)]
pub struct DemoInfo {
    pub index: usize,
    pub name: &'static str,
    pub initial_state: Option<String>,
    pub state_count: usize,
    pub rule_count: usize,
}
