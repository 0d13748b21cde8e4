//! This module provides the `SpecLoader` struct, responsible for loading transition-table
//! specs from files, directories, and strings and handing their text to the parser.

use crate::parser::parse;
use crate::types::{Configuration, LoadError, MAX_SPEC_SIZE};
use std::fs;
use std::path::{Path, PathBuf};

/// The file extension of spec files.
pub const SPEC_EXTENSION: &str = "tm";

/// `SpecLoader` is a utility struct for loading specs.
/// It reads spec text from a file or string and forwards it verbatim to [`parse`].
pub struct SpecLoader;

impl SpecLoader {
    /// Loads a single spec from the specified file path.
    ///
    /// # Arguments
    ///
    /// * `path` - A reference to the `Path` of the spec file to load.
    ///
    /// # Returns
    ///
    /// * `Ok(Vec<Configuration>)` if the file is read and parsed successfully.
    /// * `Err(LoadError::FileError)` if the file cannot be read.
    /// * `Err(LoadError::TooLarge)` if the file exceeds `MAX_SPEC_SIZE`.
    /// * `Err(LoadError::ParseError)` if the file content is not a valid spec.
    pub fn load_spec(path: &Path) -> Result<Vec<Configuration>, LoadError> {
        let content = fs::read_to_string(path).map_err(|e| {
            LoadError::FileError(format!("Failed to read file {}: {}", path.display(), e))
        })?;

        Self::load_spec_from_string(&content)
    }

    /// Loads a single spec from the provided string content.
    ///
    /// The same size limit as for files applies.
    pub fn load_spec_from_string(content: &str) -> Result<Vec<Configuration>, LoadError> {
        if content.len() > MAX_SPEC_SIZE {
            return Err(LoadError::TooLarge(content.len()));
        }

        Ok(parse(content)?)
    }

    /// Loads every spec file (`.tm` extension) from a given directory.
    ///
    /// Each file is loaded independently, so one malformed spec does not prevent the
    /// others from loading. Directories and other files are skipped. Results are sorted
    /// by path.
    pub fn load_specs(directory: &Path) -> Vec<Result<(PathBuf, Vec<Configuration>), LoadError>> {
        if !directory.exists() {
            return vec![Err(LoadError::FileError(format!(
                "Directory {} does not exist",
                directory.display()
            )))];
        }

        let entries = match fs::read_dir(directory) {
            Ok(entries) => entries,
            Err(e) => {
                return vec![Err(LoadError::FileError(format!(
                    "Failed to read directory {}: {}",
                    directory.display(),
                    e
                )))]
            }
        };

        let mut paths = Vec::new();
        let mut results = Vec::new();

        for entry in entries {
            match entry {
                Ok(entry) => {
                    let path = entry.path();

                    // Skip directories and non-spec files
                    if path.is_dir() || path.extension().is_none_or(|ext| ext != SPEC_EXTENSION) {
                        continue;
                    }

                    paths.push(path);
                }
                Err(e) => results.push(Err(LoadError::FileError(format!(
                    "Failed to read directory entry: {}",
                    e
                )))),
            }
        }

        paths.sort();
        results.extend(paths.into_iter().map(|path| {
            Self::load_spec(&path)
                .map(|configs| (path.clone(), configs))
                .map_err(|e| {
                    LoadError::FileError(format!(
                        "Failed to load spec from {}: {}",
                        path.display(),
                        e
                    ))
                })
        }));

        results
    }
}
