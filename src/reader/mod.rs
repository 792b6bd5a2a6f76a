//! The INI reader: construction from a file or string, typed accessors
//! with default-value fallback, and the section/field query surface.
//!
//! Your starting point should probably be [`IniReader::from_path`].
//!
//! # Internals
//! Construction runs the whole parse up front. The resulting [`Store`]
//! is never mutated afterwards, which makes a finished reader safe to
//! share between threads for read-only access. A failed parse keeps
//! everything that was stored before the failure point, so the accessors
//! stay usable (returning their defaults for anything missing) — callers
//! should check [`IniReader::success`] before trusting the content.

use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

use tracing::warn;

pub use self::error::{ErrorKind, ParseError};
pub use self::options::ParseOptions;
pub use self::store::{Field, Section, Store};
use self::parser::parse_text;

mod error;
mod options;
mod parser;
mod store;


/// Reads an INI-style configuration file and stores its sections and
/// key-value pairs for easy access.
#[derive(Clone, PartialEq, Debug)]
pub struct IniReader {
    store: Store,
    error: Option<ParseError>,
}

impl IniReader {
    /// Reads and parses the file at `path` with default [`ParseOptions`].
    ///
    /// Construction itself never fails; the parse outcome is queried
    /// through [`success`][Self::success] and [`error`][Self::error].
    pub fn from_path<P: AsRef<Path>>(path: P) -> Self {
        Self::from_path_with_options(path, &ParseOptions::default())
    }

    /// Reads and parses the file at `path`.
    pub fn from_path_with_options<P: AsRef<Path>>(path: P, options: &ParseOptions) -> Self {
        let path = path.as_ref();

        let text = match fs::read_to_string(path) {
            Ok(text) => text,
            Err(_) => {
                return Self {
                    store: Store::default(),
                    error: Some(ParseError::NoSuchFile {
                        path: path.display().to_string(),
                    }),
                };
            }
        };

        Self::parse_str_with_options(&text, options)
    }

    /// Parses configuration text directly, with default [`ParseOptions`].
    pub fn parse_str(text: &str) -> Self {
        Self::parse_str_with_options(text, &ParseOptions::default())
    }

    /// Parses configuration text directly.
    pub fn parse_str_with_options(text: &str, options: &ParseOptions) -> Self {
        let outcome = parse_text(text, options);

        Self {
            store: outcome.store,
            error: outcome.error,
        }
    }


    /// Whether parsing reached the end of the input without an error.
    pub fn success(&self) -> bool {
        self.error.is_none()
    }

    /// The terminal parse error, if one occurred.
    pub fn error(&self) -> Option<&ParseError> {
        self.error.as_ref()
    }

    /// A human-readable description of the parse outcome,
    /// keyed by the error kind.
    pub fn error_message(&self) -> &'static str {
        match self.error.as_ref() {
            Some(error) => error.kind().message(),
            None => "No error has occurred.",
        }
    }


    /// Raw lookup primitive: the value for `key` in `section`,
    /// or `None` if either is missing.
    fn get(&self, section: &str, key: &str) -> Option<&str> {
        self.store.get(section, key)
    }

    /// Gets a string value.
    ///
    /// Returns `default` when the key is missing *or* when its value is
    /// the empty string — the two cases are deliberately not
    /// distinguishable through this accessor (an empty value is only
    /// reachable via `key = ""`).
    pub fn get_string(&self, section: &str, key: &str, default: &str) -> String {
        match self.get(section, key) {
            Some(value) if !value.is_empty() => value.to_owned(),
            _ => default.to_owned(),
        }
    }

    /// Gets an `i32` value. Missing, empty or non-numeric
    /// values fall back to `default`.
    pub fn get_int(&self, section: &str, key: &str, default: i32) -> i32 {
        self.get_parsed(section, key).unwrap_or(default)
    }

    /// Gets an `i64` value. Missing, empty or non-numeric
    /// values fall back to `default`.
    pub fn get_long(&self, section: &str, key: &str, default: i64) -> i64 {
        self.get_parsed(section, key).unwrap_or(default)
    }

    /// Gets an `f64` value. Missing, empty or non-numeric
    /// values fall back to `default`.
    pub fn get_double(&self, section: &str, key: &str, default: f64) -> f64 {
        self.get_parsed(section, key).unwrap_or(default)
    }

    /// Gets a boolean value, case-insensitively.
    ///
    /// `true`/`yes`/`on`/`1` parse as true, `false`/`no`/`off`/`0` as
    /// false; anything else falls back to `default`.
    pub fn get_bool(&self, section: &str, key: &str, default: bool) -> bool {
        let Some(value) = self.get(section, key) else {
            return default;
        };

        match value.to_lowercase().as_str() {
            "true" | "yes" | "on" | "1" => true,
            "false" | "no" | "off" | "0" => false,
            _ => default,
        }
    }

    fn get_parsed<T: std::str::FromStr>(&self, section: &str, key: &str) -> Option<T> {
        let value = self.get(section, key)?;

        match value.parse::<T>() {
            Ok(parsed) => Some(parsed),
            Err(_) => {
                warn!(
                    section,
                    key, value, "Value could not be parsed as a number, using default."
                );
                None
            }
        }
    }


    /// The names of all sections present in the configuration file.
    pub fn section_names(&self) -> &BTreeSet<String> {
        self.store.section_names()
    }

    /// The fields of the named section, or `None` if no such section
    /// exists.
    pub fn section_fields(&self, section: &str) -> Option<impl Iterator<Item = Field> + '_> {
        self.store
            .section(section)
            .map(|section| section.fields())
    }
}
