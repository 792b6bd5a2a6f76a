use std::collections::{BTreeMap, BTreeSet};
use std::fmt;


/// A single key-value pair belonging to a section.
///
/// Keys are case-sensitive and unique inside their section
/// (a later assignment to the same key overwrites the earlier one).
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Field {
    pub key: String,
    pub value: String,
}

impl Field {
    pub fn new<K, V>(key: K, value: V) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

impl fmt::Display for Field {
    /// Renders the pair in its on-disk form, i.e. `key=value`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={}", self.key, self.value)
    }
}


/// A named grouping of key-value pairs, introduced by a `[name]` line.
#[derive(Clone, PartialEq, Eq, Debug, Default)]
pub struct Section {
    fields: BTreeMap<String, String>,
}

impl Section {
    /// Look up the raw value associated with `key`.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.fields.get(key).map(String::as_str)
    }

    /// Iterate over the fields of this section, ordered by key.
    pub fn fields(&self) -> impl Iterator<Item = Field> + '_ {
        self.fields
            .iter()
            .map(|(key, value)| Field::new(key.clone(), value.clone()))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Inserts a field, overwriting any previous value for the same key.
    pub(crate) fn insert(&mut self, key: String, value: String) {
        self.fields.insert(key, value);
    }
}


/// The in-memory mapping from section name to its fields,
/// built once per parse and immutable afterwards.
///
/// The set of section names is kept alongside the map for enumeration.
#[derive(Clone, PartialEq, Eq, Debug, Default)]
pub struct Store {
    sections: BTreeMap<String, Section>,
    section_names: BTreeSet<String>,
}

impl Store {
    pub fn section(&self, name: &str) -> Option<&Section> {
        self.sections.get(name)
    }

    pub fn section_names(&self) -> &BTreeSet<String> {
        &self.section_names
    }

    /// Raw lookup primitive: both the section and the key must exist.
    pub fn get(&self, section: &str, key: &str) -> Option<&str> {
        self.sections.get(section).and_then(|section| section.get(key))
    }

    /// Opens (or reopens) a section. Repeated declarations of the same
    /// name merge into the existing field set.
    pub(crate) fn open_section(&mut self, name: &str) {
        self.section_names.insert(name.to_owned());
        self.sections.entry(name.to_owned()).or_default();
    }

    /// Returns `true` if any declared section has no fields yet.
    pub(crate) fn has_empty_sections(&self) -> bool {
        self.sections.values().any(Section::is_empty)
    }

    pub(crate) fn insert(&mut self, section: &str, key: String, value: String) {
        self.sections.entry(section.to_owned()).or_default().insert(key, value);
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_renders_as_key_equals_value() {
        let field = Field::new("port", "8080");

        assert_eq!(field.to_string(), "port=8080");
    }

    #[test]
    fn reopened_section_merges_fields() {
        let mut store = Store::default();
        store.open_section("server");
        store.insert("server", "host".to_owned(), "localhost".to_owned());
        store.open_section("server");
        store.insert("server", "port".to_owned(), "8080".to_owned());

        assert_eq!(store.section_names().len(), 1);
        assert_eq!(store.section("server").unwrap().len(), 2);
    }

    #[test]
    fn duplicate_key_is_last_write_wins() {
        let mut store = Store::default();
        store.open_section("server");
        store.insert("server", "host".to_owned(), "localhost".to_owned());
        store.insert("server", "host".to_owned(), "0.0.0.0".to_owned());

        assert_eq!(store.get("server", "host"), Some("0.0.0.0"));
    }

    #[test]
    fn declared_section_without_fields_is_empty() {
        let mut store = Store::default();
        store.open_section("server");

        assert!(store.has_empty_sections());
        assert!(store.section_names().contains("server"));
    }
}
