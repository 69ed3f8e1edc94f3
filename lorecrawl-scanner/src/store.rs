use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};
use std::collections::HashMap;

/// One glossary entry, keyed in the store by its canonical page name.
/// Created once per non-redirect page; afterwards only `aliases` grows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TermRecord {
    pub link: String,
    pub category: String,
    pub summary: String,
    pub aliases: Vec<String>,
}

/// Accumulated crawl state: canonical terms in discovery order plus the
/// redirect-name map used to short-circuit repeat visits. Only the term
/// map is serialized.
#[derive(Debug, Default)]
pub struct TermStore {
    records: HashMap<String, TermRecord>,
    order: Vec<String>,
    redirects: HashMap<String, String>,
}

impl TermStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// True when `name` has already been settled, either as a canonical
    /// term or as a known redirect.
    pub fn contains(&self, name: &str) -> bool {
        self.records.contains_key(name) || self.redirects.contains_key(name)
    }

    pub fn is_term(&self, name: &str) -> bool {
        self.records.contains_key(name)
    }

    pub fn get(&self, name: &str) -> Option<&TermRecord> {
        self.records.get(name)
    }

    pub fn redirect_target(&self, name: &str) -> Option<&str> {
        self.redirects.get(name).map(String::as_str)
    }

    /// Registers a canonical term. First registration wins; a second
    /// insert under the same name is ignored.
    pub fn insert_term(&mut self, name: &str, record: TermRecord) {
        if self.records.contains_key(name) {
            return;
        }
        self.order.push(name.to_string());
        self.records.insert(name.to_string(), record);
    }

    /// Registers `alias` as a redirect to the canonical `target`.
    /// Returns false when `target` is not a known term.
    pub fn add_alias(&mut self, target: &str, alias: &str) -> bool {
        let Some(record) = self.records.get_mut(target) else {
            return false;
        };
        record.aliases.push(alias.to_string());
        self.redirects.insert(alias.to_string(), target.to_string());
        true
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Terms in discovery order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &TermRecord)> {
        self.order
            .iter()
            .filter_map(|name| self.records.get(name).map(|r| (name.as_str(), r)))
    }
}

impl Serialize for TermStore {
    // The output contract is a JSON object whose key order is discovery
    // order, so this cannot lean on HashMap's serializer.
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.records.len()))?;
        for (name, record) in self.iter() {
            map.serialize_entry(name, record)?;
        }
        map.end()
    }
}
