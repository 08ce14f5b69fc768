//! In-process name-to-code table.
//!
//! Built once through [`build_lookup_table`] and passed to whoever needs it;
//! there is no global instance.

use std::collections::HashMap;

use crate::countries::NameEntry;

/// Exact-match mapping from every known name variant to its country code.
#[derive(Debug, Clone, Default)]
pub struct CountryTable {
    codes: HashMap<String, String>,
}

/// Build a table from `entries`.
///
/// A name that appears more than once keeps the code of its last entry,
/// which is also what `HashMap::from` does in the generated module.
pub fn build_lookup_table(entries: &[NameEntry<'_>]) -> CountryTable {
    let codes = entries
        .iter()
        .map(|e| (e.name.to_string(), e.code.to_string()))
        .collect();
    CountryTable { codes }
}

impl CountryTable {
    /// Code for `name`, matched exactly (case and accents included).
    pub fn find(&self, name: &str) -> Option<&str> {
        self.codes.get(name).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }
}
