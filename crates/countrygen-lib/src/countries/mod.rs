//! Country records as served by the REST Countries API, and the
//! name-to-code entries derived from them.

pub mod fetch;

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

/// One element of the `/v3.1/all?fields=name,altSpellings,cca2` response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Country {
    pub cca2: String,
    pub name: CountryName,
    #[serde(rename = "altSpellings")]
    pub alt_spellings: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CountryName {
    pub common: String,
    pub official: String,
}

/// A single `(name, code)` pair of the lookup table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NameEntry<'a> {
    pub name: &'a str,
    pub code: &'a str,
}

/// A name that maps to more than one distinct code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Collision {
    pub name: String,
    pub codes: Vec<String>,
}

impl Country {
    /// Common name, official name and alternate spellings, deduplicated and
    /// in ascending codepoint order.
    pub fn name_variants(&self) -> BTreeSet<&str> {
        [self.name.common.as_str(), self.name.official.as_str()]
            .into_iter()
            .chain(self.alt_spellings.iter().map(String::as_str))
            .collect()
    }

    /// This country's entries, in name order.
    pub fn entries(&self) -> impl Iterator<Item = NameEntry<'_>> {
        let code = self.cca2.as_str();
        self.name_variants()
            .into_iter()
            .map(move |name| NameEntry { name, code })
    }
}

/// All entries across `countries`.
///
/// Countries keep their input order; only names within a country are sorted.
/// Names shared between countries are passed through untouched.
pub fn entries(countries: &[Country]) -> Vec<NameEntry<'_>> {
    countries.iter().flat_map(Country::entries).collect()
}

/// Names claimed by more than one code, sorted by name.
pub fn collisions(entries: &[NameEntry<'_>]) -> Vec<Collision> {
    let mut by_name: BTreeMap<&str, BTreeSet<&str>> = BTreeMap::new();
    for entry in entries {
        by_name.entry(entry.name).or_default().insert(entry.code);
    }

    by_name
        .into_iter()
        .filter(|(_, codes)| codes.len() > 1)
        .map(|(name, codes)| Collision {
            name: name.to_string(),
            codes: codes.into_iter().map(str::to_string).collect(),
        })
        .collect()
}
