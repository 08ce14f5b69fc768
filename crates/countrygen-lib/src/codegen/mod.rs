//! Rendering of the generated Rust lookup module.
//!
//! The output is assembled in memory and returned whole; callers write it
//! out only once rendering has succeeded.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::countries::{self, Country, NameEntry};
use crate::errors::{GenError, Result};

const LAZY_STATIC_HEADER: &str = concat!(
    "static COUNTRIES: std::sync::LazyLock<std::collections::HashMap<&'static str, &'static str>> =\n",
    "    std::sync::LazyLock::new(|| {\n",
    "        std::collections::HashMap::from([\n",
);

const LAZY_STATIC_FOOTER: &str = concat!(
    "        ])\n",
    "    });\n",
    "\n",
    "pub fn find(name: &str) -> Option<&'static str> {\n",
    "    COUNTRIES.get(name).cloned()\n",
    "}\n",
);

const FACTORY_HEADER: &str = concat!(
    "pub fn build_lookup_table() -> std::collections::HashMap<&'static str, &'static str> {\n",
    "    std::collections::HashMap::from([\n",
);

const FACTORY_FOOTER: &str = concat!(
    "    ])\n",
    "}\n",
    "\n",
    "pub fn find(\n",
    "    table: &std::collections::HashMap<&'static str, &'static str>,\n",
    "    name: &str,\n",
    ") -> Option<&'static str> {\n",
    "    table.get(name).copied()\n",
    "}\n",
);

/// Shape of the generated module.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Layout {
    /// A `LazyLock` static plus `find(name)`.
    #[default]
    LazyStatic,
    /// `build_lookup_table()` plus `find(&table, name)`; the consumer owns
    /// the table.
    Factory,
}

impl Layout {
    pub fn all() -> &'static [Layout] {
        &[Layout::LazyStatic, Layout::Factory]
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Layout::LazyStatic => "lazy-static",
            Layout::Factory => "factory",
        }
    }

    fn header(self) -> &'static str {
        match self {
            Layout::LazyStatic => LAZY_STATIC_HEADER,
            Layout::Factory => FACTORY_HEADER,
        }
    }

    fn footer(self) -> &'static str {
        match self {
            Layout::LazyStatic => LAZY_STATIC_FOOTER,
            Layout::Factory => FACTORY_FOOTER,
        }
    }

    fn indent(self) -> &'static str {
        match self {
            Layout::LazyStatic => "            ",
            Layout::Factory => "        ",
        }
    }
}

impl fmt::Display for Layout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Layout {
    type Err = GenError;

    fn from_str(s: &str) -> Result<Self> {
        Layout::all()
            .iter()
            .copied()
            .find(|layout| layout.as_str() == s)
            .ok_or_else(|| GenError::Config(format!("unknown layout: {s}")))
    }
}

/// Render one table row, without indentation or trailing newline.
///
/// Names are JSON-quoted; codes are emitted verbatim. Control characters
/// other than tab, newline and carriage return have no escape that is valid
/// in both JSON and Rust and are rejected.
pub fn render_entry(entry: &NameEntry<'_>) -> Result<String> {
    if entry.name.chars().any(needs_unicode_escape) {
        return Err(GenError::InvalidName {
            code: entry.code.to_string(),
            name: entry.name.to_string(),
        });
    }
    Ok(format!(
        "({}, \"{}\"),",
        crate::json::quote(entry.name)?,
        entry.code
    ))
}

fn needs_unicode_escape(c: char) -> bool {
    ('\u{0}'..='\u{1f}').contains(&c) && !matches!(c, '\t' | '\n' | '\r')
}

/// Render the complete module for `countries`.
pub fn render(countries: &[Country], layout: Layout) -> Result<String> {
    let entries = countries::entries(countries);

    let mut out = String::from(layout.header());
    for entry in &entries {
        out.push_str(layout.indent());
        out.push_str(&render_entry(entry)?);
        out.push('\n');
    }
    out.push_str(layout.footer());

    tracing::debug!(
        layout = %layout,
        countries = countries.len(),
        entries = entries.len(),
        bytes = out.len(),
        "Rendered lookup module"
    );
    Ok(out)
}
