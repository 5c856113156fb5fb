//! Option list loading and ordering.
//!
//! The input document is a YAML sequence of `option:` entries:
//!
//! ```yaml
//! - option:
//!     name: file
//!     abbreviation: f
//!     has_arg:
//!       type: required_argument
//! ```
//!
//! `has_arg.type` is a closed enumeration — any other string is a load
//! error, as is an empty abbreviation.

use anyhow::{bail, Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Whether an option takes no value, a mandatory value, or an optional value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum ArgKind {
    #[serde(rename = "no_argument")]
    None,
    #[serde(rename = "required_argument")]
    Required,
    #[serde(rename = "optional_argument")]
    Optional,
}

impl ArgKind {
    /// The `<getopt.h>` symbol used in the long-option table.
    pub fn symbol(self) -> &'static str {
        match self {
            ArgKind::None => "no_argument",
            ArgKind::Required => "required_argument",
            ArgKind::Optional => "optional_argument",
        }
    }

    /// Suffix appended to the short-option string: `f` stays bare,
    /// `f:` takes a value, `f::` may take a value.
    pub fn optstring_suffix(self) -> &'static str {
        match self {
            ArgKind::None => "",
            ArgKind::Required => ":",
            ArgKind::Optional => "::",
        }
    }
}

/// One declared option, immutable after load.
#[derive(Debug, Clone)]
pub struct OptionSpec {
    /// Long option name, e.g. `verbose`.
    pub name: String,
    /// Abbreviation as written in the document. Sorting uses the full
    /// string; only [`OptionSpec::short`] ends up in the generated code.
    pub abbreviation: String,
    /// Short-option character (first character of the abbreviation).
    pub short: char,
    pub kind: ArgKind,
    /// Accepted values for `optional_argument` options. Empty otherwise.
    pub values: Vec<String>,
}

// Wire shape of the YAML document. Unknown fields are ignored, matching
// the loose schema the document format has always had.
#[derive(Debug, Deserialize)]
struct Entry {
    option: RawOption,
}

#[derive(Debug, Deserialize)]
struct RawOption {
    name: String,
    abbreviation: String,
    has_arg: HasArg,
}

#[derive(Debug, Deserialize)]
struct HasArg {
    #[serde(rename = "type")]
    kind: ArgKind,
    #[serde(default)]
    optional_argument: OptionalArgument,
}

#[derive(Debug, Default, Deserialize)]
struct OptionalArgument {
    #[serde(default)]
    values: Vec<String>,
}

/// Read and decode the option list at `path`.
pub fn load(path: &Path) -> Result<Vec<OptionSpec>> {
    let data = fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    parse(&data).with_context(|| format!("invalid option list in {}", path.display()))
}

/// Decode an option list from YAML text.
pub fn parse(yaml: &str) -> Result<Vec<OptionSpec>> {
    let entries: Vec<Entry> = serde_yaml::from_str(yaml).context("cannot decode option list")?;
    entries
        .into_iter()
        .map(|entry| {
            let raw = entry.option;
            let Some(short) = raw.abbreviation.chars().next() else {
                bail!("option '{}': abbreviation must not be empty", raw.name);
            };
            Ok(OptionSpec {
                name: raw.name,
                abbreviation: raw.abbreviation,
                short,
                kind: raw.has_arg.kind,
                values: raw.has_arg.optional_argument.values,
            })
        })
        .collect()
}

/// Sort options by abbreviation for deterministic output.
///
/// Orders on the full abbreviation string, ascending. The sort is stable:
/// options sharing an abbreviation keep their document order.
pub fn sort_options(options: &mut [OptionSpec]) {
    options.sort_by(|a, b| a.abbreviation.cmp(&b.abbreviation));
}
