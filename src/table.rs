//! The persisted module name → icon name table

use std::collections::BTreeMap;
use std::fs::File;
use std::io::{BufReader, Read, Write};
use std::path::Path;

use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};

use crate::error::{Error, Result};
use crate::rules;

/// Indentation of the emitted JSON
const INDENT: &[u8] = b"    ";

/// Icon the GUI falls back to for modules without an entry
pub const FALLBACK_ICON: &str = "module";

/// Module name → icon name, kept sorted by module name
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IconTable {
    entries: BTreeMap<String, String>,
}

impl IconTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load the table from a JSON object of strings
    pub fn load(path: &Path) -> Result<Self> {
        let file = File::open(path).map_err(|source| Error::Read {
            path: path.to_path_buf(),
            source,
        })?;

        Self::from_reader(BufReader::new(file)).map_err(|source| Error::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Parse the table from any JSON source
    pub fn from_reader<R: Read>(reader: R) -> serde_json::Result<Self> {
        let entries = serde_json::from_reader(reader)?;
        Ok(Self { entries })
    }

    /// Parse the table from JSON text
    pub fn from_json(contents: &str) -> serde_json::Result<Self> {
        let entries = serde_json::from_str(contents)?;
        Ok(Self { entries })
    }

    /// Set the icon for a module, returning the icon it replaced
    pub fn upsert(&mut self, module: &str, icon: &str) -> Option<String> {
        self.entries.insert(module.to_string(), icon.to_string())
    }

    pub fn get(&self, module: &str) -> Option<&str> {
        self.entries.get(module).map(String::as_str)
    }

    /// Look up a module the way the hardware view does: loaded module names
    /// use `_` where module file names use `-`.
    pub fn lookup(&self, module: &str) -> Option<&str> {
        self.get(&module.replace('_', "-"))
    }

    /// Entries whose icon none of the prefix rules produces
    pub fn unknown_icons(&self) -> impl Iterator<Item = (&str, &str)> {
        self.iter().filter(|(_, icon)| !rules::is_known_icon(icon))
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Write the table as JSON: sorted keys, four space indentation
    pub fn write_json<W: Write>(&self, writer: W) -> Result<()> {
        let mut ser = Serializer::with_formatter(writer, PrettyFormatter::with_indent(INDENT));
        self.entries.serialize(&mut ser)?;
        Ok(())
    }

    pub fn to_json(&self) -> Result<String> {
        let mut buf = Vec::new();
        self.write_json(&mut buf)?;
        String::from_utf8(buf)
            .map_err(|e| Error::Serialize(<serde_json::Error as serde::ser::Error>::custom(e)))
    }
}
