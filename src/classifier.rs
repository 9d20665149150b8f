//! Classifies kernel module paths and merges the results into an [`IconTable`].
//!
//! Matching is best effort: a path that no rule covers is skipped without a
//! diagnostic. The [`Summary`] returned by [`Classifier::process`] counts what
//! happened so callers can report it if they want to.

use std::io::BufRead;

use log::{debug, trace};

use crate::rules;
use crate::table::IconTable;

/// Every module path is expected to start with this
pub const KERNEL_PREFIX: &str = "kernel/";

/// Module file names end with this, possibly followed by a compression suffix
const MODULE_SUFFIX: &str = ".ko";

/// A module path that matched a rule
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classification<'a> {
    pub module: &'a str,
    pub icon: &'static str,
}

/// Counts collected over one pass
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Summary {
    pub lines: usize,
    pub matched: usize,
    pub unmatched: usize,
    /// Lines that did not start with `kernel/` and were stripped anyway
    pub unprefixed: usize,
    /// Matched lines that inserted an entry or changed its icon
    pub changed: usize,
}

/// Drop the `kernel/` prefix.
///
/// The prefix is not checked: the first seven characters go regardless, and a
/// shorter path becomes empty.
pub fn strip_kernel_prefix(path: &str) -> &str {
    match path.char_indices().nth(KERNEL_PREFIX.chars().count()) {
        Some((idx, _)) => &path[idx..],
        None => "",
    }
}

/// Final path segment, cut at the first `.ko`.
///
/// `usbcore.ko.xz` becomes `usbcore`. Without `.ko` the segment is returned
/// whole.
pub fn module_name(path: &str) -> &str {
    let file_name = match path.rfind('/') {
        Some(idx) => &path[idx + 1..],
        None => path,
    };

    match file_name.find(MODULE_SUFFIX) {
        Some(idx) => &file_name[..idx],
        None => file_name,
    }
}

/// Classify a full `kernel/...` module path
pub fn classify(path: &str) -> Option<Classification<'_>> {
    let stripped = strip_kernel_prefix(path);
    let icon = rules::match_rule(stripped)?;
    Some(Classification {
        module: module_name(stripped),
        icon,
    })
}

/// Applies classifications to an icon table
#[derive(Debug, Default)]
pub struct Classifier {
    summary: Summary,
}

impl Classifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Classify one input line and upsert the table on a match
    pub fn process_line(&mut self, table: &mut IconTable, line: &str) -> Option<&'static str> {
        let path = line.trim_end();
        self.summary.lines += 1;

        if !path.starts_with(KERNEL_PREFIX) {
            self.summary.unprefixed += 1;
        }

        let Some(found) = classify(path) else {
            trace!("No rule for {:?}", path);
            self.summary.unmatched += 1;
            return None;
        };

        self.summary.matched += 1;
        let previous = table.upsert(found.module, found.icon);
        if previous.as_deref() != Some(found.icon) {
            debug!("{} -> {} (was {:?})", found.module, found.icon, previous);
            self.summary.changed += 1;
        }
        Some(found.icon)
    }

    /// Classify every line of a module list
    pub fn process<R: BufRead>(&mut self, table: &mut IconTable, reader: R) -> std::io::Result<Summary> {
        for line in reader.lines() {
            self.process_line(table, &line?);
        }
        Ok(self.summary)
    }
}
