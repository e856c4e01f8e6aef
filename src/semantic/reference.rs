//! Reference name table loading.
//!
//! The table is an ordered list of (name, gender, popularity) records loaded
//! from a CSV file at startup and immutable afterwards. Row order matters:
//! semantic tie-breaking prefers earlier rows.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use log::warn;
use serde::{Deserialize, Serialize};

use crate::error::{OnomaError, Result};

/// Gender marker attached to a reference name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Gender {
    /// Male.
    M,
    /// Female.
    F,
}

impl Gender {
    /// Parse a gender marker from a CSV field.
    pub fn parse_str(s: &str) -> Result<Self> {
        match s.trim() {
            "M" | "m" => Ok(Gender::M),
            "F" | "f" => Ok(Gender::F),
            other => Err(OnomaError::reference(format!("unknown gender: {other}"))),
        }
    }
}

/// A single reference name record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReferenceName {
    /// The reference name, as written in the table.
    pub name: String,
    /// Gender marker.
    pub gender: Gender,
    /// Popularity rank (lower is more popular).
    pub popularity: u32,
}

/// Ordered, immutable table of reference names.
#[derive(Debug, Clone, Default)]
pub struct ReferenceTable {
    records: Vec<ReferenceName>,
}

impl ReferenceTable {
    /// Create an empty table.
    pub fn new() -> Self {
        ReferenceTable {
            records: Vec::new(),
        }
    }

    /// Create a table from a list of records, preserving order.
    pub fn from_records(records: Vec<ReferenceName>) -> Self {
        ReferenceTable { records }
    }

    /// Number of records in the table.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the table has no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Record at the given table position.
    pub fn get(&self, index: usize) -> Option<&ReferenceName> {
        self.records.get(index)
    }

    /// All records in table order.
    pub fn records(&self) -> &[ReferenceName] {
        &self.records
    }

    /// The name column in table order.
    pub fn names(&self) -> Vec<String> {
        self.records.iter().map(|r| r.name.clone()).collect()
    }

    /// Load a table from a `name,gender,popularity` CSV file with a header
    /// row. Malformed rows are load errors; an absent file is handled by
    /// [`load_or_default`](Self::load_or_default) instead.
    pub fn load_from_csv<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path)?;
        let reader = BufReader::new(file);
        let mut records = Vec::new();

        for (line_num, line) in reader.lines().enumerate() {
            let line = line?;
            if line_num == 0 || line.trim().is_empty() {
                // Header row
                continue;
            }

            let fields: Vec<&str> = line.split(',').collect();
            if fields.len() != 3 {
                return Err(OnomaError::reference(format!(
                    "line {}: expected 3 fields, got {}",
                    line_num + 1,
                    fields.len()
                )));
            }

            let popularity = fields[2].trim().parse::<u32>().map_err(|e| {
                OnomaError::reference(format!("line {}: bad popularity: {e}", line_num + 1))
            })?;

            records.push(ReferenceName {
                name: fields[0].trim().to_string(),
                gender: Gender::parse_str(fields[1])?,
                popularity,
            });
        }

        Ok(ReferenceTable::from_records(records))
    }

    /// Load a table from a CSV file, falling back to the built-in default
    /// records when the file is absent. The fallback is logged as a warning
    /// and never surfaced as an error.
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Self {
        match Self::load_from_csv(&path) {
            Ok(table) => table,
            Err(e) => {
                warn!(
                    "reference name table {} not available ({e}), using fallback data",
                    path.as_ref().display()
                );
                Self::default_names()
            }
        }
    }

    /// Create the built-in fallback table.
    pub fn default_names() -> Self {
        let records = vec![
            ("John", Gender::M, 1),
            ("Mary", Gender::F, 1),
            ("Robert", Gender::M, 2),
            ("Jennifer", Gender::F, 2),
            ("Michael", Gender::M, 3),
            ("Linda", Gender::F, 3),
        ]
        .into_iter()
        .map(|(name, gender, popularity)| ReferenceName {
            name: name.to_string(),
            gender,
            popularity,
        })
        .collect();

        ReferenceTable::from_records(records)
    }
}
