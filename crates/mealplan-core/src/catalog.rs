//! Fixed option lists offered by the wizard.
//!
//! Weekdays, delivery locations and time slots are configuration, not logic:
//! each entry pairs a stable identifier (stored in the plan) with the label
//! shown on screen. [`Catalog::default`] holds the lists in production use and
//! [`Catalog::from_json_file`] loads an alternative set.

use std::{collections::HashSet, fs, path::Path};

use serde::{Deserialize, Serialize};

use crate::error::{Result, WizardError};

/// One selectable option.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogEntry {
    pub id: String,
    pub label: String,
}

impl CatalogEntry {
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
        }
    }

    /// Entry whose identifier is also its label.
    pub fn plain(value: impl Into<String>) -> Self {
        let value = value.into();
        Self {
            id: value.clone(),
            label: value,
        }
    }
}

/// The option lists for every selection step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    pub weekdays: Vec<CatalogEntry>,
    pub locations: Vec<CatalogEntry>,
    pub time_slots: Vec<CatalogEntry>,
}

impl Default for Catalog {
    fn default() -> Self {
        Self {
            weekdays: vec![
                CatalogEntry::new("monday", "Lundi"),
                CatalogEntry::new("tuesday", "Mardi"),
                CatalogEntry::new("wednesday", "Mercredi"),
                CatalogEntry::new("thursday", "Jeudi"),
                CatalogEntry::new("friday", "Vendredi"),
            ],
            locations: vec![CatalogEntry::plain("Epitech")],
            time_slots: vec![
                CatalogEntry::plain("12:00 - 13:00"),
                CatalogEntry::plain("13:00 - 14:00"),
                CatalogEntry::plain("14:00 - 15:00"),
            ],
        }
    }
}

impl Catalog {
    /// Reads and validates a catalog from a JSON file.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path).map_err(|e| WizardError::FileSystem {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::from_json(&raw)
    }

    /// Parses and validates a catalog from a JSON string.
    pub fn from_json(raw: &str) -> Result<Self> {
        let catalog: Catalog = serde_json::from_str(raw)?;
        catalog.validate()?;
        Ok(catalog)
    }

    /// Checks that every list is non-empty and identifiers are unique and
    /// non-blank within a list.
    pub fn validate(&self) -> Result<()> {
        for (field, entries) in [
            ("weekdays", &self.weekdays),
            ("locations", &self.locations),
            ("time_slots", &self.time_slots),
        ] {
            if entries.is_empty() {
                return Err(WizardError::invalid_input(field).with_reason("list is empty"));
            }
            let mut seen = HashSet::new();
            for entry in entries {
                if entry.id.trim().is_empty() {
                    return Err(WizardError::invalid_input(field).with_reason("blank identifier"));
                }
                if !seen.insert(entry.id.as_str()) {
                    return Err(WizardError::invalid_input(field)
                        .with_reason(format!("duplicate identifier '{}'", entry.id)));
                }
            }
        }
        Ok(())
    }

    /// Label for a weekday identifier, falling back to the identifier.
    pub fn weekday_label<'a>(&'a self, id: &'a str) -> &'a str {
        label_of(&self.weekdays, id)
    }

    /// Label for a location identifier, falling back to the identifier.
    pub fn location_label<'a>(&'a self, id: &'a str) -> &'a str {
        label_of(&self.locations, id)
    }

    /// Label for a time slot identifier, falling back to the identifier.
    pub fn time_slot_label<'a>(&'a self, id: &'a str) -> &'a str {
        label_of(&self.time_slots, id)
    }

    /// Weekday labels for the given identifiers, in catalog order.
    pub fn weekday_labels<'a, I>(&'a self, ids: I) -> Vec<&'a str>
    where
        I: IntoIterator<Item = &'a String>,
    {
        let ids: HashSet<&str> = ids.into_iter().map(String::as_str).collect();
        self.weekdays
            .iter()
            .filter(|e| ids.contains(e.id.as_str()))
            .map(|e| e.label.as_str())
            .collect()
    }

    /// Weekday identifiers sorted into catalog order. Identifiers the
    /// catalog does not know keep their relative order at the end.
    pub fn weekday_order<'a, I>(&self, ids: I) -> Vec<String>
    where
        I: IntoIterator<Item = &'a String>,
    {
        let mut ids: Vec<&String> = ids.into_iter().collect();
        ids.sort_by_key(|id| {
            self.weekdays
                .iter()
                .position(|e| &e.id == *id)
                .unwrap_or(usize::MAX)
        });
        ids.into_iter().cloned().collect()
    }
}

fn label_of<'a>(entries: &'a [CatalogEntry], id: &'a str) -> &'a str {
    entries
        .iter()
        .find(|e| e.id == id)
        .map(|e| e.label.as_str())
        .unwrap_or(id)
}

/// Resolves user input against a list of entries.
///
/// Accepts a 1-based position, an identifier or a label (case-insensitive).
pub(crate) fn resolve<'a>(
    entries: &'a [CatalogEntry],
    field: &str,
    input: &str,
) -> Result<&'a CatalogEntry> {
    let input = input.trim();
    if let Ok(n) = input.parse::<usize>() {
        if let Some(entry) = n.checked_sub(1).and_then(|i| entries.get(i)) {
            return Ok(entry);
        }
    }
    entries
        .iter()
        .find(|e| e.id.eq_ignore_ascii_case(input) || e.label.eq_ignore_ascii_case(input))
        .ok_or_else(|| WizardError::UnknownOption {
            field: field.to_string(),
            value: input.to_string(),
        })
}
