//! Single-choice selection shared by the location and time slot widgets.

use crate::{
    catalog::{resolve, CatalogEntry},
    error::Result,
};

/// One value chosen out of a fixed list; choosing again replaces it.
#[derive(Debug, Clone)]
pub struct SingleChoice {
    field: &'static str,
    entries: Vec<CatalogEntry>,
    chosen: Option<String>,
}

impl SingleChoice {
    /// Creates the choice, keeping `initial` only if it names an entry.
    pub fn new(field: &'static str, entries: Vec<CatalogEntry>, initial: Option<String>) -> Self {
        let chosen = initial.filter(|id| entries.iter().any(|e| &e.id == id));
        Self {
            field,
            entries,
            chosen,
        }
    }

    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    pub fn chosen(&self) -> Option<&str> {
        self.chosen.as_deref()
    }

    pub fn is_chosen(&self, entry: &CatalogEntry) -> bool {
        self.chosen.as_deref() == Some(entry.id.as_str())
    }

    /// Chooses the entry matching `input` (position, identifier or label).
    pub fn choose(&mut self, input: &str) -> Result<()> {
        let entry = resolve(&self.entries, self.field, input)?;
        self.chosen = Some(entry.id.clone());
        Ok(())
    }
}
