use std::collections::HashMap;

use crate::record::{FieldMap, RecordBody};

/// One accumulated output entry.
///
/// The display name, when present, becomes a section header in the
/// emitted text; lookup-table style categories leave it absent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub display_name: Option<String>,
    pub body: RecordBody,
}

/// Ordered accumulator for one category's output records.
///
/// Entries keep first-seen order, which is also emission order. Later
/// enrichment passes may add or overwrite fields on an entry but never
/// remove it or change its position. Enrichment locates its target
/// through a per-field index built on first use instead of a linear
/// scan; identifier fields are written by the primary pass and never
/// change afterwards, so the index stays valid once built.
#[derive(Debug, Default)]
pub struct RecordStore {
    entries: Vec<Entry>,
    indexes: HashMap<String, FieldIndex>,
}

#[derive(Debug, Default)]
struct FieldIndex {
    by_value: HashMap<String, usize>,
    scanned: usize,
}

impl RecordStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn push(&mut self, display_name: Option<String>, body: RecordBody) {
        self.entries.push(Entry { display_name, body });
    }

    pub fn push_fields(&mut self, display_name: Option<String>, fields: FieldMap) {
        self.push(display_name, RecordBody::Fields(fields));
    }

    pub fn entries(&self) -> impl Iterator<Item = &Entry> {
        self.entries.iter()
    }

    /// Locate the first entry whose `field` equals `value` and return
    /// its fields for in-place enrichment. Returns `None` when no entry
    /// matches; positional entries never match.
    pub fn update_fields(&mut self, field: &str, value: &str) -> Option<&mut FieldMap> {
        let index = self.indexes.entry(field.to_string()).or_default();
        // Extend the index over entries appended since the last lookup.
        for (position, entry) in self.entries.iter().enumerate().skip(index.scanned) {
            if let Some(fields) = entry.body.fields()
                && let Some(keyed) = fields.get(field)
            {
                index.by_value.entry(keyed.clone()).or_insert(position);
            }
        }
        index.scanned = self.entries.len();

        let position = *index.by_value.get(value)?;
        self.entries[position].body.fields_mut()
    }
}
