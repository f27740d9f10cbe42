//! Reference index construction.
//!
//! Auxiliary tables are collapsed once at startup into id-keyed maps
//! consumed read-only by the category transforms.

use std::collections::HashMap;

use dlwiki_model::{PLACEHOLDER_ID, RawRow};

/// A prebuilt mapping from an identifier to either a single value or a
/// whole row.
#[derive(Debug, Clone)]
pub enum TableIndex {
    Values(HashMap<String, String>),
    Rows(HashMap<String, RawRow>),
}

impl TableIndex {
    /// The value map, when this index carries single values.
    pub fn into_values(self) -> Option<HashMap<String, String>> {
        match self {
            TableIndex::Values(map) => Some(map),
            TableIndex::Rows(_) => None,
        }
    }

    pub fn into_rows(self) -> Option<HashMap<String, RawRow>> {
        match self {
            TableIndex::Rows(map) => Some(map),
            TableIndex::Values(_) => None,
        }
    }
}

/// Build a reference index over `rows`.
///
/// The index field defaults to the first column. Two-column sources,
/// and any source with an explicit `value_field`, collapse to a direct
/// key→value map; wider sources map the key to the whole row. Rows
/// whose index value is the placeholder sentinel are excluded.
pub fn build_index(
    rows: &[RawRow],
    index_field: Option<&str>,
    value_field: Option<&str>,
) -> TableIndex {
    let Some(first) = rows.first() else {
        return TableIndex::Values(HashMap::new());
    };
    let index_field = index_field
        .or_else(|| first.keys().next().map(String::as_str))
        .unwrap_or_default()
        .to_string();
    // Two-column sources collapse to the non-index column.
    let value_field = value_field.map(str::to_string).or_else(|| {
        (first.len() == 2)
            .then(|| first.keys().nth(1).cloned())
            .flatten()
    });

    match value_field {
        Some(value_field) => TableIndex::Values(
            rows.iter()
                .filter_map(|row| {
                    let key = row.get(&index_field)?;
                    (key != PLACEHOLDER_ID)
                        .then(|| Some((key.clone(), row.get(&value_field)?.clone())))
                        .flatten()
                })
                .collect(),
        ),
        None => TableIndex::Rows(
            rows.iter()
                .filter_map(|row| {
                    let key = row.get(&index_field)?;
                    (key != PLACEHOLDER_ID).then(|| (key.clone(), row.clone()))
                })
                .collect(),
        ),
    }
}
