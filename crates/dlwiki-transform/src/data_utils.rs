//! Small helpers shared by the category transforms.

use dlwiki_model::{FieldMap, RawRow};

use crate::error::{Result, TransformError};

/// Marker emitted where a value cannot be computed from the source data
/// and a wiki editor must fill it in.
pub const EDIT_THIS: &str = "<EDIT_THIS>";

/// Required field access; a miss is fatal for the category.
pub fn field<'a>(row: &'a RawRow, name: &str) -> Result<&'a str> {
    row.get(name)
        .map(String::as_str)
        .ok_or_else(|| TransformError::MissingField {
            field: name.to_string(),
        })
}

pub fn set(record: &mut FieldMap, key: impl Into<String>, value: impl Into<String>) {
    record.insert(key.into(), value.into());
}

/// Copy `_<name>` from the raw row into the record as `<name>`.
pub fn copy_field(record: &mut FieldMap, row: &RawRow, name: &str) -> Result<()> {
    let value = field(row, &format!("_{name}"))?;
    record.insert(name.to_string(), value.to_string());
    Ok(())
}

/// Substitute `{name}` placeholder tokens in a localized template.
/// Tokens outside the supplied set pass through unchanged.
pub fn fill(template: &str, substitutions: &[(&str, &str)]) -> String {
    let mut text = template.to_string();
    for (name, value) in substitutions {
        text = text.replace(&format!("{{{name}}}"), value);
    }
    text
}
