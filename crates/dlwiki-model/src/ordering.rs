use std::collections::HashMap;

use serde::Deserialize;

/// Externally supplied field ordering per output template.
///
/// When a template has a directive, block serialization emits exactly
/// the listed fields in the listed order; fields the record lacks are
/// skipped and fields the directive omits are not emitted at all.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(transparent)]
pub struct OrderingDirectives(HashMap<String, Vec<String>>);

impl OrderingDirectives {
    pub fn get(&self, template: &str) -> Option<&[String]> {
        self.0.get(template).map(Vec::as_slice)
    }
}
