//! The three wikitext output shapes.
//!
//! Rendering is pure: the same finished record always serializes to
//! byte-identical text.

use dlwiki_model::{Entry, FieldMap, Layout, OrderingDirectives, RecordBody, RecordStore};

/// Separator line framing named entries in block output.
pub const ENTRY_SEPARATOR: &str = "\n=============================\n";

/// Render every accumulated entry of a category in append order.
pub fn render_store(
    store: &RecordStore,
    template: &str,
    layout: Layout,
    ordering: &OrderingDirectives,
) -> String {
    store
        .entries()
        .map(|entry| render_entry(entry, template, layout, ordering))
        .collect()
}

/// Render one entry under the category's fixed layout.
pub fn render_entry(
    entry: &Entry,
    template: &str,
    layout: Layout,
    ordering: &OrderingDirectives,
) -> String {
    match (layout, &entry.body) {
        (Layout::Block, RecordBody::Fields(fields)) => match &entry.display_name {
            Some(name) => format!(
                "{name}{ENTRY_SEPARATOR}{}{ENTRY_SEPARATOR}",
                block(template, fields, ordering.get(template), "\n|")
            ),
            None => format!("{}\n", block(template, fields, ordering.get(template), "|")),
        },
        (Layout::Block | Layout::PositionalRow, body) => {
            let values: Vec<&str> = body.values().collect();
            format!("{{{{{template}|{}}}}}\n", values.join("|"))
        }
        (Layout::TableRow, body) => {
            let values: Vec<&str> = body.values().collect();
            format!("|-\n| {}\n", values.join(" || "))
        }
    }
}

/// `{{Template<delim>f1=v1<delim>f2=v2...}}`, honoring an ordering
/// directive when present (directive order wins, unlisted fields are
/// omitted, listed-but-absent fields are skipped).
fn block(template: &str, fields: &FieldMap, ordering: Option<&[String]>, delim: &str) -> String {
    let assignments: Vec<String> = match ordering {
        Some(keys) => keys
            .iter()
            .filter_map(|key| fields.get(key).map(|value| format!("{key}={value}")))
            .collect(),
        None => fields
            .iter()
            .map(|(key, value)| format!("{key}={value}"))
            .collect(),
    };
    let mut text = format!("{{{{{template}{delim}{}", assignments.join(delim));
    if delim.starts_with('\n') {
        text.push('\n');
    }
    text.push_str("}}");
    text
}
