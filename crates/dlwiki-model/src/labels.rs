use std::collections::HashMap;

/// Language tag of the table every lookup falls back to.
pub const PRIMARY_LANGUAGE: &str = "en";
/// Optional second language; its absence never fails a run.
pub const SECONDARY_LANGUAGE: &str = "jp";

pub const EMBLEM_NAME_PREFIX: &str = "EMBLEM_NAME_";
pub const EMBLEM_PHONETIC_PREFIX: &str = "EMBLEM_PHONETIC_";
pub const MATERIAL_NAME_PREFIX: &str = "MATERIAL_NAME_";
pub const EVENT_RAID_ITEM_PREFIX: &str = "EV_RAID_ITEM_NAME_";

/// Localized display strings, one table per language tag.
///
/// Built once at startup and read-only thereafter. Lookups never fail:
/// a missing language falls back to [`PRIMARY_LANGUAGE`] and a missing
/// key degrades to the empty string, because upstream source data is
/// known to have gaps.
#[derive(Debug, Clone, Default)]
pub struct LabelIndex {
    tables: HashMap<String, HashMap<String, String>>,
}

impl LabelIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the label table for a language tag.
    pub fn insert_language(&mut self, lang: impl Into<String>, table: HashMap<String, String>) {
        self.tables.insert(lang.into(), table);
    }

    pub fn has_language(&self, lang: &str) -> bool {
        self.tables.contains_key(lang)
    }

    /// Look up `key` in the table for `lang`.
    ///
    /// Literal `\n` escape sequences in the stored text are replaced by
    /// a single space. Missing keys resolve to the empty string.
    pub fn resolve(&self, key: &str, lang: &str) -> String {
        let table = self
            .tables
            .get(lang)
            .or_else(|| self.tables.get(PRIMARY_LANGUAGE));
        match table.and_then(|t| t.get(key)) {
            Some(text) => text.replace("\\n", " "),
            None => String::new(),
        }
    }

    /// Look up `key` in the primary language.
    pub fn get(&self, key: &str) -> String {
        self.resolve(key, PRIMARY_LANGUAGE)
    }

    /// Ruby-annotated Japanese epithet for an emblem id, or the empty
    /// string when no secondary language table is loaded.
    pub fn jp_epithet(&self, emblem_id: &str) -> String {
        if !self.has_language(SECONDARY_LANGUAGE) {
            return String::new();
        }
        let name = self.resolve(&format!("{EMBLEM_NAME_PREFIX}{emblem_id}"), SECONDARY_LANGUAGE);
        let phonetic = self.resolve(
            &format!("{EMBLEM_PHONETIC_PREFIX}{emblem_id}"),
            SECONDARY_LANGUAGE,
        );
        format!("{{{{Ruby|{name}|{phonetic}}}}}")
    }
}
