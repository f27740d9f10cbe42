//! Shared transform inputs.
//!
//! Everything a category transform may consult is constructed up front
//! and injected explicitly; nothing here is mutated while transforms
//! run.

use std::collections::HashMap;

use dlwiki_model::{LabelIndex, RawRow};

/// Immutable context shared by every category transform.
#[derive(Debug, Clone, Default)]
pub struct TransformContext {
    labels: LabelIndex,
    /// Skill id → label key of the skill's name.
    skill_names: HashMap<String, String>,
}

impl TransformContext {
    pub fn new(labels: LabelIndex, skill_names: HashMap<String, String>) -> Self {
        Self {
            labels,
            skill_names,
        }
    }

    pub fn labels(&self) -> &LabelIndex {
        &self.labels
    }

    /// Primary-language label for `key`.
    pub fn label(&self, key: &str) -> String {
        self.labels.get(key)
    }

    pub fn label_in(&self, key: &str, lang: &str) -> String {
        self.labels.resolve(key, lang)
    }

    pub fn jp_epithet(&self, emblem_id: &str) -> String {
        self.labels.jp_epithet(emblem_id)
    }

    /// Resolved display name of a skill, `None` when the id is unknown.
    pub fn skill_name(&self, skill_id: &str) -> Option<String> {
        self.skill_names.get(skill_id).map(|key| self.labels.get(key))
    }
}

/// Mutable per-category scratch state, reset between categories.
///
/// Collector passes fill these before the category's primary pass runs.
#[derive(Debug, Default)]
pub struct Scratch {
    /// Ability shift group id → shift group row.
    pub shift_groups: HashMap<String, RawRow>,
    /// Facility asset group id → detail rows, in input order.
    pub plant_details: HashMap<String, Vec<RawRow>>,
}
