//! The category registry.
//!
//! One entry per data category, in emission registration order. Each
//! category names the source tables it reads, the pass applied to each,
//! the output template, and the markup layout. Categories are
//! independent of one another; enrichment passes only reach back into
//! records accumulated earlier for the same category.

use dlwiki_model::{Layout, RawRow, RecordStore};

use crate::context::{Scratch, TransformContext};
use crate::error::Result;
use crate::{
    abilities, adventurers, dragons, emblems, facilities, materials, missions, quests, skills,
    weapons, wyrmprints,
};

/// One source pass: a row from the named table, the category's
/// accumulator, the category's scratch state, and the shared context.
pub type PassFn = fn(&RawRow, &mut RecordStore, &mut Scratch, &TransformContext) -> Result<()>;

pub struct CategorySpec {
    /// Category name; also the source-less output file stem.
    pub name: &'static str,
    /// Output template name, shared by some categories.
    pub template: &'static str,
    pub layout: Layout,
    /// Source tables with their passes, applied in order.
    pub passes: &'static [(&'static str, PassFn)],
}

pub const CATEGORIES: &[CategorySpec] = &[
    CategorySpec {
        name: "AbilityLimitedGroup",
        template: "AbilityLimitedGroup",
        layout: Layout::Block,
        passes: &[("AbilityLimitedGroup", abilities::limited_group)],
    },
    CategorySpec {
        name: "AbilityData",
        template: "Ability",
        layout: Layout::Block,
        passes: &[
            ("AbilityShiftGroup", abilities::collect_shift_groups),
            ("AbilityData", abilities::ability),
        ],
    },
    CategorySpec {
        name: "AmuletData",
        template: "Wyrmprint",
        layout: Layout::Block,
        passes: &[("AmuletData", wyrmprints::wyrmprint)],
    },
    CategorySpec {
        name: "BuildEventItem",
        template: "Material",
        layout: Layout::Block,
        passes: &[("BuildEventItem", materials::material)],
    },
    CategorySpec {
        name: "CharaData",
        template: "Adventurer",
        layout: Layout::Block,
        passes: &[("CharaData", adventurers::adventurer)],
    },
    CategorySpec {
        name: "CollectEventItem",
        template: "Material",
        layout: Layout::Block,
        passes: &[("CollectEventItem", materials::material)],
    },
    CategorySpec {
        name: "SkillData",
        template: "Skill",
        layout: Layout::Block,
        passes: &[("SkillData", skills::skill)],
    },
    CategorySpec {
        name: "DragonData",
        template: "Dragon",
        layout: Layout::Block,
        passes: &[("DragonData", dragons::dragon)],
    },
    CategorySpec {
        name: "ExAbilityData",
        template: "CoAbility",
        layout: Layout::Block,
        passes: &[("ExAbilityData", abilities::ex_ability)],
    },
    CategorySpec {
        name: "EmblemData",
        template: "Epithet",
        layout: Layout::TableRow,
        passes: &[("EmblemData", emblems::emblem)],
    },
    CategorySpec {
        name: "FortPlantData",
        template: "Facility",
        layout: Layout::Block,
        passes: &[
            ("FortPlantDetail", facilities::collect_details),
            ("FortPlantData", facilities::facility),
        ],
    },
    CategorySpec {
        name: "MaterialData",
        template: "Material",
        layout: Layout::Block,
        passes: &[("MaterialData", materials::material)],
    },
    CategorySpec {
        name: "RaidEventItem",
        template: "Material",
        layout: Layout::Block,
        passes: &[("RaidEventItem", materials::material)],
    },
    CategorySpec {
        name: "MissionDailyData",
        template: "EndeavorRow",
        layout: Layout::PositionalRow,
        passes: &[("MissionDailyData", missions::endeavor)],
    },
    CategorySpec {
        name: "MissionPeriodData",
        template: "EndeavorRow",
        layout: Layout::PositionalRow,
        passes: &[("MissionPeriodData", missions::endeavor)],
    },
    CategorySpec {
        name: "MissionNormalData",
        template: "EndeavorRow",
        layout: Layout::PositionalRow,
        passes: &[("MissionNormalData", missions::endeavor)],
    },
    CategorySpec {
        name: "QuestData",
        template: "QuestDisplay",
        layout: Layout::Block,
        passes: &[
            ("QuestData", quests::quest),
            ("QuestRewardData", quests::rewards),
            ("QuestEvent", quests::bonus),
        ],
    },
    CategorySpec {
        name: "WeaponData",
        template: "Weapon",
        layout: Layout::Block,
        passes: &[
            ("WeaponData", weapons::weapon),
            ("WeaponCraftTree", weapons::craft_tree),
            ("WeaponCraftData", weapons::craft_recipe),
        ],
    },
];
