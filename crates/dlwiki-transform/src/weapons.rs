//! Weapon transforms: base weapon pass plus crafting tree and recipe
//! enrichment.

use dlwiki_model::{
    ElementType, FieldMap, MATERIAL_NAME_PREFIX, RawRow, RecordStore, ROW_INDEX,
    SECONDARY_LANGUAGE, WeaponType,
};

use crate::context::{Scratch, TransformContext};
use crate::data_utils::{copy_field, field, set};
use crate::error::{Result, TransformError};

const CRAFT_MATERIAL_SLOTS: usize = 5;

pub fn weapon(
    row: &RawRow,
    store: &mut RecordStore,
    _scratch: &mut Scratch,
    ctx: &TransformContext,
) -> Result<()> {
    let mut record = FieldMap::new();
    set(&mut record, "Id", field(row, ROW_INDEX)?);
    copy_field(&mut record, row, "BaseId")?;
    copy_field(&mut record, row, "FormId")?;
    let name = ctx.label(field(row, "_Name")?);
    set(&mut record, "WeaponName", name.clone());
    set(
        &mut record,
        "WeaponNameJP",
        ctx.label_in(field(row, "_Name")?, SECONDARY_LANGUAGE),
    );
    set(
        &mut record,
        "Type",
        WeaponType::decode(row.get("_Type").map(String::as_str)),
    );
    copy_field(&mut record, row, "Rarity")?;
    set(
        &mut record,
        "ElementalType",
        ElementType::decode(row.get("_ElementalType").map(String::as_str)),
    );
    set(&mut record, "Obtain", "");
    set(&mut record, "ReleaseDate", "");
    set(&mut record, "Availability", "");
    copy_field(&mut record, row, "MinHp")?;
    copy_field(&mut record, row, "MaxHp")?;
    copy_field(&mut record, row, "MinAtk")?;
    copy_field(&mut record, row, "MaxAtk")?;
    set(&mut record, "VariationId", "1");
    // Not every weapon carries a skill.
    set(
        &mut record,
        "SkillName",
        ctx.skill_name(field(row, "_Skill")?).unwrap_or_default(),
    );
    copy_field(&mut record, row, "Abilities11")?;
    copy_field(&mut record, row, "Abilities21")?;
    set(&mut record, "IsPlayable", "1");
    set(&mut record, "FlavorText", ctx.label(field(row, "_Text")?));
    copy_field(&mut record, row, "SellCoin")?;
    copy_field(&mut record, row, "SellDewPoint")?;

    store.push_fields(Some(name), record);
    Ok(())
}

/// Enrichment: crafting tree position, linked by the tree row's weapon
/// id. A node for an unknown weapon is a data integrity violation.
pub fn craft_tree(
    row: &RawRow,
    store: &mut RecordStore,
    _scratch: &mut Scratch,
    _ctx: &TransformContext,
) -> Result<()> {
    let weapon_id = field(row, "_CraftWeaponId")?;
    let record =
        store
            .update_fields("Id", weapon_id)
            .ok_or_else(|| TransformError::LinkTargetNotFound {
                key: "Id",
                value: weapon_id.to_string(),
            })?;
    set(record, "CraftNodeId", field(row, "_CraftNodeId")?);
    set(record, "ParentCraftNodeId", field(row, "_ParentCraftNodeId")?);
    set(record, "CraftGroupId", field(row, "_CraftGroupId")?);
    Ok(())
}

/// Enrichment: crafting recipe, linked by weapon id.
pub fn craft_recipe(
    row: &RawRow,
    store: &mut RecordStore,
    _scratch: &mut Scratch,
    ctx: &TransformContext,
) -> Result<()> {
    let weapon_id = field(row, ROW_INDEX)?;
    let record =
        store
            .update_fields("Id", weapon_id)
            .ok_or_else(|| TransformError::LinkTargetNotFound {
                key: "Id",
                value: weapon_id.to_string(),
            })?;
    set(record, "FortCraftLevel", field(row, "_FortCraftLevel")?);
    set(record, "AssembleCoin", field(row, "_AssembleCoin")?);
    set(record, "DisassembleCoin", field(row, "_DisassembleCoin")?);
    set(record, "MainWeaponId", field(row, "_MainWeaponId")?);
    set(record, "MainWeaponQuantity", field(row, "_MainWeaponQuantity")?);
    for slot in 1..=CRAFT_MATERIAL_SLOTS {
        set(
            record,
            format!("CraftMaterialType{slot}"),
            field(row, &format!("_CraftEntityType{slot}"))?,
        );
        let material_id = field(row, &format!("_CraftEntityId{slot}"))?;
        set(
            record,
            format!("CraftMaterial{slot}"),
            ctx.label(&format!("{MATERIAL_NAME_PREFIX}{material_id}")),
        );
        set(
            record,
            format!("CraftMaterialQuantity{slot}"),
            field(row, &format!("_CraftEntityQuantity{slot}"))?,
        );
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::testing::{context, row};

    fn weapon_row() -> RawRow {
        row(&[
            ("_Id", "30129901"),
            ("_BaseId", "301299"),
            ("_FormId", "1"),
            ("_Name", "WEAPON_NAME"),
            ("_Type", "2"),
            ("_Rarity", "5"),
            ("_ElementalType", "0"),
            ("_MinHp", "25"),
            ("_MaxHp", "83"),
            ("_MinAtk", "120"),
            ("_MaxAtk", "400"),
            ("_Skill", "0"),
            ("_Abilities11", "0"),
            ("_Abilities21", "0"),
            ("_Text", "WEAPON_FLAVOR"),
            ("_SellCoin", "8000"),
            ("_SellDewPoint", "0"),
        ])
    }

    #[test]
    fn elementless_weapons_get_an_empty_element() {
        let ctx = context(&[("WEAPON_NAME", "Heroic Blade")]);
        let mut store = RecordStore::new();
        weapon(&weapon_row(), &mut store, &mut Scratch::default(), &ctx).unwrap();

        let fields = store.entries().next().unwrap().body.fields().unwrap().clone();
        assert_eq!(fields.get("Type").unwrap(), "Blade");
        assert_eq!(fields.get("ElementalType").unwrap(), "");
        assert_eq!(fields.get("SkillName").unwrap(), "");
        assert_eq!(fields.get("VariationId").unwrap(), "1");
    }

    #[test]
    fn craft_passes_enrich_the_weapon_record() {
        let ctx = context(&[
            ("WEAPON_NAME", "Heroic Blade"),
            ("MATERIAL_NAME_104002", "Iron Ore"),
        ]);
        let mut store = RecordStore::new();
        let mut scratch = Scratch::default();
        weapon(&weapon_row(), &mut store, &mut scratch, &ctx).unwrap();

        craft_tree(
            &row(&[
                ("_Id", "445"),
                ("_CraftWeaponId", "30129901"),
                ("_CraftNodeId", "445"),
                ("_ParentCraftNodeId", "301"),
                ("_CraftGroupId", "29901"),
            ]),
            &mut store,
            &mut scratch,
            &ctx,
        )
        .unwrap();

        let mut recipe = row(&[
            ("_Id", "30129901"),
            ("_FortCraftLevel", "20"),
            ("_AssembleCoin", "80000"),
            ("_DisassembleCoin", "8000"),
            ("_MainWeaponId", "0"),
            ("_MainWeaponQuantity", "0"),
        ]);
        for slot in 1..=5 {
            recipe.insert(format!("_CraftEntityType{slot}"), "8".to_string());
            recipe.insert(format!("_CraftEntityId{slot}"), "104002".to_string());
            recipe.insert(format!("_CraftEntityQuantity{slot}"), "10".to_string());
        }
        craft_recipe(&recipe, &mut store, &mut scratch, &ctx).unwrap();

        let fields = store.entries().next().unwrap().body.fields().unwrap().clone();
        assert_eq!(fields.get("CraftNodeId").unwrap(), "445");
        assert_eq!(fields.get("FortCraftLevel").unwrap(), "20");
        assert_eq!(fields.get("CraftMaterial3").unwrap(), "Iron Ore");
        assert_eq!(fields.get("CraftMaterialQuantity5").unwrap(), "10");
    }

    #[test]
    fn craft_node_for_unknown_weapon_is_a_link_error() {
        let ctx = context(&[]);
        let mut store = RecordStore::new();
        let err = craft_tree(
            &row(&[
                ("_Id", "1"),
                ("_CraftWeaponId", "999"),
                ("_CraftNodeId", "1"),
                ("_ParentCraftNodeId", "0"),
                ("_CraftGroupId", "1"),
            ]),
            &mut store,
            &mut Scratch::default(),
            &ctx,
        )
        .unwrap_err();
        assert!(matches!(err, TransformError::LinkTargetNotFound { .. }));
    }
}
