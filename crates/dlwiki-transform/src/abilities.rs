//! Ability, co-ability and ability limited group transforms.

use dlwiki_model::{ElementType, FieldMap, RawRow, RecordStore, ROW_INDEX, roman_numeral};

use crate::context::{Scratch, TransformContext};
use crate::data_utils::{EDIT_THIS, copy_field, field, fill, set};
use crate::error::Result;

pub fn limited_group(
    row: &RawRow,
    store: &mut RecordStore,
    _scratch: &mut Scratch,
    ctx: &TransformContext,
) -> Result<()> {
    let mut record = FieldMap::new();
    for (key, value) in row {
        record.insert(key.trim_matches('_').to_string(), value.clone());
    }
    let text = fill(
        &ctx.label(field(row, "_AbilityLimitedText")?),
        &[("ability_limit0", field(row, "_MaxLimitedValue")?)],
    );
    set(&mut record, "AbilityLimitedText", text);
    store.push_fields(None, record);
    Ok(())
}

/// Collector pass: shift groups are read before the ability rows that
/// reference them.
pub fn collect_shift_groups(
    row: &RawRow,
    _store: &mut RecordStore,
    scratch: &mut Scratch,
    _ctx: &TransformContext,
) -> Result<()> {
    scratch
        .shift_groups
        .insert(field(row, ROW_INDEX)?.to_string(), row.clone());
    Ok(())
}

pub fn ability(
    row: &RawRow,
    store: &mut RecordStore,
    scratch: &mut Scratch,
    ctx: &TransformContext,
) -> Result<()> {
    let mut record = FieldMap::new();
    let own_id = field(row, ROW_INDEX)?;
    set(&mut record, "Id", own_id);
    copy_field(&mut record, row, "PartyPowerWeight")?;
    set(&mut record, "GenericName", "");

    // An ability's tier is its slot position within its shift group;
    // ids that name no group carry the tier directly.
    let shift_group_id = field(row, "_ShiftGroupId")?;
    let shift_value = match scratch.shift_groups.get(shift_group_id) {
        Some(group) => {
            let levels: usize = group
                .get("_AmuletEffectMaxLevel")
                .and_then(|v| v.parse().ok())
                .unwrap_or(0);
            (1..=levels)
                .find(|i| {
                    group
                        .get(&format!("_Level{i}"))
                        .is_some_and(|slot| slot == own_id)
                })
                .unwrap_or(0)
        }
        None => shift_group_id.parse().unwrap_or(0),
    };

    let up_value = field(row, "_AbilityType1UpValue")?;
    let ability_value = if up_value == "0" { EDIT_THIS } else { up_value };
    let name = fill(
        &ctx.label(field(row, "_Name")?),
        &[
            ("ability_shift0", roman_numeral(shift_value).unwrap_or("")),
            ("ability_val0", ability_value),
        ],
    );
    set(&mut record, "Name", name.clone());

    // _ElementalType is unreliable; prefer the "(Element)" prefix of the
    // just-formatted name when the details template wants an owner.
    let details_label = ctx.label(field(row, "_Details")?);
    let element = if details_label.contains("{element_owner}") && name.contains(')') {
        owner_element(&name).unwrap_or_default().to_string()
    } else {
        ElementType::decode(row.get("_ElementalType").map(String::as_str)).to_string()
    };
    let details = fill(
        &details_label,
        &[
            ("ability_cond0", field(row, "_ConditionValue")?),
            ("ability_val0", ability_value),
            ("element_owner", &element),
        ],
    );
    set(&mut record, "Details", details);

    copy_field(&mut record, row, "AbilityIconName")?;
    set(&mut record, "AbilityGroup", field(row, "_ViewAbilityGroupId1")?);
    copy_field(&mut record, row, "AbilityLimitedGroupId1")?;
    copy_field(&mut record, row, "AbilityLimitedGroupId2")?;
    copy_field(&mut record, row, "AbilityLimitedGroupId3")?;

    store.push_fields(Some(name), record);
    Ok(())
}

pub fn ex_ability(
    row: &RawRow,
    store: &mut RecordStore,
    _scratch: &mut Scratch,
    ctx: &TransformContext,
) -> Result<()> {
    let mut record = FieldMap::new();
    set(&mut record, "Id", field(row, ROW_INDEX)?);
    let name = ctx.label(field(row, "_Name")?);
    set(&mut record, "Name", name.clone());
    // The last word is usually a +n% or tier suffix; the rest is the
    // generic name.
    let generic = match name.rfind(' ') {
        Some(split) => &name[..split],
        None => name.as_str(),
    };
    set(&mut record, "GenericName", generic);
    let details = fill(
        &ctx.label(field(row, "_Details")?),
        &[("value1", field(row, "_AbilityType1UpValue0")?)],
    );
    set(&mut record, "Details", details);
    copy_field(&mut record, row, "AbilityIconName")?;
    copy_field(&mut record, row, "Category")?;
    copy_field(&mut record, row, "PartyPowerWeight")?;

    store.push_fields(Some(name), record);
    Ok(())
}

fn owner_element(name: &str) -> Option<&str> {
    let end = name.find(')')?;
    name.get(1..end)
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::testing::{context, row};

    fn ability_row(pairs: &[(&str, &str)]) -> RawRow {
        let mut base = row(&[
            ("_Id", "118"),
            ("_PartyPowerWeight", "80"),
            ("_ShiftGroupId", "0"),
            ("_AbilityType1UpValue", "25"),
            ("_Name", "ABILITY_NAME"),
            ("_Details", "ABILITY_DETAIL"),
            ("_ElementalType", "1"),
            ("_ConditionValue", "30"),
            ("_AbilityIconName", "Icon_Ability"),
            ("_ViewAbilityGroupId1", "7"),
            ("_AbilityLimitedGroupId1", "0"),
            ("_AbilityLimitedGroupId2", "0"),
            ("_AbilityLimitedGroupId3", "0"),
        ]);
        for (k, v) in pairs {
            base.insert(k.to_string(), v.to_string());
        }
        base
    }

    #[test]
    fn shift_value_comes_from_group_slot_position() {
        let ctx = context(&[("ABILITY_NAME", "Stamina {ability_shift0}")]);
        let mut scratch = Scratch::default();
        let mut store = RecordStore::new();

        collect_shift_groups(
            &row(&[
                ("_Id", "9"),
                ("_AmuletEffectMaxLevel", "3"),
                ("_Level1", "117"),
                ("_Level2", "118"),
                ("_Level3", "119"),
            ]),
            &mut store,
            &mut scratch,
            &ctx,
        )
        .unwrap();

        ability(
            &ability_row(&[("_ShiftGroupId", "9")]),
            &mut store,
            &mut scratch,
            &ctx,
        )
        .unwrap();

        let entry = store.entries().next().unwrap();
        assert_eq!(entry.display_name.as_deref(), Some("Stamina II"));
    }

    #[test]
    fn unknown_shift_group_uses_the_id_as_tier() {
        let ctx = context(&[("ABILITY_NAME", "Stamina {ability_shift0}")]);
        let mut scratch = Scratch::default();
        let mut store = RecordStore::new();
        ability(
            &ability_row(&[("_ShiftGroupId", "3")]),
            &mut store,
            &mut scratch,
            &ctx,
        )
        .unwrap();
        let entry = store.entries().next().unwrap();
        assert_eq!(entry.display_name.as_deref(), Some("Stamina III"));
    }

    #[test]
    fn zero_up_value_leaves_an_edit_marker() {
        let ctx = context(&[("ABILITY_NAME", "Strength +{ability_val0}%")]);
        let mut scratch = Scratch::default();
        let mut store = RecordStore::new();
        ability(
            &ability_row(&[("_AbilityType1UpValue", "0")]),
            &mut store,
            &mut scratch,
            &ctx,
        )
        .unwrap();
        let entry = store.entries().next().unwrap();
        assert_eq!(entry.display_name.as_deref(), Some("Strength +<EDIT_THIS>%"));
    }

    #[test]
    fn element_owner_extracted_from_formatted_name() {
        let ctx = context(&[
            ("ABILITY_NAME", "(Flame) Resistance"),
            ("ABILITY_DETAIL", "Shields {element_owner} allies"),
        ]);
        let mut scratch = Scratch::default();
        let mut store = RecordStore::new();
        // _ElementalType deliberately disagrees with the name prefix.
        ability(
            &ability_row(&[("_ElementalType", "2")]),
            &mut store,
            &mut scratch,
            &ctx,
        )
        .unwrap();
        let entry = store.entries().next().unwrap();
        let fields = entry.body.fields().unwrap();
        assert_eq!(fields.get("Details").unwrap(), "Shields Flame allies");
    }

    #[test]
    fn element_owner_falls_back_to_the_elemental_code() {
        let ctx = context(&[
            ("ABILITY_NAME", "Resistance"),
            ("ABILITY_DETAIL", "Shields {element_owner} allies"),
        ]);
        let mut scratch = Scratch::default();
        let mut store = RecordStore::new();
        ability(&ability_row(&[]), &mut store, &mut scratch, &ctx).unwrap();
        let entry = store.entries().next().unwrap();
        let fields = entry.body.fields().unwrap();
        assert_eq!(fields.get("Details").unwrap(), "Shields Flame allies");
    }

    #[test]
    fn limited_group_strips_key_underscores() {
        let ctx = context(&[("LIMIT_TEXT", "Cap {ability_limit0}%")]);
        let mut scratch = Scratch::default();
        let mut store = RecordStore::new();
        limited_group(
            &row(&[
                ("_Id", "1"),
                ("_IsEffectMix", "0"),
                ("_MaxLimitedValue", "15"),
                ("_AbilityLimitedText", "LIMIT_TEXT"),
            ]),
            &mut store,
            &mut scratch,
            &ctx,
        )
        .unwrap();
        let entry = store.entries().next().unwrap();
        assert!(entry.display_name.is_none());
        let fields = entry.body.fields().unwrap();
        assert_eq!(fields.get("Id").unwrap(), "1");
        assert_eq!(fields.get("IsEffectMix").unwrap(), "0");
        assert_eq!(fields.get("AbilityLimitedText").unwrap(), "Cap 15%");
    }

    #[test]
    fn co_ability_generic_name_drops_the_last_word() {
        let ctx = context(&[
            ("EX_NAME", "Dragon Haste +15%"),
            ("EX_DETAIL", "Increases dragon gauge fill rate by {value1}%"),
        ]);
        let mut scratch = Scratch::default();
        let mut store = RecordStore::new();
        ex_ability(
            &row(&[
                ("_Id", "102"),
                ("_Name", "EX_NAME"),
                ("_Details", "EX_DETAIL"),
                ("_AbilityType1UpValue0", "15"),
                ("_AbilityIconName", "Icon_Ex"),
                ("_Category", "14"),
                ("_PartyPowerWeight", "100"),
            ]),
            &mut store,
            &mut scratch,
            &ctx,
        )
        .unwrap();
        let entry = store.entries().next().unwrap();
        let fields = entry.body.fields().unwrap();
        assert_eq!(fields.get("GenericName").unwrap(), "Dragon Haste");
        assert_eq!(
            fields.get("Details").unwrap(),
            "Increases dragon gauge fill rate by 15%"
        );
    }
}
