//! Adventurer (playable character) transform.

use dlwiki_model::{
    EMBLEM_NAME_PREFIX, ElementType, FieldMap, RawRow, RecordStore, ROW_INDEX, SECONDARY_LANGUAGE,
    UnitClass, WeaponType,
};

use crate::context::{Scratch, TransformContext};
use crate::data_utils::{copy_field, field, set};
use crate::error::Result;

pub fn adventurer(
    row: &RawRow,
    store: &mut RecordStore,
    _scratch: &mut Scratch,
    ctx: &TransformContext,
) -> Result<()> {
    let mut record = FieldMap::new();
    set(&mut record, "IdLong", field(row, ROW_INDEX)?);
    set(&mut record, "Id", field(row, "_BaseId")?);
    let name = ctx.label(field(row, "_Name")?);
    set(&mut record, "Name", name.clone());
    let full_name = ctx.label(field(row, "_SecondName")?);
    set(&mut record, "FullName", full_name.clone());
    set(
        &mut record,
        "NameJP",
        ctx.label_in(field(row, "_Name")?, SECONDARY_LANGUAGE),
    );
    let emblem_id = field(row, "_EmblemId")?;
    set(
        &mut record,
        "Title",
        ctx.label(&format!("{EMBLEM_NAME_PREFIX}{emblem_id}")),
    );
    set(&mut record, "TitleJP", ctx.jp_epithet(emblem_id));
    set(&mut record, "Obtain", "");
    set(&mut record, "ReleaseDate", "");
    set(&mut record, "Availability", "");
    set(
        &mut record,
        "WeaponType",
        WeaponType::decode(row.get("_WeaponType").map(String::as_str)),
    );
    copy_field(&mut record, row, "Rarity")?;
    set(&mut record, "Gender", "");
    set(&mut record, "Race", "");
    set(
        &mut record,
        "ElementalType",
        ElementType::decode(row.get("_ElementalType").map(String::as_str)),
    );
    set(
        &mut record,
        "CharaType",
        UnitClass::decode(row.get("_CharaType").map(String::as_str)),
    );
    copy_field(&mut record, row, "VariationId")?;
    for stat in ["Hp", "Atk"] {
        for i in 3..=5 {
            copy_field(&mut record, row, &format!("Min{stat}{i}"))?;
        }
        copy_field(&mut record, row, &format!("Max{stat}"))?;
        for i in 0..=4 {
            copy_field(&mut record, row, &format!("Plus{stat}{i}"))?;
        }
        copy_field(&mut record, row, &format!("McFullBonus{stat}5"))?;
    }
    copy_field(&mut record, row, "MinDef")?;
    copy_field(&mut record, row, "DefCoef")?;
    // Skill slots resolve independently; an unknown skill id leaves
    // that slot out.
    if let Some(skill) = ctx.skill_name(field(row, "_Skill1")?) {
        set(&mut record, "Skill1Name", skill);
    }
    if let Some(skill) = ctx.skill_name(field(row, "_Skill2")?) {
        set(&mut record, "Skill2Name", skill);
    }
    for i in 1..=3 {
        for j in 1..=4 {
            copy_field(&mut record, row, &format!("Abilities{i}{j}"))?;
        }
    }
    for i in 1..=5 {
        copy_field(&mut record, row, &format!("ExAbilityData{i}"))?;
    }
    copy_field(&mut record, row, "ManaCircleName")?;
    set(&mut record, "JapaneseCV", ctx.label(field(row, "_CvInfo")?));
    set(&mut record, "EnglishCV", ctx.label(field(row, "_CvInfoEn")?));
    set(
        &mut record,
        "Description",
        ctx.label(field(row, "_ProfileText")?),
    );
    copy_field(&mut record, row, "IsPlayable")?;
    copy_field(&mut record, row, "MaxFriendshipPoint")?;

    store.push_fields(Some(format!("{name} - {full_name}")), record);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::testing::{context_with_skills, row};

    fn chara_row() -> RawRow {
        let mut r = row(&[
            ("_Id", "10140101"),
            ("_BaseId", "110255"),
            ("_Name", "CHARA_NAME"),
            ("_SecondName", "CHARA_FULL_NAME"),
            ("_EmblemId", "10140101"),
            ("_WeaponType", "4"),
            ("_Rarity", "4"),
            ("_ElementalType", "2"),
            ("_CharaType", "1"),
            ("_VariationId", "1"),
            ("_MinDef", "10"),
            ("_DefCoef", "1"),
            ("_Skill1", "101401011"),
            ("_Skill2", "101401012"),
            ("_ManaCircleName", "MC_0511"),
            ("_CvInfo", "CV_JP"),
            ("_CvInfoEn", "CV_EN"),
            ("_ProfileText", "CHARA_PROFILE"),
            ("_IsPlayable", "1"),
            ("_MaxFriendshipPoint", "0"),
        ]);
        for stat in ["Hp", "Atk"] {
            for i in 3..=5 {
                r.insert(format!("_Min{stat}{i}"), "40".to_string());
            }
            r.insert(format!("_Max{stat}"), "400".to_string());
            for i in 0..=4 {
                r.insert(format!("_Plus{stat}{i}"), "20".to_string());
            }
            r.insert(format!("_McFullBonus{stat}5"), "12".to_string());
        }
        for i in 1..=3 {
            for j in 1..=4 {
                r.insert(format!("_Abilities{i}{j}"), "0".to_string());
            }
        }
        for i in 1..=5 {
            r.insert(format!("_ExAbilityData{i}"), "101".to_string());
        }
        r
    }

    #[test]
    fn display_name_joins_name_and_full_name() {
        let ctx = context_with_skills(
            &[
                ("CHARA_NAME", "Karina"),
                ("CHARA_FULL_NAME", "Karina the Bold"),
                ("SKILL_NAME_1", "Crashing Wave"),
            ],
            &[("101401011", "SKILL_NAME_1")],
        );
        let mut store = RecordStore::new();
        adventurer(&chara_row(), &mut store, &mut Scratch::default(), &ctx).unwrap();

        let entry = store.entries().next().unwrap();
        assert_eq!(entry.display_name.as_deref(), Some("Karina - Karina the Bold"));
        let fields = entry.body.fields().unwrap();
        assert_eq!(fields.get("WeaponType").unwrap(), "Axe");
        assert_eq!(fields.get("ElementalType").unwrap(), "Water");
        assert_eq!(fields.get("CharaType").unwrap(), "Attack");
        assert_eq!(fields.get("MinHp3").unwrap(), "40");
        assert_eq!(fields.get("McFullBonusAtk5").unwrap(), "12");
    }

    #[test]
    fn skill_slots_resolve_independently() {
        let ctx = context_with_skills(
            &[("SKILL_NAME_2", "Renewing Current")],
            // Only the second slot's id is known.
            &[("101401012", "SKILL_NAME_2")],
        );
        let mut store = RecordStore::new();
        adventurer(&chara_row(), &mut store, &mut Scratch::default(), &ctx).unwrap();

        let fields = store.entries().next().unwrap().body.fields().unwrap().clone();
        assert!(fields.get("Skill1Name").is_none());
        assert_eq!(fields.get("Skill2Name").unwrap(), "Renewing Current");
    }
}
