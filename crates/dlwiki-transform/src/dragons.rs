//! Dragon transform.

use dlwiki_model::{
    EMBLEM_NAME_PREFIX, ElementType, FieldMap, RawRow, RecordStore, ROW_INDEX, SECONDARY_LANGUAGE,
};

use crate::context::{Scratch, TransformContext};
use crate::data_utils::{EDIT_THIS, copy_field, field, set};
use crate::error::Result;

pub fn dragon(
    row: &RawRow,
    store: &mut RecordStore,
    _scratch: &mut Scratch,
    ctx: &TransformContext,
) -> Result<()> {
    let mut record = FieldMap::new();
    set(&mut record, "Id", field(row, ROW_INDEX)?);
    copy_field(&mut record, row, "BaseId")?;
    let name = ctx.label(field(row, "_Name")?);
    set(&mut record, "Name", name.clone());
    set(&mut record, "FullName", ctx.label(field(row, "_SecondName")?));
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
    copy_field(&mut record, row, "Rarity")?;
    set(&mut record, "Gender", "");
    set(
        &mut record,
        "ElementalType",
        ElementType::decode(row.get("_ElementalType").map(String::as_str)),
    );
    copy_field(&mut record, row, "VariationId")?;
    copy_field(&mut record, row, "IsPlayable")?;
    copy_field(&mut record, row, "MinHp")?;
    copy_field(&mut record, row, "MaxHp")?;
    copy_field(&mut record, row, "MinAtk")?;
    copy_field(&mut record, row, "MaxAtk")?;
    set(
        &mut record,
        "SkillName",
        ctx.skill_name(field(row, "_Skill1")?).unwrap_or_default(),
    );
    for i in 1..=2 {
        for j in 1..=2 {
            copy_field(&mut record, row, &format!("Abilities{i}{j}"))?;
        }
    }
    set(&mut record, "ProfileText", ctx.label(field(row, "_Profile")?));
    copy_field(&mut record, row, "FavoriteType")?;
    set(&mut record, "JapaneseCV", ctx.label(field(row, "_CvInfo")?));
    set(&mut record, "EnglishCV", ctx.label(field(row, "_CvInfoEn")?));
    copy_field(&mut record, row, "SellCoin")?;
    copy_field(&mut record, row, "SellDewPoint")?;
    copy_field(&mut record, row, "MoveSpeed")?;
    copy_field(&mut record, row, "DashSpeedRatio")?;
    copy_field(&mut record, row, "TurnSpeed")?;
    copy_field(&mut record, row, "IsTurnToDamageDir")?;
    copy_field(&mut record, row, "MoveType")?;
    // The source column name carries this typo.
    set(&mut record, "IsLongRange", field(row, "_IsLongLange")?);
    let modifiers: String = (1..=3)
        .map(|i| format!("\n{{{{DragonAttackModifierRow|Combo {i}|{EDIT_THIS}%|{EDIT_THIS}}}}}"))
        .collect();
    set(&mut record, "AttackModifiers", modifiers);

    store.push_fields(Some(name), record);
    Ok(())
}
