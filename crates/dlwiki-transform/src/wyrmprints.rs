//! Wyrmprint (amulet) transform.

use dlwiki_model::{FieldMap, RawRow, RecordStore, ROW_INDEX, SECONDARY_LANGUAGE, UnitClass};

use crate::context::{Scratch, TransformContext};
use crate::data_utils::{copy_field, field, set};
use crate::error::Result;

const ABILITY_COUNT: usize = 3;
const FLAVOR_COUNT: usize = 5;

pub fn wyrmprint(
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
    set(
        &mut record,
        "NameJP",
        ctx.label_in(field(row, "_Name")?, SECONDARY_LANGUAGE),
    );
    // Editorial fields, filled in by hand on the wiki.
    set(&mut record, "FeaturedCharacters", "");
    set(&mut record, "Obtain", "");
    set(&mut record, "ReleaseDate", "");
    set(&mut record, "Availability", "");
    copy_field(&mut record, row, "Rarity")?;
    set(
        &mut record,
        "AmuletType",
        UnitClass::decode(row.get("_AmuletType").map(String::as_str)),
    );
    copy_field(&mut record, row, "MinHp")?;
    copy_field(&mut record, row, "MaxHp")?;
    copy_field(&mut record, row, "MinAtk")?;
    copy_field(&mut record, row, "MaxAtk")?;
    copy_field(&mut record, row, "VariationId")?;
    for i in 1..=ABILITY_COUNT {
        for j in 1..=ABILITY_COUNT {
            copy_field(&mut record, row, &format!("Abilities{i}{j}"))?;
        }
    }
    for i in 1..=ABILITY_COUNT {
        set(&mut record, format!("Ability{i}Event"), "0");
    }
    set(&mut record, "ArtistCV", "");
    for i in 1..=FLAVOR_COUNT {
        set(
            &mut record,
            format!("FlavorText{i}"),
            ctx.label(field(row, &format!("_Text{i}"))?),
        );
    }
    copy_field(&mut record, row, "IsPlayable")?;
    copy_field(&mut record, row, "SellCoin")?;
    copy_field(&mut record, row, "SellDewPoint")?;

    store.push_fields(Some(name), record);
    Ok(())
}
