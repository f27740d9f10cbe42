//! Material transform, shared by the plain material table and the
//! build/collect/raid event item tables, which carry slightly
//! different columns.

use dlwiki_model::{FieldMap, RawRow, RecordStore, ROW_INDEX};

use crate::context::{Scratch, TransformContext};
use crate::data_utils::{copy_field, field, set};
use crate::error::Result;

pub fn material(
    row: &RawRow,
    store: &mut RecordStore,
    _scratch: &mut Scratch,
    ctx: &TransformContext,
) -> Result<()> {
    let mut record = FieldMap::new();
    set(&mut record, "Id", field(row, ROW_INDEX)?);
    let name = ctx.label(field(row, "_Name")?);
    set(&mut record, "Name", name.clone());
    set(&mut record, "Description", ctx.label(field(row, "_Detail")?));
    match row.get("_MaterialRarity") {
        Some(rarity) => set(&mut record, "Rarity", rarity),
        None => set(&mut record, "Rarity", ""),
    }
    // Event items name their source event under different columns per
    // table; the plain material table carries category and sort data.
    if let Some(event_id) = row.get("_EventId") {
        set(&mut record, "QuestEventId", event_id);
        set(&mut record, "SortId", field(row, ROW_INDEX)?);
    } else if let Some(event_id) = row.get("_RaidEventId") {
        set(&mut record, "QuestEventId", event_id);
        set(&mut record, "SortId", field(row, ROW_INDEX)?);
    } else if let Some(event_id) = row.get("_QuestEventId") {
        set(&mut record, "QuestEventId", event_id);
        copy_field(&mut record, row, "Category")?;
        copy_field(&mut record, row, "SortId")?;
    }
    set(
        &mut record,
        "Obtain",
        format!("\n*{}", ctx.label(field(row, "_Description")?)),
    );
    set(&mut record, "Usage", "");
    copy_field(&mut record, row, "MoveQuest1")?;
    copy_field(&mut record, row, "MoveQuest2")?;
    copy_field(&mut record, row, "MoveQuest3")?;
    copy_field(&mut record, row, "MoveQuest4")?;
    copy_field(&mut record, row, "MoveQuest5")?;
    copy_field(&mut record, row, "PouchRarity")?;
    if let Some(exp) = row.get("_Exp") {
        set(&mut record, "Exp", exp);
    }

    store.push_fields(Some(name), record);
    Ok(())
}
