//! Skill transform.

use dlwiki_model::{FieldMap, RawRow, RecordStore, ROW_INDEX};

use crate::context::{Scratch, TransformContext};
use crate::data_utils::{copy_field, field, set};
use crate::error::Result;

pub fn skill(
    row: &RawRow,
    store: &mut RecordStore,
    _scratch: &mut Scratch,
    ctx: &TransformContext,
) -> Result<()> {
    let mut record = FieldMap::new();
    set(&mut record, "SkillId", field(row, ROW_INDEX)?);
    let name = ctx.label(field(row, "_Name")?);
    set(&mut record, "Name", name.clone());
    copy_field(&mut record, row, "SkillLv1IconName")?;
    copy_field(&mut record, row, "SkillLv2IconName")?;
    copy_field(&mut record, row, "SkillLv3IconName")?;
    for i in 1..=3 {
        set(
            &mut record,
            format!("Description{i}"),
            ctx.label(field(row, &format!("_Description{i}"))?),
        );
    }
    set(&mut record, "HideLevel3", "");
    copy_field(&mut record, row, "Sp")?;
    copy_field(&mut record, row, "SpLv2")?;
    set(&mut record, "SpRegen", "");
    copy_field(&mut record, row, "IsAffectedByTension")?;
    copy_field(&mut record, row, "ZoominTime")?;
    copy_field(&mut record, row, "Zoom2Time")?;
    copy_field(&mut record, row, "ZoomWaitTime")?;

    store.push_fields(Some(name), record);
    Ok(())
}
