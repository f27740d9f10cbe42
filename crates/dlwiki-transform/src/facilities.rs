//! Facility (fort plant) transforms.

use dlwiki_model::{FieldMap, RawRow, RecordStore, ROW_INDEX};

use crate::context::{Scratch, TransformContext};
use crate::data_utils::{field, set};
use crate::error::{Result, TransformError};

/// Collector pass: upgrade detail rows grouped by their facility.
pub fn collect_details(
    row: &RawRow,
    _store: &mut RecordStore,
    scratch: &mut Scratch,
    _ctx: &TransformContext,
) -> Result<()> {
    scratch
        .plant_details
        .entry(field(row, "_AssetGroup")?.to_string())
        .or_default()
        .push(row.clone());
    Ok(())
}

pub fn facility(
    row: &RawRow,
    store: &mut RecordStore,
    scratch: &mut Scratch,
    ctx: &TransformContext,
) -> Result<()> {
    let mut record = FieldMap::new();
    let id = field(row, ROW_INDEX)?;
    set(&mut record, "Id", id);
    let name = ctx.label(field(row, "_Name")?);
    set(&mut record, "Name", name.clone());
    set(
        &mut record,
        "Description",
        ctx.label(field(row, "_Description")?),
    );
    set(&mut record, "Type", "");
    let size = field(row, "_PlantSize")?;
    set(&mut record, "Size", format!("{size}x{size}"));
    set(&mut record, "Available", "1");
    set(&mut record, "Obtain", "");
    set(&mut record, "ReleaseDate", "");
    set(&mut record, "ShortSummary", "");

    let details = scratch
        .plant_details
        .get(id)
        .ok_or_else(|| TransformError::LinkTargetNotFound {
            key: "_AssetGroup",
            value: id.to_string(),
        })?;
    // One image per run of levels sharing the same art.
    let mut images: Vec<(&str, &str)> = Vec::new();
    for detail in details {
        let image = field(detail, "_ImageUiName")?;
        if images.last().is_none_or(|(_, last)| *last != image) {
            images.push((field(detail, "_Level")?, image));
        }
    }
    let rendered = match images.as_slice() {
        [] => String::new(),
        [(_, image)] => format!("[[File:{image}.png|120px]]"),
        _ => {
            let sections: Vec<String> = images
                .iter()
                .map(|(level, image)| format!("{level}=\n[[File:{image}.png|120px]]"))
                .collect();
            format!(
                "{{{{#tag:tabber|\nLv{}}}}}",
                sections.join("\n{{!}}-{{!}}\n")
            )
        }
    };
    set(&mut record, "Images", rendered);
    set(&mut record, "UpgradeTable", "");

    store.push_fields(Some(name), record);
    Ok(())
}
