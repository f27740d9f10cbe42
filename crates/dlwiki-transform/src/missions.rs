//! Endeavor (mission) transform, shared by the daily, period and
//! normal mission tables. Output is positional: text, reward name,
//! reward quantity.

use dlwiki_model::{EMBLEM_NAME_PREFIX, MATERIAL_NAME_PREFIX, RawRow, RecordBody, RecordStore};

use crate::context::{Scratch, TransformContext};
use crate::data_utils::field;
use crate::error::Result;

pub fn endeavor(
    row: &RawRow,
    store: &mut RecordStore,
    _scratch: &mut Scratch,
    ctx: &TransformContext,
) -> Result<()> {
    let text = ctx.label(field(row, "_Text")?);
    let mut values = vec![text.clone()];
    if let Some((reward, quantity)) = reward_cells(row, ctx)? {
        values.push(reward);
        values.push(quantity);
    }
    store.push(Some(text), RecordBody::Values(values));
    Ok(())
}

/// Reward name and quantity cells for a mission's entity type code.
/// Unrecognized codes contribute no cells.
fn reward_cells(row: &RawRow, ctx: &TransformContext) -> Result<Option<(String, String)>> {
    let entity_id = field(row, "_EntityId")?;
    let quantity = field(row, "_EntityQuantity")?.to_string();
    Ok(match field(row, "_EntityType")? {
        "2" => Some((ctx.label(&format!("USE_ITEM_NAME_{entity_id}")), quantity)),
        "4" => Some(("Rupies".to_string(), quantity)),
        "8" => Some((
            ctx.label(&format!("{MATERIAL_NAME_PREFIX}{entity_id}")),
            quantity,
        )),
        "10" => Some((
            format!(
                "Epithet: {}",
                ctx.label(&format!("{EMBLEM_NAME_PREFIX}{entity_id}"))
            ),
            "Rank=".to_string(),
        )),
        "11" => Some((ctx.label(&format!("STAMP_NAME_{entity_id}")), quantity)),
        "14" => Some(("Eldwater".to_string(), quantity)),
        "16" => Some(("Skip Ticket".to_string(), quantity)),
        "17" => Some((ctx.label(&format!("SUMMON_TICKET_NAME_{entity_id}")), quantity)),
        "18" => Some(("Mana".to_string(), quantity)),
        "23" => Some(("Wyrmite".to_string(), quantity)),
        _ => None,
    })
}
