//! Epithet (emblem) transform.

use std::sync::LazyLock;

use regex::Regex;

use dlwiki_model::{FieldMap, RawRow, RecordStore};

use crate::context::{Scratch, TransformContext};
use crate::data_utils::{field, set};
use crate::error::Result;

static EVENT_REWARD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^A reward from the ([A-Z].*?) event.$").expect("valid pattern"));

pub fn emblem(
    row: &RawRow,
    store: &mut RecordStore,
    _scratch: &mut Scratch,
    ctx: &TransformContext,
) -> Result<()> {
    let mut record = FieldMap::new();
    let title = ctx.label(field(row, "_Title")?);
    set(&mut record, "Title", title.clone());
    set(&mut record, "TitleJP", ctx.jp_epithet(field(row, "_Id")?));
    let rarity = field(row, "_Rarity")?;
    set(
        &mut record,
        "Icon",
        format!(
            "data-sort-value =\"{rarity}\" | [[File:Icon_Profile_0{rarity}_Frame.png|28px|center]]"
        ),
    );
    let mut text = ctx.label(field(row, "_Gettext")?);
    // Event rewards become links to their event's page.
    if let Some(captures) = EVENT_REWARD.captures(&text) {
        text = format!("A reward from the [[{}]] event.", &captures[1]);
    }
    set(&mut record, "Text", text);

    store.push_fields(Some(title), record);
    Ok(())
}
