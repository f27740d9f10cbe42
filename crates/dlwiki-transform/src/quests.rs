//! Quest transforms: the base quest pass plus two enrichment passes
//! (clear rewards, event bonus drops).

use dlwiki_model::{
    ElementType, EVENT_RAID_ITEM_PREFIX, FieldMap, GroupType, MATERIAL_NAME_PREFIX, QuestType,
    RawRow, RecordStore, ROW_INDEX,
};

use crate::context::{Scratch, TransformContext};
use crate::data_utils::{copy_field, field, set};
use crate::error::{Result, TransformError};

const FIRST_CLEAR_SLOTS: usize = 5;
const COMPLETE_SLOTS: usize = 3;

pub fn quest(
    row: &RawRow,
    store: &mut RecordStore,
    _scratch: &mut Scratch,
    ctx: &TransformContext,
) -> Result<()> {
    let mut record = FieldMap::new();
    let quest_id = field(row, ROW_INDEX)?;
    if let Some(quest_type) = QuestType::from_quest_id(quest_id) {
        set(&mut record, "QuestType", quest_type.label());
    }
    set(&mut record, "Id", quest_id);
    // Kept under the raw column name; the bonus pass links on it.
    set(&mut record, "_Gid", field(row, "_Gid")?);
    let view_name = ctx.label(field(row, "_QuestViewName")?);
    let group_name = match view_name.split_once(':') {
        Some((group, _)) => group.to_string(),
        None => String::new(),
    };
    set(&mut record, "QuestGroupName", group_name);
    if let Some(group_type) = GroupType::from_code(field(row, "_GroupType")?) {
        set(&mut record, "GroupType", group_type.label());
    }
    set(
        &mut record,
        "EventName",
        ctx.label(&format!("EVENT_NAME_{}", field(row, "_Gid")?)),
    );
    set(
        &mut record,
        "SectionName",
        ctx.label(field(row, "_SectionName")?),
    );
    set(&mut record, "QuestViewName", view_name.clone());
    let elemental_code = field(row, "_Elemental")?;
    match ElementType::from_code(elemental_code) {
        Some(element) => {
            set(&mut record, "Elemental", element.label());
            set(&mut record, "ElementalId", elemental_code.trim());
        }
        None => {
            set(&mut record, "Elemental", "");
            set(&mut record, "ElementalId", "0");
        }
    }
    if field(row, "_DifficultyLimit")? == "0" {
        set(&mut record, "SuggestedMight", field(row, "_Difficulty")?);
    } else {
        set(&mut record, "MightRequirement", field(row, "_DifficultyLimit")?);
    }
    match field(row, "_SkipTicketCount")? {
        "1" => set(&mut record, "SkipTicket", "Yes"),
        "-1" => set(&mut record, "SkipTicket", ""),
        _ => {}
    }
    set(&mut record, "NormalStaminaCost", field(row, "_PayStaminaSingle")?);
    set(
        &mut record,
        "CampaignStaminaCost",
        field(row, "_CampaignStaminaSingle")?,
    );
    set(&mut record, "GetherwingCost", field(row, "_PayStaminaMulti")?);
    set(
        &mut record,
        "CampaignGetherwingCost",
        field(row, "_CampaignStaminaMulti")?,
    );
    set(
        &mut record,
        "ClearTermsType",
        ctx.label(&format!(
            "QUEST_CLEAR_CONDITION_{}",
            field(row, "_ClearTermsType")?
        )),
    );
    // Failure code 6 shares condition 0's text; the label key spelling
    // is the upstream data's.
    let mut failed_terms = field(row, "_FailedTermsType")?;
    if failed_terms == "6" {
        failed_terms = "0";
    }
    set(
        &mut record,
        "FailedTermsType",
        ctx.label(&format!("QUEST_FAILURE_CONDITON_{failed_terms}")),
    );
    let time_elapsed = field(row, "_FailedTermsTimeElapsed")?;
    if time_elapsed != "0" {
        set(&mut record, "TimeLimit", time_elapsed);
    }
    copy_field(&mut record, row, "ContinueLimit")?;
    copy_field(&mut record, row, "ThumbnailImage")?;
    set(&mut record, "DropRewards", "");
    set(&mut record, "WeaponRewards", "");
    set(&mut record, "WyrmprintRewards", "");
    set(&mut record, "ShowEnemies", "1");
    copy_field(&mut record, row, "AutoPlayType")?;

    store.push_fields(Some(view_name), record);
    Ok(())
}

/// Enrichment: first-clear and mission-completion rewards, linked by
/// quest id. A reward row for an unknown quest is a data integrity
/// violation.
pub fn rewards(
    row: &RawRow,
    store: &mut RecordStore,
    _scratch: &mut Scratch,
    ctx: &TransformContext,
) -> Result<()> {
    let quest_id = field(row, ROW_INDEX)?;
    let record =
        store
            .update_fields("Id", quest_id)
            .ok_or_else(|| TransformError::LinkTargetNotFound {
                key: "Id",
                value: quest_id.to_string(),
            })?;

    let first_id = field(row, "_FirstClearSetEntityId1")?;
    let first_quantity = field(row, "_FirstClearSetEntityQuantity1")?;
    for slot in 1..=FIRST_CLEAR_SLOTS {
        let slot_type = field(row, &format!("_FirstClearSetEntityType{slot}"))?;
        if let Some(text) = first_clear_reward(slot_type, first_id, first_quantity, ctx) {
            set(record, "FirstClearRewards", text);
        }
    }

    for slot in 1..=COMPLETE_SLOTS {
        let complete_type = field(row, &format!("_MissionCompleteType{slot}"))?;
        let complete_value = field(row, &format!("_MissionCompleteValues{slot}"))?;
        let clear_type = field(row, &format!("_MissionsClearSetEntityType{slot}"))?;
        let Some(condition) = completion_condition(complete_type, complete_value) else {
            continue;
        };
        set(record, format!("MissionCompleteType{slot}"), condition);
        // The formatter receives the slot's type code itself, exactly
        // as upstream emits it.
        let Some(reward) = clear_reward(clear_type, clear_type, ctx) else {
            continue;
        };
        set(record, format!("MissionsClearSetEntityType{slot}"), reward);
        set(
            record,
            format!("MissionsClearSetEntityQuantity{slot}"),
            field(row, &format!("_MissionsClearSetEntityQuantity{slot}"))?,
        );
    }

    let first_type = field(row, "_FirstClearSetEntityType1")?;
    if let Some(reward) = clear_reward(first_type, field(row, "_MissionCompleteEntityType")?, ctx) {
        set(record, "MissionCompleteEntityType", reward);
        set(
            record,
            "MissionCompleteEntityQuantity",
            field(row, "_MissionCompleteEntityQuantity")?,
        );
    }
    Ok(())
}

/// Enrichment: daily/weekly bonus drop counts, linked by event group
/// id. Quests without bonus rows are normal; a miss is silently
/// skipped.
pub fn bonus(
    row: &RawRow,
    store: &mut RecordStore,
    _scratch: &mut Scratch,
    _ctx: &TransformContext,
) -> Result<()> {
    let event_id = field(row, ROW_INDEX)?;
    let Some(record) = store.update_fields("_Gid", event_id) else {
        return Ok(());
    };
    match field(row, "_QuestBonusType")? {
        "1" => {
            set(record, "DailyDropQuantity", field(row, "_QuestBonusCount")?);
            set(record, "DailyDropReward", "");
        }
        "2" => {
            set(record, "WeeklyDropQuantity", field(row, "_QuestBonusCount")?);
            set(record, "WeeklyDropReward", "");
        }
        _ => {}
    }
    Ok(())
}

fn first_clear_reward(
    slot_type: &str,
    entity_id: &str,
    quantity: &str,
    ctx: &TransformContext,
) -> Option<String> {
    let drop_reward = |item_type: &str, item: &str| {
        format!("\n{{{{DropReward|droptype=First|itemtype={item_type}|item={item}|exact={quantity}}}}}")
    };
    match slot_type {
        "8" => Some(drop_reward(
            "Material",
            &ctx.label(&format!("{MATERIAL_NAME_PREFIX}{entity_id}")),
        )),
        "20" => Some(drop_reward(
            "Material",
            &ctx.label(&format!("{EVENT_RAID_ITEM_PREFIX}{entity_id}")),
        )),
        "23" => Some(drop_reward("Currency", "Wyrmite")),
        _ => None,
    }
}

fn completion_condition(complete_type: &str, value: &str) -> Option<String> {
    match complete_type {
        "1" => Some(if value == "0" {
            "Don't allow any of your team to fall in battle".to_string()
        } else {
            format!("Allow no more than {value} of your team to fall in battle")
        }),
        "15" => Some("Don't use any continues".to_string()),
        "18" => Some(format!("Finish in {value} seconds or less")),
        _ => None,
    }
}

fn clear_reward(reward_type: &str, argument: &str, ctx: &TransformContext) -> Option<String> {
    match reward_type {
        "8" => Some(ctx.label(&format!("{MATERIAL_NAME_PREFIX}{argument}"))),
        "20" => Some(ctx.label(&format!("{EVENT_RAID_ITEM_PREFIX}{argument}"))),
        "23" => Some("Wyrmite".to_string()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::testing::{context, row};

    fn quest_row() -> RawRow {
        row(&[
            ("_Id", "100010101"),
            ("_Gid", "10001"),
            ("_QuestViewName", "QUEST_VIEW"),
            ("_GroupType", "1"),
            ("_SectionName", "SECTION"),
            ("_Elemental", "2"),
            ("_DifficultyLimit", "0"),
            ("_Difficulty", "1400"),
            ("_SkipTicketCount", "1"),
            ("_PayStaminaSingle", "8"),
            ("_CampaignStaminaSingle", "1"),
            ("_PayStaminaMulti", "1"),
            ("_CampaignStaminaMulti", "1"),
            ("_ClearTermsType", "1"),
            ("_FailedTermsType", "6"),
            ("_FailedTermsTimeElapsed", "0"),
            ("_ContinueLimit", "2"),
            ("_ThumbnailImage", "Campaign"),
            ("_AutoPlayType", "1"),
        ])
    }

    fn reward_row() -> RawRow {
        let mut r = row(&[
            ("_Id", "100010101"),
            ("_FirstClearSetEntityId1", "101001003"),
            ("_FirstClearSetEntityQuantity1", "25"),
            ("_MissionCompleteEntityType", "23"),
            ("_MissionCompleteEntityQuantity", "5"),
        ]);
        for slot in 1..=5 {
            r.insert(format!("_FirstClearSetEntityType{slot}"), "0".to_string());
        }
        for slot in 1..=3 {
            r.insert(format!("_MissionCompleteType{slot}"), "0".to_string());
            r.insert(format!("_MissionCompleteValues{slot}"), "0".to_string());
            r.insert(format!("_MissionsClearSetEntityType{slot}"), "0".to_string());
            r.insert(
                format!("_MissionsClearSetEntityQuantity{slot}"),
                "0".to_string(),
            );
        }
        r
    }

    #[test]
    fn quest_base_fields_decode() {
        let ctx = context(&[
            ("QUEST_VIEW", "Chapter 1: A New Journey"),
            ("QUEST_CLEAR_CONDITION_1", "Defeat all enemies"),
            ("QUEST_FAILURE_CONDITON_0", "The team is wiped out"),
        ]);
        let mut store = RecordStore::new();
        quest(&quest_row(), &mut store, &mut Scratch::default(), &ctx).unwrap();

        let entry = store.entries().next().unwrap();
        assert_eq!(entry.display_name.as_deref(), Some("Chapter 1: A New Journey"));
        let fields = entry.body.fields().unwrap();
        assert_eq!(fields.get("QuestType").unwrap(), "Campaign");
        assert_eq!(fields.get("QuestGroupName").unwrap(), "Chapter 1");
        assert_eq!(fields.get("GroupType").unwrap(), "Campaign");
        assert_eq!(fields.get("Elemental").unwrap(), "Water");
        assert_eq!(fields.get("ElementalId").unwrap(), "2");
        assert_eq!(fields.get("SuggestedMight").unwrap(), "1400");
        assert!(fields.get("MightRequirement").is_none());
        assert_eq!(fields.get("SkipTicket").unwrap(), "Yes");
        // Failure code 6 resolves through condition 0's label.
        assert_eq!(fields.get("FailedTermsType").unwrap(), "The team is wiped out");
        assert!(fields.get("TimeLimit").is_none());
        assert_eq!(fields.get("ShowEnemies").unwrap(), "1");
    }

    #[test]
    fn quest_without_group_colon_gets_empty_group_name() {
        let ctx = context(&[("QUEST_VIEW", "Avenue to Power")]);
        let mut store = RecordStore::new();
        let mut r = quest_row();
        r.insert("_Elemental".to_string(), "0".to_string());
        quest(&r, &mut store, &mut Scratch::default(), &ctx).unwrap();

        let fields = store.entries().next().unwrap().body.fields().unwrap().clone();
        assert_eq!(fields.get("QuestGroupName").unwrap(), "");
        assert_eq!(fields.get("Elemental").unwrap(), "");
        assert_eq!(fields.get("ElementalId").unwrap(), "0");
    }

    #[test]
    fn rewards_enrich_the_matching_quest() {
        let ctx = context(&[
            ("QUEST_VIEW", "Chapter 1: A New Journey"),
            ("MATERIAL_NAME_101001003", "Bronze Crystal"),
        ]);
        let mut store = RecordStore::new();
        let mut scratch = Scratch::default();
        quest(&quest_row(), &mut store, &mut scratch, &ctx).unwrap();

        let mut r = reward_row();
        r.insert("_FirstClearSetEntityType2".to_string(), "8".to_string());
        r.insert("_MissionCompleteType1".to_string(), "1".to_string());
        r.insert("_MissionCompleteValues1".to_string(), "0".to_string());
        r.insert("_MissionsClearSetEntityType1".to_string(), "23".to_string());
        r.insert("_MissionsClearSetEntityQuantity1".to_string(), "5".to_string());
        r.insert("_MissionCompleteType2".to_string(), "18".to_string());
        r.insert("_MissionCompleteValues2".to_string(), "60".to_string());
        rewards(&r, &mut store, &mut scratch, &ctx).unwrap();

        let fields = store.entries().next().unwrap().body.fields().unwrap().clone();
        assert_eq!(
            fields.get("FirstClearRewards").unwrap(),
            "\n{{DropReward|droptype=First|itemtype=Material|item=Bronze Crystal|exact=25}}"
        );
        assert_eq!(
            fields.get("MissionCompleteType1").unwrap(),
            "Don't allow any of your team to fall in battle"
        );
        assert_eq!(fields.get("MissionsClearSetEntityType1").unwrap(), "Wyrmite");
        assert_eq!(fields.get("MissionsClearSetEntityQuantity1").unwrap(), "5");
        // Slot 2's condition matched but its reward type did not, so the
        // reward fields stay absent while the condition is kept.
        assert_eq!(
            fields.get("MissionCompleteType2").unwrap(),
            "Finish in 60 seconds or less"
        );
        assert!(fields.get("MissionsClearSetEntityType2").is_none());
        // Slot-1 first-clear type 0 matches nothing, so the completion
        // entity fields stay absent.
        assert!(fields.get("MissionCompleteEntityType").is_none());
    }

    #[test]
    fn reward_for_unknown_quest_is_a_link_error() {
        let ctx = context(&[]);
        let mut store = RecordStore::new();
        let mut scratch = Scratch::default();
        let mut r = reward_row();
        r.insert("_Id".to_string(), "999999999".to_string());
        let err = rewards(&r, &mut store, &mut scratch, &ctx).unwrap_err();
        assert!(matches!(err, TransformError::LinkTargetNotFound { .. }));
    }

    #[test]
    fn bonus_rows_without_a_matching_quest_are_skipped() {
        let ctx = context(&[("QUEST_VIEW", "Chapter 1: A New Journey")]);
        let mut store = RecordStore::new();
        let mut scratch = Scratch::default();
        quest(&quest_row(), &mut store, &mut scratch, &ctx).unwrap();

        // Matching event group id enriches the quest.
        bonus(
            &row(&[
                ("_Id", "10001"),
                ("_QuestBonusType", "1"),
                ("_QuestBonusCount", "3"),
            ]),
            &mut store,
            &mut scratch,
            &ctx,
        )
        .unwrap();
        // Unknown event group id is silently ignored.
        bonus(
            &row(&[
                ("_Id", "99999"),
                ("_QuestBonusType", "2"),
                ("_QuestBonusCount", "7"),
            ]),
            &mut store,
            &mut scratch,
            &ctx,
        )
        .unwrap();

        let fields = store.entries().next().unwrap().body.fields().unwrap().clone();
        assert_eq!(fields.get("DailyDropQuantity").unwrap(), "3");
        assert_eq!(fields.get("DailyDropReward").unwrap(), "");
        assert!(fields.get("WeeklyDropQuantity").is_none());
    }
}
