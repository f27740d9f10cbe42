pub mod enums;
pub mod labels;
pub mod ordering;
pub mod record;
pub mod store;

pub use enums::{ElementType, GroupType, QuestType, UnitClass, WeaponType, roman_numeral};
pub use labels::{
    EMBLEM_NAME_PREFIX, EMBLEM_PHONETIC_PREFIX, EVENT_RAID_ITEM_PREFIX, LabelIndex,
    MATERIAL_NAME_PREFIX, PRIMARY_LANGUAGE, SECONDARY_LANGUAGE,
};
pub use ordering::OrderingDirectives;
pub use record::{FieldMap, Layout, PLACEHOLDER_ID, RawRow, RecordBody, ROW_INDEX, is_placeholder};
pub use store::{Entry, RecordStore};
