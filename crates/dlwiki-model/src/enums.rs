//! Fixed decoding tables for numeric game-data codes.
//!
//! All codes are 1-based. Code `0`, an out-of-range code, or a
//! non-numeric value uniformly decodes to `None` ("no type") rather
//! than failing the row.

macro_rules! coded_enum {
    ($(#[$meta:meta])* $name:ident { $($variant:ident = $label:literal),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq)]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            const ALL: &'static [$name] = &[$($name::$variant),+];

            /// Decode a 1-based code; `0`, out-of-range, or non-numeric
            /// values are absent.
            pub fn from_code(code: &str) -> Option<Self> {
                let code: usize = code.trim().parse().ok()?;
                (code >= 1).then(|| Self::ALL.get(code - 1).copied()).flatten()
            }

            pub fn label(self) -> &'static str {
                match self {
                    $($name::$variant => $label),+
                }
            }

            /// Decoded label for a raw field value, empty when absent.
            pub fn decode(code: Option<&str>) -> &'static str {
                code.and_then(Self::from_code).map_or("", Self::label)
            }
        }
    };
}

coded_enum! {
    /// Elemental affinity of units, weapons and quests.
    ElementType {
        Flame = "Flame",
        Water = "Water",
        Wind = "Wind",
        Light = "Light",
        Shadow = "Shadow",
    }
}

coded_enum! {
    /// Combat role of adventurers and wyrmprints.
    UnitClass {
        Attack = "Attack",
        Defense = "Defense",
        Support = "Support",
        Healing = "Healing",
    }
}

coded_enum! {
    WeaponType {
        Sword = "Sword",
        Blade = "Blade",
        Dagger = "Dagger",
        Axe = "Axe",
        Lance = "Lance",
        Bow = "Bow",
        Wand = "Wand",
        Staff = "Staff",
    }
}

const ROMAN_NUMERALS: &[&str] = &["I", "II", "III", "IV", "V", "VI", "VII", "VIII", "IX", "X"];

/// Roman numeral for a 1-based tier, `None` for 0 or beyond X.
pub fn roman_numeral(tier: usize) -> Option<&'static str> {
    (tier >= 1).then(|| ROMAN_NUMERALS.get(tier - 1).copied()).flatten()
}

/// Quest classification derived from the quest id's leading digits.
/// Prefixes are checked in declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuestType {
    Campaign,
    Event,
    Raid,
    Facility,
}

const QUEST_TYPE_PREFIXES: &[(&str, QuestType)] = &[
    ("1", QuestType::Campaign),
    ("201", QuestType::Event),
    ("202", QuestType::Event),
    ("203", QuestType::Event),
    ("210", QuestType::Event),
    ("211", QuestType::Event),
    ("300", QuestType::Event),
    ("204", QuestType::Raid),
    ("208", QuestType::Facility),
];

impl QuestType {
    pub fn from_quest_id(quest_id: &str) -> Option<Self> {
        QUEST_TYPE_PREFIXES
            .iter()
            .find(|(prefix, _)| quest_id.starts_with(prefix))
            .map(|(_, quest_type)| *quest_type)
    }

    pub fn label(self) -> &'static str {
        match self {
            QuestType::Campaign => "Campaign",
            QuestType::Event => "Event",
            QuestType::Raid => "Raid",
            QuestType::Facility => "Facility",
        }
    }
}

/// Quest group classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroupType {
    Campaign,
    Event,
}

impl GroupType {
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "1" => Some(GroupType::Campaign),
            "2" => Some(GroupType::Event),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            GroupType::Campaign => "Campaign",
            GroupType::Event => "Event",
        }
    }
}
