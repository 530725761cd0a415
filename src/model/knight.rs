use std::fmt;

use serde::{Deserialize, Serialize};

use crate::model::stat::KnightAttribute;

/// The opposing knight. Attributes the API leaves out count as zero.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Knight {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default)]
    pub attack: i32,
    #[serde(default)]
    pub armor: i32,
    #[serde(default)]
    pub endurance: i32,
    #[serde(default)]
    pub agility: i32,
}

impl Knight {
    pub fn attribute(&self, attr: KnightAttribute) -> i32 {
        match attr {
            KnightAttribute::Attack => self.attack,
            KnightAttribute::Armor => self.armor,
            KnightAttribute::Endurance => self.endurance,
            KnightAttribute::Agility => self.agility,
        }
    }
}

impl fmt::Display for Knight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {{", self.name.as_deref().unwrap_or("Unnamed knight"))?;
        for (i, attr) in KnightAttribute::ALL.iter().enumerate() {
            if i > 0 {
                write!(f, ",")?;
            }
            write!(f, " {}: {}", attr.wire_name(), self.attribute(*attr))?;
        }
        write!(f, " }}")
    }
}

/// A game as returned by the game endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Game {
    pub game_id: u64,
    pub knight: Knight,
}
