use std::fmt;

use serde::{Deserialize, Serialize};

use crate::model::stat::DragonStat;

pub const DRAGON_NAME: &str = "Trogdor";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dragon {
    pub scale_thickness: u8,
    pub claw_sharpness: u8,
    pub fire_breath: u8,
    pub wing_strength: u8,
    pub name: String,
}

impl Dragon {
    /// Builds a named dragon from values in `DragonStat::ALL` order.
    pub fn from_stats(stats: [u8; 4]) -> Self {
        Self {
            scale_thickness: stats[DragonStat::ScaleThickness.index()],
            claw_sharpness: stats[DragonStat::ClawSharpness.index()],
            fire_breath: stats[DragonStat::FireBreath.index()],
            wing_strength: stats[DragonStat::WingStrength.index()],
            name: DRAGON_NAME.to_string(),
        }
    }

    pub fn stat(&self, stat: DragonStat) -> u8 {
        match stat {
            DragonStat::ScaleThickness => self.scale_thickness,
            DragonStat::ClawSharpness => self.claw_sharpness,
            DragonStat::FireBreath => self.fire_breath,
            DragonStat::WingStrength => self.wing_strength,
        }
    }
}

impl fmt::Display for Dragon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {{", self.name)?;
        for (i, stat) in DragonStat::ALL.iter().enumerate() {
            if i > 0 {
                write!(f, ",")?;
            }
            write!(f, " {}: {}", stat.wire_name(), self.stat(*stat))?;
        }
        write!(f, " }}")
    }
}

/// What the allocation engine hands to the orchestrator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Allocation {
    Dragon(Dragon),
    /// No dragon can fly in this weather; the solution is submitted empty.
    Unplayable,
}

impl Allocation {
    pub fn dragon(&self) -> Option<&Dragon> {
        match self {
            Allocation::Dragon(dragon) => Some(dragon),
            Allocation::Unplayable => None,
        }
    }
}

impl fmt::Display for Allocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Allocation::Dragon(dragon) => dragon.fmt(f),
            Allocation::Unplayable => write!(f, "no dragon"),
        }
    }
}
