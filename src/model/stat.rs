use std::fmt;

/// Highest value a single dragon stat may hold.
pub const MAX_STAT: u8 = 10;

/// The four stats a dragon is built from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DragonStat {
    ScaleThickness,
    ClawSharpness,
    FireBreath,
    WingStrength,
}

impl DragonStat {
    /// Canonical order. Ranking ties are broken by this order.
    pub const ALL: [DragonStat; 4] = [
        DragonStat::ScaleThickness,
        DragonStat::ClawSharpness,
        DragonStat::FireBreath,
        DragonStat::WingStrength,
    ];

    pub fn index(self) -> usize {
        match self {
            DragonStat::ScaleThickness => 0,
            DragonStat::ClawSharpness => 1,
            DragonStat::FireBreath => 2,
            DragonStat::WingStrength => 3,
        }
    }

    pub fn wire_name(self) -> &'static str {
        match self {
            DragonStat::ScaleThickness => "scaleThickness",
            DragonStat::ClawSharpness => "clawSharpness",
            DragonStat::FireBreath => "fireBreath",
            DragonStat::WingStrength => "wingStrength",
        }
    }
}

/// Knight attributes as the game API names them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KnightAttribute {
    Attack,
    Armor,
    Endurance,
    Agility,
}

impl KnightAttribute {
    pub const ALL: [KnightAttribute; 4] = [
        KnightAttribute::Attack,
        KnightAttribute::Armor,
        KnightAttribute::Endurance,
        KnightAttribute::Agility,
    ];

    /// The dragon stat that counters this attribute.
    pub fn dragon_stat(self) -> DragonStat {
        match self {
            KnightAttribute::Attack => DragonStat::ScaleThickness,
            KnightAttribute::Armor => DragonStat::ClawSharpness,
            KnightAttribute::Endurance => DragonStat::FireBreath,
            KnightAttribute::Agility => DragonStat::WingStrength,
        }
    }

    pub fn wire_name(self) -> &'static str {
        match self {
            KnightAttribute::Attack => "attack",
            KnightAttribute::Armor => "armor",
            KnightAttribute::Endurance => "endurance",
            KnightAttribute::Agility => "agility",
        }
    }
}

/// Weather reported for a game. Codes we don't know about are kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Weather {
    Normal,
    Storm,
    Rain,
    Drought,
    Fog,
    Unknown(String),
}

impl Weather {
    pub fn from_code(code: &str) -> Self {
        match code {
            "NMR" => Weather::Normal,
            "SRO" => Weather::Storm,
            "HVA" => Weather::Rain,
            "T E" => Weather::Drought,
            "FUNDEFINEDG" => Weather::Fog,
            other => Weather::Unknown(other.to_string()),
        }
    }

    pub fn code(&self) -> &str {
        match self {
            Weather::Normal => "NMR",
            Weather::Storm => "SRO",
            Weather::Rain => "HVA",
            Weather::Drought => "T E",
            Weather::Fog => "FUNDEFINEDG",
            Weather::Unknown(code) => code,
        }
    }
}

impl fmt::Display for Weather {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Weather::Normal => "normal",
            Weather::Storm => "storm",
            Weather::Rain => "rain",
            Weather::Drought => "drought",
            Weather::Fog => "fog",
            Weather::Unknown(_) => "unknown",
        };
        write!(f, "{} ({})", label, self.code())
    }
}
