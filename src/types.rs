use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

use crate::utils::to_title_case;

/// Bedwars queue whose counters are shown.
///
/// Each mode reads its counters from the Bedwars stats object under its own key
/// prefix, e.g. `eight_one_wins_bedwars` for solo wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum BedwarsMode {
    #[default]
    Overall,
    Solo,
    Doubles,
    Threes,
    Fours,
}

impl BedwarsMode {
    pub const ALL: [BedwarsMode; 5] = [
        BedwarsMode::Overall,
        BedwarsMode::Solo,
        BedwarsMode::Doubles,
        BedwarsMode::Threes,
        BedwarsMode::Fours,
    ];

    pub fn display_name(&self) -> &'static str {
        match self {
            BedwarsMode::Overall => "Overall",
            BedwarsMode::Solo => "Solo",
            BedwarsMode::Doubles => "Doubles",
            BedwarsMode::Threes => "Threes",
            BedwarsMode::Fours => "Fours",
        }
    }

    pub fn api_prefix(&self) -> &'static str {
        match self {
            BedwarsMode::Overall => "",
            BedwarsMode::Solo => "eight_one_",
            BedwarsMode::Doubles => "eight_two_",
            BedwarsMode::Threes => "four_three_",
            BedwarsMode::Fours => "four_four_",
        }
    }

    /// Name used in the config file
    pub fn config_name(&self) -> &'static str {
        match self {
            BedwarsMode::Overall => "OVERALL",
            BedwarsMode::Solo => "SOLO",
            BedwarsMode::Doubles => "DOUBLES",
            BedwarsMode::Threes => "THREES",
            BedwarsMode::Fours => "FOURS",
        }
    }
}

impl fmt::Display for BedwarsMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown bedwars mode: {0}")]
pub struct UnknownMode(pub String);

impl FromStr for BedwarsMode {
    type Err = UnknownMode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        BedwarsMode::ALL
            .into_iter()
            .find(|mode| mode.config_name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownMode(s.to_string()))
    }
}

// Unknown values in the config file fall back to Overall instead of failing the load.
impl From<String> for BedwarsMode {
    fn from(value: String) -> Self {
        value.parse().unwrap_or_default()
    }
}

impl From<BedwarsMode> for String {
    fn from(mode: BedwarsMode) -> Self {
        mode.config_name().to_string()
    }
}

/// Hypixel player object as returned by `/v2/player`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlayerRecord {
    pub uuid: Uuid,

    #[serde(rename = "displayname", default)]
    pub name: String,

    #[serde(default)]
    pub rank: Option<String>,

    #[serde(rename = "packageRank", default)]
    pub package_rank: Option<String>,

    #[serde(rename = "newPackageRank", default)]
    pub new_package_rank: Option<String>,

    #[serde(rename = "monthlyPackageRank", default)]
    pub monthly_package_rank: Option<String>,

    #[serde(rename = "rankPlusColor", default)]
    pub rank_plus_color: Option<String>,

    #[serde(default)]
    pub stats: Option<Map<String, Value>>,

    #[serde(default)]
    pub achievements: Option<Map<String, Value>>,
}

impl PlayerRecord {
    /// Staff rank first, then the paid ranks, `NONE` when nothing is set.
    pub fn highest_rank(&self) -> &str {
        let staff = self
            .rank
            .as_deref()
            .filter(|r| *r != "NORMAL" && *r != "NONE");
        staff
            .or_else(|| Self::package(&self.monthly_package_rank))
            .or_else(|| Self::package(&self.new_package_rank))
            .or_else(|| Self::package(&self.package_rank))
            .unwrap_or("NONE")
    }

    pub fn monthly_package_rank(&self) -> &str {
        self.monthly_package_rank.as_deref().unwrap_or("NONE")
    }

    pub fn new_package_rank(&self) -> &str {
        self.new_package_rank.as_deref().unwrap_or("NONE")
    }

    pub fn rank_plus_color(&self) -> &str {
        self.rank_plus_color.as_deref().unwrap_or("RED")
    }

    /// The `stats.Bedwars` object, if the player ever played Bedwars
    pub fn bedwars(&self) -> Option<&Map<String, Value>> {
        self.stats.as_ref()?.get("Bedwars")?.as_object()
    }

    /// Star level, independent of the selected mode
    pub fn bedwars_level(&self) -> u64 {
        self.achievements
            .as_ref()
            .and_then(|a| a.get("bedwars_level"))
            .map(as_counter)
            .unwrap_or(0)
    }

    /// Reads `<mode prefix><key>` from the Bedwars stats, 0 when absent
    pub fn bedwars_counter(&self, mode: BedwarsMode, key: &str) -> u64 {
        let field = format!("{}{}", mode.api_prefix(), key);
        self.bedwars()
            .and_then(|bw| bw.get(&field))
            .map(as_counter)
            .unwrap_or(0)
    }

    fn package(rank: &Option<String>) -> Option<&str> {
        rank.as_deref().filter(|r| *r != "NONE")
    }
}

fn as_counter(value: &Value) -> u64 {
    value
        .as_u64()
        .or_else(|| value.as_f64().map(|f| f.max(0.0) as u64))
        .unwrap_or(0)
}

/// Result of a player lookup that reached the API.
#[derive(Debug, Clone)]
pub enum PlayerLookup {
    Found(Box<PlayerRecord>),
    /// No such player. Usually a nicked name.
    NotFound,
}

/// Hypixel session from `/v2/status`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionRecord {
    #[serde(default)]
    pub online: bool,

    #[serde(rename = "gameType", default)]
    pub game_type: Option<ServerType>,

    #[serde(default)]
    pub mode: Option<String>,
}

impl SessionRecord {
    /// Display name of the server the player is on, "Unknown" when missing
    pub fn server_type_name(&self) -> String {
        self.game_type
            .as_ref()
            .map(|t| t.name())
            .unwrap_or_else(|| "Unknown".to_string())
    }
}

/// Game type code reported by the status endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ServerType(pub String);

impl ServerType {
    pub fn name(&self) -> String {
        let name = match self.0.as_str() {
            "BEDWARS" => "Bed Wars",
            "SKYWARS" => "SkyWars",
            "SKYBLOCK" => "SkyBlock",
            "MAIN" => "Main Lobby",
            "PROTOTYPE" => "Prototype",
            "HOUSING" => "Housing",
            "PIT" => "Pit",
            "DUELS" => "Duels",
            "BUILD_BATTLE" => "Build Battle",
            "MURDER_MYSTERY" => "Murder Mystery",
            "ARCADE" => "Arcade",
            "WALLS3" => "Mega Walls",
            "SURVIVAL_GAMES" => "Blitz Survival Games",
            "TNTGAMES" => "TNT Games",
            "UHC" => "UHC Champions",
            "SPEED_UHC" => "Speed UHC",
            "MCGO" => "Cops and Crims",
            "BATTLEGROUND" => "Warlords",
            "SUPER_SMASH" => "Smash Heroes",
            "LIMBO" => "Limbo",
            "REPLAY" => "Replay",
            "TOURNAMENT" => "Tournament Hall",
            "WOOL_GAMES" => "Wool Games",
            "VAMPIREZ" => "VampireZ",
            "ARENA" => "Arena Brawl",
            "GINGERBREAD" => "Turbo Kart Racers",
            "LEGACY" => "Classic Games",
            "SMP" => "SMP",
            "WALLS" => "Walls",
            "PAINTBALL" => "Paintball",
            other => return to_title_case(&other.replace('_', " ")),
        };
        name.to_string()
    }
}
