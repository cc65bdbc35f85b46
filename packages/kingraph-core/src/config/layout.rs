//! Layout hints
//!
//! Passed through verbatim to the external layout engine; nothing in this
//! crate computes coordinates.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::error::{ConfigError, ConfigResult};

const MAX_SEPARATION: u32 = 1000;

/// Rank direction
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum RankDir {
    /// Top to bottom (ancestors above descendants)
    #[default]
    TB,
    BT,
    LR,
    RL,
}

impl RankDir {
    pub fn as_str(&self) -> &'static str {
        match self {
            RankDir::TB => "TB",
            RankDir::BT => "BT",
            RankDir::LR => "LR",
            RankDir::RL => "RL",
        }
    }
}

impl FromStr for RankDir {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "TB" => Ok(RankDir::TB),
            "BT" => Ok(RankDir::BT),
            "LR" => Ok(RankDir::LR),
            "RL" => Ok(RankDir::RL),
            _ => Err(ConfigError::UnknownRankDir(s.to_string())),
        }
    }
}

impl fmt::Display for RankDir {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Graph-level rank settings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LayoutConfig {
    pub rankdir: RankDir,
    /// Gap between ranks
    pub ranksep: u32,
    /// Gap between nodes on one rank
    pub nodesep: u32,
    /// Gap between parallel edges
    pub edgesep: u32,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            rankdir: RankDir::TB,
            ranksep: 50,
            nodesep: 20,
            edgesep: 30,
        }
    }
}

impl LayoutConfig {
    pub fn validate(&self) -> ConfigResult<()> {
        for (field, value, hint) in [
            ("ranksep", self.ranksep, "Gap between generations"),
            ("nodesep", self.nodesep, "Gap between siblings and partners"),
            ("edgesep", self.edgesep, "Gap between parallel edges"),
        ] {
            if value > MAX_SEPARATION {
                return Err(ConfigError::range_with_hint(field, value, 0, MAX_SEPARATION, hint));
            }
        }
        Ok(())
    }
}
