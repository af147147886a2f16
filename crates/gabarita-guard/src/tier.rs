//! Subscription tiers

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Subscription tier, ordered from least to most privileged
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlanTier {
    #[serde(rename = "gratuito")]
    Free,
    #[serde(rename = "basico")]
    Basic,
    #[serde(rename = "premium")]
    Premium,
    #[serde(rename = "vip")]
    Vip,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown plan tier: {0}")]
pub struct ParseTierError(pub String);

impl PlanTier {
    /// Every tier in rank order
    pub const ALL: [PlanTier; 4] = [
        PlanTier::Free,
        PlanTier::Basic,
        PlanTier::Premium,
        PlanTier::Vip,
    ];

    pub fn rank(self) -> u8 {
        match self {
            PlanTier::Free => 0,
            PlanTier::Basic => 1,
            PlanTier::Premium => 2,
            PlanTier::Vip => 3,
        }
    }

    /// Whether this tier grants access to content requiring `required`
    pub fn satisfies(self, required: PlanTier) -> bool {
        self.rank() >= required.rank()
    }

    /// Name used by the backend
    pub fn as_str(self) -> &'static str {
        match self {
            PlanTier::Free => "gratuito",
            PlanTier::Basic => "basico",
            PlanTier::Premium => "premium",
            PlanTier::Vip => "vip",
        }
    }

    /// Tier named by a backend response; unknown names rank as free
    pub fn from_wire(name: &str) -> Self {
        name.parse().unwrap_or(PlanTier::Free)
    }
}

impl Default for PlanTier {
    fn default() -> Self {
        PlanTier::Free
    }
}

impl PartialOrd for PlanTier {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for PlanTier {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.rank().cmp(&other.rank())
    }
}

impl fmt::Display for PlanTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PlanTier {
    type Err = ParseTierError;

    /// Accepts the backend names and their English equivalents, case-insensitively
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "gratuito" | "free" => Ok(PlanTier::Free),
            "basico" | "básico" | "basic" => Ok(PlanTier::Basic),
            "premium" => Ok(PlanTier::Premium),
            "vip" => Ok(PlanTier::Vip),
            _ => Err(ParseTierError(s.to_string())),
        }
    }
}
