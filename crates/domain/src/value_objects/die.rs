//! Attribute dice.
//!
//! Every attribute is one of four die sizes; checks roll two of them and sum
//! the faces. Documents store the size as a plain number, so the enum
//! round-trips through `u8`.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::DomainError;

/// An attribute die size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum Die {
    D6,
    D8,
    D10,
    D12,
}

impl Die {
    /// Number of faces.
    pub fn sides(self) -> u8 {
        match self {
            Self::D6 => 6,
            Self::D8 => 8,
            Self::D10 => 10,
            Self::D12 => 12,
        }
    }

    /// One step up, capped at d12.
    pub fn upgraded(self) -> Self {
        match self {
            Self::D6 => Self::D8,
            Self::D8 => Self::D10,
            Self::D10 | Self::D12 => Self::D12,
        }
    }

    /// One step down, capped at d6.
    pub fn downgraded(self) -> Self {
        match self {
            Self::D6 | Self::D8 => Self::D6,
            Self::D10 => Self::D8,
            Self::D12 => Self::D10,
        }
    }
}

impl Default for Die {
    fn default() -> Self {
        Self::D8
    }
}

impl From<Die> for u8 {
    fn from(value: Die) -> Self {
        value.sides()
    }
}

impl TryFrom<u8> for Die {
    type Error = DomainError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            6 => Ok(Self::D6),
            8 => Ok(Self::D8),
            10 => Ok(Self::D10),
            12 => Ok(Self::D12),
            other => Err(DomainError::parse(format!("unknown die size: {other}"))),
        }
    }
}

impl fmt::Display for Die {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "d{}", self.sides())
    }
}

/// Names one of the four attributes an attack or spell rolls with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AttributeName {
    Dexterity,
    Insight,
    Might,
    Will,
}

impl fmt::Display for AttributeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Dexterity => write!(f, "DEX"),
            Self::Insight => write!(f, "INS"),
            Self::Might => write!(f, "MIG"),
            Self::Will => write!(f, "WLP"),
        }
    }
}
