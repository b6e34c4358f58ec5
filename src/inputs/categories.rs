//! Qualitative categories and their numeric values.
//!
//! Each category is a closed enumeration. Parsing an unrecognized tag fails
//! with [`RiskError::UnknownCategory`]; there is no silent default.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::RiskError;

/// Skinfold used when the user does not know their skin thickness (mm).
pub const DEFAULT_SKINFOLD: f64 = 20.0;

/// Family history of diabetes, mapped to a diabetes pedigree function value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FamilyHistory {
    #[default]
    None,
    OneRelative,
    MultipleRelatives,
    Strong,
}

impl FamilyHistory {
    pub const ALL: [FamilyHistory; 4] = [
        Self::None,
        Self::OneRelative,
        Self::MultipleRelatives,
        Self::Strong,
    ];

    const TAGS: [&'static str; 4] = ["none", "one-relative", "multiple-relatives", "strong"];

    pub fn pedigree(&self) -> f64 {
        match self {
            Self::None => 0.2,
            Self::OneRelative => 0.6,
            Self::MultipleRelatives => 1.0,
            Self::Strong => 1.5,
        }
    }

    pub fn tag(&self) -> &'static str {
        match self {
            Self::None => Self::TAGS[0],
            Self::OneRelative => Self::TAGS[1],
            Self::MultipleRelatives => Self::TAGS[2],
            Self::Strong => Self::TAGS[3],
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::None => "No family history",
            Self::OneRelative => "One parent/sibling",
            Self::MultipleRelatives => "Multiple close relatives",
            Self::Strong => "Very strong family history",
        }
    }
}

impl FromStr for FamilyHistory {
    type Err = RiskError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tag = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|c| c.tag() == tag)
            .ok_or_else(|| RiskError::unknown_category("family history", s, &Self::TAGS))
    }
}

impl fmt::Display for FamilyHistory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.label(), self.pedigree())
    }
}

/// Qualitative fasting glucose category, mapped to the glucose reference
/// used by the insulin/glucose ratio.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum GlucoseCategory {
    Normal,
    Elevated,
    High,
    /// Falls back to the fixed reference the glucose-free model uses.
    #[default]
    Unknown,
}

impl GlucoseCategory {
    pub const ALL: [GlucoseCategory; 4] = [Self::Normal, Self::Elevated, Self::High, Self::Unknown];

    const TAGS: [&'static str; 4] = ["normal", "elevated", "high", "unknown"];

    pub fn reference(&self) -> f64 {
        match self {
            Self::Normal => 90.0,
            Self::Elevated => 110.0,
            Self::High => 140.0,
            Self::Unknown => 100.0,
        }
    }

    pub fn tag(&self) -> &'static str {
        match self {
            Self::Normal => Self::TAGS[0],
            Self::Elevated => Self::TAGS[1],
            Self::High => Self::TAGS[2],
            Self::Unknown => Self::TAGS[3],
        }
    }
}

impl FromStr for GlucoseCategory {
    type Err = RiskError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tag = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|c| c.tag() == tag)
            .ok_or_else(|| RiskError::unknown_category("glucose", s, &Self::TAGS))
    }
}

impl fmt::Display for GlucoseCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.tag(), self.reference())
    }
}

/// Skin thickness, either measured or unknown.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SkinfoldInput {
    Measured(f64),
    #[default]
    Unknown,
}

impl SkinfoldInput {
    pub fn from_option(value: Option<f64>) -> Self {
        value.map_or(Self::Unknown, Self::Measured)
    }

    /// Skinfold in mm, substituting the default when unknown.
    pub fn resolve(&self) -> f64 {
        match self {
            Self::Measured(v) => *v,
            Self::Unknown => DEFAULT_SKINFOLD,
        }
    }
}
