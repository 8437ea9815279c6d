//! Closed selector sets: curve families and easing phases.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::EasingError;

/// Easing curve family. Each family provides exactly three evaluators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CurveFamily {
    Linear,
    Quad,
    Cubic,
    Quart,
    Quint,
    Sine,
    Expo,
    Circ,
    Elastic,
    Back,
    Bounce,
}

impl CurveFamily {
    pub const ALL: [CurveFamily; 11] = [
        Self::Linear,
        Self::Quad,
        Self::Cubic,
        Self::Quart,
        Self::Quint,
        Self::Sine,
        Self::Expo,
        Self::Circ,
        Self::Elastic,
        Self::Back,
        Self::Bounce,
    ];

    /// Get the name of this curve family
    #[inline]
    pub fn name(&self) -> &'static str {
        match self {
            Self::Linear => "linear",
            Self::Quad => "quad",
            Self::Cubic => "cubic",
            Self::Quart => "quart",
            Self::Quint => "quint",
            Self::Sine => "sine",
            Self::Expo => "expo",
            Self::Circ => "circ",
            Self::Elastic => "elastic",
            Self::Back => "back",
            Self::Bounce => "bounce",
        }
    }

    /// True for families whose polynomial or trigonometric shape is monotone
    /// for a positive delta (no overshoot, no oscillation).
    #[inline]
    pub fn is_monotone(&self) -> bool {
        matches!(
            self,
            Self::Linear
                | Self::Quad
                | Self::Cubic
                | Self::Quart
                | Self::Quint
                | Self::Sine
                | Self::Expo
                | Self::Circ
        )
    }
}

impl fmt::Display for CurveFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for CurveFamily {
    type Err = EasingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lowered = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|family| family.name() == lowered)
            .ok_or_else(|| EasingError::InvalidCurveSelector {
                selector: s.to_string(),
            })
    }
}

/// Which portion of the curve shape is used.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EasingPhase {
    /// Accelerate from rest.
    EaseIn,
    /// Decelerate to rest.
    EaseOut,
    /// Accelerate through the first half, decelerate through the second.
    EaseInOut,
}

impl EasingPhase {
    pub const ALL: [EasingPhase; 3] = [Self::EaseIn, Self::EaseOut, Self::EaseInOut];

    #[inline]
    pub fn name(&self) -> &'static str {
        match self {
            Self::EaseIn => "ease_in",
            Self::EaseOut => "ease_out",
            Self::EaseInOut => "ease_in_out",
        }
    }
}

impl fmt::Display for EasingPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for EasingPhase {
    type Err = EasingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .trim()
            .chars()
            .filter(|c| *c != '_' && *c != '-')
            .collect::<String>()
            .to_ascii_lowercase();
        match normalized.as_str() {
            "in" | "easein" => Ok(Self::EaseIn),
            "out" | "easeout" => Ok(Self::EaseOut),
            "inout" | "easeinout" => Ok(Self::EaseInOut),
            _ => Err(EasingError::InvalidCurveSelector {
                selector: s.to_string(),
            }),
        }
    }
}
