// File: ./src/model/priority.rs
use serde::Deserialize;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown priority '{0}' (expected low, medium or high)")]
pub struct ParsePriorityError(pub String);

/// Badge colors. `Gray` is only reachable through [`priority_color`] with a label
/// that is not one of the three priorities.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PriorityColor {
    Red,
    Orange,
    Green,
    Gray,
}

impl Priority {
    /// Order of the segmented selector in the new-item form.
    pub const ALL: [Priority; 3] = [Priority::Low, Priority::Medium, Priority::High];

    pub fn label(self) -> &'static str {
        match self {
            Priority::Low => "low",
            Priority::Medium => "medium",
            Priority::High => "high",
        }
    }

    pub fn color(self) -> PriorityColor {
        match self {
            Priority::High => PriorityColor::Red,
            Priority::Medium => PriorityColor::Orange,
            Priority::Low => PriorityColor::Green,
        }
    }

    /// Unrecognized labels fall back to the default priority.
    pub fn from_label_lossy(label: &str) -> Self {
        label.parse().unwrap_or_default()
    }

    /// Steps through `ALL`, clamping at both ends.
    pub fn step(self, forward: bool) -> Self {
        let idx = Self::ALL.iter().position(|p| *p == self).unwrap_or(1);
        let next = if forward {
            (idx + 1).min(Self::ALL.len() - 1)
        } else {
            idx.saturating_sub(1)
        };
        Self::ALL[next]
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Priority {
    type Err = ParsePriorityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "low" => Ok(Priority::Low),
            "medium" => Ok(Priority::Medium),
            "high" => Ok(Priority::High),
            other => Err(ParsePriorityError(other.to_string())),
        }
    }
}

impl PriorityColor {
    /// (r, g, b) in [0.0, 1.0] range.
    pub fn rgb(self) -> (f32, f32, f32) {
        match self {
            PriorityColor::Red => (1.0, 0.23, 0.19),
            PriorityColor::Orange => (1.0, 0.58, 0.0),
            PriorityColor::Green => (0.2, 0.78, 0.35),
            PriorityColor::Gray => (0.56, 0.56, 0.58),
        }
    }
}

/// Maps a raw priority label to its badge color. Total: anything that is not
/// exactly "high", "medium" or "low" is gray.
pub fn priority_color(label: &str) -> PriorityColor {
    match label.parse::<Priority>() {
        Ok(p) => p.color(),
        Err(_) => PriorityColor::Gray,
    }
}
