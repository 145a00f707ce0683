use std::str::FromStr;

use anyhow::bail;

/// Cosmetic interaction mode shown in the toolbar and viewport overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InteractionMode {
    #[default]
    Object,
    Edit,
    Sculpt,
}

impl InteractionMode {
    pub const ALL: [InteractionMode; 3] = [
        InteractionMode::Object,
        InteractionMode::Edit,
        InteractionMode::Sculpt,
    ];

    pub fn label(self) -> &'static str {
        match self {
            InteractionMode::Object => "Object Mode",
            InteractionMode::Edit => "Edit Mode",
            InteractionMode::Sculpt => "Sculpt Mode",
        }
    }

    pub fn index(self) -> usize {
        match self {
            InteractionMode::Object => 0,
            InteractionMode::Edit => 1,
            InteractionMode::Sculpt => 2,
        }
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }
}

impl FromStr for InteractionMode {
    type Err = anyhow::Error;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "object" => Ok(InteractionMode::Object),
            "edit" => Ok(InteractionMode::Edit),
            "sculpt" => Ok(InteractionMode::Sculpt),
            other => bail!("Unknown interaction mode '{}'", other),
        }
    }
}
