// src/project_models.rs

// In-memory project description. The loader deserializes into these types and
// validates them before rendering; nothing here re-checks ids or references.

use crate::components::Dimensions;
use serde::{Deserialize, Serialize};

/// Hardware items that don't name a type are drawn as Phillips screws.
const DEFAULT_HARDWARE_COMPONENT: &str = "screw_phillips";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    #[serde(rename = "project")]
    pub info: ProjectInfo,
    #[serde(default)]
    pub parts: Parts,
    #[serde(default)]
    pub tools: Vec<String>,
    pub steps: Vec<Step>,
    #[serde(default)]
    pub wiring: Vec<Wire>,
    /// Extra project-specific warnings for the safety page.
    #[serde(default)]
    pub safety: Vec<String>,
}

impl Project {
    pub fn has_electronics(&self) -> bool {
        !self.parts.electronic.is_empty()
    }

    pub fn uses_tool(&self, tool: &str) -> bool {
        self.tools.iter().any(|t| t == tool)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectInfo {
    pub name: String,
    #[serde(default = "default_version")]
    pub version: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub two_person: bool,
}

fn default_version() -> String {
    "1.0".to_string()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PartCategory {
    #[default]
    Structural,
    Hardware,
    Electronic,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Part {
    pub id: String,
    pub name: String,
    /// Filled in from the list the part was declared in.
    #[serde(skip)]
    pub category: PartCategory,
    /// Electronic parts say `component`, structural `shape`, hardware `type`.
    #[serde(default, alias = "shape", alias = "type")]
    pub component: Option<String>,
    #[serde(default)]
    pub dimensions: Option<Dimensions>,
    #[serde(default = "default_quantity")]
    pub quantity: u32,
}

fn default_quantity() -> u32 {
    1
}

impl Part {
    pub fn new(id: &str, name: &str, category: PartCategory) -> Self {
        Part {
            id: id.to_string(),
            name: name.to_string(),
            category,
            component: None,
            dimensions: None,
            quantity: 1,
        }
    }

    pub fn with_component(mut self, component: &str) -> Self {
        self.component = Some(component.to_string());
        self
    }

    /// Registry name used to draw this part, if it has one.
    pub fn component_name(&self) -> Option<&str> {
        match (&self.component, self.category) {
            (Some(name), _) => Some(name.as_str()),
            (None, PartCategory::Hardware) => Some(DEFAULT_HARDWARE_COMPONENT),
            (None, _) => None,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(from = "RawParts")]
pub struct Parts {
    pub structural: Vec<Part>,
    pub hardware: Vec<Part>,
    pub electronic: Vec<Part>,
}

#[derive(Deserialize)]
struct RawParts {
    #[serde(default)]
    structural: Vec<Part>,
    #[serde(default)]
    hardware: Vec<Part>,
    #[serde(default)]
    electronic: Vec<Part>,
}

impl From<RawParts> for Parts {
    fn from(raw: RawParts) -> Self {
        fn tag(parts: Vec<Part>, category: PartCategory) -> Vec<Part> {
            parts
                .into_iter()
                .map(|part| Part { category, ..part })
                .collect()
        }
        Parts {
            structural: tag(raw.structural, PartCategory::Structural),
            hardware: tag(raw.hardware, PartCategory::Hardware),
            electronic: tag(raw.electronic, PartCategory::Electronic),
        }
    }
}

impl Parts {
    /// Every part, structural first, then electronic, then hardware.
    pub fn iter(&self) -> impl Iterator<Item = &Part> {
        self.structural
            .iter()
            .chain(self.electronic.iter())
            .chain(self.hardware.iter())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Action {
    #[default]
    Place,
    Attach,
    Insert,
    Wire,
    Flip,
    Test,
}

impl Action {
    /// Actions where every part after the first is brought in from above.
    pub fn brings_parts_in(self) -> bool {
        matches!(self, Action::Attach | Action::Insert | Action::Wire)
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Step {
    #[serde(default, rename = "step")]
    pub number: Option<u32>,
    #[serde(default)]
    pub action: Action,
    #[serde(default)]
    pub parts: Vec<String>,
    #[serde(default)]
    pub hardware: Vec<String>,
    #[serde(default)]
    pub repeat: Option<u32>,
    #[serde(default)]
    pub callout: bool,
    #[serde(default)]
    pub description: Option<String>,
}

impl Step {
    /// Explicit step number, or the 1-based position in the project.
    pub fn ordinal(&self, index: usize) -> u32 {
        self.number.unwrap_or(index as u32 + 1)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PinRef {
    pub part: String,
    pub pin: String,
}

/// The fixed wire palette shared with the project validator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WireColor {
    Red,
    #[default]
    Black,
    Yellow,
    Green,
    Blue,
    White,
    Orange,
    Purple,
}

impl WireColor {
    pub const ALL: [WireColor; 8] = [
        WireColor::Red,
        WireColor::Black,
        WireColor::Yellow,
        WireColor::Green,
        WireColor::Blue,
        WireColor::White,
        WireColor::Orange,
        WireColor::Purple,
    ];

    pub fn hex(self) -> &'static str {
        match self {
            WireColor::Red => "#e63946",
            WireColor::Black => "#333333",
            WireColor::Yellow => "#f4a261",
            WireColor::Green => "#2a9d8f",
            WireColor::Blue => "#457b9d",
            WireColor::White => "#cccccc",
            WireColor::Orange => "#e76f51",
            WireColor::Purple => "#7b2cbf",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            WireColor::Red => "red",
            WireColor::Black => "black",
            WireColor::Yellow => "yellow",
            WireColor::Green => "green",
            WireColor::Blue => "blue",
            WireColor::White => "white",
            WireColor::Orange => "orange",
            WireColor::Purple => "purple",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Wire {
    pub from: PinRef,
    pub to: PinRef,
    #[serde(default)]
    pub color: WireColor,
    #[serde(default)]
    pub label: Option<String>,
}
