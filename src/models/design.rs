//! Key labels and designs.

use crate::models::tokens::KeyColor;
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

/// What is drawn on a key face.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Label {
    /// Plain text, serialized as `{"text": ...}`
    Text(String),
    /// Host-provided symbol image, serialized as `{"system_image": ...}`
    SystemImage(String),
    /// Large main text with a smaller sub text underneath
    MainAndSub {
        /// Main text
        main: String,
        /// Sub text
        sub: String,
    },
}

impl Label {
    /// Creates a text label.
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text(text.into())
    }

    /// Creates a system image label.
    pub fn system_image(name: impl Into<String>) -> Self {
        Self::SystemImage(name.into())
    }

    /// Creates a main-and-sub label.
    pub fn main_and_sub(main: impl Into<String>, sub: impl Into<String>) -> Self {
        Self::MainAndSub {
            main: main.into(),
            sub: sub.into(),
        }
    }
}

impl Serialize for Label {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Text(text) => {
                let mut map = serializer.serialize_map(Some(1))?;
                map.serialize_entry("text", text)?;
                map.end()
            }
            Self::SystemImage(name) => {
                let mut map = serializer.serialize_map(Some(1))?;
                map.serialize_entry("system_image", name)?;
                map.end()
            }
            Self::MainAndSub { main, sub } => {
                let mut map = serializer.serialize_map(Some(3))?;
                map.serialize_entry("type", "main_and_sub")?;
                map.serialize_entry("main", main)?;
                map.serialize_entry("sub", sub)?;
                map.end()
            }
        }
    }
}

/// Face of a top-level key: label plus optional theme color.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct KeyDesign {
    /// Label drawn on the key
    pub label: Label,
    /// Theme color; omitted from the document when unset
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<KeyColor>,
}

impl KeyDesign {
    /// Creates a design with a color.
    pub const fn new(label: Label, color: KeyColor) -> Self {
        Self {
            label,
            color: Some(color),
        }
    }

    /// Creates a design that leaves the color to the host.
    pub const fn uncolored(label: Label) -> Self {
        Self { label, color: None }
    }
}

/// Face of a variation. Variations inherit the parent key's color.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VariationDesign {
    /// Label shown while the variation is active
    pub label: Label,
}

impl VariationDesign {
    /// Creates a variation design.
    pub const fn new(label: Label) -> Self {
        Self { label }
    }
}
