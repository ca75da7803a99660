//! System and custom keys.

use crate::error::{CustardError, Result};
use crate::models::action::Action;
use crate::models::design::KeyDesign;
use crate::models::tokens::SystemKeyType;
use crate::models::variation::{LongpressAction, VariationData};
use serde::Serialize;
use std::collections::HashSet;

/// A key placed on the interface.
///
/// Serialized with a `"type"` tag of `"system"` or `"custom"`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Key {
    /// Key implemented by the host application
    System(SystemKey),
    /// Key fully described by the document
    Custom(CustomKey),
}

impl Key {
    /// Returns the `"type"` token of the variant.
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::System(_) => "system",
            Self::Custom(_) => "custom",
        }
    }
}

impl From<SystemKey> for Key {
    fn from(key: SystemKey) -> Self {
        Self::System(key)
    }
}

impl From<CustomKey> for Key {
    fn from(key: CustomKey) -> Self {
        Self::Custom(key)
    }
}

/// A host-owned key. Only the registry token is recorded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SystemKey {
    /// Registry entry in the host application
    #[serde(rename = "system_key_type")]
    pub key_type: SystemKeyType,
}

impl SystemKey {
    /// Creates a system key.
    pub const fn new(key_type: SystemKeyType) -> Self {
        Self { key_type }
    }
}

/// A key whose design and behavior live in the document.
///
/// # Validation
///
/// - No two flick variations may share a direction
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CustomKey {
    design: KeyDesign,
    press_actions: Vec<Action>,
    longpress_actions: LongpressAction,
    variations: Vec<VariationData>,
}

impl CustomKey {
    /// Creates a custom key.
    ///
    /// # Errors
    ///
    /// Returns `DuplicateFlickDirection` if two flick variations claim the
    /// same direction.
    pub fn new(
        design: KeyDesign,
        press_actions: Vec<Action>,
        longpress_actions: LongpressAction,
        variations: Vec<VariationData>,
    ) -> Result<Self> {
        Self::validate_variations(&variations)?;

        Ok(Self {
            design,
            press_actions,
            longpress_actions,
            variations,
        })
    }

    /// Creates a custom key with only tap actions.
    pub fn simple(design: KeyDesign, press_actions: Vec<Action>) -> Self {
        Self {
            design,
            press_actions,
            longpress_actions: LongpressAction::default(),
            variations: Vec::new(),
        }
    }

    fn validate_variations(variations: &[VariationData]) -> Result<()> {
        let mut seen = HashSet::new();
        for direction in variations.iter().filter_map(VariationData::flick_direction) {
            if !seen.insert(direction) {
                return Err(CustardError::DuplicateFlickDirection {
                    direction: direction.as_str(),
                });
            }
        }
        Ok(())
    }

    /// Design of the key face.
    pub const fn design(&self) -> &KeyDesign {
        &self.design
    }

    /// Actions fired in order on tap.
    pub fn press_actions(&self) -> &[Action] {
        &self.press_actions
    }

    /// Long-press binding.
    pub const fn longpress_actions(&self) -> &LongpressAction {
        &self.longpress_actions
    }

    /// Variation entries in document order.
    pub fn variations(&self) -> &[VariationData] {
        &self.variations
    }
}
