//! Long-press behavior and key variations.

use crate::models::action::Action;
use crate::models::design::VariationDesign;
use crate::models::tokens::FlickDirection;
use serde::Serialize;

/// Actions bound to holding a key.
///
/// `start` runs once when the long press is recognized, `repeat` runs on every
/// repeat tick while the key stays down. Either list may be empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LongpressAction {
    /// Fired once when the long press begins
    pub start: Vec<Action>,
    /// Fired repeatedly while held
    pub repeat: Vec<Action>,
}

impl LongpressAction {
    /// Creates a long-press binding.
    pub fn new(start: Vec<Action>, repeat: Vec<Action>) -> Self {
        Self { start, repeat }
    }

    /// Binds only the start phase.
    pub fn on_start(start: Vec<Action>) -> Self {
        Self {
            start,
            repeat: Vec::new(),
        }
    }

    /// Binds only the repeat phase.
    pub fn on_repeat(repeat: Vec<Action>) -> Self {
        Self {
            start: Vec::new(),
            repeat,
        }
    }

    /// Returns true if neither phase has any action.
    pub fn is_empty(&self) -> bool {
        self.start.is_empty() && self.repeat.is_empty()
    }
}

/// Alternate face and behavior of a key, selected by a gesture.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Variation {
    /// Face shown while active
    pub design: VariationDesign,
    /// Fired in order on tap
    pub press_actions: Vec<Action>,
    /// Long-press binding of the variation itself
    pub longpress_actions: LongpressAction,
}

impl Variation {
    /// Creates a variation.
    pub fn new(
        design: VariationDesign,
        press_actions: Vec<Action>,
        longpress_actions: LongpressAction,
    ) -> Self {
        Self {
            design,
            press_actions,
            longpress_actions,
        }
    }

    /// Creates a variation with no long-press behavior.
    pub fn tap(design: VariationDesign, press_actions: Vec<Action>) -> Self {
        Self::new(design, press_actions, LongpressAction::default())
    }
}

/// A variation reached by flicking in `direction`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FlickVariationData {
    /// Flick direction selecting this variation
    pub direction: FlickDirection,
    /// The variation
    pub key: Variation,
}

impl FlickVariationData {
    /// Binds a variation to a flick direction.
    pub const fn new(direction: FlickDirection, key: Variation) -> Self {
        Self { direction, key }
    }
}

/// A candidate offered in the long-press popup of a key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LongpressVariationData {
    /// The variation
    pub key: Variation,
}

impl LongpressVariationData {
    /// Wraps a variation as a long-press candidate.
    pub const fn new(key: Variation) -> Self {
        Self { key }
    }
}

/// One entry of a custom key's variation list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type")]
pub enum VariationData {
    /// Serialized as `{"type": "flick_variation", "direction": ..., "key": ...}`
    #[serde(rename = "flick_variation")]
    Flick(FlickVariationData),
    /// Serialized as `{"type": "longpress_variation", "key": ...}`
    #[serde(rename = "longpress_variation")]
    Longpress(LongpressVariationData),
}

impl VariationData {
    /// Flick direction of the entry, if it is a flick variation.
    pub const fn flick_direction(&self) -> Option<FlickDirection> {
        match self {
            Self::Flick(data) => Some(data.direction),
            Self::Longpress(_) => None,
        }
    }

    /// The wrapped variation.
    pub const fn variation(&self) -> &Variation {
        match self {
            Self::Flick(data) => &data.key,
            Self::Longpress(data) => &data.key,
        }
    }
}

impl From<FlickVariationData> for VariationData {
    fn from(data: FlickVariationData) -> Self {
        Self::Flick(data)
    }
}

impl From<LongpressVariationData> for VariationData {
    fn from(data: LongpressVariationData) -> Self {
        Self::Longpress(data)
    }
}
