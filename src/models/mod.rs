//! Data model of a custard document.
//!
//! Every type here is a plain value. Constructors validate their own
//! invariants; [`Interface::new`] additionally validates key placement against
//! the layout. A tree that was constructed successfully always serializes.

pub mod action;
pub mod custard;
pub mod design;
pub mod interface;
pub mod key;
pub mod layout;
pub mod tokens;
pub mod variation;

// Re-export all model types
pub use action::Action;
pub use custard::{Custard, CustardList, Document, Metadata};
pub use design::{KeyDesign, Label, VariationDesign};
pub use interface::Interface;
pub use key::{CustomKey, Key, SystemKey};
pub use layout::{
    GridFitLayout, GridFitSpecifier, KeyData, KeyLayout, ScrollLayout, ScrollSpecifier, Specifier,
};
pub use tokens::{
    ActionKind, FlickDirection, InputStyle, KeyColor, KeyStyle, Language, ScanDirection,
    ScrollDirection, SystemKeyType, TabType,
};
pub use variation::{
    FlickVariationData, LongpressAction, LongpressVariationData, Variation, VariationData,
};
