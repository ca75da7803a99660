//! Shared test fixtures for document-level tests.
#![allow(dead_code)] // Not every test file uses every fixture

use custard_kit::models::{
    Action, Custard, CustomKey, FlickDirection, FlickVariationData, GridFitLayout,
    GridFitSpecifier, InputStyle, Interface, KeyColor, KeyData, KeyDesign, KeyStyle, Label,
    Language, LongpressAction, Metadata, SystemKey, SystemKeyType, Variation, VariationDesign,
};

/// Custom "あ" key with a single left flick producing "い" and delete-on-hold.
pub fn a_key_with_left_flick() -> CustomKey {
    CustomKey::new(
        KeyDesign::new(Label::text("あ"), KeyColor::Normal),
        vec![],
        LongpressAction::on_start(vec![Action::delete(1)]),
        vec![FlickVariationData::new(
            FlickDirection::Left,
            Variation::tap(
                VariationDesign::new(Label::text("い")),
                vec![Action::input("い").unwrap()],
            ),
        )
        .into()],
    )
    .unwrap()
}

/// The four keys of the 2x2 sample: a system key at (0,0), custom keys elsewhere.
pub fn sample_keys() -> Vec<KeyData> {
    vec![
        KeyData::new(
            GridFitSpecifier::new(0, 0),
            SystemKey::new(SystemKeyType::ChangeKeyboard),
        ),
        KeyData::new(GridFitSpecifier::new(0, 1), a_key_with_left_flick()),
        KeyData::new(GridFitSpecifier::new(1, 0), a_key_with_left_flick()),
        KeyData::new(GridFitSpecifier::new(1, 1), a_key_with_left_flick()),
    ]
}

/// 2x2 grid interface holding [`sample_keys`].
pub fn sample_interface() -> Interface {
    Interface::new(
        KeyStyle::TenkeyStyle,
        GridFitLayout::new(2, 2).unwrap(),
        sample_keys(),
    )
    .unwrap()
}

/// Complete 2x2 sample custard.
pub fn sample_custard() -> Custard {
    Custard::new(
        "my_custard",
        Language::JaJp,
        InputStyle::Direct,
        Metadata::new("1.0", "私のカスタード").unwrap(),
        sample_interface(),
    )
    .unwrap()
}
