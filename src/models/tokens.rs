//! Closed token sets shared by the whole document.
//!
//! Each enumeration maps one-to-one onto the wire tokens of the custard
//! schema. `as_str` is the only place a token is spelled out; parsing,
//! display and serialization all go through it.

use crate::error::{CustardError, Result};
use serde::Serialize;

macro_rules! wire_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident as $kind:literal {
            $( $(#[$vmeta:meta])* $variant:ident => $token:literal, )+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
        pub enum $name {
            $( $(#[$vmeta])* #[serde(rename = $token)] $variant, )+
        }

        impl $name {
            /// Every member, in declaration order.
            pub const ALL: &'static [Self] = &[$(Self::$variant),+];

            /// Returns the canonical wire token.
            #[must_use]
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$variant => $token,)+
                }
            }

            /// Returns every accepted wire token, in declaration order.
            #[must_use]
            pub fn tokens() -> Vec<&'static str> {
                Self::ALL.iter().map(|member| member.as_str()).collect()
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl std::str::FromStr for $name {
            type Err = CustardError;

            fn from_str(value: &str) -> Result<Self> {
                Self::ALL
                    .iter()
                    .copied()
                    .find(|member| member.as_str() == value)
                    .ok_or_else(|| CustardError::InvalidEnumValue {
                        kind: $kind,
                        value: value.to_string(),
                        allowed: Self::tokens(),
                    })
            }
        }

        impl TryFrom<&str> for $name {
            type Error = CustardError;

            fn try_from(value: &str) -> Result<Self> {
                value.parse()
            }
        }
    };
}

wire_enum! {
    /// Language the keyboard types in.
    pub enum Language as "language" {
        /// Japanese
        JaJp => "ja_JP",
        /// English (US)
        EnUs => "en_US",
        /// Greek
        ElGr => "el_GR",
        /// No conversion language
        None => "none",
    }
}

wire_enum! {
    /// How typed characters reach the converter.
    pub enum InputStyle as "input style" {
        /// Characters are committed as typed
        Direct => "direct",
        /// Romaji input converted to kana
        Roman2Kana => "roman2kana",
    }
}

wire_enum! {
    /// Visual style of the key grid.
    pub enum KeyStyle as "key style" {
        /// Phone keypad style with flick keys
        TenkeyStyle => "tenkey_style",
        /// Desktop keyboard style
        PcStyle => "pc_style",
    }
}

wire_enum! {
    /// Direction of a flick gesture.
    pub enum FlickDirection as "flick direction" {
        /// Flick to the left
        Left => "left",
        /// Flick upwards
        Top => "top",
        /// Flick to the right
        Right => "right",
        /// Flick downwards
        Bottom => "bottom",
    }
}

wire_enum! {
    /// Theme color slot of a key.
    pub enum KeyColor as "key color" {
        /// Regular character key
        Normal => "normal",
        /// Function key
        Special => "special",
        /// Highlighted key
        Selected => "selected",
        /// De-emphasized key
        Unimportant => "unimportant",
    }
}

wire_enum! {
    /// Scroll axis of a scroll layout.
    pub enum ScrollDirection as "scroll direction" {
        /// Scrolls top to bottom
        Vertical => "vertical",
        /// Scrolls left to right
        Horizontal => "horizontal",
    }
}

wire_enum! {
    /// Keys whose behavior is owned by the host application.
    pub enum SystemKeyType as "system key type" {
        /// Switches to the next keyboard
        ChangeKeyboard => "change_keyboard",
        /// Return / confirm key
        Enter => "enter",
        /// Upper/lower case toggle
        UpperLower => "upper_lower",
        /// Cycles conversion candidates
        NextCandidate => "next_candidate",
        /// Small kana / dakuten key of the flick keyboard
        FlickKogaki => "flick_kogaki",
        /// Punctuation key of the flick keyboard
        FlickKutoten => "flick_kutoten",
        /// Hiragana tab switch of the flick keyboard
        FlickHiraTab => "flick_hira_tab",
        /// Alphabet tab switch of the flick keyboard
        FlickAbcTab => "flick_abc_tab",
        /// Number/symbol tab switch of the flick keyboard
        FlickStar123Tab => "flick_star123_tab",
    }
}

wire_enum! {
    /// Kind of tab a `move_tab` action targets.
    pub enum TabType as "tab type" {
        /// A user-supplied custard tab, addressed by identifier
        Custom => "custom",
        /// A built-in tab of the host application
        System => "system",
    }
}

wire_enum! {
    /// Direction of a smart cursor move or smart delete.
    pub enum ScanDirection as "scan direction" {
        /// Toward the end of the document
        Forward => "forward",
        /// Toward the start of the document
        Backward => "backward",
    }
}

wire_enum! {
    /// Discriminator carried by every action object.
    pub enum ActionKind as "action kind" {
        /// Types text
        Input => "input",
        /// Rewrites the characters before the cursor through a table
        ReplaceLastCharacters => "replace_last_characters",
        /// Host default replacement (dakuten cycling)
        ReplaceDefault => "replace_default",
        /// Switches tab
        MoveTab => "move_tab",
        /// Moves the cursor by a count
        MoveCursor => "move_cursor",
        /// Moves the cursor up to a stop string
        SmartMoveCursor => "smart_move_cursor",
        /// Deletes a count of characters
        Delete => "delete",
        /// Deletes up to a stop string
        SmartDelete => "smart_delete",
        /// Host default delete-to-sentence-start
        SmartDeleteDefault => "smart_delete_default",
        /// Starts one-handed mode resizing
        EnableResizingMode => "enable_resizing_mode",
        /// Shows or hides the cursor bar
        ToggleCursorBar => "toggle_cursor_bar",
        /// Shows or hides the tab bar
        ToggleTabBar => "toggle_tab_bar",
        /// Toggles caps lock
        ToggleCapsLockState => "toggle_caps_lock_state",
        /// Closes the keyboard
        DismissKeyboard => "dismiss_keyboard",
    }
}
