//! Key actions and their builders.
//!
//! Actions are plain values. Builders validate their arguments up front, so an
//! `Action` that exists is always serializable as-is.

use crate::error::{CustardError, Result};
use crate::models::tokens::{ActionKind, ScanDirection, TabType};
use serde::Serialize;
use std::collections::BTreeMap;

/// Something a key does when pressed, held, or flicked.
///
/// Serializes as an object whose first field is `"type"`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Action {
    /// Types `text` at the cursor.
    Input {
        /// Text to insert
        text: String,
    },
    /// Replaces the characters before the cursor using a lookup table.
    ReplaceLastCharacters {
        /// Source substring to replacement
        table: BTreeMap<String, String>,
    },
    /// Host default replacement.
    ReplaceDefault,
    /// Switches to another tab.
    MoveTab {
        /// Whether `identifier` names a custom or a system tab
        tab_type: TabType,
        /// Tab identifier
        identifier: String,
    },
    /// Moves the cursor; negative counts move toward the document start.
    MoveCursor {
        /// Signed character count
        count: i64,
    },
    /// Moves the cursor next to the nearest stop string.
    SmartMoveCursor {
        /// Scan direction
        direction: ScanDirection,
        /// Stop strings
        targets: Vec<String>,
    },
    /// Deletes characters; negative counts delete toward the document end.
    Delete {
        /// Signed character count
        count: i64,
    },
    /// Deletes up to the nearest stop string.
    SmartDelete {
        /// Scan direction
        direction: ScanDirection,
        /// Stop strings
        targets: Vec<String>,
    },
    /// Host default delete-to-sentence-start.
    SmartDeleteDefault,
    /// Starts adjusting the one-handed mode frame.
    EnableResizingMode,
    /// Toggles the cursor bar.
    ToggleCursorBar,
    /// Toggles the tab bar.
    ToggleTabBar,
    /// Toggles caps lock.
    ToggleCapsLockState,
    /// Closes the keyboard.
    DismissKeyboard,
}

impl Action {
    /// Builds an `input` action.
    ///
    /// Empty text is rejected: a key that should do nothing simply carries no
    /// action.
    pub fn input(text: impl Into<String>) -> Result<Self> {
        let text = text.into();
        if text.is_empty() {
            return Err(CustardError::action(
                ActionKind::Input.as_str(),
                "text cannot be empty",
            ));
        }
        Ok(Self::Input { text })
    }

    /// Builds a `replace_last_characters` action from (source, replacement) pairs.
    pub fn replace_last_characters<I, K, V>(pairs: I) -> Result<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let kind = ActionKind::ReplaceLastCharacters.as_str();
        let mut table = BTreeMap::new();

        for (source, replacement) in pairs {
            let source = source.into();
            if source.is_empty() {
                return Err(CustardError::action(kind, "table keys cannot be empty"));
            }
            if table.contains_key(&source) {
                return Err(CustardError::action(
                    kind,
                    format!("table key '{source}' appears more than once"),
                ));
            }
            table.insert(source, replacement.into());
        }

        Ok(Self::ReplaceLastCharacters { table })
    }

    /// Builds a `replace_default` action.
    pub const fn replace_default() -> Self {
        Self::ReplaceDefault
    }

    /// Builds a `move_tab` action.
    pub fn move_tab(tab_type: TabType, identifier: impl Into<String>) -> Result<Self> {
        let identifier = identifier.into();
        if identifier.is_empty() {
            return Err(CustardError::action(
                ActionKind::MoveTab.as_str(),
                "tab identifier cannot be empty",
            ));
        }
        Ok(Self::MoveTab {
            tab_type,
            identifier,
        })
    }

    /// Builds a `move_cursor` action. Zero is a valid no-op.
    pub const fn move_cursor(count: i64) -> Self {
        Self::MoveCursor { count }
    }

    /// Builds a `smart_move_cursor` action.
    pub fn smart_move_cursor<I, S>(direction: ScanDirection, targets: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let targets = collect_targets(ActionKind::SmartMoveCursor, targets)?;
        Ok(Self::SmartMoveCursor { direction, targets })
    }

    /// Builds a `delete` action. Zero is a valid no-op.
    pub const fn delete(count: i64) -> Self {
        Self::Delete { count }
    }

    /// Builds a `smart_delete` action.
    pub fn smart_delete<I, S>(direction: ScanDirection, targets: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let targets = collect_targets(ActionKind::SmartDelete, targets)?;
        Ok(Self::SmartDelete { direction, targets })
    }

    /// Builds a `smart_delete_default` action.
    pub const fn smart_delete_default() -> Self {
        Self::SmartDeleteDefault
    }

    /// Builds an `enable_resizing_mode` action.
    pub const fn enable_resizing_mode() -> Self {
        Self::EnableResizingMode
    }

    /// Builds a `toggle_cursor_bar` action.
    pub const fn toggle_cursor_bar() -> Self {
        Self::ToggleCursorBar
    }

    /// Builds a `toggle_tab_bar` action.
    pub const fn toggle_tab_bar() -> Self {
        Self::ToggleTabBar
    }

    /// Builds a `toggle_caps_lock_state` action.
    pub const fn toggle_caps_lock_state() -> Self {
        Self::ToggleCapsLockState
    }

    /// Builds a `dismiss_keyboard` action.
    pub const fn dismiss_keyboard() -> Self {
        Self::DismissKeyboard
    }

    /// Returns the discriminator this action serializes with.
    pub const fn kind(&self) -> ActionKind {
        match self {
            Self::Input { .. } => ActionKind::Input,
            Self::ReplaceLastCharacters { .. } => ActionKind::ReplaceLastCharacters,
            Self::ReplaceDefault => ActionKind::ReplaceDefault,
            Self::MoveTab { .. } => ActionKind::MoveTab,
            Self::MoveCursor { .. } => ActionKind::MoveCursor,
            Self::SmartMoveCursor { .. } => ActionKind::SmartMoveCursor,
            Self::Delete { .. } => ActionKind::Delete,
            Self::SmartDelete { .. } => ActionKind::SmartDelete,
            Self::SmartDeleteDefault => ActionKind::SmartDeleteDefault,
            Self::EnableResizingMode => ActionKind::EnableResizingMode,
            Self::ToggleCursorBar => ActionKind::ToggleCursorBar,
            Self::ToggleTabBar => ActionKind::ToggleTabBar,
            Self::ToggleCapsLockState => ActionKind::ToggleCapsLockState,
            Self::DismissKeyboard => ActionKind::DismissKeyboard,
        }
    }
}

/// Collects stop strings for the smart actions. Duplicates are kept.
fn collect_targets<I, S>(kind: ActionKind, targets: I) -> Result<Vec<String>>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let targets: Vec<String> = targets.into_iter().map(Into::into).collect();

    if targets.is_empty() {
        return Err(CustardError::action(
            kind.as_str(),
            "at least one target is required",
        ));
    }
    if let Some(position) = targets.iter().position(String::is_empty) {
        return Err(CustardError::action(
            kind.as_str(),
            format!("target {position} is empty"),
        ));
    }

    Ok(targets)
}
