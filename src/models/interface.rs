//! Interface assembly and structural validation.

use crate::error::{CustardError, Result};
use crate::models::layout::{GridFitLayout, KeyData, KeyLayout, Specifier};
use crate::models::tokens::KeyStyle;
use serde::Serialize;
use std::collections::HashMap;
use tracing::debug;

/// Visible surface of a keyboard: style, layout and placed keys.
///
/// # Validation
///
/// Checked eagerly in [`Interface::new`], in key order:
/// - Specifier variant must match the layout variant
/// - Grid specifiers must lie inside the grid
/// - No grid cell may be covered by two keys
///
/// Scroll specifiers carry no position, so scroll layouts are not checked for
/// overlap.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Interface {
    key_style: KeyStyle,
    key_layout: KeyLayout,
    keys: Vec<KeyData>,
}

impl Interface {
    /// Assembles an interface.
    ///
    /// # Errors
    ///
    /// Returns `SpecifierLayoutMismatch`, `KeySpecifierOutOfBounds` or
    /// `DuplicateKeySpecifier` for the first offending key.
    pub fn new(
        key_style: KeyStyle,
        key_layout: impl Into<KeyLayout>,
        keys: Vec<KeyData>,
    ) -> Result<Self> {
        let key_layout = key_layout.into();

        match key_layout {
            KeyLayout::GridFit(grid) => Self::validate_grid(&grid, &keys)?,
            KeyLayout::Scroll(_) => Self::validate_scroll(&keys)?,
        }

        debug!(
            layout = key_layout.type_name(),
            keys = keys.len(),
            "Assembled custard interface"
        );

        Ok(Self {
            key_style,
            key_layout,
            keys,
        })
    }

    fn validate_grid(grid: &GridFitLayout, keys: &[KeyData]) -> Result<()> {
        let mut occupied: HashMap<(i64, i64), usize> = HashMap::new();

        for (index, data) in keys.iter().enumerate() {
            let specifier = match &data.specifier {
                Specifier::GridFit(specifier) => specifier,
                other => {
                    return Err(CustardError::SpecifierLayoutMismatch {
                        index,
                        specifier: other.type_name(),
                        layout: "grid_fit",
                    })
                }
            };

            if !grid.contains(specifier) {
                return Err(CustardError::KeySpecifierOutOfBounds {
                    index,
                    x: specifier.x(),
                    y: specifier.y(),
                    column_count: grid.column_count(),
                    row_count: grid.row_count(),
                });
            }

            for cell in specifier.cells() {
                if let Some(&existing) = occupied.get(&cell) {
                    return Err(CustardError::DuplicateKeySpecifier {
                        index,
                        existing,
                        x: cell.0,
                        y: cell.1,
                    });
                }
                occupied.insert(cell, index);
            }
        }

        Ok(())
    }

    fn validate_scroll(keys: &[KeyData]) -> Result<()> {
        for (index, data) in keys.iter().enumerate() {
            if let Specifier::GridFit(_) = data.specifier {
                return Err(CustardError::SpecifierLayoutMismatch {
                    index,
                    specifier: data.specifier.type_name(),
                    layout: "scroll",
                });
            }
        }
        Ok(())
    }

    /// Key style.
    pub const fn key_style(&self) -> KeyStyle {
        self.key_style
    }

    /// Key layout.
    pub const fn key_layout(&self) -> &KeyLayout {
        &self.key_layout
    }

    /// Placed keys in document order.
    pub fn keys(&self) -> &[KeyData] {
        &self.keys
    }
}
