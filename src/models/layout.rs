//! Key layouts, specifiers and key placement.
//!
//! Specifiers are built without knowing their layout. Whether a specifier fits
//! is decided when the interface is assembled, see [`crate::models::Interface`].

use crate::error::{CustardError, Result};
use crate::models::key::Key;
use crate::models::tokens::ScrollDirection;
use serde::Serialize;

/// Rejects counts and spans below 1.
fn validate_dimension(field: &'static str, value: u32) -> Result<()> {
    if value == 0 {
        return Err(CustardError::InvalidLayoutDimensions { field, value });
    }
    Ok(())
}

/// Arrangement of the key area.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum KeyLayout {
    /// Fixed grid stretched to the keyboard size
    GridFit(GridFitLayout),
    /// Scrollable list of keys
    Scroll(ScrollLayout),
}

impl KeyLayout {
    /// Returns the `"type"` token of the variant.
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::GridFit(_) => "grid_fit",
            Self::Scroll(_) => "scroll",
        }
    }
}

impl From<GridFitLayout> for KeyLayout {
    fn from(layout: GridFitLayout) -> Self {
        Self::GridFit(layout)
    }
}

impl From<ScrollLayout> for KeyLayout {
    fn from(layout: ScrollLayout) -> Self {
        Self::Scroll(layout)
    }
}

/// Grid of `row_count` x `column_count` equally sized cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GridFitLayout {
    row_count: u32,
    column_count: u32,
}

impl GridFitLayout {
    /// Creates a grid layout.
    ///
    /// # Errors
    ///
    /// Returns `InvalidLayoutDimensions` if either count is 0.
    pub fn new(row_count: u32, column_count: u32) -> Result<Self> {
        validate_dimension("row_count", row_count)?;
        validate_dimension("column_count", column_count)?;
        Ok(Self {
            row_count,
            column_count,
        })
    }

    /// Number of rows.
    pub const fn row_count(&self) -> u32 {
        self.row_count
    }

    /// Number of columns.
    pub const fn column_count(&self) -> u32 {
        self.column_count
    }

    /// Returns true if every cell covered by `specifier` lies inside the grid.
    ///
    /// Compares against the remaining room in each axis, so coordinates near
    /// `i64::MAX` cannot overflow.
    pub fn contains(&self, specifier: &GridFitSpecifier) -> bool {
        let fits = |start: i64, span: u32, count: u32| {
            start >= 0 && start <= i64::from(count) - i64::from(span)
        };

        fits(specifier.x, specifier.width, self.column_count)
            && fits(specifier.y, specifier.height, self.row_count)
    }
}

/// Scrollable layout showing `row_count` x `column_count` keys at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ScrollLayout {
    direction: ScrollDirection,
    row_count: u32,
    column_count: u32,
}

impl ScrollLayout {
    /// Creates a scroll layout.
    ///
    /// # Errors
    ///
    /// Returns `InvalidLayoutDimensions` if either count is 0.
    pub fn new(direction: ScrollDirection, row_count: u32, column_count: u32) -> Result<Self> {
        validate_dimension("row_count", row_count)?;
        validate_dimension("column_count", column_count)?;
        Ok(Self {
            direction,
            row_count,
            column_count,
        })
    }

    /// Scroll axis.
    pub const fn direction(&self) -> ScrollDirection {
        self.direction
    }

    /// Visible rows.
    pub const fn row_count(&self) -> u32 {
        self.row_count
    }

    /// Visible columns.
    pub const fn column_count(&self) -> u32 {
        self.column_count
    }
}

/// Where a key sits inside its layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Specifier {
    /// Cell of a grid layout
    GridFit(GridFitSpecifier),
    /// Extent inside a scroll layout
    Scroll(ScrollSpecifier),
}

impl Specifier {
    /// Returns the `"type"` token of the variant.
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::GridFit(_) => "grid_fit",
            Self::Scroll(_) => "scroll",
        }
    }
}

impl From<GridFitSpecifier> for Specifier {
    fn from(specifier: GridFitSpecifier) -> Self {
        Self::GridFit(specifier)
    }
}

impl From<ScrollSpecifier> for Specifier {
    fn from(specifier: ScrollSpecifier) -> Self {
        Self::Scroll(specifier)
    }
}

/// Grid cell at column `x`, row `y`, spanning `width` x `height` cells.
///
/// Coordinates are signed so that any integer can be expressed; bounds are
/// checked against the layout at interface assembly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct GridFitSpecifier {
    x: i64,
    y: i64,
    width: u32,
    height: u32,
}

impl GridFitSpecifier {
    /// Creates a single-cell specifier.
    pub const fn new(x: i64, y: i64) -> Self {
        Self {
            x,
            y,
            width: 1,
            height: 1,
        }
    }

    /// Creates a specifier spanning several cells.
    ///
    /// # Errors
    ///
    /// Returns `InvalidLayoutDimensions` if `width` or `height` is 0.
    pub fn with_span(x: i64, y: i64, width: u32, height: u32) -> Result<Self> {
        validate_dimension("width", width)?;
        validate_dimension("height", height)?;
        Ok(Self {
            x,
            y,
            width,
            height,
        })
    }

    /// Column of the top-left cell.
    pub const fn x(&self) -> i64 {
        self.x
    }

    /// Row of the top-left cell.
    pub const fn y(&self) -> i64 {
        self.y
    }

    /// Columns spanned.
    pub const fn width(&self) -> u32 {
        self.width
    }

    /// Rows spanned.
    pub const fn height(&self) -> u32 {
        self.height
    }

    /// Every (x, y) cell covered by this specifier, row by row.
    ///
    /// Cells past `i64::MAX` are not representable and are skipped.
    pub fn cells(&self) -> impl Iterator<Item = (i64, i64)> + '_ {
        (0..i64::from(self.height))
            .filter_map(move |dy| self.y.checked_add(dy))
            .flat_map(move |y| {
                (0..i64::from(self.width))
                    .filter_map(move |dx| self.x.checked_add(dx))
                    .map(move |x| (x, y))
            })
    }
}

/// Extent of a key inside a scroll layout, in layout units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ScrollSpecifier {
    width: u32,
    height: u32,
}

impl ScrollSpecifier {
    /// Creates a scroll specifier.
    ///
    /// # Errors
    ///
    /// Returns `InvalidLayoutDimensions` if `width` or `height` is 0.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        validate_dimension("width", width)?;
        validate_dimension("height", height)?;
        Ok(Self { width, height })
    }

    /// Width in layout units.
    pub const fn width(&self) -> u32 {
        self.width
    }

    /// Height in layout units.
    pub const fn height(&self) -> u32 {
        self.height
    }
}

/// A key together with its position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct KeyData {
    /// Position inside the layout
    pub specifier: Specifier,
    /// The key
    pub key: Key,
}

impl KeyData {
    /// Places `key` at `specifier`.
    pub fn new(specifier: impl Into<Specifier>, key: impl Into<Key>) -> Self {
        Self {
            specifier: specifier.into(),
            key: key.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::key::SystemKey;
    use crate::models::tokens::SystemKeyType;
    use serde_json::json;

    #[test]
    fn test_grid_layout_dimensions() {
        assert!(GridFitLayout::new(1, 1).is_ok());
        assert_eq!(
            GridFitLayout::new(0, 3).unwrap_err(),
            CustardError::InvalidLayoutDimensions {
                field: "row_count",
                value: 0
            }
        );
        assert_eq!(
            GridFitLayout::new(3, 0).unwrap_err(),
            CustardError::InvalidLayoutDimensions {
                field: "column_count",
                value: 0
            }
        );
        assert!(ScrollLayout::new(ScrollDirection::Vertical, 0, 4).is_err());
    }

    #[test]
    fn test_contains_matches_half_open_bounds() {
        let layout = GridFitLayout::new(2, 3).unwrap();

        for y in -2..5 {
            for x in -2..6 {
                let expected = (0..3).contains(&x) && (0..2).contains(&y);
                assert_eq!(
                    layout.contains(&GridFitSpecifier::new(x, y)),
                    expected,
                    "({x}, {y})"
                );
            }
        }
    }

    #[test]
    fn test_contains_rejects_extreme_coordinates() {
        let layout = GridFitLayout::new(2, 2).unwrap();

        for (x, y) in [
            (i64::MAX, 0),
            (0, i64::MAX),
            (i64::MIN, 0),
            (0, i64::MIN),
            (i64::MAX, i64::MAX),
        ] {
            assert!(!layout.contains(&GridFitSpecifier::new(x, y)), "({x}, {y})");
        }

        let wide = GridFitSpecifier::with_span(i64::MAX - 1, 0, 2, 1).unwrap();
        assert!(!layout.contains(&wide));
    }

    #[test]
    fn test_cells_near_max_do_not_overflow() {
        let specifier = GridFitSpecifier::with_span(i64::MAX, 0, 3, 1).unwrap();
        let cells: Vec<_> = specifier.cells().collect();
        assert_eq!(cells, vec![(i64::MAX, 0)]);
    }

    #[test]
    fn test_contains_accounts_for_span() {
        let layout = GridFitLayout::new(4, 5).unwrap();
        assert!(layout.contains(&GridFitSpecifier::with_span(3, 0, 2, 4).unwrap()));
        assert!(!layout.contains(&GridFitSpecifier::with_span(4, 0, 2, 1).unwrap()));
        assert!(!layout.contains(&GridFitSpecifier::with_span(0, 3, 1, 2).unwrap()));
    }

    #[test]
    fn test_span_cells() {
        let specifier = GridFitSpecifier::with_span(1, 2, 2, 2).unwrap();
        let cells: Vec<_> = specifier.cells().collect();
        assert_eq!(cells, vec![(1, 2), (2, 2), (1, 3), (2, 3)]);
        assert!(GridFitSpecifier::with_span(0, 0, 0, 1).is_err());
    }

    #[test]
    fn test_layout_shapes() {
        let grid = KeyLayout::from(GridFitLayout::new(2, 2).unwrap());
        assert_eq!(
            serde_json::to_value(grid).unwrap(),
            json!({"type": "grid_fit", "row_count": 2, "column_count": 2})
        );

        let scroll = KeyLayout::from(ScrollLayout::new(ScrollDirection::Horizontal, 2, 8).unwrap());
        assert_eq!(scroll.type_name(), "scroll");
        assert_eq!(
            serde_json::to_value(scroll).unwrap(),
            json!({"type": "scroll", "direction": "horizontal", "row_count": 2, "column_count": 8})
        );
    }

    #[test]
    fn test_key_data_shape() {
        let data = KeyData::new(
            GridFitSpecifier::new(1, 0),
            SystemKey::new(SystemKeyType::Enter),
        );
        assert_eq!(
            serde_json::to_value(&data).unwrap(),
            json!({
                "specifier": {"type": "grid_fit", "x": 1, "y": 0, "width": 1, "height": 1},
                "key": {"type": "system", "system_key_type": "enter"}
            })
        );

        let data = KeyData::new(
            ScrollSpecifier::new(1, 2).unwrap(),
            SystemKey::new(SystemKeyType::Enter),
        );
        assert_eq!(
            serde_json::to_value(&data).unwrap()["specifier"],
            json!({"type": "scroll", "width": 1, "height": 2})
        );
    }
}
