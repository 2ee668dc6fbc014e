use crate::{Color, Column, Row, WALL_SIZE};

/// The color printed on every cell of the [wall](crate::Wall) indexed by row then column.
///
/// Every row and every column contains each [color](Color) exactly once. Each row is the row
/// above shifted one cell to the right, so the [color](Color) leaving the right edge of one row
/// enters the left edge of the next.
///
/// # See Also
///
/// * [color_at]
/// * [column_for]
pub const WALL_PATTERN: [[Color; WALL_SIZE]; WALL_SIZE] = [
    [
        Color::Blue,
        Color::Yellow,
        Color::Red,
        Color::Black,
        Color::White,
    ],
    [
        Color::White,
        Color::Blue,
        Color::Yellow,
        Color::Red,
        Color::Black,
    ],
    [
        Color::Black,
        Color::White,
        Color::Blue,
        Color::Yellow,
        Color::Red,
    ],
    [
        Color::Red,
        Color::Black,
        Color::White,
        Color::Blue,
        Color::Yellow,
    ],
    [
        Color::Yellow,
        Color::Red,
        Color::Black,
        Color::White,
        Color::Blue,
    ],
];

/// # Returns
///
/// The [color](Color) printed on the wall at `row` and `column`.
#[inline]
pub fn color_at(row: Row, column: Column) -> Color {
    WALL_PATTERN[row.index()][column.index()]
}

/// # Returns
///
/// The [colors](Color) printed on the wall at `row` from left to right.
#[inline]
pub fn row_colors(row: Row) -> [Color; WALL_SIZE] {
    WALL_PATTERN[row.index()]
}

/// Finds the only [column](Column) in `row` where `color` is printed on the wall.
///
/// # See Also
///
/// * [legal_pattern_line_row](crate::legal_pattern_line_row)
/// * [PatternLine::flush](crate::PatternLine::flush)
/// * [complete_colors](crate::complete_colors)
///
/// # Returns
///
/// The [column](Column) which satisfies `color_at(row, column) == color`.
#[inline]
pub fn column_for(row: Row, color: Color) -> Column {
    // rows shift right by one, so the color index moves right by the row index
    Column::columns()[(color as usize + row.index()) % WALL_SIZE]
}
