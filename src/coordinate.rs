use crate::WALL_SIZE;
use std::array;
use std::collections::HashSet;

/// The index of a row on the [wall](crate::Wall) and of its
/// [pattern line](crate::PatternLine). Only indexes in `0..WALL_SIZE` can be created.
///
/// # See Also
///
/// * [Coordinate]
/// * [PatternLine::capacity](crate::PatternLine::capacity)
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Row(usize);

/// The index of a column on the [wall](crate::Wall). Only indexes in `0..WALL_SIZE` can
/// be created.
///
/// # See Also
///
/// * [Coordinate]
/// * [column_for](crate::column_for)
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Column(usize);

/// A tuple of a [row](Row) and a [column](Column) for a cell on the [wall](crate::Wall).
///
/// # See Also
///
/// * [coordinate]
/// * [Wall::occupy](crate::Wall::occupy)
/// * [score_for_placement](crate::score_for_placement)
pub type Coordinate = (Row, Column);

/// Describes the reasons why a [row](Row), [column](Column) or [coordinate](Coordinate)
/// could not be created.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum CoordinateError {
    /// Attempting to create a [row](Row) at or past [WALL_SIZE].
    RowOutOfBounds(usize),
    /// Attempting to create a [column](Column) at or past [WALL_SIZE].
    ColumnOutOfBounds(usize),
}

impl Row {
    /// # Returns
    ///
    /// An array of all [rows](Row) from top to bottom.
    #[inline]
    pub fn rows() -> [Row; WALL_SIZE] {
        array::from_fn(Row)
    }

    /// # Returns
    ///
    /// The index of the row in `0..WALL_SIZE`.
    #[inline]
    pub fn index(self) -> usize {
        self.0
    }
}

impl Column {
    /// # Returns
    ///
    /// An array of all [columns](Column) from left to right.
    #[inline]
    pub fn columns() -> [Column; WALL_SIZE] {
        array::from_fn(Column)
    }

    /// # Returns
    ///
    /// The index of the column in `0..WALL_SIZE`.
    #[inline]
    pub fn index(self) -> usize {
        self.0
    }
}

impl TryFrom<usize> for Row {
    type Error = CoordinateError;

    /// # Errors
    ///
    /// * [`CoordinateError::RowOutOfBounds`] when `index` is not in `0..WALL_SIZE`.
    #[inline]
    fn try_from(index: usize) -> Result<Row, CoordinateError> {
        if index < WALL_SIZE {
            Ok(Row(index))
        } else {
            Err(CoordinateError::RowOutOfBounds(index))
        }
    }
}

impl TryFrom<usize> for Column {
    type Error = CoordinateError;

    /// # Errors
    ///
    /// * [`CoordinateError::ColumnOutOfBounds`] when `index` is not in `0..WALL_SIZE`.
    #[inline]
    fn try_from(index: usize) -> Result<Column, CoordinateError> {
        if index < WALL_SIZE {
            Ok(Column(index))
        } else {
            Err(CoordinateError::ColumnOutOfBounds(index))
        }
    }
}

/// Checks both components and returns all found errors. Otherwise, returns the
/// [coordinate](Coordinate) at `row` and `column`.
///
/// # Arguments
///
/// * `row`: The row index from top to bottom.
/// * `column`: The column index from left to right.
///
/// # Errors
///
/// * [`CoordinateError::RowOutOfBounds`] when `row` is not in `0..WALL_SIZE`.
/// * [`CoordinateError::ColumnOutOfBounds`] when `column` is not in `0..WALL_SIZE`.
pub fn coordinate(row: usize, column: usize) -> Result<Coordinate, HashSet<CoordinateError>> {
    match (Row::try_from(row), Column::try_from(column)) {
        (Ok(row), Ok(column)) => Ok((row, column)),
        (row, column) => Err(row.err().into_iter().chain(column.err()).collect()),
    }
}
