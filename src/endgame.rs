use crate::{column_for, Color, Column, Row, Wall};

/// The raw counts of everything completed on a [wall](Wall) at the end of the game.
/// Turning counts into bonus points is left to the caller.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub struct EndgameCounts {
    /// The number of [complete rows](complete_rows).
    pub rows: usize,
    /// The number of [complete columns](complete_columns).
    pub columns: usize,
    /// The number of [complete colors](complete_colors).
    pub colors: usize,
}

/// # Returns
///
/// The number of rows where every cell is occupied.
pub fn complete_rows(wall: &Wall) -> usize {
    Row::rows()
        .into_iter()
        .filter(|&row| wall.is_row_complete(row))
        .count()
}

/// # Returns
///
/// The number of columns where every cell is occupied.
pub fn complete_columns(wall: &Wall) -> usize {
    Column::columns()
        .into_iter()
        .filter(|&column| Row::rows().into_iter().all(|row| wall.is_occupied((row, column))))
        .count()
}

/// A [color](Color) is complete when the cell where it belongs is occupied in every row.
///
/// # See Also
///
/// * [column_for]
///
/// # Returns
///
/// The number of complete [colors](Color).
pub fn complete_colors(wall: &Wall) -> usize {
    Color::colors()
        .into_iter()
        .filter(|&color| {
            Row::rows()
                .into_iter()
                .all(|row| wall.is_occupied((row, column_for(row, color))))
        })
        .count()
}

/// # Returns
///
/// [Complete rows](complete_rows), [complete columns](complete_columns) and
/// [complete colors](complete_colors) counted together.
pub fn endgame_counts(wall: &Wall) -> EndgameCounts {
    EndgameCounts {
        rows: complete_rows(wall),
        columns: complete_columns(wall),
        colors: complete_colors(wall),
    }
}
