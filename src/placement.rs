use crate::{Color, Factory, Moves, PatternLines, Row, Wall, PATTERN_LINES_LEN};
use itertools::Itertools;
use smallvec::SmallVec;
use std::iter;

/// Where the tiles of a [move](Move) are taken from.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum Source {
    /// The factory at this index in [Factories](crate::Factories).
    Factory(usize),
    /// The center of the table.
    Center,
}

/// Where the tiles of a [move](Move) are put.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum Destination {
    /// The [pattern line](crate::PatternLine) at this row.
    PatternLine(Row),
    /// The player's floor, which accepts any tiles.
    Floor,
}

/// Takes every tile of `color` from `source` and puts them on `destination`.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Move {
    /// Where the tiles are taken from.
    pub source: Source,
    /// The color of every taken tile.
    pub color: Color,
    /// Where the tiles are put.
    pub destination: Destination,
}

/// Describes the reason why [`legal_moves`] could not be executed.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum MovesError {
    /// Attempting to find moves for a color which no factory and not the center offers.
    ColorUnavailable(Color),
}

/// Whether tiles of `color` may be put on the [pattern line](crate::PatternLine) at `row`.
///
/// The line must be either empty or already hold `color`, and the cell where `color` belongs
/// in `row` on the wall must be empty. How many tiles fit is not checked since tiles which do
/// not fit overflow to the floor.
///
/// # See Also
///
/// * [column_for](crate::column_for)
/// * [PatternLine::add_tiles](crate::PatternLine::add_tiles)
pub fn legal_pattern_line_row(
    row: Row,
    color: Color,
    pattern_lines: &PatternLines,
    wall: &Wall,
) -> bool {
    pattern_lines[row.index()]
        .placement_errors(color, wall)
        .is_empty()
}

/// # Returns
///
/// Every [row](Row) from top to bottom where
/// [`color` may be put](legal_pattern_line_row).
pub fn legal_rows<'a>(
    color: Color,
    pattern_lines: &'a PatternLines,
    wall: &'a Wall,
) -> impl Iterator<Item = Row> + 'a {
    Row::rows()
        .into_iter()
        .filter(move |&row| legal_pattern_line_row(row, color, pattern_lines, wall))
}

/// Finds every [move](Move) taking `color` from each factory or the center which offers
/// it. Each source is paired with every [legal row](legal_pattern_line_row) and always with
/// the [floor](Destination::Floor), even when no row is legal.
///
/// # Arguments
///
/// * `color`: The color of the taken tiles.
/// * `factories`: Every factory in the game.
/// * `center`: The tiles in the center of the table.
/// * `pattern_lines`: The pattern lines of the current player.
/// * `wall`: The wall of the current player.
///
/// # Errors
///
/// * [`MovesError::ColorUnavailable`] Attempting to find moves for a color which no factory
/// and not the center offers.
///
/// # Returns
///
/// An ordered set of every legal [move](Move) for `color`.
pub fn legal_moves(
    color: Color,
    factories: &[Factory],
    center: &[Color],
    pattern_lines: &PatternLines,
    wall: &Wall,
) -> Result<Moves, MovesError> {
    let sources = factories
        .iter()
        .positions(|factory| factory.contains(&color))
        .map(Source::Factory)
        .chain(center.contains(&color).then_some(Source::Center));

    let destinations: SmallVec<[Destination; PATTERN_LINES_LEN + 1]> =
        legal_rows(color, pattern_lines, wall)
            .map(Destination::PatternLine)
            .chain(iter::once(Destination::Floor))
            .collect();

    let moves: Moves = sources
        .cartesian_product(destinations.iter().copied())
        .map(|(source, destination)| Move {
            source,
            color,
            destination,
        })
        .collect();

    // destinations always hold the floor, so only missing sources leave no moves
    if moves.is_empty() {
        return Err(MovesError::ColorUnavailable(color));
    }

    log::trace!("found {} legal moves for {:?}", moves.len(), color);
    Ok(moves)
}
