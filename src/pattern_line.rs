use crate::{column_for, Color, Coordinate, Row, Wall, WallError, PATTERN_LINES_LEN};
use std::cmp;
use std::collections::HashSet;

/// A vector of [pattern lines](PatternLine) for one player, where the line at each index
/// belongs to the [row](Row::index) with that index.
///
/// # See Also
///
/// * [new_pattern_lines]
/// * [legal_pattern_line_row](crate::legal_pattern_line_row)
/// * [legal_moves](crate::legal_moves)
pub type PatternLines = [PatternLine; PATTERN_LINES_LEN];

/// # Returns
///
/// [Pattern lines](PatternLines) where every line is empty, in the order of
/// [Row::rows].
#[inline]
pub fn new_pattern_lines() -> PatternLines {
    Row::rows().map(PatternLine::new)
}

/// Owns the tiles staged in one [row](Row) before they move to the [wall](Wall). A line holds
/// up to [its capacity](PatternLine::capacity) tiles which all share one [color](Color).
///
/// A line is created for one row and keeps it, so its capacity and its cell on the wall
/// never depend on the caller.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct PatternLine {
    /// The row of the line, which sets its capacity and its cells on the wall.
    row: Row,
    /// The color of every tile in the line, or [None] when the line is empty.
    color: Option<Color>,
    /// The number of tiles in the line, never more than its capacity.
    len: usize,
}

/// Describes the reasons why [`PatternLine::add_tiles`] could not be executed.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum AddTilesError {
    /// Attempting to add no tiles.
    NoTiles,
    /// Attempting to add tiles of a different color than the tiles already in the line.
    ColorMismatch {
        /// The color of the tiles already in the line.
        assigned: Color,
        /// The color of the tiles being added.
        requested: Color,
    },
    /// Attempting to add tiles whose cell on the [wall](Wall) is already occupied.
    WallOccupied(Coordinate),
}

/// Describes the reasons why [`PatternLine::flush`] could not be executed.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum FlushError {
    /// Attempting to flush a line which is not full.
    Incomplete {
        /// The number of tiles in the line.
        len: usize,
        /// The number of tiles the line holds when full.
        capacity: usize,
    },
    /// Attempting to flush onto a cell of the [wall](Wall) which could not be occupied.
    Wall(WallError),
}

/// The result of moving a full [pattern line](PatternLine) to the [wall](Wall).
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Flush {
    /// The cell on the wall which was occupied. Pass to
    /// [score_for_placement](crate::score_for_placement) for the earned points.
    pub coordinate: Coordinate,
    /// The color of the tile moved to the wall.
    pub color: Color,
    /// The number of remaining tiles from the line which leave the player's board.
    pub discarded: usize,
}

impl PatternLine {
    /// # Returns
    ///
    /// An empty line for `row`.
    #[inline]
    pub fn new(row: Row) -> PatternLine {
        PatternLine {
            row,
            color: None,
            len: 0,
        }
    }

    /// # Returns
    ///
    /// The row of the line.
    #[inline]
    pub fn row(&self) -> Row {
        self.row
    }

    /// # Returns
    ///
    /// The number of tiles the line holds when full, one more than the index of its row.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.row.index() + 1
    }

    /// # Returns
    ///
    /// The color of every tile in the line, or [None] when the line is empty.
    #[inline]
    pub fn color(&self) -> Option<Color> {
        self.color
    }

    /// # Returns
    ///
    /// The number of tiles in the line.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// # Returns
    ///
    /// Whether the line holds no tiles.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// # Returns
    ///
    /// Whether the line holds [as many tiles as it can](PatternLine::capacity).
    #[inline]
    pub fn is_complete(&self) -> bool {
        self.len == self.capacity()
    }

    /// Checks whether the tiles match various error conditions and returns all found errors.
    /// Otherwise, adds as many `tiles` of `color` as the line has room for and assigns
    /// `color` to the line if it was empty.
    ///
    /// Adding to a full line is allowed, in which case every tile overflows.
    ///
    /// # Arguments
    ///
    /// * `color`: The color of every added tile.
    /// * `tiles`: The number of added tiles.
    /// * `wall`: The wall of the player owning this line.
    ///
    /// # Errors
    ///
    /// * [`AddTilesError::NoTiles`] Attempting to add no tiles.
    /// * [`AddTilesError::ColorMismatch`] Attempting to add tiles of a different color than
    /// the tiles already in the line.
    /// * [`AddTilesError::WallOccupied`] Attempting to add tiles whose cell on the wall is
    /// already occupied.
    ///
    /// # See Also
    ///
    /// * [legal_pattern_line_row](crate::legal_pattern_line_row)
    ///
    /// # Returns
    ///
    /// The number of tiles which did not fit and must go to the player's floor.
    pub fn add_tiles(
        &mut self,
        color: Color,
        tiles: usize,
        wall: &Wall,
    ) -> Result<usize, HashSet<AddTilesError>> {
        self.check_add_tiles(color, tiles, wall)?;

        let added = cmp::min(self.capacity() - self.len, tiles);
        self.color = Some(color);
        self.len += added;

        let overflow = tiles - added;
        log::trace!(
            "added {} {:?} tiles to row {:?}, {} overflow",
            added,
            color,
            self.row,
            overflow
        );
        Ok(overflow)
    }

    /// Checks whether the tiles match various error conditions and returns all found errors.
    ///
    /// # Errors
    ///
    /// * [`AddTilesError::NoTiles`] Attempting to add no tiles.
    /// * Every error of [PatternLine::placement_errors].
    fn check_add_tiles(
        &self,
        color: Color,
        tiles: usize,
        wall: &Wall,
    ) -> Result<(), HashSet<AddTilesError>> {
        let mut errors = self.placement_errors(color, wall);
        if tiles == 0 {
            errors.insert(AddTilesError::NoTiles);
        }

        if !errors.is_empty() {
            return Err(errors);
        }

        Ok(())
    }

    /// Finds every reason why tiles of `color` may not be put on the line, regardless of how
    /// many of them fit.
    ///
    /// # Errors
    ///
    /// * [`AddTilesError::ColorMismatch`] The line already holds tiles of another color.
    /// * [`AddTilesError::WallOccupied`] The cell where `color` belongs in the row of the
    /// line is already occupied.
    pub(crate) fn placement_errors(&self, color: Color, wall: &Wall) -> HashSet<AddTilesError> {
        let mut errors = HashSet::with_capacity(3);
        if let Some(assigned) = self.color.filter(|&assigned| assigned != color) {
            errors.insert(AddTilesError::ColorMismatch {
                assigned,
                requested: color,
            });
        }

        let coordinate = (self.row, column_for(self.row, color));
        if wall.is_occupied(coordinate) {
            errors.insert(AddTilesError::WallOccupied(coordinate));
        }

        errors
    }

    /// Moves one tile from the full line onto its cell on `wall`, discards the rest, and
    /// empties the line.
    ///
    /// # Errors
    ///
    /// * [`FlushError::Incomplete`] Attempting to flush a line which is not full.
    /// * [`FlushError::Wall`] Attempting to flush onto a cell of the wall which could not be
    /// occupied. The line is left unchanged.
    ///
    /// # See Also
    ///
    /// * [Wall::occupy]
    /// * [score_for_placement](crate::score_for_placement)
    pub fn flush(&mut self, wall: &mut Wall) -> Result<Flush, FlushError> {
        let capacity = self.capacity();
        let Some(color) = self.color.filter(|_| self.is_complete()) else {
            return Err(FlushError::Incomplete {
                len: self.len,
                capacity,
            });
        };

        let coordinate = (self.row, column_for(self.row, color));
        wall.occupy(coordinate).map_err(FlushError::Wall)?;
        *self = PatternLine::new(self.row);

        log::debug!("flushed {:?} row {:?} to {:?}", color, self.row, coordinate);
        Ok(Flush {
            coordinate,
            color,
            discarded: capacity - 1,
        })
    }
}
